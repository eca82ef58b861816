use anyhow::Result;
use crux_core::typegen::TypeGen;
use lightly_ui_core::{
    events::{ConfigEvent, PanelEvent, SimulationEvent, UiEvent},
    types::{
        DmxDirection, DmxField, FieldInput, FieldKey, FieldValidity, GpiAction, GpiField,
        GpiInput, GpiMode, GpiStatus, MidiField, OscField, Severity, Universe,
    },
    App, DialogOutput, DownloadOutput, TimerOutput,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut typegen = TypeGen::new();

    typegen.register_app::<App>()?;

    // Explicitly register domain event enums to ensure all variants are traced
    typegen.register_type::<ConfigEvent>()?;
    typegen.register_type::<PanelEvent>()?;
    typegen.register_type::<SimulationEvent>()?;
    typegen.register_type::<UiEvent>()?;

    // Form addressing
    typegen.register_type::<FieldKey>()?;
    typegen.register_type::<DmxField>()?;
    typegen.register_type::<OscField>()?;
    typegen.register_type::<MidiField>()?;
    typegen.register_type::<GpiField>()?;
    typegen.register_type::<FieldInput>()?;

    // Configuration options and view enums
    typegen.register_type::<Universe>()?;
    typegen.register_type::<GpiInput>()?;
    typegen.register_type::<DmxDirection>()?;
    typegen.register_type::<GpiMode>()?;
    typegen.register_type::<GpiAction>()?;
    typegen.register_type::<GpiStatus>()?;
    typegen.register_type::<Severity>()?;
    typegen.register_type::<FieldValidity>()?;

    // Shell answers to effects
    typegen.register_type::<TimerOutput>()?;
    typegen.register_type::<DialogOutput>()?;
    typegen.register_type::<DownloadOutput>()?;

    let output_root = PathBuf::from("./generated");

    typegen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
