use crux_core::Command;

use crate::events::{ConfigEvent, Event};
use crate::model::Model;
use crate::types::*;
use crate::Effect;

use super::ui::notify;
use super::validation::{check_field, handle_field_blurred};

/// Write a DMX universe field. `port` is coerced to an integer, nothing is
/// range checked.
pub fn update_dmx(
    config: &mut DeviceConfiguration,
    universe: Universe,
    field: DmxField,
    raw: &str,
) -> Result<(), String> {
    let dmx = config.dmx.universe_mut(universe);
    match field {
        DmxField::Ip => dmx.ip = raw.to_string(),
        DmxField::Port => dmx.port = parse_int(raw),
        DmxField::Direction => dmx.direction = raw.parse()?,
    }
    Ok(())
}

pub fn update_osc(
    config: &mut DeviceConfiguration,
    field: OscField,
    value: &FieldInput,
) -> Result<(), String> {
    let osc = &mut config.osc;
    match field {
        OscField::Enabled => osc.enabled = flag(value)?,
        OscField::ListenPort => osc.listen_port = parse_int(&value.as_text()),
        OscField::TargetIp => osc.target_ip = value.as_text(),
        OscField::TargetPort => osc.target_port = parse_int(&value.as_text()),
    }
    Ok(())
}

pub fn update_midi(
    config: &mut DeviceConfiguration,
    field: MidiField,
    value: &FieldInput,
) -> Result<(), String> {
    let midi = &mut config.midi;
    match field {
        MidiField::Enabled => midi.enabled = flag(value)?,
        MidiField::Channel => midi.channel = parse_int(&value.as_text()),
        MidiField::Device => midi.device = value.as_text(),
    }
    Ok(())
}

/// Write a GPI slot field; a mode change re-derives the slot status
pub fn update_gpi(
    config: &mut DeviceConfiguration,
    input: GpiInput,
    field: GpiField,
    value: &str,
) -> Result<(), String> {
    let gpi = config.gpi.input_mut(input);
    match field {
        GpiField::Mode => gpi.set_mode(value.parse()?),
        GpiField::Action => gpi.action = value.parse()?,
    }
    Ok(())
}

/// Replace the whole configuration with the defaults
pub fn reset(config: &mut DeviceConfiguration) {
    *config = DeviceConfiguration::default();
}

fn flag(value: &FieldInput) -> Result<bool, String> {
    value
        .as_flag()
        .ok_or_else(|| format!("Expected a checkbox state, got '{}'", value.as_text()))
}

/// Handle form control events
pub fn handle(event: ConfigEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        ConfigEvent::FieldChanged { field, value } => handle_field_changed(field, value, model),
        ConfigEvent::FieldBlurred { field, value } => handle_field_blurred(field, value, model),
    }
}

fn handle_field_changed(
    field: FieldKey,
    value: FieldInput,
    model: &mut Model,
) -> Command<Effect, Event> {
    if model.settings.enforce_validation {
        match check_field(field, &value.as_text()) {
            Some(Err(message)) => {
                log::warn!("Rejected value '{}' for {field}", value.as_text());
                model.field_validity.insert(field, FieldValidity::Invalid);
                model.last_rejected = Some((field, value.as_text()));
                return notify(model, message, Severity::Error);
            }
            Some(Ok(())) => {
                model.field_validity.insert(field, FieldValidity::Valid);
            }
            None => {}
        }
    }
    model.last_rejected = None;

    let config = &mut model.config;
    let result = match field {
        FieldKey::Dmx { universe, field } => update_dmx(config, universe, field, &value.as_text())
            .map(|()| {
                log::info!("DMX config updated: {:?}", config.dmx);
                let property = match field {
                    DmxField::Ip => "ip",
                    DmxField::Port => "port",
                    DmxField::Direction => "direction",
                };
                format!("DMX {} {property} updated", universe.key())
            }),
        FieldKey::Osc(field) => update_osc(config, field, &value).map(|()| {
            log::info!("OSC config updated: {:?}", config.osc);
            "OSC configuration updated".to_string()
        }),
        FieldKey::Midi(field) => update_midi(config, field, &value).map(|()| {
            log::info!("MIDI config updated: {:?}", config.midi);
            "MIDI configuration updated".to_string()
        }),
        FieldKey::Gpi { input, field } => update_gpi(config, input, field, &value.as_text())
            .map(|()| {
                log::info!("GPI config updated: {:?}", config.gpi);
                let property = match field {
                    GpiField::Mode => "mode",
                    GpiField::Action => "action",
                };
                format!("GPI Input {input} {property} updated")
            }),
    };

    match result {
        Ok(message) => notify(model, message, Severity::Success),
        Err(e) => {
            log::warn!("Ignoring change of {field}: {e}");
            notify(model, e, Severity::Error)
        }
    }
}
