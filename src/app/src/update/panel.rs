use crux_core::{render::render, Command};

use crate::commands::dialog::DialogOutput;
use crate::commands::download::DownloadOutput;
use crate::events::{Event, PanelEvent};
use crate::model::{Model, TimerPurpose};
use crate::settings::{EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
use crate::types::Severity;
use crate::{DialogCmd, DownloadCmd, Effect};

use super::config::reset;
use super::timer::{cancel, schedule};
use super::ui::notify;

pub const RESET_PROMPT: &str = "Are you sure you want to reset all settings to defaults?";

/// Handle save / export / reset
pub fn handle(event: PanelEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        PanelEvent::Save => start_save(model),
        PanelEvent::Export => export(model),
        PanelEvent::ExportResponse(output) => handle_export_response(output, model),
        PanelEvent::Reset => {
            DialogCmd::confirm(RESET_PROMPT).then_send(|output| {
                Event::Panel(PanelEvent::ResetConfirmation(output))
            })
        }
        PanelEvent::ResetConfirmation(output) => handle_reset_confirmation(output, model),
    }
}

fn start_save(model: &mut Model) -> Command<Effect, Event> {
    if model.is_saving {
        log::debug!("Save already in progress, ignoring");
        return Command::done();
    }

    model.is_saving = true;
    model.pending_save = Some(model.config.clone());

    let delay = model.settings.save_delay_ms;
    Command::all([render(), schedule(model, TimerPurpose::SaveComplete, delay)])
}

/// The simulated device write finished
pub fn complete_save(model: &mut Model) -> Command<Effect, Event> {
    model.is_saving = false;
    let saved = model.pending_save.take().unwrap_or_else(|| model.config.clone());

    match saved.export_json() {
        Ok(json) => log::info!("Full configuration saved: {json}"),
        Err(e) => log::error!("Failed to serialize saved configuration: {e}"),
    }

    notify(model, "Configuration saved to device", Severity::Success)
}

fn export(model: &mut Model) -> Command<Effect, Event> {
    match model.config.export_json() {
        Ok(json) => DownloadCmd::save(EXPORT_FILE_NAME, EXPORT_MIME_TYPE, &json)
            .then_send(|output| Event::Panel(PanelEvent::ExportResponse(output))),
        Err(e) => {
            log::error!("Failed to serialize configuration: {e}");
            notify(model, format!("Export failed: {e}"), Severity::Error)
        }
    }
}

fn handle_export_response(output: DownloadOutput, model: &mut Model) -> Command<Effect, Event> {
    match output {
        DownloadOutput::Completed => {
            log::info!("Configuration exported as {EXPORT_FILE_NAME}");
            notify(model, "Configuration exported successfully", Severity::Success)
        }
        DownloadOutput::Failed { message } => {
            log::error!("Export download failed: {message}");
            notify(model, format!("Export failed: {message}"), Severity::Error)
        }
    }
}

fn handle_reset_confirmation(output: DialogOutput, model: &mut Model) -> Command<Effect, Event> {
    if output == DialogOutput::Declined {
        log::debug!("Reset declined");
        return Command::done();
    }

    let activity = model
        .scheduler
        .cancel_matching(|purpose| matches!(purpose, TimerPurpose::ActivityEnd(_)));
    reset(&mut model.config);
    model.field_validity.clear();
    model.last_rejected = None;
    log::info!("Configuration reset to defaults");

    Command::all([
        cancel(activity),
        notify(model, "Configuration reset to defaults", Severity::Info),
    ])
}
