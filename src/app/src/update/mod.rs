mod config;
mod panel;
mod simulation;
mod timer;
mod ui;
mod validation;

pub use config::{reset, update_dmx, update_gpi, update_midi, update_osc};
pub use simulation::pick_input;
pub use timer::{cancel, schedule};
pub use ui::notify;
pub use validation::check_field;

use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::{Model, TimerPurpose};
use crate::settings::PanelSettings;
use crate::types::{GpiInput, GpiStatus, Severity};
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize { settings } => initialize(settings, model),
        Event::Shutdown => shutdown(model),
        Event::Config(event) => config::handle(event, model),
        Event::Panel(event) => panel::handle(event, model),
        Event::Simulation(event) => simulation::handle(event, model),
        Event::Ui(event) => ui::handle(event, model),
        Event::Timer(output) => timer::handle(output, model),
    }
}

fn initialize(settings: Option<PanelSettings>, model: &mut Model) -> Command<Effect, Event> {
    if model.is_initialized {
        log::warn!("Panel already initialized, ignoring");
        return Command::done();
    }
    model.is_initialized = true;

    let mut commands = Vec::new();

    match settings.map(PanelSettings::checked).transpose() {
        Ok(Some(settings)) => model.settings = settings,
        Ok(None) => {}
        Err(e) => {
            log::error!("{e}, falling back to defaults");
            commands.push(notify(model, e, Severity::Error));
        }
    }

    if model.settings.simulate_activity {
        let interval = model.settings.tick_interval_ms;
        commands.push(schedule(model, TimerPurpose::Tick, interval));
    }

    log::info!("Lightly device configuration UI initialized");
    commands.push(render());
    Command::all(commands)
}

fn shutdown(model: &mut Model) -> Command<Effect, Event> {
    let pending = model.scheduler.cancel_all();
    log::info!("Shutting down, cancelling {} pending timer(s)", pending.len());

    model.is_initialized = false;
    model.is_saving = false;
    model.pending_save = None;
    model.toasts.clear();
    model.last_rejected = None;

    // No revert is pending any more, so nothing may stay active
    for input in GpiInput::ALL {
        let slot = model.config.gpi.input_mut(input);
        slot.status = GpiStatus::for_mode(slot.mode);
    }

    Command::all([cancel(pending), render()])
}
