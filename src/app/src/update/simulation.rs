use crux_core::{render::render, Command};
use rand::seq::IndexedRandom;

use crate::events::{Event, SimulationEvent};
use crate::model::{Model, TimerPurpose};
use crate::types::{GpiInput, GpiStatus};
use crate::Effect;

use super::timer::{cancel, schedule};

/// Uniformly chosen slot out of `candidates`
pub fn pick_input(candidates: &[GpiInput]) -> Option<GpiInput> {
    let mut rng = rand::rng();
    candidates.choose(&mut rng).copied()
}

/// Handle simulated device activity
pub fn handle(event: SimulationEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        SimulationEvent::ActivityRequested { input } => start_activity(input, model),
    }
}

/// Simulator heartbeat; every `activity_every_ticks` ticks one enabled slot
/// becomes active
pub fn handle_tick(model: &mut Model) -> Command<Effect, Event> {
    let mut commands = Vec::new();

    if model.tick_count % model.settings.activity_every_ticks.max(1) == 0 {
        if let Some(input) = pick_input(&model.config.gpi.enabled_inputs()) {
            commands.push(start_activity(input, model));
        }
    }
    model.tick_count += 1;

    let interval = model.settings.tick_interval_ms;
    commands.push(schedule(model, TimerPurpose::Tick, interval));
    Command::all(commands)
}

fn start_activity(input: GpiInput, model: &mut Model) -> Command<Effect, Event> {
    let slot = model.config.gpi.input_mut(input);
    if slot.is_disabled() {
        log::debug!("GPI Input {input} is disabled, no activity");
        return Command::done();
    }
    slot.status = GpiStatus::Active;
    log::debug!("GPI Input {input} active");

    let previous = model
        .scheduler
        .cancel_matching(|purpose| *purpose == TimerPurpose::ActivityEnd(input));
    let duration = model.settings.activity_duration_ms;

    Command::all([
        cancel(previous),
        render(),
        schedule(model, TimerPurpose::ActivityEnd(input), duration),
    ])
}

/// Revert a slot after its activity window unless its mode changed meanwhile
pub fn end_activity(input: GpiInput, model: &mut Model) -> Command<Effect, Event> {
    let slot = model.config.gpi.input_mut(input);
    if slot.status != GpiStatus::Active {
        return Command::done();
    }
    slot.status = GpiStatus::for_mode(slot.mode);
    render()
}
