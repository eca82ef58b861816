use crux_core::Command;

use crate::commands::timer::{TimerId, TimerOutput};
use crate::events::Event;
use crate::model::{Model, TimerPurpose};
use crate::{Effect, TimerCmd};

use super::{panel, simulation, ui};

/// Register a timer for `purpose` and ask the Shell to run it
pub fn schedule(model: &mut Model, purpose: TimerPurpose, millis: u64) -> Command<Effect, Event> {
    let id = model.scheduler.register(purpose);
    log::debug!("Scheduling timer {id} ({purpose:?}) in {millis} ms");
    TimerCmd::start(id, millis).then_send(Event::Timer)
}

/// Ask the Shell to drop timers already removed from the scheduler
pub fn cancel(ids: Vec<TimerId>) -> Command<Effect, Event> {
    Command::all(ids.into_iter().map(TimerCmd::cancel))
}

/// Route a timer result to the task that scheduled it
pub fn handle(output: TimerOutput, model: &mut Model) -> Command<Effect, Event> {
    let id = output.id();
    if let TimerOutput::Cancelled { .. } = output {
        if model.scheduler.take(id).is_some() {
            log::warn!("Timer {id} cancelled by the Shell");
        } else {
            log::debug!("Timer {id} cancelled");
        }
        return Command::done();
    }

    match model.scheduler.take(id) {
        Some(TimerPurpose::Tick) => simulation::handle_tick(model),
        Some(TimerPurpose::ToastExpiry(toast)) => ui::expire_toast(toast, model),
        Some(TimerPurpose::ActivityEnd(input)) => simulation::end_activity(input, model),
        Some(TimerPurpose::SaveComplete) => panel::complete_save(model),
        None => {
            log::debug!("Ignoring stale timer {id}");
            Command::done()
        }
    }
}
