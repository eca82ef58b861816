use crux_core::{render::render, Command};

use crate::events::{Event, UiEvent};
use crate::model::{Model, TimerPurpose};
use crate::types::{Severity, Toast, ToastId};
use crate::update_field;
use crate::Effect;

use super::timer::{cancel, schedule};

/// Show a toast and schedule its dismissal
pub fn notify(
    model: &mut Model,
    message: impl Into<String>,
    severity: Severity,
) -> Command<Effect, Event> {
    let id = model.push_toast(message.into(), severity);
    let duration = model.settings.toast_duration_ms;
    Command::all([render(), schedule(model, TimerPurpose::ToastExpiry(id), duration)])
}

/// Auto-dismiss of a toast
pub fn expire_toast(id: ToastId, model: &mut Model) -> Command<Effect, Event> {
    if model.remove_toast(id) {
        render()
    } else {
        Command::done()
    }
}

/// Handle UI-related events (dismiss toasts)
pub fn handle(event: UiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        UiEvent::DismissToast { id } => {
            let expiry = model
                .scheduler
                .cancel_matching(|purpose| *purpose == TimerPurpose::ToastExpiry(id));
            Command::all([cancel(expiry), expire_toast(id, model)])
        }
        UiEvent::ClearToasts => {
            let expiry = model
                .scheduler
                .cancel_matching(|purpose| matches!(purpose, TimerPurpose::ToastExpiry(_)));
            Command::all([cancel(expiry), update_field!(model.toasts, Vec::<Toast>::new())])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_schedules_expiry() {
        let mut model = Model::default();

        let _ = notify(&mut model, "Configuration saved to device", Severity::Success);

        assert_eq!(model.toasts.len(), 1);
        let toast = &model.toasts[0];
        assert_eq!(toast.severity, Severity::Success);
        assert!(model
            .scheduler
            .find(TimerPurpose::ToastExpiry(toast.id))
            .is_some());
    }

    #[test]
    fn toasts_stack_without_coalescing() {
        let mut model = Model::default();

        let _ = notify(&mut model, "OSC configuration updated", Severity::Success);
        let _ = notify(&mut model, "OSC configuration updated", Severity::Success);

        assert_eq!(model.toasts.len(), 2);
        assert_eq!(model.scheduler.len(), 2);
    }

    #[test]
    fn dismiss_removes_toast_and_its_timer() {
        let mut model = Model::default();
        let _ = notify(&mut model, "first", Severity::Info);
        let _ = notify(&mut model, "second", Severity::Error);
        let first = model.toasts[0].id;

        let _ = handle(UiEvent::DismissToast { id: first }, &mut model);

        assert_eq!(model.toasts.len(), 1);
        assert_eq!(model.toasts[0].message, "second");
        assert!(model.scheduler.find(TimerPurpose::ToastExpiry(first)).is_none());
    }

    #[test]
    fn clear_removes_all_toasts() {
        let mut model = Model::default();
        let _ = notify(&mut model, "first", Severity::Info);
        let _ = notify(&mut model, "second", Severity::Info);

        let _ = handle(UiEvent::ClearToasts, &mut model);

        assert!(model.toasts.is_empty());
        assert!(model.scheduler.is_empty());
    }
}
