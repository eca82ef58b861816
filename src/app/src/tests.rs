use super::*;
use crate::events::{PanelEvent, SimulationEvent, UiEvent};
use crate::model::TimerPurpose;
use crux_core::testing::AppTester;

fn elapsed(model: &Model, purpose: TimerPurpose) -> Event {
    let id = model.scheduler.find(purpose).expect("timer is scheduled");
    Event::Timer(TimerOutput::Elapsed { id })
}

#[test]
fn test_initialize_starts_simulator() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _command = app.update(Event::Initialize { settings: None }, &mut model);

    assert!(model.is_initialized);
    assert!(model.scheduler.find(TimerPurpose::Tick).is_some());
    assert_eq!(model.config, DeviceConfiguration::default());
}

#[test]
fn test_initialize_twice_is_ignored() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _command = app.update(Event::Initialize { settings: None }, &mut model);
    let _command = app.update(Event::Initialize { settings: None }, &mut model);

    assert_eq!(model.scheduler.len(), 1);
}

#[test]
fn test_initialize_without_simulation() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();
    let settings = PanelSettings {
        simulate_activity: false,
        ..Default::default()
    };

    let _command = app.update(
        Event::Initialize {
            settings: Some(settings),
        },
        &mut model,
    );

    assert!(model.scheduler.is_empty());
}

#[test]
fn test_invalid_settings_fall_back_to_defaults() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();
    let settings = PanelSettings {
        tick_interval_ms: 0,
        ..Default::default()
    };

    let _command = app.update(
        Event::Initialize {
            settings: Some(settings),
        },
        &mut model,
    );

    assert_eq!(model.settings, PanelSettings::default());
    assert_eq!(model.toasts[0].severity, Severity::Error);
}

#[test]
fn test_field_change_updates_view() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let event = Event::field_changed("dmx1-port", FieldInput::text("6455")).unwrap();
    let _command = app.update(event, &mut model);

    let view = app.view(&model);
    assert_eq!(view.config.dmx.universe1.port, Some(6455));
    assert!(view.form_fields.contains(&FormField {
        element_id: "dmx1-port".to_string(),
        value: FieldInput::text("6455"),
    }));
    assert_eq!(view.toasts[0].message, "DMX universe1 port updated");
}

#[test]
fn test_blur_flags_invalid_field_in_view() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let event = Event::field_blurred("osc-target-ip", "192.168.1").unwrap();
    let _command = app.update(event, &mut model);

    let view = app.view(&model);
    assert_eq!(
        view.field_validity.get("osc-target-ip"),
        Some(&FieldValidity::Invalid)
    );
    assert_eq!(view.toasts[0].message, "Invalid IP address format");
}

#[test]
fn test_unknown_element_id_is_rejected() {
    assert!(Event::field_changed("dmx3-ip", FieldInput::text("10.0.0.1")).is_err());
    assert!(Event::field_blurred("", "x").is_err());
}

#[test]
fn test_toast_expires() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let event = Event::field_changed("midi-enabled", FieldInput::Checked(false)).unwrap();
    let _command = app.update(event, &mut model);
    let id = model.toasts[0].id;

    let _command = app.update(elapsed(&model, TimerPurpose::ToastExpiry(id)), &mut model);

    assert!(model.toasts.is_empty());
}

#[test]
fn test_dismissed_toast_expiry_is_stale() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let event = Event::field_changed("midi-device", FieldInput::text("usb")).unwrap();
    let _command = app.update(event, &mut model);
    let id = model.toasts[0].id;
    let expiry = elapsed(&model, TimerPurpose::ToastExpiry(id));

    let _command = app.update(Event::Ui(UiEvent::DismissToast { id }), &mut model);
    let before = model.clone();
    let _command = app.update(expiry, &mut model);

    assert_eq!(model, before);
}

#[test]
fn test_save_flow() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _command = app.update(Event::Panel(PanelEvent::Save), &mut model);
    assert!(app.view(&model).is_saving);

    let _command = app.update(elapsed(&model, TimerPurpose::SaveComplete), &mut model);

    let view = app.view(&model);
    assert!(!view.is_saving);
    assert_eq!(view.save_button_label, "Save Configuration");
    assert_eq!(view.toasts[0].message, "Configuration saved to device");
}

#[test]
fn test_reset_after_confirmation() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let event = Event::field_changed("gpi4-mode", FieldInput::text("disabled")).unwrap();
    let _command = app.update(event, &mut model);
    assert_eq!(model.config.gpi.input4.status, GpiStatus::Disabled);

    let _command = app.update(
        Event::Panel(PanelEvent::ResetConfirmation(DialogOutput::Confirmed)),
        &mut model,
    );

    assert_eq!(model.config, DeviceConfiguration::default());
}

#[test]
fn test_shutdown_cancels_everything() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _command = app.update(Event::Initialize { settings: None }, &mut model);
    let _command = app.update(Event::Panel(PanelEvent::Save), &mut model);
    let _command = app.update(
        Event::Simulation(SimulationEvent::ActivityRequested {
            input: GpiInput::One,
        }),
        &mut model,
    );
    let save = elapsed(&model, TimerPurpose::SaveComplete);

    let _command = app.update(Event::Shutdown, &mut model);

    assert!(model.scheduler.is_empty());
    assert!(!model.is_saving);

    let _command = app.update(save, &mut model);
    assert!(model
        .toasts
        .iter()
        .all(|toast| toast.message != "Configuration saved to device"));
}

#[test]
fn test_restart_after_shutdown_shows_no_stale_activity() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _command = app.update(Event::Initialize { settings: None }, &mut model);
    let _command = app.update(
        Event::Simulation(SimulationEvent::ActivityRequested {
            input: GpiInput::Two,
        }),
        &mut model,
    );
    assert_eq!(model.config.gpi.input2.status, GpiStatus::Active);

    let _command = app.update(Event::Shutdown, &mut model);
    let _command = app.update(Event::Initialize { settings: None }, &mut model);

    let view = app.view(&model);
    assert_eq!(view.config.gpi.input2.status, GpiStatus::Inactive);
    assert_eq!(view.config.gpi.input3.status, GpiStatus::Disabled);
    assert!(view.gpi_indicators.iter().all(|indicator| !indicator.online));
    assert!(view.toasts.is_empty());
}

#[test]
fn test_shutdown_drops_toasts_whose_expiry_was_cancelled() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let event = Event::field_changed("midi-channel", FieldInput::text("3")).unwrap();
    let _command = app.update(event, &mut model);
    assert_eq!(model.toasts.len(), 1);

    let _command = app.update(Event::Shutdown, &mut model);

    assert!(model.toasts.is_empty());
    assert!(model.scheduler.is_empty());
}

#[test]
fn test_export_json_matches_view_config() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let event = Event::field_changed("osc-listen-port", FieldInput::text("abc")).unwrap();
    let _command = app.update(event, &mut model);

    let json = app.view(&model).config.export_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["osc"]["listenPort"].is_null());
    assert_eq!(value["osc"]["targetPort"], 9000);
}
