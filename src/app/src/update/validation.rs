use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::Model;
use crate::types::*;
use crate::Effect;

use super::ui::notify;

pub const INVALID_IP_MESSAGE: &str = "Invalid IP address format";
pub const INVALID_PORT_MESSAGE: &str = "Port must be between 1 and 65535";

/// Check raw text against the rule of `field`.
///
/// Returns `None` for fields without a rule, otherwise the message to show
/// for an invalid value.
pub fn check_field(field: FieldKey, raw: &str) -> Option<Result<(), &'static str>> {
    match field.kind() {
        FieldKind::IpAddress => Some(if is_valid_ip(raw) {
            Ok(())
        } else {
            Err(INVALID_IP_MESSAGE)
        }),
        FieldKind::Port => Some(if is_valid_port(raw) {
            Ok(())
        } else {
            Err(INVALID_PORT_MESSAGE)
        }),
        FieldKind::Unchecked => None,
    }
}

/// Blur-time validation: flags the field and warns, never touches the configuration
pub fn handle_field_blurred(
    field: FieldKey,
    value: String,
    model: &mut Model,
) -> Command<Effect, Event> {
    let just_rejected = model
        .last_rejected
        .take()
        .is_some_and(|(rejected, text)| rejected == field && text == value);

    match check_field(field, &value) {
        None => Command::done(),
        Some(Err(_)) if just_rejected => {
            model.field_validity.insert(field, FieldValidity::Invalid);
            render()
        }
        Some(Ok(())) => {
            model.field_validity.insert(field, FieldValidity::Valid);
            render()
        }
        Some(Err(message)) => {
            log::warn!("Invalid value '{value}' for {field}");
            model.field_validity.insert(field, FieldValidity::Invalid);
            notify(model, message, Severity::Error)
        }
    }
}
