use serde::{Deserialize, Serialize};

use super::config::{GpiInput, GpiStatus};
use super::field::FieldInput;

pub type ToastId = u64;

/// Severity of a toast notification
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

/// Transient, auto-dismissing notification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
}

/// Result of the last blur-time check of a field (border color in the shell)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldValidity {
    Valid,
    Invalid,
}

/// Value the shell writes back into a bound control
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub element_id: String,
    pub value: FieldInput,
}

/// Status dot and label of one GPI slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GpiIndicator {
    pub input: GpiInput,
    pub status: GpiStatus,
    pub label: String,
    /// Dot is green (`online`) only while the input is active
    pub online: bool,
}

impl GpiIndicator {
    pub fn new(input: GpiInput, status: GpiStatus) -> Self {
        Self {
            input,
            status,
            label: status.label().to_string(),
            online: status == GpiStatus::Active,
        }
    }
}
