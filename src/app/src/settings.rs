//! Panel settings handed in by the shell on `Event::Initialize`.
//!
//! Every field has a default, so the shell may send a partial JSON object or
//! nothing at all.

use serde::{Deserialize, Serialize};
use serde_valid::Validate;

pub const EXPORT_FILE_NAME: &str = "lightly-device-config.json";
pub const EXPORT_MIME_TYPE: &str = "application/json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct PanelSettings {
    /// Period of the simulator tick
    #[validate(minimum = 1)]
    pub tick_interval_ms: u64,
    /// Ticks between two simulated GPI activities
    #[validate(minimum = 1)]
    pub activity_every_ticks: u64,
    /// How long a simulated activity keeps a slot active
    #[validate(minimum = 1)]
    pub activity_duration_ms: u64,
    /// Artificial delay of the simulated save
    #[validate(maximum = 60_000)]
    pub save_delay_ms: u64,
    #[validate(minimum = 1)]
    pub toast_duration_ms: u64,
    pub simulate_activity: bool,
    /// Reject invalid IP/port values instead of storing and flagging them
    pub enforce_validation: bool,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1_000,
            activity_every_ticks: 30,
            activity_duration_ms: 2_000,
            save_delay_ms: 2_000,
            toast_duration_ms: 3_000,
            simulate_activity: true,
            enforce_validation: false,
        }
    }
}

impl PanelSettings {
    /// Validated settings, or the validation errors as text
    pub fn checked(self) -> Result<Self, String> {
        self.validate()
            .map_err(|e| format!("Invalid panel settings: {e}"))?;
        Ok(self)
    }
}
