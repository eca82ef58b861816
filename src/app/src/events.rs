use serde::{Deserialize, Serialize};

use crate::commands::dialog::DialogOutput;
use crate::commands::download::DownloadOutput;
use crate::commands::timer::TimerOutput;
use crate::settings::PanelSettings;
use crate::types::*;

/// Form control events
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConfigEvent {
    /// `change` of a bound control
    FieldChanged { field: FieldKey, value: FieldInput },
    /// `blur` of a bound control, triggers validation
    FieldBlurred { field: FieldKey, value: String },
}

/// Save / export / reset buttons
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum PanelEvent {
    Save,
    Export,
    Reset,

    #[serde(skip)]
    ExportResponse(DownloadOutput),
    #[serde(skip)]
    ResetConfirmation(DialogOutput),
}

/// Simulated device activity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SimulationEvent {
    /// Simulate activity on a specific slot (ignored while it is disabled)
    ActivityRequested { input: GpiInput },
}

/// UI events
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum UiEvent {
    DismissToast { id: ToastId },
    ClearToasts,
}

/// Events that can happen in the app
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    /// Page loaded; `None` keeps the default settings
    Initialize { settings: Option<PanelSettings> },
    /// Page unloads; cancels everything still scheduled
    Shutdown,

    Config(ConfigEvent),
    Panel(PanelEvent),
    Simulation(SimulationEvent),
    Ui(UiEvent),

    // Timer responses (internal events, skipped from serialization)
    #[serde(skip)]
    Timer(TimerOutput),
}

impl Event {
    /// Change event for the control with the given element id
    pub fn field_changed(element_id: &str, value: FieldInput) -> Result<Self, String> {
        let field = element_id.parse()?;
        Ok(Event::Config(ConfigEvent::FieldChanged { field, value }))
    }

    /// Blur event for the control with the given element id
    pub fn field_blurred(element_id: &str, value: impl Into<String>) -> Result<Self, String> {
        let field = element_id.parse()?;
        Ok(Event::Config(ConfigEvent::FieldBlurred {
            field,
            value: value.into(),
        }))
    }
}
