use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::commands::timer::TimerId;
use crate::settings::PanelSettings;
use crate::types::*;

/// What a pending timer is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPurpose {
    /// Simulator heartbeat
    Tick,
    ToastExpiry(ToastId),
    /// Return a slot from `active` to `inactive`
    ActivityEnd(GpiInput),
    SaveComplete,
}

/// Registry of timers the Shell is currently running for us.
///
/// A timer result whose id is not registered any more belongs to a cancelled
/// task and is dropped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Scheduler {
    next_id: TimerId,
    pending: BTreeMap<TimerId, TimerPurpose>,
}

impl Scheduler {
    /// Register a new timer and return its id
    pub fn register(&mut self, purpose: TimerPurpose) -> TimerId {
        self.next_id += 1;
        self.pending.insert(self.next_id, purpose);
        self.next_id
    }

    /// Remove a timer that fired
    pub fn take(&mut self, id: TimerId) -> Option<TimerPurpose> {
        self.pending.remove(&id)
    }

    /// Unregister all timers matching `predicate` and return their ids
    pub fn cancel_matching(&mut self, predicate: impl Fn(&TimerPurpose) -> bool) -> Vec<TimerId> {
        let ids: Vec<TimerId> = self
            .pending
            .iter()
            .filter(|(_, purpose)| predicate(purpose))
            .map(|(id, _)| *id)
            .collect();
        for id in &ids {
            self.pending.remove(id);
        }
        ids
    }

    pub fn cancel_all(&mut self) -> Vec<TimerId> {
        self.cancel_matching(|_| true)
    }

    /// Id of the first pending timer with the given purpose
    pub fn find(&self, purpose: TimerPurpose) -> Option<TimerId> {
        self.pending
            .iter()
            .find(|(_, pending)| **pending == purpose)
            .map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Application Model - the complete state
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Model {
    pub config: DeviceConfiguration,
    pub settings: PanelSettings,

    // UI state
    pub field_validity: BTreeMap<FieldKey, FieldValidity>,
    /// Change rejected by enforced validation, already reported
    pub last_rejected: Option<(FieldKey, String)>,
    pub toasts: Vec<Toast>,
    pub is_initialized: bool,

    // Simulated save in flight, with the configuration it writes
    pub is_saving: bool,
    pub pending_save: Option<DeviceConfiguration>,

    // Simulator
    pub tick_count: u64,

    pub scheduler: Scheduler,
    next_toast_id: ToastId,
}

impl Model {
    /// Fresh model running with `settings`
    pub fn with_settings(settings: PanelSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    /// Append a toast and return its id
    pub fn push_toast(&mut self, message: String, severity: Severity) -> ToastId {
        self.next_toast_id += 1;
        self.toasts.push(Toast {
            id: self.next_toast_id,
            message,
            severity,
        });
        self.next_toast_id
    }

    /// Remove a toast, returns whether it was still shown
    pub fn remove_toast(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn view(&self) -> ViewModel {
        ViewModel {
            config: self.config.clone(),
            form_fields: FieldKey::all()
                .into_iter()
                .map(|key| FormField {
                    element_id: key.to_string(),
                    value: key.form_value(&self.config),
                })
                .collect(),
            gpi_indicators: GpiInput::ALL
                .into_iter()
                .map(|input| GpiIndicator::new(input, self.config.gpi.input(input).status))
                .collect(),
            field_validity: self
                .field_validity
                .iter()
                .map(|(key, validity)| (key.to_string(), *validity))
                .collect(),
            toasts: self.toasts.clone(),
            is_saving: self.is_saving,
            save_button_label: if self.is_saving {
                "Saving...".to_string()
            } else {
                "Save Configuration".to_string()
            },
        }
    }
}

/// What the Shell renders
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub config: DeviceConfiguration,
    /// Current value of every bound control, keyed by element id
    pub form_fields: Vec<FormField>,
    pub gpi_indicators: Vec<GpiIndicator>,
    /// Blur-time validity by element id; absent means not checked yet
    pub field_validity: BTreeMap<String, FieldValidity>,
    pub toasts: Vec<Toast>,
    pub is_saving: bool,
    pub save_button_label: String,
}
