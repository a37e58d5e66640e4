//! Trigger control and UI lifecycle state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::view::Feedback;

/// Lifecycle state of one orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl UiState {
    /// Idle, Success and Error all accept a new trigger
    pub fn is_ready(&self) -> bool {
        !matches!(self, UiState::Loading)
    }
}

/// The trigger control (a button, in page terms)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    default_label: String,
    loading_label: String,
    label: String,
    enabled: bool,
}

impl Control {
    pub fn new(default_label: impl Into<String>, loading_label: impl Into<String>) -> Self {
        let default_label = default_label.into();
        Self {
            label: default_label.clone(),
            default_label,
            loading_label: loading_label.into(),
            enabled: true,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn engage(&mut self) {
        self.enabled = false;
        self.label = self.loading_label.clone();
    }

    fn reset(&mut self) {
        self.enabled = true;
        self.label = self.default_label.clone();
    }
}

/// Holds the control disabled until dropped
///
/// Dropping restores the default label and enabled state, including
/// during unwinding out of a panicking surface.
pub struct ControlGuard<'a, F: Feedback + ?Sized> {
    control: &'a mut Control,
    surface: &'a F,
}

impl<'a, F: Feedback + ?Sized> ControlGuard<'a, F> {
    pub fn engage(control: &'a mut Control, surface: &'a F) -> Self {
        control.engage();
        debug!(label = %control.label(), "Control disabled");
        surface.control(control);
        Self { control, surface }
    }
}

impl<F: Feedback + ?Sized> Drop for ControlGuard<'_, F> {
    fn drop(&mut self) {
        self.control.reset();
        debug!(label = %self.control.label(), "Control restored");
        self.surface.control(self.control);
    }
}
