// UI state management structs

use dictstep_core::ConfigureDialog;
use std::collections::HashMap;

/// Configure dialogs are kept per step, so the previous identifier and the
/// last browsed directory survive closing and reopening the window.
#[derive(Default)]
pub(crate) struct ConfigureWindowState {
    pub(crate) open_step: Option<u64>,
    pub(crate) dialogs: HashMap<u64, ConfigureDialog>,
}

impl ConfigureWindowState {
    /// The configure window is modal: while it is shown the rest of the
    /// workflow is frozen, so the dialog's oracle snapshot stays current.
    pub(crate) fn is_open(&self) -> bool {
        self.open_step.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigureAction {
    Browse,
    Accept,
    Cancel,
}
