//! Editing state of the configure dialog.
//!
//! [`ConfigureDialog`] owns the two text fields and the baselines that
//! survive between open/close cycles. Front ends forward text-changed and
//! button events to it and render [`FieldValidity`] however they like.

use crate::config::StepConfig;
use crate::host::{DialogHost, IdentifierOracle};
use crate::settings::DialogSettings;
use crate::validation::Validator;
use std::path::{Path, PathBuf};

pub const INVALID_CONFIGURATION_TITLE: &str = "Invalid Configuration";
pub const INVALID_CONFIGURATION_MESSAGE: &str = "This configuration is invalid.  \
Unpredictable behaviour may result if you choose 'Yes', are you sure you want to \
save this configuration?";
pub const CHOOSE_INPUT_CAPTION: &str = "Choose Input File";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Editing,
    Accepted,
    Cancelled,
}

/// Outcome of the last validation, one flag per field.
///
/// Both flags start out `true` so nothing is highlighted before the first
/// validation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValidity {
    pub identifier: bool,
    pub input: bool,
}

impl Default for FieldValidity {
    fn default() -> Self {
        Self {
            identifier: true,
            input: true,
        }
    }
}

impl FieldValidity {
    pub fn all(&self) -> bool {
        self.identifier && self.input
    }
}

pub struct ConfigureDialog {
    identifier: String,
    input: String,
    previous_identifier: String,
    previous_location: PathBuf,
    validity: FieldValidity,
    state: DialogState,
    settings: DialogSettings,
    oracle: Box<dyn IdentifierOracle>,
}

impl ConfigureDialog {
    pub fn new(oracle: impl IdentifierOracle + 'static) -> Self {
        Self::with_settings(oracle, DialogSettings::default())
    }

    pub fn with_settings(oracle: impl IdentifierOracle + 'static, settings: DialogSettings) -> Self {
        let previous_location = settings.default_location.clone().unwrap_or_default();
        Self {
            identifier: String::new(),
            input: String::new(),
            previous_identifier: String::new(),
            previous_location,
            validity: FieldValidity::default(),
            state: DialogState::Editing,
            settings,
            oracle: Box::new(oracle),
        }
    }

    /// Swaps the uniqueness oracle, e.g. for a fresh snapshot of the workflow
    /// before the dialog is shown again.
    pub fn set_identifier_oracle(&mut self, oracle: impl IdentifierOracle + 'static) {
        self.oracle = Box::new(oracle);
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn previous_identifier(&self) -> &str {
        &self.previous_identifier
    }

    pub fn previous_location(&self) -> &Path {
        &self.previous_location
    }

    pub fn validity(&self) -> FieldValidity {
        self.validity
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Editing
    }

    pub fn settings(&self) -> &DialogSettings {
        &self.settings
    }

    /// Loads `config` into the fields and makes its identifier the baseline.
    pub fn set_config(&mut self, config: &StepConfig) {
        self.previous_identifier = config.identifier.clone();
        self.identifier = config.identifier.clone();
        self.input = config.input.clone();
        if self.settings.validate_on_load {
            self.validate();
        }
    }

    /// Returns the field contents and makes the current identifier the
    /// baseline.
    pub fn get_config(&mut self) -> StepConfig {
        self.previous_identifier = self.identifier.clone();
        StepConfig {
            identifier: self.identifier.clone(),
            input: self.input.clone(),
        }
    }

    pub fn set_identifier_text(&mut self, text: impl Into<String>) {
        self.identifier = text.into();
        self.validate();
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.validate();
    }

    /// Re-checks both fields, refreshes [`FieldValidity`] and returns whether
    /// the whole configuration is valid.
    pub fn validate(&mut self) -> bool {
        let input = Validator::input_location_valid(&self.input);
        let occurs = self.oracle.identifier_occurs_count(&self.identifier);
        let identifier =
            Validator::identifier_valid(occurs, &self.identifier, &self.previous_identifier);
        self.validity = FieldValidity { identifier, input };
        log::debug!(
            "validated step config: identifier {:?} ({} in use) -> {}, input {:?} -> {}",
            self.identifier,
            occurs,
            identifier,
            self.input,
            input
        );
        self.validity.all()
    }

    /// Confirm action. An invalid configuration is only accepted when the
    /// host's prompt is answered with "yes".
    pub fn accept(&mut self, host: &mut dyn DialogHost) -> DialogState {
        if !self.is_open() {
            return self.state;
        }
        let confirmed = self.validate()
            || host.confirm(INVALID_CONFIGURATION_TITLE, INVALID_CONFIGURATION_MESSAGE);
        if confirmed {
            if !self.validity.all() {
                log::warn!("saving invalid configuration for step {:?}", self.identifier);
            }
            self.state = DialogState::Accepted;
        }
        self.state
    }

    pub fn reject(&mut self) -> DialogState {
        if self.is_open() {
            self.state = DialogState::Cancelled;
        }
        self.state
    }

    /// Puts a closed dialog back into editing, keeping both baselines.
    pub fn reopen(&mut self) {
        self.state = DialogState::Editing;
    }

    /// Browse action. Returns `true` when a file was picked.
    pub fn browse(&mut self, host: &mut dyn DialogHost) -> bool {
        let Some(location) = host.pick_open_file(CHOOSE_INPUT_CAPTION, &self.previous_location)
        else {
            return false;
        };
        if location.as_os_str().is_empty() {
            return false;
        }
        if let Some(parent) = location.parent() {
            self.previous_location = parent.to_path_buf();
        }
        self.set_input_text(location.to_string_lossy().into_owned());
        true
    }
}
