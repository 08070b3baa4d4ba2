use crate::config::StepConfig;
use crate::dialog::{ConfigureDialog, DialogState, FieldValidity};
use crate::host::IdentifierOracle;
use crate::settings::DialogSettings;
use crate::validation::Validator;
use workflow::StepDefinition;

pub const DICT_DESERIALIZER_KIND: &str = "dict_deserializer";

#[derive(thiserror::Error, Debug)]
pub enum StepError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("step {id} is a '{kind}' step")]
    WrongKind { id: u64, kind: String },
}

/// Host-side view of one dict deserializer step: its record plus whether the
/// last accepted or loaded record validated.
#[derive(Debug, Clone, Default)]
pub struct DictDeserializerStep {
    config: StepConfig,
    configured: bool,
}

impl DictDeserializerStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a step out of a workflow document and checks it against
    /// `oracle`.
    pub fn from_definition(
        definition: &StepDefinition,
        oracle: &dyn IdentifierOracle,
    ) -> Result<Self, StepError> {
        if definition.kind != DICT_DESERIALIZER_KIND {
            return Err(StepError::WrongKind {
                id: definition.id,
                kind: definition.kind.clone(),
            });
        }
        let config = StepConfig::from_value(&definition.config)?;
        let mut step = Self {
            config,
            configured: false,
        };
        step.configured = step.check(oracle).all();
        Ok(step)
    }

    pub fn write_definition(&self, definition: &mut StepDefinition) {
        definition.config = self.config.to_value();
    }

    pub fn config(&self) -> &StepConfig {
        &self.config
    }

    pub fn identifier(&self) -> &str {
        &self.config.identifier
    }

    pub fn set_identifier(&mut self, identifier: impl Into<String>) {
        self.config.identifier = identifier.into();
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Validates the stored record the way an open dialog would right after
    /// loading it: the step's own identifier is its baseline.
    pub fn check(&self, oracle: &dyn IdentifierOracle) -> FieldValidity {
        let occurs = oracle.identifier_occurs_count(&self.config.identifier);
        FieldValidity {
            identifier: Validator::identifier_valid(
                occurs,
                &self.config.identifier,
                &self.config.identifier,
            ),
            input: Validator::input_location_valid(&self.config.input),
        }
    }

    pub fn configure_dialog(
        &self,
        oracle: impl IdentifierOracle + 'static,
        settings: DialogSettings,
    ) -> ConfigureDialog {
        let mut dialog = ConfigureDialog::with_settings(oracle, settings);
        dialog.set_config(&self.config);
        dialog
    }

    /// Takes the record from an accepted dialog. Returns `false` and leaves
    /// the step untouched for any other dialog state.
    ///
    /// Validity is taken before `get_config` moves the dialog's baseline to
    /// the new identifier, while the oracle still counts this step under its
    /// old one.
    pub fn apply_dialog(&mut self, dialog: &mut ConfigureDialog) -> bool {
        if dialog.state() != DialogState::Accepted {
            return false;
        }
        let configured = dialog.validate();
        self.config = dialog.get_config();
        self.configured = configured;
        log::info!(
            "step {:?} configured (valid: {})",
            self.config.identifier,
            self.configured
        );
        true
    }

    pub fn serialize(&self) -> Result<String, StepError> {
        Ok(serde_json::to_string(&self.config)?)
    }

    pub fn deserialize(
        &mut self,
        text: &str,
        oracle: &dyn IdentifierOracle,
    ) -> Result<(), StepError> {
        self.config = serde_json::from_str(text)?;
        self.configured = self.check(oracle).all();
        Ok(())
    }
}
