//! Configuration dialog logic for the dict deserializer workflow step.
//!
//! The crate is toolkit-free: a front end drives [`ConfigureDialog`] with
//! text-changed and button events and supplies the two capabilities the
//! dialog asks the host for:
//! - [`IdentifierOracle`]: how many steps already use an identifier
//! - [`DialogHost`]: the native file picker and the yes/no prompt

pub mod config;
pub mod dialog;
pub mod host;
pub mod settings;
pub mod step;
pub mod validation;

pub use config::StepConfig;
pub use dialog::{ConfigureDialog, DialogState, FieldValidity};
pub use host::{DialogHost, IdentifierOracle, OracleFn};
pub use settings::{DialogSettings, SettingsError};
pub use step::{DictDeserializerStep, StepError, DICT_DESERIALIZER_KIND};
pub use validation::Validator;
