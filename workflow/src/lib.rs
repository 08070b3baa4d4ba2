use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Config key every step kind uses for its user-facing identifier.
pub const IDENTIFIER_KEY: &str = "identifier";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub steps: Vec<StepDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepDefinition {
    pub id: u64,
    pub kind: String,
    #[serde(default = "empty_config")]
    pub config: serde_json::Value,
}

fn empty_config() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl StepDefinition {
    /// The identifier stored in this step's config, or `""` when unset.
    pub fn identifier(&self) -> &str {
        self.config
            .get(IDENTIFIER_KEY)
            .and_then(|value| value.as_str())
            .unwrap_or("")
    }
}

#[derive(thiserror::Error, Debug)]
pub enum WorkflowError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WorkflowDefinition {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), WorkflowError> {
        let data = serde_json::to_vec_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, WorkflowError> {
        let data = fs::read(path)?;
        let definition = serde_json::from_slice(&data)?;
        Ok(definition)
    }

    /// Appends a step and returns its id, one past the highest id in use.
    pub fn add_step(&mut self, kind: &str, config: serde_json::Value) -> u64 {
        let id = self.steps.iter().map(|step| step.id).max().unwrap_or(0) + 1;
        self.steps.push(StepDefinition {
            id,
            kind: kind.to_string(),
            config,
        });
        id
    }

    pub fn remove_step(&mut self, id: u64) -> Option<StepDefinition> {
        let index = self.steps.iter().position(|step| step.id == id)?;
        Some(self.steps.remove(index))
    }

    pub fn step(&self, id: u64) -> Option<&StepDefinition> {
        self.steps.iter().find(|step| step.id == id)
    }

    pub fn step_mut(&mut self, id: u64) -> Option<&mut StepDefinition> {
        self.steps.iter_mut().find(|step| step.id == id)
    }

    /// Number of steps whose config carries `identifier`.
    pub fn identifier_occurs_count(&self, identifier: &str) -> usize {
        self.steps
            .iter()
            .filter(|step| step.identifier() == identifier)
            .count()
    }
}
