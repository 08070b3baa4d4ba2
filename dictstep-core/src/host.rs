use std::path::{Path, PathBuf};
use workflow::WorkflowDefinition;

/// Reports how many steps in the workflow currently use an identifier.
///
/// The dialog treats the answer as authoritative and assumes the call never
/// fails.
pub trait IdentifierOracle {
    fn identifier_occurs_count(&self, identifier: &str) -> usize;
}

/// Adapts a plain closure into an oracle.
pub struct OracleFn<F>(pub F);

impl<F> IdentifierOracle for OracleFn<F>
where
    F: Fn(&str) -> usize,
{
    fn identifier_occurs_count(&self, identifier: &str) -> usize {
        (self.0)(identifier)
    }
}

impl IdentifierOracle for WorkflowDefinition {
    fn identifier_occurs_count(&self, identifier: &str) -> usize {
        WorkflowDefinition::identifier_occurs_count(self, identifier)
    }
}

/// Blocking modal services the dialog borrows from the front end.
pub trait DialogHost {
    /// Shows an open-file picker starting in `start_dir`. An empty path lets
    /// the toolkit choose. Returns `None` when the user cancels.
    fn pick_open_file(&mut self, caption: &str, start_dir: &Path) -> Option<PathBuf>;

    /// Asks a yes/no question with "no" as the default answer. Dismissing the
    /// prompt counts as "no".
    fn confirm(&mut self, title: &str, message: &str) -> bool;
}
