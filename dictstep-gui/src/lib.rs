use dictstep_core::{DialogSettings, DialogState, DictDeserializerStep, DICT_DESERIALIZER_KIND};
use eframe::egui;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use workflow::{WorkflowDefinition, WorkflowError};

mod native_host;
mod notification_handler;
mod notifications;
mod ui;
mod ui_state;
mod utils;

pub use native_host::NativeDialogHost;
use notification_handler::NotificationHandler;
use ui_state::{ConfigureAction, ConfigureWindowState};

#[derive(Debug, Clone)]
pub struct GuiConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            title: "dictstep".to_string(),
            width: 960.0,
            height: 600.0,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GuiError {
    #[error("gui error: {0}")]
    Gui(String),
    #[error("workflow error: {0}")]
    Workflow(#[from] WorkflowError),
}

/// Loads the workflow at `path`, or starts an empty one named after the file
/// when nothing exists there yet.
pub fn load_workflow_or_default(path: &Path) -> Result<WorkflowDefinition, WorkflowError> {
    if path.exists() {
        return WorkflowDefinition::load_from_file(path);
    }
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("workflow");
    Ok(WorkflowDefinition::new(name))
}

/// Runs the step editor on the workflow stored at `workflow_path`.
///
/// # Parameters
///
/// * `config` - window title and size
/// * `settings` - configure dialog behaviour shared by every step
/// * `workflow_path` - workflow file; created on first save when missing
///
/// # Returns
///
/// * `Ok(())` - the user closed the window
/// * `Err(GuiError::Workflow)` - the workflow file exists but could not be read
/// * `Err(GuiError::Gui)` - eframe failed to start or crashed
pub fn run_gui(
    config: GuiConfig,
    settings: DialogSettings,
    workflow_path: PathBuf,
) -> Result<(), GuiError> {
    let workflow = load_workflow_or_default(&workflow_path)?;
    log::info!(
        "editing workflow '{}' ({} steps) from {}",
        workflow.name,
        workflow.steps.len(),
        workflow_path.display()
    );
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([config.width, config.height]),
        ..Default::default()
    };

    eframe::run_native(
        &config.title,
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(workflow, workflow_path, settings))),
    )
    .map_err(|err| GuiError::Gui(err.to_string()))
}

struct GuiApp {
    workflow: WorkflowDefinition,
    workflow_path: PathBuf,
    workflow_dirty: bool,
    settings: DialogSettings,
    host: NativeDialogHost,
    notification_handler: NotificationHandler,
    configure_window: ConfigureWindowState,
    step_status: HashMap<u64, bool>,
    status: String,
}

impl GuiApp {
    fn new(workflow: WorkflowDefinition, workflow_path: PathBuf, settings: DialogSettings) -> Self {
        let mut app = Self {
            workflow,
            workflow_path,
            workflow_dirty: false,
            settings,
            host: NativeDialogHost,
            notification_handler: NotificationHandler::new(),
            configure_window: ConfigureWindowState::default(),
            step_status: HashMap::new(),
            status: String::new(),
        };
        app.refresh_step_status();
        app
    }

    fn show_info(&mut self, title: &str, message: &str) {
        self.notification_handler.show_info(title, message);
    }

    fn mark_workflow_dirty(&mut self) {
        self.workflow_dirty = true;
        self.refresh_step_status();
    }

    /// Recomputes the "configured" badge of every dict deserializer step.
    fn refresh_step_status(&mut self) {
        self.step_status = self
            .workflow
            .steps
            .iter()
            .filter_map(|definition| {
                DictDeserializerStep::from_definition(definition, &self.workflow)
                    .ok()
                    .map(|step| (definition.id, step.is_configured()))
            })
            .collect();
    }

    fn save_workflow(&mut self) {
        match self.workflow.save_to_file(&self.workflow_path) {
            Ok(()) => {
                self.workflow_dirty = false;
                self.status = format!("Saved {}", self.workflow_path.display());
            }
            Err(err) => {
                log::error!("saving {} failed: {err}", self.workflow_path.display());
                self.show_info("Workflow", &format!("Save failed: {err}"));
            }
        }
    }

    fn add_step(&mut self) {
        if self.configure_window.is_open() {
            return;
        }
        let config = DictDeserializerStep::new().config().to_value();
        let id = self.workflow.add_step(DICT_DESERIALIZER_KIND, config);
        self.status = format!("Added step #{id}");
        self.mark_workflow_dirty();
    }

    fn remove_step(&mut self, id: u64) {
        if self.configure_window.is_open() {
            return;
        }
        self.configure_window.dialogs.remove(&id);
        if self.workflow.remove_step(id).is_some() {
            self.status = format!("Removed step #{id}");
            self.mark_workflow_dirty();
        }
    }

    /// Shows the configure window for step `id`, reusing the dialog from a
    /// previous opening when there is one. Ignored while another configure
    /// window is open.
    fn open_configure(&mut self, id: u64) {
        if self.configure_window.is_open() {
            return;
        }
        let Some(definition) = self.workflow.step(id) else {
            return;
        };
        let step = match DictDeserializerStep::from_definition(definition, &self.workflow) {
            Ok(step) => step,
            Err(err) => {
                self.show_info("Configure", &err.to_string());
                return;
            }
        };
        let snapshot = self.workflow.clone();
        match self.configure_window.dialogs.get_mut(&id) {
            Some(dialog) => {
                dialog.set_identifier_oracle(snapshot);
                dialog.set_config(step.config());
                dialog.reopen();
            }
            None => {
                let dialog = step.configure_dialog(snapshot, self.settings.clone());
                self.configure_window.dialogs.insert(id, dialog);
            }
        }
        self.configure_window.open_step = Some(id);
    }

    fn handle_configure_action(&mut self, id: u64, action: ConfigureAction) {
        let Some(dialog) = self.configure_window.dialogs.get_mut(&id) else {
            self.configure_window.open_step = None;
            return;
        };
        let state = match action {
            ConfigureAction::Browse => {
                dialog.browse(&mut self.host);
                dialog.state()
            }
            ConfigureAction::Accept => dialog.accept(&mut self.host),
            ConfigureAction::Cancel => dialog.reject(),
        };
        match state {
            DialogState::Editing => {}
            DialogState::Cancelled => self.configure_window.open_step = None,
            DialogState::Accepted => {
                self.configure_window.open_step = None;
                let Some(definition) = self.workflow.step(id) else {
                    return;
                };
                let Ok(mut step) = DictDeserializerStep::from_definition(definition, &self.workflow)
                else {
                    return;
                };
                if step.apply_dialog(dialog) {
                    if let Some(definition) = self.workflow.step_mut(id) {
                        step.write_definition(definition);
                    }
                    self.status = format!("Configured step '{}'", step.identifier());
                    self.mark_workflow_dirty();
                }
            }
        }
    }
}

impl eframe::App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.style_mut(|style| {
            style.interaction.selectable_labels = false;
        });
        self.render_menu_bar(ctx);
        self.render_step_list(ctx);
        self.render_configure_window(ctx);
        self.render_notifications(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dictstep_core::StepConfig;

    fn app_with_steps(identifiers: &[&str]) -> GuiApp {
        let mut workflow = WorkflowDefinition::new("gui");
        for identifier in identifiers {
            workflow.add_step(
                DICT_DESERIALIZER_KIND,
                StepConfig::new(*identifier, "").to_value(),
            );
        }
        GuiApp::new(
            workflow,
            PathBuf::from("unused.json"),
            DialogSettings::default(),
        )
    }

    #[test]
    fn open_configure_window_freezes_workflow() {
        let mut app = app_with_steps(&["a", "x"]);
        app.open_configure(1);
        assert_eq!(app.configure_window.open_step, Some(1));

        app.remove_step(2);
        app.add_step();
        app.open_configure(2);
        assert_eq!(app.workflow.steps.len(), 2);
        assert_eq!(app.configure_window.open_step, Some(1));
        assert!(!app.configure_window.dialogs.contains_key(&2));

        let dialog = app.configure_window.dialogs.get_mut(&1).expect("dialog");
        dialog.set_identifier_text("x");
        assert!(!dialog.validity().identifier);
    }

    #[test]
    fn workflow_edits_resume_after_cancel() {
        let mut app = app_with_steps(&["a", "x"]);
        app.open_configure(1);
        app.handle_configure_action(1, ConfigureAction::Cancel);
        assert!(!app.configure_window.is_open());

        app.remove_step(2);
        assert_eq!(app.workflow.steps.len(), 1);
        app.open_configure(1);
        let dialog = app.configure_window.dialogs.get_mut(&1).expect("dialog");
        dialog.set_identifier_text("x");
        assert!(dialog.validity().identifier);
    }
}
