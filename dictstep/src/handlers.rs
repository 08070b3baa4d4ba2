use crate::commands::*;
use crate::output::*;
use crate::terminal_host::TerminalHost;
use dictstep_core::{DialogSettings, DialogState, DictDeserializerStep, DICT_DESERIALIZER_KIND};
use dictstep_gui::{load_workflow_or_default, run_gui, GuiConfig};
use std::path::{Path, PathBuf};
use workflow::WorkflowDefinition;

pub fn handle_command(
    command: Option<Commands>,
    settings: DialogSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        None => run_gui(GuiConfig::default(), settings, PathBuf::from("workflow.json"))?,
        Some(Commands::Gui { workflow }) => run_gui(GuiConfig::default(), settings, workflow)?,
        Some(Commands::Check { workflow }) => handle_check(&workflow)?,
        Some(Commands::Add { workflow }) => handle_add(&workflow)?,
        Some(Commands::Set {
            workflow,
            step,
            identifier,
            input,
            yes,
        }) => handle_set(&workflow, step, identifier, input, yes, settings)?,
    }
    Ok(())
}

fn handle_check(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let workflow = WorkflowDefinition::load_from_file(path)?;
    let mut checked = 0usize;
    let mut invalid = 0usize;
    for definition in &workflow.steps {
        if definition.kind != DICT_DESERIALIZER_KIND {
            continue;
        }
        let step = DictDeserializerStep::from_definition(definition, &workflow)?;
        let validity = step.check(&workflow);
        print_step_check(definition.id, step.identifier(), validity);
        checked += 1;
        if !validity.all() {
            invalid += 1;
        }
    }
    if checked == 0 {
        print_info("No dict deserializer steps");
    }
    if invalid > 0 {
        return Err(format!("{invalid} of {checked} steps are not configured").into());
    }
    Ok(())
}

fn handle_add(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut workflow = load_workflow_or_default(path)?;
    let config = DictDeserializerStep::new().config().to_value();
    let id = workflow.add_step(DICT_DESERIALIZER_KIND, config);
    workflow.save_to_file(path)?;
    print_info(&format!("Step added with id {id}"));
    Ok(())
}

fn handle_set(
    path: &Path,
    id: u64,
    identifier: Option<String>,
    input: Option<String>,
    assume_yes: bool,
    settings: DialogSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut workflow = WorkflowDefinition::load_from_file(path)?;
    let Some(definition) = workflow.step(id) else {
        return Err(format!("no step with id {id}").into());
    };
    let mut step = DictDeserializerStep::from_definition(definition, &workflow)?;

    let mut dialog = step.configure_dialog(workflow.clone(), settings);
    if let Some(identifier) = identifier {
        dialog.set_identifier_text(identifier);
    }
    if let Some(input) = input {
        dialog.set_input_text(input);
    }

    let mut host = TerminalHost { assume_yes };
    if dialog.accept(&mut host) != DialogState::Accepted {
        print_error("Configuration not saved");
        return Ok(());
    }
    step.apply_dialog(&mut dialog);
    if let Some(definition) = workflow.step_mut(id) {
        step.write_definition(definition);
    }
    workflow.save_to_file(path)?;
    if step.is_configured() {
        print_info(&format!("Step {id} configured as '{}'", step.identifier()));
    } else {
        print_info(&format!("Step {id} saved with an invalid configuration"));
    }
    Ok(())
}
