use dictstep_core::dialog::{CHOOSE_INPUT_CAPTION, INVALID_CONFIGURATION_TITLE};
use dictstep_core::{
    ConfigureDialog, DialogHost, DialogSettings, DialogState, FieldValidity, OracleFn, StepConfig,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Default)]
struct ScriptedHost {
    answer: bool,
    picked: Option<PathBuf>,
    prompts: Vec<String>,
    picker_starts: Vec<PathBuf>,
}

impl DialogHost for ScriptedHost {
    fn pick_open_file(&mut self, caption: &str, start_dir: &Path) -> Option<PathBuf> {
        assert_eq!(caption, CHOOSE_INPUT_CAPTION);
        self.picker_starts.push(start_dir.to_path_buf());
        self.picked.clone()
    }

    fn confirm(&mut self, title: &str, _message: &str) -> bool {
        self.prompts.push(title.to_string());
        self.answer
    }
}

fn counts(entries: &[(&str, usize)]) -> OracleFn<impl Fn(&str) -> usize> {
    let map: HashMap<String, usize> = entries
        .iter()
        .map(|(id, count)| (id.to_string(), *count))
        .collect();
    OracleFn(move |id: &str| map.get(id).copied().unwrap_or(0))
}

fn existing_file(dir: &tempfile::TempDir, name: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, "{}").expect("write input");
    path.to_string_lossy().into_owned()
}

#[test]
fn input_validity_tracks_file_existence() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = existing_file(&dir, "data.json");
    let mut dialog = ConfigureDialog::new(counts(&[]));

    dialog.set_input_text(file.clone());
    assert!(dialog.validity().input);

    dialog.set_input_text(dir.path().to_string_lossy().into_owned());
    assert!(!dialog.validity().input);

    dialog.set_input_text(format!("{file}.missing"));
    assert!(!dialog.validity().input);

    std::fs::remove_file(&file).expect("remove input");
    dialog.set_input_text(file);
    assert!(!dialog.validity().input);
}

#[test]
fn identifier_validity_follows_occurrence_count() {
    let mut dialog = ConfigureDialog::new(counts(&[("mine", 1), ("taken", 1), ("twice", 2)]));
    dialog.set_config(&StepConfig::new("mine", ""));

    dialog.set_identifier_text("fresh");
    assert!(dialog.validity().identifier);

    dialog.set_identifier_text("mine");
    assert!(dialog.validity().identifier);

    dialog.set_identifier_text("taken");
    assert!(!dialog.validity().identifier);

    dialog.set_identifier_text("twice");
    assert!(!dialog.validity().identifier);
}

#[test]
fn own_identifier_is_invalid_once_another_step_shares_it() {
    let mut dialog = ConfigureDialog::new(counts(&[("mine", 2)]));
    dialog.set_config(&StepConfig::new("mine", ""));
    assert!(!dialog.validity().identifier);
}

#[test]
fn empty_identifier_follows_occurrence_rule() {
    let mut dialog = ConfigureDialog::new(counts(&[]));
    dialog.set_config(&StepConfig::new("reader", ""));
    dialog.set_identifier_text("");
    assert!(dialog.validity().identifier);

    let mut dialog = ConfigureDialog::new(counts(&[("", 1), ("reader", 1)]));
    dialog.set_config(&StepConfig::new("reader", ""));
    dialog.set_identifier_text("");
    assert!(!dialog.validity().identifier);

    dialog.set_config(&StepConfig::new("", ""));
    assert!(dialog.validity().identifier);
}

#[test]
fn validate_is_conjunction_of_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = existing_file(&dir, "data.json");
    let mut dialog = ConfigureDialog::new(counts(&[("taken", 1)]));

    dialog.set_config(&StepConfig::new("free", file.clone()));
    assert!(dialog.validate());
    assert_eq!(dialog.validity(), FieldValidity { identifier: true, input: true });

    dialog.set_identifier_text("taken");
    assert!(!dialog.validate());
    assert_eq!(dialog.validity(), FieldValidity { identifier: false, input: true });

    dialog.set_input_text("");
    assert!(!dialog.validate());
    assert_eq!(dialog.validity(), FieldValidity { identifier: false, input: false });

    dialog.set_identifier_text("free");
    assert!(!dialog.validate());
    assert_eq!(dialog.validity(), FieldValidity { identifier: true, input: false });
}

#[test]
fn set_then_get_round_trips_and_moves_baseline() {
    let mut dialog = ConfigureDialog::new(counts(&[]));
    let config = StepConfig::new("reader", "/data/in.json");

    dialog.set_config(&config);
    assert_eq!(dialog.previous_identifier(), "reader");
    assert_eq!(dialog.get_config(), config);
    assert_eq!(dialog.previous_identifier(), "reader");

    dialog.set_identifier_text("renamed");
    assert_eq!(dialog.previous_identifier(), "reader");
    assert_eq!(dialog.get_config().identifier, "renamed");
    assert_eq!(dialog.previous_identifier(), "renamed");
}

#[test]
fn load_without_validation_leaves_fields_neutral() {
    let settings = DialogSettings {
        validate_on_load: false,
        ..DialogSettings::default()
    };
    let mut dialog = ConfigureDialog::with_settings(counts(&[("x", 3)]), settings);
    dialog.set_config(&StepConfig::new("x", "/does/not/exist"));
    assert_eq!(dialog.validity(), FieldValidity::default());

    assert!(!dialog.validate());
    assert_eq!(dialog.validity(), FieldValidity { identifier: false, input: false });
}

#[test]
fn load_with_validation_highlights_immediately() {
    let mut dialog = ConfigureDialog::new(counts(&[]));
    dialog.set_config(&StepConfig::new("x", "/does/not/exist"));
    assert_eq!(dialog.validity(), FieldValidity { identifier: true, input: false });
}

#[test]
fn valid_accept_closes_without_prompt() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = existing_file(&dir, "data.json");
    let mut dialog = ConfigureDialog::new(counts(&[]));
    dialog.set_config(&StepConfig::new("reader", file));

    let mut host = ScriptedHost::default();
    assert_eq!(dialog.accept(&mut host), DialogState::Accepted);
    assert!(host.prompts.is_empty());
    assert!(!dialog.is_open());
}

#[test]
fn invalid_accept_answered_no_keeps_editing() {
    let mut dialog = ConfigureDialog::new(counts(&[]));
    dialog.set_config(&StepConfig::new("reader", "/does/not/exist"));

    let mut host = ScriptedHost::default();
    assert_eq!(dialog.accept(&mut host), DialogState::Editing);
    assert_eq!(host.prompts, vec![INVALID_CONFIGURATION_TITLE.to_string()]);
    assert!(dialog.is_open());
}

#[test]
fn invalid_accept_answered_yes_keeps_values() {
    let mut dialog = ConfigureDialog::new(counts(&[("dup", 2)]));
    dialog.set_config(&StepConfig::new("dup", "/does/not/exist"));

    let mut host = ScriptedHost {
        answer: true,
        ..ScriptedHost::default()
    };
    assert_eq!(dialog.accept(&mut host), DialogState::Accepted);
    assert_eq!(host.prompts.len(), 1);
    assert_eq!(
        dialog.get_config(),
        StepConfig::new("dup", "/does/not/exist")
    );
}

#[test]
fn closed_dialog_ignores_further_actions_until_reopened() {
    let mut dialog = ConfigureDialog::new(counts(&[]));
    let mut host = ScriptedHost::default();

    assert_eq!(dialog.reject(), DialogState::Cancelled);
    assert_eq!(dialog.accept(&mut host), DialogState::Cancelled);
    assert!(host.prompts.is_empty());

    dialog.reopen();
    assert_eq!(dialog.state(), DialogState::Editing);
}

#[test]
fn browse_selection_updates_input_and_location() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = existing_file(&dir, "picked.json");
    let mut dialog = ConfigureDialog::new(counts(&[]));
    let mut host = ScriptedHost {
        picked: Some(PathBuf::from(&file)),
        ..ScriptedHost::default()
    };

    assert!(dialog.browse(&mut host));
    assert_eq!(dialog.input(), file);
    assert_eq!(dialog.previous_location(), dir.path());
    assert!(dialog.validity().input);

    dialog.browse(&mut host);
    assert_eq!(host.picker_starts, vec![PathBuf::new(), dir.path().to_path_buf()]);
}

#[test]
fn browse_cancel_changes_nothing() {
    let settings = DialogSettings {
        default_location: Some(PathBuf::from("/srv/inputs")),
        ..DialogSettings::default()
    };
    let mut dialog = ConfigureDialog::with_settings(counts(&[]), settings);
    dialog.set_config(&StepConfig::new("a", "/old/path.json"));
    let mut host = ScriptedHost::default();

    assert!(!dialog.browse(&mut host));
    assert_eq!(dialog.input(), "/old/path.json");
    assert_eq!(dialog.previous_location(), Path::new("/srv/inputs"));
    assert_eq!(host.picker_starts, vec![PathBuf::from("/srv/inputs")]);
}

#[test]
fn swapped_oracle_is_used_by_next_validation() {
    let mut dialog = ConfigureDialog::new(counts(&[]));
    dialog.set_config(&StepConfig::new("a", ""));
    dialog.set_identifier_text("b");
    assert!(dialog.validity().identifier);

    dialog.set_identifier_oracle(counts(&[("b", 1)]));
    dialog.validate();
    assert!(!dialog.validity().identifier);
}
