use crate::utils::{has_rt_capabilities, zenity_file_dialog, zenity_question};
use dictstep_core::DialogHost;
use std::path::{Path, PathBuf};

/// Blocking native dialogs for the configure window.
///
/// Uses `rfd` normally and falls back to zenity when the process runs with
/// a real-time scheduler.
#[derive(Debug, Default)]
pub struct NativeDialogHost;

impl DialogHost for NativeDialogHost {
    fn pick_open_file(&mut self, caption: &str, start_dir: &Path) -> Option<PathBuf> {
        if has_rt_capabilities() {
            return zenity_file_dialog(caption, start_dir);
        }
        let mut dialog = rfd::FileDialog::new().set_title(caption);
        if !start_dir.as_os_str().is_empty() {
            dialog = dialog.set_directory(start_dir);
        }
        dialog.pick_file()
    }

    fn confirm(&mut self, title: &str, message: &str) -> bool {
        if has_rt_capabilities() {
            return zenity_question(title, message);
        }
        // rfd cannot pick the focused button; dismissing still yields No.
        let result = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::YesNo)
            .show();
        matches!(result, rfd::MessageDialogResult::Yes)
    }
}
