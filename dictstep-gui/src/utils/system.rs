use std::path::{Path, PathBuf};
use std::process::Command;

/// True when the process runs under a real-time scheduling policy. GTK
/// dialogs misbehave there, so native dialogs go through zenity instead.
pub fn has_rt_capabilities() -> bool {
    #[cfg(unix)]
    unsafe {
        let policy = libc::sched_getscheduler(0);
        policy == libc::SCHED_FIFO || policy == libc::SCHED_RR
    }
    #[cfg(not(unix))]
    false
}

pub fn zenity_file_dialog(title: &str, start_dir: &Path) -> Option<PathBuf> {
    let mut cmd = Command::new("zenity");
    cmd.arg("--file-selection").arg("--title").arg(title);

    if !start_dir.as_os_str().is_empty() {
        // zenity only treats the value as a directory with a trailing separator
        let mut seed = start_dir.as_os_str().to_owned();
        seed.push(std::path::MAIN_SEPARATOR_STR);
        cmd.arg("--filename").arg(seed);
    }

    cmd.output().ok().and_then(|output| {
        if output.status.success() {
            let path_string = String::from_utf8_lossy(&output.stdout);
            let path_str = path_string.trim();
            if !path_str.is_empty() {
                Some(PathBuf::from(path_str))
            } else {
                None
            }
        } else {
            None
        }
    })
}

/// Yes/no question with "No" focused. Any failure to run zenity is a "no".
pub fn zenity_question(title: &str, text: &str) -> bool {
    Command::new("zenity")
        .arg("--question")
        .arg("--default-cancel")
        .arg("--title")
        .arg(title)
        .arg("--text")
        .arg(text)
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}
