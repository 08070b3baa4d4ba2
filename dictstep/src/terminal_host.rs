use dictstep_core::DialogHost;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Prompts on the terminal. There is no file picker; the input path comes
/// from the command line instead.
pub struct TerminalHost {
    pub assume_yes: bool,
}

impl DialogHost for TerminalHost {
    fn pick_open_file(&mut self, _caption: &str, _start_dir: &Path) -> Option<PathBuf> {
        None
    }

    fn confirm(&mut self, title: &str, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{title}: {message} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(_) => false,
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
