//! Utility functions for the dictstep GUI.
//!
//! - `strings`: label truncation and path display
//! - `system`: scheduler probe and zenity fallbacks for native dialogs

pub mod strings;
pub mod system;

pub use system::{has_rt_capabilities, zenity_file_dialog, zenity_question};

pub use strings::{display_path, truncate_string};
