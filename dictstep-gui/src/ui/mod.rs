use eframe::egui;
use eframe::egui::RichText;
use std::time::{Duration, Instant};

use crate::ui_state::ConfigureAction;
use crate::utils::{display_path, truncate_string};
use crate::GuiApp;
use widgets::{field_fill, kv_row_wrapped, styled_button};

mod configure;
mod notifications;
mod steps;
mod widgets;

pub(crate) const BUTTON_SIZE: egui::Vec2 = egui::vec2(96.0, 26.0);
