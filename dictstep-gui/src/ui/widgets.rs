//! Shared UI widgets used by the step list and the configure window.

use crate::utils::truncate_string;
use eframe::egui;

/// Background of a text field that failed validation: rgba(239, 0, 0, 50),
/// premultiplied.
pub const INVALID_FIELD_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(47, 0, 0, 50);

/// Renders a key-value row with a fixed-width label and custom value UI.
///
/// # Parameters
/// - `ui`: The egui UI context to render into
/// - `label`: The text label to display (truncated with a hover tooltip if too long)
/// - `label_w`: Fixed width allocated for the label area in pixels
/// - `value_ui`: Closure that renders the value UI component
pub fn kv_row_wrapped(
    ui: &mut egui::Ui,
    label: &str,
    label_w: f32,
    value_ui: impl FnOnce(&mut egui::Ui),
) {
    ui.horizontal(|ui| {
        let max_chars = ((label_w / 7.0).floor() as usize).max(10);
        let display_label = truncate_string(label, max_chars);
        ui.allocate_ui_with_layout(
            egui::vec2(label_w, 0.0),
            egui::Layout::left_to_right(egui::Align::Center),
            |ui| {
                let response = ui.add_sized(
                    [label_w, 0.0],
                    egui::Label::new(display_label).wrap(false),
                );
                response.on_hover_text(label);
            },
        );
        ui.add_space(8.0);
        value_ui(ui);
    });
}

/// Creates a styled button with consistent appearance.
pub fn styled_button(ui: &mut egui::Ui, label: impl Into<egui::WidgetText>) -> egui::Response {
    ui.add_sized(
        super::BUTTON_SIZE,
        egui::Button::new(label).min_size(super::BUTTON_SIZE),
    )
}

/// Text field background for a validity flag. Valid fields keep the theme's
/// own `neutral` fill.
pub fn field_fill(valid: bool, neutral: egui::Color32) -> egui::Color32 {
    if valid {
        neutral
    } else {
        INVALID_FIELD_FILL
    }
}
