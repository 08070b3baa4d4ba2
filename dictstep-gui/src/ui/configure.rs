//! The configure window for a dict deserializer step.
//!
//! Every edit goes straight into the step's `ConfigureDialog`, which
//! re-validates and updates its field flags; this module only turns those
//! flags into field backgrounds and forwards button presses.

use super::*;

const LABEL_WIDTH: f32 = 90.0;
const BROWSE_WIDTH: f32 = 32.0;

impl GuiApp {
    /// Renders the configure window when a step is being configured.
    ///
    /// # Behaviour
    /// - Identifier and input edits re-run validation on every change
    /// - Invalid fields get a translucent red background
    /// - "..." opens the native file picker
    /// - OK runs the accept flow, which may ask for confirmation
    /// - Cancel, Escape or the close button reject the dialog
    ///
    /// Button handling happens after the window is drawn, because the
    /// picker and the confirmation prompt block until the user answers.
    pub(crate) fn render_configure_window(&mut self, ctx: &egui::Context) {
        let Some(step_id) = self.configure_window.open_step else {
            return;
        };
        let Some(dialog) = self.configure_window.dialogs.get_mut(&step_id) else {
            self.configure_window.open_step = None;
            return;
        };

        let mut open = true;
        let mut action = None;
        let window_size = egui::vec2(460.0, 120.0);
        let default_pos = ctx.available_rect().center() - window_size * 0.5;
        egui::Window::new(format!("Configure step #{step_id}"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_pos(default_pos)
            .default_width(window_size.x)
            .show(ctx, |ui| {
                let validity = dialog.validity();
                let field_width = ui.available_width() - LABEL_WIDTH - BROWSE_WIDTH - 24.0;

                kv_row_wrapped(ui, "Identifier", LABEL_WIDTH, |ui| {
                    let mut text = dialog.identifier().to_string();
                    let response = ui
                        .scope(|ui| {
                            let neutral = ui.visuals().extreme_bg_color;
                            ui.visuals_mut().extreme_bg_color =
                                field_fill(validity.identifier, neutral);
                            ui.add_sized(
                                [field_width + BROWSE_WIDTH + 8.0, 0.0],
                                egui::TextEdit::singleline(&mut text).hint_text("step identifier"),
                            )
                        })
                        .inner;
                    if response.changed() {
                        dialog.set_identifier_text(text);
                    }
                });
                ui.add_space(4.0);

                kv_row_wrapped(ui, "Input", LABEL_WIDTH, |ui| {
                    let mut text = dialog.input().to_string();
                    let response = ui
                        .scope(|ui| {
                            let neutral = ui.visuals().extreme_bg_color;
                            ui.visuals_mut().extreme_bg_color = field_fill(validity.input, neutral);
                            ui.add_sized(
                                [field_width, 0.0],
                                egui::TextEdit::singleline(&mut text).hint_text("input file"),
                            )
                        })
                        .inner;
                    if response.changed() {
                        dialog.set_input_text(text);
                    }
                    if ui
                        .add_sized([BROWSE_WIDTH, 0.0], egui::Button::new("..."))
                        .on_hover_text("Choose Input File")
                        .clicked()
                    {
                        action = Some(ConfigureAction::Browse);
                    }
                });
                ui.add_space(8.0);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if styled_button(ui, "OK").clicked() {
                        action = Some(ConfigureAction::Accept);
                    }
                    if styled_button(ui, "Cancel").clicked() {
                        action = Some(ConfigureAction::Cancel);
                    }
                });
            });

        if ctx.input(|input| input.key_pressed(egui::Key::Escape)) || !open {
            action = Some(ConfigureAction::Cancel);
        }
        if let Some(action) = action {
            self.handle_configure_action(step_id, action);
        }
    }
}
