//! Main window: menu bar and the list of workflow steps.

use super::*;

enum StepListAction {
    Configure(u64),
    Remove(u64),
}

impl GuiApp {
    pub(crate) fn render_menu_bar(&mut self, ctx: &egui::Context) {
        let editable = !self.configure_window.is_open();
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.add_enabled_ui(editable, |ui| {
                    ui.menu_button("Workflow", |ui| {
                        if ui.button("Add step").clicked() {
                            self.add_step();
                            ui.close_menu();
                        }
                        if ui.button("Save").clicked() {
                            self.save_workflow();
                            ui.close_menu();
                        }
                    });
                });
                ui.separator();
                let marker = if self.workflow_dirty { " *" } else { "" };
                ui.label(format!("{}{marker}", self.workflow.name));
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(RichText::new(&self.status).small());
        });
    }

    /// Renders one row per step with its identifier, input and configured
    /// badge. Steps of other kinds are listed but cannot be configured here.
    pub(crate) fn render_step_list(&mut self, ctx: &egui::Context) {
        let mut action = None;
        let editable = !self.configure_window.is_open();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.set_enabled(editable);
            if self.workflow.steps.is_empty() {
                ui.label("No steps yet. Use Workflow > Add step.");
                return;
            }
            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("step_list")
                    .num_columns(5)
                    .striped(true)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("#").strong());
                        ui.label(RichText::new("Identifier").strong());
                        ui.label(RichText::new("Input").strong());
                        ui.label(RichText::new("Status").strong());
                        ui.label("");
                        ui.end_row();

                        for step in &self.workflow.steps {
                            ui.label(step.id.to_string());
                            ui.label(truncate_string(step.identifier(), 24))
                                .on_hover_text(step.identifier());
                            let input = step
                                .config
                                .get("input")
                                .and_then(|value| value.as_str())
                                .unwrap_or("");
                            ui.label(display_path(input, 40)).on_hover_text(input);
                            match self.step_status.get(&step.id) {
                                Some(true) => {
                                    ui.label(
                                        RichText::new("configured")
                                            .color(egui::Color32::from_rgb(120, 200, 120)),
                                    );
                                }
                                Some(false) => {
                                    ui.label(
                                        RichText::new("not configured")
                                            .color(egui::Color32::from_rgb(230, 110, 110)),
                                    );
                                }
                                None => {
                                    ui.label(RichText::new(&step.kind).weak());
                                }
                            }
                            ui.horizontal(|ui| {
                                let configurable = self.step_status.contains_key(&step.id);
                                if ui
                                    .add_enabled(configurable, egui::Button::new("Configure"))
                                    .clicked()
                                {
                                    action = Some(StepListAction::Configure(step.id));
                                }
                                if ui.button("Remove").clicked() {
                                    action = Some(StepListAction::Remove(step.id));
                                }
                            });
                            ui.end_row();
                        }
                    });
            });
        });

        match action {
            Some(StepListAction::Configure(id)) => self.open_configure(id),
            Some(StepListAction::Remove(id)) => self.remove_step(id),
            None => {}
        }
    }
}
