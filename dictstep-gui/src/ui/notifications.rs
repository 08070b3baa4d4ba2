use super::*;

const TOAST_SECONDS: f32 = 2.8;

impl GuiApp {
    /// Slides recent notifications in from the right edge and drops them
    /// after a few seconds.
    pub(crate) fn render_notifications(&mut self, ctx: &egui::Context) {
        self.notification_handler
            .cleanup_old_notifications(TOAST_SECONDS);
        if self.notification_handler.is_empty() {
            return;
        }

        let now = Instant::now();
        let screen_rect = ctx.screen_rect();
        let max_width = 380.0;
        let mut y = screen_rect.min.y + 32.0;
        let x = screen_rect.max.x - 4.0;
        let smooth = |t: f32| t * t * (3.0 - 2.0 * t);
        for (idx, notification) in self.notification_handler.recent().enumerate() {
            let age = now.duration_since(notification.created_at).as_secs_f32();
            let slide_in = 0.35;
            let slide_out = 0.45;
            let slide = if age < slide_in {
                smooth((age / slide_in).clamp(0.0, 1.0))
            } else if age > TOAST_SECONDS - slide_out {
                smooth(((TOAST_SECONDS - age) / slide_out).clamp(0.0, 1.0))
            } else {
                1.0
            };
            let x_pos = x + (1.0 - slide) * (max_width + 24.0);
            let fill = egui::Color32::from_rgba_premultiplied(20, 20, 20, 200);
            let stroke = egui::Color32::from_rgba_premultiplied(80, 80, 80, 200);
            let text = egui::Color32::from_rgba_premultiplied(235, 235, 235, 230);

            egui::Area::new(egui::Id::new(("info_toast", idx)))
                .order(egui::Order::Foreground)
                .interactable(false)
                .pivot(egui::Align2::RIGHT_TOP)
                .fixed_pos(egui::pos2(x_pos, y))
                .show(ctx, |ui| {
                    egui::Frame::popup(ui.style())
                        .fill(fill)
                        .stroke(egui::Stroke::new(1.0, stroke))
                        .rounding(egui::Rounding::same(6.0))
                        .show(ui, |ui| {
                            ui.set_max_width(max_width);
                            ui.label(
                                RichText::new(&notification.title)
                                    .color(text)
                                    .strong()
                                    .size(16.0),
                            );
                            ui.label(RichText::new(&notification.message).color(text).size(14.0));
                        });
                });
            y += 66.0;
        }
        ctx.request_repaint_after(Duration::from_millis(16));
    }
}
