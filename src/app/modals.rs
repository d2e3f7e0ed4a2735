//! Modal dialogs (delete confirmation)

use super::App;
use crate::theme;
use eframe::egui;

impl App {
    pub(crate) fn render_delete_modal(&mut self, ctx: &egui::Context) {
        let Some((id, title)) = self.pending_delete.clone() else {
            return;
        };

        let mut confirmed = false;
        let mut cancelled = false;

        let modal_area = egui::Modal::default_area(egui::Id::new("delete_modal"))
            .default_width(340.0 + theme::SPACING_XL * 2.0);
        let modal_response = egui::Modal::new(egui::Id::new("delete_modal"))
            .area(modal_area)
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_min_width(340.0);
                ui.set_max_width(340.0);

                ui.vertical_centered(|ui| {
                    ui.add_space(theme::SPACING_SM);
                    ui.label(
                        egui::RichText::new(egui_phosphor::regular::WARNING_CIRCLE)
                            .size(32.0)
                            .color(theme::STATUS_ERROR),
                    );
                    ui.add_space(theme::SPACING_MD);
                    ui.label(egui::RichText::new("Delete asset?").size(theme::FONT_HEADING).strong());
                    ui.add_space(theme::SPACING_SM);
                    ui.label(
                        egui::RichText::new(format!("\"{}\" will be removed permanently.", title))
                            .color(theme::TEXT_MUTED),
                    );
                    ui.add_space(theme::SPACING_XL);
                });

                ui.horizontal(|ui| {
                    if ui.add(theme::button("Cancel")).clicked() {
                        cancelled = true;
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let label = format!("{}  Delete", egui_phosphor::regular::TRASH);
                        if ui.add(theme::button_danger(label)).clicked() {
                            confirmed = true;
                        }
                    });
                });
            });

        if confirmed {
            self.pending_delete = None;
            self.delete_asset(&id);
        } else if cancelled || modal_response.should_close() {
            self.pending_delete = None;
        }
    }
}
