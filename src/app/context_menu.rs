//! Edit / delete menu for asset rows (actions button and right-click)

use super::App;
use crate::db::Asset;
use crate::theme;
use crate::types::RowAction;
use eframe::egui;

impl App {
    pub(crate) fn asset_row_menu(&self, ui: &mut egui::Ui, asset: &Asset) -> Option<RowAction> {
        let mut action = None;
        ui.spacing_mut().item_spacing.y = 2.0;

        let edit_label = format!("{}  Edit", egui_phosphor::regular::PENCIL_SIMPLE);
        let delete_label = format!("{}  Delete", egui_phosphor::regular::TRASH);
        theme::set_menu_width(ui, &[edit_label.as_str(), delete_label.as_str()]);

        if theme::menu_item(ui, egui_phosphor::regular::PENCIL_SIMPLE, "Edit", theme::TEXT_SECONDARY) {
            action = Some(RowAction::Edit(asset.id.clone()));
            ui.close_menu();
        }
        if theme::menu_item(ui, egui_phosphor::regular::TRASH, "Delete", theme::STATUS_ERROR) {
            action = Some(RowAction::Delete {
                id: asset.id.clone(),
                title: asset.title.clone(),
            });
            ui.close_menu();
        }

        action
    }

    pub(crate) fn apply_row_action(&mut self, action: RowAction) {
        match action {
            RowAction::Edit(id) => self.open_edit_form(&id),
            RowAction::Delete { id, title } => self.pending_delete = Some((id, title)),
        }
    }
}
