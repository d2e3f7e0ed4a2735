//! Filtering, paging and local removal for the asset list

use super::App;
use crate::list_engine::{self, CategoryFilter, ListView};
use tracing::{error, info, warn};

impl App {
    /// Re-derive the visible page from the collection and the view state.
    pub fn apply_filters(&mut self) {
        match list_engine::derive_view(&self.assets, &mut self.view_state, self.items_per_page) {
            Ok(view) => self.list_view = view,
            Err(e) => {
                error!(error = %e, items_per_page = self.items_per_page, "Invalid list configuration");
                self.list_view = ListView {
                    filtered: Vec::new(),
                    page_rows: Vec::new(),
                    current_page: 1,
                    total_pages: 1,
                    labels: list_engine::page_labels(1, 1),
                };
            }
        }
    }

    pub(crate) fn set_category_filter(&mut self, category: CategoryFilter) {
        if self.view_state.category_filter != category {
            self.view_state.category_filter = category;
            self.view_state.current_page = 1;
            self.apply_filters();
        }
    }

    /// Called after the search box changed
    pub(crate) fn search_changed(&mut self) {
        self.view_state.current_page = 1;
        self.apply_filters();
    }

    pub(crate) fn go_to_page(&mut self, page: usize) {
        self.view_state.current_page = page;
        self.apply_filters();
    }

    /// Delete in storage, then drop the row locally and re-derive paging.
    /// The local copy is trusted until the next full reload.
    pub(crate) fn delete_asset(&mut self, id: &str) {
        match self.db.delete_asset(id) {
            Ok(()) => {
                info!(id = %id, "Asset deleted");
                self.assets.retain(|a| a.id != id);
                self.apply_filters();
                self.notify_success("Asset deleted successfully", "The asset was removed from the inventory.");
            }
            Err(e) => {
                warn!(id = %id, error = %e, "Failed to delete asset");
                self.notify_error("Error deleting asset", e.to_string());
            }
        }
    }
}
