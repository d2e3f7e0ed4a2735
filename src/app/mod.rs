//! App module - contains the main application state and logic

mod context_menu;
mod filters;
mod forms;
mod modals;
mod views;

pub use forms::FormMode;

use crate::db::{Asset, Database};
use crate::list_engine::{ListView, ViewState};
use crate::settings::Settings;
use crate::theme;
use crate::types::*;
use eframe::egui;
use forms::AssetForm;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) db: Database,
    pub(crate) active_view: View,
    // Collection as last fetched, minus optimistic local removals
    pub(crate) assets: Vec<Asset>,
    pub(crate) loading_failed: bool,
    // List view
    pub(crate) view_state: ViewState,
    pub(crate) list_view: ListView,
    pub(crate) items_per_page: usize,
    // Forms
    pub(crate) asset_form: AssetForm,
    pub(crate) form_error: Option<String>,
    // Delete confirmation
    pub(crate) pending_delete: Option<(String, String)>,
    // Database status page
    pub(crate) db_status: DbStatus,
    // Toast notification
    pub(crate) toast: Option<Toast>,
    pub(crate) central_panel_rect: Option<egui::Rect>,
    // Settings
    pub(crate) currency_symbol: String,
    pub(crate) database_path: Option<String>,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, db: Database, settings: Settings, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        let mut app = Self {
            db,
            active_view: View::Dashboard,
            assets: Vec::new(),
            loading_failed: false,
            view_state: ViewState::default(),
            list_view: ListView {
                filtered: Vec::new(),
                page_rows: Vec::new(),
                current_page: 1,
                total_pages: 1,
                labels: Vec::new(),
            },
            items_per_page: settings.items_per_page,
            asset_form: AssetForm::default(),
            form_error: None,
            pending_delete: None,
            db_status: DbStatus::Checking,
            toast: None,
            central_panel_rect: None,
            currency_symbol: settings.currency_symbol,
            database_path: settings.database_path,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        };

        app.reload_assets();
        app
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            items_per_page: self.items_per_page,
            currency_symbol: self.currency_symbol.clone(),
            database_path: self.database_path.clone(),
        };
        settings.save(&self.data_dir);
    }

    /// Fetch the full collection. On failure the collection is treated as
    /// absent and the user is told.
    pub(crate) fn reload_assets(&mut self) {
        match self.db.get_all_assets() {
            Ok(assets) => {
                debug!(count = assets.len(), "Assets loaded");
                self.assets = assets;
                self.loading_failed = false;
            }
            Err(e) => {
                error!(error = %e, "Failed to load assets");
                self.assets.clear();
                self.loading_failed = true;
                self.notify_error("Error!", format!("Error loading assets: {}", e));
            }
        }
        self.apply_filters();
    }

    /// Switch screens. Entering a data view refetches; entering the list
    /// resets search, filter and page.
    pub(crate) fn navigate(&mut self, view: View) {
        debug!(?view, "Navigate");
        match &view {
            View::AssetList => {
                self.view_state = ViewState::default();
                self.reload_assets();
            }
            View::Dashboard => self.reload_assets(),
            View::DatabaseStatus => {
                self.db_status = DbStatus::Checking;
            }
            View::AddAsset | View::EditAsset(_) => {}
        }
        self.active_view = view;
    }

    pub(crate) fn notify_success(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.show_toast(ToastKind::Success, title.into(), Some(message.into()));
    }

    pub(crate) fn notify_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.show_toast(ToastKind::Error, title.into(), Some(message.into()));
    }

    fn show_toast(&mut self, kind: ToastKind, title: String, message: Option<String>) {
        self.toast = Some(Toast {
            kind,
            title,
            message,
            started: Instant::now(),
        });
    }
}
