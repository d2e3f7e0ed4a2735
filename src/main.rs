#![windows_subsystem = "windows"]
//! Asset Inventory - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod db;
mod error;
mod list_engine;
mod settings;
mod stats;
mod theme;
mod types;
mod ui;
mod utils;

use app::{App, FormMode};
use constants::*;
use db::Database;
use eframe::egui;
use tracing::{error, info};
use types::*;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "asset-inventory.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,asset_inventory=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = utils::get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Asset Inventory starting");

    let settings = settings::Settings::load(&data_dir);

    let db_path = settings.database_path_or_default(&data_dir);
    let db = match Database::open(&db_path) {
        Ok(db) => {
            info!(path = %db_path.display(), "Database opened");
            db
        }
        Err(e) => {
            error!(error = %e, path = %db_path.display(), "Failed to open database");
            eprintln!("Failed to open database at {}: {}", db_path.display(), e);
            std::process::exit(1);
        }
    };

    // Saved window position/size
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(1400.0, 860.0)))
        .with_min_inner_size([1100.0, 680.0])
        .with_title(APP_NAME);

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, db, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Left sidebar - navigation (must be added BEFORE CentralPanel)
        egui::SidePanel::left("nav_panel")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_ELEVATED)
                    .inner_margin(egui::Margin::symmetric(12, 16)),
            )
            .show(ctx, |ui| self.render_sidebar(ui));

        // Central panel - active view (MUST be added LAST after all side panels)
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(24)),
            )
            .show(ctx, |ui| {
                // Store panel rect for toast positioning
                self.central_panel_rect = Some(ui.max_rect());

                match self.active_view.clone() {
                    View::Dashboard => self.render_dashboard(ui),
                    View::AssetList => self.render_asset_list(ui),
                    View::AddAsset => self.render_asset_form(ui, FormMode::Create, None),
                    View::EditAsset(id) => self.render_asset_form(ui, FormMode::Edit, Some(id)),
                    View::DatabaseStatus => self.render_db_status(ui),
                }
            });

        self.render_delete_modal(ctx);
        self.render_toast(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}

// ============================================================================
// SIDEBAR & TOAST
// ============================================================================

impl App {
    fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        let panel_rect = ui.max_rect();

        ui.add(
            egui::Label::new(
                egui::RichText::new(format!("{}  {}", egui_phosphor::regular::PACKAGE, APP_NAME))
                    .size(theme::FONT_TITLE)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_XL);

        let sections: [(&str, &[(&str, &str, View)]); 3] = [
            ("BASIC", &[(egui_phosphor::regular::SQUARES_FOUR, "Dashboard", View::Dashboard)]),
            (
                "ASSETS",
                &[
                    (egui_phosphor::regular::PLUS_CIRCLE, "Add Asset", View::AddAsset),
                    (egui_phosphor::regular::LIST_BULLETS, "Assets List", View::AssetList),
                ],
            ),
            (
                "SETTINGS",
                &[(egui_phosphor::regular::DATABASE, "Database Status", View::DatabaseStatus)],
            ),
        ];

        let mut clicked = None;
        for (section, items) in sections {
            ui.add(
                egui::Label::new(egui::RichText::new(section).size(theme::FONT_SMALL).color(theme::TEXT_DIM))
                    .selectable(false),
            );
            ui.add_space(theme::SPACING_SM);
            for (icon, label, view) in items {
                let active = match (&self.active_view, view) {
                    // editing an asset still belongs to the list
                    (View::EditAsset(_), View::AssetList) => true,
                    (current, view) => current == view,
                };
                if theme::nav_item(ui, icon, label, active) {
                    clicked = Some(view.clone());
                }
            }
            ui.add_space(theme::SPACING_LG);
        }

        match clicked {
            Some(View::AddAsset) => self.open_add_form(),
            Some(view) => self.navigate(view),
            None => {}
        }

        // Version pinned to the bottom of the panel
        ui.painter().text(
            egui::pos2(panel_rect.left() + 4.0, panel_rect.bottom() - 4.0),
            egui::Align2::LEFT_BOTTOM,
            format!("v{}", APP_VERSION),
            egui::FontId::proportional(theme::FONT_SMALL),
            theme::TEXT_DIM,
        );
    }

    /// Bottom-right of the central panel, 3s visible then fade, pause on hover
    fn render_toast(&mut self, ctx: &egui::Context) {
        let (Some(toast), Some(panel_rect)) = (self.toast.clone(), self.central_panel_rect) else {
            return;
        };

        let visible_duration = 3.0;
        let fade_duration = 0.5;
        let total_duration = visible_duration + fade_duration;
        let margin = 12.0;

        let accent = match toast.kind {
            ToastKind::Success => theme::STATUS_SUCCESS,
            ToastKind::Error => theme::STATUS_ERROR,
        };
        let icon = match toast.kind {
            ToastKind::Success => egui_phosphor::regular::CHECK_CIRCLE,
            ToastKind::Error => egui_phosphor::regular::WARNING_CIRCLE,
        };

        let toast_pos = egui::pos2(panel_rect.right() - margin, panel_rect.bottom() - margin);
        let elapsed = toast.started.elapsed().as_secs_f32();
        let alpha = if elapsed > visible_duration {
            ((total_duration - elapsed) / fade_duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let faded = |c: egui::Color32, max: f32| {
            egui::Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), (max * alpha) as u8)
        };

        let mut dismissed = false;
        let response = egui::Area::new(egui::Id::new("toast"))
            .fixed_pos(toast_pos)
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(faded(theme::BG_SURFACE, 240.0))
                    .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, faded(accent, 140.0)))
                    .corner_radius(theme::RADIUS_MEDIUM)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.set_max_width(320.0);
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(icon).size(theme::FONT_HEADING).color(faded(accent, 255.0)));
                            ui.vertical(|ui| {
                                ui.label(
                                    egui::RichText::new(&toast.title)
                                        .strong()
                                        .color(faded(theme::TEXT_PRIMARY, 255.0)),
                                );
                                if let Some(message) = &toast.message {
                                    ui.label(
                                        egui::RichText::new(message)
                                            .size(theme::FONT_LABEL)
                                            .color(faded(theme::TEXT_MUTED, 255.0)),
                                    );
                                }
                            });
                            if ui
                                .add(egui::Button::new(egui_phosphor::regular::X).frame(false))
                                .clicked()
                            {
                                dismissed = true;
                            }
                        });
                    });
            });

        if dismissed {
            self.toast = None;
            return;
        }

        // Pause timer while hovering
        if response.response.hovered() {
            if let Some(toast) = self.toast.as_mut() {
                toast.started = std::time::Instant::now();
            }
        }

        if elapsed >= total_duration {
            self.toast = None;
        } else {
            ctx.request_repaint();
        }
    }
}
