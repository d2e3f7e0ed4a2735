//! View rendering (dashboard, asset list, database status)

use super::App;
use crate::list_engine::CategoryFilter;
use crate::stats::{self, DashboardStats};
use crate::theme;
use crate::types::{DbStatus, RowAction, View};
use crate::ui::components::{
    empty_state, manufacturer_pie_chart, monthly_bar_chart, pagination_bar, stat_card,
};
use crate::utils::{format_currency, format_date, format_percent};
use eframe::egui;
use tracing::{error, info};

impl App {
    // ========================================================================
    // DASHBOARD
    // ========================================================================

    pub(crate) fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        let mut action = None;

        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            let summary = DashboardStats::compute(&self.assets);
            let cards = [
                ("Number of Assets", summary.total_assets.to_string()),
                (
                    "Total Amount Invested",
                    format_currency(&self.currency_symbol, summary.total_invested),
                ),
                (
                    "Dispose Value Total",
                    format_currency(&self.currency_symbol, summary.total_dispose_value),
                ),
                ("Average Depreciation Rate", format_percent(summary.average_depreciation)),
            ];

            let gap = theme::SPACING_LG;
            let card_width = ((ui.available_width() - gap * 3.0) / 4.0 - theme::SPACING_XL * 2.0).max(120.0);
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = gap;
                for (caption, value) in &cards {
                    stat_card(ui, caption, value, card_width);
                }
            });
            ui.add_space(theme::SPACING_XL);

            let months = stats::monthly_purchase_totals(&self.assets);
            let manufacturers = stats::manufacturer_breakdown(&self.assets);
            ui.columns(2, |columns| {
                theme::card_frame().show(&mut columns[0], |ui| {
                    chart_heading(ui, "Total Purchase Price per Month", "Summary of monthly purchases");
                    monthly_bar_chart(ui, &months, &self.currency_symbol);
                });
                theme::card_frame().show(&mut columns[1], |ui| {
                    chart_heading(ui, "Assets by Manufacturer", "Top manufacturers by asset count");
                    manufacturer_pie_chart(ui, &manufacturers);
                });
            });
            ui.add_space(theme::SPACING_XL);

            theme::card_frame().show(ui, |ui| {
                ui.label(egui::RichText::new("Assets List").size(theme::FONT_HEADING).strong());
                ui.add_space(theme::SPACING_MD);
                if self.assets.is_empty() {
                    empty_state(ui, "No assets found");
                } else {
                    let rows: Vec<usize> = (0..self.assets.len()).collect();
                    action = self.render_asset_table(ui, &rows, true);
                }
            });
        });

        if let Some(action) = action {
            self.apply_row_action(action);
        }
    }

    // ========================================================================
    // ASSET LIST
    // ========================================================================

    pub(crate) fn render_asset_list(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Assets List").size(theme::FONT_TITLE).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = format!("{}  Add New Asset", egui_phosphor::regular::PLUS_CIRCLE);
                if ui.add(theme::button_accent(label)).clicked() {
                    self.open_add_form();
                }
            });
        });
        if self.active_view != View::AssetList {
            return;
        }
        ui.add_space(theme::SPACING_LG);

        // Search + category filter
        let mut category = self.view_state.category_filter;
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(egui_phosphor::regular::MAGNIFYING_GLASS).color(theme::TEXT_DIM));
            let search = ui.add(
                egui::TextEdit::singleline(&mut self.view_state.search_term)
                    .hint_text("Search assets...")
                    .desired_width((ui.available_width() - 260.0).max(160.0)),
            );
            if search.changed() {
                self.search_changed();
            }

            egui::ComboBox::from_id_salt("category_filter")
                .selected_text(category.label())
                .width(220.0)
                .show_ui(ui, |ui| {
                    for option in CategoryFilter::ALL {
                        ui.selectable_value(&mut category, option, option.label());
                    }
                });
        });
        self.set_category_filter(category);

        ui.add_space(theme::SPACING_SM);
        ui.add(
            egui::Label::new(
                egui::RichText::new(format!(
                    "Showing {} of {} assets",
                    self.list_view.filtered.len(),
                    self.assets.len()
                ))
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_DIM),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_MD);

        let mut action = None;
        let mut picked_page = None;
        theme::card_frame().show(ui, |ui| {
            if self.list_view.filtered.is_empty() {
                let text = if self.loading_failed {
                    "Assets could not be loaded"
                } else {
                    "No assets found"
                };
                empty_state(ui, text);
                return;
            }

            if self.list_view.page_rows.is_empty() {
                empty_state(ui, "No results on this page");
            } else {
                let rows = self.list_view.page_rows.clone();
                action = self.render_asset_table(ui, &rows, false);
            }

            ui.add_space(theme::SPACING_MD);
            ui.vertical_centered(|ui| {
                picked_page = pagination_bar(
                    ui,
                    &self.list_view.labels,
                    self.list_view.current_page,
                    self.list_view.total_pages,
                );
            });
        });

        if let Some(page) = picked_page {
            self.go_to_page(page);
        }
        if let Some(action) = action {
            self.apply_row_action(action);
        }
    }

    /// Table of the given rows (indices into `self.assets`). Returns the row
    /// action the user picked, if any.
    fn render_asset_table(&self, ui: &mut egui::Ui, rows: &[usize], with_date: bool) -> Option<RowAction> {
        use egui_extras::{Column, TableBuilder};

        let mut action = None;

        let mut headers = vec!["TITLE", "MANUFACTURER", "COLOR", "SERIAL NUMBER"];
        if with_date {
            headers.push("PURCHASE DATE");
        }
        headers.extend(["PURCHASE PRICE", "DEPRECIATION", "DISPOSE VALUE", "ASSIGNED TO"]);

        let mut table = TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .vscroll(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .sense(egui::Sense::click());
        for _ in &headers {
            table = table.column(Column::remainder().at_least(70.0).clip(true));
        }
        table = table.column(Column::exact(48.0));

        table
            .header(30.0, |mut header| {
                for title in &headers {
                    header.col(|ui| {
                        ui.label(
                            egui::RichText::new(*title)
                                .size(theme::FONT_SMALL)
                                .strong()
                                .color(theme::TEXT_MUTED),
                        );
                    });
                }
                header.col(|_ui| {});
            })
            .body(|mut body| {
                for &idx in rows {
                    let Some(asset) = self.assets.get(idx) else {
                        continue;
                    };

                    body.row(theme::ROW_HEIGHT, |mut row| {
                        let mut cells = vec![
                            asset.title.clone(),
                            asset.manufacturer.clone(),
                            asset.color.clone(),
                            asset.serial_number.clone(),
                        ];
                        if with_date {
                            cells.push(format_date(asset.purchase_date));
                        }
                        cells.extend([
                            format_currency(&self.currency_symbol, asset.purchase_price),
                            format_percent(asset.depreciation),
                            format_currency(&self.currency_symbol, asset.dispose_value),
                            asset.assigned_to.clone(),
                        ]);

                        for (i, cell) in cells.into_iter().enumerate() {
                            row.col(|ui| {
                                let mut text = egui::RichText::new(cell).size(theme::FONT_BODY);
                                if i == 0 {
                                    text = text.strong();
                                }
                                ui.add(egui::Label::new(text).truncate().selectable(false));
                            });
                        }

                        row.col(|ui| {
                            ui.menu_button(egui_phosphor::regular::DOTS_THREE, |ui| {
                                if let Some(picked) = self.asset_row_menu(ui, asset) {
                                    action = Some(picked);
                                }
                            });
                        });

                        let response = row.response();
                        if response.double_clicked() {
                            action = Some(RowAction::Edit(asset.id.clone()));
                        }
                        response.context_menu(|ui| {
                            if let Some(picked) = self.asset_row_menu(ui, asset) {
                                action = Some(picked);
                            }
                        });
                    });
                }
            });

        action
    }

    // ========================================================================
    // DATABASE STATUS
    // ========================================================================

    pub(crate) fn render_db_status(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Database Connection Status").size(theme::FONT_TITLE).strong());
        ui.add_space(theme::SPACING_LG);

        let mut refresh = false;
        theme::card_frame().show(ui, |ui| {
            ui.set_max_width(theme::FORM_WIDTH);
            match &self.db_status {
                DbStatus::Checking => {
                    ui.label(egui::RichText::new("Checking connection...").color(theme::TEXT_MUTED));
                }
                DbStatus::Connected { timestamp, asset_count } => {
                    ui.label(
                        egui::RichText::new(format!(
                            "{}  Connected successfully!",
                            egui_phosphor::regular::CHECK_CIRCLE
                        ))
                        .color(theme::STATUS_SUCCESS),
                    );
                    ui.label(egui::RichText::new(format!("Server time: {}", timestamp)).color(theme::TEXT_MUTED));
                    ui.label(egui::RichText::new(format!("Assets stored: {}", asset_count)).color(theme::TEXT_MUTED));
                }
                DbStatus::Error(message) => {
                    ui.label(
                        egui::RichText::new(format!(
                            "{}  Connection error: {}",
                            egui_phosphor::regular::WARNING_CIRCLE,
                            message
                        ))
                        .color(theme::STATUS_ERROR),
                    );
                }
            }
            ui.add_space(theme::SPACING_LG);
            let label = format!("{}  Check again", egui_phosphor::regular::ARROWS_CLOCKWISE);
            refresh = ui.add(theme::button(label)).clicked();
        });

        if refresh {
            self.db_status = DbStatus::Checking;
            ui.ctx().request_repaint();
        } else if self.db_status == DbStatus::Checking {
            // first frame shows the "checking" state, the check runs right after
            self.check_database();
            ui.ctx().request_repaint();
        }
    }

    fn check_database(&mut self) {
        let status = self
            .db
            .server_time()
            .and_then(|timestamp| Ok((timestamp, self.db.asset_count()?)));
        self.db_status = match status {
            Ok((timestamp, asset_count)) => {
                info!(%timestamp, asset_count, "Database connection OK");
                DbStatus::Connected { timestamp, asset_count }
            }
            Err(e) => {
                error!(error = %e, "Database connection check failed");
                DbStatus::Error(e.to_string())
            }
        };
    }
}

fn chart_heading(ui: &mut egui::Ui, title: &str, description: &str) {
    ui.label(egui::RichText::new(title).size(theme::FONT_HEADING).strong());
    ui.label(egui::RichText::new(description).size(theme::FONT_LABEL).color(theme::TEXT_DIM));
    ui.add_space(theme::SPACING_MD);
}
