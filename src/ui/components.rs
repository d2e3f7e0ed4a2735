//! Reusable UI components
//!
//! Standalone widgets used by the dashboard and the asset list. None of them
//! touch application state; they return what the user clicked.

use crate::list_engine::PageLabel;
use crate::stats::{ManufacturerShare, MonthlyTotal};
use crate::theme;
use eframe::egui;
use std::f32::consts::TAU;

/// Dashboard card with a caption and a large value
pub fn stat_card(ui: &mut egui::Ui, caption: &str, value: &str, width: f32) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(width);
        ui.add(
            egui::Label::new(egui::RichText::new(caption).size(theme::FONT_LABEL).color(theme::TEXT_MUTED))
                .selectable(false),
        );
        ui.add_space(theme::SPACING_SM);
        ui.label(egui::RichText::new(value).size(theme::FONT_STAT).strong());
    });
}

/// Centered placeholder for empty tables and charts
pub fn empty_state(ui: &mut egui::Ui, text: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(theme::SPACING_XL);
        ui.label(egui::RichText::new(text).color(theme::TEXT_DIM));
        ui.add_space(theme::SPACING_XL);
    });
}

/// Previous / page labels / next. Returns the page the user picked.
pub fn pagination_bar(
    ui: &mut egui::Ui,
    labels: &[PageLabel],
    current_page: usize,
    total_pages: usize,
) -> Option<usize> {
    let mut picked = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = theme::SPACING_SM;

        let prev = ui.add_enabled(
            current_page > 1,
            egui::Button::new(format!("{} Previous", egui_phosphor::regular::CARET_LEFT)).frame(false),
        );
        if prev.clicked() {
            picked = Some(current_page.saturating_sub(1).max(1));
        }

        for label in labels {
            match *label {
                PageLabel::Page(n) => {
                    let active = n == current_page;
                    let text = egui::RichText::new(n.to_string()).color(if active {
                        theme::TEXT_PRIMARY
                    } else {
                        theme::TEXT_MUTED
                    });
                    let button = egui::Button::new(text)
                        .min_size(egui::vec2(theme::PAGE_BUTTON_SIZE, theme::PAGE_BUTTON_SIZE))
                        .fill(if active { theme::ACCENT } else { egui::Color32::TRANSPARENT });
                    if ui.add(button).clicked() && !active {
                        picked = Some(n);
                    }
                }
                PageLabel::Ellipsis => {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(egui_phosphor::regular::DOTS_THREE).color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                }
            }
        }

        let next = ui.add_enabled(
            current_page < total_pages,
            egui::Button::new(format!("Next {}", egui_phosphor::regular::CARET_RIGHT)).frame(false),
        );
        if next.clicked() {
            picked = Some((current_page + 1).min(total_pages));
        }
    });

    picked
}

/// Vertical bar per month, scaled to the largest month
pub fn monthly_bar_chart(ui: &mut egui::Ui, months: &[MonthlyTotal], currency_symbol: &str) {
    let width = ui.available_width();
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, theme::CHART_HEIGHT), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    let label_height = 18.0;
    let plot = egui::Rect::from_min_max(rect.min, egui::pos2(rect.max.x, rect.max.y - label_height));
    painter.line_segment(
        [plot.left_bottom(), plot.right_bottom()],
        egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_DEFAULT),
    );

    let max = months.iter().map(|m| m.total).fold(0.0_f64, f64::max);
    let slot = plot.width() / months.len().max(1) as f32;
    let bar_width = slot * 0.6;
    let hover = response.hover_pos();

    for (i, month) in months.iter().enumerate() {
        let center_x = plot.left() + slot * (i as f32 + 0.5);
        let fraction = if max > 0.0 { (month.total / max) as f32 } else { 0.0 };
        let bar = egui::Rect::from_min_max(
            egui::pos2(center_x - bar_width / 2.0, plot.bottom() - plot.height() * fraction),
            egui::pos2(center_x + bar_width / 2.0, plot.bottom()),
        );
        if month.total > 0.0 {
            painter.rect_filled(bar, theme::RADIUS_DEFAULT, theme::CHART_BAR);
        }
        painter.text(
            egui::pos2(center_x, rect.bottom() - label_height / 2.0),
            egui::Align2::CENTER_CENTER,
            month.month,
            egui::FontId::proportional(theme::FONT_SMALL),
            theme::TEXT_MUTED,
        );

        let column = egui::Rect::from_min_max(
            egui::pos2(center_x - slot / 2.0, plot.top()),
            egui::pos2(center_x + slot / 2.0, plot.bottom()),
        );
        if hover.is_some_and(|p| column.contains(p)) {
            response.clone().on_hover_text(format!(
                "{}: {}",
                month.month,
                crate::utils::format_currency(currency_symbol, month.total)
            ));
        }
    }
}

/// Pie of manufacturer counts with a legend on the right
pub fn manufacturer_pie_chart(ui: &mut egui::Ui, shares: &[ManufacturerShare]) {
    let total: usize = shares.iter().map(|s| s.count).sum();
    if total == 0 {
        empty_state(ui, "No data available");
        return;
    }

    ui.horizontal(|ui| {
        let size = theme::CHART_HEIGHT;
        let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let radius = size / 2.0 - theme::SPACING_MD;

        let mut start = -TAU / 4.0;
        for (i, share) in shares.iter().enumerate() {
            let sweep = TAU * share.count as f32 / total as f32;
            // fan of thin triangles so slices over 180 degrees stay convex
            let steps = ((sweep / TAU) * 96.0).ceil().max(1.0) as usize;
            let color = theme::chart_color(i);
            for step in 0..steps {
                let a0 = start + sweep * step as f32 / steps as f32;
                let a1 = start + sweep * (step + 1) as f32 / steps as f32;
                painter.add(egui::Shape::convex_polygon(
                    vec![
                        center,
                        center + radius * egui::vec2(a0.cos(), a0.sin()),
                        center + radius * egui::vec2(a1.cos(), a1.sin()),
                    ],
                    color,
                    egui::Stroke::NONE,
                ));
            }
            start += sweep;
        }

        ui.add_space(theme::SPACING_LG);
        ui.vertical(|ui| {
            for (i, share) in shares.iter().enumerate() {
                ui.horizontal(|ui| {
                    let (swatch, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                    ui.painter().rect_filled(swatch, 2.0, theme::chart_color(i));
                    ui.label(
                        egui::RichText::new(format!("{} ({})", share.name, share.count))
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_SECONDARY),
                    );
                });
            }
        });
    });
}
