//! Add / edit asset forms

use super::App;
use crate::db::{Asset, NewAsset};
use crate::error::{InventoryError, Result};
use crate::theme;
use crate::types::View;
use chrono::NaiveDate;
use eframe::egui;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Raw text of every input on the asset form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetForm {
    pub title: String,
    pub manufacturer: String,
    pub color: String,
    pub serial_number: String,
    pub purchase_date: String,
    pub purchase_price: String,
    pub depreciation: String,
    pub dispose_value: String,
    pub assigned_to: String,
}

impl AssetForm {
    pub fn from_asset(asset: &Asset) -> Self {
        Self {
            title: asset.title.clone(),
            manufacturer: asset.manufacturer.clone(),
            color: asset.color.clone(),
            serial_number: asset.serial_number.clone(),
            purchase_date: asset.purchase_date.map(|d| d.to_string()).unwrap_or_default(),
            purchase_price: asset.purchase_price.to_string(),
            depreciation: asset.depreciation.to_string(),
            dispose_value: asset.dispose_value.to_string(),
            assigned_to: asset.assigned_to.clone(),
        }
    }

    /// Checks every field and parses the numeric ones. Returns the first
    /// problem in form order.
    pub fn validate(&self, mode: FormMode, today: NaiveDate) -> Result<NewAsset> {
        let title = required("Title", &self.title)?;
        let manufacturer = required("Manufacturer", &self.manufacturer)?;
        let color = required("Color", &self.color)?;
        let serial_number = required("Serial Number", &self.serial_number)?;

        let purchase_date = match (self.purchase_date.trim(), mode) {
            ("", FormMode::Create) => today,
            ("", FormMode::Edit) => {
                return Err(InventoryError::MissingField { field: "Purchase Date" })
            }
            (raw, _) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| InventoryError::InvalidDate { field: "Purchase Date" })?,
        };

        let purchase_price = amount("Purchase Price", &self.purchase_price)?;
        let depreciation = amount("Depreciation", &self.depreciation)?;
        let dispose_value = amount("Dispose Value", &self.dispose_value)?;
        let assigned_to = required("Assigned To", &self.assigned_to)?;

        Ok(NewAsset {
            title,
            manufacturer,
            color,
            serial_number,
            purchase_date: Some(purchase_date),
            purchase_price,
            depreciation,
            dispose_value,
            assigned_to,
        })
    }
}

fn required(field: &'static str, raw: &str) -> Result<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(InventoryError::MissingField { field });
    }
    Ok(value.to_string())
}

fn amount(field: &'static str, raw: &str) -> Result<f64> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(InventoryError::MissingField { field });
    }
    let parsed: f64 = value
        .parse()
        .map_err(|_| InventoryError::InvalidNumber { field })?;
    if !parsed.is_finite() {
        return Err(InventoryError::InvalidNumber { field });
    }
    if parsed < 0.0 {
        return Err(InventoryError::NegativeNumber { field });
    }
    Ok(parsed)
}

impl App {
    pub(crate) fn open_add_form(&mut self) {
        self.asset_form = AssetForm::default();
        self.form_error = None;
        self.navigate(View::AddAsset);
    }

    pub(crate) fn open_edit_form(&mut self, id: &str) {
        match self.db.get_asset(id) {
            Ok(Some(asset)) => {
                self.asset_form = AssetForm::from_asset(&asset);
                self.form_error = None;
                self.navigate(View::EditAsset(asset.id));
            }
            Ok(None) => {
                self.notify_error("Error", InventoryError::NotFound(id.to_string()).to_string());
            }
            Err(e) => {
                error!(id = %id, error = %e, "Failed to load asset");
                self.notify_error("Error", "Failed to load asset.");
            }
        }
    }

    fn submit_form(&mut self, mode: FormMode, id: Option<&str>) {
        let today = chrono::Local::now().date_naive();
        let payload = match self.asset_form.validate(mode, today) {
            Ok(payload) => payload,
            Err(e) => {
                self.form_error = Some(e.to_string());
                self.notify_error("Error!", e.to_string());
                return;
            }
        };

        let result = match (mode, id) {
            (FormMode::Edit, Some(id)) => self.db.update_asset(id, &payload),
            _ => self.db.create_asset(&payload),
        };

        match result {
            Ok(asset) => {
                info!(id = %asset.id, title = %asset.title, ?mode, "Asset saved");
                match mode {
                    FormMode::Create => self.notify_success("Success!", "Asset added successfully!"),
                    FormMode::Edit => self.notify_success(
                        "Asset Updated",
                        format!("Successfully updated {}", asset.title),
                    ),
                }
                self.asset_form = AssetForm::default();
                self.form_error = None;
                self.navigate(View::AssetList);
            }
            Err(e) => {
                error!(error = %e, ?mode, "Failed to save asset");
                self.form_error = Some(e.to_string());
                self.notify_error("Error!", e.to_string());
            }
        }
    }

    pub(crate) fn render_asset_form(&mut self, ui: &mut egui::Ui, mode: FormMode, id: Option<String>) {
        let heading = match mode {
            FormMode::Create => "Add New Asset",
            FormMode::Edit => "Edit Asset",
        };

        if ui
            .add(egui::Button::new(format!("{}  Go Back", egui_phosphor::regular::ARROW_LEFT)).frame(false))
            .clicked()
        {
            self.navigate(View::AssetList);
            return;
        }
        ui.add_space(theme::SPACING_MD);

        let mut submitted = false;
        theme::card_frame().show(ui, |ui| {
            ui.set_max_width(theme::FORM_WIDTH);
            ui.label(egui::RichText::new(heading).size(theme::FONT_TITLE).strong());
            ui.add_space(theme::SPACING_LG);

            let form = &mut self.asset_form;
            let date_hint = match mode {
                FormMode::Create => "YYYY-MM-DD (defaults to today)",
                FormMode::Edit => "YYYY-MM-DD",
            };
            let fields: [(&str, &mut String, &str); 9] = [
                ("Title", &mut form.title, "Asset title"),
                ("Manufacturer", &mut form.manufacturer, "Manufacturer"),
                ("Color", &mut form.color, "Color"),
                ("Serial Number", &mut form.serial_number, "Serial Number"),
                ("Purchase Date", &mut form.purchase_date, date_hint),
                ("Purchase Price", &mut form.purchase_price, "0.00"),
                ("Depreciation", &mut form.depreciation, "Percentage, e.g. 25"),
                ("Dispose Value", &mut form.dispose_value, "0.00"),
                ("Assigned To", &mut form.assigned_to, "Assigned to"),
            ];

            egui::Grid::new("asset_form_grid")
                .num_columns(2)
                .spacing([theme::SPACING_XL, theme::SPACING_MD])
                .show(ui, |ui| {
                    for (label, value, hint) in fields {
                        ui.label(egui::RichText::new(label).color(theme::TEXT_MUTED));
                        let response = ui.add(
                            egui::TextEdit::singleline(value)
                                .hint_text(hint)
                                .desired_width(theme::FORM_INPUT_WIDTH),
                        );
                        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                            submitted = true;
                        }
                        ui.end_row();
                    }
                });

            if let Some(message) = &self.form_error {
                ui.add_space(theme::SPACING_MD);
                ui.label(egui::RichText::new(message).color(theme::STATUS_ERROR));
            }

            ui.add_space(theme::SPACING_LG);
            let label = match mode {
                FormMode::Create => format!("{}  Add Asset", egui_phosphor::regular::PLUS_CIRCLE),
                FormMode::Edit => format!("{}  Save Changes", egui_phosphor::regular::FLOPPY_DISK),
            };
            if ui.add(theme::button_accent(label)).clicked() {
                submitted = true;
            }
        });

        if submitted {
            self.submit_form(mode, id.as_deref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    fn filled() -> AssetForm {
        AssetForm {
            title: " Dell Latitude ".into(),
            manufacturer: "Dell".into(),
            color: "Black".into(),
            serial_number: "DL-001".into(),
            purchase_date: "2024-02-29".into(),
            purchase_price: "15999.99".into(),
            depreciation: "33.3".into(),
            dispose_value: "0".into(),
            assigned_to: "Lerato".into(),
        }
    }

    #[test]
    fn valid_form_parses_and_trims() {
        let asset = filled().validate(FormMode::Edit, today()).unwrap();
        assert_eq!(asset.title, "Dell Latitude");
        assert_eq!(asset.purchase_date, NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(asset.purchase_price, 15999.99);
        assert_eq!(asset.dispose_value, 0.0);
    }

    #[test]
    fn blank_date_defaults_to_today_only_when_creating() {
        let form = AssetForm { purchase_date: "  ".into(), ..filled() };

        let created = form.validate(FormMode::Create, today()).unwrap();
        assert_eq!(created.purchase_date, Some(today()));

        assert!(matches!(
            form.validate(FormMode::Edit, today()),
            Err(InventoryError::MissingField { field: "Purchase Date" })
        ));
    }

    #[test]
    fn first_missing_field_is_reported() {
        let form = AssetForm { color: String::new(), assigned_to: String::new(), ..filled() };
        let err = form.validate(FormMode::Create, today()).unwrap_err();
        assert_eq!(err.to_string(), "Color is required");
    }

    #[test]
    fn bad_numbers_and_dates_are_rejected() {
        let form = AssetForm { purchase_price: "12,000".into(), ..filled() };
        assert!(matches!(
            form.validate(FormMode::Create, today()),
            Err(InventoryError::InvalidNumber { field: "Purchase Price" })
        ));

        let form = AssetForm { depreciation: "-5".into(), ..filled() };
        assert!(matches!(
            form.validate(FormMode::Create, today()),
            Err(InventoryError::NegativeNumber { field: "Depreciation" })
        ));

        let form = AssetForm { dispose_value: "NaN".into(), ..filled() };
        assert!(matches!(
            form.validate(FormMode::Create, today()),
            Err(InventoryError::InvalidNumber { field: "Dispose Value" })
        ));

        let form = AssetForm { purchase_date: "30/06/2025".into(), ..filled() };
        assert!(matches!(
            form.validate(FormMode::Create, today()),
            Err(InventoryError::InvalidDate { .. })
        ));
    }

    #[test]
    fn edit_form_prefills_from_asset() {
        let asset = Asset {
            id: "abc".into(),
            title: "Monitor".into(),
            manufacturer: "LG".into(),
            color: "Black".into(),
            serial_number: "LG-9".into(),
            purchase_date: None,
            purchase_price: 3200.5,
            depreciation: 10.0,
            dispose_value: 300.0,
            assigned_to: "Nomsa".into(),
        };
        let form = AssetForm::from_asset(&asset);
        assert_eq!(form.purchase_date, "");
        assert_eq!(form.purchase_price, "3200.5");
        assert_eq!(form.depreciation, "10");
    }
}
