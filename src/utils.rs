//! Utility functions

use crate::constants::APP_NAME;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Get the application data directory path
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Format a money amount with two decimals, e.g. "R 1250.00"
pub fn format_currency(symbol: &str, amount: f64) -> String {
    format!("{} {:.2}", symbol, amount)
}

/// Format a percentage with two decimals, e.g. "12.50%"
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Format a purchase date as dd/mm/yyyy, "N/A" when absent
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_has_two_decimals() {
        assert_eq!(format_currency("R", 1250.0), "R 1250.00");
        assert_eq!(format_currency("$", 99.999), "$ 100.00");
    }

    #[test]
    fn percent_has_two_decimals() {
        assert_eq!(format_percent(12.5), "12.50%");
    }

    #[test]
    fn dates_are_day_first() {
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2024, 3, 7)), "07/03/2024");
        assert_eq!(format_date(None), "N/A");
    }
}
