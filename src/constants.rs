//! Application constants and configuration

pub const APP_NAME: &str = "Asset Inventory";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Rows shown per page in the asset list unless overridden in settings.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Purchase prices above this are "high value"; equal or below is "low value".
pub const HIGH_VALUE_THRESHOLD: f64 = 10_000.0;
/// Depreciation percentages above this are "high depreciation".
pub const HIGH_DEPRECIATION_THRESHOLD: f64 = 50.0;

/// Manufacturers shown individually in the dashboard breakdown before "Others".
pub const TOP_MANUFACTURERS: usize = 7;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
