//! Common types and data structures

use std::time::Instant;

/// Screen shown in the central panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Dashboard,
    AssetList,
    AddAsset,
    EditAsset(String),
    DatabaseStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Dismissible notification shown bottom-right
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub message: Option<String>,
    pub started: Instant,
}

/// Result of the last database connection check
#[derive(Debug, Clone, PartialEq)]
pub enum DbStatus {
    Checking,
    Connected { timestamp: String, asset_count: usize },
    Error(String),
}

/// Action picked from an asset row's menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Edit(String),
    Delete { id: String, title: String },
}
