//! Database module for Asset Inventory
//! Handles SQLite storage for asset records

use crate::error::{InventoryError, Result};
use crate::list_engine::ListRecord;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

const ASSET_COLUMNS: &str = "id, title, manufacturer, color, serial_number, purchase_date,
     purchase_price, depreciation, dispose_value, assigned_to";

/// Asset record stored in database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub title: String,
    pub manufacturer: String,
    pub color: String,
    pub serial_number: String,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: f64,
    pub depreciation: f64,
    pub dispose_value: f64,
    pub assigned_to: String,
}

impl Asset {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            manufacturer: row.get(2)?,
            color: row.get(3)?,
            serial_number: row.get(4)?,
            purchase_date: row.get(5)?,
            purchase_price: row.get(6)?,
            depreciation: row.get(7)?,
            dispose_value: row.get(8)?,
            assigned_to: row.get(9)?,
        })
    }
}

impl ListRecord for Asset {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![
            self.id.clone(),
            self.title.clone(),
            self.manufacturer.clone(),
            self.color.clone(),
            self.serial_number.clone(),
            self.purchase_price.to_string(),
            self.depreciation.to_string(),
            self.dispose_value.to_string(),
            self.assigned_to.clone(),
        ];
        if let Some(date) = self.purchase_date {
            fields.push(date.to_string());
        }
        fields
    }

    fn purchase_price(&self) -> f64 {
        self.purchase_price
    }

    fn depreciation(&self) -> f64 {
        self.depreciation
    }
}

/// Validated payload for create and update
#[derive(Debug, Clone, PartialEq)]
pub struct NewAsset {
    pub title: String,
    pub manufacturer: String,
    pub color: String,
    pub serial_number: String,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: f64,
    pub depreciation: f64,
    pub dispose_value: f64,
    pub assigned_to: String,
}

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database at the given path
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init_schema()?;
        debug!(path = %path.display(), "Database opened");
        Ok(db)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let db = Self { conn: Connection::open_in_memory()? };
        db.init_schema()?;
        Ok(db)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS assets (
                id TEXT PRIMARY KEY NOT NULL,
                title TEXT NOT NULL,
                manufacturer TEXT NOT NULL,
                color TEXT NOT NULL,
                serial_number TEXT NOT NULL,
                purchase_date TEXT,
                purchase_price REAL NOT NULL,
                depreciation REAL NOT NULL,
                dispose_value REAL NOT NULL,
                assigned_to TEXT NOT NULL,
                created_at TEXT NOT NULL DEFAULT (datetime('now'))
            );

            CREATE INDEX IF NOT EXISTS idx_assets_manufacturer ON assets(manufacturer);
            CREATE INDEX IF NOT EXISTS idx_assets_purchase_date ON assets(purchase_date);",
        )?;
        Ok(())
    }

    /// Get all assets in insertion order
    pub fn get_all_assets(&self) -> Result<Vec<Asset>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {ASSET_COLUMNS} FROM assets ORDER BY rowid"))?;

        let assets = stmt
            .query_map([], Asset::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(assets)
    }

    /// Get a single asset, `None` if no row has this id
    pub fn get_asset(&self, id: &str) -> Result<Option<Asset>> {
        let asset = self
            .conn
            .query_row(
                &format!("SELECT {ASSET_COLUMNS} FROM assets WHERE id = ?1"),
                params![id],
                Asset::from_row,
            )
            .optional()?;
        Ok(asset)
    }

    /// Insert a new asset; storage assigns the id
    pub fn create_asset(&self, asset: &NewAsset) -> Result<Asset> {
        let created = self.conn.query_row(
            &format!(
                "INSERT INTO assets (id, title, manufacturer, color, serial_number, purchase_date,
                     purchase_price, depreciation, dispose_value, assigned_to)
                 VALUES (lower(hex(randomblob(16))), ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                 RETURNING {ASSET_COLUMNS}"
            ),
            params![
                asset.title,
                asset.manufacturer,
                asset.color,
                asset.serial_number,
                asset.purchase_date,
                asset.purchase_price,
                asset.depreciation,
                asset.dispose_value,
                asset.assigned_to,
            ],
            Asset::from_row,
        )?;

        debug!(id = %created.id, title = %created.title, "Asset created");
        Ok(created)
    }

    /// Replace every editable field of an existing asset
    pub fn update_asset(&self, id: &str, asset: &NewAsset) -> Result<Asset> {
        let updated = self
            .conn
            .query_row(
                &format!(
                    "UPDATE assets SET
                        title = ?2,
                        manufacturer = ?3,
                        color = ?4,
                        serial_number = ?5,
                        purchase_date = ?6,
                        purchase_price = ?7,
                        depreciation = ?8,
                        dispose_value = ?9,
                        assigned_to = ?10
                     WHERE id = ?1
                     RETURNING {ASSET_COLUMNS}"
                ),
                params![
                    id,
                    asset.title,
                    asset.manufacturer,
                    asset.color,
                    asset.serial_number,
                    asset.purchase_date,
                    asset.purchase_price,
                    asset.depreciation,
                    asset.dispose_value,
                    asset.assigned_to,
                ],
                Asset::from_row,
            )
            .optional()?
            .ok_or_else(|| InventoryError::NotFound(id.to_string()))?;

        debug!(id = %id, "Asset updated");
        Ok(updated)
    }

    /// Delete an asset by id
    pub fn delete_asset(&self, id: &str) -> Result<()> {
        let deleted = self.conn.execute("DELETE FROM assets WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(InventoryError::NotFound(id.to_string()));
        }
        debug!(id = %id, "Asset deleted");
        Ok(())
    }

    /// Get asset count
    pub fn asset_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM assets", [], |r| r.get(0))?;
        Ok(count as usize)
    }

    /// Current time according to SQLite; doubles as a connection check
    pub fn server_time(&self) -> Result<String> {
        let now: String = self
            .conn
            .query_row("SELECT datetime('now')", [], |r| r.get(0))?;
        Ok(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(title: &str, manufacturer: &str) -> NewAsset {
        NewAsset {
            title: title.to_string(),
            manufacturer: manufacturer.to_string(),
            color: "Black".to_string(),
            serial_number: format!("SN-{title}"),
            purchase_date: NaiveDate::from_ymd_opt(2024, 3, 15),
            purchase_price: 12_500.0,
            depreciation: 20.0,
            dispose_value: 1_500.0,
            assigned_to: "Thandi".to_string(),
        }
    }

    #[test]
    fn create_assigns_unique_ids_and_round_trips_fields() {
        let db = Database::open_in_memory().unwrap();
        let a = db.create_asset(&sample("ThinkPad", "Lenovo")).unwrap();
        let b = db.create_asset(&sample("MacBook", "Apple")).unwrap();

        assert_eq!(a.id.len(), 32);
        assert_ne!(a.id, b.id);
        assert_eq!(a.title, "ThinkPad");
        assert_eq!(a.purchase_date, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(a.purchase_price, 12_500.0);
    }

    #[test]
    fn get_all_preserves_insertion_order() {
        let db = Database::open_in_memory().unwrap();
        for title in ["Zebra printer", "Apple monitor", "Mouse"] {
            db.create_asset(&sample(title, "Acme")).unwrap();
        }

        let titles: Vec<String> = db
            .get_all_assets()
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["Zebra printer", "Apple monitor", "Mouse"]);
        assert_eq!(db.asset_count().unwrap(), 3);
    }

    #[test]
    fn get_missing_asset_is_none() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.get_asset("nope").unwrap(), None);
    }

    #[test]
    fn update_replaces_fields_and_keeps_id() {
        let db = Database::open_in_memory().unwrap();
        let created = db.create_asset(&sample("Desk", "Ikea")).unwrap();

        let mut changes = sample("Standing desk", "Ikea");
        changes.purchase_date = None;
        changes.depreciation = 75.0;
        let updated = db.update_asset(&created.id, &changes).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Standing desk");
        assert_eq!(updated.purchase_date, None);
        assert_eq!(db.get_asset(&created.id).unwrap(), Some(updated));
    }

    #[test]
    fn update_and_delete_report_missing_rows() {
        let db = Database::open_in_memory().unwrap();
        assert!(matches!(
            db.update_asset("missing", &sample("x", "y")),
            Err(InventoryError::NotFound(_))
        ));
        assert!(matches!(db.delete_asset("missing"), Err(InventoryError::NotFound(_))));
    }

    #[test]
    fn delete_removes_the_row() {
        let db = Database::open_in_memory().unwrap();
        let keep = db.create_asset(&sample("Chair", "Herman Miller")).unwrap();
        let gone = db.create_asset(&sample("Lamp", "Philips")).unwrap();

        db.delete_asset(&gone.id).unwrap();
        let remaining = db.get_all_assets().unwrap();
        assert_eq!(remaining, vec![keep]);
    }

    #[test]
    fn reopening_a_file_keeps_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets.db");
        {
            let db = Database::open(&path).unwrap();
            db.create_asset(&sample("Router", "Cisco")).unwrap();
        }
        let db = Database::open(&path).unwrap();
        assert_eq!(db.asset_count().unwrap(), 1);
        assert!(!db.server_time().unwrap().is_empty());
    }

    #[test]
    fn search_fields_include_numbers_and_date() {
        let db = Database::open_in_memory().unwrap();
        let asset = db.create_asset(&sample("Phone", "Samsung")).unwrap();
        let fields = asset.search_fields();

        assert!(fields.contains(&"12500".to_string()));
        assert!(fields.contains(&"2024-03-15".to_string()));
        assert!(fields.contains(&asset.id));
    }
}
