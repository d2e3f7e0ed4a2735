//! Error type shared by the store, the forms and the list engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("{field} must be a number")]
    InvalidNumber { field: &'static str },

    #[error("{field} cannot be negative")]
    NegativeNumber { field: &'static str },

    #[error("{field} must be a date in YYYY-MM-DD format")]
    InvalidDate { field: &'static str },

    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Items per page must be at least 1 (got {0})")]
    InvalidItemsPerPage(usize),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, InventoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_field() {
        let err = InventoryError::MissingField { field: "Serial Number" };
        assert_eq!(err.to_string(), "Serial Number is required");

        let err = InventoryError::InvalidNumber { field: "Purchase Price" };
        assert_eq!(err.to_string(), "Purchase Price must be a number");
    }

    #[test]
    fn sqlite_errors_convert() {
        let err: InventoryError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, InventoryError::Database(_)));
        assert!(err.to_string().starts_with("Database error"));
    }
}
