//! Inventory error model.

use std::path::PathBuf;

use thiserror::Error;

/// Result type used across the inventory crates.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Input validation, lookups and stock checks are deterministic and depend
/// only on the arguments and current stock. `Io` and `Encode` come from the
/// persistence boundary.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// An argument was malformed or out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The named item is not tracked.
    #[error("item '{0}' not found in inventory")]
    NotFound(String),

    /// A removal asked for more than is on hand.
    #[error("cannot remove {requested} of {item}, only {available} available")]
    InsufficientStock {
        item: String,
        requested: i64,
        available: i64,
    },

    /// Reading or writing the inventory file failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stock could not be encoded as JSON.
    #[error("failed to encode inventory: {0}")]
    Encode(#[from] serde_json::Error),
}

impl InventoryError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }

    pub fn insufficient_stock(item: impl Into<String>, requested: i64, available: i64) -> Self {
        Self::InsufficientStock {
            item: item.into(),
            requested,
            available,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for failures caused by the caller's arguments or the current
    /// stock, as opposed to the filesystem.
    pub fn is_domain(&self) -> bool {
        !matches!(self, Self::Io { .. } | Self::Encode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_item() {
        let err = InventoryError::not_found("pear");
        assert_eq!(err.to_string(), "item 'pear' not found in inventory");
    }

    #[test]
    fn insufficient_stock_reports_requested_and_available() {
        let err = InventoryError::insufficient_stock("apple", 12, 7);
        assert_eq!(
            err.to_string(),
            "cannot remove 12 of apple, only 7 available"
        );
    }

    #[test]
    fn io_errors_are_not_domain_errors() {
        let err = InventoryError::io(
            "inventory.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!err.is_domain());
        assert!(err.to_string().starts_with("inventory.json: "));
        assert!(InventoryError::invalid_argument("x").is_domain());
    }
}
