//! Caller-owned activity entries produced by `InventoryStore::add`.

use chrono::{DateTime, Utc};

use stockroom_core::ItemName;

/// One "Added <qty> of <item>" line.
///
/// These are handed to the caller and never kept by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub at: DateTime<Utc>,
    pub item: ItemName,
    pub quantity: i64,
}

impl ActivityEntry {
    pub fn added(item: ItemName, quantity: i64, at: DateTime<Utc>) -> Self {
        Self { at, item, quantity }
    }
}

impl core::fmt::Display for ActivityEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: Added {} of {}",
            self.at.format("%Y-%m-%d %H:%M:%S%.6f"),
            self.quantity,
            self.item
        )
    }
}
