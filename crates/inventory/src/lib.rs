//! Inventory store.
//!
//! An in-memory table of item quantities with validated add/remove, a
//! best-effort JSON load, a strict JSON save and a low-stock query.

pub mod activity;
pub mod ledger;
pub mod persist;
pub mod report;
pub mod store;

pub use activity::ActivityEntry;
pub use ledger::StockLedger;
pub use persist::DEFAULT_INVENTORY_FILE;
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, InventoryStore};
