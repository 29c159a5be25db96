//! The inventory store: quantity mutations, persistence and reporting.

use std::io;
use std::path::Path;

use chrono::Utc;
use tracing::Dispatch;

use stockroom_core::{InventoryError, InventoryResult, ItemName};

use crate::activity::ActivityEntry;
use crate::ledger::StockLedger;
use crate::persist::{self, DEFAULT_INVENTORY_FILE};
use crate::report;

/// Threshold used by [`InventoryStore::check_low_items_default`].
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// In-memory item → quantity table.
///
/// Log records go to the dispatch supplied at construction, never to a
/// subscriber the store installs itself. Not synchronized: wrap it yourself
/// if it has to be shared across threads.
#[derive(Debug, Clone)]
pub struct InventoryStore {
    stock: StockLedger,
    dispatch: Dispatch,
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore {
    /// Empty store logging to whichever dispatcher is current.
    pub fn new() -> Self {
        Self::with_dispatch(tracing::dispatcher::get_default(Dispatch::clone))
    }

    /// Empty store logging to `dispatch`.
    pub fn with_dispatch(dispatch: Dispatch) -> Self {
        Self {
            stock: StockLedger::new(),
            dispatch,
        }
    }

    fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Add `quantity` units of `item_name`, creating the item if needed.
    ///
    /// When `log` is supplied an [`ActivityEntry`] is appended to it.
    pub fn add(
        &mut self,
        item_name: &str,
        quantity: i64,
        log: Option<&mut Vec<ActivityEntry>>,
    ) -> InventoryResult<()> {
        if quantity < 0 {
            return Err(InventoryError::invalid_argument(
                "quantity must be a non-negative integer",
            ));
        }
        let name = ItemName::parse(item_name)?;

        let current = self.stock.get(name.as_str()).unwrap_or(0);
        let updated = current.checked_add(quantity).ok_or_else(|| {
            InventoryError::invalid_argument(format!(
                "adding {quantity} to {current} units of {name} overflows"
            ))
        })?;
        self.stock.insert(name.as_str(), updated);

        if let Some(log) = log {
            log.push(ActivityEntry::added(name.clone(), quantity, Utc::now()));
        }
        self.in_scope(|| tracing::info!("Added {} of {} to inventory", quantity, name));
        Ok(())
    }

    /// Remove `quantity` units of `item_name`.
    ///
    /// Every failure is logged at ERROR before being returned.
    pub fn remove(&mut self, item_name: &str, quantity: i64) -> InventoryResult<()> {
        match self.take(item_name, quantity) {
            Ok(()) => {
                self.in_scope(|| {
                    tracing::info!("Removed {} of {} from inventory", quantity, item_name)
                });
                Ok(())
            }
            Err(err) => {
                self.in_scope(|| tracing::error!("Failed to remove item: {}", err));
                Err(err)
            }
        }
    }

    fn take(&mut self, item_name: &str, quantity: i64) -> InventoryResult<()> {
        if quantity <= 0 {
            return Err(InventoryError::invalid_argument(
                "quantity to remove must be positive",
            ));
        }
        let available = self
            .stock
            .get(item_name)
            .ok_or_else(|| InventoryError::not_found(item_name))?;
        if available < quantity {
            return Err(InventoryError::insufficient_stock(
                item_name, quantity, available,
            ));
        }

        let remaining = available - quantity;
        if remaining <= 0 {
            self.stock.remove(item_name);
        } else {
            self.stock.insert(item_name, remaining);
        }
        Ok(())
    }

    pub fn get_quantity(&self, item_name: &str) -> InventoryResult<i64> {
        self.stock
            .get(item_name)
            .ok_or_else(|| InventoryError::not_found(item_name))
    }

    pub fn contains(&self, item_name: &str) -> bool {
        self.stock.contains(item_name)
    }

    /// Items and quantities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.stock.iter()
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// Replace the stock with the contents of `path`.
    ///
    /// Best effort: a missing or unparsable file is logged at WARN and leaves
    /// the store empty. Never fails.
    pub fn load(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match persist::read_ledger(path) {
            Ok(ledger) => {
                self.stock = ledger;
                self.in_scope(|| tracing::info!("Inventory data loaded from {}", path.display()));
            }
            Err(err) => {
                self.stock = StockLedger::new();
                self.in_scope(|| tracing::warn!("Could not load data: {}", err));
            }
        }
    }

    pub fn load_default(&mut self) {
        self.load(DEFAULT_INVENTORY_FILE)
    }

    /// Write the stock to `path` as indented JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> InventoryResult<()> {
        let path = path.as_ref();
        match persist::write_ledger(path, &self.stock) {
            Ok(()) => {
                self.in_scope(|| tracing::info!("Inventory data saved to {}", path.display()));
                Ok(())
            }
            Err(err) => {
                self.in_scope(|| tracing::error!("Failed to save data: {}", err));
                Err(err)
            }
        }
    }

    pub fn save_default(&self) -> InventoryResult<()> {
        self.save(DEFAULT_INVENTORY_FILE)
    }

    pub fn write_report<W: io::Write>(&self, out: W) -> io::Result<()> {
        report::write_report(&self.stock, out)
    }

    /// Print the report to stdout.
    pub fn print_report(&self) -> io::Result<()> {
        let stdout = io::stdout();
        self.write_report(stdout.lock())
    }

    /// Names of items with `quantity < threshold`, in insertion order.
    pub fn check_low_items(&self, threshold: i64) -> InventoryResult<Vec<String>> {
        if threshold < 0 {
            return Err(InventoryError::invalid_argument(
                "threshold must be a non-negative integer",
            ));
        }
        Ok(self.below(threshold))
    }

    pub fn check_low_items_default(&self) -> Vec<String> {
        self.below(DEFAULT_LOW_STOCK_THRESHOLD)
    }

    fn below(&self, threshold: i64) -> Vec<String> {
        self.stock
            .iter()
            .filter(|(_, quantity)| *quantity < threshold)
            .map(|(name, _)| name.to_string())
            .collect()
    }
}
