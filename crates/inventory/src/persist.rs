//! JSON file persistence for the stock ledger.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use stockroom_core::{InventoryError, InventoryResult};

use crate::ledger::StockLedger;

/// Default file shared by load and save.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

/// Read a ledger from `path`.
///
/// Parse failures are reported as `Io` errors of kind `InvalidData`.
pub fn read_ledger(path: &Path) -> InventoryResult<StockLedger> {
    let file = File::open(path).map_err(|e| InventoryError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| InventoryError::io(path, io::Error::from(e)))
}

/// Write `ledger` to `path` as 2-space indented JSON, replacing the file.
pub fn write_ledger(path: &Path, ledger: &StockLedger) -> InventoryResult<()> {
    let mut text = serde_json::to_string_pretty(ledger)?;
    text.push('\n');

    let file = File::create(path).map_err(|e| InventoryError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(text.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| InventoryError::io(path, e))
}
