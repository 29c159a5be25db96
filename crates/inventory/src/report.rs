//! Plain-text stock report.

use std::io::{self, Write};

use crate::ledger::StockLedger;

pub const EMPTY_NOTICE: &str = "Inventory is empty";
pub const HEADER: &str = "=== Inventory Report ===";
pub const FOOTER: &str = "========================";

pub fn write_report<W: Write>(ledger: &StockLedger, mut out: W) -> io::Result<()> {
    if ledger.is_empty() {
        return writeln!(out, "{EMPTY_NOTICE}");
    }

    writeln!(out)?;
    writeln!(out, "{HEADER}")?;
    for (name, quantity) in ledger.iter() {
        writeln!(out, "[ITEM] {name} -> {quantity} units")?;
    }
    writeln!(out, "{FOOTER}")
}
