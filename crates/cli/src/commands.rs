//! Command execution.
//!
//! Inventory failures end here: they are printed as `Operation failed: ...`,
//! logged, and the command still completes normally. Only failures writing
//! to the output stream are returned.

use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;

use stockroom_core::InventoryError;
use stockroom_inventory::InventoryStore;

use crate::args::{Cli, Command};

#[derive(Debug, Error)]
enum CommandError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Run the command selected by `cli` against `store`, writing to `out`.
pub fn run<W: Write>(cli: &Cli, store: &mut InventoryStore, out: &mut W) -> io::Result<()> {
    match execute(&cli.command(), &cli.file, store, out) {
        Ok(()) => Ok(()),
        Err(CommandError::Inventory(err)) => {
            writeln!(out, "Operation failed: {err}")?;
            tracing::error!("Application error: {}", err);
            Ok(())
        }
        Err(CommandError::Output(err)) => Err(err),
    }
}

fn execute<W: Write>(
    command: &Command,
    file: &Path,
    store: &mut InventoryStore,
    out: &mut W,
) -> Result<(), CommandError> {
    match command {
        Command::Demo => demo(file, store, out),
        Command::Add { item, quantity } => {
            store.load(file);
            let mut log = Vec::new();
            store.add(item, *quantity, Some(&mut log))?;
            store.save(file)?;
            for entry in &log {
                writeln!(out, "{entry}")?;
            }
            Ok(())
        }
        Command::Remove { item, quantity } => {
            store.load(file);
            store.remove(item, *quantity)?;
            store.save(file)?;
            writeln!(out, "Removed {quantity} of {item}")?;
            Ok(())
        }
        Command::Get { item } => {
            store.load(file);
            let quantity = store.get_quantity(item)?;
            writeln!(out, "{item}: {quantity}")?;
            Ok(())
        }
        Command::Report => {
            store.load(file);
            store.write_report(&mut *out)?;
            Ok(())
        }
        Command::Low { threshold } => {
            store.load(file);
            let low = store.check_low_items(*threshold)?;
            writeln!(out, "Low items: {low:?}")?;
            Ok(())
        }
    }
}

fn demo<W: Write>(file: &Path, store: &mut InventoryStore, out: &mut W) -> Result<(), CommandError> {
    store.add("apple", 10, None)?;
    store.add("banana", 15, None)?;
    store.remove("apple", 3)?;

    writeln!(out, "Apple stock: {}", store.get_quantity("apple")?)?;
    writeln!(out, "Low items: {:?}", store.check_low_items_default())?;

    store.save(file)?;
    store.load(file);
    store.write_report(&mut *out)?;
    Ok(())
}
