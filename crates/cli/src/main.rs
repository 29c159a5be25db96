use std::io;

use anyhow::Context;
use clap::Parser;

use stockroom_cli::Cli;
use stockroom_inventory::InventoryStore;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let dispatch = stockroom_observability::init(&cli.log_config());

    let mut store = InventoryStore::with_dispatch(dispatch);
    let stdout = io::stdout();
    stockroom_cli::run(&cli, &mut store, &mut stdout.lock()).context("failed to write to stdout")?;
    Ok(())
}
