use std::io;

use anyhow::Context;
use log::info;
use pocket_ledger::{
    LedgerBuilder,
    cli::{Menu, Prompter},
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let manager = LedgerBuilder::new().build();
    let outcome = manager
        .initialize()
        .context("Critical error: Unable to initialize application")?;
    info!("Data file ready ({outcome:?})");

    let prompt = Prompter::new(
        io::stdin().lock(),
        io::stdout().lock(),
        manager.config().date_format(),
    );
    Menu::new(&manager, prompt).run()?;
    Ok(())
}
