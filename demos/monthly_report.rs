use pocket_ledger::{LedgerBuilder, StoreManager, render};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional data directory as the first argument
    let args: Vec<String> = env::args().collect();

    let builder = match args.get(1) {
        Some(dir) => LedgerBuilder::new().data_dir(dir),
        None => {
            println!("Using finance_data.csv from the working directory\n");
            LedgerBuilder::new()
        }
    };
    let manager = builder.build();
    let format = manager.config().date_format();

    let outcome = manager.initialize()?;
    println!("Data file status: {outcome:?}");

    let listing = manager.get_transactions(None)?;
    print!("{}", render::listing(&listing, format));
    print!("{}", render::monthly_summary(&manager.get_monthly_summary()?));

    let series = StoreManager::plot_transactions(&listing.transactions);
    println!("{}", render::series_json(&series)?);

    Ok(())
}
