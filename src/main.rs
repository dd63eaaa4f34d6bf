use std::{fs::File, path::PathBuf};

use clap::Parser;
use log::info;
use vouchers::{error::Error, vouchers::run};

/// Calculate vouchers for customers.
///
/// Every order of a customer is summed up into the customer's net worth,
/// and the voucher is 30% of that net worth. With `--limit`, vouchers are only
/// calculated for the top customers by net worth.
#[derive(Parser)]
#[clap(version)]
struct Cli {
    /// Orders CSV (order_id,customer,amount_paid,purchase_date)
    input: PathBuf,
    /// Where to write the vouchers CSV
    output: PathBuf,
    /// Number of top customers to calculate vouchers for (0 means all)
    #[clap(long, default_value_t = 0)]
    limit: usize,
}

fn try_main(cli: &Cli) -> Result<(), Error> {
    let input = File::open(&cli.input).map_err(|source| Error::Resource {
        path: cli.input.clone(),
        source,
    })?;
    let output = File::create(&cli.output).map_err(|source| Error::Resource {
        path: cli.output.clone(),
        source,
    })?;

    run(input, output, cli.limit)?;
    info!("Vouchers written to {}", cli.output.display());
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(error) = try_main(&Cli::parse()) {
        eprintln!("error: {}", error);
        std::process::exit(1);
    }
}
