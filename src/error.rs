use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to parse order on line {line}, reason: `{reason}`")]
    ParsingFailure { line: u64, reason: String },
    #[error("cannot open `{}`: {source}", path.display())]
    Resource {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("net worth of customer `{customer}` overflows when adding {amount}")]
    Overflow { customer: String, amount: Decimal },
    #[error("customer `{0}` has no voucher calculated")]
    MissingVoucher(String),
    #[error("failed to write vouchers, reason: `{0}`")]
    WriteFailure(#[from] csv::Error),
    #[error("failed to flush vouchers, reason: `{0}`")]
    Io(#[from] std::io::Error),
}
