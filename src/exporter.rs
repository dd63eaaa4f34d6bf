use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};

use crate::{customer::Customer, error::Error};

const HEADER: [&str; 3] = ["customer", "net_worth", "voucher"];

#[derive(Debug, Serialize)]
struct VoucherRecord<'a> {
    customer: &'a str,
    #[serde(serialize_with = "two_decimals")]
    net_worth: Decimal,
    #[serde(serialize_with = "two_decimals")]
    voucher: Decimal,
}

/// Two places, midpoints rounded to even on the exact decimal (`2.675` -> `2.68`).
fn two_decimals<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    serializer.serialize_str(&format!("{:.2}", rounded))
}

/// Serialize customers' vouchers to CSV, in the given order.
/// The header is written even when there are no customers.
pub fn export(output: impl std::io::Write, customers: &[Customer]) -> Result<(), Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(output);

    writer.write_record(HEADER)?;
    for customer in customers {
        let voucher = customer
            .voucher
            .ok_or_else(|| Error::MissingVoucher(customer.name.clone()))?;
        writer.serialize(VoucherRecord {
            customer: &customer.name,
            net_worth: customer.net_worth,
            voucher,
        })?;
    }
    writer.flush()?;
    debug!("Exported vouchers for {} customers", customers.len());
    Ok(())
}
