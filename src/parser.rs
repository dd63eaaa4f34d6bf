use std::{fmt::Display, str::FromStr};

use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer};

use crate::{
    error::Error,
    order::{Order, OrderId},
};

/// `order_id, customer, amount_paid, purchase_date`
const ORDER_FIELDS: usize = 4;

#[derive(Deserialize, Debug, PartialEq)]
struct ParsedOrder {
    #[serde(deserialize_with = "trimmed")]
    order_id: OrderId,
    customer: String,
    #[serde(deserialize_with = "trimmed")]
    amount_paid: Decimal,
    purchase_date: String,
}

/// Numbers may be padded with whitespace, e.g. `123, c1, 10.50, 2019-06-01`.
fn trimmed<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let text = String::deserialize(deserializer)?;
    text.trim().parse().map_err(de::Error::custom)
}

/// Build a CSV reader for an orders file.
/// The first line is always consumed as a header, whatever it contains,
/// and rows are matched to fields by position rather than by header name.
pub fn reader<R>(input: R) -> csv::Reader<R>
where
    R: std::io::Read,
{
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input)
}

/// Lazily parse orders, one per row. `customer` and `purchase_date` are taken
/// verbatim, numeric fields ignore surrounding whitespace.
/// Anything after the fourth field is ignored.
pub fn parse<R>(rdr: csv::Reader<R>) -> impl Iterator<Item = Result<Order, Error>>
where
    R: std::io::Read,
{
    rdr.into_records().map(|record| {
        let mut record = record.map_err(|e| Error::ParsingFailure {
            line: e.position().map_or(0, |pos| pos.line()),
            reason: e.to_string(),
        })?;
        let line = record.position().map_or(0, |pos| pos.line());

        if record.len() < ORDER_FIELDS {
            return Err(Error::ParsingFailure {
                line,
                reason: format!(
                    "expected {} fields, found {}",
                    ORDER_FIELDS,
                    record.len()
                ),
            });
        }
        record.truncate(ORDER_FIELDS);

        let order: ParsedOrder = record
            .deserialize(None)
            .map_err(|e| Error::ParsingFailure {
                line,
                reason: e.to_string(),
            })?;

        Ok(Order {
            id: order.order_id,
            customer: order.customer,
            amount_paid: order.amount_paid,
            purchase_date: order.purchase_date,
        })
    })
}
