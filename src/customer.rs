use rust_decimal::Decimal;

use crate::error::Error;

/// Share of a customer's net worth handed back as a voucher, in percent.
const VOUCHER_PERCENT: i64 = 30;

/// Aggregated spending of one customer.
/// Customers are identified by the exact name found in the orders file.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub name: String,
    pub net_worth: Decimal,
    /// `None` until vouchers are calculated.
    pub voucher: Option<Decimal>,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            net_worth: Decimal::ZERO,
            voucher: None,
        }
    }

    /// Add a paid amount to the net worth. Negative and zero amounts are summed as given.
    pub fn add_order(&mut self, amount_paid: Decimal) -> Result<(), Error> {
        self.net_worth = self
            .net_worth
            .checked_add(amount_paid)
            .ok_or_else(|| Error::Overflow {
                customer: self.name.clone(),
                amount: amount_paid,
            })?;
        Ok(())
    }

    /// The voucher is 30% of the net worth, kept at full precision.
    /// Rounding only happens when the voucher is exported.
    pub fn calculate_voucher(&mut self) {
        self.voucher = Some(self.net_worth * Decimal::new(VOUCHER_PERCENT, 2));
    }
}
