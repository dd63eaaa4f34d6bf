use rust_decimal::Decimal;

pub type OrderId = i64;

/// A single purchase, as read from one row of the orders file.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub customer: String,
    pub amount_paid: Decimal,
    pub purchase_date: String,
}
