use itertools::Itertools;
use log::{debug, trace};
use std::collections::{hash_map::Entry, HashMap};
use std::num::NonZeroUsize;

use crate::{
    customer::Customer,
    error::Error,
    exporter::export,
    order::Order,
    parser::{parse, reader},
};

/// Sum up orders per customer.
/// Customers are returned in the order their names first appear in `orders`.
/// Stops at the first order that failed to parse.
pub fn collect_customers<I>(orders: I) -> Result<Vec<Customer>, Error>
where
    I: IntoIterator<Item = Result<Order, Error>>,
{
    let mut customers: Vec<Customer> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut count = 0usize;

    for order in orders {
        let order = order?;
        trace!(
            "Order {} of {} paid by `{}` on {}",
            order.id,
            order.amount_paid,
            order.customer,
            order.purchase_date
        );

        let position = match positions.entry(order.customer) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                customers.push(Customer::new(entry.key().clone()));
                *entry.insert(customers.len() - 1)
            }
        };
        customers[position].add_order(order.amount_paid)?;
        count += 1;
    }

    debug!("Collected {} orders from {} customers", count, customers.len());
    Ok(customers)
}

/// Keep the `limit` customers with the highest net worth, highest first.
/// Sorting is stable: customers with equal net worth keep their relative order.
pub fn top_customers(customers: Vec<Customer>, limit: NonZeroUsize) -> Vec<Customer> {
    let total = customers.len();
    let top: Vec<Customer> = customers
        .into_iter()
        .sorted_by(|a, b| b.net_worth.cmp(&a.net_worth))
        .take(limit.get())
        .collect();
    debug!("Kept top {} of {} customers", top.len(), total);
    top
}

pub fn calculate_vouchers(customers: &mut [Customer]) {
    customers.iter_mut().for_each(Customer::calculate_voucher);
}

/// Read orders from `input` and write a voucher for every customer to `output`.
/// A `limit` of 0 keeps all customers, otherwise only the top `limit` by net worth.
pub fn run<R, W>(input: R, output: W, limit: usize) -> Result<(), Error>
where
    R: std::io::Read,
    W: std::io::Write,
{
    let mut customers = collect_customers(parse(reader(input)))?;
    if let Some(limit) = NonZeroUsize::new(limit) {
        customers = top_customers(customers, limit);
    }
    calculate_vouchers(&mut customers);
    export(output, &customers)
}
