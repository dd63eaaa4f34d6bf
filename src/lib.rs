pub mod customer;
pub mod error;
pub mod exporter;
pub mod order;
pub mod parser;
pub mod vouchers;
