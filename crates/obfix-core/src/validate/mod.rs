pub mod field;
pub mod orders;
pub mod table;
pub mod times;

pub use field::FieldRule;
pub use orders::{validate_incoming_orders, NormalizedOrders};
pub use table::validate_table;
