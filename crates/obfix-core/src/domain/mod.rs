pub mod action;
pub mod order_type;
pub mod table;
pub mod timefmt;

pub use action::Action;
pub use order_type::OrderType;
pub use table::{is_placeholder, Table, TableRole, PLACEHOLDER};
