//! Order data model
//!
//! The order aggregate and its constituent types, plus the creation request
//! and listing filters. Orders are created once, then mutated only through
//! status changes; line items and the contact snapshot are immutable for
//! the life of the record.

pub mod request;
pub mod types;

// Re-exports
pub use request::{CreateOrderRequest, OrderFilters, OrderItemInput};
pub use types::{CustomerContact, Order, OrderLineItem, OrderStatus, OrderTotals};
