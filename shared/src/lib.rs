//! Shared types for the order core
//!
//! Common types used across the order crates and by any API layer sitting
//! in front of them: the resolved actor identity, the order data model,
//! request and filter types, pagination, and the typed error surface.

pub mod actor;
pub mod error;
pub mod order;
pub mod query;

// Re-exports
pub use actor::Actor;
pub use error::{ErrorCode, OrderError, OrderResult};
pub use order::{
    CreateOrderRequest, CustomerContact, Order, OrderFilters, OrderItemInput, OrderLineItem,
    OrderStatus, OrderTotals,
};
pub use query::Page;
