//! Order lifecycle and authorization core
//!
//! Decides, for every order operation, whether the requesting actor may
//! perform it, which status transitions are legal, and how monetary totals
//! are derived. Everything below the service layer is pure; all I/O goes
//! through the [`store::OrderStore`] port.
//!
//! # Architecture
//!
//! ```text
//! Caller → OrderService → policy (gate) → OrderStore (effect) → Caller
//!                 ↓
//!           money (totals)
//! ```
//!
//! The service is transport-agnostic: HTTP handlers, queue consumers, and
//! CLIs all call the same operations with a resolved [`shared::Actor`]
//! supplied by the session layer.

pub mod money;
pub mod policy;
pub mod service;
pub mod store;

// Re-exports
pub use service::OrderService;
pub use store::{MemoryOrderStore, NewOrder, OrderStore, StoreError, StoreResult};

// Re-export shared types for convenience
pub use shared::{
    Actor, CreateOrderRequest, Order, OrderError, OrderFilters, OrderResult, OrderStatus, Page,
};
