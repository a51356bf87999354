//! Persistence port
//!
//! The core does not own durable storage; it delegates reads and writes to
//! an [`OrderStore`] implementation injected by the embedder. The store is
//! the authority for existence checks, catalog price resolution, monetary
//! totals, stock effects, and write-conflict resolution — the core's
//! gates are a pre-flight check in front of it, not a replacement for it.

pub mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::order::{CreateOrderRequest, Order, OrderFilters, OrderStatus};
use shared::query::Page;
use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Order or catalog variant does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unmodeled backend failure; surfaced to callers unchanged
    #[error("Backend error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Validated creation payload handed to the store
///
/// Built by the service after the policy and validation gates pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    pub request: CreateOrderRequest,
    /// Owning customer attribution resolved from the actor; None for guests
    pub customer_id: Option<i64>,
}

/// Durable order storage
///
/// Contract notes:
/// - `insert` resolves each requested variant to a price snapshot and
///   recomputes totals server-side; client-side calculations are
///   preview-only. Unknown variants are a [`StoreError::NotFound`].
/// - A `vendor_id` filter on `fetch_all` retains only orders containing at
///   least one line item whose variant belongs to that vendor. This is the
///   line-item scoping the policy layer deliberately does not re-check.
/// - `update_status` performs the write under whatever conflict resolution
///   the backend provides (version check, compare-and-swap); the core only
///   rejects transitions that were already illegal at read time.
/// - Restoring reserved stock on cancellation is a store-side effect.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// List orders matching the filters, newest first, paginated.
    async fn fetch_all(&self, filters: &OrderFilters) -> StoreResult<Page<Order>>;

    /// Fetch a single order by id.
    async fn fetch_by_id(&self, id: &str) -> StoreResult<Order>;

    /// Persist a new order; the returned record is canonical.
    async fn insert(&self, new_order: NewOrder) -> StoreResult<Order>;

    /// Persist a status change and return the updated record.
    async fn update_status(&self, id: &str, status: OrderStatus) -> StoreResult<Order>;
}

// Re-exports
pub use memory::{CatalogEntry, MemoryOrderStore};
