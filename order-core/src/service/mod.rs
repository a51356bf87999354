//! Order service
//!
//! The orchestration layer and the only component performing I/O: every
//! operation is a gate (policy) followed by at most one read and one write
//! through the persistence port. Denied gates become typed failures before
//! anything is written.
//!
//! The read-then-write pair in status updates is not transactional from
//! this layer's point of view; the store's write-conflict resolution is
//! the final arbiter. This layer only rejects decisions that were already
//! illegal at read time.

use crate::money;
use crate::policy;
use crate::store::{NewOrder, OrderStore, StoreError};
use rust_decimal::Decimal;
use shared::actor::Actor;
use shared::error::{OrderError, OrderResult};
use shared::order::{
    CreateOrderRequest, Order, OrderFilters, OrderLineItem, OrderStatus, OrderTotals,
};
use shared::query::Page;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Order lifecycle orchestration over a persistence port
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Create an order for the acting guest or customer.
    ///
    /// Validation accumulates every violation; the caller receives the full
    /// list. The store resolves prices and recomputes totals — whatever the
    /// client previewed, the returned record is canonical.
    pub async fn create_order(
        &self,
        request: CreateOrderRequest,
        actor: &Actor,
    ) -> OrderResult<Order> {
        if !policy::can_create_order(actor) {
            warn!(role = actor.describe(), "order creation denied");
            return Err(OrderError::forbidden(format!(
                "{}s cannot place orders",
                actor.describe()
            )));
        }

        let validation = policy::validate_create_order_request(&request);
        if !validation.is_valid() {
            return Err(OrderError::invalid_request(validation.into_errors()));
        }

        let new_order = NewOrder {
            customer_id: actor.customer_id(),
            request,
        };
        let order = self
            .store
            .insert(new_order)
            .await
            .map_err(map_store_error)?;

        info!(order_id = %order.id, total = %order.totals.total, "order created");
        Ok(order)
    }

    /// Fetch a single order the actor is allowed to see.
    ///
    /// Denied access to an existing order is `Forbidden`, not `NotFound`.
    pub async fn get_order(&self, id: &str, actor: &Actor) -> OrderResult<Order> {
        let order = self.store.fetch_by_id(id).await.map_err(map_store_error)?;

        if !policy::can_view_order(&order, actor) {
            warn!(order_id = %order.id, role = actor.describe(), "order view denied");
            return Err(OrderError::forbidden("not allowed to view this order"));
        }
        Ok(order)
    }

    /// List orders visible to the actor.
    ///
    /// Filters are narrowed by identity before they reach the store:
    /// customers see only their own orders and vendors only orders
    /// containing their variants, regardless of what the caller supplied.
    pub async fn list_orders(
        &self,
        actor: &Actor,
        mut filters: OrderFilters,
    ) -> OrderResult<Page<Order>> {
        match actor {
            Actor::Guest => return Err(OrderError::Unauthenticated),
            Actor::Customer { id } => filters.customer_id = Some(*id),
            Actor::Vendor { id } => filters.vendor_id = Some(*id),
            Actor::Administrator => {}
        }

        self.store
            .fetch_all(&filters)
            .await
            .map_err(map_store_error)
    }

    /// Progress an order to a new status.
    ///
    /// Both gates must pass: the actor's authorization and the transition
    /// table's structural legality.
    pub async fn update_status(
        &self,
        id: &str,
        new_status: OrderStatus,
        actor: &Actor,
    ) -> OrderResult<Order> {
        let current = self.store.fetch_by_id(id).await.map_err(map_store_error)?;

        if !policy::can_update_status(&current, new_status, actor) {
            warn!(
                order_id = %current.id,
                role = actor.describe(),
                status = %current.status,
                "status update denied"
            );
            return Err(OrderError::forbidden(
                "not allowed to update this order's status",
            ));
        }
        if !policy::is_valid_status_transition(current.status, new_status) {
            return Err(OrderError::InvalidTransition {
                from: current.status,
                to: new_status,
            });
        }

        let order = self
            .store
            .update_status(id, new_status)
            .await
            .map_err(map_store_error)?;

        info!(order_id = %order.id, from = %current.status, to = %order.status, "order status updated");
        Ok(order)
    }

    /// Cancel an order on behalf of the actor.
    ///
    /// Restoring reserved stock is the store's effect, not orchestrated
    /// here.
    pub async fn cancel_order(&self, id: &str, actor: &Actor) -> OrderResult<Order> {
        let current = self.store.fetch_by_id(id).await.map_err(map_store_error)?;

        if !policy::can_cancel_order(&current, actor) {
            warn!(
                order_id = %current.id,
                role = actor.describe(),
                status = %current.status,
                "cancellation denied"
            );
            return Err(OrderError::forbidden("not allowed to cancel this order"));
        }

        let order = self
            .store
            .update_status(id, OrderStatus::Cancelled)
            .await
            .map_err(map_store_error)?;

        info!(order_id = %order.id, "order cancelled");
        Ok(order)
    }

    /// Price preview for a cart.
    ///
    /// Non-authoritative: the store recomputes totals on insert and its
    /// record wins.
    pub fn preview_totals(&self, items: &[OrderLineItem], delivery_fee: Decimal) -> OrderTotals {
        money::calculate_totals(items, delivery_fee)
    }
}

fn map_store_error(err: StoreError) -> OrderError {
    match err {
        StoreError::NotFound(what) => OrderError::NotFound(what),
        StoreError::Backend(msg) => {
            error!(error = %msg, "storage failure");
            OrderError::Storage(msg)
        }
    }
}

#[cfg(test)]
mod tests;
