//! In-memory store adapter
//!
//! Reference implementation of the persistence port, used by the test
//! suites and by embedders that want the core running without a database.
//! Prices and vendor ownership come from a catalog seeded at construction;
//! totals are recomputed here because the store, not the client, is the
//! source of truth for money.

use super::{NewOrder, OrderStore, StoreError, StoreResult};
use crate::money;
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use shared::order::{CustomerContact, Order, OrderFilters, OrderLineItem, OrderStatus};
use shared::query::Page;
use std::collections::HashMap;
use uuid::Uuid;

/// Catalog entry backing price resolution and vendor scoping
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// Vendor that owns this variant
    pub vendor_id: i64,
    /// Current unit price, snapshotted onto orders at insert time
    pub unit_price: Decimal,
}

impl CatalogEntry {
    pub fn new(vendor_id: i64, unit_price: Decimal) -> Self {
        Self {
            vendor_id,
            unit_price,
        }
    }
}

/// Order store backed by an in-process map
#[derive(Default)]
pub struct MemoryOrderStore {
    orders: RwLock<HashMap<String, Order>>,
    catalog: HashMap<i64, CatalogEntry>,
}

impl MemoryOrderStore {
    /// Empty store with an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a catalog of variant id -> vendor + price.
    pub fn with_catalog(catalog: HashMap<i64, CatalogEntry>) -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
            catalog,
        }
    }

    /// Resolve requested items to price snapshots from the catalog.
    fn resolve_items(&self, new_order: &NewOrder) -> StoreResult<Vec<OrderLineItem>> {
        new_order
            .request
            .items
            .iter()
            .map(|input| {
                let entry = self
                    .catalog
                    .get(&input.variant_id)
                    .ok_or_else(|| StoreError::NotFound(format!("variant {}", input.variant_id)))?;
                Ok(OrderLineItem::new(
                    input.variant_id,
                    entry.unit_price,
                    input.quantity,
                ))
            })
            .collect()
    }

    /// Whether the order contains at least one of the vendor's variants.
    fn vendor_matches(&self, order: &Order, vendor_id: i64) -> bool {
        order.items.iter().any(|item| {
            self.catalog
                .get(&item.variant_id)
                .is_some_and(|entry| entry.vendor_id == vendor_id)
        })
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn fetch_all(&self, filters: &OrderFilters) -> StoreResult<Page<Order>> {
        let orders = self.orders.read();
        let mut matched: Vec<Order> = orders
            .values()
            .filter(|order| filters.status.is_none_or(|status| order.status == status))
            .filter(|order| {
                filters
                    .customer_id
                    .is_none_or(|id| order.customer_id == Some(id))
            })
            .filter(|order| {
                filters
                    .vendor_id
                    .is_none_or(|id| self.vendor_matches(order, id))
            })
            .cloned()
            .collect();
        drop(orders);

        // Newest first, id as tie-breaker for deterministic pages
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));

        let total = matched.len() as u64;
        let page = filters.page_or_default();
        let limit = filters.limit_or_default();
        let start = (page as usize - 1) * limit as usize;
        let data: Vec<Order> = matched.into_iter().skip(start).take(limit as usize).collect();

        Ok(Page::new(data, total, page, limit))
    }

    async fn fetch_by_id(&self, id: &str) -> StoreResult<Order> {
        self.orders
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("order {}", id)))
    }

    async fn insert(&self, new_order: NewOrder) -> StoreResult<Order> {
        let items = self.resolve_items(&new_order)?;
        let delivery_fee = new_order.request.delivery_fee.unwrap_or(Decimal::ZERO);
        let totals = money::calculate_totals(&items, delivery_fee);
        let now = Utc::now();

        let order = Order {
            id: Uuid::new_v4().to_string(),
            customer_id: new_order.customer_id,
            items,
            contact: CustomerContact {
                name: new_order.request.customer_name,
                phone: new_order.request.customer_phone,
                address: new_order.request.customer_address,
            },
            totals,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        self.orders.write().insert(order.id.clone(), order.clone());
        Ok(order)
    }

    async fn update_status(&self, id: &str, status: OrderStatus) -> StoreResult<Order> {
        let mut orders = self.orders.write();
        let order = orders
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(format!("order {}", id)))?;

        order.status = status;
        order.updated_at = Utc::now();
        Ok(order.clone())
    }
}
