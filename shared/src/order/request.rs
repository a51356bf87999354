//! Creation request and listing filters

use super::types::OrderStatus;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Requested line item
///
/// Unpriced on purpose: the persistence collaborator resolves the catalog
/// price when the order is inserted, so clients cannot supply their own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItemInput {
    /// Catalog variant reference
    pub variant_id: i64,
    pub quantity: i32,
}

/// Order creation payload
///
/// Produced by the caller from a cart's line items. Contact fields are
/// snapshotted onto the order verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateOrderRequest {
    pub items: Vec<OrderItemInput>,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    /// Optional delivery fee; defaults to zero when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_fee: Option<Decimal>,
}

/// Listing filters
///
/// The service narrows these by actor identity before they reach the store:
/// customers are always restricted to their own orders and vendors to
/// orders containing their variants, whatever the caller supplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<i64>,
    /// Page number, 1-based
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl OrderFilters {
    pub const DEFAULT_LIMIT: u32 = 50;

    /// No filtering, first page.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn for_customer(mut self, customer_id: i64) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    pub fn for_vendor(mut self, vendor_id: i64) -> Self {
        self.vendor_id = Some(vendor_id);
        self
    }

    pub fn paginate(mut self, page: u32, limit: u32) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }

    /// Effective 1-based page number.
    pub fn page_or_default(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    /// Effective page size.
    pub fn limit_or_default(&self) -> u32 {
        match self.limit {
            Some(0) | None => Self::DEFAULT_LIMIT,
            Some(limit) => limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_builder() {
        let filters = OrderFilters::all()
            .with_status(OrderStatus::Pending)
            .for_customer(9)
            .paginate(2, 20);

        assert_eq!(filters.status, Some(OrderStatus::Pending));
        assert_eq!(filters.customer_id, Some(9));
        assert_eq!(filters.page_or_default(), 2);
        assert_eq!(filters.limit_or_default(), 20);
    }

    #[test]
    fn test_filter_defaults() {
        let filters = OrderFilters::all();
        assert_eq!(filters.page_or_default(), 1);
        assert_eq!(filters.limit_or_default(), OrderFilters::DEFAULT_LIMIT);

        // Page 0 and limit 0 fall back rather than producing empty queries
        let filters = OrderFilters::all().paginate(0, 0);
        assert_eq!(filters.page_or_default(), 1);
        assert_eq!(filters.limit_or_default(), OrderFilters::DEFAULT_LIMIT);
    }
}
