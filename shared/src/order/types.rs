//! Order entity and value types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order lifecycle status
///
/// The state set of the order state machine. Which transitions are legal is
/// decided by the policy layer's transition table; this type only knows
/// which states exist and which are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Placed, awaiting seller confirmation
    #[default]
    Pending,
    /// Accepted by the seller
    Confirmed,
    /// Handed to delivery
    Shipped,
    /// Received by the customer (terminal)
    Delivered,
    /// Cancelled by customer, vendor, or operator (terminal)
    Cancelled,
}

impl OrderStatus {
    /// Terminal states admit no further transition.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Wire name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(OrderStatus::Pending),
            "CONFIRMED" => Ok(OrderStatus::Confirmed),
            "SHIPPED" => Ok(OrderStatus::Shipped),
            "DELIVERED" => Ok(OrderStatus::Delivered),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            other => Err(format!("unknown order status: {}", other)),
        }
    }
}

/// Order line item
///
/// References a purchasable catalog variant with the unit price frozen at
/// order time. The snapshot protects historical orders from later catalog
/// price changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLineItem {
    /// Catalog variant reference
    pub variant_id: i64,
    /// Unit price at the time the order was placed
    pub unit_price: Decimal,
    /// Ordered quantity (always >= 1)
    pub quantity: i32,
}

impl OrderLineItem {
    pub fn new(variant_id: i64, unit_price: Decimal, quantity: i32) -> Self {
        Self {
            variant_id,
            unit_price,
            quantity,
        }
    }
}

/// Customer contact snapshot
///
/// Captured from the creation request and never re-derived from a live
/// profile, so delivery records stay historically accurate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerContact {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// Computed monetary totals
///
/// All amounts share the currency unit of the input prices and are
/// non-negative. The commission is a seller-settlement figure; it is not
/// part of the customer-facing total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct OrderTotals {
    /// Sum of line totals
    pub subtotal: Decimal,
    /// Delivery fee charged to the customer
    pub delivery_fee: Decimal,
    /// Platform commission withheld from the seller
    pub commission: Decimal,
    /// Amount the customer pays: subtotal + delivery fee
    pub total: Decimal,
}

/// Order entity
///
/// The canonical record lives in the persistence collaborator; this is the
/// shape every layer above it works with. After creation only `status` and
/// `updated_at` may change. Cancellation is a status, never a deletion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    /// Owning customer, if the order was placed by an identified customer.
    /// Guest orders carry no owner and are visible only to operators.
    pub customer_id: Option<i64>,
    pub items: Vec<OrderLineItem>,
    pub contact: CustomerContact,
    pub totals: OrderTotals,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
