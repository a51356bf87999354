use super::*;
use crate::store::memory::{CatalogEntry, MemoryOrderStore};
use shared::order::OrderItemInput;
use std::collections::HashMap;

mod test_access;

const CUSTOMER_ID: i64 = 7;
const OTHER_CUSTOMER_ID: i64 = 8;
const VENDOR_A: i64 = 11;
const VENDOR_B: i64 = 22;

fn customer() -> Actor {
    Actor::Customer { id: CUSTOMER_ID }
}

fn other_customer() -> Actor {
    Actor::Customer {
        id: OTHER_CUSTOMER_ID,
    }
}

fn vendor_a() -> Actor {
    Actor::Vendor { id: VENDOR_A }
}

fn admin() -> Actor {
    Actor::Administrator
}

/// Service over a memory store seeded with two vendors' variants.
fn create_test_service() -> OrderService {
    let catalog = HashMap::from([
        (1, CatalogEntry::new(VENDOR_A, Decimal::from(100))),
        (2, CatalogEntry::new(VENDOR_A, Decimal::new(2550, 2))),
        (3, CatalogEntry::new(VENDOR_B, Decimal::from(50))),
    ]);
    OrderService::new(Arc::new(MemoryOrderStore::with_catalog(catalog)))
}

fn simple_request(variant_id: i64, quantity: i32) -> CreateOrderRequest {
    CreateOrderRequest {
        items: vec![OrderItemInput {
            variant_id,
            quantity,
        }],
        customer_name: "Alice Almeida".to_string(),
        customer_phone: "+34 612 345 678".to_string(),
        customer_address: "Calle Mayor 1, Madrid".to_string(),
        delivery_fee: Some(Decimal::from(20)),
    }
}

fn valid_request() -> CreateOrderRequest {
    simple_request(1, 2)
}

async fn place_order(service: &OrderService, actor: &Actor) -> Order {
    service
        .create_order(valid_request(), actor)
        .await
        .expect("order creation should succeed")
}

/// Place an order and walk it to the requested status as the operator.
async fn order_in_status(service: &OrderService, status: OrderStatus) -> Order {
    let order = place_order(service, &customer()).await;
    let operator = admin();

    let walk: &[OrderStatus] = match status {
        OrderStatus::Pending => &[],
        OrderStatus::Confirmed => &[OrderStatus::Confirmed],
        OrderStatus::Shipped => &[OrderStatus::Confirmed, OrderStatus::Shipped],
        OrderStatus::Delivered => &[
            OrderStatus::Confirmed,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
        ],
        OrderStatus::Cancelled => {
            return service
                .cancel_order(&order.id, &operator)
                .await
                .expect("cancellation should succeed");
        }
    };

    let mut current = order;
    for next in walk {
        current = service
            .update_status(&current.id, *next, &operator)
            .await
            .expect("status walk should succeed");
    }
    current
}
