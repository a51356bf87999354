//! Authorization and validation policy
//!
//! Pure decision functions over an [`Actor`] and an order or creation
//! request. Nothing here performs I/O; the service layer combines these
//! gates with store effects. Two gates guard a status write: the role check
//! in [`can_update_status`] and the structural check in
//! [`is_valid_status_transition`] — both must pass.

use rust_decimal::Decimal;
use shared::actor::Actor;
use shared::order::{CreateOrderRequest, Order, OrderStatus};

/// Minimum digit count for a customer phone number
const MIN_PHONE_DIGITS: usize = 10;

/// Whether this actor may place an order.
///
/// Guests and customers purchase; vendors and administrators transact on
/// the platform but never as buyers.
pub fn can_create_order(actor: &Actor) -> bool {
    match actor {
        Actor::Guest | Actor::Customer { .. } => true,
        Actor::Vendor { .. } | Actor::Administrator => false,
    }
}

/// Whether this actor may view the order.
///
/// Vendors are authorized at the category level; which orders actually
/// contain their variants is the store query's contract, not re-checked
/// per record here.
pub fn can_view_order(order: &Order, actor: &Actor) -> bool {
    match actor {
        Actor::Guest => false,
        Actor::Administrator => true,
        Actor::Customer { id } => order.customer_id == Some(*id),
        Actor::Vendor { .. } => true,
    }
}

/// Whether this actor may cancel the order.
///
/// Terminal orders are immutable for everyone. Customers may only cancel
/// their own pending orders; vendors lose cancellation rights once the
/// order ships.
pub fn can_cancel_order(order: &Order, actor: &Actor) -> bool {
    if order.status.is_terminal() {
        return false;
    }
    match actor {
        Actor::Guest => false,
        Actor::Administrator => true,
        Actor::Customer { id } => {
            order.customer_id == Some(*id) && order.status == OrderStatus::Pending
        }
        Actor::Vendor { .. } => {
            matches!(order.status, OrderStatus::Pending | OrderStatus::Confirmed)
        }
    }
}

/// Whether this actor may progress the order's status.
///
/// Status progression is a seller/operator action. The requested target
/// does not influence authorization; its structural legality is checked
/// separately against the transition table.
pub fn can_update_status(order: &Order, _new_status: OrderStatus, actor: &Actor) -> bool {
    match actor {
        Actor::Guest | Actor::Customer { .. } => false,
        Actor::Administrator => true,
        Actor::Vendor { .. } => !order.status.is_terminal(),
    }
}

/// Legal next states from a given status.
///
/// The authoritative transition table; UI layers render the available
/// actions from this.
pub fn allowed_transitions(from: OrderStatus) -> &'static [OrderStatus] {
    use OrderStatus::*;
    match from {
        Pending => &[Confirmed, Cancelled],
        Confirmed => &[Shipped, Cancelled],
        Shipped => &[Delivered, Cancelled],
        Delivered | Cancelled => &[],
    }
}

/// Whether `from -> to` appears in the transition table.
pub fn is_valid_status_transition(from: OrderStatus, to: OrderStatus) -> bool {
    allowed_transitions(from).contains(&to)
}

/// Outcome of creation-request validation.
///
/// Accumulates every violation so the caller can report them together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }

    fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }
}

/// Validate an order creation request.
///
/// Does not short-circuit: each check appends independently, and item
/// violations are reported with their 1-based position.
pub fn validate_create_order_request(request: &CreateOrderRequest) -> ValidationResult {
    let mut result = ValidationResult::default();

    if request.items.is_empty() {
        result.push("order must contain at least one item");
    }
    for (idx, item) in request.items.iter().enumerate() {
        let position = idx + 1;
        if item.variant_id <= 0 {
            result.push(format!(
                "item {}: variant reference must be positive",
                position
            ));
        }
        if item.quantity < 1 {
            result.push(format!("item {}: quantity must be at least 1", position));
        }
    }

    if request.customer_name.trim().is_empty() {
        result.push("customer name is required");
    }

    let phone = request.customer_phone.trim();
    if phone.is_empty() {
        result.push("customer phone is required");
    } else {
        // Count digits only; separators and country-code symbols are fine
        let digits = phone.chars().filter(char::is_ascii_digit).count();
        if digits < MIN_PHONE_DIGITS {
            result.push(format!(
                "customer phone must contain at least {} digits",
                MIN_PHONE_DIGITS
            ));
        }
    }

    if request.customer_address.trim().is_empty() {
        result.push("customer address is required");
    }

    if let Some(fee) = request.delivery_fee {
        if fee < Decimal::ZERO {
            result.push("delivery fee must not be negative");
        }
    }

    result
}
