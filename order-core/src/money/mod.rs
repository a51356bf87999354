//! Monetary calculations using rust_decimal for precision
//!
//! All order amounts are computed with `Decimal` arithmetic and rounded to
//! two decimal places; binary floating point never touches money.

use rust_decimal::prelude::*;
use shared::order::{OrderLineItem, OrderTotals};

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Platform commission rate withheld from sellers (10%)
///
/// An operator constant, never user-supplied. Use
/// [`calculate_totals_with_rate`] for deployments with a different rate.
pub const COMMISSION_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

#[inline]
fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Compute order totals at the platform commission rate.
pub fn calculate_totals(items: &[OrderLineItem], delivery_fee: Decimal) -> OrderTotals {
    calculate_totals_with_rate(items, delivery_fee, COMMISSION_RATE)
}

/// Compute order totals at an explicit commission rate.
///
/// Subtotal is the sum of `unit_price * quantity` over all line items. The
/// commission is a seller-settlement figure and is not added to the
/// customer-facing total; the customer pays subtotal + delivery fee. An
/// empty item list yields a zero subtotal and commission, so the total is
/// just the delivery fee.
pub fn calculate_totals_with_rate(
    items: &[OrderLineItem],
    delivery_fee: Decimal,
    commission_rate: Decimal,
) -> OrderTotals {
    let subtotal: Decimal = items
        .iter()
        .map(|item| item.unit_price * Decimal::from(item.quantity))
        .sum();

    let subtotal = round_money(subtotal.max(Decimal::ZERO));
    let delivery_fee = round_money(delivery_fee.max(Decimal::ZERO));
    let commission = round_money(subtotal * commission_rate);
    let total = round_money(subtotal + delivery_fee);

    OrderTotals {
        subtotal,
        delivery_fee,
        commission,
        total,
    }
}
