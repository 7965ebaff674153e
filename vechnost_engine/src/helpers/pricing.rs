use serde::{Deserialize, Serialize};
use thiserror::Error;
use vechnost_common::{FeeRate, Money};

/// The priced components of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base: Money,
    pub total: Money,
}

#[derive(Debug, Clone, Error)]
#[error("Order total is too large to represent in cents")]
pub struct PriceOverflow;

/// Prices an order.
///
/// The base price is `unit_price × amount`. The payment method then levies
/// its percentage fee on the base, plus a flat fee:
///
/// ```text
/// total = base + base × fee_percent / 100 + fee_flat
/// ```
///
/// The grand total rounds to the nearest cent, halves to even, which matches
/// how the fee schedule is quoted to customers. With a zero rate and zero
/// flat fee the total equals the base exactly.
pub fn order_total(
    unit_price: Money,
    amount: i64,
    fee_percent: FeeRate,
    fee_flat: Money,
) -> Result<PriceBreakdown, PriceOverflow> {
    let base_cents = unit_price.cents().checked_mul(amount).ok_or(PriceOverflow)?;
    let base = Money::from_cents(base_cents);
    let base_dec = base.to_decimal();
    let fee = fee_percent.apply_to(base_dec).ok_or(PriceOverflow)?;
    let total = base_dec
        .checked_add(fee)
        .and_then(|t| t.checked_add(fee_flat.to_decimal()))
        .ok_or(PriceOverflow)?;
    let total = Money::from_decimal(total).map_err(|_| PriceOverflow)?;
    Ok(PriceBreakdown { base, total })
}
