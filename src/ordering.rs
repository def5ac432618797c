//! Order state and pricing rules.
//!
//! Everything here is free of I/O so the services can apply the same rules
//! inside or outside a transaction, and so the rules can be tested without a
//! database.

use rust_decimal::Decimal;

use crate::error::{AppError, AppResult};

/// Largest amount a `NUMERIC(12, 2)` column holds: 9,999,999,999.99.
pub const MAX_MONEY: Decimal = Decimal::from_parts(0xD4A5_0FFF, 0xE8, 0, false, 2);

/// Lifecycle of an order. `Open -> Closed` is the only transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderState {
    Open,
    Closed,
}

impl OrderState {
    pub fn from_flag(is_open: bool) -> Self {
        if is_open {
            OrderState::Open
        } else {
            OrderState::Closed
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, OrderState::Open)
    }

    /// Rejects any mutation of a closed order.
    pub fn ensure_open(self) -> AppResult<()> {
        match self {
            OrderState::Open => Ok(()),
            OrderState::Closed => Err(AppError::OrderClosed),
        }
    }

    /// Target state of a close request.
    pub fn close(self) -> AppResult<OrderState> {
        self.ensure_open()?;
        Ok(OrderState::Closed)
    }
}

/// Sum of unit prices, one entry per attached order item row.
///
/// Quantity is never multiplied in: an item attached twice appears twice.
pub fn total_of_units<I>(unit_prices: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    unit_prices.into_iter().fold(Decimal::ZERO, |acc, price| acc + price)
}

/// Final charge of a closing order: current total plus gratuity.
pub fn fold_tip(total_price: Option<Decimal>, tip: Option<Decimal>) -> AppResult<Decimal> {
    total_price
        .unwrap_or_default()
        .checked_add(tip.unwrap_or_default())
        .filter(|total| *total <= MAX_MONEY)
        .ok_or_else(|| AppError::BadRequest("total with tip is out of range".into()))
}

/// Aggregate of ledger totals, null totals count as zero.
pub fn sum_totals<I>(totals: I) -> Decimal
where
    I: IntoIterator<Item = Option<Decimal>>,
{
    totals
        .into_iter()
        .fold(Decimal::ZERO, |acc, total| acc + total.unwrap_or_default())
}

/// Optimistic concurrency check. `None` means the caller did not ask for one.
pub fn ensure_version(expected: Option<i32>, actual: i32) -> AppResult<()> {
    match expected {
        Some(expected) if expected != actual => Err(AppError::Conflict(format!(
            "Order was modified concurrently (expected version {expected}, found {actual})"
        ))),
        _ => Ok(()),
    }
}

pub fn ensure_price(price: Decimal) -> AppResult<()> {
    ensure_money("price", price)
}

pub fn ensure_tip(tip: Option<Decimal>) -> AppResult<()> {
    match tip {
        Some(tip) => ensure_money("tip", tip),
        None => Ok(()),
    }
}

fn ensure_money(field: &str, amount: Decimal) -> AppResult<()> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(AppError::BadRequest(format!("{field} must not be negative")));
    }
    if amount > MAX_MONEY {
        return Err(AppError::BadRequest(format!(
            "{field} must not exceed {MAX_MONEY}"
        )));
    }
    Ok(())
}
