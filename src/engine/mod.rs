//! Financial capacity and protection engine
//!
//! Four pure calculators over caller-supplied values:
//!
//! - [`fee`]: statutory maximum collection fee for a debt principal
//! - [`protection`]: protected income floor and seizable amount
//! - [`capacity`]: free budget and its daily / buffer / repayment split
//! - [`allocation`]: distribution of a free budget over budget categories
//!
//! Nothing in here performs I/O, holds state between calls or returns an
//! error. Invalid amounts are normalised at the entry point of each function
//! (negative principals and incomes count as zero) and every "failure" is an
//! ordinary result value the caller branches on.

pub mod allocation;
pub mod capacity;
pub mod fee;
pub mod protection;

pub use allocation::{
    apply_allocation, apply_override, distribute_evenly, distribute_heuristically,
    distribute_heuristically_with, priority_index, set_included, summarize, toggle_included,
    undistributed_remainder, Allocation, AllocationEntry, AllocationSummary,
    DistributionStrategy, DEFAULT_PRIORITY_KEYWORDS,
};
pub use capacity::{compute_capacity, CapacityResult};
pub use fee::{compute_max_fee, fee_breakdown, BracketFee, FeeBreakdown, MINIMUM_FEE};
pub use protection::{
    compute_protected_floor, household_norm, ProtectionResult, ProtectionStatus,
};

use crate::models::money::CENTS_PER_UNIT;
use crate::models::Money;

/// Basis points in a whole (100%)
pub(crate) const BASIS_POINTS: i64 = 10_000;

/// How an exact midpoint is resolved when dividing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rounding {
    /// Midpoints go up (`Math.round` for non-negative values)
    HalfUp,
    /// Midpoints go down
    HalfDown,
}

/// Divide a non-negative numerator, rounding to the nearest integer
pub(crate) fn div_round(numerator: i128, denominator: i128, rounding: Rounding) -> i128 {
    debug_assert!(numerator >= 0 && denominator > 0);
    let quotient = numerator / denominator;
    let twice_remainder = (numerator % denominator) * 2;
    let round_up = match rounding {
        Rounding::HalfUp => twice_remainder >= denominator,
        Rounding::HalfDown => twice_remainder > denominator,
    };
    if round_up {
        quotient + 1
    } else {
        quotient
    }
}

/// `amount * basis_points / 10_000`, rounded to the cent
///
/// `amount` must not be negative.
pub(crate) fn percent_of(amount: Money, basis_points: i64, rounding: Rounding) -> Money {
    let numerator = i128::from(amount.cents()) * i128::from(basis_points);
    let cents = div_round(numerator, i128::from(BASIS_POINTS), rounding);
    Money::from_cents(cents as i64)
}

/// `amount * basis_points / 10_000`, rounded to whole currency units
///
/// `amount` must not be negative.
pub(crate) fn percent_of_units(amount: Money, basis_points: i64, rounding: Rounding) -> Money {
    let numerator = i128::from(amount.cents()) * i128::from(basis_points);
    let denominator = i128::from(BASIS_POINTS) * i128::from(CENTS_PER_UNIT);
    let units = div_round(numerator, denominator, rounding);
    Money::from_units(units as i64)
}
