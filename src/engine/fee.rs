//! Collection fee cap
//!
//! The maximum collection fee on a debt follows a marginal bracket schedule:
//! each rate only applies to the part of the principal inside its bracket.
//! The sum is rounded to whole currency units (an exact half unit rounds down,
//! in favour of the debtor) and never drops below [`MINIMUM_FEE`].

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{div_round, percent_of, Rounding, BASIS_POINTS};
use crate::models::money::CENTS_PER_UNIT;
use crate::models::Money;

/// The lowest fee a collector may charge
pub const MINIMUM_FEE: Money = Money::from_units(40);

/// One bracket of the fee schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FeeBracket {
    /// Upper bound of the bracket, `None` for the open top bracket
    upper: Option<Money>,
    /// Marginal rate in basis points
    rate_bp: i64,
}

const FEE_BRACKETS: [FeeBracket; 5] = [
    FeeBracket {
        upper: Some(Money::from_units(2_500)),
        rate_bp: 1_500,
    },
    FeeBracket {
        upper: Some(Money::from_units(5_000)),
        rate_bp: 1_000,
    },
    FeeBracket {
        upper: Some(Money::from_units(10_000)),
        rate_bp: 500,
    },
    FeeBracket {
        upper: Some(Money::from_units(200_000)),
        rate_bp: 100,
    },
    FeeBracket {
        upper: None,
        rate_bp: 50,
    },
];

/// Fee charged within a single bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketFee {
    /// Lower bound of the bracket
    pub from: Money,
    /// Upper bound of the bracket, `None` for the top bracket
    pub to: Option<Money>,
    /// Marginal rate in basis points (1500 = 15%)
    pub rate_bp: i64,
    /// Part of the principal inside this bracket
    pub portion: Money,
    /// Fee on that portion, rounded to the cent for display
    pub fee: Money,
}

/// Per-bracket view of a fee calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    /// Principal after normalisation
    pub principal: Money,
    pub brackets: Vec<BracketFee>,
    /// Sum of the marginal fees, rounded to whole units
    pub marginal_total: Money,
    /// Whether the minimum fee was applied
    pub minimum_applied: bool,
    /// The collection fee cap
    pub max_fee: Money,
}

/// Compute the maximum collection fee for a debt principal
///
/// Negative principals are treated as zero, so the result is always at
/// least [`MINIMUM_FEE`].
///
/// # Examples
/// ```
/// use draagkracht::engine::compute_max_fee;
/// use draagkracht::models::Money;
///
/// assert_eq!(compute_max_fee(Money::from_units(2_500)), Money::from_units(375));
/// assert_eq!(compute_max_fee(Money::from_units(-100)), Money::from_units(40));
/// ```
pub fn compute_max_fee(principal: Money) -> Money {
    fee_breakdown(principal).max_fee
}

/// Compute the collection fee with its per-bracket breakdown
pub fn fee_breakdown(principal: Money) -> FeeBreakdown {
    let principal = principal.non_negative();

    let mut brackets = Vec::with_capacity(FEE_BRACKETS.len());
    // Exact sum in cent-basis-points, rounded once at the end
    let mut exact_total: i128 = 0;
    let mut lower = Money::zero();

    for bracket in FEE_BRACKETS {
        let top = bracket.upper.map_or(principal, |upper| principal.min(upper));
        let portion = (top - lower).non_negative();

        exact_total += i128::from(portion.cents()) * i128::from(bracket.rate_bp);
        brackets.push(BracketFee {
            from: lower,
            to: bracket.upper,
            rate_bp: bracket.rate_bp,
            portion,
            fee: percent_of(portion, bracket.rate_bp, Rounding::HalfUp),
        });

        match bracket.upper {
            Some(upper) => lower = upper,
            None => break,
        }
    }

    let units = div_round(
        exact_total,
        i128::from(BASIS_POINTS) * i128::from(CENTS_PER_UNIT),
        Rounding::HalfDown,
    );
    let marginal_total = Money::from_units(units as i64);
    let minimum_applied = marginal_total < MINIMUM_FEE;
    let max_fee = marginal_total.max(MINIMUM_FEE);

    trace!(%principal, %marginal_total, %max_fee, "computed collection fee cap");

    FeeBreakdown {
        principal,
        brackets,
        marginal_total,
        minimum_applied,
        max_fee,
    }
}
