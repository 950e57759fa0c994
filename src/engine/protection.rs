//! Protected income floor
//!
//! A debtor keeps at least the household norm: a fixed amount for a single
//! person, a separate (higher) amount for couples, plus a fixed amount per
//! child. Of the income above the norm, 10% may be seized.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

use super::{percent_of, Rounding};
use crate::models::{HouseholdComposition, Money};

/// Norm for a single person without children
pub const NORM_ALONE: Money = Money::from_units(1_626);

/// Norm for cohabiting or married couples, replaces [`NORM_ALONE`]
pub const NORM_COUPLE: Money = Money::from_units(2_280);

/// Added to the norm for each child
pub const NORM_PER_CHILD: Money = Money::from_units(125);

/// Share of the income above the norm that may be seized (10%)
pub const SEIZURE_RATE_BP: i64 = 1_000;

/// Whether any part of the income can be seized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtectionStatus {
    /// Income does not exceed the norm
    FullyProtected,
    /// Part of the income above the norm can be seized
    PartiallyProtected,
}

impl ProtectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullyProtected => "fully_protected",
            Self::PartiallyProtected => "partially_protected",
        }
    }
}

impl fmt::Display for ProtectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a protected income calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectionResult {
    /// Income that must remain with the debtor
    pub protected_floor: Money,
    pub status: ProtectionStatus,
    /// Income that may be withheld
    pub seizable_amount: Money,
    /// The household norm that was applied
    pub norm: Money,
}

/// The protected norm for a household
pub fn household_norm(household: Option<&HouseholdComposition>) -> Money {
    let household = household.copied().unwrap_or_default();

    let base = if household.marital_status.is_couple() {
        NORM_COUPLE
    } else {
        NORM_ALONE
    };

    let children = Money::from_cents(
        NORM_PER_CHILD
            .cents()
            .saturating_mul(i64::from(household.number_of_children)),
    );

    base + children
}

/// Compute the protected income floor for a monthly income
///
/// A missing household means alone without children. Negative incomes count
/// as zero. The seizable amount is rounded to the cent, half up.
///
/// # Examples
/// ```
/// use draagkracht::engine::{compute_protected_floor, ProtectionStatus};
/// use draagkracht::models::Money;
///
/// let result = compute_protected_floor(Money::from_units(2_000), None);
/// assert_eq!(result.status, ProtectionStatus::PartiallyProtected);
/// assert_eq!(result.seizable_amount, Money::from_cents(3_740));
/// ```
pub fn compute_protected_floor(
    monthly_income: Money,
    household: Option<&HouseholdComposition>,
) -> ProtectionResult {
    let income = monthly_income.non_negative();
    let norm = household_norm(household);

    let result = if income <= norm {
        ProtectionResult {
            protected_floor: income,
            status: ProtectionStatus::FullyProtected,
            seizable_amount: Money::zero(),
            norm,
        }
    } else {
        let excess = income - norm;
        let seizable_amount = percent_of(excess, SEIZURE_RATE_BP, Rounding::HalfUp).non_negative();
        ProtectionResult {
            protected_floor: income - seizable_amount,
            status: ProtectionStatus::PartiallyProtected,
            seizable_amount,
            norm,
        }
    };

    trace!(%income, %norm, status = %result.status, "computed protected floor");
    result
}
