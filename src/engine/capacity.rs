//! Budget capacity split
//!
//! The free budget is what remains of the income after fixed costs and
//! arranged debt payments. A positive free budget is split 60 / 25 / 15
//! over daily needs, buffer and repayment capacity.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{percent_of, Rounding, BASIS_POINTS};
use crate::models::{FixedCostSnapshot, IncomeSnapshot, Money};

/// Share of the free budget for daily needs (60%)
pub const DAILY_NEEDS_BP: i64 = 6_000;

/// Share of the free budget for the buffer (25%)
pub const BUFFER_BP: i64 = 2_500;

/// Share of the free budget for debt repayment (15%)
pub const REPAYMENT_BP: i64 = 1_500;

const _: () = assert!(DAILY_NEEDS_BP + BUFFER_BP + REPAYMENT_BP == BASIS_POINTS);

/// Free budget and its split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityResult {
    /// Income minus fixed costs and arranged payments; negative on shortfall
    pub free_budget: Money,
    pub daily_needs_share: Money,
    pub buffer_share: Money,
    pub repayment_capacity: Money,
}

impl CapacityResult {
    /// Income does not cover the fixed obligations
    pub fn is_shortfall(&self) -> bool {
        !self.free_budget.is_positive()
    }

    /// Sum of the three shares
    pub fn allocated(&self) -> Money {
        self.daily_needs_share + self.buffer_share + self.repayment_capacity
    }
}

/// Compute the free budget and split it
///
/// Daily needs and buffer are rounded to the cent (half up); repayment
/// capacity takes whatever is left so the three shares always add up to the
/// free budget. When the free budget is zero or negative all shares are zero.
///
/// # Examples
/// ```
/// use draagkracht::engine::compute_capacity;
/// use draagkracht::models::{FixedCostSnapshot, IncomeSnapshot, Money};
///
/// let result = compute_capacity(
///     &IncomeSnapshot::new(Money::from_units(2_000)),
///     &FixedCostSnapshot::new(Money::from_units(1_200), Money::from_units(300)),
/// );
/// assert_eq!(result.free_budget, Money::from_units(500));
/// assert_eq!(result.repayment_capacity, Money::from_units(75));
/// ```
pub fn compute_capacity(income: &IncomeSnapshot, costs: &FixedCostSnapshot) -> CapacityResult {
    let free_budget = income.monthly_income_total
        - costs.total_fixed_costs
        - costs.total_arranged_debt_payments;

    if !free_budget.is_positive() {
        trace!(%free_budget, "no free budget");
        return CapacityResult {
            free_budget,
            daily_needs_share: Money::zero(),
            buffer_share: Money::zero(),
            repayment_capacity: Money::zero(),
        };
    }

    let daily_needs_share = percent_of(free_budget, DAILY_NEEDS_BP, Rounding::HalfUp);
    let buffer_share = percent_of(free_budget, BUFFER_BP, Rounding::HalfUp);
    let repayment_capacity = free_budget - daily_needs_share - buffer_share;

    trace!(%free_budget, %daily_needs_share, %buffer_share, %repayment_capacity, "split free budget");

    CapacityResult {
        free_budget,
        daily_needs_share,
        buffer_share,
        repayment_capacity,
    }
}
