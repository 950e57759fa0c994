//! Snapshot values fed into the capacity calculation
//!
//! Callers sum their records for one reference month and hand the totals to
//! the engine. See `services::snapshot` for how the sums are derived.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Total recurring income for the reference month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IncomeSnapshot {
    #[serde(default)]
    pub monthly_income_total: Money,
}

impl IncomeSnapshot {
    pub fn new(monthly_income_total: Money) -> Self {
        Self {
            monthly_income_total,
        }
    }
}

/// Fixed obligations for the reference month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FixedCostSnapshot {
    #[serde(default)]
    pub total_fixed_costs: Money,

    #[serde(default)]
    pub total_arranged_debt_payments: Money,
}

impl FixedCostSnapshot {
    pub fn new(total_fixed_costs: Money, total_arranged_debt_payments: Money) -> Self {
        Self {
            total_fixed_costs,
            total_arranged_debt_payments,
        }
    }

    /// Everything that leaves the account before the free budget
    pub fn total(&self) -> Money {
        self.total_fixed_costs + self.total_arranged_debt_payments
    }
}
