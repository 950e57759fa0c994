//! Snapshot derivation
//!
//! Turns household records into the primitive sums the engine works with,
//! for one reference month.

use crate::models::{
    BudgetCategory, Debt, FixedCostSnapshot, Income, IncomeSnapshot, IncomeType, Money,
    MonthlyCost, Pot, ReferenceMonth,
};

/// Sum of recurring incomes active in `month`
///
/// Only `vast` incomes count. An income is active when its start/end window
/// touches the month; missing bounds are open-ended.
pub fn income_snapshot(incomes: &[Income], month: ReferenceMonth) -> IncomeSnapshot {
    let monthly_income_total = incomes
        .iter()
        .filter(|i| i.income_type == IncomeType::Vast)
        .filter(|i| month.within(i.start_date, i.end_date))
        .map(|i| i.amount)
        .sum();

    IncomeSnapshot::new(monthly_income_total)
}

/// Active monthly costs and installments of active payment arrangements
pub fn fixed_cost_snapshot(costs: &[MonthlyCost], debts: &[Debt]) -> FixedCostSnapshot {
    let total_fixed_costs: Money = costs
        .iter()
        .filter(|c| c.is_active())
        .map(|c| c.amount)
        .sum();

    let total_arranged_debt_payments: Money = debts
        .iter()
        .filter(|d| d.has_active_arrangement())
        .map(|d| d.monthly_payment)
        .sum();

    FixedCostSnapshot::new(total_fixed_costs, total_arranged_debt_payments)
}

/// Budget categories for all expense pots, in pot order
pub fn budget_categories(pots: &[Pot]) -> Vec<BudgetCategory> {
    pots.iter()
        .filter(|p| p.is_expense())
        .map(Pot::to_category)
        .collect()
}
