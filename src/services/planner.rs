//! Planner service
//!
//! Runs all calculators over one household snapshot: protected income,
//! capacity split, pot distribution with the user's exclusions and
//! overrides, and a fee cap per open debt.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Settings;
use crate::engine::{
    apply_allocation, apply_override, compute_capacity, compute_max_fee, compute_protected_floor,
    set_included, summarize, undistributed_remainder, Allocation, AllocationSummary,
    CapacityResult, DistributionStrategy, ProtectionResult,
};
use crate::error::{DraagkrachtError, DraagkrachtResult};
use crate::models::{
    BudgetCategory, DebtId, DebtStatus, FixedCostSnapshot, HouseholdComposition,
    HouseholdSnapshot, IncomeSnapshot, Money, ReferenceMonth,
};
use crate::services::snapshot::{budget_categories, fixed_cost_snapshot, income_snapshot};

/// User choices for one planning run
#[derive(Debug, Clone)]
pub struct PlanOptions {
    pub month: ReferenceMonth,
    pub strategy: DistributionStrategy,
    /// Pot names to leave out of the distribution
    pub exclude: Vec<String>,
    /// Pot names with a fixed amount, applied after distribution
    pub overrides: Vec<(String, Money)>,
    /// Keep current pot budgets instead of distributing
    pub keep_current: bool,
}

impl PlanOptions {
    pub fn new(month: ReferenceMonth, strategy: DistributionStrategy) -> Self {
        Self {
            month,
            strategy,
            exclude: Vec::new(),
            overrides: Vec::new(),
            keep_current: false,
        }
    }
}

/// Maximum collection fee for one debt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtFeeCap {
    pub debt_id: DebtId,
    pub creditor: String,
    pub status: DebtStatus,
    pub principal: Money,
    pub max_fee: Money,
}

/// Everything computed for one household and month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialPlan {
    pub month: ReferenceMonth,
    pub household: HouseholdComposition,
    pub income: IncomeSnapshot,
    pub costs: FixedCostSnapshot,
    pub protection: ProtectionResult,
    pub capacity: CapacityResult,
    pub strategy: DistributionStrategy,
    /// Expense pots after exclusions, distribution and overrides
    pub categories: Vec<BudgetCategory>,
    /// What the distribution run assigned (empty when nothing was distributed)
    pub allocation: Allocation,
    /// Free budget the distribution left unassigned
    pub undistributed: Money,
    pub summary: AllocationSummary,
    pub fee_caps: Vec<DebtFeeCap>,
}

impl FinancialPlan {
    /// Income does not cover fixed costs and arrangements
    pub fn is_shortfall(&self) -> bool {
        self.capacity.is_shortfall()
    }
}

/// Service computing financial plans
pub struct PlannerService<'a> {
    settings: &'a Settings,
}

impl<'a> PlannerService<'a> {
    /// Create a new planner service
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Compute the full plan for a snapshot
    pub fn plan(
        &self,
        snapshot: &HouseholdSnapshot,
        options: &PlanOptions,
    ) -> DraagkrachtResult<FinancialPlan> {
        let household = snapshot.household.unwrap_or_default();
        let income = income_snapshot(&snapshot.incomes, options.month);
        let costs = fixed_cost_snapshot(&snapshot.monthly_costs, &snapshot.debts);

        debug!(
            month = %options.month,
            income = %income.monthly_income_total,
            fixed = %costs.total_fixed_costs,
            arranged = %costs.total_arranged_debt_payments,
            "derived snapshot sums"
        );

        let protection = compute_protected_floor(income.monthly_income_total, Some(&household));
        let capacity = compute_capacity(&income, &costs);
        if capacity.is_shortfall() {
            warn!(
                free_budget = %capacity.free_budget,
                "income does not cover fixed obligations"
            );
        }

        let mut categories = budget_categories(&snapshot.pots);
        for name in &options.exclude {
            let id = find_category(&categories, name)?.id.clone();
            categories = set_included(&categories, &id, false);
        }

        let allocation = if options.keep_current {
            Allocation::default()
        } else {
            let included: Vec<BudgetCategory> =
                categories.iter().filter(|c| c.included).cloned().collect();
            options.strategy.distribute(
                capacity.free_budget,
                &included,
                &self.settings.priority_keywords,
            )
        };
        categories = apply_allocation(&categories, &allocation);
        let undistributed = if allocation.is_empty() {
            Money::zero()
        } else {
            undistributed_remainder(capacity.free_budget, &allocation)
        };

        debug!(
            strategy = %options.strategy,
            assigned = %allocation.total(),
            %undistributed,
            "distributed free budget"
        );

        for (name, amount) in &options.overrides {
            let id = find_category(&categories, name)?.id.clone();
            categories = apply_override(&categories, &id, *amount);
        }

        let summary = summarize(capacity.free_budget, &categories);
        if summary.is_over_allocated() {
            warn!(remaining = %summary.remaining, "pots exceed the free budget");
        }

        let fee_caps = snapshot
            .debts
            .iter()
            .filter(|d| d.status != DebtStatus::PaidOff)
            .map(|d| {
                let principal = d.outstanding_principal();
                DebtFeeCap {
                    debt_id: d.id.clone(),
                    creditor: d.creditor.clone(),
                    status: d.status,
                    principal,
                    max_fee: compute_max_fee(principal),
                }
            })
            .collect();

        Ok(FinancialPlan {
            month: options.month,
            household,
            income,
            costs,
            protection,
            capacity,
            strategy: options.strategy,
            categories,
            allocation,
            undistributed,
            summary,
            fee_caps,
        })
    }
}

/// Find a category by name (case-insensitive) or id
pub fn find_category<'c>(
    categories: &'c [BudgetCategory],
    name_or_id: &str,
) -> DraagkrachtResult<&'c BudgetCategory> {
    let needle = name_or_id.trim();
    categories
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(needle) || c.id.as_str() == needle)
        .ok_or_else(|| DraagkrachtError::pot_not_found(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Debt, Income, MaritalStatus, MonthlyCost, Pot};
    use crate::storage::sample_snapshot;

    fn march() -> ReferenceMonth {
        ReferenceMonth::new(2025, 3).unwrap()
    }

    fn snapshot() -> HouseholdSnapshot {
        HouseholdSnapshot {
            household: None,
            incomes: vec![Income::recurring("Salaris", Money::from_units(2_000))],
            monthly_costs: vec![MonthlyCost::active("Huur", Money::from_units(1_200))],
            debts: vec![
                Debt::new("CJIB", Money::from_units(2_500)).with_arrangement(Money::from_units(300)),
                Debt::new("Telecom", Money::from_units(100)),
            ],
            pots: vec![
                Pot::expense("Boodschappen", Money::zero()),
                Pot::expense("Auto", Money::zero()),
                Pot::expense("Kleding", Money::zero()),
                Pot::savings("Sparen", Money::from_units(10)),
            ],
        }
    }

    #[test]
    fn test_plan_end_to_end() {
        let settings = Settings::default();
        let planner = PlannerService::new(&settings);
        let options = PlanOptions::new(march(), DistributionStrategy::Heuristic);

        let plan = planner.plan(&snapshot(), &options).unwrap();

        assert_eq!(plan.capacity.free_budget, Money::from_units(500));
        assert_eq!(plan.capacity.daily_needs_share, Money::from_units(300));
        assert_eq!(plan.protection.seizable_amount, Money::from_cents(3_740));
        assert_eq!(plan.household.marital_status, MaritalStatus::Alone);

        assert_eq!(plan.categories.len(), 3);
        assert_eq!(plan.categories[0].current_allocation, Money::from_units(250));
        assert_eq!(plan.categories[1].current_allocation, Money::from_units(125));
        assert_eq!(plan.categories[2].current_allocation, Money::from_units(125));
        assert_eq!(plan.undistributed, Money::zero());
        assert_eq!(plan.summary.remaining, Money::zero());

        assert_eq!(plan.fee_caps.len(), 2);
        assert_eq!(plan.fee_caps[0].max_fee, Money::from_units(375));
        assert_eq!(plan.fee_caps[1].max_fee, Money::from_units(40));
    }

    #[test]
    fn test_plan_exclusion_keeps_allocation() {
        let settings = Settings::default();
        let planner = PlannerService::new(&settings);
        let mut snap = snapshot();
        snap.pots[2].budget = Money::from_units(40);

        let mut options = PlanOptions::new(march(), DistributionStrategy::Even);
        options.exclude = vec!["kleding".into()];
        let plan = planner.plan(&snap, &options).unwrap();

        assert_eq!(plan.categories[0].current_allocation, Money::from_units(250));
        assert_eq!(plan.categories[1].current_allocation, Money::from_units(250));
        assert!(!plan.categories[2].included);
        assert_eq!(plan.categories[2].current_allocation, Money::from_units(40));
        assert_eq!(plan.summary.total_allocated, Money::from_units(500));
    }

    #[test]
    fn test_plan_override_can_over_allocate() {
        let settings = Settings::default();
        let planner = PlannerService::new(&settings);

        let mut options = PlanOptions::new(march(), DistributionStrategy::Heuristic);
        options.overrides = vec![("Auto".into(), Money::from_units(400))];
        let plan = planner.plan(&snapshot(), &options).unwrap();

        assert_eq!(plan.categories[1].current_allocation, Money::from_units(400));
        assert_eq!(plan.summary.remaining, Money::from_units(-275));
        assert!(plan.summary.is_over_allocated());
    }

    #[test]
    fn test_plan_unknown_pot_is_error() {
        let settings = Settings::default();
        let planner = PlannerService::new(&settings);

        let mut options = PlanOptions::new(march(), DistributionStrategy::Even);
        options.exclude = vec!["Vakantie".into()];
        let err = planner.plan(&snapshot(), &options).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_plan_shortfall() {
        let settings = Settings::default();
        let planner = PlannerService::new(&settings);
        let mut snap = snapshot();
        snap.monthly_costs.push(MonthlyCost::active("Lening", Money::from_units(700)));

        let plan = planner
            .plan(&snap, &PlanOptions::new(march(), DistributionStrategy::Heuristic))
            .unwrap();

        assert!(plan.is_shortfall());
        assert_eq!(plan.capacity.free_budget, Money::from_units(-200));
        assert!(plan.allocation.is_empty());
        assert!(plan.categories.iter().all(|c| c.current_allocation.is_zero()));
    }

    #[test]
    fn test_plan_keep_current() {
        let settings = Settings::default();
        let planner = PlannerService::new(&settings);
        let mut snap = snapshot();
        snap.pots[0].budget = Money::from_units(320);

        let mut options = PlanOptions::new(march(), DistributionStrategy::Heuristic);
        options.keep_current = true;
        let plan = planner.plan(&snap, &options).unwrap();

        assert!(plan.allocation.is_empty());
        assert_eq!(plan.categories[0].current_allocation, Money::from_units(320));
        assert_eq!(plan.summary.remaining, Money::from_units(180));
    }

    #[test]
    fn test_sample_snapshot_plan() {
        let settings = Settings::default();
        let planner = PlannerService::new(&settings);
        let plan = planner
            .plan(&sample_snapshot(), &PlanOptions::new(march(), DistributionStrategy::Heuristic))
            .unwrap();

        // 2150 - (850 + 148 + 120) - 100
        assert_eq!(plan.capacity.free_budget, Money::from_units(932));
        assert_eq!(plan.categories[0].current_allocation, Money::from_units(466));
        assert_eq!(plan.categories[1].current_allocation, Money::from_units(233));
        // Belastingdienst: 1,800 outstanding
        assert_eq!(plan.fee_caps[0].principal, Money::from_units(1_800));
        assert_eq!(plan.fee_caps[0].max_fee, Money::from_units(270));
    }
}
