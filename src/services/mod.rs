//! Service layer for Draagkracht
//!
//! The service layer sits between the snapshot records and the pure engine:
//! it derives the sums the calculators need and combines their results.

pub mod planner;
pub mod snapshot;

pub use planner::{find_category, DebtFeeCap, FinancialPlan, PlanOptions, PlannerService};
pub use snapshot::{budget_categories, fixed_cost_snapshot, income_snapshot};
