//! Core data models for Draagkracht
//!
//! This module contains the value types the engine computes with (money,
//! household composition, budget categories, snapshots) and the record
//! shapes read from a household snapshot file.

pub mod category;
pub mod household;
pub mod ids;
pub mod money;
pub mod month;
pub mod records;
pub mod snapshot;

pub use category::{BudgetCategory, CategoryRole, CategoryValidationError};
pub use household::{HouseholdComposition, MaritalStatus};
pub use ids::{CategoryId, CostId, DebtId, IncomeId};
pub use money::{Money, MoneyParseError};
pub use month::{MonthParseError, ReferenceMonth};
pub use records::{
    CostStatus, Debt, DebtStatus, HouseholdSnapshot, Income, IncomeType, MonthlyCost, Pot, PotType,
};
pub use snapshot::{FixedCostSnapshot, IncomeSnapshot};
