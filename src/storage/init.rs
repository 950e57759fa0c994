//! Snapshot initialization
//!
//! Writes a sample household snapshot so a new user has something to edit.

use std::path::Path;

use crate::error::{DraagkrachtError, DraagkrachtResult};
use crate::models::{
    CategoryRole, Debt, HouseholdComposition, HouseholdSnapshot, Income, MaritalStatus, Money,
    MonthlyCost, Pot,
};

use super::file_io::write_atomic;

/// Write the sample snapshot to `path`
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn initialize_snapshot(path: &Path, force: bool) -> DraagkrachtResult<()> {
    if path.exists() && !force {
        return Err(DraagkrachtError::Snapshot(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    write_atomic(path, &sample_snapshot())
}

/// A small household: one salary, rent and insurance, two debts, four pots
pub fn sample_snapshot() -> HouseholdSnapshot {
    let mut groceries = Pot::expense("Boodschappen", Money::zero());
    groceries.role = Some(CategoryRole::Priority);

    HouseholdSnapshot {
        household: Some(HouseholdComposition::new(MaritalStatus::Alone, 0)),
        incomes: vec![
            Income::recurring("Salaris", Money::from_units(2_150)),
            Income::extra("Vakantiegeld", Money::from_units(1_400)),
        ],
        monthly_costs: vec![
            MonthlyCost::active("Huur", Money::from_units(850)),
            MonthlyCost::active("Zorgverzekering", Money::from_units(148)),
            MonthlyCost::active("Energie", Money::from_units(120)),
        ],
        debts: vec![
            Debt::new("Belastingdienst", Money::from_units(2_400))
                .with_amount_paid(Money::from_units(600))
                .with_arrangement(Money::from_units(100)),
            Debt::new("Telecom BV", Money::from_units(640)),
        ],
        pots: vec![
            groceries,
            Pot::expense("Vervoer", Money::zero()),
            Pot::expense("Kleding", Money::zero()),
            Pot::savings("Noodfonds", Money::from_units(50)),
        ],
    }
}
