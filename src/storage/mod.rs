//! Storage layer for Draagkracht
//!
//! Reads household snapshot files (JSON or YAML) and writes the sample one.
//! Records are never updated here; the snapshot is input only.

pub mod file_io;
pub mod init;

pub use file_io::{read_required, write_atomic, FileFormat};
pub use init::{initialize_snapshot, sample_snapshot};

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::error::{DraagkrachtError, DraagkrachtResult};
use crate::models::HouseholdSnapshot;

/// Load and validate a household snapshot
pub fn load_snapshot(path: &Path) -> DraagkrachtResult<HouseholdSnapshot> {
    let snapshot: HouseholdSnapshot = read_required(path)?;
    validate_snapshot(&snapshot)?;

    debug!(
        path = %path.display(),
        incomes = snapshot.incomes.len(),
        costs = snapshot.monthly_costs.len(),
        debts = snapshot.debts.len(),
        pots = snapshot.pots.len(),
        "loaded household snapshot"
    );
    Ok(snapshot)
}

/// Check structural consistency of a snapshot
///
/// Amounts are not checked: they are coerced permissively by the engine.
/// Expense pot names must be valid, since only those become budget
/// categories. Pot ids must be unique, since allocations are keyed by id.
pub fn validate_snapshot(snapshot: &HouseholdSnapshot) -> DraagkrachtResult<()> {
    let mut seen = HashSet::new();

    for pot in &snapshot.pots {
        if pot.is_expense() {
            pot.to_category()
                .validate()
                .map_err(|e| DraagkrachtError::Validation(format!("pot '{}': {}", pot.name, e)))?;
        }

        if !seen.insert(&pot.id) {
            return Err(DraagkrachtError::Validation(format!(
                "duplicate pot id {}",
                pot.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Pot};
    use tempfile::TempDir;

    #[test]
    fn test_validate_rejects_empty_pot_name() {
        let snapshot = HouseholdSnapshot {
            pots: vec![Pot::expense("", Money::zero())],
            ..Default::default()
        };
        let err = validate_snapshot(&snapshot).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let pot = Pot::expense("Boodschappen", Money::zero());
        let snapshot = HouseholdSnapshot {
            pots: vec![pot.clone(), pot],
            ..Default::default()
        };
        assert!(validate_snapshot(&snapshot).is_err());
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert!(validate_snapshot(&sample_snapshot()).is_ok());
    }

    #[test]
    fn test_validate_ignores_savings_pot_names() {
        let snapshot = HouseholdSnapshot {
            pots: vec![
                Pot::expense("Boodschappen", Money::zero()),
                Pot::savings(
                    "Spaarrekening voor de vakantie naar familie in het buitenland",
                    Money::zero(),
                ),
            ],
            ..Default::default()
        };
        assert!(validate_snapshot(&snapshot).is_ok());
    }

    #[test]
    fn test_load_snapshot_with_store_ids() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("household.json");
        std::fs::write(
            &path,
            r#"{"pots":[{"id":"65f1a2b3c4d5","name":"Boodschappen","budget":100}],
                "debts":[{"id":"42","creditor":"CJIB","amount":250}]}"#,
        )
        .unwrap();

        let snapshot = load_snapshot(&path).unwrap();
        assert_eq!(snapshot.pots[0].id.as_str(), "65f1a2b3c4d5");
        assert_eq!(snapshot.debts[0].id.as_str(), "42");
    }
}
