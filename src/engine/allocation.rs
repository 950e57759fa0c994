//! Budget allocation over categories
//!
//! Distributes a positive free budget over budget categories, either evenly
//! or with a fixed half share for the priority (groceries) category. The
//! caller owns the category list; every function here takes a slice and
//! returns new values.
//!
//! Distributions work in whole currency units and floor each share, so a
//! small remainder can stay undistributed. Overrides are never checked
//! against the free budget: [`summarize`] reports over-allocation as a
//! negative remaining amount instead.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use super::{percent_of_units, Rounding};
use crate::models::{BudgetCategory, CategoryId, Money};

/// Name fragments that identify a groceries category in legacy data
pub const DEFAULT_PRIORITY_KEYWORDS: &[&str] = &[
    "boodschappen",
    "supermarkt",
    "voeding",
    "eten en drinken",
    "groceries",
    "food",
];

/// Share of the free budget for the priority category (50%)
pub const PRIORITY_SHARE_BP: i64 = 5_000;

/// Amount assigned to one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub category_id: CategoryId,
    pub amount: Money,
}

/// Result of a distribution run, in category order
///
/// An empty allocation means nothing changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Allocation {
    entries: Vec<AllocationEntry>,
}

impl Allocation {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Amount assigned to a category, if it took part
    pub fn get(&self, category_id: &CategoryId) -> Option<Money> {
        self.entries
            .iter()
            .find(|e| &e.category_id == category_id)
            .map(|e| e.amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AllocationEntry> {
        self.entries.iter()
    }

    /// Sum of all assigned amounts
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.amount).sum()
    }

    fn push(&mut self, category_id: CategoryId, amount: Money) {
        self.entries.push(AllocationEntry {
            category_id,
            amount,
        });
    }
}

/// How a free budget is spread over categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionStrategy {
    /// Same amount for every category
    Even,
    /// Half for the priority category, the rest evenly
    #[default]
    Heuristic,
}

impl DistributionStrategy {
    /// Run this strategy
    ///
    /// `extra_keywords` extend the groceries keywords used when no category
    /// carries the priority role.
    pub fn distribute(
        &self,
        free_budget: Money,
        categories: &[BudgetCategory],
        extra_keywords: &[String],
    ) -> Allocation {
        match self {
            Self::Even => distribute_evenly(free_budget, categories),
            Self::Heuristic => distribute_heuristically_with(free_budget, categories, extra_keywords),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Even => "even",
            Self::Heuristic => "heuristic",
        }
    }
}

impl fmt::Display for DistributionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistributionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "even" | "evenly" => Ok(Self::Even),
            "heuristic" | "smart" => Ok(Self::Heuristic),
            other => Err(format!("Unknown distribution strategy: {}", other)),
        }
    }
}

/// Split the free budget equally over all categories
///
/// Each category gets `floor(free_budget / n)` whole units, replacing any
/// previous allocation. Returns an empty allocation when there are no
/// categories or the free budget is not positive.
pub fn distribute_evenly(free_budget: Money, categories: &[BudgetCategory]) -> Allocation {
    let mut allocation = Allocation::default();
    if categories.is_empty() || !free_budget.is_positive() {
        return allocation;
    }

    let share = even_share(free_budget, categories.len());
    for category in categories {
        allocation.push(category.id.clone(), share);
    }

    trace!(%free_budget, %share, count = categories.len(), "distributed evenly");
    allocation
}

/// Give the priority category half, split the rest evenly
///
/// Uses the default groceries keywords for categories without an explicit
/// role. Falls back to [`distribute_evenly`] when there is no priority
/// category.
pub fn distribute_heuristically(free_budget: Money, categories: &[BudgetCategory]) -> Allocation {
    distribute_heuristically_with(free_budget, categories, &[])
}

/// [`distribute_heuristically`] with additional groceries keywords
pub fn distribute_heuristically_with(
    free_budget: Money,
    categories: &[BudgetCategory],
    extra_keywords: &[String],
) -> Allocation {
    if categories.is_empty() || !free_budget.is_positive() {
        return Allocation::default();
    }

    let Some(priority) = priority_index(categories, extra_keywords) else {
        return distribute_evenly(free_budget, categories);
    };

    let priority_share = percent_of_units(free_budget, PRIORITY_SHARE_BP, Rounding::HalfUp);
    let rest = (free_budget - priority_share).non_negative();
    let others = categories.len() - 1;
    let other_share = if others > 0 {
        even_share(rest, others)
    } else {
        Money::zero()
    };

    let mut allocation = Allocation::default();
    for (index, category) in categories.iter().enumerate() {
        let amount = if index == priority {
            priority_share
        } else {
            other_share
        };
        allocation.push(category.id.clone(), amount);
    }

    trace!(
        %free_budget,
        priority = %categories[priority].name,
        %priority_share,
        %other_share,
        "distributed heuristically"
    );
    allocation
}

/// Index of the priority category
///
/// The first category with the priority role wins. Without one, the first
/// category whose name contains a groceries keyword (case-insensitive) is
/// used.
pub fn priority_index(categories: &[BudgetCategory], extra_keywords: &[String]) -> Option<usize> {
    if let Some(index) = categories.iter().position(BudgetCategory::is_priority) {
        return Some(index);
    }

    categories.iter().position(|category| {
        let name = category.name.to_lowercase();
        let matches = |keyword: &str| {
            let keyword = keyword.trim().to_lowercase();
            !keyword.is_empty() && name.contains(&keyword)
        };
        DEFAULT_PRIORITY_KEYWORDS.iter().any(|k| matches(k))
            || extra_keywords.iter().any(|k| matches(k))
    })
}

/// Part of the free budget a distribution left unassigned
pub fn undistributed_remainder(free_budget: Money, allocation: &Allocation) -> Money {
    (free_budget.non_negative() - allocation.total()).non_negative()
}

/// Write an allocation into the categories it names
///
/// Named categories get the new amount and become included; the rest are
/// returned unchanged.
pub fn apply_allocation(categories: &[BudgetCategory], allocation: &Allocation) -> Vec<BudgetCategory> {
    categories
        .iter()
        .map(|category| match allocation.get(&category.id) {
            Some(amount) => BudgetCategory {
                current_allocation: amount,
                included: true,
                ..category.clone()
            },
            None => category.clone(),
        })
        .collect()
}

/// Set one category's allocation to a user-supplied amount
///
/// Negative amounts count as zero. An unknown id changes nothing.
pub fn apply_override(
    categories: &[BudgetCategory],
    category_id: &CategoryId,
    amount: Money,
) -> Vec<BudgetCategory> {
    let amount = amount.non_negative();
    categories
        .iter()
        .map(|category| {
            if &category.id == category_id {
                BudgetCategory {
                    current_allocation: amount,
                    ..category.clone()
                }
            } else {
                category.clone()
            }
        })
        .collect()
}

/// Include or exclude one category, keeping its allocation
pub fn set_included(
    categories: &[BudgetCategory],
    category_id: &CategoryId,
    included: bool,
) -> Vec<BudgetCategory> {
    categories
        .iter()
        .map(|category| {
            if &category.id == category_id {
                BudgetCategory {
                    included,
                    ..category.clone()
                }
            } else {
                category.clone()
            }
        })
        .collect()
}

/// Flip one category between included and excluded, keeping its allocation
pub fn toggle_included(categories: &[BudgetCategory], category_id: &CategoryId) -> Vec<BudgetCategory> {
    match categories.iter().find(|c| &c.id == category_id) {
        Some(category) => set_included(categories, category_id, !category.included),
        None => categories.to_vec(),
    }
}

/// Totals of a budget plan against the free budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationSummary {
    pub free_budget: Money,
    /// Sum of allocations of included categories
    pub total_allocated: Money,
    /// Free budget minus total allocated; negative when over-allocated
    pub remaining: Money,
}

impl AllocationSummary {
    pub fn is_over_allocated(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Compare the included allocations with the free budget
pub fn summarize(free_budget: Money, categories: &[BudgetCategory]) -> AllocationSummary {
    let total_allocated: Money = categories
        .iter()
        .filter(|c| c.included)
        .map(|c| c.current_allocation)
        .sum();

    AllocationSummary {
        free_budget,
        total_allocated,
        remaining: free_budget - total_allocated,
    }
}

/// Whole units per category, floored
fn even_share(amount: Money, count: usize) -> Money {
    let units = amount.floor_units().units();
    let count = i64::try_from(count).unwrap_or(i64::MAX);
    Money::from_units(units / count)
}
