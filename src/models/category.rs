//! Budget category ("pot") model
//!
//! A budget category is a spending bucket that receives part of the free
//! budget. It can be excluded from a distribution run without losing its
//! last allocation, and it carries an explicit role so the priority
//! category does not have to be guessed from its name.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;

/// Maximum length of a category name
pub const MAX_NAME_LEN: usize = 50;

/// Role of a category in heuristic distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryRole {
    /// Essential spending (groceries) that is served first
    Priority,
    /// Everything else
    #[default]
    Standard,
}

/// A budget category within a distribution run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetCategory {
    /// Unique identifier
    #[serde(default)]
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// Amount currently allocated to this category
    #[serde(default)]
    pub current_allocation: Money,

    /// Whether this category takes part in the budget
    #[serde(default = "default_included")]
    pub included: bool,

    /// Role in heuristic distribution
    #[serde(default)]
    pub role: CategoryRole,
}

fn default_included() -> bool {
    true
}

impl BudgetCategory {
    /// Create a new, included category without allocation
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            current_allocation: Money::zero(),
            included: true,
            role: CategoryRole::Standard,
        }
    }

    /// Create a new category with an explicit role
    pub fn with_role(name: impl Into<String>, role: CategoryRole) -> Self {
        let mut category = Self::new(name);
        category.role = role;
        category
    }

    /// Set the current allocation
    pub fn with_allocation(mut self, amount: Money) -> Self {
        self.current_allocation = amount;
        self
    }

    pub fn is_priority(&self) -> bool {
        self.role == CategoryRole::Priority
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        let len = self.name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(len));
        }

        Ok(())
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(
                    f,
                    "Category name too long ({} chars, max {})",
                    len, MAX_NAME_LEN
                )
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
