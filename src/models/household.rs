//! Household composition
//!
//! Determines which protected income norm applies to a debtor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marital status as far as the income protection norm is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    /// Living alone (default)
    #[default]
    #[serde(alias = "alleenstaand")]
    Alone,
    /// Living together without being married
    #[serde(alias = "samenwonend")]
    Cohabiting,
    /// Married or registered partnership
    #[serde(alias = "getrouwd")]
    Married,
}

impl MaritalStatus {
    /// Whether the couple norm applies
    pub fn is_couple(&self) -> bool {
        matches!(self, Self::Cohabiting | Self::Married)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alone => "alone",
            Self::Cohabiting => "cohabiting",
            Self::Married => "married",
        }
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaritalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "alone" | "alleenstaand" => Ok(Self::Alone),
            "cohabiting" | "samenwonend" => Ok(Self::Cohabiting),
            "married" | "getrouwd" => Ok(Self::Married),
            other => Err(format!("Unknown marital status: {}", other)),
        }
    }
}

/// Household composition of the debtor
///
/// A missing composition is equivalent to `HouseholdComposition::default()`:
/// alone, no children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HouseholdComposition {
    #[serde(default)]
    pub marital_status: MaritalStatus,

    #[serde(default)]
    pub number_of_children: u32,
}

impl HouseholdComposition {
    pub fn new(marital_status: MaritalStatus, number_of_children: u32) -> Self {
        Self {
            marital_status,
            number_of_children,
        }
    }

    /// Build a composition from a possibly negative child count
    ///
    /// Negative counts are clamped to zero.
    pub fn with_child_count(marital_status: MaritalStatus, children: i64) -> Self {
        let number_of_children = u32::try_from(children.max(0)).unwrap_or(u32::MAX);
        Self::new(marital_status, number_of_children)
    }
}

impl fmt::Display for HouseholdComposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.number_of_children {
            0 => write!(f, "{}, no children", self.marital_status),
            1 => write!(f, "{}, 1 child", self.marital_status),
            n => write!(f, "{}, {} children", self.marital_status, n),
        }
    }
}
