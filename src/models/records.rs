//! Household records as kept by the external store
//!
//! These mirror the income, monthly cost, debt and pot records the rest of
//! the application persists. The engine never stores them; the snapshot
//! service only sums them for one reference month.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::{BudgetCategory, CategoryRole};
use super::household::HouseholdComposition;
use super::ids::{CategoryId, CostId, DebtId, IncomeId};
use super::money::Money;

/// Kind of income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeType {
    /// Recurring income (salary, benefits)
    #[default]
    #[serde(alias = "fixed")]
    Vast,
    /// One-off or irregular income
    Extra,
}

/// An income record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Income {
    #[serde(default)]
    pub id: IncomeId,

    #[serde(default)]
    pub description: String,

    /// Monthly amount
    #[serde(default)]
    pub amount: Money,

    #[serde(default)]
    pub income_type: IncomeType,

    /// First month the income is received (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    /// Last month the income is received (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl Income {
    /// Create a recurring income without an active window
    pub fn recurring(description: impl Into<String>, amount: Money) -> Self {
        Self {
            id: IncomeId::new(),
            description: description.into(),
            amount,
            income_type: IncomeType::Vast,
            start_date: None,
            end_date: None,
        }
    }

    /// Create a one-off income
    pub fn extra(description: impl Into<String>, amount: Money) -> Self {
        Self {
            income_type: IncomeType::Extra,
            ..Self::recurring(description, amount)
        }
    }

    /// Restrict the income to a window
    pub fn between(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }
}

/// Whether a monthly cost is currently paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostStatus {
    #[default]
    Active,
    Inactive,
}

/// A recurring monthly obligation (rent, insurance, energy)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyCost {
    #[serde(default)]
    pub id: CostId,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub amount: Money,

    #[serde(default)]
    pub status: CostStatus,
}

impl MonthlyCost {
    pub fn active(name: impl Into<String>, amount: Money) -> Self {
        Self {
            id: CostId::new(),
            name: name.into(),
            amount,
            status: CostStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == CostStatus::Active
    }
}

/// Status of a debt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtStatus {
    /// Known but not being collected
    #[default]
    #[serde(rename = "niet_actief")]
    Inactive,
    /// Being collected, no arrangement yet
    #[serde(rename = "actief")]
    Active,
    /// Active payment arrangement with monthly installments
    #[serde(rename = "betalingsregeling")]
    PaymentArrangement,
    /// Fully repaid
    #[serde(rename = "afbetaald")]
    PaidOff,
}

impl DebtStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inactive => "niet_actief",
            Self::Active => "actief",
            Self::PaymentArrangement => "betalingsregeling",
            Self::PaidOff => "afbetaald",
        }
    }
}

/// A single debt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    #[serde(default)]
    pub id: DebtId,

    #[serde(default)]
    pub creditor: String,

    /// Original amount owed
    #[serde(default)]
    pub amount: Money,

    /// Amount repaid so far, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_paid: Option<Money>,

    /// Installment under a payment arrangement
    #[serde(default)]
    pub monthly_payment: Money,

    #[serde(default)]
    pub status: DebtStatus,
}

impl Debt {
    pub fn new(creditor: impl Into<String>, amount: Money) -> Self {
        Self {
            id: DebtId::new(),
            creditor: creditor.into(),
            amount,
            amount_paid: None,
            monthly_payment: Money::zero(),
            status: DebtStatus::Inactive,
        }
    }

    /// Put the debt under a payment arrangement
    pub fn with_arrangement(mut self, monthly_payment: Money) -> Self {
        self.monthly_payment = monthly_payment;
        self.status = DebtStatus::PaymentArrangement;
        self
    }

    pub fn with_amount_paid(mut self, amount_paid: Money) -> Self {
        self.amount_paid = Some(amount_paid);
        self
    }

    pub fn has_active_arrangement(&self) -> bool {
        self.status == DebtStatus::PaymentArrangement
    }

    /// Outstanding principal: amount minus repayments, never negative
    pub fn outstanding_principal(&self) -> Money {
        match self.amount_paid {
            Some(paid) => (self.amount - paid).non_negative(),
            None => self.amount.non_negative(),
        }
    }
}

/// Kind of pot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PotType {
    /// Spending pot, takes part in budget distribution
    #[default]
    Expense,
    /// Savings pot
    Savings,
}

/// A named spending or savings pot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pot {
    #[serde(default)]
    pub id: CategoryId,

    pub name: String,

    /// Monthly budget assigned to the pot
    #[serde(default)]
    pub budget: Money,

    #[serde(default)]
    pub pot_type: PotType,

    /// Explicit role; pots without one are classified by name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<CategoryRole>,

    #[serde(default = "default_included")]
    pub included: bool,
}

fn default_included() -> bool {
    true
}

impl Pot {
    pub fn expense(name: impl Into<String>, budget: Money) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            budget,
            pot_type: PotType::Expense,
            role: None,
            included: true,
        }
    }

    pub fn savings(name: impl Into<String>, budget: Money) -> Self {
        Self {
            pot_type: PotType::Savings,
            ..Self::expense(name, budget)
        }
    }

    pub fn is_expense(&self) -> bool {
        self.pot_type == PotType::Expense
    }

    /// The budget category view of this pot
    pub fn to_category(&self) -> BudgetCategory {
        BudgetCategory {
            id: self.id.clone(),
            name: self.name.clone(),
            current_allocation: self.budget,
            included: self.included,
            role: self.role.unwrap_or_default(),
        }
    }
}

/// Everything the planner needs about one household
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HouseholdSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub household: Option<HouseholdComposition>,

    #[serde(default)]
    pub incomes: Vec<Income>,

    #[serde(default)]
    pub monthly_costs: Vec<MonthlyCost>,

    #[serde(default)]
    pub debts: Vec<Debt>,

    #[serde(default)]
    pub pots: Vec<Pot>,
}
