//! Calculator display formatting
//!
//! Formats the result of a single calculator as terminal tables.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::engine::{
    undistributed_remainder, Allocation, CapacityResult, FeeBreakdown, ProtectionResult,
};
use crate::models::{BudgetCategory, HouseholdComposition, Money};

#[derive(Tabled)]
struct LabelRow {
    #[tabled(rename = "")]
    label: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct BracketRow {
    #[tabled(rename = "Bracket")]
    bracket: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Portion")]
    portion: String,
    #[tabled(rename = "Fee")]
    fee: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Pot")]
    name: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Render label/amount pairs as a two-column table
pub(crate) fn label_table(rows: Vec<(&str, Money)>, symbol: &str) -> String {
    let rows: Vec<LabelRow> = rows
        .into_iter()
        .map(|(label, amount)| LabelRow {
            label: label.to_string(),
            amount: amount.format_with_symbol(symbol),
        })
        .collect();
    Table::new(rows).with(Style::psql()).to_string()
}

/// Format a basis-point rate as a percentage
pub fn format_rate(rate_bp: i64) -> String {
    if rate_bp % 100 == 0 {
        format!("{}%", rate_bp / 100)
    } else {
        format!("{}.{}%", rate_bp / 100, (rate_bp % 100) / 10)
    }
}

/// Format a collection fee cap, optionally with the bracket breakdown
pub fn format_fee(breakdown: &FeeBreakdown, symbol: &str, with_brackets: bool) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Collection fee cap for {}\n\n",
        breakdown.principal.format_with_symbol(symbol)
    ));

    if with_brackets {
        let rows: Vec<BracketRow> = breakdown
            .brackets
            .iter()
            .map(|b| BracketRow {
                bracket: match b.to {
                    Some(to) => format!(
                        "{} - {}",
                        b.from.format_with_symbol(symbol),
                        to.format_with_symbol(symbol)
                    ),
                    None => format!("above {}", b.from.format_with_symbol(symbol)),
                },
                rate: format_rate(b.rate_bp),
                portion: b.portion.format_with_symbol(symbol),
                fee: b.fee.format_with_symbol(symbol),
            })
            .collect();
        output.push_str(&Table::new(rows).with(Style::psql()).to_string());
        output.push_str("\n\n");
    }

    output.push_str(&format!(
        "Maximum fee: {}",
        breakdown.max_fee.format_with_symbol(symbol)
    ));
    if breakdown.minimum_applied {
        output.push_str(" (minimum fee)");
    }
    output.push('\n');
    output
}

/// Format a protected income result
pub fn format_protection(
    result: &ProtectionResult,
    household: &HouseholdComposition,
    symbol: &str,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("Protected income ({})\n\n", household));
    output.push_str(&label_table(
        vec![
            ("Household norm", result.norm),
            ("Protected income", result.protected_floor),
            ("Seizable", result.seizable_amount),
        ],
        symbol,
    ));
    output.push_str(&format!("\n\nStatus: {}\n", result.status));
    output
}

/// Format a capacity split
pub fn format_capacity(result: &CapacityResult, symbol: &str) -> String {
    let mut output = String::new();

    if result.is_shortfall() {
        output.push_str(&format!(
            "Income does not cover fixed obligations: free budget {}\n",
            result.free_budget.format_with_symbol(symbol)
        ));
        return output;
    }

    output.push_str(&label_table(
        vec![
            ("Free budget", result.free_budget),
            ("Daily needs (60%)", result.daily_needs_share),
            ("Buffer (25%)", result.buffer_share),
            ("Repayment capacity (15%)", result.repayment_capacity),
        ],
        symbol,
    ));
    output.push('\n');
    output
}

/// Format pots with their allocation
pub fn format_categories(categories: &[BudgetCategory], symbol: &str) -> String {
    if categories.is_empty() {
        return "No pots found.\n".to_string();
    }

    let rows: Vec<CategoryRow> = categories
        .iter()
        .map(|c| CategoryRow {
            name: c.name.clone(),
            role: if c.is_priority() { "priority" } else { "" }.to_string(),
            amount: c.current_allocation.format_with_symbol(symbol),
            status: if c.included { "" } else { "excluded" }.to_string(),
        })
        .collect();
    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push('\n');
    output
}

/// Format the result of a distribution run
pub fn format_distribution(
    free_budget: Money,
    categories: &[BudgetCategory],
    allocation: &Allocation,
    symbol: &str,
) -> String {
    if allocation.is_empty() {
        return format!(
            "Nothing to distribute (free budget {}, {} pots)\n",
            free_budget.format_with_symbol(symbol),
            categories.len()
        );
    }

    let mut output = format_categories(categories, symbol);
    let remainder = undistributed_remainder(free_budget, allocation);
    if remainder.is_positive() {
        output.push_str(&format!(
            "Undistributed: {}\n",
            remainder.format_with_symbol(symbol)
        ));
    }
    output
}
