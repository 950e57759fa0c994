//! Financial plan display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::calc::{format_capacity, format_categories, label_table};
use crate::services::FinancialPlan;

#[derive(Tabled)]
struct FeeCapRow {
    #[tabled(rename = "Creditor")]
    creditor: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Outstanding")]
    principal: String,
    #[tabled(rename = "Max. fee")]
    max_fee: String,
}

/// Format a complete plan
pub fn format_plan(plan: &FinancialPlan, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Financial plan {}\n", plan.month));
    output.push_str(&format!("{}\n\n", "=".repeat(40)));

    output.push_str("Income and obligations\n");
    output.push_str(&label_table(
        vec![
            ("Recurring income", plan.income.monthly_income_total),
            ("Fixed costs", plan.costs.total_fixed_costs),
            ("Payment arrangements", plan.costs.total_arranged_debt_payments),
        ],
        symbol,
    ));
    output.push_str("\n\n");

    output.push_str(&format!("Protected income ({})\n", plan.household));
    output.push_str(&label_table(
        vec![
            ("Household norm", plan.protection.norm),
            ("Protected income", plan.protection.protected_floor),
            ("Seizable", plan.protection.seizable_amount),
        ],
        symbol,
    ));
    output.push_str(&format!("\nStatus: {}\n\n", plan.protection.status));

    output.push_str("Capacity\n");
    output.push_str(&format_capacity(&plan.capacity, symbol));
    output.push('\n');

    output.push_str(&format!("Pots ({} distribution)\n", plan.strategy));
    output.push_str(&format_categories(&plan.categories, symbol));
    if plan.undistributed.is_positive() {
        output.push_str(&format!(
            "Undistributed: {}\n",
            plan.undistributed.format_with_symbol(symbol)
        ));
    }
    if plan.summary.is_over_allocated() {
        output.push_str(&format!(
            "Warning: pots exceed the free budget by {}\n",
            plan.summary.remaining.abs().format_with_symbol(symbol)
        ));
    } else {
        output.push_str(&format!(
            "Remaining: {}\n",
            plan.summary.remaining.format_with_symbol(symbol)
        ));
    }

    if !plan.fee_caps.is_empty() {
        output.push_str("\nCollection fee caps\n");
        let rows: Vec<FeeCapRow> = plan
            .fee_caps
            .iter()
            .map(|f| FeeCapRow {
                creditor: f.creditor.clone(),
                status: f.status.as_str().to_string(),
                principal: f.principal.format_with_symbol(symbol),
                max_fee: f.max_fee.format_with_symbol(symbol),
            })
            .collect();
        output.push_str(&Table::new(rows).with(Style::psql()).to_string());
        output.push('\n');
    }

    output
}
