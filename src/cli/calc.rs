//! Calculator CLI commands
//!
//! One command per calculator, working on amounts given on the command line.
//! Amounts are parsed permissively: anything unparsable counts as zero.

use clap::Subcommand;
use serde::Serialize;
use tracing::debug;

use super::emit;
use crate::config::Settings;
use crate::display::{format_capacity, format_distribution, format_fee, format_protection};
use crate::engine::{
    apply_allocation, compute_capacity, compute_protected_floor, fee_breakdown,
    undistributed_remainder, Allocation, DistributionStrategy, ProtectionResult,
};
use crate::error::DraagkrachtResult;
use crate::export::OutputFormat;
use crate::models::{
    BudgetCategory, CategoryRole, FixedCostSnapshot, HouseholdComposition, IncomeSnapshot,
    MaritalStatus, Money,
};

/// Calculator subcommands
#[derive(Subcommand)]
pub enum CalcCommands {
    /// Maximum collection fee on a debt
    Fee {
        /// Outstanding principal (e.g., "1250" or "1250.50")
        #[arg(allow_hyphen_values = true)]
        principal: String,
        /// Show the fee per bracket
        #[arg(short, long)]
        breakdown: bool,
    },

    /// Protected income and seizable amount
    Protect {
        /// Monthly income
        #[arg(allow_hyphen_values = true)]
        income: String,
        /// Marital status (alone, cohabiting, married)
        #[arg(short, long, default_value = "alone")]
        status: MaritalStatus,
        /// Number of children (negative counts as zero)
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        children: i64,
    },

    /// Free budget and its daily / buffer / repayment split
    Capacity {
        /// Total recurring monthly income
        #[arg(allow_hyphen_values = true)]
        income: String,
        /// Total active fixed costs
        #[arg(allow_hyphen_values = true)]
        fixed_costs: String,
        /// Total installments of payment arrangements
        #[arg(default_value = "0", allow_hyphen_values = true)]
        arranged: String,
    },

    /// Distribute a free budget over named pots
    Distribute {
        /// Free budget to distribute
        #[arg(allow_hyphen_values = true)]
        free_budget: String,
        /// Pot names
        #[arg(required = true)]
        pots: Vec<String>,
        /// Distribution strategy (defaults to the configured one)
        #[arg(short, long)]
        strategy: Option<DistributionStrategy>,
        /// Pot that gets the priority share, instead of name matching
        #[arg(short, long)]
        priority: Option<String>,
    },
}

#[derive(Serialize)]
struct ProtectionOutput {
    household: HouseholdComposition,
    #[serde(flatten)]
    result: ProtectionResult,
}

#[derive(Serialize)]
struct DistributionOutput {
    free_budget: Money,
    strategy: DistributionStrategy,
    categories: Vec<BudgetCategory>,
    allocation: Allocation,
    undistributed: Money,
}

/// Handle a calculator command
pub fn handle_calc_command(
    settings: &Settings,
    format: OutputFormat,
    cmd: CalcCommands,
) -> DraagkrachtResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        CalcCommands::Fee {
            principal,
            breakdown,
        } => {
            let result = fee_breakdown(Money::parse_lenient(&principal));
            debug!(principal = %result.principal, max_fee = %result.max_fee, "fee command");
            emit(format, "fee", &result, || {
                format_fee(&result, symbol, breakdown)
            })
        }

        CalcCommands::Protect {
            income,
            status,
            children,
        } => {
            let household = HouseholdComposition::with_child_count(status, children);
            let result = compute_protected_floor(Money::parse_lenient(&income), Some(&household));
            let output = ProtectionOutput { household, result };
            emit(format, "protect", &output, || {
                format_protection(&result, &household, symbol)
            })
        }

        CalcCommands::Capacity {
            income,
            fixed_costs,
            arranged,
        } => {
            let income = IncomeSnapshot::new(Money::parse_lenient(&income));
            let costs = FixedCostSnapshot::new(
                Money::parse_lenient(&fixed_costs),
                Money::parse_lenient(&arranged),
            );
            let result = compute_capacity(&income, &costs);
            emit(format, "capacity", &result, || format_capacity(&result, symbol))
        }

        CalcCommands::Distribute {
            free_budget,
            pots,
            strategy,
            priority,
        } => {
            let free_budget = Money::parse_lenient(&free_budget);
            let strategy = strategy.unwrap_or(settings.default_strategy);

            let categories: Vec<BudgetCategory> = pots
                .iter()
                .map(|name| {
                    let is_priority = priority
                        .as_deref()
                        .is_some_and(|p| p.eq_ignore_ascii_case(name));
                    let role = if is_priority {
                        CategoryRole::Priority
                    } else {
                        CategoryRole::Standard
                    };
                    BudgetCategory::with_role(name.as_str(), role)
                })
                .collect();

            let allocation =
                strategy.distribute(free_budget, &categories, &settings.priority_keywords);
            let categories = apply_allocation(&categories, &allocation);
            let undistributed = if allocation.is_empty() {
                Money::zero()
            } else {
                undistributed_remainder(free_budget, &allocation)
            };

            debug!(%strategy, %free_budget, pots = categories.len(), "distribute command");

            let output = DistributionOutput {
                free_budget,
                strategy,
                categories,
                allocation,
                undistributed,
            };
            emit(format, "distribute", &output, || {
                format_distribution(
                    output.free_budget,
                    &output.categories,
                    &output.allocation,
                    symbol,
                )
            })
        }
    }
}
