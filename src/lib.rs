//! Draagkracht - financial capacity and protection engine
//!
//! Computes, for a household in debt counselling, how much may legally be
//! collected and how much is left to live on:
//!
//! - the maximum collection fee on an outstanding debt
//! - the protected income floor and the seizable part of an income
//! - the free budget after fixed obligations, split into daily needs,
//!   buffer and repayment capacity
//! - a distribution of the free budget over budget pots
//!
//! # Architecture
//!
//! - `engine`: the pure calculators (no I/O)
//! - `models`: money, household records and snapshots
//! - `services`: snapshot derivation and the planner
//! - `storage`: snapshot files (JSON or YAML)
//! - `config`: configuration and path management
//! - `display` / `export`: table, JSON and YAML output
//! - `cli`: command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use draagkracht::engine::compute_max_fee;
//! use draagkracht::models::Money;
//!
//! assert_eq!(compute_max_fee(Money::from_units(2_500)), Money::from_units(375));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{DraagkrachtError, DraagkrachtResult};
