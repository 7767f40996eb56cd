//! Fuzzy-logic fitness planner.
//!
//! [`logic::FuzzyPlanEvaluator`] maps muscle, body-fat and endurance levels
//! onto daily step, calorie and protein targets through three Mamdani
//! systems built on the [`fuzzy`] engine. [`logic::FitnessPlanner`] adds the
//! BMR and a weekly workout template. The `fitplan` binary wraps this in a
//! ratatui form and a `plan` subcommand.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod logic;
pub mod models;
pub mod ui;

pub use error::{FitPlanError, Result};
