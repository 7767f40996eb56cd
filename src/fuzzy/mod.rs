//! Small Mamdani-style fuzzy inference engine.
//!
//! Variables live on integer-resolution universes and carry triangular
//! membership functions keyed by an enumerated label type. Rules combine
//! `variable is label` clauses with min (AND) / max (OR), implication is
//! min, aggregation is max, and outputs are defuzzified by centroid.

pub mod membership;
pub mod rule;
pub mod system;
pub mod variable;

pub use membership::{uniform_partition, Triangle};
pub use rule::{Antecedent, Rule};
pub use system::{Evaluation, InferenceSystem, Output, RuleFiring};
pub use variable::{FuzzyVariable, Label, Universe, VariableKey};
