use super::Profile;
use crate::fuzzy::{Label, RuleFiring};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Output bands shared by the steps, calorie and protein variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    Low,
    LowMedium,
    Medium,
    MediumHigh,
    High,
}

impl Band {
    pub const ALL: [Band; 5] = [
        Band::Low,
        Band::LowMedium,
        Band::Medium,
        Band::MediumHigh,
        Band::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Band::Low => "low",
            Band::LowMedium => "low-medium",
            Band::Medium => "medium",
            Band::MediumHigh => "medium-high",
            Band::High => "high",
        }
    }
}

impl Label for Band {
    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn name(&self) -> &'static str {
        self.as_str()
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Crisp daily targets, truncated from the defuzzified values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanTargets {
    pub daily_steps: u32,
    pub calorie_intake: u32,
    pub protein_intake: u32,
}

/// How one inference system reached its output.
#[derive(Debug, Clone, Serialize)]
pub struct SystemTrace {
    pub output: &'static str,
    pub value: f64,
    pub defaulted: bool,
    pub firings: Vec<RuleFiring>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PlanTrace {
    pub systems: Vec<SystemTrace>,
}

impl PlanTrace {
    pub fn any_defaulted(&self) -> bool {
        self.systems.iter().any(|s| s.defaulted)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FitnessPlan {
    pub profile: Profile,
    pub targets: PlanTargets,
    pub bmr: f64,
    pub workout_plan: String,
    pub generated_at: DateTime<Utc>,
    #[serde(skip)]
    pub trace: PlanTrace,
}
