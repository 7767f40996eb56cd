use crate::error::{FitPlanError, Result};
use crate::fuzzy::Label;
use serde::{Deserialize, Serialize};

/// Lowercase with spaces, dashes and underscores removed.
fn compact(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Five-step self-assessment used for muscle and endurance, and as the
/// label set of the body-fat fuzzy variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::VeryLow,
        Level::Low,
        Level::Medium,
        Level::High,
        Level::VeryHigh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::VeryLow => "Very Low",
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
            Level::VeryHigh => "Very High",
        }
    }

    /// Crisp score fed to the muscle and endurance variables.
    pub fn score(&self) -> f64 {
        match self {
            Level::VeryLow => 2.0,
            Level::Low => 4.0,
            Level::Medium => 6.0,
            Level::High => 8.0,
            Level::VeryHigh => 10.0,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match compact(s).as_str() {
            "verylow" => Some(Level::VeryLow),
            "low" => Some(Level::Low),
            "medium" => Some(Level::Medium),
            "high" => Some(Level::High),
            "veryhigh" => Some(Level::VeryHigh),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s)
            .ok_or_else(|| FitPlanError::InvalidInputKind(format!("unknown level '{}'", s)))
    }
}

impl Label for Level {
    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn name(&self) -> &'static str {
        self.as_str()
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FatBracket {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl FatBracket {
    pub const ALL: [FatBracket; 5] = [
        FatBracket::VeryLow,
        FatBracket::Low,
        FatBracket::Medium,
        FatBracket::High,
        FatBracket::VeryHigh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FatBracket::VeryLow => "Very Low (Below 10%)",
            FatBracket::Low => "Low (10-15%)",
            FatBracket::Medium => "Medium (15-20%)",
            FatBracket::High => "High (20-25%)",
            FatBracket::VeryHigh => "Very High (Above 25%)",
        }
    }

    /// Representative body-fat percentage for the bracket.
    pub fn percent(&self) -> f64 {
        match self {
            FatBracket::VeryLow => 5.0,
            FatBracket::Low => 12.5,
            FatBracket::Medium => 20.0,
            FatBracket::High => 25.0,
            FatBracket::VeryHigh => 35.0,
        }
    }

    /// Accepts the full bracket label or just its level ("very low").
    pub fn from_str(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        if let Some(bracket) = Self::ALL
            .iter()
            .find(|b| b.as_str().to_lowercase() == wanted)
        {
            return Some(*bracket);
        }

        Level::from_str(s).map(|level| match level {
            Level::VeryLow => FatBracket::VeryLow,
            Level::Low => FatBracket::Low,
            Level::Medium => FatBracket::Medium,
            Level::High => FatBracket::High,
            Level::VeryHigh => FatBracket::VeryHigh,
        })
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| {
            FitPlanError::InvalidInputKind(format!("unknown body fat bracket '{}'", s))
        })
    }
}

impl std::fmt::Display for FatBracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    BuildMuscle,
    LoseFat,
    Maintain,
    ImproveEndurance,
}

impl Goal {
    pub const ALL: [Goal; 4] = [
        Goal::BuildMuscle,
        Goal::LoseFat,
        Goal::Maintain,
        Goal::ImproveEndurance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::BuildMuscle => "Build Muscle",
            Goal::LoseFat => "Lose Fat",
            Goal::Maintain => "Maintain",
            Goal::ImproveEndurance => "Improve Endurance",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match compact(s).as_str() {
            "buildmuscle" | "muscle" => Some(Goal::BuildMuscle),
            "losefat" | "fatloss" => Some(Goal::LoseFat),
            "maintain" | "maintenance" => Some(Goal::Maintain),
            "improveendurance" | "endurance" => Some(Goal::ImproveEndurance),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s)
            .ok_or_else(|| FitPlanError::InvalidInputKind(format!("unknown goal '{}'", s)))
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkoutType {
    Gym,
    Bodyweight,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 2] = [WorkoutType::Gym, WorkoutType::Bodyweight];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Gym => "Weight Training (Gym)",
            WorkoutType::Bodyweight => "BodyWeight Training (Calisthenics)",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match compact(s).as_str() {
            "weighttraining(gym)" | "weighttraining" | "gym" => Some(WorkoutType::Gym),
            "bodyweighttraining(calisthenics)" | "bodyweighttraining" | "bodyweight"
            | "calisthenics" => Some(WorkoutType::Bodyweight),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| {
            FitPlanError::InvalidInputKind(format!("unknown workout type '{}'", s))
        })
    }
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_from_str_valid() {
        assert_eq!(Level::from_str("Very Low"), Some(Level::VeryLow));
        assert_eq!(Level::from_str("verylow"), Some(Level::VeryLow));
        assert_eq!(Level::from_str("very-high"), Some(Level::VeryHigh));
        assert_eq!(Level::from_str("MEDIUM"), Some(Level::Medium));
        assert_eq!(Level::from_str(" High "), Some(Level::High));
    }

    #[test]
    fn level_from_str_invalid() {
        assert_eq!(Level::from_str("Extreme"), None);
        assert_eq!(Level::from_str(""), None);
        assert!(matches!(
            Level::parse("Extreme"),
            Err(FitPlanError::InvalidInputKind(_))
        ));
    }

    #[test]
    fn level_scores_ladder() {
        let scores: Vec<f64> = Level::ALL.iter().map(|l| l.score()).collect();
        assert_eq!(scores, vec![2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn level_display_round_trip() {
        for level in Level::ALL {
            assert_eq!(Level::from_str(&level.to_string()), Some(level));
        }
    }

    #[test]
    fn fat_bracket_labels_and_percentages() {
        assert_eq!(
            FatBracket::from_str("Very Low (Below 10%)"),
            Some(FatBracket::VeryLow)
        );
        assert_eq!(FatBracket::from_str("low (10-15%)"), Some(FatBracket::Low));
        assert_eq!(FatBracket::from_str("very high"), Some(FatBracket::VeryHigh));
        assert_eq!(FatBracket::from_str("Extreme"), None);

        let percents: Vec<f64> = FatBracket::ALL.iter().map(|b| b.percent()).collect();
        assert_eq!(percents, vec![5.0, 12.5, 20.0, 25.0, 35.0]);
    }

    #[test]
    fn goal_and_workout_type_from_str() {
        assert_eq!(Goal::from_str("Build Muscle"), Some(Goal::BuildMuscle));
        assert_eq!(Goal::from_str("lose-fat"), Some(Goal::LoseFat));
        assert_eq!(
            Goal::from_str("Improve Endurance"),
            Some(Goal::ImproveEndurance)
        );
        assert_eq!(Goal::from_str("bulk"), None);

        assert_eq!(
            WorkoutType::from_str("Weight Training (Gym)"),
            Some(WorkoutType::Gym)
        );
        assert_eq!(
            WorkoutType::from_str("BodyWeight Training (Calisthenics)"),
            Some(WorkoutType::Bodyweight)
        );
        assert_eq!(WorkoutType::from_str("gym"), Some(WorkoutType::Gym));
        assert_eq!(WorkoutType::from_str("swimming"), None);
    }
}
