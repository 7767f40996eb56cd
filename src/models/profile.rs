use super::{FatBracket, Goal, Level, WorkoutType};
use crate::error::{FitPlanError, Result};
use serde::{Deserialize, Serialize};

const INVALID_NUMBERS: &str = "Please enter valid weight and age!";
const MISSING_FIELDS: &str = "Please fill all fields!";

/// Validated planner inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub weight_kg: f64,
    pub age_years: u32,
    pub body_fat: FatBracket,
    pub muscle: Level,
    pub endurance: Level,
    pub goal: Goal,
    pub workout_type: WorkoutType,
}

/// Raw form state before validation. Numbers stay as typed text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub weight: String,
    pub age: String,
    pub body_fat: Option<FatBracket>,
    pub muscle: Option<Level>,
    pub endurance: Option<Level>,
    pub goal: Option<Goal>,
    pub workout_type: Option<WorkoutType>,
}

impl ProfileForm {
    /// Numbers are checked before the selections.
    pub fn collect(&self) -> Result<Profile> {
        let weight_kg = self
            .weight
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite() && *w > 0.0);
        let age_years = self.age.trim().parse::<u32>().ok().filter(|a| *a > 0);

        let (Some(weight_kg), Some(age_years)) = (weight_kg, age_years) else {
            return Err(FitPlanError::Parse(INVALID_NUMBERS.to_string()));
        };

        match (
            self.body_fat,
            self.muscle,
            self.endurance,
            self.goal,
            self.workout_type,
        ) {
            (Some(body_fat), Some(muscle), Some(endurance), Some(goal), Some(workout_type)) => {
                Ok(Profile {
                    weight_kg,
                    age_years,
                    body_fat,
                    muscle,
                    endurance,
                    goal,
                    workout_type,
                })
            }
            _ => Err(FitPlanError::Parse(MISSING_FIELDS.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> ProfileForm {
        ProfileForm {
            weight: "70".into(),
            age: "30".into(),
            body_fat: Some(FatBracket::Medium),
            muscle: Some(Level::High),
            endurance: Some(Level::Low),
            goal: Some(Goal::BuildMuscle),
            workout_type: Some(WorkoutType::Gym),
        }
    }

    #[test]
    fn collect_complete_form() {
        let profile = complete_form().collect().unwrap();
        assert_eq!(profile.weight_kg, 70.0);
        assert_eq!(profile.age_years, 30);
        assert_eq!(profile.muscle, Level::High);
        assert_eq!(profile.workout_type, WorkoutType::Gym);
    }

    #[test]
    fn collect_trims_numbers() {
        let form = ProfileForm {
            weight: " 82.5 ".into(),
            age: "41\n".into(),
            ..complete_form()
        };
        let profile = form.collect().unwrap();
        assert_eq!(profile.weight_kg, 82.5);
        assert_eq!(profile.age_years, 41);
    }

    #[test]
    fn collect_rejects_bad_numbers() {
        for (weight, age) in [("abc", "30"), ("70", "thirty"), ("70", "30.5"), ("-5", "30"), ("70", "0")] {
            let form = ProfileForm {
                weight: weight.into(),
                age: age.into(),
                ..complete_form()
            };
            match form.collect() {
                Err(FitPlanError::Parse(msg)) => assert_eq!(msg, INVALID_NUMBERS),
                other => panic!("expected parse error for {}/{}, got {:?}", weight, age, other),
            }
        }
    }

    #[test]
    fn collect_rejects_missing_selection() {
        let form = ProfileForm {
            goal: None,
            ..complete_form()
        };
        match form.collect() {
            Err(FitPlanError::Parse(msg)) => assert_eq!(msg, MISSING_FIELDS),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn numbers_are_checked_before_selections() {
        let form = ProfileForm {
            weight: String::new(),
            ..ProfileForm::default()
        };
        assert!(matches!(form.collect(), Err(FitPlanError::Parse(msg)) if msg == INVALID_NUMBERS));
    }
}
