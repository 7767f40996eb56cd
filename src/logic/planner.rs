use super::calculations::compute_bmr;
use super::evaluator::FuzzyPlanEvaluator;
use super::workout::select_plan;
use crate::error::Result;
use crate::models::{FitnessPlan, Profile};

pub struct FitnessPlanner {
    evaluator: FuzzyPlanEvaluator,
}

impl FitnessPlanner {
    pub fn new() -> Self {
        Self {
            evaluator: FuzzyPlanEvaluator::new(),
        }
    }

    pub fn generate(&self, profile: &Profile) -> Result<FitnessPlan> {
        let (targets, trace) = self.evaluator.evaluate_with_trace(
            profile.muscle,
            profile.body_fat,
            profile.endurance,
        )?;

        let bmr = compute_bmr(profile.weight_kg, profile.age_years);
        let workout_plan = select_plan(profile.goal, profile.workout_type).to_string();

        tracing::info!(
            steps = targets.daily_steps,
            calories = targets.calorie_intake,
            protein = targets.protein_intake,
            bmr,
            goal = %profile.goal,
            "plan generated"
        );

        Ok(FitnessPlan {
            profile: profile.clone(),
            targets,
            bmr,
            workout_plan,
            generated_at: chrono::Utc::now(),
            trace,
        })
    }
}

impl Default for FitnessPlanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FatBracket, Goal, Level, WorkoutType};

    fn profile() -> Profile {
        Profile {
            weight_kg: 70.0,
            age_years: 30,
            body_fat: FatBracket::VeryLow,
            muscle: Level::VeryHigh,
            endurance: Level::VeryHigh,
            goal: Goal::BuildMuscle,
            workout_type: WorkoutType::Bodyweight,
        }
    }

    #[test]
    fn generate_combines_all_parts() {
        let plan = FitnessPlanner::new().generate(&profile()).unwrap();

        assert_eq!(plan.bmr, 1617.5);
        assert_eq!(plan.targets.daily_steps, 14333);
        assert_eq!(plan.targets.protein_intake, 246);
        assert_eq!(
            plan.workout_plan,
            select_plan(Goal::BuildMuscle, WorkoutType::Bodyweight)
        );
        assert_eq!(plan.trace.systems.len(), 3);
        assert!(!plan.trace.any_defaulted());
    }

    #[test]
    fn plan_serializes_without_trace() {
        let plan = FitnessPlanner::new().generate(&profile()).unwrap();
        let json = serde_json::to_value(&plan).unwrap();

        assert_eq!(json["targets"]["daily_steps"], 14333);
        assert_eq!(json["profile"]["goal"], "BuildMuscle");
        assert!(json.get("trace").is_none());
    }

    #[test]
    fn targets_match_label_evaluation() {
        let profile = Profile {
            body_fat: FatBracket::Low,
            muscle: Level::High,
            endurance: Level::Low,
            ..profile()
        };
        let plan = FitnessPlanner::new().generate(&profile).unwrap();
        let by_label = FuzzyPlanEvaluator::new()
            .evaluate_labels(
                profile.muscle.as_str(),
                profile.body_fat.as_str(),
                profile.endurance.as_str(),
            )
            .unwrap();

        assert_eq!(plan.targets, by_label);
    }
}
