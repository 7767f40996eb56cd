use crate::models::{Goal, WorkoutType};

const GYM_MUSCLE: &str = "\n\
- Monday: Chest and Triceps
- Tuesday: Back and Biceps
- Wednesday: Legs and Core
- Thursday: Rest/Active Recovery
- Friday: Shoulders and Arms
- Saturday: Full Body Compound Movements
- Sunday: Rest
";

const CALISTHENICS_MUSCLE: &str = "\n\
- Monday: Push (Chest, Triceps)
- Tuesday: Pull (Back, Biceps)
- Wednesday: Legs and Core
- Thursday: Rest/Active Recovery
- Friday: Full Body Calisthenics
- Saturday: HIIT Bodyweight Workout
- Sunday: Rest
";

const FAT_LOSS: &str = "\n\
- Monday: High-Intensity Interval Training
- Tuesday: Full Body Resistance
- Wednesday: Cardio and Core
- Thursday: Rest/Active Recovery
- Friday: Circuit Training
- Saturday: Long Duration Cardio
- Sunday: Rest and Recovery
";

const MAINTENANCE: &str = "\n\
- Monday: Full Body Workout
- Tuesday: Cardio and Mobility
- Wednesday: Strength Training
- Thursday: Rest/Active Recovery
- Friday: Mixed Intensity Workout
- Saturday: Light Activity
- Sunday: Rest
";

const ENDURANCE: &str = "\n\
- Monday: Long Steady State Cardio
- Tuesday: Interval Training
- Wednesday: Cross-Training
- Thursday: Rest/Active Recovery
- Friday: Hill or Resistance Cardio
- Saturday: Long Endurance Session
- Sunday: Rest and Recovery
";

/// Weekly schedule for a goal. Only muscle building distinguishes gym
/// from bodyweight training. Each schedule opens with a blank line.
pub fn select_plan(goal: Goal, workout_type: WorkoutType) -> &'static str {
    match (goal, workout_type) {
        (Goal::BuildMuscle, WorkoutType::Gym) => GYM_MUSCLE,
        (Goal::BuildMuscle, WorkoutType::Bodyweight) => CALISTHENICS_MUSCLE,
        (Goal::LoseFat, _) => FAT_LOSS,
        (Goal::Maintain, _) => MAINTENANCE,
        (Goal::ImproveEndurance, _) => ENDURANCE,
    }
}
