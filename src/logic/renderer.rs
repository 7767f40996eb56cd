use crate::models::{FitnessPlan, PlanTrace};
use std::fmt::Write;

pub fn render_plan(plan: &FitnessPlan) -> String {
    let p = &plan.profile;
    let t = &plan.targets;

    format!(
        "Fitness Plan Details:\n\
         Weight: {:?} kg | Age: {} years\n\
         Goal: {} ({})\n\
         \n\
         Daily Steps Goal: {} steps\n\
         Daily Calories: {} calories\n\
         Daily Protein: {} grams\n\
         Base Metabolic Rate (BMR): {} calories\n\
         \n\
         Weekly Workout Plan:\n\
         {}\n",
        p.weight_kg,
        p.age_years,
        p.goal,
        p.workout_type,
        t.daily_steps,
        t.calorie_intake,
        t.protein_intake,
        plan.bmr as i64,
        plan.workout_plan,
    )
}

/// Rule-by-rule firing strengths for each system.
pub fn render_explanation(trace: &PlanTrace) -> String {
    let mut out = String::new();

    for system in &trace.systems {
        let _ = writeln!(out, "{} = {:.1}", system.output, system.value);
        for firing in &system.firings {
            let _ = writeln!(out, "  {:.2}  {}", firing.strength, firing.rule);
        }
        if system.defaulted {
            let _ = writeln!(out, "  (no rule fired, default used)");
        }
    }

    out
}
