pub mod calculations;
pub mod evaluator;
pub mod planner;
pub mod renderer;
pub mod workout;

pub use calculations::compute_bmr;
pub use evaluator::FuzzyPlanEvaluator;
pub use planner::FitnessPlanner;
pub use renderer::{render_explanation, render_plan};
pub use workout::select_plan;
