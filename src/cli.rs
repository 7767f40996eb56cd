use crate::config::OutputFormat;
use crate::error::Result;
use crate::models::{FatBracket, Goal, Level, ProfileForm, WorkoutType};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fitplan",
    version,
    about = "Fuzzy-logic fitness planner TUI"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a plan without the TUI
    Plan(PlanArgs),
    /// Re-run interactive setup
    Init,
    /// Validate config and print the resolved defaults
    Check,
}

/// Profile fields. Anything omitted falls back to the config defaults.
#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Body weight in kilograms
    #[arg(long)]
    pub weight: Option<String>,

    /// Age in years
    #[arg(long)]
    pub age: Option<String>,

    /// Body fat bracket, e.g. "Medium (15-20%)" or "medium"
    #[arg(long)]
    pub fat: Option<String>,

    /// Muscle level: very-low, low, medium, high, very-high
    #[arg(long)]
    pub muscle: Option<String>,

    /// Endurance level: very-low, low, medium, high, very-high
    #[arg(long)]
    pub endurance: Option<String>,

    /// build-muscle, lose-fat, maintain or improve-endurance
    #[arg(long)]
    pub goal: Option<String>,

    /// gym or bodyweight
    #[arg(long)]
    pub workout: Option<String>,

    /// Output format (overrides config)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Include rule activations
    #[arg(long)]
    pub explain: bool,
}

impl PlanArgs {
    /// Overlays the given flags onto `form`. Labels are parsed here so a typo
    /// reports the offending value instead of a missing field.
    pub fn apply(&self, mut form: ProfileForm) -> Result<ProfileForm> {
        if let Some(ref weight) = self.weight {
            form.weight = weight.clone();
        }
        if let Some(ref age) = self.age {
            form.age = age.clone();
        }
        if let Some(ref fat) = self.fat {
            form.body_fat = Some(FatBracket::parse(fat)?);
        }
        if let Some(ref muscle) = self.muscle {
            form.muscle = Some(Level::parse(muscle)?);
        }
        if let Some(ref endurance) = self.endurance {
            form.endurance = Some(Level::parse(endurance)?);
        }
        if let Some(ref goal) = self.goal {
            form.goal = Some(Goal::parse(goal)?);
        }
        if let Some(ref workout) = self.workout {
            form.workout_type = Some(WorkoutType::parse(workout)?);
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FitPlanError;

    #[test]
    fn parses_plan_arguments() {
        let cli = Cli::parse_from([
            "fitplan", "-vv", "plan", "--weight", "80", "--muscle", "high", "--format", "json",
            "--explain",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Commands::Plan(args)) => {
                assert_eq!(args.weight.as_deref(), Some("80"));
                assert_eq!(args.muscle.as_deref(), Some("high"));
                assert_eq!(args.format, Some(OutputFormat::Json));
                assert!(args.explain);
                assert!(args.goal.is_none());
            }
            _ => panic!("expected plan subcommand"),
        }
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::parse_from(["fitplan", "--config", "x.yaml"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.config, Some(PathBuf::from("x.yaml")));
    }

    #[test]
    fn flags_override_defaults() {
        let defaults = ProfileForm {
            weight: "70".into(),
            goal: Some(Goal::Maintain),
            ..Default::default()
        };
        let args = PlanArgs {
            weight: Some("81".into()),
            muscle: Some("very-high".into()),
            fat: Some("Low (10-15%)".into()),
            ..Default::default()
        };

        let form = args.apply(defaults).unwrap();
        assert_eq!(form.weight, "81");
        assert_eq!(form.muscle, Some(Level::VeryHigh));
        assert_eq!(form.body_fat, Some(FatBracket::Low));
        assert_eq!(form.goal, Some(Goal::Maintain));
        assert!(form.endurance.is_none());
    }

    #[test]
    fn unknown_flag_label_is_rejected() {
        let args = PlanArgs {
            endurance: Some("Extreme".into()),
            ..Default::default()
        };
        assert!(matches!(
            args.apply(ProfileForm::default()),
            Err(FitPlanError::InvalidInputKind(_))
        ));
    }
}
