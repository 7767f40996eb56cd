use crate::error::{FitPlanError, Result};
use crate::models::{FatBracket, Goal, Level, ProfileForm, WorkoutType};
use dialoguer::{Confirm, Input, Select};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: ProfileDefaults,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Pre-filled form values. Labels use the same spelling the form shows.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProfileDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_years: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endurance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_type: Option<String>,
}

impl ProfileDefaults {
    /// Builds a form from the defaults. Unknown labels are an error rather
    /// than a silently empty field.
    pub fn to_form(&self) -> Result<ProfileForm> {
        Ok(ProfileForm {
            weight: self.weight_kg.map(|w| w.to_string()).unwrap_or_default(),
            age: self.age_years.map(|a| a.to_string()).unwrap_or_default(),
            body_fat: self.body_fat.as_deref().map(FatBracket::parse).transpose()?,
            muscle: self.muscle.as_deref().map(Level::parse).transpose()?,
            endurance: self.endurance.as_deref().map(Level::parse).transpose()?,
            goal: self.goal.as_deref().map(Goal::parse).transpose()?,
            workout_type: self
                .workout_type
                .as_deref()
                .map(WorkoutType::parse)
                .transpose()?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub explain: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    /// Loads the config file, or built-in defaults when none exists.
    ///
    /// An explicit `config_override` must point at an existing file.
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(FitPlanError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("no config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| FitPlanError::Config(format!("Failed to read config: {}", e)))?;

        let config = Self::parse(&config_str)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Parses YAML after `${VAR}` substitution.
    pub fn parse(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;
        serde_yaml::from_str(&content)
            .map_err(|e| FitPlanError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Checks that every default label is one the form knows.
    pub fn validate(&self) -> Result<()> {
        self.defaults.to_form().map(|_| ())
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::config_dir()
            .map(|dir| dir.join("fitplan").join("config.yaml"))
            .filter(|p| p.exists())
    }

    /// Path of the config that [`load`](Self::load) would read, if any.
    pub fn resolved_path(config_override: Option<&PathBuf>) -> Option<PathBuf> {
        match config_override {
            Some(p) => Some(p.clone()).filter(|p| p.exists()),
            None => Self::find_config_path(),
        }
    }

    /// Default path for writing new config files (~/.config/fitplan/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| FitPlanError::Config("Cannot determine config directory".into()))?
            .join("fitplan");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the new Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up default planner values.");
        println!();

        let weight_kg: f64 = Input::new()
            .with_prompt("  Weight (kg)")
            .default(70.0)
            .validate_with(|w: &f64| {
                if *w > 0.0 {
                    Ok(())
                } else {
                    Err("weight must be positive")
                }
            })
            .interact_text()
            .map_err(prompt_error)?;

        let age_years: u32 = Input::new()
            .with_prompt("  Age (years)")
            .default(30)
            .validate_with(|a: &u32| if *a > 0 { Ok(()) } else { Err("age must be positive") })
            .interact_text()
            .map_err(prompt_error)?;

        let body_fat = choose(
            "  Body fat",
            &FatBracket::ALL.map(|b| b.as_str()),
            2,
        )?;
        let muscle = choose("  Muscle level", &Level::ALL.map(|l| l.as_str()), 2)?;
        let endurance = choose("  Endurance level", &Level::ALL.map(|l| l.as_str()), 2)?;
        let goal = choose("  Goal", &Goal::ALL.map(|g| g.as_str()), 2)?;
        let workout_type = choose(
            "  Preferred workout type",
            &WorkoutType::ALL.map(|w| w.as_str()),
            0,
        )?;

        let explain = Confirm::new()
            .with_prompt("  Show rule activations with each plan?")
            .default(false)
            .interact()
            .map_err(prompt_error)?;

        println!();

        let config = Config {
            defaults: ProfileDefaults {
                weight_kg: Some(weight_kg),
                age_years: Some(age_years),
                body_fat: Some(body_fat),
                muscle: Some(muscle),
                endurance: Some(endurance),
                goal: Some(goal),
                workout_type: Some(workout_type),
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                explain,
            },
        };

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| FitPlanError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# fitplan configuration\n# Generated by `fitplan init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| FitPlanError::Config(format!("Invalid substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }
}

fn prompt_error(e: dialoguer::Error) -> FitPlanError {
    FitPlanError::Config(format!("Input error: {}", e))
}

fn choose(prompt: &str, items: &[&'static str], default: usize) -> Result<String> {
    let index = Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()
        .map_err(prompt_error)?;
    Ok(items[index].to_string())
}
