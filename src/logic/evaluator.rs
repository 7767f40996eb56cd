use crate::error::{FitPlanError, Result};
use crate::fuzzy::{
    Antecedent, FuzzyVariable, InferenceSystem, Rule, Triangle, Universe, VariableKey,
};
use crate::models::{Band, FatBracket, Level, PlanTargets, PlanTrace, SystemTrace};

/// Variables of the three planner systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanVar {
    Fat,
    Muscle,
    Endurance,
    DailySteps,
    CalorieIntake,
    ProteinIntake,
}

impl VariableKey for PlanVar {
    fn name(&self) -> &'static str {
        match self {
            PlanVar::Fat => "fat",
            PlanVar::Muscle => "muscle",
            PlanVar::Endurance => "endurance",
            PlanVar::DailySteps => "daily_steps",
            PlanVar::CalorieIntake => "calorie_intake",
            PlanVar::ProteinIntake => "protein_intake",
        }
    }
}

type PlanSystem = InferenceSystem<PlanVar, Level, Band>;

const LEVEL_UNIVERSE: (i64, i64) = (0, 10);
const FAT_UNIVERSE: (i64, i64) = (0, 100);
pub const STEPS_UNIVERSE: (i64, i64) = (0, 15000);
pub const CALORIE_UNIVERSE: (i64, i64) = (1500, 4000);
pub const PROTEIN_UNIVERSE: (i64, i64) = (50, 250);

const FAT_TERMS: [(Level, [f64; 3]); 5] = [
    (Level::VeryLow, [0.0, 0.0, 10.0]),
    (Level::Low, [5.0, 12.5, 15.0]),
    (Level::Medium, [12.0, 20.0, 25.0]),
    (Level::High, [20.0, 25.0, 30.0]),
    (Level::VeryHigh, [25.0, 35.0, 100.0]),
];

const STEPS_TERMS: [(Band, [f64; 3]); 5] = [
    (Band::Low, [0.0, 0.0, 5000.0]),
    (Band::LowMedium, [4000.0, 7500.0, 9000.0]),
    (Band::Medium, [8000.0, 10000.0, 12000.0]),
    (Band::MediumHigh, [11000.0, 12500.0, 14000.0]),
    (Band::High, [13000.0, 15000.0, 15000.0]),
];

const CALORIE_TERMS: [(Band, [f64; 3]); 5] = [
    (Band::Low, [1500.0, 1500.0, 2000.0]),
    (Band::LowMedium, [1900.0, 2200.0, 2500.0]),
    (Band::Medium, [2400.0, 2750.0, 3000.0]),
    (Band::MediumHigh, [2900.0, 3250.0, 3500.0]),
    (Band::High, [3400.0, 4000.0, 4000.0]),
];

const PROTEIN_TERMS: [(Band, [f64; 3]); 5] = [
    (Band::Low, [50.0, 50.0, 100.0]),
    (Band::LowMedium, [90.0, 125.0, 150.0]),
    (Band::Medium, [140.0, 175.0, 200.0]),
    (Band::MediumHigh, [190.0, 220.0, 250.0]),
    (Band::High, [240.0, 250.0, 250.0]),
];

/// One level rung per output band, used by the steps and protein ladders.
const LADDER: [(Level, Band); 5] = [
    (Level::VeryHigh, Band::High),
    (Level::High, Band::MediumHigh),
    (Level::Medium, Band::Medium),
    (Level::Low, Band::LowMedium),
    (Level::VeryLow, Band::Low),
];

/// (muscle, fat) -> calorie band. Only the diagonal is covered.
const CALORIE_RULES: [(Level, Level, Band); 5] = [
    (Level::VeryHigh, Level::VeryLow, Band::High),
    (Level::High, Level::Low, Band::MediumHigh),
    (Level::Medium, Level::Medium, Band::Medium),
    (Level::Low, Level::High, Band::LowMedium),
    (Level::VeryLow, Level::VeryHigh, Band::Low),
];

/// Turns the categorical self-assessment into daily step, calorie and
/// protein targets.
///
/// Every call builds its three systems from the constant tables above and
/// drops them on return; nothing is cached between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyPlanEvaluator;

impl FuzzyPlanEvaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, muscle: Level, fat: FatBracket, endurance: Level) -> Result<PlanTargets> {
        self.evaluate_with_trace(muscle, fat, endurance)
            .map(|(targets, _)| targets)
    }

    /// Like [`evaluate`](Self::evaluate) but takes display labels, failing
    /// with `InvalidInputKind` before any inference runs.
    pub fn evaluate_labels(&self, muscle: &str, fat: &str, endurance: &str) -> Result<PlanTargets> {
        let muscle = Level::parse(muscle)?;
        let fat = FatBracket::parse(fat)?;
        let endurance = Level::parse(endurance)?;
        self.evaluate(muscle, fat, endurance)
    }

    pub fn evaluate_with_trace(
        &self,
        muscle: Level,
        fat: FatBracket,
        endurance: Level,
    ) -> Result<(PlanTargets, PlanTrace)> {
        let steps = run(
            steps_system()?,
            &[(PlanVar::Endurance, endurance.score())],
            PlanVar::DailySteps,
        )?;
        let calories = run(
            calories_system()?,
            &[(PlanVar::Muscle, muscle.score()), (PlanVar::Fat, fat.percent())],
            PlanVar::CalorieIntake,
        )?;
        let protein = run(
            protein_system()?,
            &[(PlanVar::Muscle, muscle.score())],
            PlanVar::ProteinIntake,
        )?;

        let targets = PlanTargets {
            daily_steps: steps.value as u32,
            calorie_intake: calories.value as u32,
            protein_intake: protein.value as u32,
        };

        Ok((
            targets,
            PlanTrace {
                systems: vec![steps, calories, protein],
            },
        ))
    }
}

fn run(system: PlanSystem, inputs: &[(PlanVar, f64)], output: PlanVar) -> Result<SystemTrace> {
    let evaluation = system.evaluate(inputs)?;
    let result = evaluation
        .output(output)
        .copied()
        .ok_or_else(|| FitPlanError::NoActivation(output.name().to_string()))?;

    if result.defaulted {
        tracing::warn!(
            output = output.name(),
            value = result.value,
            "no rule fired, using default"
        );
    } else {
        tracing::debug!(output = output.name(), value = result.value, "defuzzified");
    }

    Ok(SystemTrace {
        output: output.name(),
        value: result.value,
        defaulted: result.defaulted,
        firings: evaluation.firings,
    })
}

fn universe(range: (i64, i64)) -> Result<Universe> {
    Universe::new(range.0, range.1)
}

fn level_variable(key: PlanVar) -> Result<FuzzyVariable<PlanVar, Level>> {
    FuzzyVariable::auto_partition(key, universe(LEVEL_UNIVERSE)?)
}

fn fat_variable() -> Result<FuzzyVariable<PlanVar, Level>> {
    FAT_TERMS.iter().try_fold(
        FuzzyVariable::new(PlanVar::Fat, universe(FAT_UNIVERSE)?),
        |var, (label, points)| Ok(var.with_term(*label, Triangle::from_points(*points)?)),
    )
}

fn band_variable(
    key: PlanVar,
    range: (i64, i64),
    terms: &[(Band, [f64; 3])],
) -> Result<FuzzyVariable<PlanVar, Band>> {
    terms.iter().try_fold(
        FuzzyVariable::new(key, universe(range)?),
        |var, (label, points)| Ok(var.with_term(*label, Triangle::from_points(*points)?)),
    )
}

/// Reported when a label combination fires no rule: the peak of `medium`.
fn medium_peak(terms: &[(Band, [f64; 3])]) -> Option<f64> {
    terms
        .iter()
        .find(|(band, _)| *band == Band::Medium)
        .map(|(_, points)| points[1])
}

fn ladder_system(
    input: PlanVar,
    output: PlanVar,
    range: (i64, i64),
    terms: &[(Band, [f64; 3])],
) -> Result<PlanSystem> {
    PlanSystem::new()
        .with_antecedent(level_variable(input)?)
        .with_consequent(band_variable(output, range, terms)?, medium_peak(terms))
        .with_rules(
            LADDER
                .iter()
                .map(|(level, band)| Rule::new(Antecedent::is(input, *level), output, *band)),
        )
}

fn steps_system() -> Result<PlanSystem> {
    ladder_system(
        PlanVar::Endurance,
        PlanVar::DailySteps,
        STEPS_UNIVERSE,
        &STEPS_TERMS,
    )
}

fn protein_system() -> Result<PlanSystem> {
    ladder_system(
        PlanVar::Muscle,
        PlanVar::ProteinIntake,
        PROTEIN_UNIVERSE,
        &PROTEIN_TERMS,
    )
}

fn calories_system() -> Result<PlanSystem> {
    PlanSystem::new()
        .with_antecedent(level_variable(PlanVar::Muscle)?)
        .with_antecedent(fat_variable()?)
        .with_consequent(
            band_variable(PlanVar::CalorieIntake, CALORIE_UNIVERSE, &CALORIE_TERMS)?,
            medium_peak(&CALORIE_TERMS),
        )
        .with_rules(CALORIE_RULES.iter().map(|(muscle, fat, band)| {
            Rule::new(
                Antecedent::is(PlanVar::Muscle, *muscle).and(Antecedent::is(PlanVar::Fat, *fat)),
                PlanVar::CalorieIntake,
                *band,
            )
        }))
}
