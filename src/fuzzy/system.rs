use super::rule::Rule;
use super::variable::{FuzzyVariable, Label, VariableKey};
use crate::error::{FitPlanError, Result};
use serde::Serialize;

struct Consequent<K, C> {
    variable: FuzzyVariable<K, C>,
    default: Option<f64>,
}

/// Rule base over antecedent variables labelled `A` and consequent
/// variables labelled `C`.
pub struct InferenceSystem<K, A, C> {
    antecedents: Vec<FuzzyVariable<K, A>>,
    consequents: Vec<Consequent<K, C>>,
    rules: Vec<Rule<K, A, C>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleFiring {
    pub rule: String,
    pub strength: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Output<K> {
    pub key: K,
    pub value: f64,
    /// The aggregated set was empty and the configured default was used.
    pub defaulted: bool,
}

#[derive(Debug, Clone)]
pub struct Evaluation<K> {
    pub outputs: Vec<Output<K>>,
    pub firings: Vec<RuleFiring>,
}

impl<K: VariableKey> Evaluation<K> {
    pub fn output(&self, key: K) -> Option<&Output<K>> {
        self.outputs.iter().find(|o| o.key == key)
    }
}

impl<K: VariableKey, A: Label, C: Label> InferenceSystem<K, A, C> {
    pub fn new() -> Self {
        Self {
            antecedents: Vec::new(),
            consequents: Vec::new(),
            rules: Vec::new(),
        }
    }

    pub fn with_antecedent(mut self, variable: FuzzyVariable<K, A>) -> Self {
        self.antecedents.push(variable);
        self
    }

    /// `default` is reported when no rule reaches this consequent.
    pub fn with_consequent(mut self, variable: FuzzyVariable<K, C>, default: Option<f64>) -> Self {
        self.consequents.push(Consequent { variable, default });
        self
    }

    /// Appends rules, rejecting any that name an undefined variable or term.
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = Rule<K, A, C>>) -> Result<Self> {
        for rule in rules {
            self.check_rule(&rule)?;
            self.rules.push(rule);
        }
        Ok(self)
    }

    pub fn rules(&self) -> &[Rule<K, A, C>] {
        &self.rules
    }

    fn antecedent(&self, key: K) -> Option<&FuzzyVariable<K, A>> {
        self.antecedents.iter().find(|v| v.key() == key)
    }

    fn check_rule(&self, rule: &Rule<K, A, C>) -> Result<()> {
        for (key, label) in rule.antecedent.clauses() {
            let variable = self.antecedent(key).ok_or_else(|| {
                FitPlanError::UnknownTerm(format!("no input variable '{}'", key.name()))
            })?;
            if variable.term(label).is_none() {
                return Err(FitPlanError::UnknownTerm(format!(
                    "'{}' has no term '{}'",
                    key.name(),
                    label.name()
                )));
            }
        }

        let consequent = self
            .consequents
            .iter()
            .find(|c| c.variable.key() == rule.output)
            .ok_or_else(|| {
                FitPlanError::UnknownTerm(format!("no output variable '{}'", rule.output.name()))
            })?;
        if consequent.variable.term(rule.label).is_none() {
            return Err(FitPlanError::UnknownTerm(format!(
                "'{}' has no term '{}'",
                rule.output.name(),
                rule.label.name()
            )));
        }

        Ok(())
    }

    /// Runs min/max inference for the bound crisp inputs and defuzzifies
    /// every consequent by centroid.
    pub fn evaluate(&self, inputs: &[(K, f64)]) -> Result<Evaluation<K>> {
        let degree = |key: K, label: A| -> Result<f64> {
            let value = inputs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| *v)
                .ok_or_else(|| FitPlanError::MissingInput(key.name().to_string()))?;
            self.antecedent(key)
                .and_then(|v| v.membership(label, value))
                .ok_or_else(|| {
                    FitPlanError::UnknownTerm(format!("{} is {}", key.name(), label.name()))
                })
        };

        let strengths = self
            .rules
            .iter()
            .map(|rule| rule.antecedent.strength(&degree))
            .collect::<Result<Vec<f64>>>()?;

        let firings: Vec<RuleFiring> = self
            .rules
            .iter()
            .zip(&strengths)
            .map(|(rule, strength)| {
                tracing::trace!(rule = %rule, strength, "rule fired");
                RuleFiring {
                    rule: rule.to_string(),
                    strength: *strength,
                }
            })
            .collect();

        let outputs = self
            .consequents
            .iter()
            .map(|c| self.defuzzify(c, &strengths))
            .collect::<Result<Vec<_>>>()?;

        Ok(Evaluation { outputs, firings })
    }

    fn defuzzify(&self, consequent: &Consequent<K, C>, strengths: &[f64]) -> Result<Output<K>> {
        let variable = &consequent.variable;
        let key = variable.key();

        // Activation per term: strongest rule naming it.
        let mut activation = vec![0.0_f64; variable.terms().len()];
        for (rule, strength) in self.rules.iter().zip(strengths) {
            if rule.output != key {
                continue;
            }
            if let Some(i) = variable.terms().iter().position(|t| t.label() == rule.label) {
                activation[i] = activation[i].max(*strength);
            }
        }

        let mut aggregated = vec![0.0_f64; variable.points().len()];
        for (term, level) in variable.terms().iter().zip(&activation) {
            if *level <= 0.0 {
                continue;
            }
            for (agg, mu) in aggregated.iter_mut().zip(term.samples()) {
                *agg = agg.max(mu.min(*level));
            }
        }

        match centroid(variable.points(), &aggregated) {
            Some(value) => Ok(Output {
                key,
                value,
                defaulted: false,
            }),
            None => match consequent.default {
                Some(value) => Ok(Output {
                    key,
                    value,
                    defaulted: true,
                }),
                None => Err(FitPlanError::NoActivation(key.name().to_string())),
            },
        }
    }
}

impl<K: VariableKey, A: Label, C: Label> Default for InferenceSystem<K, A, C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Centroid of a piecewise-linear set sampled at `xs`.
///
/// Each segment contributes its trapezoid area at the trapezoid's own
/// centroid. Returns `None` when the set has no area.
pub fn centroid(xs: &[f64], mu: &[f64]) -> Option<f64> {
    let mut moment_area = 0.0;
    let mut area_total = 0.0;

    for (x, y) in xs.windows(2).zip(mu.windows(2)) {
        let (x1, x2) = (x[0], x[1]);
        let (y1, y2) = (y[0], y[1]);
        if (y1 == 0.0 && y2 == 0.0) || x1 == x2 {
            continue;
        }

        let width = x2 - x1;
        let (moment, area) = if y1 == y2 {
            (0.5 * (x1 + x2), width * y1)
        } else if y1 == 0.0 {
            (x1 + 2.0 / 3.0 * width, 0.5 * width * y2)
        } else if y2 == 0.0 {
            (x1 + 1.0 / 3.0 * width, 0.5 * width * y1)
        } else {
            (
                x1 + 2.0 / 3.0 * width * (y2 + 0.5 * y1) / (y1 + y2),
                0.5 * width * (y1 + y2),
            )
        };

        moment_area += moment * area;
        area_total += area;
    }

    if area_total > 0.0 {
        Some(moment_area / area_total)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy::{Antecedent, Triangle, Universe};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Var {
        Service,
        Food,
        Tip,
    }

    impl VariableKey for Var {
        fn name(&self) -> &'static str {
            match self {
                Var::Service => "service",
                Var::Food => "food",
                Var::Tip => "tip",
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Grade {
        Poor,
        Good,
    }

    impl Label for Grade {
        fn all() -> &'static [Self] {
            &[Grade::Poor, Grade::Good]
        }

        fn name(&self) -> &'static str {
            match self {
                Grade::Poor => "poor",
                Grade::Good => "good",
            }
        }
    }

    type TipSystem = InferenceSystem<Var, Grade, Grade>;

    fn tri(a: f64, b: f64, c: f64) -> Triangle {
        Triangle::new(a, b, c).unwrap()
    }

    fn tip_variable() -> FuzzyVariable<Var, Grade> {
        FuzzyVariable::new(Var::Tip, Universe::new(0, 30).unwrap())
            .with_term(Grade::Poor, tri(0.0, 0.0, 15.0))
            .with_term(Grade::Good, tri(15.0, 30.0, 30.0))
    }

    fn system(default: Option<f64>) -> TipSystem {
        let service = FuzzyVariable::auto_partition(Var::Service, Universe::new(0, 10).unwrap())
            .unwrap();
        let food = FuzzyVariable::auto_partition(Var::Food, Universe::new(0, 10).unwrap()).unwrap();

        TipSystem::new()
            .with_antecedent(service)
            .with_antecedent(food)
            .with_consequent(tip_variable(), default)
            .with_rules([
                Rule::new(
                    Antecedent::is(Var::Service, Grade::Poor)
                        .and(Antecedent::is(Var::Food, Grade::Poor)),
                    Var::Tip,
                    Grade::Poor,
                ),
                Rule::new(Antecedent::is(Var::Service, Grade::Good), Var::Tip, Grade::Good),
            ])
            .unwrap()
    }

    #[test]
    fn centroid_of_simple_shapes() {
        let xs: Vec<f64> = (0..=10).map(f64::from).collect();

        let flat = vec![1.0; 11];
        assert!((centroid(&xs, &flat).unwrap() - 5.0).abs() < 1e-12);

        // Right triangle rising from 0 to 10: centroid at 2/3 of the base.
        let ramp: Vec<f64> = xs.iter().map(|x| x / 10.0).collect();
        assert!((centroid(&xs, &ramp).unwrap() - 20.0 / 3.0).abs() < 1e-9);

        assert_eq!(centroid(&xs, &[0.0; 11]), None);
    }

    #[test]
    fn full_strength_rule_yields_term_centroid() {
        let eval = system(None)
            .evaluate(&[(Var::Service, 10.0), (Var::Food, 10.0)])
            .unwrap();

        let tip = eval.output(Var::Tip).unwrap();
        assert!(!tip.defaulted);
        assert!((tip.value - 25.0).abs() < 1e-9);
        assert_eq!(eval.firings.len(), 2);
        assert_eq!(eval.firings[0].strength, 0.0);
        assert_eq!(eval.firings[1].strength, 1.0);
    }

    #[test]
    fn conjunction_uses_weaker_clause() {
        let eval = system(None)
            .evaluate(&[(Var::Service, 0.0), (Var::Food, 5.0)])
            .unwrap();
        // Service 0 is fully poor, food 5 only half.
        assert_eq!(eval.firings[0].strength, 0.5);
        assert_eq!(eval.firings[1].strength, 0.0);
        assert!(eval.output(Var::Tip).unwrap().value < 15.0);
    }

    #[test]
    fn silent_rule_base_uses_default() {
        let eval = system(Some(12.0))
            .evaluate(&[(Var::Service, 0.0), (Var::Food, 10.0)])
            .unwrap();
        let tip = eval.output(Var::Tip).unwrap();
        assert!(tip.defaulted);
        assert_eq!(tip.value, 12.0);
    }

    #[test]
    fn silent_rule_base_without_default_fails() {
        let result = system(None).evaluate(&[(Var::Service, 0.0), (Var::Food, 10.0)]);
        assert!(matches!(result, Err(FitPlanError::NoActivation(_))));
    }

    #[test]
    fn missing_binding_is_reported() {
        let result = system(None).evaluate(&[(Var::Service, 3.0)]);
        assert!(matches!(result, Err(FitPlanError::MissingInput(name)) if name == "food"));
    }

    #[test]
    fn rules_on_unknown_variables_are_rejected() {
        let result = TipSystem::new()
            .with_consequent(tip_variable(), None)
            .with_rules([Rule::new(
                Antecedent::is(Var::Service, Grade::Good),
                Var::Tip,
                Grade::Good,
            )]);
        assert!(matches!(result, Err(FitPlanError::UnknownTerm(_))));

        let service = FuzzyVariable::new(Var::Service, Universe::new(0, 10).unwrap())
            .with_term(Grade::Good, tri(5.0, 10.0, 10.0));
        let result = TipSystem::new()
            .with_antecedent(service)
            .with_consequent(tip_variable(), None)
            .with_rules([Rule::new(
                Antecedent::is(Var::Service, Grade::Poor),
                Var::Tip,
                Grade::Good,
            )]);
        assert!(matches!(result, Err(FitPlanError::UnknownTerm(_))));
    }

    #[test]
    fn repeated_evaluation_is_identical() {
        let sys = system(None);
        let inputs = [(Var::Service, 6.0), (Var::Food, 2.0)];
        let first = sys.evaluate(&inputs).unwrap();
        let second = sys.evaluate(&inputs).unwrap();
        assert_eq!(first.outputs, second.outputs);
    }
}
