use super::variable::{Label, VariableKey};
use crate::error::Result;
use std::fmt;

/// Rule condition built from `variable is label` clauses.
#[derive(Debug, Clone, PartialEq)]
pub enum Antecedent<K, L> {
    Is(K, L),
    And(Box<Antecedent<K, L>>, Box<Antecedent<K, L>>),
    Or(Box<Antecedent<K, L>>, Box<Antecedent<K, L>>),
}

impl<K: VariableKey, L: Label> Antecedent<K, L> {
    pub fn is(key: K, label: L) -> Self {
        Antecedent::Is(key, label)
    }

    pub fn and(self, other: Self) -> Self {
        Antecedent::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Self) -> Self {
        Antecedent::Or(Box::new(self), Box::new(other))
    }

    /// Every `(variable, label)` clause, left to right.
    pub fn clauses(&self) -> Vec<(K, L)> {
        match self {
            Antecedent::Is(key, label) => vec![(*key, *label)],
            Antecedent::And(a, b) | Antecedent::Or(a, b) => {
                let mut clauses = a.clauses();
                clauses.extend(b.clauses());
                clauses
            }
        }
    }

    /// Degree to which the condition holds; AND is min, OR is max.
    pub fn strength<F>(&self, degree: &F) -> Result<f64>
    where
        F: Fn(K, L) -> Result<f64>,
    {
        match self {
            Antecedent::Is(key, label) => degree(*key, *label),
            Antecedent::And(a, b) => Ok(a.strength(degree)?.min(b.strength(degree)?)),
            Antecedent::Or(a, b) => Ok(a.strength(degree)?.max(b.strength(degree)?)),
        }
    }
}

impl<K: VariableKey, L: Label> fmt::Display for Antecedent<K, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Antecedent::Is(key, label) => write!(f, "{} is {}", key.name(), label.name()),
            Antecedent::And(a, b) => write!(f, "({} AND {})", a, b),
            Antecedent::Or(a, b) => write!(f, "({} OR {})", a, b),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rule<K, A, C> {
    pub antecedent: Antecedent<K, A>,
    pub output: K,
    pub label: C,
}

impl<K: VariableKey, A: Label, C: Label> Rule<K, A, C> {
    pub fn new(antecedent: Antecedent<K, A>, output: K, label: C) -> Self {
        Self {
            antecedent,
            output,
            label,
        }
    }
}

impl<K: VariableKey, A: Label, C: Label> fmt::Display for Rule<K, A, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IF {} THEN {} is {}",
            self.antecedent,
            self.output.name(),
            self.label.name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FitPlanError;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Var {
        Hot,
        Humid,
        Fan,
    }

    impl VariableKey for Var {
        fn name(&self) -> &'static str {
            match self {
                Var::Hot => "hot",
                Var::Humid => "humid",
                Var::Fan => "fan",
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Grade {
        No,
        Yes,
    }

    impl Label for Grade {
        fn all() -> &'static [Self] {
            &[Grade::No, Grade::Yes]
        }

        fn name(&self) -> &'static str {
            match self {
                Grade::No => "no",
                Grade::Yes => "yes",
            }
        }
    }

    fn degrees(key: Var, _label: Grade) -> Result<f64> {
        match key {
            Var::Hot => Ok(0.7),
            Var::Humid => Ok(0.3),
            Var::Fan => Err(FitPlanError::MissingInput("fan".into())),
        }
    }

    #[test]
    fn and_takes_minimum_or_takes_maximum() {
        let hot = Antecedent::is(Var::Hot, Grade::Yes);
        let humid = Antecedent::is(Var::Humid, Grade::Yes);

        let both = hot.clone().and(humid.clone());
        let either = hot.or(humid);

        assert_eq!(both.strength(&degrees).unwrap(), 0.3);
        assert_eq!(either.strength(&degrees).unwrap(), 0.7);
    }

    #[test]
    fn strength_propagates_degree_errors() {
        let cond = Antecedent::is(Var::Hot, Grade::Yes).and(Antecedent::is(Var::Fan, Grade::No));
        assert!(matches!(
            cond.strength(&degrees),
            Err(FitPlanError::MissingInput(_))
        ));
    }

    #[test]
    fn clauses_lists_every_reference() {
        let cond = Antecedent::is(Var::Hot, Grade::Yes)
            .and(Antecedent::is(Var::Humid, Grade::No).or(Antecedent::is(Var::Hot, Grade::No)));

        assert_eq!(
            cond.clauses(),
            vec![
                (Var::Hot, Grade::Yes),
                (Var::Humid, Grade::No),
                (Var::Hot, Grade::No)
            ]
        );
    }

    #[test]
    fn rule_display_reads_as_sentence() {
        let rule = Rule::new(
            Antecedent::is(Var::Hot, Grade::Yes).and(Antecedent::is(Var::Humid, Grade::Yes)),
            Var::Fan,
            Grade::Yes,
        );
        assert_eq!(
            rule.to_string(),
            "IF (hot is yes AND humid is yes) THEN fan is yes"
        );
    }
}
