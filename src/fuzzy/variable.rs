use super::membership::{uniform_partition, Triangle};
use crate::error::{FitPlanError, Result};
use std::fmt;

/// Closed set of linguistic labels for a variable.
pub trait Label: Copy + Eq + fmt::Debug + 'static {
    /// Every label, in ascending order.
    fn all() -> &'static [Self];

    fn name(&self) -> &'static str;
}

/// Identifies a variable inside an inference system.
pub trait VariableKey: Copy + Eq + fmt::Debug {
    fn name(&self) -> &'static str;
}

/// Integer-resolution range `[start, end]` sampled at step 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Universe {
    start: i64,
    end: i64,
}

impl Universe {
    pub fn new(start: i64, end: i64) -> Result<Self> {
        if end <= start {
            return Err(FitPlanError::InvalidMembership(format!(
                "universe [{}, {}] is empty",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> f64 {
        self.start as f64
    }

    pub fn end(&self) -> f64 {
        self.end as f64
    }

    pub fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    pub fn points(&self) -> Vec<f64> {
        (self.start..=self.end).map(|p| p as f64).collect()
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.start() && x <= self.end()
    }
}

#[derive(Debug, Clone)]
pub struct Term<L> {
    label: L,
    shape: Triangle,
    samples: Vec<f64>,
}

impl<L: Label> Term<L> {
    pub fn label(&self) -> L {
        self.label
    }

    pub fn shape(&self) -> Triangle {
        self.shape
    }

    /// Membership degrees at each universe point.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }
}

#[derive(Debug, Clone)]
pub struct FuzzyVariable<K, L> {
    key: K,
    universe: Universe,
    points: Vec<f64>,
    terms: Vec<Term<L>>,
}

impl<K: VariableKey, L: Label> FuzzyVariable<K, L> {
    pub fn new(key: K, universe: Universe) -> Self {
        Self {
            key,
            points: universe.points(),
            universe,
            terms: Vec::with_capacity(L::all().len()),
        }
    }

    /// One evenly spaced triangle per label, in label order.
    pub fn auto_partition(key: K, universe: Universe) -> Result<Self> {
        let shapes = uniform_partition(universe.start(), universe.end(), L::all().len())?;
        Ok(L::all()
            .iter()
            .zip(shapes)
            .fold(Self::new(key, universe), |var, (label, shape)| {
                var.with_term(*label, shape)
            }))
    }

    /// Adds (or replaces) the membership function for `label`.
    pub fn with_term(mut self, label: L, shape: Triangle) -> Self {
        let samples = self.points.iter().map(|x| shape.degree(*x)).collect();
        let term = Term {
            label,
            shape,
            samples,
        };

        match self.terms.iter_mut().find(|t| t.label == label) {
            Some(existing) => *existing = term,
            None => self.terms.push(term),
        }
        self
    }

    pub fn key(&self) -> K {
        self.key
    }

    pub fn universe(&self) -> Universe {
        self.universe
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn terms(&self) -> &[Term<L>] {
        &self.terms
    }

    pub fn term(&self, label: L) -> Option<&Term<L>> {
        self.terms.iter().find(|t| t.label == label)
    }

    /// Degree of `x` in `label`, interpolated over the sampled grid.
    ///
    /// Inputs outside the universe take the degree at the nearest end.
    pub fn membership(&self, label: L, x: f64) -> Option<f64> {
        self.term(label)
            .map(|term| interpolate(&self.points, &term.samples, x))
    }

    /// Degrees of `x` in every defined label.
    pub fn fuzzify(&self, x: f64) -> Vec<(L, f64)> {
        self.terms
            .iter()
            .map(|t| (t.label, interpolate(&self.points, &t.samples, x)))
            .collect()
    }
}

fn interpolate(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    let (Some(&first), Some(&last)) = (xs.first(), xs.last()) else {
        return 0.0;
    };

    if x <= first {
        return ys[0];
    }
    if x >= last {
        return ys[ys.len() - 1];
    }

    let i = xs.partition_point(|p| *p <= x);
    let (x0, x1) = (xs[i - 1], xs[i]);
    let (y0, y1) = (ys[i - 1], ys[i]);
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}
