use crate::error::{FitPlanError, Result};

/// Triangular membership function with breakpoints `left <= peak <= right`.
///
/// A degenerate side (`left == peak` or `peak == right`) gives a shoulder:
/// the peak itself still has degree 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    left: f64,
    peak: f64,
    right: f64,
}

impl Triangle {
    pub fn new(left: f64, peak: f64, right: f64) -> Result<Self> {
        let finite = left.is_finite() && peak.is_finite() && right.is_finite();
        if !finite || left > peak || peak > right {
            return Err(FitPlanError::InvalidMembership(format!(
                "breakpoints must be finite and non-decreasing, got [{}, {}, {}]",
                left, peak, right
            )));
        }

        Ok(Self { left, peak, right })
    }

    pub fn from_points(points: [f64; 3]) -> Result<Self> {
        Self::new(points[0], points[1], points[2])
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn peak(&self) -> f64 {
        self.peak
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    /// Degree of membership of `x`, always within [0, 1].
    pub fn degree(&self, x: f64) -> f64 {
        let y = if x == self.peak {
            1.0
        } else if x > self.left && x < self.peak {
            (x - self.left) / (self.peak - self.left)
        } else if x > self.peak && x < self.right {
            (self.right - x) / (self.right - self.peak)
        } else {
            0.0
        };

        y.clamp(0.0, 1.0)
    }
}

/// Evenly spaced, symmetric triangles covering `[min, max]`.
///
/// Centers are `count` points from `min` to `max` inclusive and every
/// triangle spans `c ± w/2` with `w = (max - min) / ((count - 1) / 2)`, so
/// neighbours overlap by half a width and each set reaches zero at the
/// neighbouring centers. The first and last sets extend past the universe
/// and therefore act as half-triangles inside it.
///
/// For `[0, 10]` and five labels this yields `[-2.5, 0, 2.5]`,
/// `[0, 2.5, 5]`, `[2.5, 5, 7.5]`, `[5, 7.5, 10]` and `[7.5, 10, 12.5]`.
pub fn uniform_partition(min: f64, max: f64, count: usize) -> Result<Vec<Triangle>> {
    if count < 2 {
        return Err(FitPlanError::InvalidMembership(format!(
            "a partition needs at least two sets, got {}",
            count
        )));
    }
    if !(max > min) {
        return Err(FitPlanError::InvalidMembership(format!(
            "empty range [{}, {}]",
            min, max
        )));
    }

    let range = max - min;
    let half_width = range / ((count - 1) as f64 / 2.0) / 2.0;
    let spacing = range / (count - 1) as f64;

    (0..count)
        .map(|i| {
            let center = min + spacing * i as f64;
            Triangle::new(center - half_width, center, center + half_width)
        })
        .collect()
}
