/// Height assumed by [`compute_bmr`]; the form does not ask for it.
pub const REFERENCE_HEIGHT_CM: f64 = 170.0;

/// Sex constant of the Mifflin-St Jeor equation (male form).
const SEX_OFFSET: f64 = 5.0;

/// Basal metabolic rate in kcal/day.
///
/// Mifflin-St Jeor with a fixed 170 cm height and the male offset, so the
/// result is an approximation for anyone else:
/// `10 * weight + 6.25 * 170 - 5 * age + 5`.
pub fn compute_bmr(weight_kg: f64, age_years: u32) -> f64 {
    10.0 * weight_kg + 6.25 * REFERENCE_HEIGHT_CM - 5.0 * f64::from(age_years) + SEX_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmr_reference_value() {
        // 700 + 1062.5 - 150 + 5
        assert_eq!(compute_bmr(70.0, 30), 1617.5);
    }

    #[test]
    fn bmr_moves_with_weight_and_age() {
        assert_eq!(compute_bmr(80.0, 30) - compute_bmr(70.0, 30), 100.0);
        assert_eq!(compute_bmr(70.0, 30) - compute_bmr(70.0, 40), 50.0);
    }
}
