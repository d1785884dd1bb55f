//! BMI engine. Formula, classification and gauge scale.

use super::entities::{BmiCategory, BmiResult, Measurement};
use super::errors::DomainError;

/// Upper end of the gauge scale. Values above it are pinned to the end.
pub const GAUGE_MAX: f64 = 50.0;

/// `weight_kg / (height_cm / 100)^2`, classified on the unrounded value.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> Result<BmiResult, DomainError> {
    compute(&Measurement::new(height_cm, weight_kg))
}

pub fn compute(measurement: &Measurement) -> Result<BmiResult, DomainError> {
    if !measurement.is_valid() {
        return Err(DomainError::InvalidMeasurement {
            height_cm: measurement.height_cm,
            weight_kg: measurement.weight_kg,
        });
    }
    let height_m = measurement.height_cm / 100.0;
    let value = measurement.weight_kg / (height_m * height_m);
    Ok(BmiResult {
        value,
        category: classify(value),
    })
}

/// Half-open bands, lower bound inclusive.
pub fn classify(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Position of `bmi` on the gauge as a fraction in `[0.0, 1.0]`.
pub fn gauge_fraction(bmi: f64) -> f64 {
    if bmi.is_nan() {
        return 0.0;
    }
    (bmi / GAUGE_MAX).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.005,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_reference_examples() {
        let r = compute_bmi(170.0, 70.0).unwrap();
        assert_close(r.value, 24.22);
        assert_eq!(r.category, BmiCategory::Normal);

        let r = compute_bmi(160.0, 45.0).unwrap();
        assert_close(r.value, 17.58);
        assert_eq!(r.category, BmiCategory::Underweight);

        let r = compute_bmi(180.0, 100.0).unwrap();
        assert_close(r.value, 30.86);
        assert_eq!(r.category, BmiCategory::Obese);
    }

    #[test]
    fn test_formula_and_determinism() {
        for (h, w) in [(150.0, 50.0), (175.5, 82.3), (201.0, 130.0), (60.0, 12.0)] {
            let a = compute_bmi(h, w).unwrap();
            let b = compute_bmi(h, w).unwrap();
            assert_eq!(a, b);
            let m: f64 = h / 100.0;
            assert_eq!(a.value, w / (m * m));
        }
    }

    #[test]
    fn test_boundaries_are_lower_inclusive() {
        assert_eq!(classify(18.499), BmiCategory::Underweight);
        assert_eq!(classify(18.5), BmiCategory::Normal);
        assert_eq!(classify(24.999), BmiCategory::Normal);
        assert_eq!(classify(25.0), BmiCategory::Overweight);
        assert_eq!(classify(29.999), BmiCategory::Overweight);
        assert_eq!(classify(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_boundary_from_measurement() {
        // 2 m tall: bmi == weight / 4 exactly
        assert_eq!(compute_bmi(200.0, 74.0).unwrap().category, BmiCategory::Normal);
        assert_eq!(compute_bmi(200.0, 100.0).unwrap().category, BmiCategory::Overweight);
        assert_eq!(compute_bmi(200.0, 120.0).unwrap().category, BmiCategory::Obese);
    }

    #[test]
    fn test_category_uses_unrounded_value() {
        // 24.9999 displays as "25.00" but is still Normal
        assert_eq!(classify(24.9999), BmiCategory::Normal);
    }

    #[test]
    fn test_non_positive_inputs_rejected() {
        for (h, w) in [(0.0, 70.0), (170.0, 0.0), (-170.0, 70.0), (170.0, -70.0)] {
            let err = compute_bmi(h, w).unwrap_err();
            assert_eq!(
                err,
                DomainError::InvalidMeasurement {
                    height_cm: h,
                    weight_kg: w
                }
            );
        }
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        assert!(compute_bmi(f64::NAN, 70.0).is_err());
        assert!(compute_bmi(170.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_gauge_fraction_clamped() {
        assert_eq!(gauge_fraction(0.0), 0.0);
        assert_eq!(gauge_fraction(25.0), 0.5);
        assert_eq!(gauge_fraction(GAUGE_MAX), 1.0);
        assert_eq!(gauge_fraction(80.0), 1.0);
        assert_eq!(gauge_fraction(f64::NAN), 0.0);
        assert!(gauge_fraction(20.0) < gauge_fraction(21.0));
    }
}
