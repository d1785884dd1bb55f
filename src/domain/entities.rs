//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/terminal types here. Adapters map into and out of these.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw user input: height in centimetres and weight in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl Measurement {
    pub fn new(height_cm: f64, weight_kg: f64) -> Self {
        Self {
            height_cm,
            weight_kg,
        }
    }

    /// Both values finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        is_positive(self.height_cm) && is_positive(self.weight_kg)
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Standard adult weight category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Half-open band `[lower, upper)`. Obese has no upper bound.
    pub fn range(self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::Normal => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::Obese => (30.0, f64::INFINITY),
        }
    }

    /// One-line interpretation shown under the numeric result.
    pub fn description(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "This is considered Underweight.",
            BmiCategory::Normal => "This is within the Normal weight range.",
            BmiCategory::Overweight => "This is considered Overweight.",
            BmiCategory::Obese => "This is considered Obese.",
        }
    }

    /// Static offline advice. Available even when the AI assistant is disabled.
    pub fn tips(self) -> &'static [&'static str] {
        match self {
            BmiCategory::Underweight => &[
                "Consider eating more frequent, nutrient-dense meals.",
                "Incorporate strength training to build lean muscle mass.",
                "Consult a nutritionist for a personalized plan.",
            ],
            BmiCategory::Normal => &[
                "Continue with your balanced diet and regular exercise.",
                "Focus on maintaining your healthy habits for long-term wellness.",
            ],
            BmiCategory::Overweight => &[
                "Focus on a balanced diet with portion control.",
                "Aim for at least 150 minutes of moderate aerobic activity per week.",
                "Strength training can help increase metabolism.",
            ],
            BmiCategory::Obese => &[
                "It is highly recommended to consult a healthcare provider for a comprehensive management plan.",
                "Focus on gradual, sustainable lifestyle changes rather than quick fixes.",
            ],
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Computed BMI. `value` is unrounded; `Display` rounds to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub value: f64,
    pub category: BmiCategory,
}

impl fmt::Display for BmiResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} ({})", self.value, self.category)
    }
}

/// One question to the health assistant, bound to the BMI it was asked about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceRequest {
    pub bmi: f64,
    pub question: String,
}

impl AdviceRequest {
    pub fn new(bmi: f64, question: impl Into<String>) -> Self {
        Self {
            bmi,
            question: question.into(),
        }
    }
}

/// Completion text returned by the text-generation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceResponse {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_validity() {
        assert!(Measurement::new(170.0, 70.0).is_valid());
        assert!(!Measurement::new(0.0, 70.0).is_valid());
        assert!(!Measurement::new(170.0, -1.0).is_valid());
        assert!(!Measurement::new(f64::NAN, 70.0).is_valid());
        assert!(!Measurement::new(170.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_category_ranges_are_contiguous() {
        for pair in BmiCategory::ALL.windows(2) {
            assert_eq!(pair[0].range().1, pair[1].range().0);
        }
    }

    #[test]
    fn test_every_category_has_tips() {
        for category in BmiCategory::ALL {
            assert!(!category.tips().is_empty());
            assert!(category.description().contains(category.label()));
        }
    }

    #[test]
    fn test_result_display_rounds_two_decimals() {
        let result = BmiResult {
            value: 24.221453,
            category: BmiCategory::Normal,
        };
        assert_eq!(result.to_string(), "24.22 (Normal)");
    }
}
