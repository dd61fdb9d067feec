//! Body Mass Index calculation and diet classification.
//!
//! Heights are taken in feet and converted to meters before computing
//! `weight / height²`. Non-positive values are not rejected; they simply
//! produce a meaningless BMI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::suggestions;

/// Meters per foot.
pub const METERS_PER_FOOT: f64 = 0.3048;

/// BMI values below this are underweight.
pub const UNDERWEIGHT_BELOW: f64 = 18.5;

/// BMI values above this are overweight.
pub const OVERWEIGHT_ABOVE: f64 = 24.9;

/// Diet direction derived from a BMI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietCategory {
    /// Underweight: suggest gaining weight.
    Gain,
    /// Overweight: suggest losing weight.
    Lose,
    /// Within the healthy range.
    Balance,
}

impl DietCategory {
    /// Classify a BMI value.
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_BELOW {
            Self::Gain
        } else if bmi > OVERWEIGHT_ABOVE {
            Self::Lose
        } else {
            Self::Balance
        }
    }

    /// The lookup key for this category.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gain => "gain",
            Self::Lose => "lose",
            Self::Balance => "balance",
        }
    }

    /// Advice shown to the user for this category.
    #[must_use]
    pub fn advice(self) -> &'static str {
        match self {
            Self::Gain => "You are underweight. Consider gaining weight.",
            Self::Lose => "You are overweight. Consider losing weight.",
            Self::Balance => "You have a balanced weight!",
        }
    }

    /// Recipe suggestions for this category.
    #[must_use]
    pub fn suggestions(self) -> &'static [&'static str] {
        suggestions::suggestions_for(self.as_str())
    }
}

impl fmt::Display for DietCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "gain" => Ok(Self::Gain),
            "lose" => Ok(Self::Lose),
            "balance" => Ok(Self::Balance),
            other => Err(format!("unknown diet category: {other}")),
        }
    }
}

/// Result of a BMI calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiReport {
    /// The computed Body Mass Index.
    pub bmi: f64,
    /// Category the BMI falls into.
    pub category: DietCategory,
}

/// Compute BMI from a weight in kilograms and a height in feet.
#[must_use]
pub fn calculate(weight_kg: f64, height_ft: f64) -> BmiReport {
    let height_m = height_ft * METERS_PER_FOOT;
    let bmi = weight_kg / (height_m * height_m);
    BmiReport {
        bmi,
        category: DietCategory::from_bmi(bmi),
    }
}

/// Parse user-entered weight and height text and compute BMI.
///
/// # Errors
///
/// Returns [`Error::InvalidNumericInput`] if either value is not a number.
pub fn assess(weight_text: &str, height_text: &str) -> Result<BmiReport> {
    let weight_kg = parse_number("weight", weight_text)?;
    let height_ft = parse_number("height", height_text)?;
    Ok(calculate(weight_kg, height_ft))
}

fn parse_number(field: &'static str, text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| Error::invalid_numeric_input(field, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.01,
            "expected ~{expected}, got {actual}"
        );
    }

    #[test]
    fn test_balanced_weight() {
        let report = calculate(70.0, 5.9);
        assert_close(report.bmi, 21.64);
        assert_eq!(report.category, DietCategory::Balance);
        assert_eq!(
            report.category.suggestions(),
            ["Pasta Salad", "Quinoa Bowl", "Mixed Veg Soup"]
        );
    }

    #[test]
    fn test_underweight() {
        let report = calculate(50.0, 5.9);
        assert_close(report.bmi, 15.46);
        assert_eq!(report.category, DietCategory::Gain);
    }

    #[test]
    fn test_overweight() {
        let report = calculate(90.0, 5.5);
        assert_close(report.bmi, 32.02);
        assert_eq!(report.category, DietCategory::Lose);
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(DietCategory::from_bmi(18.5), DietCategory::Balance);
        assert_eq!(DietCategory::from_bmi(24.9), DietCategory::Balance);
        assert_eq!(DietCategory::from_bmi(18.49), DietCategory::Gain);
        assert_eq!(DietCategory::from_bmi(24.91), DietCategory::Lose);
    }

    #[test]
    fn test_assess_trims_input() {
        let report = assess(" 70 ", "5.9\n").unwrap();
        assert_eq!(report.category, DietCategory::Balance);
    }

    #[test]
    fn test_assess_rejects_non_numeric_weight() {
        let err = assess("seventy", "5.9").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidNumericInput { field: "weight", .. }
        ));
    }

    #[test]
    fn test_assess_rejects_non_numeric_height() {
        let err = assess("70", "").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidNumericInput { field: "height", .. }
        ));
    }

    #[test]
    fn test_assess_rejects_non_finite_values() {
        for text in ["nan", "NaN", "inf", "-inf", "infinity"] {
            let err = assess(text, "5.9").unwrap_err();
            assert!(
                matches!(err, Error::InvalidNumericInput { field: "weight", .. }),
                "weight {text} should be rejected"
            );
            let err = assess("70", text).unwrap_err();
            assert!(
                matches!(err, Error::InvalidNumericInput { field: "height", .. }),
                "height {text} should be rejected"
            );
        }
    }

    #[test]
    fn test_zero_height_is_not_rejected() {
        let report = assess("70", "0").unwrap();
        assert!(report.bmi.is_infinite());
        assert_eq!(report.category, DietCategory::Lose);
    }

    #[test]
    fn test_category_round_trip_through_str() {
        for category in [DietCategory::Gain, DietCategory::Lose, DietCategory::Balance] {
            assert_eq!(category.as_str().parse::<DietCategory>(), Ok(category));
        }
        assert!("bulk".parse::<DietCategory>().is_err());
    }

    #[test]
    fn test_advice_text() {
        assert_eq!(
            DietCategory::Gain.advice(),
            "You are underweight. Consider gaining weight."
        );
        assert_eq!(DietCategory::Balance.advice(), "You have a balanced weight!");
    }
}
