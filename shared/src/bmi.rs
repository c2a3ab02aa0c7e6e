//! Body Mass Index calculation and classification
//!
//! BMI = weight(kg) / height(m)², rounded to one decimal, then looked up in
//! an ordered table of half-open bands that partition `[0, ∞)`.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::units::MetricMeasurements;
use crate::validation::ensure_positive;

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    HealthyWeight,
    Overweight,
    Obese,
}

/// One row of the classification table; `lower` inclusive, `upper` exclusive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiBand {
    pub category: BmiCategory,
    pub lower: f64,
    pub upper: f64,
}

/// Classification table, ascending, without gaps
pub static BMI_BANDS: [BmiBand; 4] = [
    BmiBand {
        category: BmiCategory::Underweight,
        lower: 0.0,
        upper: 18.5,
    },
    BmiBand {
        category: BmiCategory::HealthyWeight,
        lower: 18.5,
        upper: 25.0,
    },
    BmiBand {
        category: BmiCategory::Overweight,
        lower: 25.0,
        upper: 30.0,
    },
    BmiBand {
        category: BmiCategory::Obese,
        lower: 30.0,
        upper: f64::INFINITY,
    },
];

const HEALTHY_BMI_MIN: f64 = 18.5;
const HEALTHY_BMI_MAX: f64 = 25.0;

impl BmiCategory {
    /// Get the BMI range for this category
    pub fn range(&self) -> (f64, f64) {
        BMI_BANDS
            .iter()
            .find(|band| band.category == *self)
            .map_or((0.0, f64::INFINITY), |band| (band.lower, band.upper))
    }

    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::HealthyWeight => "Healthy Weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// BMI calculation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI rounded to one decimal
    pub value: f64,
    pub category: BmiCategory,
    /// Healthy weight range in kg for this height
    pub healthy_weight_range_kg: (f64, f64),
    /// Distance from healthy range (negative = under, positive = over, 0 = in range)
    pub distance_from_healthy_kg: f64,
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Calculate BMI from weight and height, rounded to one decimal
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    bmi_for_height_m(weight_kg, height_cm / 100.0)
}

fn bmi_for_height_m(weight_kg: f64, height_m: f64) -> f64 {
    round_one_decimal(weight_kg / (height_m * height_m))
}

/// Classify BMI into category, first matching band wins
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    let bmi = bmi.max(0.0);
    BMI_BANDS
        .iter()
        .find(|band| bmi >= band.lower && bmi < band.upper)
        .map_or(BmiCategory::Obese, |band| band.category)
}

/// Healthy weight range for a height in metres, based on BMI 18.5-25
pub fn healthy_weight_range_kg(height_m: f64) -> (f64, f64) {
    let height_m_sq = height_m * height_m;
    (HEALTHY_BMI_MIN * height_m_sq, HEALTHY_BMI_MAX * height_m_sq)
}

/// Calculate complete BMI result
///
/// # Errors
///
/// Returns a [`ValidationError`] when weight or height is not positive.
pub fn calculate_bmi_result(body: &MetricMeasurements) -> Result<BmiResult, ValidationError> {
    ensure_positive("weight_kg", body.weight_kg)?;
    ensure_positive("height_cm", body.height_m)?;

    let value = bmi_for_height_m(body.weight_kg, body.height_m);
    let healthy_range = healthy_weight_range_kg(body.height_m);

    let distance = if body.weight_kg < healthy_range.0 {
        body.weight_kg - healthy_range.0
    } else if body.weight_kg > healthy_range.1 {
        body.weight_kg - healthy_range.1
    } else {
        0.0
    };

    Ok(BmiResult {
        value,
        category: classify_bmi(value),
        healthy_weight_range_kg: healthy_range,
        distance_from_healthy_kg: distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{normalize, RawMeasurements, UnitSystem};
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_bmi_calculation() {
        // 90 / 1.8² = 27.78
        assert_eq!(calculate_bmi(90.0, 180.0), 27.8);
        assert_eq!(classify_bmi(27.8), BmiCategory::Overweight);
    }

    #[rstest]
    #[case(0.0, BmiCategory::Underweight)]
    #[case(18.49, BmiCategory::Underweight)]
    #[case(18.5, BmiCategory::HealthyWeight)]
    #[case(24.9, BmiCategory::HealthyWeight)]
    #[case(25.0, BmiCategory::Overweight)]
    #[case(29.99, BmiCategory::Overweight)]
    #[case(30.0, BmiCategory::Obese)]
    #[case(75.0, BmiCategory::Obese)]
    fn test_bmi_boundaries(#[case] bmi: f64, #[case] expected: BmiCategory) {
        assert_eq!(classify_bmi(bmi), expected);
    }

    #[test]
    fn test_bands_partition_without_gaps() {
        assert_eq!(BMI_BANDS[0].lower, 0.0);
        for pair in BMI_BANDS.windows(2) {
            assert_eq!(pair[0].upper, pair[1].lower);
        }
        assert!(BMI_BANDS[3].upper.is_infinite());
        assert_eq!(BmiCategory::Overweight.range(), (25.0, 30.0));
    }

    #[test]
    fn test_imperial_input() {
        // 200 lb, 72 in -> 90.72 kg, 1.8288 m -> 27.1
        let body = normalize(RawMeasurements {
            weight: 200.0,
            height: 72.0,
            system: UnitSystem::Imperial,
        });
        let result = calculate_bmi_result(&body).unwrap();
        assert_eq!(result.value, 27.1);
        assert_eq!(result.category, BmiCategory::Overweight);
    }

    #[test]
    fn test_healthy_weight_range() {
        // For 175cm, healthy range should be ~56.7-76.6 kg
        let (min, max) = healthy_weight_range_kg(1.75);
        assert!((min - 56.66).abs() < 0.05);
        assert!((max - 76.56).abs() < 0.05);
    }

    fn metric(weight_kg: f64, height_cm: f64) -> MetricMeasurements {
        normalize(RawMeasurements {
            weight: weight_kg,
            height: height_cm,
            system: UnitSystem::Metric,
        })
    }

    #[test]
    fn test_distance_from_healthy() {
        let over = calculate_bmi_result(&metric(90.0, 175.0)).unwrap();
        assert!((over.distance_from_healthy_kg - (90.0 - 76.5625)).abs() < 1e-9);

        let within = calculate_bmi_result(&metric(70.0, 175.0)).unwrap();
        assert_eq!(within.distance_from_healthy_kg, 0.0);
        assert_eq!(within.category, BmiCategory::HealthyWeight);
    }

    #[test]
    fn test_zero_height_rejected() {
        let err = calculate_bmi_result(&metric(70.0, 0.0)).unwrap_err();
        assert_eq!(err.field, "height_cm");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: every non-negative BMI lands in exactly one band
        #[test]
        fn prop_exactly_one_band(bmi in 0.0f64..100.0) {
            let matches = BMI_BANDS
                .iter()
                .filter(|band| bmi >= band.lower && bmi < band.upper)
                .count();
            prop_assert_eq!(matches, 1);
        }

        /// Property: heavier weight never lowers BMI at the same height
        #[test]
        fn prop_bmi_increases_with_weight(
            weight1 in 50.0f64..100.0,
            weight2 in 100.0f64..150.0,
            height in 150.0f64..200.0
        ) {
            prop_assert!(calculate_bmi(weight2, height) >= calculate_bmi(weight1, height));
        }

        /// Property: imperial BMI uses inches converted straight to metres
        #[test]
        fn prop_imperial_bmi_uses_direct_metres(lbs in 90.0f64..400.0, inches in 48.0f64..90.0) {
            let body = normalize(RawMeasurements { weight: lbs, height: inches, system: UnitSystem::Imperial });
            let height_m = inches * 0.0254;
            let expected = (lbs * 0.453592 / (height_m * height_m) * 10.0).round() / 10.0;
            prop_assert_eq!(calculate_bmi_result(&body).unwrap().value, expected);
        }

        /// Property: mid-range healthy weight classifies as healthy
        #[test]
        fn prop_healthy_range_produces_healthy_bmi(height in 150.0f64..200.0) {
            let (min, max) = healthy_weight_range_kg(height / 100.0);
            let bmi = calculate_bmi((min + max) / 2.0, height);
            prop_assert_eq!(classify_bmi(bmi), BmiCategory::HealthyWeight);
        }
    }
}
