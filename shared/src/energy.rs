//! BMR and TDEE estimation
//!
//! Basal Metabolic Rate uses the Mifflin-St Jeor equation:
//!
//! - Men:   BMR = 10 × weight(kg) + 6.25 × height(cm) − 5 × age(y) + 5
//! - Women: BMR = 10 × weight(kg) + 6.25 × height(cm) − 5 × age(y) − 161
//!
//! TDEE scales the rounded BMR by the activity multiplier and rounds again.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::profile::{ActivityLevel, AnthropometricInput, Gender};

/// Gender constant added to the shared Mifflin-St Jeor terms
const fn gender_constant(gender: Gender) -> f64 {
    match gender {
        Gender::Male => 5.0,
        Gender::Female => -161.0,
    }
}

/// BMR and optional TDEE, in whole kcal/day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    pub bmr: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tdee: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_multiplier: Option<f64>,
}

/// Unrounded Mifflin-St Jeor BMR
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64 + gender_constant(gender)
}

/// BMR rounded to the nearest kcal
///
/// # Errors
///
/// Returns a [`ValidationError`] when weight, height or age is not positive,
/// or when the combination yields a BMR of zero or less.
pub fn estimate_bmr(input: &AnthropometricInput) -> Result<i32, ValidationError> {
    input.validate()?;
    let bmr = calculate_bmr_mifflin(input.weight_kg, input.height_cm, input.age_years, input.gender).round() as i32;
    if bmr <= 0 {
        return Err(ValidationError::new(
            "age_years",
            "is too high for the given weight and height",
        ));
    }
    Ok(bmr)
}

/// TDEE from an already-rounded BMR
pub fn estimate_tdee(bmr: i32, activity: ActivityLevel) -> i32 {
    (bmr as f64 * activity.multiplier()).round() as i32
}

/// BMR, plus TDEE when an activity level is supplied
///
/// # Errors
///
/// Returns a [`ValidationError`] when weight, height or age is not positive.
pub fn estimate_energy(
    input: &AnthropometricInput,
    activity: Option<ActivityLevel>,
) -> Result<EnergyEstimate, ValidationError> {
    let bmr = estimate_bmr(input)?;
    Ok(EnergyEstimate {
        bmr,
        tdee: activity.map(|a| estimate_tdee(bmr, a)),
        activity_multiplier: activity.map(|a| a.multiplier()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn reference_male() -> AnthropometricInput {
        AnthropometricInput {
            weight_kg: 70.0,
            height_cm: 175.0,
            age_years: 25,
            gender: Gender::Male,
        }
    }

    #[test]
    fn test_reference_male_bmr() {
        // 700 + 1093.75 - 125 + 5 = 1673.75
        assert_eq!(calculate_bmr_mifflin(70.0, 175.0, 25, Gender::Male), 1673.75);
        assert_eq!(estimate_bmr(&reference_male()), Ok(1674));
    }

    #[test]
    fn test_moderate_tdee() {
        let estimate = estimate_energy(&reference_male(), Some(ActivityLevel::Moderate)).unwrap();
        assert_eq!(estimate.bmr, 1674);
        // 1674 * 1.55 = 2594.7
        assert_eq!(estimate.tdee, Some(2595));
        assert_eq!(estimate.activity_multiplier, Some(1.55));
    }

    #[test]
    fn test_bmr_only_mode() {
        let estimate = estimate_energy(&reference_male(), None).unwrap();
        assert_eq!(estimate.bmr, 1674);
        assert_eq!(estimate.tdee, None);
        let json = serde_json::to_value(estimate).unwrap();
        assert!(json.get("tdee").is_none());
    }

    #[rstest]
    #[case(ActivityLevel::Sedentary, 2009)]
    #[case(ActivityLevel::Light, 2302)]
    #[case(ActivityLevel::Moderate, 2595)]
    #[case(ActivityLevel::Active, 2888)]
    #[case(ActivityLevel::VeryActive, 3181)]
    fn test_tdee_per_activity_level(#[case] activity: ActivityLevel, #[case] expected: i32) {
        assert_eq!(estimate_tdee(1674, activity), expected);
    }

    #[test]
    fn test_invalid_input_rejected() {
        let input = AnthropometricInput { height_cm: 0.0, ..reference_male() };
        let err = estimate_bmr(&input).unwrap_err();
        assert_eq!(err.field, "height_cm");

        let input = AnthropometricInput { age_years: 0, ..reference_male() };
        assert!(estimate_energy(&input, Some(ActivityLevel::Light)).is_err());
    }

    #[test]
    fn test_non_positive_bmr_rejected() {
        // 200 + 312.5 - 750 - 161 = -398.5
        let input = AnthropometricInput {
            weight_kg: 20.0,
            height_cm: 50.0,
            age_years: 150,
            gender: Gender::Female,
        };
        assert!(calculate_bmr_mifflin(20.0, 50.0, 150, Gender::Female) < 0.0);
        let err = estimate_energy(&input, Some(ActivityLevel::Moderate)).unwrap_err();
        assert_eq!(err.field, "age_years");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: BMR is always positive for realistic inputs
        #[test]
        fn prop_bmr_positive(
            weight in 40.0f64..200.0,
            height in 140.0f64..210.0,
            age in 1u32..90
        ) {
            for gender in [Gender::Male, Gender::Female] {
                let input = AnthropometricInput { weight_kg: weight, height_cm: height, age_years: age, gender };
                prop_assert!(estimate_bmr(&input).unwrap() > 0);
            }
        }

        /// Property: male and female formulas differ by exactly 166 kcal
        #[test]
        fn prop_gender_gap_is_166(
            weight in 20.0f64..500.0,
            height in 50.0f64..300.0,
            age in 1u32..150
        ) {
            let male = calculate_bmr_mifflin(weight, height, age, Gender::Male);
            let female = calculate_bmr_mifflin(weight, height, age, Gender::Female);
            prop_assert!((male - female - 166.0).abs() < 1e-9);
        }

        /// Property: TDEE is the rounded product of BMR and multiplier
        #[test]
        fn prop_tdee_is_scaled_bmr(bmr in 500i32..5000, idx in 0usize..5) {
            let activity = ActivityLevel::ALL[idx];
            let tdee = estimate_tdee(bmr, activity);
            prop_assert_eq!(tdee, (bmr as f64 * activity.multiplier()).round() as i32);
            prop_assert!(tdee > bmr);
        }

        /// Property: identical input always yields identical output
        #[test]
        fn prop_estimate_is_idempotent(
            weight in 30.0f64..200.0,
            height in 120.0f64..220.0,
            age in 1u32..100,
            idx in 0usize..5
        ) {
            let input = AnthropometricInput { weight_kg: weight, height_cm: height, age_years: age, gender: Gender::Female };
            let activity = Some(ActivityLevel::ALL[idx]);
            prop_assert_eq!(estimate_energy(&input, activity), estimate_energy(&input, activity));
        }
    }
}
