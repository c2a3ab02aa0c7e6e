//! Composition of the four calculators into one daily plan

use serde::{Deserialize, Serialize};

use crate::energy::estimate_energy;
use crate::errors::ValidationError;
use crate::goals::{plan_goal_adjustment, Goal, GoalAdjustment, GoalTarget};
use crate::macronutrients::{allocate_macros, MacroAllocation};
use crate::profile::{ActivityLevel, AnthropometricInput};

/// Everything the planner needs, already in metric units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanInput {
    pub body: AnthropometricInput,
    pub activity_level: Option<ActivityLevel>,
    pub goal: Goal,
    pub goal_target: Option<GoalTarget>,
}

/// Derived daily energy and macro figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub bmr: i32,
    pub tdee: Option<i32>,
    pub goal_calories: Option<i32>,
    #[serde(flatten)]
    pub macros: Option<MacroAllocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment: Option<GoalAdjustment>,
}

/// Run BMR, TDEE, goal adjustment and macro allocation in sequence.
///
/// Without an activity level only the BMR is produced; goal calories and
/// macro ranges need a TDEE.
///
/// # Errors
///
/// Returns a [`ValidationError`] when the body input is not usable or the
/// goal adjustment leaves no positive calorie target.
pub fn calculate_plan(input: &PlanInput) -> Result<CalculationResult, ValidationError> {
    let energy = estimate_energy(&input.body, input.activity_level)?;

    let adjustment = energy.tdee.map(|tdee| {
        plan_goal_adjustment(
            tdee,
            input.goal,
            input.body.weight_kg,
            input.goal_target.as_ref(),
        )
    });
    if let Some(adjustment) = &adjustment {
        adjustment.validate()?;
    }
    let goal_calories = adjustment.map(|a| a.goal_calories);
    let macros = goal_calories.map(|calories| allocate_macros(calories, input.body.weight_kg));

    Ok(CalculationResult {
        bmr: energy.bmr,
        tdee: energy.tdee,
        goal_calories,
        macros,
        adjustment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::AdjustmentSource;
    use crate::macronutrients::MacroRange;
    use crate::profile::Gender;

    fn reference_input() -> PlanInput {
        PlanInput {
            body: AnthropometricInput {
                weight_kg: 70.0,
                height_cm: 175.0,
                age_years: 25,
                gender: Gender::Male,
            },
            activity_level: Some(ActivityLevel::Moderate),
            goal: Goal::WeightLoss,
            goal_target: None,
        }
    }

    #[test]
    fn test_reference_plan() {
        let result = calculate_plan(&reference_input()).unwrap();
        assert_eq!(result.bmr, 1674);
        assert_eq!(result.tdee, Some(2595));
        assert_eq!(result.goal_calories, Some(2095));

        let macros = result.macros.unwrap();
        assert_eq!(macros.protein_range_g, MacroRange { min: 112, max: 154 });
        assert_eq!(macros.fat_range_g, MacroRange { min: 47, max: 70 });
        assert_eq!(macros.carb_range_g, MacroRange { min: 212, max: 306 });
        assert_eq!(result.adjustment.unwrap().source, AdjustmentSource::FixedDelta);
    }

    #[test]
    fn test_bmr_only_plan() {
        let input = PlanInput { activity_level: None, ..reference_input() };
        let result = calculate_plan(&input).unwrap();
        assert_eq!(result.bmr, 1674);
        assert_eq!(result.tdee, None);
        assert_eq!(result.goal_calories, None);
        assert!(result.macros.is_none());

        let json = serde_json::to_value(result).unwrap();
        assert!(json["tdee"].is_null());
        assert!(json.get("protein_range_g").is_none());
    }

    #[test]
    fn test_macro_ranges_flatten_into_result() {
        let json = serde_json::to_value(calculate_plan(&reference_input()).unwrap()).unwrap();
        assert_eq!(json["goal_calories"], 2095);
        assert_eq!(json["protein_range_g"]["max"], 154);
        assert_eq!(json["fat_range_g"]["min"], 47);
        assert_eq!(json["carb_range_g"]["min"], 212);
    }

    #[test]
    fn test_plan_is_idempotent() {
        let input = reference_input();
        assert_eq!(calculate_plan(&input), calculate_plan(&input));
    }

    #[test]
    fn test_invalid_body_rejected() {
        let mut input = reference_input();
        input.body.weight_kg = 0.0;
        assert_eq!(calculate_plan(&input).unwrap_err().field, "weight_kg");
    }

    #[test]
    fn test_unreachable_target_rejected() {
        let mut input = reference_input();
        input.body.weight_kg = 120.0;
        input.goal_target = Some(GoalTarget { target_weight_kg: 60.0, weeks_to_target: 1 });
        assert_eq!(calculate_plan(&input).unwrap_err().field, "weeks_to_target");
    }

    #[test]
    fn test_extreme_body_rejected() {
        let mut input = reference_input();
        input.body = AnthropometricInput {
            weight_kg: 20.0,
            height_cm: 50.0,
            age_years: 150,
            gender: Gender::Female,
        };
        assert_eq!(calculate_plan(&input).unwrap_err().field, "age_years");
    }
}
