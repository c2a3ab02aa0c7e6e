//! Request-level calculator entry points
//!
//! Each function takes a raw request, applies the human-range checks from
//! [`crate::validation`], normalizes to metric once and hands the result to
//! the engine. The backend handlers and the WASM bindings both call these, so
//! the two surfaces cannot drift apart.

use chrono::NaiveDate;

use crate::bmi::{calculate_bmi_result, BMI_BANDS};
use crate::energy::estimate_energy;
use crate::errors::{EngineError, ValidationError};
use crate::goals::{plan_goal_adjustment, Goal, GoalTarget};
use crate::macronutrients::{allocate_macros, MacroAllocation};
use crate::planner::{calculate_plan, CalculationResult, PlanInput};
use crate::profile::{ActivityLevel, AnthropometricInput};
use crate::types::*;
use crate::units::{
    normalize, EnergyUnit, FeetInchesHeight, MetricMeasurements, RawMeasurements, UnitSystem,
};
use crate::validation::{
    validate_age_years, validate_date_of_birth, validate_goal_calories, validate_height_cm,
    validate_tdee, validate_weeks_to_target, validate_weight_kg,
};

fn metric_body(weight: f64, height: f64, system: UnitSystem) -> Result<MetricMeasurements, ValidationError> {
    let body = normalize(RawMeasurements {
        weight,
        height,
        system,
    });
    validate_weight_kg("weight", body.weight_kg)?;
    validate_height_cm(body.height_cm)?;
    Ok(body)
}

/// Resolve age from either an explicit value or a date of birth
fn resolve_age(req: &BodyRequest, today: NaiveDate) -> Result<u32, ValidationError> {
    match (req.age_years, req.date_of_birth) {
        (Some(age), _) => {
            validate_age_years(age)?;
            Ok(age)
        }
        (None, Some(dob)) => validate_date_of_birth(dob, today),
        (None, None) => Err(ValidationError::new(
            "age_years",
            "either age_years or date_of_birth is required",
        )),
    }
}

fn anthropometrics(
    req: &BodyRequest,
    today: NaiveDate,
) -> Result<(AnthropometricInput, MetricMeasurements), ValidationError> {
    let body = metric_body(req.weight, req.height, req.unit_system)?;
    let age_years = resolve_age(req, today)?;
    let input = AnthropometricInput {
        weight_kg: body.weight_kg,
        height_cm: body.height_cm,
        age_years,
        gender: req.gender,
    };
    Ok((input, body))
}

/// Build a goal target from request fields given in `system` units.
///
/// A target weight without a timeframe is kept with zero weeks, which the
/// goal adjuster treats as "fall back to the fixed delta".
fn goal_target(
    target_weight: Option<f64>,
    weeks_to_target: Option<u32>,
    system: UnitSystem,
) -> Result<Option<GoalTarget>, ValidationError> {
    let Some(target_weight) = target_weight else {
        return Ok(None);
    };
    let target_weight_kg = system.weight_unit().to_kg(target_weight);
    validate_weight_kg("target_weight", target_weight_kg)?;

    let weeks_to_target = weeks_to_target.unwrap_or(0);
    validate_weeks_to_target(weeks_to_target)?;

    Ok(Some(GoalTarget {
        target_weight_kg,
        weeks_to_target,
    }))
}

fn bmi_response(body: &MetricMeasurements, system: UnitSystem) -> Result<BmiResponse, ValidationError> {
    let result = calculate_bmi_result(body)?;
    let unit = system.weight_unit();
    let (min_kg, max_kg) = result.healthy_weight_range_kg;

    Ok(BmiResponse {
        bmi: result.value,
        category: result.category,
        category_label: result.category.label().to_string(),
        healthy_weight_min: round_to(unit.from_kg(min_kg), 1),
        healthy_weight_max: round_to(unit.from_kg(max_kg), 1),
        distance_from_healthy: round_to(unit.from_kg(result.distance_from_healthy_kg), 1),
        weight_unit: unit,
    })
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// BMI with category and healthy weight range
pub fn bmi(req: &BmiRequest) -> Result<BmiResponse, EngineError> {
    let body = metric_body(req.weight, req.height, req.unit_system)?;
    Ok(bmi_response(&body, req.unit_system)?)
}

/// BMR, and TDEE when an activity level is given
pub fn energy(req: &EnergyRequest, today: NaiveDate) -> Result<EnergyResponse, EngineError> {
    let (input, _) = anthropometrics(&req.body, today)?;
    let estimate = estimate_energy(&input, req.activity_level)?;

    Ok(EnergyResponse {
        bmr: estimate.bmr,
        tdee: estimate.tdee,
        activity_multiplier: estimate.activity_multiplier,
        age_years: input.age_years,
        unit: EnergyUnit::Kcal,
    })
}

/// Goal calories for a caller-supplied TDEE
pub fn goal_calories(req: &GoalCaloriesRequest) -> Result<GoalCaloriesResponse, EngineError> {
    if let Some(tdee) = req.tdee {
        validate_tdee(tdee)?;
    }
    let weight_kg = req.unit_system.weight_unit().to_kg(req.weight);
    validate_weight_kg("weight", weight_kg)?;
    let target = goal_target(req.target_weight, req.weeks_to_target, req.unit_system)?;

    let adjustment = req
        .tdee
        .map(|tdee| plan_goal_adjustment(tdee, req.goal, weight_kg, target.as_ref()));
    if let Some(adjustment) = &adjustment {
        adjustment.validate()?;
    }

    Ok(GoalCaloriesResponse::from_adjustment(
        adjustment,
        req.unit_system.weight_unit(),
    ))
}

/// Macro ranges for a calorie goal
pub fn macros(req: &MacrosRequest) -> Result<MacroAllocation, EngineError> {
    validate_goal_calories(req.goal_calories)?;
    let weight_kg = req.unit_system.weight_unit().to_kg(req.weight);
    validate_weight_kg("weight", weight_kg)?;
    Ok(allocate_macros(req.goal_calories, weight_kg))
}

fn energy_display(result: &CalculationResult, unit: EnergyUnit) -> Option<EnergyDisplay> {
    if unit == EnergyUnit::Kcal {
        return None;
    }
    let convert = |kcal: i32| unit.from_kcal(kcal as f64).round();
    Some(EnergyDisplay {
        unit,
        bmr: convert(result.bmr),
        tdee: result.tdee.map(convert),
        goal_calories: result.goal_calories.map(convert),
    })
}

/// The full daily plan: BMI, energy, goal calories and macros
pub fn plan(req: &PlanRequest, today: NaiveDate) -> Result<PlanResponse, EngineError> {
    let (body, metric) = anthropometrics(&req.body, today)?;
    let system = req.body.unit_system;
    let goal_target = goal_target(req.target_weight, req.weeks_to_target, system)?;

    let result = calculate_plan(&PlanInput {
        body,
        activity_level: req.activity_level,
        goal: req.goal,
        goal_target,
    })?;

    let height_display = match system {
        UnitSystem::Imperial => Some(FeetInchesHeight::from_cm(metric.height_cm).to_string()),
        UnitSystem::Metric => None,
    };

    Ok(PlanResponse {
        bmi: bmi_response(&metric, system)?,
        input: NormalizedInput {
            weight_kg: round_to(metric.weight_kg, 2),
            height_cm: round_to(metric.height_cm, 1),
            age_years: body.age_years,
            unit_system: system,
            height_display,
        },
        energy_display: energy_display(&result, req.energy_unit),
        result,
    })
}

/// Parse a JSON plan request and return the JSON plan response
pub fn plan_json(json: &str, today: NaiveDate) -> Result<String, EngineError> {
    let req: PlanRequest = serde_json::from_str(json)?;
    let response = plan(&req, today)?;
    Ok(serde_json::to_string(&response)?)
}

/// Lookup tables behind the calculators
pub fn reference() -> ReferenceResponse {
    ReferenceResponse {
        activity_levels: ActivityLevel::ALL
            .iter()
            .map(|level| ActivityLevelInfo {
                activity_level: *level,
                multiplier: level.multiplier(),
                description: level.description().to_string(),
            })
            .collect(),
        goals: Goal::ALL
            .iter()
            .map(|goal| GoalInfo {
                goal: *goal,
                daily_delta_kcal: goal.daily_delta_kcal(),
                description: goal.description().to_string(),
            })
            .collect(),
        bmi_categories: BMI_BANDS
            .iter()
            .map(|band| BmiCategoryInfo {
                category: band.category,
                label: band.category.label().to_string(),
                min: band.lower,
                max: band.upper.is_finite().then_some(band.upper),
            })
            .collect(),
    }
}
