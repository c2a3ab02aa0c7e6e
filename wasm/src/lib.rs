//! Fitness Calculator WASM Module
//!
//! WebAssembly bindings so the browser can run the same calculators as the
//! backend without a round trip. Scalar functions return 0 for input they
//! cannot use; the JSON plan function reports errors.

use chrono::Utc;
use fitness_calculator_shared::{bmi, calculators, energy, ActivityLevel, AnthropometricInput, Gender};
use wasm_bindgen::prelude::*;

/// Calculate BMI from weight (kg) and height (cm), rounded to one decimal
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if !(weight_kg > 0.0 && height_cm > 0.0) {
        return 0.0;
    }
    bmi::calculate_bmi(weight_kg, height_cm)
}

/// BMI category label, e.g. "Healthy Weight"
#[wasm_bindgen]
pub fn classify_bmi(bmi_value: f64) -> String {
    bmi::classify_bmi(bmi_value).label().to_string()
}

/// Basal metabolic rate (Mifflin-St Jeor), whole kcal/day
#[wasm_bindgen]
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: u32, is_male: bool) -> i32 {
    let input = AnthropometricInput {
        weight_kg,
        height_cm,
        age_years,
        gender: if is_male { Gender::Male } else { Gender::Female },
    };
    energy::estimate_bmr(&input).unwrap_or(0)
}

/// TDEE for a BMR and an activity tag such as `moderate` or `very_active`
#[wasm_bindgen]
pub fn calculate_tdee(bmr: i32, activity: &str) -> i32 {
    match activity.parse::<ActivityLevel>() {
        Ok(level) if bmr > 0 => energy::estimate_tdee(bmr, level),
        _ => 0,
    }
}

/// Full plan from a JSON request, same shape as `POST /api/v1/calculators/plan`
#[wasm_bindgen]
pub fn calculate_plan(request_json: &str) -> Result<String, JsValue> {
    calculators::plan_json(request_json, Utc::now().date_naive())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
