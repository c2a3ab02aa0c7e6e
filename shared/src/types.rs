//! API request and response types
//!
//! Requests carry raw user input in the caller's unit system. Responses carry
//! whole-kcal energy figures and weights in the caller's unit system unless a
//! field name says otherwise (`_kg`, `_cm`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::bmi::BmiCategory;
use crate::goals::{AdjustmentSource, Goal, GoalAdjustment};
use crate::planner::CalculationResult;
use crate::profile::{ActivityLevel, Gender};
use crate::units::{EnergyUnit, UnitSystem, WeightUnit};

// ============================================================================
// Shared Request Parts
// ============================================================================

/// Body data as entered by the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyRequest {
    /// Weight in kg (metric) or lb (imperial)
    pub weight: f64,
    /// Height in cm (metric) or inches (imperial)
    pub height: f64,
    #[serde(default)]
    pub unit_system: UnitSystem,
    /// Age in whole years; takes precedence over `date_of_birth`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_years: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Gender,
}

// ============================================================================
// BMI
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiRequest {
    pub weight: f64,
    pub height: f64,
    #[serde(default)]
    pub unit_system: UnitSystem,
}

/// BMI information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiResponse {
    pub bmi: f64,
    pub category: BmiCategory,
    pub category_label: String,
    pub healthy_weight_min: f64,
    pub healthy_weight_max: f64,
    pub distance_from_healthy: f64,
    pub weight_unit: WeightUnit,
}

// ============================================================================
// Energy
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyRequest {
    #[serde(flatten)]
    pub body: BodyRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
}

/// BMR and TDEE in kcal/day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyResponse {
    pub bmr: i32,
    pub tdee: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_multiplier: Option<f64>,
    pub age_years: u32,
    pub unit: EnergyUnit,
}

// ============================================================================
// Goal Calories
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalCaloriesRequest {
    pub tdee: Option<i32>,
    #[serde(default)]
    pub goal: Goal,
    /// Current weight in the request's unit system
    pub weight: f64,
    #[serde(default)]
    pub unit_system: UnitSystem,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weeks_to_target: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalCaloriesResponse {
    pub goal_calories: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_adjustment_kcal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<AdjustmentSource>,
    /// Implied weekly weight change in `weight_unit` (negative = loss)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected_weekly_change: Option<f64>,
    pub weight_unit: WeightUnit,
}

impl GoalCaloriesResponse {
    pub fn from_adjustment(adjustment: Option<GoalAdjustment>, weight_unit: WeightUnit) -> Self {
        Self {
            goal_calories: adjustment.map(|a| a.goal_calories),
            daily_adjustment_kcal: adjustment.map(|a| a.daily_adjustment_kcal),
            source: adjustment.map(|a| a.source),
            projected_weekly_change: adjustment
                .map(|a| weight_unit.from_kg(a.projected_weekly_change_kg)),
            weight_unit,
        }
    }
}

// ============================================================================
// Macros
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacrosRequest {
    pub goal_calories: i32,
    pub weight: f64,
    #[serde(default)]
    pub unit_system: UnitSystem,
}

// ============================================================================
// Full Plan
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    #[serde(flatten)]
    pub body: BodyRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    #[serde(default)]
    pub goal: Goal,
    /// Target weight in the request's unit system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weeks_to_target: Option<u32>,
    #[serde(default)]
    pub energy_unit: EnergyUnit,
}

/// The normalized input the plan was computed from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedInput {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub unit_system: UnitSystem,
    /// Feet and inches, for imperial callers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_display: Option<String>,
}

/// Energy figures converted to a non-kcal display unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyDisplay {
    pub unit: EnergyUnit,
    pub bmr: f64,
    pub tdee: Option<f64>,
    pub goal_calories: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    #[serde(flatten)]
    pub result: CalculationResult,
    pub bmi: BmiResponse,
    pub input: NormalizedInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_display: Option<EnergyDisplay>,
}

// ============================================================================
// Reference Tables
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLevelInfo {
    pub activity_level: ActivityLevel,
    pub multiplier: f64,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalInfo {
    pub goal: Goal,
    pub daily_delta_kcal: i32,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiCategoryInfo {
    pub category: BmiCategory,
    pub label: String,
    pub min: f64,
    /// Exclusive upper bound; absent for the open-ended top category
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceResponse {
    pub activity_levels: Vec<ActivityLevelInfo>,
    pub goals: Vec<GoalInfo>,
    pub bmi_categories: Vec<BmiCategoryInfo>,
}
