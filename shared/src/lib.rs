//! Fitness Calculator Shared Library
//!
//! The calculation engine behind the backend API and the WASM bindings:
//! BMR/TDEE estimation, goal calorie adjustment, macro allocation and BMI
//! classification, plus the request/response types both surfaces share.

pub mod bmi;
pub mod calculators;
pub mod energy;
pub mod errors;
pub mod goals;
pub mod macronutrients;
pub mod planner;
pub mod profile;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use bmi::{calculate_bmi, calculate_bmi_result, classify_bmi, BmiCategory, BmiResult};
pub use energy::{estimate_bmr, estimate_energy, estimate_tdee, EnergyEstimate};
pub use errors::*;
pub use goals::{adjust_goal_calories, plan_goal_adjustment, Goal, GoalAdjustment, GoalTarget};
pub use macronutrients::{allocate_macros, MacroAllocation, MacroRange};
pub use planner::{calculate_plan, CalculationResult, PlanInput};
pub use profile::{ActivityLevel, AnthropometricInput, Gender};
pub use types::*;
pub use units::*;
