//! Calculator API routes

use crate::error::{ApiError, ApiResult};
use crate::services::CalculatorService;
use crate::state::AppState;
use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Json, Router,
};
use fitness_calculator_shared::types::{
    BmiRequest, BmiResponse, EnergyRequest, EnergyResponse, GoalCaloriesRequest,
    GoalCaloriesResponse, MacrosRequest, PlanRequest, PlanResponse, ReferenceResponse,
};
use fitness_calculator_shared::MacroAllocation;

/// Create calculator routes
pub fn calculator_routes() -> Router<AppState> {
    Router::new()
        .route("/bmi", post(calculate_bmi))
        .route("/energy", post(calculate_energy))
        .route("/goal-calories", post(calculate_goal_calories))
        .route("/macros", post(calculate_macros))
        .route("/plan", post(calculate_plan))
        .route("/reference", get(get_reference))
}

/// POST /api/v1/calculators/bmi
async fn calculate_bmi(
    payload: Result<Json<BmiRequest>, JsonRejection>,
) -> ApiResult<Json<BmiResponse>> {
    let Json(req) = payload.map_err(ApiError::from)?;
    Ok(Json(CalculatorService::bmi(&req)?))
}

/// POST /api/v1/calculators/energy
async fn calculate_energy(
    payload: Result<Json<EnergyRequest>, JsonRejection>,
) -> ApiResult<Json<EnergyResponse>> {
    let Json(req) = payload.map_err(ApiError::from)?;
    Ok(Json(CalculatorService::energy(&req)?))
}

/// POST /api/v1/calculators/goal-calories
async fn calculate_goal_calories(
    payload: Result<Json<GoalCaloriesRequest>, JsonRejection>,
) -> ApiResult<Json<GoalCaloriesResponse>> {
    let Json(req) = payload.map_err(ApiError::from)?;
    Ok(Json(CalculatorService::goal_calories(&req)?))
}

/// POST /api/v1/calculators/macros
async fn calculate_macros(
    payload: Result<Json<MacrosRequest>, JsonRejection>,
) -> ApiResult<Json<MacroAllocation>> {
    let Json(req) = payload.map_err(ApiError::from)?;
    Ok(Json(CalculatorService::macros(&req)?))
}

/// POST /api/v1/calculators/plan - BMI, energy, goal calories and macros
async fn calculate_plan(
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> ApiResult<Json<PlanResponse>> {
    let Json(req) = payload.map_err(ApiError::from)?;
    Ok(Json(CalculatorService::plan(&req)?))
}

/// GET /api/v1/calculators/reference - multipliers, goal deltas and BMI bands
async fn get_reference() -> Json<ReferenceResponse> {
    Json(CalculatorService::reference())
}
