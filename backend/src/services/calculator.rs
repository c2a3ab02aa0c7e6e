//! Calculator service - runs the shared calculators and records usage metrics

use crate::error::ApiError;
use chrono::{NaiveDate, Utc};
use fitness_calculator_shared::calculators;
use fitness_calculator_shared::goals::AdjustmentSource;
use fitness_calculator_shared::types::{
    BmiRequest, BmiResponse, EnergyRequest, EnergyResponse, GoalCaloriesRequest,
    GoalCaloriesResponse, MacrosRequest, PlanRequest, PlanResponse, ReferenceResponse,
};
use fitness_calculator_shared::{EngineError, MacroAllocation};
use tracing::{debug, warn};

/// Calculator names used as the `calculator` metric label
pub mod names {
    pub const BMI: &str = "bmi";
    pub const ENERGY: &str = "energy";
    pub const GOAL_CALORIES: &str = "goal_calories";
    pub const MACROS: &str = "macros";
    pub const PLAN: &str = "plan";
}

/// Calculator service
pub struct CalculatorService;

impl CalculatorService {
    /// Count the request and, on failure, the validation failure
    fn record<T>(calculator: &'static str, result: Result<T, EngineError>) -> Result<T, ApiError> {
        metrics::counter!("calculator_requests_total", "calculator" => calculator).increment(1);

        result.map_err(|err| {
            if let EngineError::Validation(ref e) = err {
                metrics::counter!("calculator_validation_failures_total", "calculator" => calculator)
                    .increment(1);
                debug!(calculator, field = %e.field, "Rejected calculator input");
            }
            ApiError::from(err)
        })
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    pub fn bmi(req: &BmiRequest) -> Result<BmiResponse, ApiError> {
        let resp = Self::record(names::BMI, calculators::bmi(req))?;
        debug!(bmi = resp.bmi, category = ?resp.category, "Calculated BMI");
        Ok(resp)
    }

    pub fn energy(req: &EnergyRequest) -> Result<EnergyResponse, ApiError> {
        let resp = Self::record(names::ENERGY, calculators::energy(req, Self::today()))?;
        debug!(bmr = resp.bmr, tdee = ?resp.tdee, "Estimated energy expenditure");
        Ok(resp)
    }

    pub fn goal_calories(req: &GoalCaloriesRequest) -> Result<GoalCaloriesResponse, ApiError> {
        let resp = Self::record(names::GOAL_CALORIES, calculators::goal_calories(req))?;
        if req.target_weight.is_some() && resp.source == Some(AdjustmentSource::FixedDelta) {
            warn!(goal = ?req.goal, "Target weight not usable for goal, applied fixed delta");
        }
        debug!(goal_calories = ?resp.goal_calories, source = ?resp.source, "Adjusted goal calories");
        Ok(resp)
    }

    pub fn macros(req: &MacrosRequest) -> Result<MacroAllocation, ApiError> {
        let resp = Self::record(names::MACROS, calculators::macros(req))?;
        debug!(goal_calories = req.goal_calories, "Allocated macros");
        Ok(resp)
    }

    /// Full plan: BMI, energy, goal calories and macros in one call
    pub fn plan(req: &PlanRequest) -> Result<PlanResponse, ApiError> {
        let resp = Self::record(names::PLAN, calculators::plan(req, Self::today()))?;

        let source = resp.result.adjustment.map(|a| a.source);
        if req.target_weight.is_some() && source == Some(AdjustmentSource::FixedDelta) {
            warn!(goal = ?req.goal, "Target weight not usable for goal, applied fixed delta");
        }
        debug!(
            bmr = resp.result.bmr,
            tdee = ?resp.result.tdee,
            goal_calories = ?resp.result.goal_calories,
            "Calculated plan"
        );
        Ok(resp)
    }

    pub fn reference() -> ReferenceResponse {
        calculators::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use fitness_calculator_shared::types::BodyRequest;
    use fitness_calculator_shared::{Gender, Goal, UnitSystem};

    fn plan_request() -> PlanRequest {
        PlanRequest {
            body: BodyRequest {
                weight: 70.0,
                height: 175.0,
                unit_system: UnitSystem::Metric,
                age_years: Some(25),
                date_of_birth: None,
                gender: Gender::Male,
            },
            activity_level: Some(fitness_calculator_shared::ActivityLevel::Moderate),
            goal: Goal::WeightLoss,
            target_weight: None,
            weeks_to_target: None,
            energy_unit: Default::default(),
        }
    }

    #[test]
    fn test_plan_passes_through() {
        let resp = CalculatorService::plan(&plan_request()).unwrap();
        assert_eq!(resp.result.goal_calories, Some(2095));
    }

    #[test]
    fn test_validation_failure_maps_to_api_error() {
        let mut req = plan_request();
        req.body.weight = 5.0;
        match CalculatorService::plan(&req) {
            Err(ApiError::Validation(e)) => assert_eq!(e.field, "weight"),
            other => panic!("unexpected result: {:?}", other.map(|r| r.result)),
        }
    }

    #[test]
    fn test_energy_from_date_of_birth_uses_today() {
        let dob = CalculatorService::today()
            .with_year(1990)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(1990, 3, 1).unwrap());
        let mut req = plan_request();
        req.body.age_years = None;
        req.body.date_of_birth = Some(dob);
        let resp = CalculatorService::energy(&EnergyRequest {
            body: req.body,
            activity_level: None,
        })
        .unwrap();
        assert!(resp.age_years >= 35);
        assert_eq!(resp.tdee, None);
    }
}
