//! Goal calorie adjustment
//!
//! Turns a TDEE into a daily calorie target. A target weight with a timeframe
//! takes precedence when it points the same way as the goal; otherwise the
//! fixed per-goal delta applies.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::validation::MAX_DAILY_KCAL;

/// Energy stored in one kilogram of body mass
pub const KCAL_PER_KG: f64 = 7700.0;

/// Weight goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    #[default]
    Maintenance,
    #[serde(alias = "mildLoss")]
    MildLoss,
    #[serde(alias = "weightLoss")]
    WeightLoss,
    #[serde(alias = "extremeLoss")]
    ExtremeLoss,
    #[serde(alias = "mildGain")]
    MildGain,
    #[serde(alias = "weightGain")]
    WeightGain,
}

/// Which way a goal moves body weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalDirection {
    Maintain,
    Lose,
    Gain,
}

impl Goal {
    pub const ALL: [Goal; 6] = [
        Goal::Maintenance,
        Goal::MildLoss,
        Goal::WeightLoss,
        Goal::ExtremeLoss,
        Goal::MildGain,
        Goal::WeightGain,
    ];

    /// Fixed daily calorie delta applied to TDEE
    pub const fn daily_delta_kcal(&self) -> i32 {
        match self {
            Goal::Maintenance => 0,
            Goal::MildLoss => -250,
            Goal::WeightLoss => -500,
            Goal::ExtremeLoss => -750,
            Goal::MildGain => 250,
            Goal::WeightGain => 500,
        }
    }

    pub const fn direction(&self) -> GoalDirection {
        match self {
            Goal::Maintenance => GoalDirection::Maintain,
            Goal::MildLoss | Goal::WeightLoss | Goal::ExtremeLoss => GoalDirection::Lose,
            Goal::MildGain | Goal::WeightGain => GoalDirection::Gain,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Maintenance => "maintenance",
            Goal::MildLoss => "mild_loss",
            Goal::WeightLoss => "weight_loss",
            Goal::ExtremeLoss => "extreme_loss",
            Goal::MildGain => "mild_gain",
            Goal::WeightGain => "weight_gain",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Goal::Maintenance => "Maintain weight",
            Goal::MildLoss => "Mild weight loss (0.25 kg/week)",
            Goal::WeightLoss => "Weight loss (0.5 kg/week)",
            Goal::ExtremeLoss => "Extreme weight loss (0.75 kg/week)",
            Goal::MildGain => "Mild weight gain (0.25 kg/week)",
            Goal::WeightGain => "Weight gain (0.5 kg/week)",
        }
    }
}

/// Target weight reached over a number of weeks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalTarget {
    pub target_weight_kg: f64,
    pub weeks_to_target: u32,
}

/// Where the goal calorie figure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentSource {
    Maintenance,
    FixedDelta,
    TargetTimeframe,
}

/// Goal calories with the adjustment that produced them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalAdjustment {
    pub goal_calories: i32,
    /// Signed kcal/day added to TDEE (negative for a deficit)
    pub daily_adjustment_kcal: f64,
    pub source: AdjustmentSource,
    /// Signed kg/week implied by the adjustment
    pub projected_weekly_change_kg: f64,
}

impl GoalAdjustment {
    /// Reject an adjustment that leaves no usable daily calorie target.
    ///
    /// The error names `weeks_to_target` when a timeframe drove the
    /// adjustment and `goal` otherwise.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let field = match self.source {
            AdjustmentSource::TargetTimeframe => "weeks_to_target",
            _ => "goal",
        };
        if self.goal_calories <= 0 {
            return Err(ValidationError::new(
                field,
                "leaves no positive daily calorie target",
            ));
        }
        if self.goal_calories > MAX_DAILY_KCAL {
            return Err(ValidationError::new(
                field,
                "daily calorie target unreasonably high",
            ));
        }
        Ok(())
    }
}

/// Whether `target` can drive the adjustment for `goal`
pub fn target_applies(goal: Goal, weight_kg: f64, target: &GoalTarget) -> bool {
    if target.weeks_to_target == 0 {
        return false;
    }
    match goal.direction() {
        GoalDirection::Lose => target.target_weight_kg < weight_kg,
        GoalDirection::Gain => target.target_weight_kg > weight_kg,
        GoalDirection::Maintain => false,
    }
}

/// Full goal adjustment for a known TDEE
pub fn plan_goal_adjustment(
    tdee: i32,
    goal: Goal,
    weight_kg: f64,
    target: Option<&GoalTarget>,
) -> GoalAdjustment {
    let (goal_calories, daily_adjustment_kcal, source) = match target {
        _ if goal.direction() == GoalDirection::Maintain => {
            (tdee, 0.0, AdjustmentSource::Maintenance)
        }
        Some(t) if target_applies(goal, weight_kg, t) => {
            let total_kcal = (weight_kg - t.target_weight_kg).abs() * KCAL_PER_KG;
            let daily = total_kcal / (t.weeks_to_target as f64 * 7.0);
            let signed = match goal.direction() {
                GoalDirection::Lose => -daily,
                _ => daily,
            };
            (
                (tdee as f64 + signed).round() as i32,
                signed,
                AdjustmentSource::TargetTimeframe,
            )
        }
        _ => {
            let delta = goal.daily_delta_kcal();
            (tdee + delta, delta as f64, AdjustmentSource::FixedDelta)
        }
    };

    GoalAdjustment {
        goal_calories,
        daily_adjustment_kcal,
        source,
        projected_weekly_change_kg: daily_adjustment_kcal * 7.0 / KCAL_PER_KG,
    }
}

/// Goal calories, absent when TDEE is absent
pub fn adjust_goal_calories(
    tdee: Option<i32>,
    goal: Goal,
    weight_kg: f64,
    target: Option<&GoalTarget>,
) -> Option<i32> {
    tdee.map(|t| plan_goal_adjustment(t, goal, weight_kg, target).goal_calories)
}
