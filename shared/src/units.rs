//! Unit conversion and normalization module
//!
//! Every calculator works in metric units (kg, cm). Raw user input arrives in
//! either the metric or the imperial system and is normalized exactly once,
//! through [`normalize`], before any calculation runs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;

/// Metres per inch
pub const METERS_PER_INCH: f64 = 0.0254;

/// Kilojoules per kilocalorie
pub const KJ_PER_KCAL: f64 = 4.184;

// ============================================================================
// Unit System
// ============================================================================

/// Measurement system chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Weight in kilograms, height in centimetres
    #[default]
    Metric,
    /// Weight in pounds, height in inches
    Imperial,
}

impl UnitSystem {
    pub fn weight_unit(&self) -> WeightUnit {
        match self {
            UnitSystem::Metric => WeightUnit::Kg,
            UnitSystem::Imperial => WeightUnit::Lbs,
        }
    }

    pub fn height_unit(&self) -> HeightUnit {
        match self {
            UnitSystem::Metric => HeightUnit::Cm,
            UnitSystem::Imperial => HeightUnit::Inches,
        }
    }
}

// ============================================================================
// Weight Units
// ============================================================================

/// Weight unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    /// Convert from this unit to kilograms
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lbs => value * KG_PER_LB,
        }
    }

    /// Convert from kilograms to this unit
    pub fn from_kg(&self, kg: f64) -> f64 {
        match self {
            WeightUnit::Kg => kg,
            WeightUnit::Lbs => kg / KG_PER_LB,
        }
    }

}

// ============================================================================
// Height Units
// ============================================================================

/// Height unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Cm,
    Inches,
}

impl HeightUnit {
    /// Convert from this unit to metres
    pub fn to_meters(&self, value: f64) -> f64 {
        match self {
            HeightUnit::Cm => value / 100.0,
            HeightUnit::Inches => value * METERS_PER_INCH,
        }
    }

    /// Convert from this unit to centimetres
    pub fn to_cm(&self, value: f64) -> f64 {
        match self {
            HeightUnit::Cm => value,
            HeightUnit::Inches => value * METERS_PER_INCH * 100.0,
        }
    }
}

// ============================================================================
// Energy Units
// ============================================================================

/// Energy unit for display; calculations always run in kcal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnergyUnit {
    #[default]
    Kcal,
    Kj,
}

impl EnergyUnit {
    /// Convert from kcal to this unit
    pub fn from_kcal(&self, kcal: f64) -> f64 {
        match self {
            EnergyUnit::Kcal => kcal,
            EnergyUnit::Kj => kcal * KJ_PER_KCAL,
        }
    }

}

// ============================================================================
// Normalization
// ============================================================================

/// Weight and height as entered by the user
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawMeasurements {
    pub weight: f64,
    pub height: f64,
    pub system: UnitSystem,
}

/// Weight and height in metric units
///
/// `height_m` is converted straight from the raw value so BMI does not pick
/// up a centimetre round trip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricMeasurements {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub height_m: f64,
}

/// Convert raw measurements to metric. The single conversion point for
/// user-supplied body measurements.
pub fn normalize(raw: RawMeasurements) -> MetricMeasurements {
    let height_unit = raw.system.height_unit();
    MetricMeasurements {
        weight_kg: raw.system.weight_unit().to_kg(raw.weight),
        height_cm: height_unit.to_cm(raw.height),
        height_m: height_unit.to_meters(raw.height),
    }
}

// ============================================================================
// Height Display Helper
// ============================================================================

/// Height in feet and inches for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeetInchesHeight {
    pub feet: i32,
    pub inches: f64,
}

impl FeetInchesHeight {
    /// Split whole inches into feet and inches; 71.6" reads as 6'0"
    pub fn from_total_inches(total_inches: f64) -> Self {
        let whole = total_inches.round();
        let feet = (whole / 12.0).floor() as i32;
        let inches = whole - feet as f64 * 12.0;
        Self { feet, inches }
    }

    pub fn from_cm(cm: f64) -> Self {
        Self::from_total_inches(cm / 100.0 / METERS_PER_INCH)
    }
}

impl fmt::Display for FeetInchesHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'{:.0}\"", self.feet, self.inches)
    }
}
