//! Input validation functions
//!
//! Two layers live here. [`ensure_positive`] is the minimal guard the
//! calculators apply themselves so that degenerate input never turns into
//! NaN or infinity. The `validate_*` functions are the stricter, human-range
//! checks applied to raw request data before it reaches the engine.

use chrono::NaiveDate;

use crate::errors::ValidationError;

/// Upper bound for any daily calorie figure
pub const MAX_DAILY_KCAL: i32 = 20_000;

/// Reject zero, negative and non-finite values
pub fn ensure_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_nan() || value.is_infinite() {
        return Err(ValidationError::new(field, "must be a valid number"));
    }
    if value <= 0.0 {
        return Err(ValidationError::new(field, "must be greater than zero"));
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight_kg(field: &str, weight_kg: f64) -> Result<(), ValidationError> {
    ensure_positive(field, weight_kg)?;
    if weight_kg < 20.0 {
        return Err(ValidationError::new(field, "must be at least 20 kg"));
    }
    if weight_kg > 500.0 {
        return Err(ValidationError::new(field, "must be at most 500 kg"));
    }
    Ok(())
}

/// Validate height value (in cm)
/// Valid range: 50-300 cm
pub fn validate_height_cm(height_cm: f64) -> Result<(), ValidationError> {
    ensure_positive("height_cm", height_cm)?;
    if height_cm < 50.0 {
        return Err(ValidationError::new("height_cm", "must be at least 50 cm"));
    }
    if height_cm > 300.0 {
        return Err(ValidationError::new("height_cm", "must be at most 300 cm"));
    }
    Ok(())
}

/// Validate age in whole years
pub fn validate_age_years(age_years: u32) -> Result<(), ValidationError> {
    if age_years < 1 {
        return Err(ValidationError::new("age_years", "must be at least 1 year"));
    }
    if age_years > 150 {
        return Err(ValidationError::new("age_years", "cannot exceed 150 years"));
    }
    Ok(())
}

/// Validate a date of birth against `today` and return the age in whole years
pub fn validate_date_of_birth(dob: NaiveDate, today: NaiveDate) -> Result<u32, ValidationError> {
    if dob > today {
        return Err(ValidationError::new(
            "date_of_birth",
            "cannot be in the future",
        ));
    }

    match today.years_since(dob) {
        Some(age) if age < 1 => Err(ValidationError::new(
            "date_of_birth",
            "age must be at least 1 year",
        )),
        Some(age) if age > 150 => Err(ValidationError::new(
            "date_of_birth",
            "age cannot exceed 150 years",
        )),
        Some(age) => Ok(age),
        None => Err(ValidationError::new("date_of_birth", "invalid date of birth")),
    }
}

/// Validate a goal timeframe; zero is accepted and means "no timeframe"
pub fn validate_weeks_to_target(weeks: u32) -> Result<(), ValidationError> {
    if weeks > 520 {
        return Err(ValidationError::new(
            "weeks_to_target",
            "cannot exceed 520 weeks",
        ));
    }
    Ok(())
}

/// Validate a daily calorie value
pub fn validate_goal_calories(calories: i32) -> Result<(), ValidationError> {
    if calories <= 0 {
        return Err(ValidationError::new(
            "goal_calories",
            "must be greater than zero",
        ));
    }
    if calories > MAX_DAILY_KCAL {
        return Err(ValidationError::new(
            "goal_calories",
            "calorie value unreasonably high",
        ));
    }
    Ok(())
}

/// Validate a TDEE supplied directly by the caller
pub fn validate_tdee(tdee: i32) -> Result<(), ValidationError> {
    if tdee <= 0 || tdee > MAX_DAILY_KCAL {
        return Err(ValidationError::new("tdee", "must be between 1 and 20000 kcal"));
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "weight" | "weight_kg" => "Current Weight",
        "height" | "height_cm" => "Height",
        "age_years" => "Age",
        "date_of_birth" => "Date of Birth",
        "gender" => "Gender",
        "activity_level" => "Activity Level",
        "goal" => "Goal",
        "target_weight" | "target_weight_kg" => "Target Weight",
        "weeks_to_target" => "Weeks to Target",
        "goal_calories" => "Daily Calorie Goal",
        "tdee" => "Total Daily Energy Expenditure",
        "unit_system" => "Unit System",
        _ => field_name,
    }
}
