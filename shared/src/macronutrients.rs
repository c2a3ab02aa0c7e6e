//! Macronutrient allocation
//!
//! Protein comes from body weight (1.6-2.2 g/kg), fat from a 20-30% share of
//! calories, and carbohydrate from what is left. The carbohydrate ceiling is
//! what remains after the protein and fat floors; the carbohydrate floor is
//! what remains after the protein and fat ceilings.

use serde::{Deserialize, Serialize};

pub const PROTEIN_G_PER_KG_MIN: f64 = 1.6;
pub const PROTEIN_G_PER_KG_MAX: f64 = 2.2;
pub const FAT_SHARE_MIN: f64 = 0.20;
pub const FAT_SHARE_MAX: f64 = 0.30;

pub const KCAL_PER_G_PROTEIN: i32 = 4;
pub const KCAL_PER_G_FAT: i32 = 9;
pub const KCAL_PER_G_CARB: i32 = 4;

/// Inclusive gram range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroRange {
    pub min: i32,
    pub max: i32,
}

/// Daily macro ranges in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroAllocation {
    pub protein_range_g: MacroRange,
    pub fat_range_g: MacroRange,
    pub carb_range_g: MacroRange,
}

fn round_g(value: f64) -> i32 {
    value.round() as i32
}

/// Carbohydrate grams left after protein and fat, never negative
fn remaining_carb_g(goal_calories: i32, protein_g: i32, fat_g: i32) -> i32 {
    let remaining_kcal = goal_calories - protein_g * KCAL_PER_G_PROTEIN - fat_g * KCAL_PER_G_FAT;
    round_g(remaining_kcal as f64 / KCAL_PER_G_CARB as f64).max(0)
}

/// Split goal calories into protein, fat and carbohydrate ranges
pub fn allocate_macros(goal_calories: i32, weight_kg: f64) -> MacroAllocation {
    let protein = MacroRange {
        min: round_g(weight_kg * PROTEIN_G_PER_KG_MIN),
        max: round_g(weight_kg * PROTEIN_G_PER_KG_MAX),
    };
    let fat = MacroRange {
        min: round_g(goal_calories as f64 * FAT_SHARE_MIN / KCAL_PER_G_FAT as f64),
        max: round_g(goal_calories as f64 * FAT_SHARE_MAX / KCAL_PER_G_FAT as f64),
    };
    let carb = MacroRange {
        min: remaining_carb_g(goal_calories, protein.max, fat.max),
        max: remaining_carb_g(goal_calories, protein.min, fat.min),
    };

    MacroAllocation {
        protein_range_g: protein,
        fat_range_g: fat,
        carb_range_g: carb,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reference_allocation() {
        let alloc = allocate_macros(2095, 70.0);
        assert_eq!(alloc.protein_range_g, MacroRange { min: 112, max: 154 });
        assert_eq!(alloc.fat_range_g, MacroRange { min: 47, max: 70 });
        // (2095 - 448 - 423) / 4 = 306; (2095 - 616 - 630) / 4 = 212.25
        assert_eq!(alloc.carb_range_g, MacroRange { min: 212, max: 306 });
    }

    #[test]
    fn test_carbs_clamped_at_zero() {
        // Heavy body, tiny calorie budget: protein alone exceeds it
        let alloc = allocate_macros(800, 150.0);
        assert_eq!(alloc.carb_range_g.min, 0);
        assert_eq!(alloc.carb_range_g.max, 0);
        assert_eq!(alloc.protein_range_g, MacroRange { min: 240, max: 330 });
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(allocate_macros(2095, 70.0)).unwrap();
        assert_eq!(json["protein_range_g"]["min"], 112);
        assert_eq!(json["carb_range_g"]["max"], 306);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: every range is ordered and non-negative
        #[test]
        fn prop_ranges_are_ordered(calories in 800i32..6000, weight in 30.0f64..250.0) {
            let alloc = allocate_macros(calories, weight);
            for range in [alloc.protein_range_g, alloc.fat_range_g, alloc.carb_range_g] {
                prop_assert!(range.min >= 0);
                prop_assert!(range.min <= range.max, "{:?}", range);
            }
        }

        /// Property: the carb ceiling matches the protein and fat floors
        #[test]
        fn prop_carb_max_uses_floors(calories in 1500i32..5000, weight in 40.0f64..120.0) {
            let alloc = allocate_macros(calories, weight);
            let remaining = calories
                - alloc.protein_range_g.min * KCAL_PER_G_PROTEIN
                - alloc.fat_range_g.min * KCAL_PER_G_FAT;
            let expected = ((remaining as f64) / 4.0).round().max(0.0) as i32;
            prop_assert_eq!(alloc.carb_range_g.max, expected);
        }
    }
}
