use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coach::constants::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

/// Daily macronutrient grams derived from a calorie target.
///
/// Carbohydrates are the residual after protein and fat energy and can go
/// negative when the target is too low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    #[serde(rename = "Protein")]
    pub protein: i64,

    #[serde(rename = "Kohlenhydrate")]
    pub carbohydrate: i64,

    #[serde(rename = "Fett")]
    pub fat: i64,
}

impl MacroBreakdown {
    /// Energy implied by the truncated gram amounts.
    pub fn total_calories(&self) -> f64 {
        self.protein as f64 * KCAL_PER_G_PROTEIN
            + self.carbohydrate as f64 * KCAL_PER_G_CARBS
            + self.fat as f64 * KCAL_PER_G_FAT
    }
}

impl fmt::Display for MacroBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"Protein\": {}, \"Kohlenhydrate\": {}, \"Fett\": {}}}",
            self.protein, self.carbohydrate, self.fat
        )
    }
}

/// Goal-aware macros, including the height-based fat floor that was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalMacros {
    pub protein: i64,
    pub fat: i64,
    pub carbs: i64,
    pub min_fat: i64,
}

impl GoalMacros {
    pub fn total_calories(&self) -> f64 {
        self.protein as f64 * KCAL_PER_G_PROTEIN
            + self.carbs as f64 * KCAL_PER_G_CARBS
            + self.fat as f64 * KCAL_PER_G_FAT
    }
}
