pub const KCAL_PER_GRAM_CARBS: i64 = 4;
pub const KCAL_PER_GRAM_PROTEIN: i64 = 4;
pub const KCAL_PER_GRAM_FAT: i64 = 9;

/// Daily targets, kcal for `calories` and grams for the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanResult {
    pub calories: i64,
    pub carbs: i64,
    pub protein: i64,
    pub fats: i64,
}

impl PlanResult {
    /// Energy contained in the macro targets. Differs from `calories` only by
    /// rounding, at most 9 kcal.
    pub fn macro_calories(&self) -> i64 {
        self.carbs * KCAL_PER_GRAM_CARBS
            + self.protein * KCAL_PER_GRAM_PROTEIN
            + self.fats * KCAL_PER_GRAM_FAT
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyEstimate {
    pub bmr: f64,
    pub tdee: f64,
}
