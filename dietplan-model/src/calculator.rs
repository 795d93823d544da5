//! Daily calorie and macronutrient targets.
//!
//! BMR uses the revised Harris-Benedict equation, TDEE scales it by the
//! activity factor and the energy is split 50/20/30 between carbohydrates,
//! protein and fat. Every rounding is half-to-even.

use crate::error::{Error, Result};
use crate::plan::{
    EnergyEstimate, PlanResult, KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use crate::profile::{ActivityLevel, Gender, ProfileInput};

const CARBS_SHARE: f64 = 0.5;
const PROTEIN_SHARE: f64 = 0.2;
const FAT_SHARE: f64 = 0.3;

/// Upper bound on a daily energy requirement. Keeps every rounded target well
/// inside `i64` range.
pub const MAX_TDEE_KCAL: f64 = 100_000.0;

pub fn basal_metabolic_rate(profile: &ProfileInput) -> f64 {
    let age = f64::from(profile.age);
    match profile.gender {
        Gender::Male => 88.362 + 13.397 * profile.weight + 4.799 * profile.height - 5.677 * age,
        Gender::Female => 447.593 + 9.247 * profile.weight + 3.098 * profile.height - 4.330 * age,
    }
}

pub fn total_daily_energy_expenditure(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.factor()
}

pub fn estimate_energy(profile: &ProfileInput) -> Result<EnergyEstimate> {
    profile.validate()?;

    let bmr = basal_metabolic_rate(profile);
    if bmr <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "body metrics give a non-positive basal metabolic rate ({:.3} kcal)",
            bmr
        )));
    }

    let tdee = total_daily_energy_expenditure(bmr, profile.activity_level);
    if !tdee.is_finite() || tdee > MAX_TDEE_KCAL {
        return Err(Error::InvalidInput(format!(
            "body metrics give an implausible energy requirement ({:.3e} kcal)",
            tdee
        )));
    }

    Ok(EnergyEstimate { bmr, tdee })
}

fn grams(tdee: f64, share: f64, kcal_per_gram: i64) -> i64 {
    (share * tdee / kcal_per_gram as f64).round_ties_even() as i64
}

pub fn compute(profile: &ProfileInput) -> Result<PlanResult> {
    let EnergyEstimate { tdee, .. } = estimate_energy(profile)?;

    let plan = PlanResult {
        calories: tdee.round_ties_even() as i64,
        carbs: grams(tdee, CARBS_SHARE, KCAL_PER_GRAM_CARBS),
        protein: grams(tdee, PROTEIN_SHARE, KCAL_PER_GRAM_PROTEIN),
        fats: grams(tdee, FAT_SHARE, KCAL_PER_GRAM_FAT),
    };

    if plan.calories <= 0 || plan.carbs <= 0 || plan.protein <= 0 || plan.fats <= 0 {
        return Err(Error::InvalidInput(format!(
            "body metrics give an energy requirement too small to split ({:.3} kcal)",
            tdee
        )));
    }

    Ok(plan)
}
