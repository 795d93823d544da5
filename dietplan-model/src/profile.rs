use std::str::FromStr;

use itertools::Itertools;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{Error, Result};

/// Selects the BMR formula branch. Anything other than these two values is
/// rejected instead of silently falling back to one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn parse(value: &str) -> Result<Self> {
        Self::from_str(value)
            .map_err(|_| Error::InvalidGender(value.to_owned(), Self::iter().join(", ")))
    }
}

/// Ordered from least to most active.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    pub fn parse(value: &str) -> Result<Self> {
        Self::from_str(value)
            .map_err(|_| Error::InvalidActivityLevel(value.to_owned(), Self::iter().join(", ")))
    }

    /// Multiplier applied to BMR to get TDEE.
    pub fn factor(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileInput {
    /// Years.
    pub age: u32,
    /// Kilograms.
    pub weight: f64,
    /// Centimeters.
    pub height: f64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
}

impl ProfileInput {
    pub fn new(
        age: u32,
        weight: f64,
        height: f64,
        gender: Gender,
        activity_level: ActivityLevel,
    ) -> Self {
        Self {
            age,
            weight,
            height,
            gender,
            activity_level,
        }
    }

    /// Checks the numeric fields are within their domains.
    pub fn validate(&self) -> Result<()> {
        if self.age == 0 {
            return Err(Error::InvalidInput(
                "age must be a positive whole number".to_owned(),
            ));
        }
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "weight must be a positive number of kilograms, got {}",
                self.weight
            )));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "height must be a positive number of centimeters, got {}",
                self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_activity_level() {
        let test_data = [
            ("sedentary", ActivityLevel::Sedentary),
            ("lightly_active", ActivityLevel::LightlyActive),
            ("moderately_active", ActivityLevel::ModeratelyActive),
            ("very_active", ActivityLevel::VeryActive),
            ("extra_active", ActivityLevel::ExtraActive),
        ];

        for (i, (input, expected_output)) in test_data.into_iter().enumerate() {
            assert_eq!(
                ActivityLevel::parse(input),
                Ok(expected_output),
                "Test case #{}",
                i
            );
            assert_eq!(expected_output.to_string(), input, "Test case #{}", i);
        }
    }

    #[test]
    fn parse_activity_level_rejects_unknown_values() {
        for input in ["extreme", "Sedentary", "very active", ""] {
            match ActivityLevel::parse(input) {
                Err(Error::InvalidActivityLevel(value, expected)) => {
                    assert_eq!(value, input);
                    assert_eq!(
                        expected,
                        "sedentary, lightly_active, moderately_active, very_active, extra_active"
                    );
                }
                other => panic!("unexpected result for {:?}: {:?}", input, other),
            }
        }
    }

    #[test]
    fn parse_gender() {
        assert_eq!(Gender::parse("male"), Ok(Gender::Male));
        assert_eq!(Gender::parse("female"), Ok(Gender::Female));
        assert_eq!(
            Gender::parse("other"),
            Err(Error::InvalidGender(
                "other".to_owned(),
                "male, female".to_owned()
            ))
        );
    }

    #[test]
    fn activity_factors_increase_with_activity() {
        let factors: Vec<f64> = ActivityLevel::iter().map(ActivityLevel::factor).collect();
        assert_eq!(factors, vec![1.2, 1.375, 1.55, 1.725, 1.9]);
        assert!(factors.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn validate_rejects_out_of_domain_values() {
        let valid = ProfileInput::new(25, 70.0, 175.0, Gender::Male, ActivityLevel::Sedentary);
        assert_eq!(valid.validate(), Ok(()));

        let test_data = [
            ProfileInput { age: 0, ..valid },
            ProfileInput { weight: 0.0, ..valid },
            ProfileInput { weight: -70.0, ..valid },
            ProfileInput { weight: f64::NAN, ..valid },
            ProfileInput { height: 0.0, ..valid },
            ProfileInput { height: f64::INFINITY, ..valid },
        ];

        for (i, profile) in test_data.into_iter().enumerate() {
            assert!(
                matches!(profile.validate(), Err(Error::InvalidInput(_))),
                "Test case #{}",
                i
            );
        }
    }
}
