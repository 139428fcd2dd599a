//! Biometric profile model
//!
//! The client data a nutrition plan is calculated from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::nutrition::NutritionError;

/// Accepted age range at the API boundary (years)
pub const AGE_RANGE: (u32, u32) = (10, 100);
/// Accepted weight range at the API boundary (kg)
pub const WEIGHT_RANGE_KG: (f64, f64) = (30.0, 250.0);
/// Accepted height range at the API boundary (cm)
pub const HEIGHT_RANGE_CM: (f64, f64) = (100.0, 250.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(NutritionError::InvalidGender(s.to_string())),
        }
    }
}

/// Physical activity level, used to pick the TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or physical job
    Extreme,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::Extreme,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::Extreme => "extreme",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "extreme" => Ok(ActivityLevel::Extreme),
            _ => Err(NutritionError::InvalidActivityLevel(s.to_string())),
        }
    }
}

/// Diet goal, drives calorie adjustment and macro split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
    Performance,
}

impl Goal {
    pub const ALL: [Goal; 4] = [Goal::Lose, Goal::Maintain, Goal::Gain, Goal::Performance];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Lose => "lose",
            Goal::Maintain => "maintain",
            Goal::Gain => "gain",
            Goal::Performance => "performance",
        }
    }
}

impl FromStr for Goal {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose" => Ok(Goal::Lose),
            "maintain" => Ok(Goal::Maintain),
            "gain" => Ok(Goal::Gain),
            "performance" => Ok(Goal::Performance),
            _ => Err(NutritionError::InvalidGoal(s.to_string())),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boundary validation failures for a biometric profile
#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("age must be between {min} and {max} years, got {value}")]
    AgeOutOfRange { value: u32, min: u32, max: u32 },

    #[error("weight must be between {min} and {max} kg, got {value}")]
    WeightOutOfRange { value: f64, min: f64, max: f64 },

    #[error("height must be between {min} and {max} cm, got {value}")]
    HeightOutOfRange { value: f64, min: f64, max: f64 },
}

/// Client biometrics for one calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiometricProfile {
    pub gender: Gender,
    /// kilograms
    pub weight: f64,
    /// centimeters
    pub height: f64,
    /// years
    pub age: u32,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl BiometricProfile {
    /// Check the ranges the intake form enforces.
    ///
    /// The calculator itself never calls this; callers validate before
    /// invoking it.
    pub fn validate(&self) -> Result<(), ProfileError> {
        validate_age(self.age)?;
        validate_weight(self.weight)?;
        validate_height(self.height)?;
        Ok(())
    }
}

pub fn validate_age(age: u32) -> Result<(), ProfileError> {
    let (min, max) = AGE_RANGE;
    if !(min..=max).contains(&age) {
        return Err(ProfileError::AgeOutOfRange { value: age, min, max });
    }
    Ok(())
}

pub fn validate_weight(weight_kg: f64) -> Result<(), ProfileError> {
    let (min, max) = WEIGHT_RANGE_KG;
    // NaN fails the contains check too
    if !(min..=max).contains(&weight_kg) {
        return Err(ProfileError::WeightOutOfRange { value: weight_kg, min, max });
    }
    Ok(())
}

pub fn validate_height(height_cm: f64) -> Result<(), ProfileError> {
    let (min, max) = HEIGHT_RANGE_CM;
    if !(min..=max).contains(&height_cm) {
        return Err(ProfileError::HeightOutOfRange { value: height_cm, min, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> BiometricProfile {
        BiometricProfile {
            gender: Gender::Male,
            weight: 78.0,
            height: 180.0,
            age: 32,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Gain,
        }
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(" Moderate ".parse::<ActivityLevel>().unwrap(), ActivityLevel::Moderate);
        assert_eq!("performance".parse::<Goal>().unwrap(), Goal::Performance);
    }

    #[test]
    fn test_unknown_activity_level_fails() {
        let err = "couch".parse::<ActivityLevel>().unwrap_err();
        assert_eq!(err, NutritionError::InvalidActivityLevel("couch".to_string()));
    }

    #[test]
    fn test_unknown_goal_fails() {
        let err = "bulk".parse::<Goal>().unwrap_err();
        assert_eq!(err, NutritionError::InvalidGoal("bulk".to_string()));
    }

    #[test]
    fn test_as_str_round_trips_for_every_level() {
        for level in ActivityLevel::ALL {
            assert_eq!(level.as_str().parse::<ActivityLevel>().unwrap(), level);
        }
        for goal in Goal::ALL {
            assert_eq!(goal.as_str().parse::<Goal>().unwrap(), goal);
        }
    }

    #[test]
    fn test_validate_accepts_bounds() {
        assert!(profile().validate().is_ok());
        assert!(validate_age(10).is_ok());
        assert!(validate_age(100).is_ok());
        assert!(validate_weight(30.0).is_ok());
        assert!(validate_height(250.0).is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut p = profile();
        p.age = 9;
        assert!(matches!(p.validate(), Err(ProfileError::AgeOutOfRange { value: 9, .. })));

        let mut p = profile();
        p.weight = 251.0;
        assert!(matches!(p.validate(), Err(ProfileError::WeightOutOfRange { .. })));

        let mut p = profile();
        p.height = f64::NAN;
        assert!(matches!(p.validate(), Err(ProfileError::HeightOutOfRange { .. })));
    }

    #[test]
    fn test_serde_wire_names() {
        let json = serde_json::to_value(profile()).unwrap();
        assert_eq!(json["activityLevel"], "moderate");
        assert_eq!(json["goal"], "gain");
        assert_eq!(json["gender"], "male");
    }
}
