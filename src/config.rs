//! Calculator configuration
//!
//! Deployment-level policy choices, read from the environment by the
//! binaries and passed explicitly into the calculator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable selecting the calorie adjustment policy
pub const CALORIE_POLICY_VAR: &str = "MACROPLAN_CALORIE_POLICY";
/// Environment variable selecting how unsupported meal counts are handled
pub const MEAL_COUNT_POLICY_VAR: &str = "MACROPLAN_MEAL_COUNT_POLICY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {var} (expected one of: {expected})")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// How a goal turns TDEE into a daily calorie target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaloriePolicy {
    /// Flat kcal offset per goal (lose -500, gain +500, performance +300)
    #[default]
    Additive,
    /// Percentage of TDEE per goal (lose x0.8, gain x1.15, performance x1.2)
    Multiplicative,
}

impl CaloriePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaloriePolicy::Additive => "additive",
            CaloriePolicy::Multiplicative => "multiplicative",
        }
    }
}

impl FromStr for CaloriePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "additive" | "offset" => Ok(CaloriePolicy::Additive),
            "multiplicative" | "percentage" => Ok(CaloriePolicy::Multiplicative),
            _ => Err(ConfigError::InvalidValue {
                var: CALORIE_POLICY_VAR,
                value: s.to_string(),
                expected: "additive, multiplicative",
            }),
        }
    }
}

impl fmt::Display for CaloriePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do with a meal count that has no distribution table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealCountPolicy {
    /// Use the 5-meal table and log a warning
    #[default]
    Fallback,
    /// Reject with `UnsupportedMealCount`
    Strict,
}

impl MealCountPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealCountPolicy::Fallback => "fallback",
            MealCountPolicy::Strict => "strict",
        }
    }
}

impl FromStr for MealCountPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fallback" | "permissive" => Ok(MealCountPolicy::Fallback),
            "strict" => Ok(MealCountPolicy::Strict),
            _ => Err(ConfigError::InvalidValue {
                var: MEAL_COUNT_POLICY_VAR,
                value: s.to_string(),
                expected: "fallback, strict",
            }),
        }
    }
}

impl fmt::Display for MealCountPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorConfig {
    pub calorie_policy: CaloriePolicy,
    pub meal_count_policy: MealCountPolicy,
}

impl CalculatorConfig {
    /// Load from `MACROPLAN_*` environment variables; unset means default
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let calorie_policy = match lookup(CALORIE_POLICY_VAR) {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => CaloriePolicy::default(),
        };
        let meal_count_policy = match lookup(MEAL_COUNT_POLICY_VAR) {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => MealCountPolicy::default(),
        };

        Ok(Self {
            calorie_policy,
            meal_count_policy,
        })
    }
}
