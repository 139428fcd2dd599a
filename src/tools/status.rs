//! Macroplan Status Tool
//!
//! Provides runtime status information about the calculator service.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::config::CalculatorConfig;
use crate::nutrition::{DEFAULT_MEAL_COUNT, SUPPORTED_MEAL_COUNTS};

/// Calculator usage instructions for AI assistants
pub const CALCULATOR_INSTRUCTIONS: &str = r#"
# Macroplan Calculator Instructions

This guide explains how to build a client's nutrition plan with the Macroplan tools.

## Inputs

Every plan starts from the client's intake data:

| Field | Values | Accepted range |
|-------|--------|----------------|
| gender | `male`, `female` | |
| weight | kilograms | 30 - 250 |
| height | centimeters | 100 - 250 |
| age | whole years | 10 - 100 |
| activity_level | `sedentary`, `light`, `moderate`, `active`, `extreme` | |
| goal | `lose`, `maintain`, `gain`, `performance` | |

Values outside the ranges are rejected. Ask the client to confirm them rather than guessing.

---

## How the Numbers Are Calculated

1. **BMR** (Mifflin-St Jeor): `10 x weight + 6.25 x height - 5 x age`, then `+5` for men or `-161` for women
2. **TDEE** = BMR x activity factor (1.2 / 1.375 / 1.55 / 1.725 / 1.9)
3. **Daily calories** = TDEE adjusted for the goal
   - additive policy (default): lose -500, maintain 0, gain +500, performance +300 kcal
   - multiplicative policy: lose x0.80, maintain x1.00, gain x1.15, performance x1.20
4. **Macros** as a share of daily calories (protein and carbs 4 kcal/g, fat 9 kcal/g):

| Goal | Protein | Carbs | Fat |
|------|---------|-------|-----|
| lose | 40% | 30% | 30% |
| maintain | 30% | 40% | 30% |
| gain | 30% | 50% | 20% |
| performance | 25% | 55% | 20% |

All values are rounded half-up to whole numbers. Each value is rounded on its own,
so macro calories and meal totals can differ from the daily target by a few units.
This is expected; do not "fix" the numbers by hand.

---

## Tools

### `calculate_nutrition_plan`
Full plan: BMR, TDEE, daily calories, macros, reference values, BMI and the meal split.
Optional `meals` (3, 4, 5 or 6; default 5).

### `distribute_meals`
Split an existing budget (`daily_calories`, `protein`, `carbs`, `fat`) across meals.
Use this when the trainer has already adjusted the targets by hand.
Limits: 1 - 20000 kcal and 0 - 5000 g per macro.

### `assess_body`
BMI, BMI category and ideal weight range from weight, height and gender.

### `get_diet_template`
Unscaled template for a goal. A `restriction` (`vegetarian`, `vegan`, `gluten`,
`lactose`) overrides the goal template.

### `generate_diet`
Plan plus the matching template rescaled to the client's daily calories.

---

## Meal Counts

| Meals | Slots |
|-------|-------|
| 3 | breakfast, lunch, dinner |
| 4 | breakfast, morning snack, lunch, dinner |
| 5 | breakfast, morning snack, lunch, afternoon snack, dinner |
| 6 | breakfast, morning snack, lunch, afternoon snack, dinner, supper |

Any other count falls back to 5 meals unless the server runs with
`MACROPLAN_MEAL_COUNT_POLICY=strict`, in which case it is rejected.
Check `macroplan_status` for the active policies.
"#;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroplanStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Calculator configuration
    pub calorie_policy: &'static str,
    pub meal_count_policy: &'static str,
    pub supported_meal_counts: [u32; 4],
    pub default_meal_count: u32,

    /// Process information
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: DateTime<Utc>,
    config: CalculatorConfig,
}

impl StatusTracker {
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: Utc::now(),
            config,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> MacroplanStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        MacroplanStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            calorie_policy: self.config.calorie_policy.as_str(),
            meal_count_policy: self.config.meal_count_policy.as_str(),
            supported_meal_counts: SUPPORTED_MEAL_COUNTS,
            default_meal_count: DEFAULT_MEAL_COUNT,
            started_at: self.started_at,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
