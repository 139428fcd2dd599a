//! Meal slot and distribution models
//!
//! A distribution splits a plan's daily budget across named meal slots.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::nutrition::NutritionError;

/// A named meal of the day.
///
/// Variant order is chronological, so a `BTreeMap<MealSlot, _>` iterates
/// in the order meals are eaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MealSlot {
    Breakfast,
    MorningSnack,
    Lunch,
    AfternoonSnack,
    /// Only used by the performance template
    #[serde(rename = "preworkoutSnack")]
    PreWorkoutSnack,
    /// Only used by the performance template
    #[serde(rename = "postworkout")]
    PostWorkout,
    Dinner,
    Supper,
}

impl MealSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::MorningSnack => "morningSnack",
            MealSlot::Lunch => "lunch",
            MealSlot::AfternoonSnack => "afternoonSnack",
            MealSlot::PreWorkoutSnack => "preworkoutSnack",
            MealSlot::PostWorkout => "postworkout",
            MealSlot::Dinner => "dinner",
            MealSlot::Supper => "supper",
        }
    }

    /// Human readable name for previews
    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::MorningSnack => "Morning snack",
            MealSlot::Lunch => "Lunch",
            MealSlot::AfternoonSnack => "Afternoon snack",
            MealSlot::PreWorkoutSnack => "Pre-workout snack",
            MealSlot::PostWorkout => "Post-workout",
            MealSlot::Dinner => "Dinner",
            MealSlot::Supper => "Supper",
        }
    }
}

impl FromStr for MealSlot {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept camelCase, snake_case and plain lowercase spellings
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "breakfast" => Ok(MealSlot::Breakfast),
            "morningsnack" => Ok(MealSlot::MorningSnack),
            "lunch" => Ok(MealSlot::Lunch),
            "afternoonsnack" => Ok(MealSlot::AfternoonSnack),
            "preworkoutsnack" => Ok(MealSlot::PreWorkoutSnack),
            "postworkout" => Ok(MealSlot::PostWorkout),
            "dinner" => Ok(MealSlot::Dinner),
            "supper" => Ok(MealSlot::Supper),
            _ => Err(NutritionError::InvalidMealSlot(s.to_string())),
        }
    }
}

/// One slot's share of the daily plan, in whole kcal and grams
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealAllocation {
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

impl std::ops::Add for MealAllocation {
    type Output = MealAllocation;

    fn add(self, other: MealAllocation) -> MealAllocation {
        // Saturates instead of wrapping on absurd budgets
        MealAllocation {
            calories: self.calories.saturating_add(other.calories),
            protein: self.protein.saturating_add(other.protein),
            carbs: self.carbs.saturating_add(other.carbs),
            fat: self.fat.saturating_add(other.fat),
        }
    }
}

impl std::iter::Sum for MealAllocation {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(MealAllocation::default(), |acc, m| acc + m)
    }
}

/// Per-slot allocations, in chronological order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealDistribution {
    slots: BTreeMap<MealSlot, MealAllocation>,
}

impl MealDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, slot: MealSlot, allocation: MealAllocation) {
        self.slots.insert(slot, allocation);
    }

    pub fn get(&self, slot: MealSlot) -> Option<&MealAllocation> {
        self.slots.get(&slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MealSlot, &MealAllocation)> {
        self.slots.iter()
    }

    pub fn slots(&self) -> impl Iterator<Item = MealSlot> + '_ {
        self.slots.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Sum of all slots; drifts from the plan by the per-slot rounding
    pub fn totals(&self) -> MealAllocation {
        self.slots.values().copied().sum()
    }
}
