//! Shared nutrition data structure
//!
//! Used by template food items and template totals.

use serde::{Deserialize, Serialize};

use crate::nutrition::round_half_up;

/// Energy and macronutrient values
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fat: f64,     // grams
}

impl Nutrition {
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Create a new Nutrition with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale nutrition values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
        }
    }

    /// Add another nutrition to this one
    pub fn add(&self, other: &Nutrition) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }

    /// Round every value to a whole number, each independently
    pub fn rounded(&self) -> Self {
        Self {
            calories: round_half_up(self.calories),
            protein: round_half_up(self.protein),
            carbs: round_half_up(self.carbs),
            fat: round_half_up(self.fat),
        }
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for Nutrition {
    type Output = Nutrition;

    fn mul(self, multiplier: f64) -> Nutrition {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_and_sum() {
        let items = vec![
            Nutrition::new(180.0, 12.0, 0.0, 14.0),
            Nutrition::new(80.0, 3.0, 15.0, 1.0),
        ];
        let total: Nutrition = items.into_iter().sum();
        assert_eq!(total, Nutrition::new(260.0, 15.0, 15.0, 15.0));

        let doubled = total * 2.0;
        assert_eq!(doubled.calories, 520.0);
        assert_eq!(doubled.fat, 30.0);
    }

    #[test]
    fn test_rounded_rounds_each_field_half_up() {
        let n = Nutrition::new(99.5, 1.49, 2.5, 0.5).rounded();
        assert_eq!(n, Nutrition::new(100.0, 1.0, 3.0, 1.0));
    }
}
