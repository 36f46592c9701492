//! Scoring constants.
//!
//! All weights, per-goal targets, meal fractions and activity multipliers
//! live here. `ScoringConfig::default()` is the reference tuning; a JSON file
//! may override any subset of it.

use recipe_model::{ActivityLevel, DietGoal, MealType};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by `ScoringConfig::validate`
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Calorie ceiling for '{goal}' must be positive, got {value}")]
    InvalidCalorieCeiling { goal: DietGoal, value: f64 },

    #[error("Macro ratios for '{goal}' must sum to 1.0, got {sum}")]
    RatioSum { goal: DietGoal, sum: f64 },

    #[error("Macro ratio for '{goal}' must be within [0, 1], got {value}")]
    RatioRange { goal: DietGoal, value: f64 },

    #[error("Calorie fraction for '{meal}' must be within (0, 1], got {value}")]
    InvalidMealFraction { meal: MealType, value: f64 },

    #[error("{field} must be a finite, non-negative number, got {value}")]
    InvalidNumber { field: &'static str, value: f64 },

    #[error("ingredient_floor must be within [0, 1], got {value}")]
    InvalidIngredientFloor { value: f64 },
}

/// Factor weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    /// Full calorie-fit credit
    pub diet_goal_match: f64,
    /// Full macro-balance credit
    pub nutrition_match: f64,
    /// Credit for a preferred-cuisine title match
    pub cuisine_match: f64,
    /// Credit for using every provided ingredient
    pub ingredient_match: f64,
    /// Neutral contribution of a factor that cannot be evaluated
    pub default_score: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            diet_goal_match: 3.0,
            nutrition_match: 2.5,
            cuisine_match: 2.0,
            ingredient_match: 1.5,
            default_score: 1.0,
        }
    }
}

/// Calorie ceiling and macro split for one diet goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionTarget {
    /// Daily calorie ceiling before the meal-type fraction is applied
    pub calories_max: f64,
    pub protein_ratio: f64,
    pub carbs_ratio: f64,
    pub fat_ratio: f64,
}

impl NutritionTarget {
    pub const fn new(
        calories_max: f64,
        protein_ratio: f64,
        carbs_ratio: f64,
        fat_ratio: f64,
    ) -> Self {
        Self {
            calories_max,
            protein_ratio,
            carbs_ratio,
            fat_ratio,
        }
    }

    /// (protein, carbs, fat)
    pub fn ratios(&self) -> [f64; 3] {
        [self.protein_ratio, self.carbs_ratio, self.fat_ratio]
    }
}

/// Per-goal target table.
///
/// Deserializes field by field: a goal or field missing from the JSON keeps
/// its reference value, so `{"lose": {"calories_max": 450}}` only moves the
/// `lose` ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "TargetsOverride")]
pub struct NutritionTargets {
    pub lose: NutritionTarget,
    pub maintain: NutritionTarget,
    pub gain: NutritionTarget,
}

impl NutritionTargets {
    pub fn for_goal(&self, goal: DietGoal) -> &NutritionTarget {
        match goal {
            DietGoal::Lose => &self.lose,
            DietGoal::Maintain => &self.maintain,
            DietGoal::Gain => &self.gain,
        }
    }
}

impl Default for NutritionTargets {
    fn default() -> Self {
        Self {
            // Higher protein for satiety
            lose: NutritionTarget::new(500.0, 0.35, 0.35, 0.30),
            maintain: NutritionTarget::new(700.0, 0.30, 0.40, 0.30),
            gain: NutritionTarget::new(1000.0, 0.40, 0.40, 0.20),
        }
    }
}

/// Any subset of one goal's target fields
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TargetOverride {
    calories_max: Option<f64>,
    protein_ratio: Option<f64>,
    carbs_ratio: Option<f64>,
    fat_ratio: Option<f64>,
}

impl TargetOverride {
    fn merge_onto(self, base: NutritionTarget) -> NutritionTarget {
        NutritionTarget {
            calories_max: self.calories_max.unwrap_or(base.calories_max),
            protein_ratio: self.protein_ratio.unwrap_or(base.protein_ratio),
            carbs_ratio: self.carbs_ratio.unwrap_or(base.carbs_ratio),
            fat_ratio: self.fat_ratio.unwrap_or(base.fat_ratio),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TargetsOverride {
    lose: TargetOverride,
    maintain: TargetOverride,
    gain: TargetOverride,
}

impl From<TargetsOverride> for NutritionTargets {
    fn from(overrides: TargetsOverride) -> Self {
        let base = NutritionTargets::default();
        Self {
            lose: overrides.lose.merge_onto(base.lose),
            maintain: overrides.maintain.merge_onto(base.maintain),
            gain: overrides.gain.merge_onto(base.gain),
        }
    }
}

/// Share of daily intake allotted to each meal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MealDistribution {
    pub breakfast: f64,
    pub lunch: f64,
    pub dinner: f64,
    pub snack: f64,
}

impl MealDistribution {
    pub fn fraction(&self, meal_type: MealType) -> f64 {
        match meal_type {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
            MealType::Snack => self.snack,
        }
    }
}

impl Default for MealDistribution {
    fn default() -> Self {
        Self {
            breakfast: 0.25,
            lunch: 0.35,
            dinner: 0.30,
            snack: 0.10,
        }
    }
}

/// Step table applied to the nutrition score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityMultipliers {
    pub sedentary: f64,
    pub light: f64,
    pub moderate: f64,
    pub active: f64,
    pub very_active: f64,
}

impl ActivityMultipliers {
    /// Multiplier for a level; 1.0 when the level is unknown.
    pub fn multiplier(&self, level: Option<ActivityLevel>) -> f64 {
        match level {
            Some(ActivityLevel::Sedentary) => self.sedentary,
            Some(ActivityLevel::Light) => self.light,
            Some(ActivityLevel::Moderate) => self.moderate,
            Some(ActivityLevel::Active) => self.active,
            Some(ActivityLevel::VeryActive) => self.very_active,
            None => 1.0,
        }
    }
}

impl Default for ActivityMultipliers {
    fn default() -> Self {
        Self {
            sedentary: 0.9,
            light: 1.0,
            moderate: 1.1,
            active: 1.2,
            very_active: 1.3,
        }
    }
}

/// Complete scoring configuration.
///
/// ## Usage
/// ```ignore
/// let json = r#"{"weights": {"cuisine_match": 3.0}}"#;
/// let config: ScoringConfig = serde_json::from_str(json)?;
/// config.validate()?;
/// let ranker = RecipeRanker::new(config);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: Weights,
    pub targets: NutritionTargets,
    pub meal_distribution: MealDistribution,
    pub activity: ActivityMultipliers,
    /// Applied to the combined score whenever the profile names a diet goal
    pub diet_goal_multiplier: f64,
    /// Fraction of the calorie envelope a `gain` recipe must reach for full credit
    pub gain_floor_fraction: f64,
    /// Ingredient credit at zero usage, as a fraction of `ingredient_match`
    pub ingredient_floor: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            targets: NutritionTargets::default(),
            meal_distribution: MealDistribution::default(),
            activity: ActivityMultipliers::default(),
            diet_goal_multiplier: 1.2,
            gain_floor_fraction: 0.8,
            ingredient_floor: 0.5,
        }
    }
}

impl ScoringConfig {
    /// Calorie envelope for a goal: the daily ceiling, scaled by the
    /// meal-type fraction when a meal type is given.
    pub fn target_calories(&self, goal: DietGoal, meal_type: Option<MealType>) -> f64 {
        let ceiling = self.targets.for_goal(goal).calories_max;
        match meal_type {
            Some(meal) => ceiling * self.meal_distribution.fraction(meal),
            None => ceiling,
        }
    }

    /// Reject tables the scorer cannot divide by or compare against.
    pub fn validate(&self) -> Result<(), ConfigError> {
        const EPSILON: f64 = 1e-6;

        for goal in DietGoal::ALL {
            let target = self.targets.for_goal(goal);
            if !target.calories_max.is_finite() || target.calories_max <= 0.0 {
                return Err(ConfigError::InvalidCalorieCeiling {
                    goal,
                    value: target.calories_max,
                });
            }
            for value in target.ratios() {
                if !(0.0..=1.0).contains(&value) {
                    return Err(ConfigError::RatioRange { goal, value });
                }
            }
            let sum: f64 = target.ratios().iter().sum();
            if (sum - 1.0).abs() > EPSILON {
                return Err(ConfigError::RatioSum { goal, sum });
            }
        }

        for meal in [
            MealType::Breakfast,
            MealType::Lunch,
            MealType::Dinner,
            MealType::Snack,
        ] {
            let value = self.meal_distribution.fraction(meal);
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::InvalidMealFraction { meal, value });
            }
        }

        let numbers = [
            ("weights.diet_goal_match", self.weights.diet_goal_match),
            ("weights.nutrition_match", self.weights.nutrition_match),
            ("weights.cuisine_match", self.weights.cuisine_match),
            ("weights.ingredient_match", self.weights.ingredient_match),
            ("weights.default_score", self.weights.default_score),
            ("activity.sedentary", self.activity.sedentary),
            ("activity.light", self.activity.light),
            ("activity.moderate", self.activity.moderate),
            ("activity.active", self.activity.active),
            ("activity.very_active", self.activity.very_active),
            ("diet_goal_multiplier", self.diet_goal_multiplier),
        ];
        for (field, value) in numbers {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidNumber { field, value });
            }
        }
        // Above 1 the ingredient factor would fall as usage rises
        if !(0.0..=1.0).contains(&self.ingredient_floor) {
            return Err(ConfigError::InvalidIngredientFloor {
                value: self.ingredient_floor,
            });
        }
        // Divides calories by this in the gain branch
        if !self.gain_floor_fraction.is_finite() || self.gain_floor_fraction <= 0.0 {
            return Err(ConfigError::InvalidNumber {
                field: "gain_floor_fraction",
                value: self.gain_floor_fraction,
            });
        }
        Ok(())
    }
}
