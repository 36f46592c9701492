//! Core domain types for recipe recommendations.
//!
//! Recipes arrive from a recipe-search provider and profiles from a profile
//! store; both are plain data here. The JSON shape follows the provider's
//! camelCase field names so search responses deserialize directly.

use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a recipe, as assigned by the search provider
pub type RecipeId = u64;

// =============================================================================
// Recipe-related Types
// =============================================================================

/// Per-serving nutrition facts.
///
/// Grams for the three macronutrients, kcal for calories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Nutrition {
    /// Build a validated `Nutrition`.
    ///
    /// Rejects negative, NaN and infinite values.
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Result<Self> {
        let nutrition = Self {
            calories,
            protein,
            carbs,
            fat,
        };
        nutrition.validate()?;
        Ok(nutrition)
    }

    /// Check that every value is a finite, non-negative number
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ModelError::InvalidValue {
                    field: field.to_string(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Total macronutrient mass (protein + carbs + fat)
    pub fn macro_total(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }
}

/// One numbered preparation step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeInstruction {
    pub number: u32,
    pub step: String,
}

/// A candidate recipe returned by an ingredient search.
///
/// `nutrition` is `None` when the provider had no nutrition data; that means
/// "unknown", never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
    /// How many of the queried ingredients this recipe uses
    #[serde(default)]
    pub used_ingredient_count: u32,
    /// How many ingredients the recipe needs that were not queried
    #[serde(default)]
    pub missed_ingredient_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instructions: Vec<RecipeInstruction>,
}

impl Recipe {
    /// Create a recipe with no nutrition data and zero ingredient counts.
    pub fn new(id: RecipeId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            nutrition: None,
            used_ingredient_count: 0,
            missed_ingredient_count: 0,
            image: None,
            ready_in_minutes: None,
            servings: None,
            likes: 0,
            instructions: Vec::new(),
        }
    }

    /// Attach nutrition facts (builder pattern)
    pub fn with_nutrition(mut self, nutrition: Nutrition) -> Self {
        self.nutrition = Some(nutrition);
        self
    }

    /// Set used/missed ingredient counts (builder pattern)
    pub fn with_ingredient_counts(mut self, used: u32, missed: u32) -> Self {
        self.used_ingredient_count = used;
        self.missed_ingredient_count = missed;
        self
    }

    /// Validate a recipe received from outside the process.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ModelError::ValidationError(format!(
                "recipe {} has an empty title",
                self.id
            )));
        }
        if let Some(nutrition) = &self.nutrition {
            nutrition.validate().map_err(|err| {
                ModelError::ValidationError(format!("recipe {}: {}", self.id, err))
            })?;
        }
        Ok(())
    }
}

// =============================================================================
// Profile-related Types
// =============================================================================

/// Weight-management objective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietGoal {
    Lose,
    Maintain,
    Gain,
}

impl DietGoal {
    pub const ALL: [DietGoal; 3] = [DietGoal::Lose, DietGoal::Maintain, DietGoal::Gain];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietGoal::Lose => "lose",
            DietGoal::Maintain => "maintain",
            DietGoal::Gain => "gain",
        }
    }
}

impl FromStr for DietGoal {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "lose" => Ok(DietGoal::Lose),
            "maintain" => Ok(DietGoal::Maintain),
            "gain" => Ok(DietGoal::Gain),
            _ => Err(ModelError::UnknownVariant {
                kind: "diet goal",
                value: s.to_string(),
            }),
        }
    }
}

/// Self-reported activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very_active" => Ok(ActivityLevel::VeryActive),
            _ => Err(ModelError::UnknownVariant {
                kind: "activity level",
                value: s.to_string(),
            }),
        }
    }
}

/// Which meal of the day a recipe is being picked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl FromStr for MealType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            _ => Err(ModelError::UnknownVariant {
                kind: "meal type",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DietGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dietary style. Carried on the profile; not used by the scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPreference {
    #[default]
    None,
    Vegetarian,
    Vegan,
    Keto,
    Paleo,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

/// Allergen tags offered to users when they fill in their profile.
///
/// Profiles may still carry other free-text tags; they are matched the same way.
pub const ALLERGEN_VOCABULARY: [&str; 12] = [
    "dairy",
    "egg",
    "gluten",
    "grain",
    "peanut",
    "seafood",
    "sesame",
    "shellfish",
    "soy",
    "sulfite",
    "tree_nut",
    "wheat",
];

/// Turn an allergen tag into the text searched for in recipe titles.
///
/// Lowercased, with underscores replaced by spaces (`tree_nut` -> `tree nut`).
pub fn allergen_search_term(tag: &str) -> String {
    tag.to_lowercase().replace('_', " ")
}

/// A user's dietary profile.
///
/// Every field is optional on the wire. Scoring only looks at `diet_goal`,
/// `activity_level`, `preferred_cuisines` and `allergies`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    /// Kilograms
    pub weight: f64,
    /// Centimetres
    pub height: f64,
    pub gender: Gender,
    pub diet_goal: Option<DietGoal>,
    pub dietary_preference: DietaryPreference,
    pub activity_level: Option<ActivityLevel>,
    pub preferred_cuisines: Vec<String>,
    pub allergies: Vec<String>,
}

impl UserProfile {
    /// Create an empty profile with only a diet goal set.
    pub fn with_goal(goal: DietGoal) -> Self {
        Self {
            diet_goal: Some(goal),
            ..Self::default()
        }
    }

    pub fn has_allergies(&self) -> bool {
        !self.allergies.is_empty()
    }

    /// Allergy tags that are not part of `ALLERGEN_VOCABULARY`
    pub fn unknown_allergies(&self) -> Vec<&str> {
        self.allergies
            .iter()
            .map(String::as_str)
            .filter(|tag| !ALLERGEN_VOCABULARY.contains(&tag.to_lowercase().as_str()))
            .collect()
    }
}
