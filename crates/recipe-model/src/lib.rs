//! # Recipe Model Crate
//!
//! Plain data handed to the recommendation scorer.
//!
//! ## Main Components
//!
//! - **types**: Recipe, Nutrition, UserProfile and the enumerated profile fields
//! - **parser**: Load recipes and profiles from JSON files
//! - **error**: Error types for loading and validation
//!
//! ## Example Usage
//!
//! ```ignore
//! use recipe_model::parser::{load_profile, load_recipes};
//! use std::path::Path;
//!
//! let recipes = load_recipes(Path::new("data/recipes.json"))?;
//! let profile = load_profile(Path::new("data/profile.json"))?;
//!
//! println!("{} recipes, goal {:?}", recipes.len(), profile.diet_goal);
//! ```

pub mod error;
pub mod parser;
pub mod types;

pub use error::{ModelError, Result};
pub use types::{
    // Type aliases
    RecipeId,
    // Core types
    Nutrition,
    Recipe,
    RecipeInstruction,
    UserProfile,
    // Enums
    ActivityLevel,
    DietGoal,
    DietaryPreference,
    Gender,
    MealType,
    // Allergen helpers
    ALLERGEN_VOCABULARY,
    allergen_search_term,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_builder() {
        let nutrition = Nutrition::new(420.0, 12.0, 51.0, 18.0).unwrap();
        let recipe = Recipe::new(716429, "Pasta with Garlic, Tomato, and Spinach")
            .with_nutrition(nutrition)
            .with_ingredient_counts(4, 1);

        assert_eq!(recipe.id, 716429);
        assert_eq!(recipe.used_ingredient_count, 4);
        assert_eq!(recipe.missed_ingredient_count, 1);
        assert_eq!(recipe.nutrition, Some(nutrition));
        assert!(recipe.validate().is_ok());
    }

    #[test]
    fn test_macro_total() {
        let nutrition = Nutrition::new(300.0, 20.0, 30.0, 10.0).unwrap();
        assert_eq!(nutrition.macro_total(), 60.0);
    }

    #[test]
    fn test_default_profile_is_neutral() {
        let profile = UserProfile::default();
        assert!(profile.diet_goal.is_none());
        assert!(profile.activity_level.is_none());
        assert!(profile.preferred_cuisines.is_empty());
        assert!(!profile.has_allergies());
    }
}
