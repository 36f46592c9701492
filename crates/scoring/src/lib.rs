//! Relevance scoring and ranking of candidate recipes.
//!
//! This crate provides:
//! - ScoringConfig holding every weight and target table
//! - Filter trait and AllergenFilter for removing unsafe recipes
//! - One scoring function per factor (nutrition, cuisine, ingredients)
//! - RecipeRanker combining them into an ordered list
//!
//! ## Architecture
//! A ranking request is processed in stages:
//! 1. Filters remove recipes whose titles mention one of the user's allergens
//! 2. Each remaining recipe is scored:
//!    `(nutrition + cuisine + ingredient) * goal multiplier`
//! 3. Recipes are stably sorted by descending score
//!
//! Every missing input (no profile, no diet goal, no nutrition data, no
//! ingredients, no meal type) falls back to a neutral contribution; ranking
//! never fails.
//!
//! ## Example Usage
//! ```ignore
//! use scoring::rank_recipes_by_relevance;
//! use recipe_model::MealType;
//!
//! let pantry = ["chicken", "rice"];
//! let meal_type = Some(MealType::Lunch);
//! let ranked = rank_recipes_by_relevance(&recipes, Some(&profile), &pantry, meal_type);
//! for recipe in ranked {
//!     println!("{}", recipe.title);
//! }
//! ```

pub mod config;
pub mod context;
pub mod cuisine;
pub mod filter_pipeline;
pub mod filters;
pub mod ingredient;
pub mod nutrition;
pub mod ranker;
pub mod scorer;
pub mod traits;

// Re-export main types
pub use config::{ConfigError, ScoringConfig};
pub use context::ScoringContext;
pub use cuisine::cuisine_score;
pub use filter_pipeline::FilterPipeline;
pub use ingredient::ingredient_score;
pub use nutrition::{activity_multiplier, calorie_score, macro_score, nutrition_score};
pub use ranker::{RankedRecipe, RecipeRanker, rank_recipes_by_relevance};
pub use scorer::{RecipeScorer, ScoreBreakdown, recommendation_score, score_breakdown};
pub use traits::Filter;
