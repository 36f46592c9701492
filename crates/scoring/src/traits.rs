//! Core traits for the recipe filtering stage.
//!
//! Filters run before scoring and only ever drop recipes; they never
//! reorder or modify them.

use crate::context::ScoringContext;
use recipe_model::Recipe;

/// Core trait for filtering recipes.
///
/// ## Design Note
/// - `Send + Sync` lets one pipeline serve concurrent requests
/// - Filters work on borrowed recipes and return the survivors in input order
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of recipes.
    ///
    /// # Arguments
    /// * `recipes` - The recipes to filter (takes ownership of the references)
    /// * `context` - Profile, ingredient count and meal type of the request
    fn apply<'r>(&self, recipes: Vec<&'r Recipe>, context: &ScoringContext) -> Vec<&'r Recipe>;
}
