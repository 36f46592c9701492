//! Ranking: allergen filter, per-recipe score, stable descending sort.
//!
//! ## Algorithm
//! 1. Drop recipes through the filter pipeline (allergens by default)
//! 2. Score every survivor in parallel; the collect keeps input order
//! 3. Stable sort by score, highest first, so ties keep their input order
//!
//! The ranker borrows the caller's recipes and hands back references to
//! them; nothing is cloned or mutated.

use crate::config::ScoringConfig;
use crate::context::ScoringContext;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::AllergenFilter;
use crate::scorer::{ScoreBreakdown, score_breakdown};
use rayon::prelude::*;
use recipe_model::{MealType, Recipe, UserProfile};
use std::time::Instant;
use tracing::debug;

/// A recipe together with the score that placed it.
#[derive(Debug, Clone, Copy)]
pub struct RankedRecipe<'r> {
    pub recipe: &'r Recipe,
    pub breakdown: ScoreBreakdown,
}

impl RankedRecipe<'_> {
    /// Combined score used for ordering
    pub fn score(&self) -> f64 {
        self.breakdown.total
    }
}

/// Filters, scores and orders candidate recipes.
///
/// ## Usage
/// ```ignore
/// let ranker = RecipeRanker::default();
/// let pantry = ["chicken", "rice"];
/// let ranked = ranker.rank(&recipes, Some(&profile), &pantry, Some(MealType::Dinner));
/// ```
pub struct RecipeRanker {
    config: ScoringConfig,
    filters: FilterPipeline,
}

impl RecipeRanker {
    /// Ranker with the given configuration and the allergen filter.
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_filters(config, FilterPipeline::new().add_filter(AllergenFilter))
    }

    /// Ranker with a custom filter pipeline.
    ///
    /// The pipeline replaces the default one entirely; include
    /// `AllergenFilter` to keep allergy exclusion.
    pub fn with_filters(config: ScoringConfig, filters: FilterPipeline) -> Self {
        Self { config, filters }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Rank recipes, returning them with their score breakdowns.
    ///
    /// # Arguments
    /// * `recipes` - Candidates, typically one page of search results
    /// * `profile` - Dietary profile; `None` makes every profile factor neutral
    /// * `ingredients` - What the user has on hand; only the count is scored
    /// * `meal_type` - Scales calorie targets to one meal when given
    ///
    /// # Returns
    /// The recipes that pass the filters, highest score first. Equal scores
    /// keep their input order.
    pub fn rank_with_scores<'r, S: AsRef<str>>(
        &self,
        recipes: &'r [Recipe],
        profile: Option<&UserProfile>,
        ingredients: &[S],
        meal_type: Option<MealType>,
    ) -> Vec<RankedRecipe<'r>> {
        let start = Instant::now();
        let context = ScoringContext::new(profile, ingredients, meal_type);

        let candidates = self.filters.apply(recipes.iter().collect(), &context);

        let mut ranked: Vec<RankedRecipe<'r>> = candidates
            .par_iter()
            .map(|&recipe| RankedRecipe {
                recipe,
                breakdown: score_breakdown(&self.config, recipe, &context),
            })
            .collect();

        // `sort_by` is stable
        ranked.sort_by(|a, b| b.score().total_cmp(&a.score()));

        debug!(
            "Ranked {} of {} recipes (meal type: {}) in {:.2?}",
            ranked.len(),
            recipes.len(),
            meal_type.map(|m| m.as_str()).unwrap_or("any"),
            start.elapsed()
        );
        ranked
    }

    /// Rank recipes by descending relevance.
    ///
    /// The result holds every recipe that survived the allergen filter, each
    /// exactly once.
    pub fn rank<'r, S: AsRef<str>>(
        &self,
        recipes: &'r [Recipe],
        profile: Option<&UserProfile>,
        ingredients: &[S],
        meal_type: Option<MealType>,
    ) -> Vec<&'r Recipe> {
        self.rank_with_scores(recipes, profile, ingredients, meal_type)
            .into_iter()
            .map(|ranked| ranked.recipe)
            .collect()
    }
}

impl Default for RecipeRanker {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

/// Rank recipes with the reference configuration.
///
/// Equivalent to `RecipeRanker::default().rank(..)`. Build a `RecipeRanker`
/// once instead when ranking many requests with a tuned `ScoringConfig`.
pub fn rank_recipes_by_relevance<'r, S: AsRef<str>>(
    recipes: &'r [Recipe],
    profile: Option<&UserProfile>,
    ingredients: &[S],
    meal_type: Option<MealType>,
) -> Vec<&'r Recipe> {
    RecipeRanker::default().rank(recipes, profile, ingredients, meal_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_model::{DietGoal, Nutrition};

    fn ids(recipes: &[&Recipe]) -> Vec<u64> {
        recipes.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_empty_input() {
        let ranked = rank_recipes_by_relevance::<&str>(&[], None, &[], None);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_neutral_inputs_keep_order() {
        let recipes = vec![
            Recipe::new(3, "Soup"),
            Recipe::new(1, "Salad"),
            Recipe::new(2, "Stew"),
        ];
        let ranked = rank_recipes_by_relevance::<&str>(&recipes, None, &[], None);
        assert_eq!(ids(&ranked), vec![3, 1, 2]);
    }

    #[test]
    fn test_lose_goal_lunch() {
        let recipes = vec![
            Recipe::new(2, "Double Bacon Burger")
                .with_nutrition(Nutrition::new(1200.0, 40.0, 50.0, 80.0).unwrap()),
            Recipe::new(1, "Kale Salad")
                .with_nutrition(Nutrition::new(300.0, 20.0, 30.0, 10.0).unwrap()),
        ];
        let profile = UserProfile::with_goal(DietGoal::Lose);

        let meal_type = Some(MealType::Lunch);
        let ranked = rank_recipes_by_relevance::<&str>(&recipes, Some(&profile), &[], meal_type);
        assert_eq!(ids(&ranked), vec![1, 2]);
    }

    #[test]
    fn test_scores_are_descending() {
        let recipes = vec![
            Recipe::new(1, "A").with_ingredient_counts(1, 0),
            Recipe::new(2, "B").with_ingredient_counts(3, 0),
            Recipe::new(3, "C").with_ingredient_counts(2, 0),
        ];
        let ranker = RecipeRanker::default();
        let ranked = ranker.rank_with_scores(&recipes, None, &["x", "y", "z"], None);

        let ids: Vec<_> = ranked.iter().map(|r| r.recipe.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert!(ranked.windows(2).all(|w| w[0].score() >= w[1].score()));
    }

    #[test]
    fn test_returns_references_into_input() {
        let recipes = vec![Recipe::new(1, "Soup")];
        let ranked = rank_recipes_by_relevance::<&str>(&recipes, None, &[], None);
        assert!(std::ptr::eq(ranked[0], &recipes[0]));
    }

    #[test]
    fn test_custom_pipeline_without_allergen_filter() {
        let recipes = vec![Recipe::new(1, "Peanut Noodles")];
        let profile = UserProfile {
            allergies: vec!["peanut".to_string()],
            ..UserProfile::default()
        };

        assert!(RecipeRanker::default()
            .rank::<&str>(&recipes, Some(&profile), &[], None)
            .is_empty());

        let unfiltered =
            RecipeRanker::with_filters(ScoringConfig::default(), FilterPipeline::new());
        assert_eq!(unfiltered.rank::<&str>(&recipes, Some(&profile), &[], None).len(), 1);
    }
}
