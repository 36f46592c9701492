//! Combined recommendation score.
//!
//! `total = (nutrition + cuisine + ingredient) * diet_goal_multiplier`, where
//! the multiplier only applies when the profile names a diet goal. The score
//! has no fixed range; only comparisons between recipes are meaningful.

use crate::config::ScoringConfig;
use crate::context::ScoringContext;
use crate::cuisine::cuisine_score;
use crate::ingredient::ingredient_score;
use crate::nutrition::nutrition_score;
use recipe_model::{MealType, Recipe, UserProfile};
use serde::Serialize;

/// Per-factor contributions for one recipe
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub nutrition: f64,
    pub cuisine: f64,
    pub ingredient: f64,
    pub diet_goal_multiplier: f64,
    pub total: f64,
}

impl ScoreBreakdown {
    /// One-line human readable explanation
    pub fn explain(&self) -> String {
        format!(
            "nutrition {:.2} + cuisine {:.2} + ingredients {:.2}, x{:.1} = {:.3}",
            self.nutrition, self.cuisine, self.ingredient, self.diet_goal_multiplier, self.total
        )
    }
}

/// Score every factor for `recipe` under `context`.
pub fn score_breakdown(
    config: &ScoringConfig,
    recipe: &Recipe,
    context: &ScoringContext,
) -> ScoreBreakdown {
    let nutrition = nutrition_score(config, recipe, context.profile, context.meal_type);
    let cuisine = cuisine_score(config, recipe, context.profile);
    let ingredient = ingredient_score(config, recipe, context.provided_ingredients);
    let diet_goal_multiplier = if context.diet_goal().is_some() {
        config.diet_goal_multiplier
    } else {
        1.0
    };

    ScoreBreakdown {
        nutrition,
        cuisine,
        ingredient,
        diet_goal_multiplier,
        total: (nutrition + cuisine + ingredient) * diet_goal_multiplier,
    }
}

/// Combined score for one recipe.
pub fn recommendation_score<S: AsRef<str>>(
    config: &ScoringConfig,
    recipe: &Recipe,
    profile: Option<&UserProfile>,
    ingredients: &[S],
    meal_type: Option<MealType>,
) -> f64 {
    let context = ScoringContext::new(profile, ingredients, meal_type);
    score_breakdown(config, recipe, &context).total
}

/// Owns a configuration and exposes each factor as a method.
#[derive(Debug, Clone, Default)]
pub struct RecipeScorer {
    config: ScoringConfig,
}

impl RecipeScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn nutrition(
        &self,
        recipe: &Recipe,
        profile: Option<&UserProfile>,
        meal_type: Option<MealType>,
    ) -> f64 {
        nutrition_score(&self.config, recipe, profile, meal_type)
    }

    pub fn cuisine(&self, recipe: &Recipe, profile: Option<&UserProfile>) -> f64 {
        cuisine_score(&self.config, recipe, profile)
    }

    pub fn ingredient(&self, recipe: &Recipe, provided: usize) -> f64 {
        ingredient_score(&self.config, recipe, provided)
    }

    pub fn breakdown(&self, recipe: &Recipe, context: &ScoringContext) -> ScoreBreakdown {
        score_breakdown(&self.config, recipe, context)
    }

    pub fn score<S: AsRef<str>>(
        &self,
        recipe: &Recipe,
        profile: Option<&UserProfile>,
        ingredients: &[S],
        meal_type: Option<MealType>,
    ) -> f64 {
        recommendation_score(&self.config, recipe, profile, ingredients, meal_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_model::{DietGoal, Nutrition};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_neutral_score_without_inputs() {
        let scorer = RecipeScorer::default();
        let recipe = Recipe::new(1, "Plain Toast");
        let score = scorer.score::<&str>(&recipe, None, &[], None);
        assert!((score - 3.0).abs() < EPS);
    }

    #[test]
    fn test_diet_goal_multiplier_applies_only_with_goal() {
        let config = ScoringConfig::default();
        let recipe = Recipe::new(1, "Plain Toast");
        let no_goal = UserProfile::default();
        let with_goal = UserProfile::with_goal(DietGoal::Maintain);

        let context = ScoringContext::new::<&str>(Some(&no_goal), &[], None);
        assert_eq!(score_breakdown(&config, &recipe, &context).diet_goal_multiplier, 1.0);

        // No nutrition: every factor stays neutral, then x1.2
        let context = ScoringContext::new::<&str>(Some(&with_goal), &[], None);
        let breakdown = score_breakdown(&config, &recipe, &context);
        assert_eq!(breakdown.diet_goal_multiplier, 1.2);
        assert!((breakdown.total - 3.6).abs() < EPS);
    }

    #[test]
    fn test_breakdown_sums_to_total() {
        let config = ScoringConfig::default();
        let profile = UserProfile {
            diet_goal: Some(DietGoal::Lose),
            preferred_cuisines: vec!["kale".to_string()],
            ..UserProfile::default()
        };
        let recipe = Recipe::new(1, "Kale Salad")
            .with_nutrition(Nutrition::new(300.0, 20.0, 30.0, 10.0).unwrap())
            .with_ingredient_counts(1, 2);
        let ingredients = ["kale", "lemon"];

        let context = ScoringContext::new(Some(&profile), &ingredients, Some(MealType::Lunch));
        let breakdown = score_breakdown(&config, &recipe, &context);

        assert!((breakdown.nutrition - 4.0).abs() < EPS);
        assert_eq!(breakdown.cuisine, 2.0);
        // 1.5 * (0.5 + 0.5 * 0.5)
        assert!((breakdown.ingredient - 1.125).abs() < EPS);
        assert!((breakdown.total - (4.0 + 2.0 + 1.125) * 1.2).abs() < EPS);
        let total = recommendation_score(
            &config,
            &recipe,
            Some(&profile),
            &ingredients,
            Some(MealType::Lunch),
        );
        assert_eq!(total, breakdown.total);
        assert!(breakdown.explain().ends_with("= 8.550"));
    }

    #[test]
    fn test_scorer_methods_match_free_functions() {
        let config = ScoringConfig {
            diet_goal_multiplier: 1.5,
            ..ScoringConfig::default()
        };
        let scorer = RecipeScorer::new(config.clone());
        assert_eq!(scorer.config(), &config);

        let profile = UserProfile {
            diet_goal: Some(DietGoal::Lose),
            preferred_cuisines: vec!["kale".to_string()],
            ..UserProfile::default()
        };
        let recipe = Recipe::new(1, "Kale Salad")
            .with_nutrition(Nutrition::new(300.0, 20.0, 30.0, 10.0).unwrap())
            .with_ingredient_counts(1, 2);
        let ingredients = ["kale", "lemon"];
        let meal_type = Some(MealType::Lunch);

        let nutrition = scorer.nutrition(&recipe, Some(&profile), meal_type);
        let cuisine = scorer.cuisine(&recipe, Some(&profile));
        let ingredient = scorer.ingredient(&recipe, ingredients.len());
        assert_eq!(nutrition, nutrition_score(&config, &recipe, Some(&profile), meal_type));
        assert_eq!(cuisine, cuisine_score(&config, &recipe, Some(&profile)));
        assert_eq!(ingredient, ingredient_score(&config, &recipe, ingredients.len()));

        let context = ScoringContext::new(Some(&profile), &ingredients, meal_type);
        let breakdown = scorer.breakdown(&recipe, &context);
        assert_eq!(breakdown, score_breakdown(&config, &recipe, &context));
        assert_eq!(breakdown.nutrition, nutrition);
        assert_eq!(breakdown.cuisine, cuisine);
        assert_eq!(breakdown.ingredient, ingredient);
        assert_eq!(breakdown.diet_goal_multiplier, 1.5);
        assert!((breakdown.total - (nutrition + cuisine + ingredient) * 1.5).abs() < EPS);

        let score = scorer.score(&recipe, Some(&profile), &ingredients, meal_type);
        assert_eq!(score, breakdown.total);
    }
}
