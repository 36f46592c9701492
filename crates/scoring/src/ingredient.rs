//! Ingredient coverage: reward recipes that use more of what the user has.

use crate::config::ScoringConfig;
use recipe_model::Recipe;

/// Score how much of the user's pantry a recipe uses.
///
/// `ingredient_match * (floor + ratio * (1 - floor))` with
/// `ratio = used_ingredient_count / provided`. With the reference floor of
/// 0.5 this is `1.5 * (0.5 + ratio * 0.5)`.
///
/// # Arguments
/// * `recipe` - Candidate; only `used_ingredient_count` is read
/// * `provided` - Number of ingredients the user listed
///
/// # Returns
/// `default_score` when nothing was provided. Otherwise a value that never
/// decreases as usage rises, given a validated `ingredient_floor` in `[0, 1]`.
///
/// # Note
/// The ratio is not capped, so a recipe reporting more used ingredients than
/// were provided scores above the full weight.
pub fn ingredient_score(config: &ScoringConfig, recipe: &Recipe, provided: usize) -> f64 {
    if provided == 0 {
        return config.weights.default_score;
    }

    let used_ratio = f64::from(recipe.used_ingredient_count) / provided as f64;
    let floor = config.ingredient_floor;
    config.weights.ingredient_match * (floor + used_ratio * (1.0 - floor))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_no_ingredients_is_neutral() {
        let config = ScoringConfig::default();
        let recipe = Recipe::new(1, "Fried Rice").with_ingredient_counts(3, 0);
        assert_eq!(ingredient_score(&config, &recipe, 0), 1.0);
    }

    #[test]
    fn test_floor_and_full_usage() {
        let config = ScoringConfig::default();
        let unused = Recipe::new(1, "Fried Rice").with_ingredient_counts(0, 4);
        let full = Recipe::new(2, "Chicken Rice Broccoli Bake").with_ingredient_counts(3, 1);

        assert!((ingredient_score(&config, &unused, 3) - 0.75).abs() < EPS);
        assert!((ingredient_score(&config, &full, 3) - 1.5).abs() < EPS);
    }

    #[test]
    fn test_ratio_above_one_is_not_capped() {
        let config = ScoringConfig::default();
        let recipe = Recipe::new(1, "Everything Soup").with_ingredient_counts(4, 0);
        // ratio 2.0: 1.5 * (0.5 + 1.0)
        assert!((ingredient_score(&config, &recipe, 2) - 2.25).abs() < EPS);
    }

    #[test]
    fn test_more_usage_never_scores_lower() {
        for floor in [0.0, 0.5, 1.0] {
            let config = ScoringConfig {
                ingredient_floor: floor,
                ..ScoringConfig::default()
            };
            config.validate().unwrap();

            let scores: Vec<f64> = (0..=4)
                .map(|used| {
                    let recipe = Recipe::new(1, "Stir-Fry").with_ingredient_counts(used, 0);
                    ingredient_score(&config, &recipe, 4)
                })
                .collect();
            assert!(scores.windows(2).all(|w| w[0] <= w[1]), "floor {floor}: {scores:?}");
        }
    }
}
