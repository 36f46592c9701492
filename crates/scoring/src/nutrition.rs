//! Nutrition fit: how well a recipe's calories and macro split match the
//! user's diet goal.

use crate::config::{NutritionTarget, ScoringConfig};
use recipe_model::{ActivityLevel, DietGoal, MealType, Nutrition, Recipe, UserProfile};

/// Calorie fit against the meal's calorie envelope.
///
/// - `Lose`: full credit at or below target, then `target / calories`
/// - `Gain`: full credit from `gain_floor_fraction * target` up, linear below
/// - `Maintain`: credit falls linearly with relative deviation, zero at 100%
///
/// # Arguments
/// * `goal` - Diet goal selecting the curve
/// * `calories` - Calories of the recipe
/// * `target` - Envelope from `ScoringConfig::target_calories`; must be positive
///
/// # Returns
/// A value in `[0, diet_goal_match]`
pub fn calorie_score(config: &ScoringConfig, goal: DietGoal, calories: f64, target: f64) -> f64 {
    let full = config.weights.diet_goal_match;
    match goal {
        DietGoal::Lose => {
            if calories <= target {
                full
            } else {
                full * (target / calories)
            }
        }
        DietGoal::Gain => {
            let min_calories = target * config.gain_floor_fraction;
            if calories >= min_calories {
                full
            } else {
                full * (calories / min_calories)
            }
        }
        DietGoal::Maintain => {
            let deviation = ((calories - target).abs() / target).min(1.0);
            full * (1.0 - deviation)
        }
    }
}

/// Macro balance against the goal's protein/carbs/fat ratios.
///
/// Each macro's share of the recipe's total grams is compared with the
/// goal's ratio, and the mean absolute difference `d` gives
/// `nutrition_match * (1 - d)`. The result is not clamped, but with ratio
/// tables that sum to 1 `d` never exceeds 2/3.
///
/// # Returns
/// `default_score` when the recipe has no macro mass
pub fn macro_score(
    config: &ScoringConfig,
    nutrition: &Nutrition,
    target: &NutritionTarget,
) -> f64 {
    let total = nutrition.macro_total();
    if total <= 0.0 {
        return config.weights.default_score;
    }

    let actual = [
        nutrition.protein / total,
        nutrition.carbs / total,
        nutrition.fat / total,
    ];
    let mean_diff = actual
        .iter()
        .zip(target.ratios())
        .map(|(a, t)| (a - t).abs())
        .sum::<f64>()
        / 3.0;

    config.weights.nutrition_match * (1.0 - mean_diff)
}

/// Scale applied to the nutrition score for the user's activity level.
///
/// An unknown level leaves the score unchanged (1.0).
pub fn activity_multiplier(config: &ScoringConfig, level: Option<ActivityLevel>) -> f64 {
    config.activity.multiplier(level)
}

/// Combined nutrition score: `(calorie + macro) * activity`.
///
/// # Arguments
/// * `recipe` - Candidate; only its `nutrition` is read
/// * `profile` - Supplies the diet goal and activity level
/// * `meal_type` - Scales the goal's daily ceiling to one meal when given
///
/// # Returns
/// `default_score` when the recipe has no nutrition data or the profile has
/// no diet goal. The activity multiplier is not applied to that fallback.
pub fn nutrition_score(
    config: &ScoringConfig,
    recipe: &Recipe,
    profile: Option<&UserProfile>,
    meal_type: Option<MealType>,
) -> f64 {
    let (nutrition, profile, goal) = match (&recipe.nutrition, profile) {
        (Some(n), Some(p)) => match p.diet_goal {
            Some(goal) => (n, p, goal),
            None => return config.weights.default_score,
        },
        _ => return config.weights.default_score,
    };

    let target_calories = config.target_calories(goal, meal_type);
    let calorie = calorie_score(config, goal, nutrition.calories, target_calories);
    let macros = macro_score(config, nutrition, config.targets.for_goal(goal));

    (calorie + macros) * activity_multiplier(config, profile.activity_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn salad() -> Recipe {
        Recipe::new(1, "Kale Salad")
            .with_nutrition(Nutrition::new(300.0, 20.0, 30.0, 10.0).unwrap())
    }

    #[test]
    fn test_lose_calorie_score() {
        let config = ScoringConfig::default();
        assert_eq!(calorie_score(&config, DietGoal::Lose, 150.0, 175.0), 3.0);
        assert_eq!(calorie_score(&config, DietGoal::Lose, 175.0, 175.0), 3.0);
        assert!((calorie_score(&config, DietGoal::Lose, 350.0, 175.0) - 1.5).abs() < EPS);
    }

    #[test]
    fn test_gain_calorie_score() {
        let config = ScoringConfig::default();
        // Floor is 0.8 * 1000 = 800
        assert_eq!(calorie_score(&config, DietGoal::Gain, 800.0, 1000.0), 3.0);
        assert_eq!(calorie_score(&config, DietGoal::Gain, 1500.0, 1000.0), 3.0);
        assert!((calorie_score(&config, DietGoal::Gain, 400.0, 1000.0) - 1.5).abs() < EPS);
        assert_eq!(calorie_score(&config, DietGoal::Gain, 0.0, 1000.0), 0.0);
    }

    #[test]
    fn test_maintain_calorie_score() {
        let config = ScoringConfig::default();
        assert_eq!(calorie_score(&config, DietGoal::Maintain, 700.0, 700.0), 3.0);
        assert!((calorie_score(&config, DietGoal::Maintain, 350.0, 700.0) - 1.5).abs() < EPS);
        assert!((calorie_score(&config, DietGoal::Maintain, 1050.0, 700.0) - 1.5).abs() < EPS);
        // Deviation capped at 100%
        assert_eq!(calorie_score(&config, DietGoal::Maintain, 2800.0, 700.0), 0.0);
    }

    #[test]
    fn test_macro_score() {
        let config = ScoringConfig::default();
        let nutrition = Nutrition::new(300.0, 20.0, 30.0, 10.0).unwrap();
        // Fractions 1/3, 1/2, 1/6 vs 0.35/0.35/0.30: mean diff 0.1
        let score = macro_score(&config, &nutrition, &config.targets.lose);
        assert!((score - 2.25).abs() < EPS);

        let exact = Nutrition::new(400.0, 30.0, 40.0, 30.0).unwrap();
        let score = macro_score(&config, &exact, &config.targets.maintain);
        assert!((score - 2.5).abs() < EPS);
    }

    #[test]
    fn test_macro_score_zero_mass() {
        let config = ScoringConfig::default();
        let water = Nutrition::new(0.0, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(macro_score(&config, &water, &config.targets.gain), 1.0);
    }

    #[test]
    fn test_nutrition_score_defaults() {
        let config = ScoringConfig::default();
        let goal_profile = UserProfile::with_goal(DietGoal::Lose);

        // No profile
        assert_eq!(nutrition_score(&config, &salad(), None, None), 1.0);
        // Profile without diet goal
        assert_eq!(
            nutrition_score(&config, &salad(), Some(&UserProfile::default()), None),
            1.0
        );
        // Recipe without nutrition
        assert_eq!(
            nutrition_score(&config, &Recipe::new(2, "Mystery Stew"), Some(&goal_profile), None),
            1.0
        );
    }

    #[test]
    fn test_nutrition_score_lunch_with_activity() {
        let config = ScoringConfig::default();
        let mut profile = UserProfile::with_goal(DietGoal::Lose);

        // Lunch target 175: calorie 3 * 175/300 = 1.75, macro 2.25
        let score = nutrition_score(&config, &salad(), Some(&profile), Some(MealType::Lunch));
        assert!((score - 4.0).abs() < EPS);

        profile.activity_level = Some(ActivityLevel::Active);
        let score = nutrition_score(&config, &salad(), Some(&profile), Some(MealType::Lunch));
        assert!((score - 4.8).abs() < EPS);

        profile.activity_level = Some(ActivityLevel::Sedentary);
        let score = nutrition_score(&config, &salad(), Some(&profile), Some(MealType::Lunch));
        assert!((score - 3.6).abs() < EPS);
    }

    #[test]
    fn test_activity_multiplier_follows_config() {
        let mut config = ScoringConfig::default();
        assert_eq!(activity_multiplier(&config, None), 1.0);
        assert_eq!(activity_multiplier(&config, Some(ActivityLevel::Moderate)), 1.1);

        config.activity.moderate = 1.5;
        assert_eq!(activity_multiplier(&config, Some(ActivityLevel::Moderate)), 1.5);
        // Unknown level ignores the table
        assert_eq!(activity_multiplier(&config, None), 1.0);
    }

    #[test]
    fn test_nutrition_score_full_day_target() {
        let config = ScoringConfig::default();
        let profile = UserProfile::with_goal(DietGoal::Lose);
        // 300 <= 500: full calorie credit
        let score = nutrition_score(&config, &salad(), Some(&profile), None);
        assert!((score - 5.25).abs() < EPS);
    }

    #[test]
    fn test_lose_monotonic_around_target() {
        let config = ScoringConfig::default();
        let under = calorie_score(&config, DietGoal::Lose, 120.0, 175.0);
        let over = calorie_score(&config, DietGoal::Lose, 600.0, 175.0);
        let way_over = calorie_score(&config, DietGoal::Lose, 1200.0, 175.0);
        assert!(under >= over);
        assert!(over > way_over);
    }
}
