//! Cuisine preference: a flat bonus when the title names a preferred cuisine.

use crate::config::ScoringConfig;
use recipe_model::{Recipe, UserProfile};

/// `cuisine_match` if the lowercased title contains any preferred cuisine,
/// `default_score` otherwise or when the profile lists none.
///
/// Several matching cuisines earn the bonus once.
pub fn cuisine_score(
    config: &ScoringConfig,
    recipe: &Recipe,
    profile: Option<&UserProfile>,
) -> f64 {
    let cuisines = match profile {
        Some(p) if !p.preferred_cuisines.is_empty() => &p.preferred_cuisines,
        _ => return config.weights.default_score,
    };

    let title = recipe.title.to_lowercase();
    let matched = cuisines
        .iter()
        .any(|cuisine| title.contains(&cuisine.to_lowercase()));

    if matched {
        config.weights.cuisine_match
    } else {
        config.weights.default_score
    }
}
