//! Filter to remove recipes that mention one of the user's allergens.
//!
//! ## Limitation
//! Matching is done on the recipe title only, because search results carry
//! no structured ingredient list. An allergen that appears only in the
//! ingredients slips through ("Pad Thai" with peanuts), and a title that
//! merely names the allergen is dropped ("Egg-free Pancakes").

use crate::context::ScoringContext;
use crate::traits::Filter;
use recipe_model::{Recipe, allergen_search_term};

/// Removes recipes whose lowercased title contains any allergen search term.
///
/// ## Algorithm
/// 1. Turn each allergy tag into a search term (`tree_nut` -> `tree nut`)
/// 2. Lowercase each title once
/// 3. Keep recipes whose title contains none of the terms
///
/// Passes every recipe through when there is no profile or no allergy.
pub struct AllergenFilter;

impl AllergenFilter {
    /// True when `title` contains none of the `terms`. Terms must already be
    /// search terms (see `allergen_search_term`).
    pub fn is_safe(title: &str, terms: &[String]) -> bool {
        let title = title.to_lowercase();
        !terms.iter().any(|term| title.contains(term.as_str()))
    }
}

impl Filter for AllergenFilter {
    fn name(&self) -> &str {
        "AllergenFilter"
    }

    fn apply<'r>(&self, recipes: Vec<&'r Recipe>, context: &ScoringContext) -> Vec<&'r Recipe> {
        let allergies = context.allergies();
        if allergies.is_empty() {
            return recipes;
        }

        let terms: Vec<String> = allergies
            .iter()
            .map(|tag| allergen_search_term(tag))
            .collect();

        recipes
            .into_iter()
            .filter(|recipe| Self::is_safe(&recipe.title, &terms))
            .collect()
    }
}
