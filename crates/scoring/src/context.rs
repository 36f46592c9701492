//! Per-request inputs shared by every filter and scoring factor.

use recipe_model::{DietGoal, MealType, UserProfile};

/// Borrowed view of one ranking request.
///
/// Only the number of provided ingredients matters for scoring, so the
/// ingredient names themselves are not kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringContext<'a> {
    pub profile: Option<&'a UserProfile>,
    pub provided_ingredients: usize,
    pub meal_type: Option<MealType>,
}

impl<'a> ScoringContext<'a> {
    pub fn new<S: AsRef<str>>(
        profile: Option<&'a UserProfile>,
        ingredients: &[S],
        meal_type: Option<MealType>,
    ) -> Self {
        Self {
            profile,
            provided_ingredients: ingredients.len(),
            meal_type,
        }
    }

    pub fn diet_goal(&self) -> Option<DietGoal> {
        self.profile.and_then(|p| p.diet_goal)
    }

    /// Allergy tags, empty when there is no profile
    pub fn allergies(&self) -> &'a [String] {
        self.profile.map(|p| p.allergies.as_slice()).unwrap_or(&[])
    }
}
