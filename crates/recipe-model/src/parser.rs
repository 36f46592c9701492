//! JSON loading for recipes and user profiles.
//!
//! Recipe files hold either a bare array of recipes or a search response
//! object with a `results` array. Every recipe is validated after decoding,
//! so anything handed to the scorer has finite, non-negative nutrition.

use crate::error::{ModelError, Result};
use crate::types::{Recipe, UserProfile};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Deserialize)]
#[serde(untagged)]
enum RecipeDocument {
    List(Vec<Recipe>),
    SearchResponse { results: Vec<Recipe> },
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ModelError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

/// Parse and validate a recipe document.
pub fn parse_recipes(content: &str) -> Result<Vec<Recipe>> {
    let recipes = match serde_json::from_str::<RecipeDocument>(content)? {
        RecipeDocument::List(recipes) => recipes,
        RecipeDocument::SearchResponse { results } => results,
    };
    for recipe in &recipes {
        recipe.validate()?;
    }
    Ok(recipes)
}

/// Load recipes from a JSON file
pub fn load_recipes(path: &Path) -> Result<Vec<Recipe>> {
    let recipes = parse_recipes(&read_file(path)?)?;
    debug!("Loaded {} recipes from {}", recipes.len(), path.display());
    Ok(recipes)
}

/// Parse a user profile.
///
/// Unknown allergen tags are kept; they are only reported.
pub fn parse_profile(content: &str) -> Result<UserProfile> {
    let profile: UserProfile = serde_json::from_str(content)?;
    for tag in profile.unknown_allergies() {
        warn!("Allergy tag '{}' is not in the known allergen vocabulary", tag);
    }
    Ok(profile)
}

/// Load a user profile from a JSON file
pub fn load_profile(path: &Path) -> Result<UserProfile> {
    parse_profile(&read_file(path)?)
}
