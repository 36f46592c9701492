//! The FilterPipeline orchestrates multiple filters.
//!
//! Filters are chained with the builder pattern and applied in the order
//! they were added.

use crate::context::ScoringContext;
use crate::traits::Filter;
use recipe_model::Recipe;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new().add_filter(AllergenFilter);
///
/// let safe = pipeline.apply(recipes.iter().collect(), &context);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the recipes.
    ///
    /// Each stage logs its name with the input and output counts at `debug`.
    pub fn apply<'r>(&self, recipes: Vec<&'r Recipe>, context: &ScoringContext) -> Vec<&'r Recipe> {
        let mut current = recipes;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, context);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
