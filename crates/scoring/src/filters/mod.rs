//! Filter implementations for the ranking pipeline.

pub mod allergen;

pub use allergen::AllergenFilter;
