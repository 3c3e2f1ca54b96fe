//! Recommendation module - the advisory AI collaborator.
//!
//! Given free-text mood input and the current catalog, the collaborator
//! returns a short message and suggested item names. It is advisory only:
//! it never mutates cart, catalog or wallet, and every failure degrades to
//! a fixed fallback payload instead of an error.

mod recommend_constants;
mod recommend_errors;
mod recommend_model;
mod recommend_service;
mod recommend_traits;

#[cfg(test)]
mod recommend_service_tests;

// Re-export the public interface
pub use recommend_constants::{DEFAULT_SUGGESTION, DEGRADED_MESSAGE, MISSING_KEY_MESSAGE};
pub use recommend_errors::RecommendError;
pub use recommend_model::Recommendation;
pub use recommend_service::{filter_known_names, GeminiRecommender, API_KEY_ENV};
pub use recommend_traits::Recommender;
