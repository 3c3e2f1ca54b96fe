use async_trait::async_trait;

use super::recommend_model::Recommendation;
use crate::catalog::MenuItem;

/// Contract for the recommendation collaborator.
///
/// Implementations must tolerate missing credentials and upstream failures
/// by returning fixed fallback payloads; `recommend` is infallible from the
/// caller's point of view.
#[async_trait]
pub trait Recommender: Send + Sync {
    /// Suggests menu items matching the given free-text mood.
    async fn recommend(&self, mood: &str, menu: &[MenuItem]) -> Recommendation;
}
