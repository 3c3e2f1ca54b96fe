use thiserror::Error;

/// Internal upstream failures. Never surfaced by [`Recommender`] methods;
/// the service converts them into the degraded fallback payload.
///
/// [`Recommender`]: super::Recommender
#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("Request to recommendation provider failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}
