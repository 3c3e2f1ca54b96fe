use super::*;
use crate::catalog::seed_menu;

#[tokio::test]
async fn test_missing_key_returns_fallback_with_default_suggestion() {
    // Scenario E: no credentials configured.
    let recommender = GeminiRecommender::new(None);
    let result = recommender.recommend("tired", &seed_menu()).await;

    assert_eq!(result.message, MISSING_KEY_MESSAGE);
    assert_eq!(result.suggested_item_names, vec![DEFAULT_SUGGESTION]);
}

#[tokio::test]
async fn test_blank_key_counts_as_missing() {
    let recommender = GeminiRecommender::new(Some("   ".to_string()));
    let result = recommender.recommend("tired", &seed_menu()).await;

    assert_eq!(result.message, MISSING_KEY_MESSAGE);
}

#[tokio::test]
async fn test_unreachable_provider_degrades_to_apologetic_message() {
    // Nothing listens on this port: the request fails fast and the service
    // must degrade instead of erroring.
    let recommender = GeminiRecommender::new(Some("test-key".to_string()))
        .with_base_url("http://127.0.0.1:9/v1beta");

    let result = recommender.recommend("celebrating", &seed_menu()).await;

    assert_eq!(result.message, DEGRADED_MESSAGE);
    assert!(result.suggested_item_names.is_empty());
}

#[test]
fn test_filter_known_names_is_case_sensitive() {
    let menu = seed_menu();
    let names = vec![
        "Caramel Macchiato".to_string(),
        "caramel macchiato".to_string(),
        "Unicorn Frappe".to_string(),
        "Matcha Latte".to_string(),
    ];

    assert_eq!(
        filter_known_names(&names, &menu),
        vec!["Caramel Macchiato".to_string(), "Matcha Latte".to_string()]
    );
}

#[test]
fn test_recommendation_payload_deserializes_without_names() {
    // The provider schema only requires "message".
    let payload: Recommendation = serde_json::from_str(r#"{"message":"Enjoy!"}"#).unwrap();
    assert_eq!(payload.message, "Enjoy!");
    assert!(payload.suggested_item_names.is_empty());
}
