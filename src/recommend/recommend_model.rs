use serde::{Deserialize, Serialize};

/// The collaborator's advisory payload: a short message for the user and
/// the menu item names it suggests.
///
/// Suggested names must be matched case-sensitively against current catalog
/// names by the caller; non-matching names are dropped, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub message: String,
    #[serde(default)]
    pub suggested_item_names: Vec<String>,
}
