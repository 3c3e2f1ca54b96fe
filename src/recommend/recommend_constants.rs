/// Fallback message when no API key is configured.
pub const MISSING_KEY_MESSAGE: &str =
    "AI Service Unavailable (Missing API Key). Try our Caramel Macchiato!";

/// Default suggestion accompanying the missing-key fallback.
pub const DEFAULT_SUGGESTION: &str = "Caramel Macchiato";

/// Fallback message when the upstream call fails or returns garbage.
pub const DEGRADED_MESSAGE: &str =
    "I'm having trouble thinking right now, but coffee is always a good idea!";
