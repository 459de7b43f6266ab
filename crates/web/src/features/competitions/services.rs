use serde_json::Value;

use crate::error::WebError;

/// Reads the live flag off a raw competition detail document.
///
/// Older payloads nest it under `competition.status`; a missing flag means not live.
pub fn is_live(detail: &Value) -> bool {
    let competition = &detail["competition"];

    competition["is_live"]
        .as_bool()
        .or_else(|| competition["status"]["is_live"].as_bool())
        .unwrap_or(false)
}

/// Competition ids end up in the upstream path, so only plain tokens are accepted.
pub fn validate_event_id(event_id: &str) -> Result<(), WebError> {
    let valid = !event_id.is_empty()
        && event_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(WebError::BadRequest(format!(
            "Invalid competition id: '{}'",
            event_id
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_live_flag() {
        assert!(is_live(&json!({"competition": {"is_live": true}})));
        assert!(!is_live(&json!({"competition": {"is_live": false}})));
    }

    #[test]
    fn test_is_live_nested_status() {
        assert!(is_live(&json!({"competition": {"status": {"is_live": true}}})));
    }

    #[test]
    fn test_is_live_missing() {
        assert!(!is_live(&json!({"competition": {}})));
        assert!(!is_live(&json!({"error": "gone"})));
        assert!(!is_live(&json!([])));
        assert!(!is_live(&json!({"competition": {"is_live": "yes"}})));
    }

    #[test]
    fn test_validate_event_id() {
        assert!(validate_event_id("12345").is_ok());
        assert!(validate_event_id("wc-2024_levi").is_ok());
        assert!(validate_event_id("").is_err());
        assert!(validate_event_id("..").is_err());
        assert!(validate_event_id("1?x=2").is_err());
    }
}
