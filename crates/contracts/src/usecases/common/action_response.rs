use serde::{Deserialize, Serialize};

/// Envelope of state-changing endpoints: `{ success, error? }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl ActionResponse {
    /// `Ok` on success, otherwise the server's message or `fallback` when it sent none or an empty one.
    pub fn into_result(self, fallback: &str) -> Result<(), String> {
        if self.success {
            Ok(())
        } else {
            Err(self
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| fallback.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success() {
        let r: ActionResponse = serde_json::from_value(json!({ "success": true })).unwrap();
        assert_eq!(r.into_result("Reset failed"), Ok(()));
    }

    #[test]
    fn test_failure_with_message() {
        let r: ActionResponse =
            serde_json::from_value(json!({ "success": false, "error": "locked" })).unwrap();
        assert_eq!(r.into_result("Reset failed"), Err("locked".to_string()));
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let r: ActionResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(r.into_result("Reset failed"), Err("Reset failed".to_string()));
    }

    #[test]
    fn test_empty_message_uses_fallback() {
        let r: ActionResponse =
            serde_json::from_value(json!({ "success": false, "error": "" })).unwrap();
        assert_eq!(r.into_result("Reset failed"), Err("Reset failed".to_string()));
    }
}
