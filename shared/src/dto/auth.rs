use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub token: String,
}

/// Error response
///
/// The API answers most rejections with `{"error": "..."}`, but some statuses
/// (403, 404) come back with an empty body, so callers treat this as optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_wire_keys() {
        let request = LoginRequest {
            username: "alice".to_string(),
            password: "pw".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "username": "alice", "password": "pw" }));
    }

    #[test]
    fn test_token_response_ignores_extra_fields() {
        let parsed: TokenResponse =
            serde_json::from_str(r#"{"token":"abc.def","message":"ok"}"#).unwrap();
        assert_eq!(parsed.token, "abc.def");
    }
}
