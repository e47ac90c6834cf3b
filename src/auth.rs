//! Credential Token Storage
//!
//! The backend issues an opaque token on login/signup. It is kept raw in
//! `localStorage` so other tabs and reloads pick it up.

use gloo_storage::{LocalStorage, Storage};

use crate::models::AuthResponse;

pub const TOKEN_KEY: &str = "jwt";

pub fn load_token() -> Option<String> {
    LocalStorage::raw()
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|t| !t.is_empty())
}

pub fn store_token(token: &str) {
    if let Err(e) = LocalStorage::raw().set_item(TOKEN_KEY, token) {
        log::warn!("[AUTH] failed to persist token: {:?}", e);
    }
}

pub fn clear_token() {
    if let Err(e) = LocalStorage::raw().remove_item(TOKEN_KEY) {
        log::warn!("[AUTH] failed to clear token: {:?}", e);
    }
}

/// Token to persist after login/signup; cookie-only sessions carry none
pub fn session_token(response: &AuthResponse) -> Option<&str> {
    response
        .token
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// `Authorization` header value for a stored token
pub fn bearer(token: Option<&str>) -> Option<String> {
    token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| format!("Bearer {}", t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer() {
        assert_eq!(bearer(Some("abc.def")).as_deref(), Some("Bearer abc.def"));
        assert_eq!(bearer(Some("  ")), None);
        assert_eq!(bearer(None), None);
    }

    #[test]
    fn test_session_token() {
        let issued: AuthResponse = serde_json::from_str(r#"{"message":"ok","token":"abc"}"#).unwrap();
        assert_eq!(session_token(&issued), Some("abc"));

        // Cookie session: nothing to store, and Home still loads via the cookie
        let cookie_only: AuthResponse = serde_json::from_str(r#"{"message":"User logged in successfully"}"#).unwrap();
        assert_eq!(session_token(&cookie_only), None);

        let blank: AuthResponse = serde_json::from_str(r#"{"token":""}"#).unwrap();
        assert_eq!(session_token(&blank), None);
    }
}
