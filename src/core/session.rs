//! Explicit session object injected into the API client.
//!
//! The base URL, bearer token and locale travel together as one value that
//! the caller owns; nothing in this crate reads them from ambient storage.
//! Clearing the token after an `Authentication` failure is the consumer's
//! act, expressed through `clear_token`.

use crate::api::messages::Locale;
use crate::storage::config::Profile;

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub base_url: String,
    pub token: Option<String>,
    pub locale: Locale,
    pub timeout_secs: Option<u64>,
}

impl Session {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            locale: Locale::default(),
            timeout_secs: None,
        }
    }

    pub fn from_profile(profile: &Profile) -> Self {
        let mut session = Session::new(profile.base_url.clone());
        session.locale = profile.locale();
        session.timeout_secs = profile.timeout_secs;
        session
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_trimmed() {
        let session = Session::new("https://api.swf.example/");
        assert_eq!(session.base_url, "https://api.swf.example");
    }

    #[test]
    fn test_token_lifecycle() {
        let mut session = Session::new("https://api.swf.example").with_token("abc");
        assert!(session.is_authenticated());
        session.clear_token();
        assert!(!session.is_authenticated());
        session.set_token(Some("def".to_string()));
        assert_eq!(session.token.as_deref(), Some("def"));
    }

    #[test]
    fn test_from_profile() {
        let profile = Profile {
            base_url: "https://api.swf.example/".to_string(),
            locale: Some("en".to_string()),
            timeout_secs: Some(10),
            per_page: None,
        };
        let session = Session::from_profile(&profile);
        assert_eq!(session.base_url, "https://api.swf.example");
        assert_eq!(session.locale, Locale::En);
        assert_eq!(session.timeout_secs, Some(10));
        assert!(!session.is_authenticated());
    }
}
