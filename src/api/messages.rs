//! Localized default messages for classified failures.
//!
//! The backend serves an Arabic-speaking organization, so Arabic is the
//! default table. Tables are plain data keyed by `ErrorKind`; a consumer can
//! override individual entries without touching classification logic.

use crate::error::ErrorKind;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Ar,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
        }
    }
}

const FALLBACK_MESSAGE: &str = "حدث خطأ غير متوقع";

/// Pluggable `kind → localized message` lookup table.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageTable {
    entries: BTreeMap<ErrorKind, String>,
}

impl MessageTable {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Ar => Self::arabic(),
            Locale::En => Self::english(),
        }
    }

    pub fn arabic() -> Self {
        Self::from_pairs([
            (
                ErrorKind::Network,
                "تعذر الاتصال بالخادم، يرجى التحقق من اتصالك بالإنترنت",
            ),
            (ErrorKind::Timeout, "انتهت مهلة الطلب، يرجى المحاولة مرة أخرى"),
            (
                ErrorKind::Validation,
                "البيانات المدخلة غير صحيحة، يرجى مراجعة الحقول",
            ),
            (
                ErrorKind::Authentication,
                "انتهت صلاحية الجلسة، يرجى تسجيل الدخول مرة أخرى",
            ),
            (ErrorKind::Forbidden, "ليس لديك صلاحية للقيام بهذا الإجراء"),
            (ErrorKind::NotFound, "العنصر المطلوب غير موجود"),
            (
                ErrorKind::ServerError,
                "حدث خطأ في الخادم، يرجى المحاولة لاحقاً",
            ),
            (ErrorKind::Unknown, FALLBACK_MESSAGE),
        ])
    }

    pub fn english() -> Self {
        Self::from_pairs([
            (
                ErrorKind::Network,
                "Could not reach the server, please check your connection",
            ),
            (ErrorKind::Timeout, "The request timed out, please try again"),
            (
                ErrorKind::Validation,
                "Some fields are invalid, please review your input",
            ),
            (
                ErrorKind::Authentication,
                "Your session has expired, please sign in again",
            ),
            (
                ErrorKind::Forbidden,
                "You do not have permission to perform this action",
            ),
            (ErrorKind::NotFound, "The requested item was not found"),
            (
                ErrorKind::ServerError,
                "The server encountered an error, please try again later",
            ),
            (ErrorKind::Unknown, "An unexpected error occurred"),
        ])
    }

    fn from_pairs<const N: usize>(pairs: [(ErrorKind, &str); N]) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(kind, message)| (kind, message.to_string()))
                .collect(),
        }
    }

    /// Override a single entry, e.g. to brand one message per deployment.
    pub fn with_message(mut self, kind: ErrorKind, message: impl Into<String>) -> Self {
        self.entries.insert(kind, message.into());
        self
    }

    pub fn message(&self, kind: ErrorKind) -> &str {
        self.entries
            .get(&kind)
            .map(String::as_str)
            .unwrap_or(FALLBACK_MESSAGE)
    }
}

impl Default for MessageTable {
    fn default() -> Self {
        Self::arabic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_arabic() {
        let table = MessageTable::default();
        assert_eq!(table, MessageTable::arabic());
        assert_eq!(table.message(ErrorKind::NotFound), "العنصر المطلوب غير موجود");
    }

    #[test]
    fn test_every_kind_has_an_entry_in_both_locales() {
        let kinds = [
            ErrorKind::Network,
            ErrorKind::Timeout,
            ErrorKind::Validation,
            ErrorKind::Authentication,
            ErrorKind::Forbidden,
            ErrorKind::NotFound,
            ErrorKind::ServerError,
            ErrorKind::Unknown,
        ];
        for table in [MessageTable::arabic(), MessageTable::english()] {
            for kind in kinds {
                assert!(!table.message(kind).is_empty());
            }
        }
    }

    #[test]
    fn test_with_message_overrides_one_entry() {
        let table = MessageTable::english().with_message(ErrorKind::Network, "offline");
        assert_eq!(table.message(ErrorKind::Network), "offline");
        assert_eq!(
            table.message(ErrorKind::Timeout),
            "The request timed out, please try again"
        );
    }

    #[test]
    fn test_for_locale_selects_table() {
        assert_eq!(MessageTable::for_locale(Locale::Ar), MessageTable::arabic());
        assert_eq!(MessageTable::for_locale(Locale::En), MessageTable::english());
        assert_eq!(Locale::default(), Locale::Ar);
        assert_eq!(Locale::En.as_str(), "en");
    }
}
