//! The bilingual field model.
//!
//! Every user-facing text field on a category, reply, or product carries
//! parallel English and Arabic values. Selection at render time picks
//! exactly one side based on the active locale; when the requested side is
//! blank the other side is returned instead, so a half-filled field still
//! renders something rather than an empty string.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::locale::Locale;

/// A text field stored in both supported languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualText {
    pub en: String,
    pub ar: String,
}

impl BilingualText {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    /// The side for the given locale.
    ///
    /// Falls back to the other side when the requested one is blank. Only
    /// when both sides are blank does this return an empty string.
    pub fn select(&self, locale: Locale) -> &str {
        let requested = self.side(locale);
        if !requested.trim().is_empty() {
            return requested;
        }
        self.side(locale.other())
    }

    /// The locale whose side [`select`](Self::select) would return.
    ///
    /// Matches the fallback rule: the requested locale when its side is
    /// populated, otherwise the other one. Lets callers report the text
    /// direction of what was actually rendered.
    pub fn resolved_locale(&self, locale: Locale) -> Locale {
        if self.side(locale).trim().is_empty() && !self.side(locale.other()).trim().is_empty() {
            return locale.other();
        }
        locale
    }

    /// True when both sides are empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.en.trim().is_empty() && self.ar.trim().is_empty()
    }

    /// Validate a required field: at least one side must be populated.
    ///
    /// A field with a single populated side is acceptable because
    /// [`select`](Self::select) falls back to it for the blank locale.
    pub fn validate_required(&self, field: &str) -> Result<(), CoreError> {
        if self.is_blank() {
            return Err(CoreError::Validation(format!(
                "Field '{field}' requires content in at least one language"
            )));
        }
        Ok(())
    }

    fn side(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Ar => &self.ar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_returns_requested_side() {
        let text = BilingualText::new("Hello", "مرحبا");
        assert_eq!(text.select(Locale::En), "Hello");
        assert_eq!(text.select(Locale::Ar), "مرحبا");
    }

    #[test]
    fn select_falls_back_when_requested_side_blank() {
        let text = BilingualText::new("Hello", "");
        assert_eq!(text.select(Locale::Ar), "Hello");

        let text = BilingualText::new("   ", "مرحبا");
        assert_eq!(text.select(Locale::En), "مرحبا");
    }

    #[test]
    fn select_on_fully_blank_field_is_empty() {
        let text = BilingualText::default();
        assert_eq!(text.select(Locale::En), "");
        assert_eq!(text.select(Locale::Ar), "");
    }

    #[test]
    fn resolved_locale_tracks_fallback() {
        let text = BilingualText::new("Hello", "");
        assert_eq!(text.resolved_locale(Locale::Ar), Locale::En);
        assert_eq!(text.resolved_locale(Locale::En), Locale::En);

        let both = BilingualText::new("Hello", "مرحبا");
        assert_eq!(both.resolved_locale(Locale::Ar), Locale::Ar);
    }

    #[test]
    fn required_passes_with_one_side() {
        let text = BilingualText::new("Hi", "");
        assert!(text.validate_required("title").is_ok());
    }

    #[test]
    fn required_fails_when_both_blank() {
        let text = BilingualText::new("", "  ");
        let err = text.validate_required("title").unwrap_err();
        match err {
            CoreError::Validation(msg) => assert!(msg.contains("title")),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }
}
