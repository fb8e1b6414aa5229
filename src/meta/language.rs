//! Language identification seam.
//!
//! The identification algorithm itself lives outside this crate; callers
//! plug one in through [`LanguageIdentifier`]. Any `Fn(&str) -> String`
//! closure qualifies.

/// External capability returning a language tag (e.g. `"en"`) for a text.
pub trait LanguageIdentifier: Send + Sync {
    /// Identify the language of a non-empty, whitespace-compressed text.
    fn identify_language(&self, text: &str) -> String;
}

impl<F> LanguageIdentifier for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn identify_language(&self, text: &str) -> String {
        self(text)
    }
}
