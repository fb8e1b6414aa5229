//! Metadata normalization.

#[cfg(feature = "language")]
mod detect;
mod language;
mod normalize;

#[cfg(feature = "language")]
pub use detect::WhatlangIdentifier;
pub use language::LanguageIdentifier;
pub use normalize::{normalize, MetadataNormalizer, NormalizeOptions};
