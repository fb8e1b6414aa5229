//! Data model shared by the page accumulator, the metadata normalizer and
//! content engines.

mod event;
mod metadata;

pub use event::{EventSink, StructuralEvent};
pub use metadata::{MetadataValue, RawMetadata, UnifiedMetadata};
