//! Page splitting from structural event streams.

mod accumulator;
mod marker;
mod xhtml;

pub use accumulator::{split_pages, PageAccumulator};
pub use marker::PageMarker;
pub use xhtml::{parse_xhtml, stream_xhtml, XhtmlEvents};
