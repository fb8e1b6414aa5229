//! Page accumulator: rebuilds logical pages from a structural event stream.
//!
//! The accumulator is a push-based state machine. A page starts at every
//! element-open that carries the page marker and ends at the next close of
//! the page-container tag. Nesting depth is not tracked, so a nested element
//! whose tag matches the container tag ends accumulation early; the text that
//! follows it up to the real close is merged back into the same page.
//!
//! # Example
//!
//! ```
//! use unpage::{PageAccumulator, StructuralEvent};
//!
//! let mut acc = PageAccumulator::new(true);
//! acc.on_event(StructuralEvent::open("div", [("class", "page")]));
//! acc.on_event(StructuralEvent::characters("  first\n page "));
//! acc.on_event(StructuralEvent::close("div"));
//!
//! assert_eq!(acc.finish(), vec!["first page".to_string()]);
//! ```

use std::collections::HashMap;

use crate::model::{EventSink, StructuralEvent};
use crate::text::compress_whitespace;

use super::PageMarker;

/// Streaming page splitter. One instance per document.
#[derive(Debug, Clone)]
pub struct PageAccumulator {
    marker: PageMarker,
    compress: bool,
    /// `None` until the first page opens
    buffer: Option<String>,
    /// Number of page opens observed; also the index of the current page
    page_number: u32,
    pages: HashMap<u32, String>,
}

impl PageAccumulator {
    /// Create an accumulator using the default `<div class="page">` marker.
    pub fn new(compress: bool) -> Self {
        Self::with_marker(compress, PageMarker::default())
    }

    /// Create an accumulator with a custom page marker.
    pub fn with_marker(compress: bool, marker: PageMarker) -> Self {
        Self {
            marker,
            compress,
            buffer: None,
            page_number: 0,
            pages: HashMap::new(),
        }
    }

    /// Feed the next event. Never fails; malformed streams degrade.
    pub fn on_event(&mut self, event: StructuralEvent) {
        match event {
            StructuralEvent::ElementOpen {
                tag_name,
                attributes,
            } => {
                if self.marker.matches_tag(&tag_name)
                    && self
                        .marker
                        .matches_value(attributes.get(&self.marker.attribute).map(String::as_str))
                {
                    self.start_page();
                }
            }
            StructuralEvent::Characters { text } => {
                if let Some(buffer) = self.buffer.as_mut() {
                    buffer.push_str(&text);
                }
            }
            StructuralEvent::ElementClose { tag_name } => {
                if self.marker.matches_tag(&tag_name) {
                    self.end_page();
                }
            }
        }
    }

    /// Number of page opens observed so far.
    pub fn page_count(&self) -> u32 {
        self.page_number
    }

    /// Whether character data is currently being captured.
    pub fn is_capturing(&self) -> bool {
        self.buffer.is_some()
    }

    /// Consume the accumulator and return pages `1..=N` in order.
    ///
    /// Pages that were opened but never stored come back as empty strings,
    /// so the length always equals the number of page opens.
    pub fn finish(mut self) -> Vec<String> {
        let pages: Vec<String> = (1..=self.page_number)
            .map(|i| self.pages.remove(&i).unwrap_or_default())
            .collect();
        log::debug!("Assembled {} pages", pages.len());
        pages
    }

    fn start_page(&mut self) {
        self.page_number += 1;
        self.buffer = Some(String::new());
        log::trace!("Page {} started", self.page_number);
    }

    fn end_page(&mut self) {
        // A container close before the first page has nothing to store.
        let Some(buffer) = self.buffer.take() else {
            log::trace!("Ignoring page close outside of any page");
            return;
        };
        self.buffer = Some(String::new());

        let mut page = if self.compress {
            compress_whitespace(&buffer)
        } else {
            buffer
        };

        if let Some(existing) = self.pages.get(&self.page_number) {
            log::trace!("Merging text into page {}", self.page_number);
            page = format!("{} {}", existing, page).trim().to_string();
        }

        self.pages.insert(self.page_number, page);
    }
}

impl EventSink for PageAccumulator {
    fn on_event(&mut self, event: StructuralEvent) {
        PageAccumulator::on_event(self, event);
    }
}

impl Extend<StructuralEvent> for PageAccumulator {
    fn extend<I: IntoIterator<Item = StructuralEvent>>(&mut self, events: I) {
        for event in events {
            PageAccumulator::on_event(self, event);
        }
    }
}

/// Split a complete event stream into pages with the default marker.
///
/// ```
/// use unpage::{split_pages, StructuralEvent};
///
/// let events = vec![
///     StructuralEvent::open("div", [("class", "page")]),
///     StructuralEvent::characters("A"),
///     StructuralEvent::close("div"),
/// ];
/// assert_eq!(split_pages(events, true), vec!["A"]);
/// ```
pub fn split_pages<I>(events: I, compress: bool) -> Vec<String>
where
    I: IntoIterator<Item = StructuralEvent>,
{
    let mut acc = PageAccumulator::new(compress);
    acc.extend(events);
    acc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_open() -> StructuralEvent {
        StructuralEvent::open("div", [("class", "page")])
    }

    fn div_close() -> StructuralEvent {
        StructuralEvent::close("div")
    }

    fn text(s: &str) -> StructuralEvent {
        StructuralEvent::characters(s)
    }

    #[test]
    fn test_two_pages() {
        let pages = split_pages(
            vec![page_open(), text("A"), div_close(), page_open(), text("B"), div_close()],
            true,
        );
        assert_eq!(pages, vec!["A", "B"]);
    }

    #[test]
    fn test_empty_stream() {
        let acc = PageAccumulator::new(true);
        assert_eq!(acc.page_count(), 0);
        assert!(acc.finish().is_empty());
    }

    #[test]
    fn test_characters_before_first_page_are_ignored() {
        let pages = split_pages(vec![text("preamble"), page_open(), text("body"), div_close()], true);
        assert_eq!(pages, vec!["body"]);
    }

    #[test]
    fn test_stray_characters_between_pages_are_absorbed() {
        let pages = split_pages(
            vec![
                page_open(),
                text("one"),
                div_close(),
                text("between"),
                page_open(),
                text("two"),
                div_close(),
            ],
            true,
        );
        assert_eq!(pages, vec!["one", "two"]);
    }

    #[test]
    fn test_close_before_any_page_is_ignored() {
        let pages = split_pages(vec![div_close(), page_open(), text("x"), div_close()], true);
        assert_eq!(pages, vec!["x"]);
    }

    #[test]
    fn test_namespaced_tag() {
        let pages = split_pages(
            vec![
                StructuralEvent::open("xhtml:div", [("class", "page")]),
                text("ns"),
                StructuralEvent::close("xhtml:div"),
            ],
            true,
        );
        assert_eq!(pages, vec!["ns"]);
    }

    #[test]
    fn test_marker_value_is_case_sensitive() {
        let pages = split_pages(
            vec![
                StructuralEvent::open("div", [("class", "Page")]),
                text("nope"),
                div_close(),
            ],
            true,
        );
        assert!(pages.is_empty());
    }

    #[test]
    fn test_nested_text_is_captured() {
        let pages = split_pages(
            vec![
                page_open(),
                StructuralEvent::open("p", Vec::<(String, String)>::new()),
                text("Hello"),
                StructuralEvent::close("p"),
                StructuralEvent::open("p", Vec::<(String, String)>::new()),
                text(" world"),
                StructuralEvent::close("p"),
                div_close(),
            ],
            true,
        );
        assert_eq!(pages, vec!["Hello world"]);
    }

    #[test]
    fn test_nested_container_splits_and_merges() {
        // The inner div close ends capture early; the tail is merged back.
        let pages = split_pages(
            vec![
                page_open(),
                text("head"),
                StructuralEvent::open("div", [("class", "annotation")]),
                text("note"),
                div_close(),
                text("tail"),
                div_close(),
            ],
            true,
        );
        assert_eq!(pages, vec!["headnote tail"]);
    }

    #[test]
    fn test_uncompressed_text_is_verbatim() {
        let pages = split_pages(vec![page_open(), text("  a \n b  "), div_close()], false);
        assert_eq!(pages, vec!["  a \n b  "]);
    }

    #[test]
    fn test_unclosed_final_page_is_empty() {
        let mut acc = PageAccumulator::new(true);
        acc.extend(vec![page_open(), text("done"), div_close(), page_open(), text("lost")]);
        assert!(acc.is_capturing());
        assert_eq!(acc.page_count(), 2);
        assert_eq!(acc.finish(), vec!["done", ""]);
    }

    #[test]
    fn test_custom_marker() {
        let marker = PageMarker::new("section", "data-role", "sheet");
        let mut acc = PageAccumulator::with_marker(true, marker);
        acc.extend(vec![
            StructuralEvent::open("section", [("data-role", "sheet")]),
            text("Sheet 1"),
            StructuralEvent::close("section"),
            page_open(),
            text("ignored"),
            div_close(),
        ]);
        assert_eq!(acc.finish(), vec!["Sheet 1"]);
    }
}
