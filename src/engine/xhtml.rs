//! Content engine over pre-rendered XHTML.
//!
//! Reads the XHTML that parsing engines such as Apache Tika emit: metadata
//! as `<meta name=".." content="..">` entries in `<head>`, content in
//! `<body>`, one `<div class="page">` per page for paginated formats.

use crate::error::{Error, Result};
use crate::media::{is_pdf_bytes, MediaType};
use crate::model::{EventSink, RawMetadata, StructuralEvent};
use crate::pages::{stream_xhtml, XhtmlEvents};

use super::{ContentEngine, TextExtraction};

const UTF8_BOM: &str = "\u{FEFF}";
const CONTENT_TYPE_KEY: &str = "Content-Type";

/// XHTML content engine.
#[derive(Debug, Clone, Default)]
pub struct XhtmlEngine {
    _private: (),
}

impl XhtmlEngine {
    /// Create a new XHTML engine.
    pub fn new() -> Self {
        Self { _private: () }
    }

    fn markup<'a>(&self, data: &'a [u8]) -> Result<&'a str> {
        if is_pdf_bytes(data) {
            return Err(Error::UnsupportedFormat(
                "binary PDF input, expected engine-rendered XHTML".into(),
            ));
        }
        let text = std::str::from_utf8(data)?;
        Ok(text.strip_prefix(UTF8_BOM).unwrap_or(text))
    }
}

impl ContentEngine for XhtmlEngine {
    fn name(&self) -> &str {
        "xhtml"
    }

    fn detect(&self, data: &[u8]) -> Result<MediaType> {
        let xhtml = self.markup(data)?;

        let mut head = HeadCollector::default();
        for event in XhtmlEvents::new(xhtml) {
            let event = event?;
            let body_started = matches!(
                &event,
                StructuralEvent::ElementOpen { tag_name, .. } if local_name(tag_name) == "body"
            );
            if body_started {
                break;
            }
            head.on_event(event);
        }

        let media = head
            .metadata
            .get_non_empty(CONTENT_TYPE_KEY)
            .and_then(MediaType::parse)
            .unwrap_or_else(|| MediaType::sniff(data));
        log::debug!("Detected media type: {}", media);
        Ok(media)
    }

    fn extract_text(&self, data: &[u8]) -> Result<TextExtraction> {
        let xhtml = self.markup(data)?;

        let mut collector = TextCollector::default();
        stream_xhtml(xhtml, &mut collector)?;
        log::debug!(
            "Extracted {} bytes of text and {} metadata entries",
            collector.text.len(),
            collector.head.metadata.len()
        );

        Ok(TextExtraction::new(collector.text, collector.head.metadata))
    }

    fn stream_events(&self, data: &[u8], sink: &mut dyn EventSink) -> Result<()> {
        let xhtml = self.markup(data)?;
        stream_xhtml(xhtml, sink)
    }
}

/// Tag name without its namespace prefix.
fn local_name(tag_name: &str) -> &str {
    tag_name.rsplit(':').next().unwrap_or(tag_name)
}

/// Collects `<meta name content>` pairs inside `<head>`.
#[derive(Default)]
struct HeadCollector {
    in_head: bool,
    metadata: RawMetadata,
}

impl EventSink for HeadCollector {
    fn on_event(&mut self, event: StructuralEvent) {
        match &event {
            StructuralEvent::ElementOpen { tag_name, .. } => match local_name(tag_name) {
                "head" => self.in_head = true,
                "meta" if self.in_head => {
                    if let (Some(name), Some(content)) =
                        (event.attribute("name"), event.attribute("content"))
                    {
                        self.metadata.insert_first(name, content);
                    }
                }
                _ => {}
            },
            StructuralEvent::ElementClose { tag_name } if local_name(tag_name) == "head" => {
                self.in_head = false;
            }
            _ => {}
        }
    }
}

/// Collects body text plus head metadata in one pass.
#[derive(Default)]
struct TextCollector {
    head: HeadCollector,
    in_body: bool,
    text: String,
}

impl EventSink for TextCollector {
    fn on_event(&mut self, event: StructuralEvent) {
        match &event {
            StructuralEvent::ElementOpen { tag_name, .. } if local_name(tag_name) == "body" => {
                self.in_body = true;
            }
            StructuralEvent::ElementClose { tag_name } if local_name(tag_name) == "body" => {
                self.in_body = false;
            }
            StructuralEvent::Characters { text } if self.in_body => {
                self.text.push_str(text);
            }
            _ => {}
        }
        self.head.on_event(event);
    }
}
