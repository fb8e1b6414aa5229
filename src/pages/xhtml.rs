//! XHTML to structural events.
//!
//! Content engines commonly hand over their structural output as XHTML
//! (paginated documents wrap each page in `<div class="page">`). This module
//! turns such markup into [`StructuralEvent`]s with `quick-xml`.

use std::borrow::Cow;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, Result};
use crate::model::{EventSink, StructuralEvent};

/// Iterator over the structural events of an XHTML document.
///
/// Mismatched end tags are passed through as-is so that malformed markup
/// degrades instead of aborting; syntax errors end the iteration with an
/// [`Error::Markup`].
///
/// # Example
///
/// ```
/// use unpage::pages::XhtmlEvents;
/// use unpage::StructuralEvent;
///
/// let events: Vec<_> = XhtmlEvents::new("<p>Hi &amp; bye</p>")
///     .collect::<unpage::Result<_>>()
///     .unwrap();
/// assert_eq!(events[1], StructuralEvent::characters("Hi & bye"));
/// ```
pub struct XhtmlEvents<'a> {
    reader: Reader<&'a [u8]>,
    /// Close event owed for a self-closing element
    pending: Option<StructuralEvent>,
    done: bool,
}

impl<'a> XhtmlEvents<'a> {
    /// Start reading an XHTML document.
    pub fn new(xhtml: &'a str) -> Self {
        let mut reader = Reader::from_str(xhtml);
        reader.check_end_names(false);
        Self {
            reader,
            pending: None,
            done: false,
        }
    }

    fn open_event(start: &BytesStart<'_>) -> StructuralEvent {
        let tag_name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut attributes = std::collections::HashMap::new();

        for attr in start.attributes().with_checks(false) {
            let attr = match attr {
                Ok(attr) => attr,
                Err(e) => {
                    log::warn!("Skipping malformed attribute on <{}>: {}", tag_name, e);
                    continue;
                }
            };
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = match attr.unescape_value() {
                Ok(value) => value.into_owned(),
                Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
            };
            attributes.entry(key).or_insert(value);
        }

        StructuralEvent::ElementOpen {
            tag_name,
            attributes,
        }
    }
}

impl Iterator for XhtmlEvents<'_> {
    type Item = Result<StructuralEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.pending.take() {
            return Some(Ok(event));
        }
        if self.done {
            return None;
        }

        loop {
            match self.reader.read_event() {
                Ok(Event::Start(e)) => return Some(Ok(Self::open_event(&e))),
                Ok(Event::Empty(e)) => {
                    let open = Self::open_event(&e);
                    if let Some(tag_name) = open.tag_name() {
                        self.pending = Some(StructuralEvent::close(tag_name));
                    }
                    return Some(Ok(open));
                }
                Ok(Event::Text(e)) => {
                    let text = match e.unescape() {
                        Ok(text) => text.into_owned(),
                        Err(err) => {
                            log::warn!("Keeping undecodable text as-is: {}", err);
                            String::from_utf8_lossy(&e).into_owned()
                        }
                    };
                    return Some(Ok(StructuralEvent::characters(text)));
                }
                Ok(Event::CData(e)) => {
                    let raw: Cow<'_, [u8]> = e.into_inner();
                    return Some(Ok(StructuralEvent::characters(
                        String::from_utf8_lossy(&raw).into_owned(),
                    )));
                }
                Ok(Event::End(e)) => {
                    let tag_name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    return Some(Ok(StructuralEvent::close(tag_name)));
                }
                Ok(Event::Eof) => {
                    self.done = true;
                    return None;
                }
                // Declarations, comments, processing instructions, doctypes
                Ok(_) => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(Error::from(e)));
                }
            }
        }
    }
}

/// Push every event of an XHTML document into a sink.
///
/// Events before a syntax error have already been delivered when the error
/// is returned.
pub fn stream_xhtml(xhtml: &str, sink: &mut dyn EventSink) -> Result<()> {
    for event in XhtmlEvents::new(xhtml) {
        sink.on_event(event?);
    }
    Ok(())
}

/// Collect all events of an XHTML document.
pub fn parse_xhtml(xhtml: &str) -> Result<Vec<StructuralEvent>> {
    XhtmlEvents::new(xhtml).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::PageAccumulator;

    #[test]
    fn test_basic_events() {
        let events = parse_xhtml(r#"<div class="page"><p>Hello</p></div>"#).unwrap();
        assert_eq!(
            events,
            vec![
                StructuralEvent::open("div", [("class", "page")]),
                StructuralEvent::open("p", Vec::<(String, String)>::new()),
                StructuralEvent::characters("Hello"),
                StructuralEvent::close("p"),
                StructuralEvent::close("div"),
            ]
        );
    }

    #[test]
    fn test_empty_element_yields_open_and_close() {
        let events = parse_xhtml(r#"<p>a<br/>b</p>"#).unwrap();
        assert_eq!(events[2], StructuralEvent::open("br", Vec::<(String, String)>::new()));
        assert_eq!(events[3], StructuralEvent::close("br"));
        assert_eq!(events[4], StructuralEvent::characters("b"));
    }

    #[test]
    fn test_entities_are_unescaped() {
        let events = parse_xhtml(r#"<p title="a &lt; b">x &gt; y</p>"#).unwrap();
        assert_eq!(events[0].attribute("title"), Some("a < b"));
        assert_eq!(events[1], StructuralEvent::characters("x > y"));
    }

    #[test]
    fn test_cdata_becomes_characters() {
        let events = parse_xhtml("<p><![CDATA[1 < 2]]></p>").unwrap();
        assert_eq!(events[1], StructuralEvent::characters("1 < 2"));
    }

    #[test]
    fn test_declarations_and_comments_are_skipped() {
        let xhtml = "<?xml version=\"1.0\"?><!-- note --><html></html>";
        let events = parse_xhtml(xhtml).unwrap();
        assert_eq!(
            events,
            vec![StructuralEvent::open("html", Vec::<(String, String)>::new()), StructuralEvent::close("html")]
        );
    }

    #[test]
    fn test_namespaced_names_are_kept() {
        let events = parse_xhtml(r#"<xhtml:div class="page">x</xhtml:div>"#).unwrap();
        assert_eq!(events[0].tag_name(), Some("xhtml:div"));
        assert_eq!(events[2].tag_name(), Some("xhtml:div"));
    }

    #[test]
    fn test_mismatched_end_tag_is_tolerated() {
        let events = parse_xhtml("<div><p>x</div></p>").unwrap();
        assert_eq!(events.len(), 5);
    }

    #[test]
    fn test_stream_into_accumulator() {
        let xhtml = r#"<body><div class="page"><p>One</p></div>
<div class="page"><p>Two</p></div></body>"#;
        let mut acc = PageAccumulator::new(true);
        stream_xhtml(xhtml, &mut acc).unwrap();
        assert_eq!(acc.finish(), vec!["One", "Two"]);
    }
}
