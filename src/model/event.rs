//! Structural events emitted by a content engine.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One unit of a document's parsed markup stream, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StructuralEvent {
    /// An element was opened.
    ElementOpen {
        /// Qualified tag name (may carry a namespace prefix, e.g. `xhtml:div`)
        tag_name: String,
        /// Attribute name to value
        attributes: HashMap<String, String>,
    },

    /// Character data.
    Characters {
        /// Raw text, not trimmed
        text: String,
    },

    /// An element was closed.
    ElementClose {
        /// Qualified tag name
        tag_name: String,
    },
}

impl StructuralEvent {
    /// Create an element-open event.
    ///
    /// ```
    /// use unpage::StructuralEvent;
    ///
    /// let event = StructuralEvent::open("div", [("class", "page")]);
    /// assert_eq!(event.attribute("class"), Some("page"));
    /// ```
    pub fn open<I, K, V>(tag_name: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        StructuralEvent::ElementOpen {
            tag_name: tag_name.into(),
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Create a character-data event.
    pub fn characters(text: impl Into<String>) -> Self {
        StructuralEvent::Characters { text: text.into() }
    }

    /// Create an element-close event.
    pub fn close(tag_name: impl Into<String>) -> Self {
        StructuralEvent::ElementClose {
            tag_name: tag_name.into(),
        }
    }

    /// Tag name for open and close events.
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            StructuralEvent::ElementOpen { tag_name, .. }
            | StructuralEvent::ElementClose { tag_name } => Some(tag_name),
            StructuralEvent::Characters { .. } => None,
        }
    }

    /// Look up an attribute value on an element-open event.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            StructuralEvent::ElementOpen { attributes, .. } => {
                attributes.get(name).map(String::as_str)
            }
            _ => None,
        }
    }
}

/// Push-based consumer of structural events.
///
/// Content engines drive a sink one event at a time, in document order,
/// without re-entrancy.
pub trait EventSink {
    /// Receive the next event.
    fn on_event(&mut self, event: StructuralEvent);
}

impl<F> EventSink for F
where
    F: FnMut(StructuralEvent),
{
    fn on_event(&mut self, event: StructuralEvent) {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_event_attributes() {
        let event = StructuralEvent::open("xhtml:div", [("class", "page"), ("id", "p1")]);
        assert_eq!(event.tag_name(), Some("xhtml:div"));
        assert_eq!(event.attribute("class"), Some("page"));
        assert_eq!(event.attribute("id"), Some("p1"));
        assert_eq!(event.attribute("style"), None);
    }

    #[test]
    fn test_non_open_events_have_no_attributes() {
        assert_eq!(StructuralEvent::close("div").attribute("class"), None);
        assert_eq!(StructuralEvent::characters("x").attribute("class"), None);
        assert_eq!(StructuralEvent::characters("x").tag_name(), None);
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |event: StructuralEvent| seen.push(event);
            sink.on_event(StructuralEvent::characters("a"));
            sink.on_event(StructuralEvent::close("p"));
        }
        assert_eq!(seen.len(), 2);
    }
}
