use std::collections::BTreeMap;

use serde::Serialize;

use crate::engine::history::ChartSeries;

/// What an element displays. HTML content is always built from escaped text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Content {
    Text(String),
    Html(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Element {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

/// A single write to one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    Content(&'static str, Content),
    Class(&'static str, String),
}

/// The output of one renderer call: a batch of element writes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    updates: Vec<Update>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, id: &'static str, text: impl Into<String>) -> Self {
        self.updates.push(Update::Content(id, Content::Text(text.into())));
        self
    }

    pub fn html(mut self, id: &'static str, html: impl Into<String>) -> Self {
        self.updates.push(Update::Content(id, Content::Html(html.into())));
        self
    }

    pub fn class(mut self, id: &'static str, class: impl Into<String>) -> Self {
        self.updates.push(Update::Class(id, class.into()));
        self
    }

    pub fn extend(mut self, other: Fragment) -> Self {
        self.updates.extend(other.updates);
        self
    }

    pub fn updates(&self) -> &[Update] {
        &self.updates
    }
}

/// Server-side model of the operator page.
///
/// `revision` moves only when an apply changes something observable, so
/// re-rendering identical input is a no-op.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    revision: u64,
    elements: BTreeMap<&'static str, Element>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chart: Option<ChartSeries>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        match self.element(id)?.content.as_ref()? {
            Content::Text(text) => Some(text),
            Content::Html(_) => None,
        }
    }

    pub fn html(&self, id: &str) -> Option<&str> {
        match self.element(id)?.content.as_ref()? {
            Content::Html(html) => Some(html),
            Content::Text(_) => None,
        }
    }

    pub fn class(&self, id: &str) -> Option<&str> {
        self.element(id)?.class.as_deref()
    }

    pub fn chart(&self) -> Option<&ChartSeries> {
        self.chart.as_ref()
    }

    /// Apply a fragment. Returns whether anything changed.
    pub fn apply(&mut self, fragment: &Fragment) -> bool {
        let mut changed = false;
        for update in fragment.updates() {
            match update {
                Update::Content(id, content) => {
                    let element = self.elements.entry(*id).or_default();
                    if element.content.as_ref() != Some(content) {
                        element.content = Some(content.clone());
                        changed = true;
                    }
                }
                Update::Class(id, class) => {
                    let element = self.elements.entry(*id).or_default();
                    if element.class.as_ref() != Some(class) {
                        element.class = Some(class.clone());
                        changed = true;
                    }
                }
            }
        }
        if changed {
            self.revision += 1;
        }
        changed
    }

    pub fn set_chart(&mut self, series: ChartSeries) -> bool {
        if self.chart.as_ref() == Some(&series) {
            return false;
        }
        self.chart = Some(series);
        self.revision += 1;
        true
    }
}

/// Escape text for inclusion in HTML content or a quoted attribute.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
