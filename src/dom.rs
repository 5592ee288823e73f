//! Host document seam.
//!
//! The widget only needs four things from the page it is mounted in: an
//! id lookup, a guarded stylesheet insert, a selector query, and the
//! ability to replace an element's content. [`Document`] captures exactly
//! that, and [`MemoryDocument`] implements it in memory so the card can be
//! rendered outside a browser and serialized into a standalone page.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::format::escape_markup;

/// Handle to an element owned by a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

pub trait Document: Send + Sync {
    /// Whether any element or style block carries `id`
    fn contains_id(&self, id: &str) -> bool;

    /// Insert a style block keyed by `id` unless one already exists.
    ///
    /// The check and the insert happen atomically. Returns `true` if the
    /// block was inserted by this call.
    fn insert_style_once(&self, id: &str, css: &str) -> bool;

    /// First element matching `selector`
    fn query_selector(&self, selector: &str) -> Option<ElementId>;

    /// Whether `element` still belongs to this document
    fn contains_element(&self, element: ElementId) -> bool;

    /// Replace the content of `element`
    fn set_inner_html(&self, element: ElementId, html: String);
}

#[derive(Debug, Default)]
struct Element {
    id: Option<String>,
    class: Option<String>,
    inner_html: String,
}

#[derive(Debug, Default)]
struct Inner {
    styles: Vec<(String, String)>,
    elements: Vec<Element>,
}

/// In-memory document, cheap to clone; clones share the same tree
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty `<div id="...">` to the body
    pub fn append_element(&self, id: &str) -> ElementId {
        self.push(Element {
            id: Some(id.to_string()),
            ..Element::default()
        })
    }

    /// Append an empty `<div class="...">` to the body
    pub fn append_element_with_class(&self, class: &str) -> ElementId {
        self.push(Element {
            class: Some(class.to_string()),
            ..Element::default()
        })
    }

    fn push(&self, element: Element) -> ElementId {
        let mut inner = self.inner.lock();
        inner.elements.push(element);
        ElementId(inner.elements.len() - 1)
    }

    pub fn inner_html(&self, element: ElementId) -> Option<String> {
        self.inner
            .lock()
            .elements
            .get(element.0)
            .map(|e| e.inner_html.clone())
    }

    pub fn style_count(&self) -> usize {
        self.inner.lock().styles.len()
    }

    /// Serialize into a standalone HTML page
    pub fn to_html_page(&self, title: &str) -> String {
        let inner = self.inner.lock();

        let styles: String = inner
            .styles
            .iter()
            .map(|(id, css)| format!(r#"<style id="{}">{}</style>"#, escape_markup(id), css))
            .collect();

        let body: String = inner
            .elements
            .iter()
            .map(|e| {
                let id = e
                    .id
                    .as_deref()
                    .map(|id| format!(r#" id="{}""#, escape_markup(id)))
                    .unwrap_or_default();
                let class = e
                    .class
                    .as_deref()
                    .map(|c| format!(r#" class="{}""#, escape_markup(c)))
                    .unwrap_or_default();
                format!("<div{}{}>{}</div>\n", id, class, e.inner_html)
            })
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{}</title>
{}
</head>
<body>
{}</body>
</html>
"#,
            escape_markup(title),
            styles,
            body
        )
    }
}

impl Inner {
    fn has_id(&self, id: &str) -> bool {
        self.styles.iter().any(|(style_id, _)| style_id == id)
            || self.elements.iter().any(|e| e.id.as_deref() == Some(id))
    }
}

impl Document for MemoryDocument {
    fn contains_id(&self, id: &str) -> bool {
        self.inner.lock().has_id(id)
    }

    fn insert_style_once(&self, id: &str, css: &str) -> bool {
        let mut inner = self.inner.lock();
        if inner.has_id(id) {
            return false;
        }
        inner.styles.push((id.to_string(), css.to_string()));
        true
    }

    /// Supports `#id` and `.class` selectors
    fn query_selector(&self, selector: &str) -> Option<ElementId> {
        let selector = selector.trim();
        let inner = self.inner.lock();
        let position = if let Some(id) = selector.strip_prefix('#') {
            inner.elements.iter().position(|e| e.id.as_deref() == Some(id))
        } else if let Some(class) = selector.strip_prefix('.') {
            inner.elements.iter().position(|e| {
                e.class
                    .as_deref()
                    .is_some_and(|c| c.split_whitespace().any(|c| c == class))
            })
        } else {
            None
        };
        position.map(ElementId)
    }

    fn contains_element(&self, element: ElementId) -> bool {
        element.0 < self.inner.lock().elements.len()
    }

    fn set_inner_html(&self, element: ElementId, html: String) {
        if let Some(e) = self.inner.lock().elements.get_mut(element.0) {
            e.inner_html = html;
        }
    }
}
