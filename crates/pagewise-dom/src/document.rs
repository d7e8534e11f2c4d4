//! Document preparation and the read-only node view.

use std::hash::{Hash, Hasher};

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::DomError;

/// Tags removed before any analysis runs.
const STRIPPED_TAGS: [&str; 3] = ["link", "style", "script"];

/// A parsed HTML document with `link`, `style` and `script` nodes removed.
///
/// The document owns the node arena; every [`DomNode`] borrowed from it is a
/// cheap index into that arena.
pub struct Document {
    html: Html,
}

/// Parse raw HTML and strip non-content nodes.
///
/// Parsing is tolerant: unclosed tags, stray end tags and a missing doctype
/// are repaired by the HTML5 tree builder instead of reported.
pub fn prepare_document(html: &str) -> Document {
    let mut parsed = Html::parse_document(html);

    let doomed: Vec<_> = parsed
        .tree
        .root()
        .descendants()
        .filter(|node| {
            node.value()
                .as_element()
                .is_some_and(|element| STRIPPED_TAGS.contains(&element.name()))
        })
        .map(|node| node.id())
        .collect();

    for id in &doomed {
        if let Some(mut node) = parsed.tree.get_mut(*id) {
            node.detach();
        }
    }

    debug!(stripped = doomed.len(), "Prepared document");
    Document { html: parsed }
}

impl Document {
    /// The `<html>` element.
    pub fn root(&self) -> DomNode<'_> {
        DomNode::new(self.html.root_element())
    }

    /// Every element in document order, starting with the root.
    pub fn elements(&self) -> impl Iterator<Item = DomNode<'_>> {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .map(DomNode::new)
    }

    /// Elements with the given tag name, in document order.
    pub fn elements_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = DomNode<'a>> {
        self.elements().filter(move |node| node.tag() == tag)
    }

    /// Run a caller-supplied CSS query.
    pub fn select(&self, css: &str) -> Result<Vec<DomNode<'_>>, DomError> {
        let selector = Selector::parse(css).map_err(|e| DomError::InvalidSelector {
            selector: css.to_string(),
            message: e.to_string(),
        })?;
        Ok(self.html.select(&selector).map(DomNode::new).collect())
    }

    /// Text of the first `<title>` element, if any.
    pub fn title(&self) -> Option<String> {
        self.elements_by_tag("title").next().map(|title| title.text())
    }

    /// The first `label[for=<id>]` in the document.
    pub fn label_for(&self, id: &str) -> Option<DomNode<'_>> {
        self.elements_by_tag("label")
            .find(|label| label.attr("for") == Some(id))
    }

    /// Elements whose `id` attribute equals `id`.
    pub fn elements_with_id<'a>(&'a self, id: &'a str) -> impl Iterator<Item = DomNode<'a>> {
        self.elements().filter(move |node| node.attr("id") == Some(id))
    }

    /// Serialize the cleaned document back to HTML.
    pub fn to_html(&self) -> String {
        self.html.html()
    }
}

/// Read-only view over one element of a [`Document`].
///
/// Parent and ancestor access go through the document arena; a node never
/// owns its relatives. Equality and hashing use node identity.
#[derive(Debug, Clone, Copy)]
pub struct DomNode<'a> {
    element: ElementRef<'a>,
}

impl<'a> DomNode<'a> {
    pub(crate) fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// Lowercase tag name.
    pub fn tag(&self) -> &'a str {
        self.element.value().name()
    }

    /// Check the tag name.
    #[inline]
    pub fn is(&self, tag: &str) -> bool {
        self.tag() == tag
    }

    /// Attribute value as authored.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Whether the attribute is present at all (boolean attributes included).
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Attribute value when present and not empty.
    pub fn non_empty_attr(&self, name: &str) -> Option<&'a str> {
        self.attr(name).filter(|value| !value.is_empty())
    }

    /// Attribute value when present and not blank.
    pub fn non_blank_attr(&self, name: &str) -> Option<&'a str> {
        self.attr(name).filter(|value| !value.trim().is_empty())
    }

    /// All attributes, sorted by name so rendering is stable.
    pub fn attributes(&self) -> Vec<(&'a str, &'a str)> {
        let mut attrs: Vec<_> = self.element.value().attrs().collect();
        attrs.sort_by(|a, b| a.0.cmp(b.0));
        attrs
    }

    /// Class tokens in authored order.
    pub fn classes(&self) -> impl Iterator<Item = &'a str> {
        self.attr("class").unwrap_or_default().split_whitespace()
    }

    /// Recursive text content, trimmed.
    pub fn text(&self) -> String {
        self.element.text().collect::<String>().trim().to_string()
    }

    /// Text of the direct text children only.
    pub fn own_text(&self) -> String {
        self.element
            .children()
            .filter_map(|child| child.value().as_text())
            .map(|text| &**text)
            .collect()
    }

    pub fn parent(&self) -> Option<DomNode<'a>> {
        self.element
            .parent()
            .and_then(ElementRef::wrap)
            .map(DomNode::new)
    }

    /// Element ancestors from the parent up to `<html>`.
    pub fn ancestors(&self) -> impl Iterator<Item = DomNode<'a>> {
        self.element
            .ancestors()
            .filter_map(ElementRef::wrap)
            .map(DomNode::new)
    }

    /// Nearest ancestor with the given tag.
    pub fn closest(&self, tag: &str) -> Option<DomNode<'a>> {
        self.ancestors().find(|ancestor| ancestor.is(tag))
    }

    /// Element children in order.
    pub fn children(&self) -> impl Iterator<Item = DomNode<'a>> {
        self.element
            .children()
            .filter_map(ElementRef::wrap)
            .map(DomNode::new)
    }

    /// Element descendants in document order, excluding `self`.
    pub fn descendants(&self) -> impl Iterator<Item = DomNode<'a>> {
        self.element
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .map(DomNode::new)
    }

    /// Whether `self` is `other` or lies inside it.
    pub fn is_within(&self, other: &DomNode<'a>) -> bool {
        self == other || self.ancestors().any(|ancestor| ancestor == *other)
    }

    /// Serialized markup of this element and its subtree.
    pub fn outer_html(&self) -> String {
        self.element.html()
    }

    /// Opening tag with sorted attributes, e.g. `<div class="a" id="b">`.
    pub fn start_tag(&self) -> String {
        let attrs: String = self
            .attributes()
            .into_iter()
            .map(|(name, value)| format!(" {}=\"{}\"", name, value))
            .collect();
        format!("<{}{}>", self.tag(), attrs)
    }
}

impl PartialEq for DomNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.element.id() == other.element.id()
    }
}

impl Eq for DomNode<'_> {}

impl Hash for DomNode<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.element.id().hash(state);
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
