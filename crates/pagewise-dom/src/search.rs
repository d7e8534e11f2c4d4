//! Text search over a prepared document.

use std::collections::HashSet;

use tracing::debug;

use crate::document::{Document, DomNode};
use crate::error::DomError;
use crate::nearby::add_nearby_interactive_elements;

/// Attributes searched alongside the element's own text.
const MATCHED_ATTRIBUTES: [&str; 3] = ["value", "placeholder", "type"];

/// Find elements mentioning `text`, case-insensitively.
///
/// An element matches when its direct text or one of its `value`,
/// `placeholder` or `type` attributes contains the text. Elements referenced
/// by a matching `<label for>` are added, then the set is expanded with nearby
/// interactive elements. With `within`, only elements matching that CSS
/// selector or nested inside a match are kept.
pub fn find_elements_by_text<'a>(
    document: &'a Document,
    text: &str,
    within: Option<&str>,
) -> Result<Vec<DomNode<'a>>, DomError> {
    if text.trim().is_empty() {
        return Err(DomError::EmptyQuery);
    }
    let needle = text.to_lowercase();

    let containers = match within {
        Some(css) => Some(document.select(css)?),
        None => None,
    };

    let mut matches: Vec<DomNode<'a>> = document
        .elements()
        .filter(|element| matches_text(element, &needle))
        .collect();
    add_labelled_elements(document, &needle, &mut matches);

    let mut found = add_nearby_interactive_elements(&matches);
    if let Some(containers) = &containers {
        found.retain(|element| {
            containers
                .iter()
                .any(|container| element.is_within(container))
        });
    }

    debug!(text = %text, direct = matches.len(), total = found.len(), "Text search");
    Ok(found)
}

fn matches_text(element: &DomNode<'_>, needle: &str) -> bool {
    element.own_text().to_lowercase().contains(needle)
        || MATCHED_ATTRIBUTES.iter().any(|name| {
            element
                .attr(name)
                .is_some_and(|value| value.to_lowercase().contains(needle))
        })
}

/// Append the targets of labels whose text contains the needle.
fn add_labelled_elements<'a>(document: &'a Document, needle: &str, matches: &mut Vec<DomNode<'a>>) {
    let mut seen: HashSet<DomNode<'a>> = matches.iter().copied().collect();

    for label in document.elements_by_tag("label") {
        if !label.text().to_lowercase().contains(needle) {
            continue;
        }
        let Some(target) = label.non_empty_attr("for") else {
            continue;
        };
        for element in document.elements_with_id(target) {
            if seen.insert(element) {
                matches.push(element);
            }
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
