//! Rendering for CSS selector queries.

use crate::document::DomNode;

/// Dump each match with up to `context_size` enclosing start tags.
pub fn format_selector_matches(elements: &[DomNode<'_>], selector: &str, context_size: usize) -> String {
    let mut output = format!("Found {} elements matching '{}':\n\n", elements.len(), selector);
    for (index, element) in elements.iter().enumerate() {
        output.push_str(&format!("--- Element {} ---\n", index + 1));
        for (level, parent) in element.ancestors().take(context_size).enumerate() {
            output.push_str(&format!("Parent {}: {}\n", level + 1, parent.start_tag()));
        }
        output.push_str(&format!("Element: {}\n\n", element.outer_html()));
    }
    output
}

pub fn no_selector_matches(selector: &str) -> String {
    format!("No elements found matching selector: {}", selector)
}

pub fn no_text_matches(text: &str) -> String {
    format!("No elements found containing text: {}", text)
}
