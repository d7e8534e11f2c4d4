//! Attribute selectors built from the element alone.

use crate::document::DomNode;

const AMOUNT_CLASS: &str = "wv-input--amount";

pub(super) fn by_tag(element: &DomNode<'_>) -> Vec<String> {
    match element.tag() {
        "input" => input_selectors(element),
        "textarea" => ["placeholder", "name"]
            .iter()
            .filter_map(|attr| attribute_selector(element, "textarea", attr))
            .collect(),
        "select" => ["name", "aria-label"]
            .iter()
            .filter_map(|attr| attribute_selector(element, "select", attr))
            .collect(),
        _ => Vec::new(),
    }
}

fn input_selectors(element: &DomNode<'_>) -> Vec<String> {
    let mut selectors: Vec<String> = ["placeholder", "aria-label"]
        .iter()
        .filter_map(|attr| attribute_selector(element, "input", attr))
        .collect();

    if let Some(by_type) = attribute_selector(element, "input", "type") {
        let amount = element
            .attr("class")
            .is_some_and(|class| class.contains(AMOUNT_CLASS))
            .then(|| format!("{}.{}", by_type, AMOUNT_CLASS));
        selectors.push(by_type);
        selectors.extend(amount);
    }

    selectors.extend(
        ["maxlength", "name"]
            .iter()
            .filter_map(|attr| attribute_selector(element, "input", attr)),
    );
    selectors
}

/// `tag[attr="value"]` when the attribute holds more than whitespace.
fn attribute_selector(element: &DomNode<'_>, tag: &str, attr: &str) -> Option<String> {
    element
        .non_blank_attr(attr)
        .map(|value| format!("{}[{}=\"{}\"]", tag, attr, value))
}
