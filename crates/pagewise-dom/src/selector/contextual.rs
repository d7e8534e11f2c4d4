//! Selectors that lean on the element's surroundings.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::DomNode;

const GENERIC_CLASSES: [&str; 7] = ["row", "col", "container", "wrapper", "inner", "outer", "main"];

static WORDISH_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[a-z]+[-_]?[a-z]+").expect("valid class pattern"));

/// Framework-generated ids such as React's `:r1a:`.
static GENERATED_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^:r[0-9a-z]+:$").expect("valid id pattern"));

/// Whether a class name is specific enough to anchor a selector.
pub fn is_significant_class(class: &str) -> bool {
    class.len() >= 4
        && !GENERIC_CLASSES.contains(&class.to_lowercase().as_str())
        && WORDISH_CLASS.is_match(class)
}

/// Whether an id is authored rather than generated at render time.
pub fn is_stable_id(id: &str) -> bool {
    !id.is_empty() && !GENERATED_ID.is_match(id)
}

pub(super) fn contextual_selectors(element: &DomNode<'_>) -> Vec<String> {
    let anchor = anchor_class(element);

    let mut selectors = Vec::new();
    selectors.extend(parent_class_selector(element, anchor));
    selectors.extend(label_selector(element));
    selectors.extend(position_selector(element, anchor));
    selectors
}

/// Longest significant class of the nearest ancestor below `body` that has
/// one. The first class wins on ties.
fn anchor_class<'a>(element: &DomNode<'a>) -> Option<&'a str> {
    element
        .ancestors()
        .take_while(|ancestor| !ancestor.is("body"))
        .find_map(|ancestor| {
            ancestor
                .classes()
                .filter(|class| is_significant_class(class))
                .fold(None, |best: Option<&str>, class| match best {
                    Some(current) if current.len() >= class.len() => Some(current),
                    _ => Some(class),
                })
        })
}

fn parent_class_selector(element: &DomNode<'_>, anchor: Option<&str>) -> Option<String> {
    let base = format!(".{} {}", anchor?, element.tag());
    let selector = if let Some(placeholder) = element.attr("placeholder") {
        format!("{}[placeholder=\"{}\"]", base, placeholder)
    } else if let Some(kind) = element.attr("type") {
        format!("{}[type=\"{}\"]", base, kind)
    } else {
        base
    };
    Some(selector)
}

fn label_selector(element: &DomNode<'_>) -> Option<String> {
    let id = element.attr("id").filter(|id| is_stable_id(id))?;
    let root = element.ancestors().last()?;
    let labelled = root
        .descendants()
        .any(|node| node.is("label") && node.attr("for") == Some(id));
    labelled.then(|| format!("{}#{}", element.tag(), id))
}

fn position_selector(element: &DomNode<'_>, anchor: Option<&str>) -> Option<String> {
    let parent = element.parent()?;
    let similar: Vec<DomNode<'_>> = parent
        .children()
        .filter(|sibling| same_key_attributes(element, sibling))
        .collect();
    if similar.len() < 2 {
        return None;
    }
    let index = similar.iter().position(|sibling| sibling == element)? + 1;

    let context = anchor.map(|class| format!(".{} ", class)).unwrap_or_default();
    let tag = element.tag();
    let nth = format!(":nth-of-type({})", index);

    let selector = if let Some(kind) = element.attr("type") {
        format!("{}{}[type=\"{}\"]{}", context, tag, kind, nth)
    } else if let Some(placeholder) = element.attr("placeholder") {
        format!("{}{}[placeholder=\"{}\"]{}", context, tag, placeholder, nth)
    } else {
        format!("{}{}{}", context, tag, nth)
    };
    Some(selector)
}

fn same_key_attributes(element: &DomNode<'_>, other: &DomNode<'_>) -> bool {
    element.tag() == other.tag() && (!element.is("input") || element.attr("type") == other.attr("type"))
}
