//! Data-entry classification of matched elements.
//!
//! Splits a candidate set into four buckets: fillable inputs, radio/checkbox
//! groups, labels and headers, and buttons. Only labels and buttons are
//! filtered by the search text; inputs are always relevant once matched.

use crate::document::DomNode;

/// Input types treated as free-form data entry. A missing `type` is `text`.
pub const DATA_ENTRY_INPUT_TYPES: [&str; 12] = [
    "text",
    "number",
    "email",
    "tel",
    "url",
    "date",
    "datetime-local",
    "time",
    "month",
    "week",
    "password",
    "search",
];

/// Input types grouped by `name` as form controls.
pub const FORM_CONTROL_TYPES: [&str; 2] = ["radio", "checkbox"];

/// Group name for controls without a `name` attribute.
pub const UNNAMED_GROUP: &str = "unnamed";

const LABEL_TAGS: [&str; 4] = ["label", "span", "div", "th"];

/// Radio buttons or checkboxes sharing a `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlGroup<'a> {
    pub name: String,
    pub controls: Vec<DomNode<'a>>,
}

/// Four-bucket classification result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementGroups<'a> {
    /// Text-like inputs, textareas and selects.
    pub inputs: Vec<DomNode<'a>>,
    /// Radio/checkbox groups in first-seen order.
    pub form_controls: Vec<ControlGroup<'a>>,
    /// Labels, spans, divs and table headers mentioning the text.
    pub labels: Vec<DomNode<'a>>,
    /// Buttons mentioning the text.
    pub actions: Vec<DomNode<'a>>,
}

impl<'a> ElementGroups<'a> {
    /// Controls registered under `name`.
    pub fn form_control(&self, name: &str) -> Option<&[DomNode<'a>]> {
        self.form_controls
            .iter()
            .find(|group| group.name == name)
            .map(|group| group.controls.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
            && self.form_controls.is_empty()
            && self.labels.is_empty()
            && self.actions.is_empty()
    }

    fn push_form_control(&mut self, name: &str, control: DomNode<'a>) {
        match self.form_controls.iter_mut().find(|group| group.name == name) {
            Some(group) => group.controls.push(control),
            None => self.form_controls.push(ControlGroup {
                name: name.to_string(),
                controls: vec![control],
            }),
        }
    }
}

/// Classify candidates for data entry. `text` filters labels and buttons.
pub fn classify_for_data_entry<'a>(elements: &[DomNode<'a>], text: &str) -> ElementGroups<'a> {
    let needle = text.to_lowercase();
    let mut groups = ElementGroups::default();

    for element in elements {
        match element.tag() {
            "input" => classify_input(*element, &mut groups),
            "textarea" | "select" => groups.inputs.push(*element),
            "button" => {
                if contains_text_match(element, &needle) {
                    groups.actions.push(*element);
                }
            }
            tag if LABEL_TAGS.contains(&tag) => {
                if contains_text_match(element, &needle) {
                    groups.labels.push(*element);
                }
            }
            _ => {}
        }
    }

    groups
}

/// Effective lowercase `type` of an input (`text` when absent).
pub fn input_type(element: &DomNode<'_>) -> String {
    element.attr("type").unwrap_or("text").to_lowercase()
}

/// Whether an input is a free-form data entry field.
pub fn is_data_entry_input(element: &DomNode<'_>) -> bool {
    DATA_ENTRY_INPUT_TYPES.contains(&input_type(element).as_str())
}

fn classify_input<'a>(element: DomNode<'a>, groups: &mut ElementGroups<'a>) {
    if is_data_entry_input(&element) {
        groups.inputs.push(element);
    } else if FORM_CONTROL_TYPES.contains(&input_type(&element).as_str()) {
        let name = element.attr("name").unwrap_or(UNNAMED_GROUP);
        groups.push_form_control(name, element);
    }
}

/// Case-insensitive match against the element text or its `value`.
fn contains_text_match(element: &DomNode<'_>, needle: &str) -> bool {
    element.text().to_lowercase().contains(needle)
        || element
            .attr("value")
            .is_some_and(|value| value.to_lowercase().contains(needle))
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
