use std::sync::LazyLock;

use regex::Regex;

use crate::classify::input_type;
use crate::document::{Document, DomNode};
use crate::format::capitalize;
use crate::summary::titled_group;

const FIELDS_CAP: usize = 8;

const FIELD_TAGS: [&str; 3] = ["input", "textarea", "select"];

/// Input types that never take typed data.
const SKIPPED_TYPES: [&str; 4] = ["hidden", "button", "submit", "reset"];

const TEXT_TYPES: [&str; 5] = ["text", "email", "tel", "url", "textarea"];

static DATE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)date|yyyy|mm|dd").expect("valid date placeholder pattern"));

static DATE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)date|due").expect("valid date label pattern"));

/// Enabled fields a user can type or pick a value into, in document order.
pub fn data_entry_fields(document: &Document) -> Vec<DomNode<'_>> {
    document
        .elements()
        .filter(|node| FIELD_TAGS.contains(&node.tag()))
        .filter(|field| !field.has_attr("disabled"))
        .filter(|field| {
            let kind = field.attr("type").unwrap_or_default().to_lowercase();
            !SKIPPED_TYPES.contains(&kind.as_str())
        })
        .collect()
}

/// `📝 Data Entry Fields:` with date, text and other groups.
///
/// Date and text groups may share a field; the other group holds fields in
/// neither.
pub fn summarize_data_entry(document: &Document) -> String {
    let fields = data_entry_fields(document);
    if fields.is_empty() {
        return String::new();
    }

    let (mut dates, mut texts, mut others) = (Vec::new(), Vec::new(), Vec::new());
    for field in &fields {
        let date = is_date_field(document, field);
        let text = is_text_field(field);
        if date {
            dates.push(*field);
        }
        if text {
            texts.push(*field);
        }
        if !date && !text {
            others.push(*field);
        }
    }

    let render = |field: &DomNode<'_>| format_field(document, field);
    let mut output = String::from("📝 Data Entry Fields:\n");
    output.push_str(&titled_group("📅 Date Fields", &dates, FIELDS_CAP, render));
    output.push_str(&titled_group("📝 Text Fields", &texts, FIELDS_CAP, render));
    output.push_str(&titled_group("🔧 Other Fields", &others, FIELDS_CAP, render));
    output.push('\n');
    output
}

/// Fallback line with the raw `input`/`textarea`/`select` count.
pub fn summarize_form_structure(document: &Document) -> String {
    let count = document
        .elements()
        .filter(|node| FIELD_TAGS.contains(&node.tag()))
        .count();
    format!("📝 Form Fields Available: {} fields found\n\n", count)
}

/// Display name: associated label, placeholder, then the field kind.
pub fn field_label(document: &Document, field: &DomNode<'_>) -> String {
    if let Some(label) = associated_label(document, field) {
        return label;
    }
    if let Some(placeholder) = field.attr("placeholder") {
        return placeholder.to_string();
    }
    let kind = if field.is("input") {
        input_type(field)
    } else {
        field.tag().to_string()
    };
    capitalize(&kind)
}

fn format_field(document: &Document, field: &DomNode<'_>) -> String {
    let mut line = format!(
        "  • {} ({})",
        field_label(document, field),
        field.attr("id").unwrap_or("no-id")
    );
    if let Some(value) = field.attr("value") {
        line.push_str(&format!(" = '{}'", value));
    }
    if let Some(placeholder) = field.attr("placeholder") {
        line.push_str(&format!(" [{}]", placeholder));
    }
    line.push('\n');
    line
}

fn associated_label(document: &Document, field: &DomNode<'_>) -> Option<String> {
    let id = field.attr("id")?;
    document
        .label_for(id)
        .map(|label| label.text())
        .filter(|text| !text.is_empty())
}

fn is_date_field(document: &Document, field: &DomNode<'_>) -> bool {
    field.attr("type").is_some_and(|kind| kind.eq_ignore_ascii_case("date"))
        || field
            .attr("placeholder")
            .is_some_and(|placeholder| DATE_PLACEHOLDER.is_match(placeholder))
        || associated_label(document, field).is_some_and(|label| DATE_LABEL.is_match(&label))
}

/// Goes by the `type` attribute as written; an untyped input is not a text field here.
fn is_text_field(field: &DomNode<'_>) -> bool {
    field.is("textarea") || field.attr("type").is_some_and(|kind| TEXT_TYPES.contains(&kind))
}
