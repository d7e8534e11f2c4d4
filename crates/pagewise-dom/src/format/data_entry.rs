//! Rendering of [`ElementGroups`] for a text search.

use std::sync::LazyLock;

use regex::Regex;

use crate::classify::{ControlGroup, ElementGroups};
use crate::document::DomNode;
use crate::format::{capped_lines, char_len, format_actions, format_input_field, humanize};

pub const LABELS_CAP: usize = 3;

/// Longest table-row context shown as a group heading.
const CONTEXT_MAX_CHARS: usize = 30;

static NUMERIC_CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.?\d*$").expect("valid numeric pattern"));

/// Render grouped matches for `text`.
///
/// Sections appear in the order inputs, actions, form controls, labels, and
/// empty sections are left out entirely.
pub fn format_element_groups(groups: &ElementGroups<'_>, total: usize, text: &str) -> String {
    let mut output = format!("Found {} elements containing '{}':\n\n", total, text);

    if !groups.inputs.is_empty() {
        output.push_str(&format_inputs(&groups.inputs));
    }
    if !groups.actions.is_empty() {
        output.push_str(&format_actions(&groups.actions));
    }
    if !groups.form_controls.is_empty() {
        output.push_str(&format_form_controls(&groups.form_controls));
    }
    if !groups.labels.is_empty() {
        output.push_str(&format_labels(&groups.labels));
    }
    output
}

fn format_inputs(inputs: &[DomNode<'_>]) -> String {
    let mut contexts: Vec<(String, Vec<DomNode<'_>>)> = Vec::new();
    for input in inputs {
        let context = input_context(input);
        match contexts.iter_mut().find(|(name, _)| *name == context) {
            Some((_, members)) => members.push(*input),
            None => contexts.push((context, vec![*input])),
        }
    }

    let mut output = String::from("📝 Data Entry Fields:\n");
    if let [(_, members)] = contexts.as_slice() {
        for input in members {
            output.push_str(&format_input_field(input, "  "));
        }
    } else {
        for (context, members) in &contexts {
            output.push_str(&format!("\n  {}:\n", context));
            for input in members {
                output.push_str(&format_input_field(input, "    "));
            }
        }
    }
    output.push('\n');
    output
}

/// Heading for an input: `Form Fields` outside tables, otherwise the first
/// meaningful cell text of its row, or `Table`.
pub fn input_context(input: &DomNode<'_>) -> String {
    if input.closest("table").is_none() {
        return "Form Fields".to_string();
    }
    let Some(row) = input.closest("tr") else {
        return "Table".to_string();
    };

    row.children()
        .filter(|cell| cell.is("td") || cell.is("th"))
        .map(|cell| cell.text())
        .find(|text| char_len(text) > 2 && !NUMERIC_CELL.is_match(text))
        .map(|text| text.chars().take(CONTEXT_MAX_CHARS).collect())
        .unwrap_or_else(|| "Table".to_string())
}

fn format_form_controls(groups: &[ControlGroup<'_>]) -> String {
    let mut output = String::from("🎛️ Form Controls:\n");
    for group in groups {
        output.push_str(&format!("\n  {} options:\n", humanize(&group.name)));
        for control in &group.controls {
            let checked = if control.has_attr("checked") { " ✓" } else { "" };
            output.push_str(&format!(
                "    • {}{}\n",
                control.attr("value").unwrap_or_default(),
                checked
            ));
        }
    }
    output.push('\n');
    output
}

fn format_labels(labels: &[DomNode<'_>]) -> String {
    let mut output = String::from("🏷️ Labels & Headers:\n");
    output.push_str(&capped_lines(labels, LABELS_CAP, |label| {
        format!("  • {}: {}\n", label.tag(), label.text())
    }));
    output.push('\n');
    output
}
