use std::sync::LazyLock;

use regex::Regex;

use crate::document::{Document, DomNode};
use crate::format::char_len;
use crate::summary::titled_group;

const ACTIONS_CAP: usize = 5;

const DEFAULT_BUTTON_TEXT: &str = "Button";

/// Text that marks a button as a likely next step.
pub const PRIMARY_KEYWORDS: [&str; 16] = [
    "save", "submit", "continue", "next", "finish", "send", "create", "update", "delete", "cancel",
    "close", "done", "confirm", "proceed", "add", "edit",
];

/// Text that marks a primary button as committing work.
pub const CRITICAL_KEYWORDS: [&str; 4] = ["save", "submit", "send", "create"];

const PRIMARY_CLASSES: [&str; 10] = [
    "primary",
    "submit",
    "btn-primary",
    "button--primary",
    "save",
    "continue",
    "button--link",
    "btn-link",
    "link-button",
    "button-link",
];

static ADD_TARGET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"item|customer|discount|product|contact|line").expect("valid add target pattern"));

static WORKFLOW_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        r"(?i)add.*(item|customer|discount|product|contact)",
        r"(?i)edit.*(column|field|profile)",
        r"(?i)choose.*(different|customer)",
        r"(?i)(create|new).*(item|customer|product)",
    ]
    .map(|pattern| Regex::new(pattern).expect("valid workflow pattern"))
});

/// Trimmed text, then `value`, then `aria-label`, then `Button`.
pub fn button_text(button: &DomNode<'_>) -> String {
    let text = button.text();
    if !text.is_empty() {
        return text;
    }
    ["value", "aria-label"]
        .iter()
        .find_map(|name| button.non_empty_attr(name))
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_BUTTON_TEXT.to_string())
}

/// Whether a clickable element looks like a step in the page's main workflow.
pub fn is_primary_action(button: &DomNode<'_>) -> bool {
    if button.attr("type") == Some("submit") {
        return true;
    }

    let text = button_text(button).to_lowercase();
    let keyword = PRIMARY_KEYWORDS.iter().any(|keyword| text.contains(keyword))
        || (text.contains("add") && ADD_TARGET.is_match(&text))
        || text.contains("choose")
        || text.contains("select");
    if keyword {
        return true;
    }

    let classes = button.attr("class").unwrap_or_default();
    if PRIMARY_CLASSES.iter().any(|class| classes.contains(class)) {
        return true;
    }

    WORKFLOW_PATTERNS.iter().any(|pattern| pattern.is_match(&text))
}

/// `⚡ Primary Actions:` split into critical and regular groups.
pub fn summarize_primary_actions(document: &Document) -> String {
    let buttons: Vec<DomNode<'_>> = document
        .elements()
        .filter(is_candidate)
        .filter(|button| !is_skipped(button))
        .filter(is_primary_action)
        .collect();
    if buttons.is_empty() {
        return String::new();
    }

    let (critical, regular): (Vec<_>, Vec<_>) = buttons.into_iter().partition(is_critical);

    let mut output = String::from("⚡ Primary Actions:\n");
    output.push_str(&titled_group("🔥 Critical", &critical, ACTIONS_CAP, format_button));
    output.push_str(&titled_group("📝 Actions", &regular, ACTIONS_CAP, format_button));
    output.push('\n');
    output
}

fn is_candidate(node: &DomNode<'_>) -> bool {
    node.is("button")
        || (node.is("input") && matches!(node.attr("type"), Some("button") | Some("submit")))
        || node.attr("role") == Some("button")
        || node.attr("tabindex") == Some("0")
}

fn is_skipped(button: &DomNode<'_>) -> bool {
    button.has_attr("disabled")
        || button
            .attr("style")
            .is_some_and(|style| style.contains("display: none"))
        || button.attr("aria-hidden") == Some("true")
}

fn is_critical(button: &DomNode<'_>) -> bool {
    let text = button_text(button).to_lowercase();
    CRITICAL_KEYWORDS.iter().any(|keyword| text.contains(keyword))
}

fn format_button(button: &DomNode<'_>) -> String {
    let text = button_text(button);
    let selector = match button.non_empty_attr("id") {
        Some(id) => id.to_string(),
        None if char_len(&text) > 2 && text != DEFAULT_BUTTON_TEXT => format!("text:{}", text),
        None => "css-selector-needed".to_string(),
    };
    format!("  • {} ({})\n", text, selector)
}
