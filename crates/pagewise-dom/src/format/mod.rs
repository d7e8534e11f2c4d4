//! Text rendering for matched element groups and selector queries.
//!
//! Every renderer is deterministic: the same input yields byte-identical
//! output, and lists longer than their cap end with a single
//! `  ... and N more` line.

mod action;
mod data_entry;
mod input;
mod inspect;

pub use action::{AVAILABLE_ACTIONS_CAP, action_selector, format_actions};
pub use data_entry::{LABELS_CAP, format_element_groups, input_context};
pub use input::format_input_field;
pub use inspect::{format_selector_matches, no_selector_matches, no_text_matches};

/// Render the first `cap` items, then one overflow line for the remainder.
pub fn capped_lines<T>(items: &[T], cap: usize, mut render: impl FnMut(&T) -> String) -> String {
    let mut output: String = items.iter().take(cap).map(|item| render(item)).collect();
    if items.len() > cap {
        output.push_str(&format!("  ... and {} more\n", items.len() - cap));
    }
    output
}

/// First character uppercase, the rest lowercase.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// `billing_cycle-type` becomes `Billing Cycle Type`.
pub fn humanize(name: &str) -> String {
    name.replace(['-', '_'], " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Character count, which is what display caps and thresholds measure.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
