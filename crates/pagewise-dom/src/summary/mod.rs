//! One-shot page digest for an agent that has just landed on a page.
//!
//! The digest leads with what can be filled in, then what can be clicked,
//! then where the agent can go next.

mod button;
mod form;
mod link;

use tracing::debug;

use crate::document::Document;
use crate::format::capped_lines;

pub use button::{CRITICAL_KEYWORDS, PRIMARY_KEYWORDS, button_text, is_primary_action, summarize_primary_actions};
pub use form::{data_entry_fields, field_label, summarize_data_entry, summarize_form_structure};
pub use link::{is_main_navigation, is_workflow_link, link_destination, summarize_key_navigation};

pub const DEFAULT_TITLE: &str = "Untitled Page";

/// Title, data-entry fields, primary actions and key navigation.
///
/// When the page has no data-entry fields the raw field count is appended
/// instead. The result carries no leading or trailing whitespace.
pub fn summarize_page(document: &Document) -> String {
    let title = document
        .title()
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let data_entry = summarize_data_entry(document);
    let actions = summarize_primary_actions(document);
    let navigation = summarize_key_navigation(document);

    debug!(
        title = %title,
        data_entry = !data_entry.is_empty(),
        actions = !actions.is_empty(),
        navigation = !navigation.is_empty(),
        "Summarized page"
    );

    let mut summary = format!("{}\n\n", title);
    summary.push_str(&data_entry);
    summary.push_str(&actions);
    summary.push_str(&navigation);
    if data_entry.is_empty() {
        summary.push_str(&summarize_form_structure(document));
    }
    summary.trim().to_string()
}

/// `title:` heading, capped entries and a blank line; empty when there are
/// no items.
pub(crate) fn titled_group<T>(
    title: &str,
    items: &[T],
    cap: usize,
    render: impl FnMut(&T) -> String,
) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut output = format!("{}:\n", title);
    output.push_str(&capped_lines(items, cap, render));
    output.push('\n');
    output
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
