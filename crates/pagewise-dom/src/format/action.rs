use crate::document::DomNode;
use crate::format::{capped_lines, char_len};

pub const AVAILABLE_ACTIONS_CAP: usize = 5;

/// `⚡ Available Actions:` section for buttons that mention the search text.
pub fn format_actions(actions: &[DomNode<'_>]) -> String {
    let mut output = String::from("⚡ Available Actions:\n");
    output.push_str(&capped_lines(actions, AVAILABLE_ACTIONS_CAP, |action| {
        format!("  • {} ({})\n", action.text(), action_selector(action))
    }));
    output.push('\n');
    output
}

/// Best-effort handle for clicking `action`: its id, its text, its first
/// class, or `css-needed`.
pub fn action_selector(action: &DomNode<'_>) -> String {
    if let Some(id) = action.non_empty_attr("id") {
        return id.to_string();
    }
    let text = action.text();
    if char_len(&text) > 2 {
        return format!("text:{}", text);
    }
    action
        .classes()
        .next()
        .map(str::to_string)
        .unwrap_or_else(|| "css-needed".to_string())
}
