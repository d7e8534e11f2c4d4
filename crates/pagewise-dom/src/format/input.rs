use crate::document::DomNode;
use crate::format::capitalize;
use crate::selector::generate_stable_selectors;

/// One input line plus its stable selector list.
///
/// ```text
///   • Email (user_email) [your@email.com]
///     Stable selectors:
///       - input[placeholder="your@email.com"]
/// ```
pub fn format_input_field(input: &DomNode<'_>, indent: &str) -> String {
    let mut output = format!("{}• {}", indent, capitalize(input.attr("type").unwrap_or(input.tag())));
    if let Some(id) = input.non_empty_attr("id") {
        output.push_str(&format!(" ({})", id));
    }
    if let Some(value) = input.non_empty_attr("value") {
        output.push_str(&format!(" = '{}'", value));
    }
    if let Some(placeholder) = input.non_empty_attr("placeholder") {
        output.push_str(&format!(" [{}]", placeholder));
    }
    output.push('\n');

    let selectors = generate_stable_selectors(input);
    if !selectors.is_empty() {
        output.push_str(&format!("{}  Stable selectors:\n", indent));
        for selector in &selectors {
            output.push_str(&format!("{}    - {}\n", indent, selector));
        }
        output.push('\n');
    }
    output
}
