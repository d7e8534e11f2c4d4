use super::*;
use crate::classify::classify_for_data_entry;
use crate::document::prepare_document;
use crate::search::find_elements_by_text;

fn render(html: &str, text: &str) -> String {
    let doc = prepare_document(html);
    let found = find_elements_by_text(&doc, text, None).unwrap();
    let groups = classify_for_data_entry(&found, text);
    format_element_groups(&groups, found.len(), text)
}

#[test]
fn test_capitalize_and_humanize() {
    assert_eq!(capitalize("email"), "Email");
    assert_eq!(capitalize("TEXTAREA"), "Textarea");
    assert_eq!(capitalize(""), "");
    assert_eq!(humanize("billing_cycle-type"), "Billing Cycle Type");
    assert_eq!(humanize("PLAN"), "Plan");
}

#[test]
fn test_capped_lines_truncation_law() {
    let items: Vec<u32> = (1..=7).collect();
    let output = capped_lines(&items, 5, |n| format!("  • {}\n", n));
    assert_eq!(output.matches("... and").count(), 1);
    assert!(output.ends_with("  ... and 2 more\n"));
    assert_eq!(output.lines().count(), 6);

    let exact = capped_lines(&items[..5], 5, |n| format!("  • {}\n", n));
    assert!(!exact.contains("... and"));
    assert_eq!(exact.lines().count(), 5);
}

#[test]
fn test_email_form_golden() {
    let output = render(
        r#"<form>
          <label for="user_email">Email</label>
          <input id="user_email" type="email" placeholder="your@email.com">
        </form>"#,
        "email",
    );
    let expected = concat!(
        "Found 2 elements containing 'email':\n\n",
        "📝 Data Entry Fields:\n",
        "  • Email (user_email) [your@email.com]\n",
        "    Stable selectors:\n",
        "      - input[placeholder=\"your@email.com\"]\n",
        "      - input[type=\"email\"]\n",
        "      - input#user_email\n",
        "\n",
        "\n",
        "🏷️ Labels & Headers:\n",
        "  • label: Email\n",
        "\n",
    );
    assert_eq!(output, expected);
}

#[test]
fn test_input_line_value_and_missing_type() {
    let doc = prepare_document(r#"<textarea id="notes" value="draft"></textarea>"#);
    let textarea = doc.select("textarea").unwrap()[0];
    assert_eq!(format_input_field(&textarea, "  "), "  • Textarea (notes) = 'draft'\n");
}

#[test]
fn test_submit_button_uses_text_selector() {
    let doc = prepare_document(r#"<button type="submit">Submit</button>"#);
    let button = doc.select("button").unwrap()[0];
    assert_eq!(action_selector(&button), "text:Submit");
    assert_eq!(
        format_actions(&[button]),
        "⚡ Available Actions:\n  • Submit (text:Submit)\n\n"
    );
}

#[test]
fn test_action_selector_fallbacks() {
    let doc = prepare_document(
        r#"<button id="go">Go</button><button class="btn ghost">OK</button><button>No</button>"#,
    );
    let buttons = doc.select("button").unwrap();
    assert_eq!(action_selector(&buttons[0]), "go");
    assert_eq!(action_selector(&buttons[1]), "btn");
    assert_eq!(action_selector(&buttons[2]), "css-needed");
}

#[test]
fn test_actions_capped_at_five() {
    let html: String = (1..=8).map(|i| format!("<button>Save {}</button>", i)).collect();
    let output = render(&html, "save");
    assert!(output.contains("  • Save 5 (text:Save 5)\n"));
    assert!(!output.contains("Save 6 ("));
    assert!(output.contains("  ... and 3 more\n"));
}

#[test]
fn test_table_contexts() {
    let doc = prepare_document(
        r#"<table>
          <tr><td>1</td><td>Widget</td><td><input id="qty-1" type="number"></td></tr>
          <tr><td>2</td><td>A very long description of the line item here</td><td><input id="qty-2" type="number"></td></tr>
          <tr><td>12</td><td>3.5</td><td>ab</td><td><input id="qty-3"></td></tr>
          <caption><input id="caption-input"></caption>
        </table>
        <form><input id="outside"></form>"#,
    );
    let context = |id: &str| {
        let input = doc.select(&format!("#{}", id)).unwrap()[0];
        input_context(&input)
    };
    assert_eq!(context("qty-1"), "Widget");
    assert_eq!(context("qty-2"), "A very long description of the");
    assert_eq!(context("qty-3"), "Table");
    assert_eq!(context("outside"), "Form Fields");
}

#[test]
fn test_input_without_row_is_table_context() {
    let doc = prepare_document(r#"<table><caption><input id="c"></caption><tr><td>x</td></tr></table>"#);
    let input = doc.select("#c").unwrap()[0];
    assert_eq!(input_context(&input), "Table");
}

#[test]
fn test_multiple_contexts_render_headings() {
    let doc = prepare_document(
        r#"<table><tr><td>Widget</td><td><input id="qty-1" type="number"></td></tr></table>
        <form><input id="outside"></form>"#,
    );
    let inputs = doc.select("input").unwrap();
    let groups = classify_for_data_entry(&inputs, "x");
    let output = format_element_groups(&groups, inputs.len(), "x");

    assert!(output.contains("\n  Widget:\n    • Number (qty-1)\n"));
    assert!(output.contains("\n  Form Fields:\n    • Input (outside)\n"));
    assert!(output.find("Widget:").unwrap() < output.find("Form Fields:").unwrap());
}

#[test]
fn test_form_controls_section() {
    let doc = prepare_document(
        r#"<input type="radio" name="billing_cycle" value="monthly">
        <input type="radio" name="billing_cycle" value="yearly" checked>"#,
    );
    let inputs = doc.select("input").unwrap();
    let groups = classify_for_data_entry(&inputs, "plan");
    let output = format_element_groups(&groups, 2, "plan");
    assert_eq!(
        output,
        concat!(
            "Found 2 elements containing 'plan':\n\n",
            "🎛️ Form Controls:\n",
            "\n  Billing Cycle options:\n",
            "    • monthly\n",
            "    • yearly ✓\n",
            "\n",
        )
    );
}

#[test]
fn test_labels_capped_at_three() {
    let html: String = (1..=5).map(|i| format!("<span>Total {}</span>", i)).collect();
    let output = render(&html, "total");
    assert!(output.contains("🏷️ Labels & Headers:\n"));
    assert!(output.contains("  • span: Total 3\n"));
    assert!(!output.contains("Total 4"));
    assert_eq!(output.matches("... and 2 more").count(), 1);
}

#[test]
fn test_selector_matches_with_parents() {
    let doc = prepare_document(r#"<div id="outer" class="box"><p class="x">Hi</p></div>"#);
    let matches = doc.select("p").unwrap();
    assert_eq!(
        format_selector_matches(&matches, "p", 2),
        concat!(
            "Found 1 elements matching 'p':\n\n",
            "--- Element 1 ---\n",
            "Parent 1: <div class=\"box\" id=\"outer\">\n",
            "Parent 2: <body>\n",
            "Element: <p class=\"x\">Hi</p>\n\n",
        )
    );
    assert!(!format_selector_matches(&matches, "p", 0).contains("Parent"));
}

#[test]
fn test_sentinels() {
    assert_eq!(no_selector_matches(".nope"), "No elements found matching selector: .nope");
    assert_eq!(no_text_matches("ghost"), "No elements found containing text: ghost");
}
