//! End-to-end checks of the engine pipeline on realistic pages.

use pagewise_dom::{
    classify_for_data_entry, find_elements_by_text, format_element_groups, generate_stable_selectors,
    prepare_document, summarize_page,
};

const SIGNUP: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Create account</title>
  <link rel="stylesheet" href="/site.css">
  <style>.hidden { display: none }</style>
</head>
<body>
  <div class="signup-card">
    <form action="/signup" method="post">
      <label for="user_email">Email</label>
      <input id="user_email" type="email" placeholder="your@email.com">
      <label for=":r3:">Password</label>
      <input id=":r3:" type="password" name="password">
      <input type="hidden" name="email_token" value="email-abc">
      <button type="submit">Submit</button>
    </form>
  </div>
  <script>console.log("email")</script>
</body>
</html>"#;

#[test]
fn test_find_then_select_email_field() {
    let doc = prepare_document(SIGNUP);
    let found = find_elements_by_text(&doc, "email", None).unwrap();

    let input = found
        .iter()
        .find(|node| node.attr("id") == Some("user_email"))
        .expect("email input should be found");

    let selectors = generate_stable_selectors(input);
    assert!(selectors.contains(&r#"input[placeholder="your@email.com"]"#.to_string()));
    assert!(selectors.contains(&"input#user_email".to_string()));
    assert!(selectors.contains(&r#".signup-card input[placeholder="your@email.com"]"#.to_string()));
}

#[test]
fn test_generated_ids_never_become_selectors() {
    let doc = prepare_document(SIGNUP);
    let password = doc.select(r#"input[type="password"]"#).unwrap()[0];
    let selectors = generate_stable_selectors(&password);
    assert!(selectors.iter().all(|s| !s.contains(":r3:")));
    assert!(selectors.contains(&r#"input[name="password"]"#.to_string()));
}

#[test]
fn test_hidden_input_never_reaches_inputs() {
    let doc = prepare_document(SIGNUP);
    let found = find_elements_by_text(&doc, "email", None).unwrap();
    let groups = classify_for_data_entry(&found, "email");

    assert!(groups.inputs.iter().all(|n| n.attr("type") != Some("hidden")));
    let rendered = format_element_groups(&groups, found.len(), "email");
    assert!(!rendered.contains("email_token"));
    assert!(rendered.starts_with(&format!("Found {} elements containing 'email':\n\n", found.len())));
}

#[test]
fn test_submit_button_rendering() {
    let doc = prepare_document(SIGNUP);
    let found = find_elements_by_text(&doc, "submit", None).unwrap();
    let groups = classify_for_data_entry(&found, "submit");
    let rendered = format_element_groups(&groups, found.len(), "submit");
    assert!(rendered.contains("⚡ Available Actions:\n  • Submit (text:Submit)\n"));
}

#[test]
fn test_summary_of_signup_page() {
    let doc = prepare_document(SIGNUP);
    let summary = summarize_page(&doc);

    assert!(summary.starts_with("Create account\n\n📝 Data Entry Fields:\n"));
    assert!(summary.contains("  • Email (user_email) [your@email.com]\n"));
    assert!(summary.contains("🔥 Critical:\n  • Submit (text:Submit)\n"));
    assert!(!summary.contains("Form Fields Available"));
    assert!(!summary.contains("console.log"));
}

#[test]
fn test_summary_is_deterministic() {
    let first = summarize_page(&prepare_document(SIGNUP));
    let second = summarize_page(&prepare_document(SIGNUP));
    assert_eq!(first, second);
}
