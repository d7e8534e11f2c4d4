use super::*;
use crate::document::prepare_document;

fn ids(nodes: &[DomNode<'_>]) -> Vec<String> {
    nodes
        .iter()
        .filter_map(|n| n.attr("id"))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_empty_query_is_rejected() {
    let doc = prepare_document("<p>anything</p>");
    assert!(matches!(
        find_elements_by_text(&doc, "", None),
        Err(DomError::EmptyQuery)
    ));
    assert!(matches!(
        find_elements_by_text(&doc, "   ", None),
        Err(DomError::EmptyQuery)
    ));
}

#[test]
fn test_invalid_container_selector() {
    let doc = prepare_document("<p>anything</p>");
    let err = find_elements_by_text(&doc, "any", Some("p[")).unwrap_err();
    assert!(matches!(err, DomError::InvalidSelector { .. }));
}

#[test]
fn test_label_and_placeholder_find_email_field() {
    let doc = prepare_document(
        r#"<form>
          <label for="user_email">Email</label>
          <input id="user_email" type="email" placeholder="your@email.com">
        </form>"#,
    );
    let found = find_elements_by_text(&doc, "email", None).unwrap();
    assert!(found.iter().any(|n| n.is("label")));
    assert!(ids(&found).contains(&"user_email".to_string()));
}

#[test]
fn test_match_is_case_insensitive() {
    let doc = prepare_document(r#"<button id="save">Save Invoice</button>"#);
    let found = find_elements_by_text(&doc, "INVOICE", None).unwrap();
    assert_eq!(ids(&found), vec!["save"]);
}

#[test]
fn test_attribute_matches() {
    let doc = prepare_document(
        r#"<section><div><div><div><input id="by-value" value="Acme Corp"></div></div></div></section>
        <section><div><div><div><input id="by-placeholder" placeholder="acme id"></div></div></div></section>
        <section><div><div><div><input id="by-type" type="tel"></div></div></div></section>"#,
    );
    assert_eq!(
        ids(&find_elements_by_text(&doc, "acme", None).unwrap()),
        vec!["by-value", "by-placeholder"]
    );
    assert_eq!(
        ids(&find_elements_by_text(&doc, "tel", None).unwrap()),
        vec!["by-type"]
    );
}

#[test]
fn test_label_for_reaches_distant_field() {
    let doc = prepare_document(
        r#"<body>
          <div><div><div><div><label for="phone">Phone number</label></div></div></div></div>
          <section><div><div><div><input id="phone"></div></div></div></section>
        </body>"#,
    );
    let found = find_elements_by_text(&doc, "phone", None).unwrap();
    assert_eq!(ids(&found), vec!["phone"]);
}

#[test]
fn test_label_with_empty_for_is_ignored() {
    let doc = prepare_document(
        r#"<div><div><div><div><label for="">Phone</label></div></div></div></div>
        <section><div><div><div><input id=""></div></div></div></section>"#,
    );
    let found = find_elements_by_text(&doc, "phone", None).unwrap();
    assert_eq!(found.len(), 1);
    assert!(found[0].is("label"));
}

#[test]
fn test_hidden_inputs_are_not_added_nearby() {
    let doc = prepare_document(
        r#"<div><span>Token</span><input id="tok" type="hidden"><input id="visible"></div>"#,
    );
    let found = ids(&find_elements_by_text(&doc, "token", None).unwrap());
    assert!(found.contains(&"visible".to_string()));
    assert!(!found.contains(&"tok".to_string()));
}

#[test]
fn test_container_restriction() {
    let doc = prepare_document(
        r#"<form id="billing"><label>Name<input id="billing-name"></label></form>
        <form id="shipping"><label>Name<input id="shipping-name"></label></form>"#,
    );
    let everywhere = ids(&find_elements_by_text(&doc, "name", None).unwrap());
    assert!(everywhere.contains(&"billing-name".to_string()));
    assert!(everywhere.contains(&"shipping-name".to_string()));

    let restricted = find_elements_by_text(&doc, "name", Some("#billing")).unwrap();
    assert!(ids(&restricted).contains(&"billing-name".to_string()));
    assert!(!ids(&restricted).contains(&"shipping-name".to_string()));
    assert!(!restricted.is_empty());
}

#[test]
fn test_no_match_gives_empty_result() {
    let doc = prepare_document("<p>Hello</p>");
    assert!(find_elements_by_text(&doc, "goodbye", None).unwrap().is_empty());
}
