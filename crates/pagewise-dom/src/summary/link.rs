use crate::document::{Document, DomNode};
use crate::summary::titled_group;

const LINKS_CAP: usize = 6;

const DEFAULT_LINK_TEXT: &str = "Link";

const NAV_CLASS_MARKERS: [&str; 7] = [
    "nav",
    "navigation",
    "menu",
    "main-nav",
    "primary-nav",
    "app-menu",
    "breadcrumb",
];

const WORKFLOW_KEYWORDS: [&str; 13] = [
    "dashboard", "home", "create", "new", "add", "edit", "settings", "invoice", "estimate", "customer",
    "payment", "back", "continue",
];

/// Whether any ancestor's class string carries a navigation marker.
pub fn is_main_navigation(link: &DomNode<'_>) -> bool {
    let classes = link
        .ancestors()
        .filter_map(|ancestor| ancestor.attr("class"))
        .collect::<Vec<_>>()
        .join(" ");
    NAV_CLASS_MARKERS.iter().any(|marker| classes.contains(marker))
}

pub fn is_workflow_link(link: &DomNode<'_>) -> bool {
    let text = link_text(link).to_lowercase();
    WORKFLOW_KEYWORDS.iter().any(|keyword| text.contains(keyword))
}

/// ` → <segment>` for the last non-empty path segment of `href`.
pub fn link_destination(href: &str) -> String {
    if !href.contains('/') {
        return String::new();
    }
    href.split('/')
        .rfind(|segment| !segment.is_empty())
        .map(|segment| format!(" → {}", segment))
        .unwrap_or_default()
}

/// `🧭 Key Navigation:` with main-menu and quick-action groups.
pub fn summarize_key_navigation(document: &Document) -> String {
    let links: Vec<DomNode<'_>> = document
        .elements_by_tag("a")
        .filter(is_followable)
        .filter(|link| is_main_navigation(link) || is_workflow_link(link))
        .collect();
    if links.is_empty() {
        return String::new();
    }

    let (main, rest): (Vec<_>, Vec<_>) = links.into_iter().partition(is_main_navigation);
    let quick: Vec<_> = rest.into_iter().filter(is_workflow_link).collect();

    let mut output = String::from("🧭 Key Navigation:\n");
    output.push_str(&titled_group("📍 Main Menu", &main, LINKS_CAP, format_link));
    output.push_str(&titled_group("🔗 Quick Actions", &quick, LINKS_CAP, format_link));
    output.push('\n');
    output
}

fn is_followable(link: &DomNode<'_>) -> bool {
    let Some(href) = link.attr("href") else {
        return false;
    };
    !(href.is_empty()
        || href == "#"
        || href.starts_with("javascript:")
        || link
            .attr("style")
            .is_some_and(|style| style.contains("display: none")))
}

fn link_text(link: &DomNode<'_>) -> String {
    let text = link.text();
    if !text.is_empty() {
        return text;
    }
    ["title", "aria-label"]
        .iter()
        .find_map(|name| link.non_empty_attr(name))
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_LINK_TEXT.to_string())
}

fn format_link(link: &DomNode<'_>) -> String {
    format!(
        "  • {}{}\n",
        link_text(link),
        link_destination(link.attr("href").unwrap_or_default())
    )
}
