//! Expansion of a match set with interactive elements found near each match.
//!
//! A text match is often a column header or a label cell; the field the agent
//! actually wants lives in the same cell, row, column or a close container.

use std::collections::HashSet;

use crate::document::DomNode;

const INTERACTIVE_TAGS: [&str; 4] = ["input", "textarea", "select", "button"];

/// How many ancestor containers are searched above each match.
const PARENT_LEVELS: usize = 3;

/// Whether the element is interactive and not hidden from the user.
pub fn is_interactive(element: &DomNode<'_>) -> bool {
    let candidate = INTERACTIVE_TAGS.contains(&element.tag())
        || element.attr("role") == Some("button")
        || element.attr("tabindex") == Some("0");
    candidate && !is_hidden(element)
}

fn is_hidden(element: &DomNode<'_>) -> bool {
    if element.attr("type") == Some("hidden")
        || element.attr("tabindex") == Some("-1")
        || element.attr("aria-hidden") == Some("true")
    {
        return true;
    }
    element
        .attr("style")
        .is_some_and(|style| style.contains("display: none") || style.contains("visibility: hidden"))
}

/// Interactive descendants of `container`, in document order.
pub fn interactive_within<'a>(container: &DomNode<'a>) -> Vec<DomNode<'a>> {
    container.descendants().filter(is_interactive).collect()
}

/// The matched elements followed by every interactive element near them,
/// deduplicated by node identity in first-seen order.
pub fn add_nearby_interactive_elements<'a>(elements: &[DomNode<'a>]) -> Vec<DomNode<'a>> {
    let nearby = elements.iter().flat_map(find_interactive_in_context);

    let mut seen = HashSet::new();
    elements
        .iter()
        .copied()
        .chain(nearby)
        .filter(|element| seen.insert(*element))
        .collect()
}

fn find_interactive_in_context<'a>(element: &DomNode<'a>) -> Vec<DomNode<'a>> {
    let mut found = table_context(element);
    found.extend(parent_containers(element));
    found
}

fn table_context<'a>(element: &DomNode<'a>) -> Vec<DomNode<'a>> {
    let mut found = Vec::new();

    let cell = element.closest("td").or_else(|| element.closest("th"));
    let row = element.closest("tr");

    if let Some(cell) = &cell {
        found.extend(interactive_within(cell));
    }
    if let Some(row) = &row {
        found.extend(interactive_within(row));
    }

    if let (Some(cell), Some(row), Some(table)) = (cell, row, element.closest("table")) {
        found.extend(same_column(&table, &cell, &row));
    }
    found
}

fn row_cells<'a>(row: &DomNode<'a>) -> Vec<DomNode<'a>> {
    row.children()
        .filter(|child| child.is("td") || child.is("th"))
        .collect()
}

fn same_column<'a>(table: &DomNode<'a>, cell: &DomNode<'a>, row: &DomNode<'a>) -> Vec<DomNode<'a>> {
    let Some(column) = row_cells(row).iter().position(|c| c == cell) else {
        return Vec::new();
    };

    let mut found = Vec::new();
    for body_row in body_rows(table) {
        let Some(target) = row_cells(&body_row).get(column).copied() else {
            continue;
        };
        found.extend(interactive_within(&target));
        found.extend(nested_column(&target, column));
    }
    found
}

/// Rows that sit under a `tbody` belonging to `table`.
fn body_rows<'a>(table: &DomNode<'a>) -> Vec<DomNode<'a>> {
    table
        .descendants()
        .filter(|node| node.is("tr"))
        .filter(|row| {
            row.ancestors()
                .take_while(|ancestor| ancestor != table)
                .any(|ancestor| ancestor.is("tbody"))
        })
        .collect()
}

/// Same column index inside tables nested one level below `cell`.
fn nested_column<'a>(cell: &DomNode<'a>, column: usize) -> Vec<DomNode<'a>> {
    let mut found = Vec::new();
    for nested in cell.descendants().filter(|node| node.is("table")) {
        for row in nested.descendants().filter(|node| node.is("tr")) {
            if let Some(target) = row_cells(&row).get(column) {
                found.extend(interactive_within(target));
            }
        }
    }
    found
}

fn parent_containers<'a>(element: &DomNode<'a>) -> Vec<DomNode<'a>> {
    element
        .ancestors()
        .take(PARENT_LEVELS)
        .flat_map(|container| interactive_within(&container))
        .collect()
}

#[cfg(test)]
#[path = "nearby_tests.rs"]
mod tests;
