//! Stable selector synthesis.
//!
//! Candidates are ordered by how well they survive re-renders: attribute
//! selectors on the element itself first, then selectors anchored on a
//! meaningful ancestor class, a label association or the element's position
//! among similar siblings.

mod base;
mod contextual;

use std::collections::HashSet;

use crate::document::DomNode;

pub use contextual::{is_significant_class, is_stable_id};

/// Ordered, deduplicated selector candidates for `element`.
///
/// The result may be empty and is identical for repeated calls on the same
/// node.
pub fn generate_stable_selectors(element: &DomNode<'_>) -> Vec<String> {
    let mut candidates = base::by_tag(element);
    candidates.extend(contextual::contextual_selectors(element));

    let mut seen = HashSet::new();
    candidates.retain(|candidate| seen.insert(candidate.clone()));
    candidates
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
