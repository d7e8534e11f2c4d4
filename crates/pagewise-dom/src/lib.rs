//! # Pagewise DOM
//!
//! Turns a raw HTML snapshot into something an agent can act on:
//!
//! - [`prepare_document`] parses tolerantly and strips `link`, `style` and
//!   `script` nodes.
//! - [`find_elements_by_text`] finds elements mentioning a text, then pulls in
//!   interactive elements from the same table cell, row, column or container.
//! - [`classify_for_data_entry`] buckets matches into inputs, form controls,
//!   labels and actions; [`format_element_groups`] renders them.
//! - [`generate_stable_selectors`] emits selectors that survive re-renders.
//! - [`summarize_page`] produces a whole-page digest.
//!
//! Everything here is synchronous and free of I/O.

pub mod classify;
pub mod document;
pub mod error;
pub mod format;
pub mod nearby;
pub mod search;
pub mod selector;
pub mod summary;

pub use classify::{ControlGroup, ElementGroups, classify_for_data_entry, is_data_entry_input};
pub use document::{Document, DomNode, prepare_document};
pub use error::DomError;
pub use format::{format_element_groups, format_selector_matches, no_selector_matches, no_text_matches};
pub use nearby::{add_nearby_interactive_elements, is_interactive};
pub use search::find_elements_by_text;
pub use selector::generate_stable_selectors;
pub use summary::summarize_page;
