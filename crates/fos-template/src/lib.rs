//! fOS Template Utilities
//!
//! Helpers for instantiating repeated UI fragments:
//! - [`escape_html`] turns arbitrary text into safe HTML text
//! - [`find_checked_radio_button`] reads the selected value of a radio group
//! - [`clone_element`] duplicates a subtree, prefixing the ids it defines and
//!   every reference to them so the copy stays self-consistent
//!
//! The cloner works over any [`ElementTree`]; `fos_dom::DomTree` implements it.

mod clone;
mod config;
mod escape;
mod radio;
mod tree;

pub use clone::{clone_element, IdRewriter};
pub use config::{IdRewriteConfig, ID_LIST_ATTRIBUTES, ID_REF_ATTRIBUTES, SELECTOR_ATTRIBUTES};
pub use escape::{escape_html, escape_html_into, ESCAPE_MAP};
pub use radio::{checked_radio_value, find_checked_radio_button, radio_group, RadioButton, RadioInput, RadioState};
pub use tree::ElementTree;
