//! Which attributes the cloner treats as id references.

use serde::{Deserialize, Serialize};

/// Attributes whose whole value is an id (`<label for>`)
pub const ID_REF_ATTRIBUTES: &[&str] = &["for"];

/// Attributes whose value may be `#id`
pub const SELECTOR_ATTRIBUTES: &[&str] = &["data-parent", "data-target", "href"];

/// Attributes holding a whitespace-separated list of ids
pub const ID_LIST_ATTRIBUTES: &[&str] = &["aria-controls", "aria-describedby", "aria-labelledby"];

/// Reference attribute sets used while rewriting a clone.
///
/// Missing fields fall back to the defaults when deserializing, so a config
/// file only needs to list what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdRewriteConfig {
    pub id_ref_attributes: Vec<String>,
    pub selector_attributes: Vec<String>,
    pub id_list_attributes: Vec<String>,
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl Default for IdRewriteConfig {
    fn default() -> Self {
        Self {
            id_ref_attributes: owned(ID_REF_ATTRIBUTES),
            selector_attributes: owned(SELECTOR_ATTRIBUTES),
            id_list_attributes: owned(ID_LIST_ATTRIBUTES),
        }
    }
}
