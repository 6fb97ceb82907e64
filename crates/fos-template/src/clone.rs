//! Element Cloning with ID Rewriting
//!
//! A clone of a template fragment must not reuse the ids of its source. The
//! cloner prefixes every id defined inside the copy and then points each
//! reference attribute at the prefixed id. It runs in two passes over the
//! copy: all ids are collected before any reference is fixed, since a
//! reference may name an id defined later in document order.

use std::collections::HashSet;

use crate::{ElementTree, IdRewriteConfig};

/// Clone `element` with every internal id prefixed by `id_prefix`.
///
/// With `rename_root` false the clone's root loses its `id` instead of being
/// renamed; references to that id are then left as they were. References to
/// ids defined outside the subtree are never touched. The source subtree is
/// not modified.
pub fn clone_element<T: ElementTree>(
    tree: &mut T,
    element: T::Handle,
    id_prefix: &str,
    rename_root: bool,
) -> Result<T::Handle, T::Error> {
    IdRewriter::default().clone_element(tree, element, id_prefix, rename_root)
}

/// Cloner with a configurable set of reference attributes
#[derive(Debug, Clone, Default)]
pub struct IdRewriter {
    config: IdRewriteConfig,
}

impl IdRewriter {
    pub fn new(config: IdRewriteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IdRewriteConfig {
        &self.config
    }

    /// See [`clone_element`]
    pub fn clone_element<T: ElementTree>(
        &self,
        tree: &mut T,
        element: T::Handle,
        id_prefix: &str,
        rename_root: bool,
    ) -> Result<T::Handle, T::Error> {
        let clone = tree.deep_clone(element)?;
        if !rename_root {
            tree.remove_attribute(clone, "id")?;
        }

        let renamed = rename_ids(tree, clone, id_prefix)?;
        for node in preorder(tree, clone) {
            self.fix_references(tree, node, id_prefix, &renamed)?;
        }

        tracing::debug!(
            prefix = id_prefix,
            rename_root,
            renamed = renamed.len(),
            "cloned element"
        );
        Ok(clone)
    }

    fn fix_references<T: ElementTree>(
        &self,
        tree: &mut T,
        node: T::Handle,
        prefix: &str,
        renamed: &HashSet<String>,
    ) -> Result<(), T::Error> {
        for name in &self.config.id_ref_attributes {
            let value = match tree.attribute(node, name) {
                Some(id) if renamed.contains(id) => format!("{prefix}{id}"),
                _ => continue,
            };
            tree.set_attribute(node, name, &value)?;
            tracing::trace!(attribute = %name, %value, "rewrote id reference");
        }

        for name in &self.config.selector_attributes {
            let value = match tree.attribute(node, name).and_then(|v| v.strip_prefix('#')) {
                Some(id) if renamed.contains(id) => format!("#{prefix}{id}"),
                _ => continue,
            };
            tree.set_attribute(node, name, &value)?;
            tracing::trace!(attribute = %name, %value, "rewrote selector reference");
        }

        for name in &self.config.id_list_attributes {
            let value = match tree.attribute(node, name).and_then(|v| prefix_id_list(v, prefix, renamed)) {
                Some(value) => value,
                None => continue,
            };
            tree.set_attribute(node, name, &value)?;
            tracing::trace!(attribute = %name, %value, "rewrote id list");
        }
        Ok(())
    }
}

/// Prefix every non-empty `id` below and including `root`, returning the
/// ids as they were before prefixing.
fn rename_ids<T: ElementTree>(tree: &mut T, root: T::Handle, prefix: &str) -> Result<HashSet<String>, T::Error> {
    let mut renamed = HashSet::new();
    for node in preorder(tree, root) {
        let id = match tree.attribute(node, "id") {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => continue,
        };
        tree.set_attribute(node, "id", &format!("{prefix}{id}"))?;
        renamed.insert(id);
    }
    Ok(renamed)
}

/// Elements of the subtree in pre-order, each exactly once.
/// Attribute rewrites never change structure, so the list stays valid.
fn preorder<T: ElementTree>(tree: &T, root: T::Handle) -> Vec<T::Handle> {
    let mut order = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        order.push(node);
        stack.extend(tree.element_children(node).into_iter().rev());
    }
    order
}

/// Rewrite the tokens of a whitespace-separated id list that name renamed ids.
/// Whitespace is kept byte for byte. `None` if no token changed.
fn prefix_id_list(value: &str, prefix: &str, renamed: &HashSet<String>) -> Option<String> {
    let mut output = String::with_capacity(value.len() + prefix.len());
    let mut changed = false;
    let mut rest = value;
    while !rest.is_empty() {
        let token_start = rest.len() - rest.trim_start().len();
        output.push_str(&rest[..token_start]);
        rest = &rest[token_start..];

        let token_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let token = &rest[..token_end];
        if !token.is_empty() && renamed.contains(token) {
            output.push_str(prefix);
            changed = true;
        }
        output.push_str(token);
        rest = &rest[token_end..];
    }
    changed.then_some(output)
}
