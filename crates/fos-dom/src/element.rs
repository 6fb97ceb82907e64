//! Element Query and Methods
//!
//! querySelector, getElementsByClassName, matches over compound selectors
//! such as `input[type=radio][name="size"]`. Combinators are not supported.

use crate::{DomTree, ElementData, NodeId};

/// Element query trait
pub trait ElementQuery {
    /// First matching element strictly below `root`, in document order
    fn query_selector(&self, root: NodeId, selector: &str) -> Option<NodeId>;

    /// All matching elements strictly below `root`, in document order
    fn query_selector_all(&self, root: NodeId, selector: &str) -> Vec<NodeId>;

    /// Get elements by class name
    fn get_elements_by_class_name(&self, root: NodeId, class: &str) -> Vec<NodeId>;

    /// Get elements by tag name
    fn get_elements_by_tag_name(&self, root: NodeId, tag: &str) -> Vec<NodeId>;

    /// Check if element matches selector
    fn matches(&self, element: NodeId, selector: &str) -> bool;
}

/// Simple selector for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Tag(String),
    Class(String),
    Id(String),
    Attribute { name: String, value: Option<String> },
    Universal,
}

impl SimpleSelector {
    pub fn matches(&self, elem: &ElementData) -> bool {
        match self {
            Self::Universal => true,
            Self::Tag(tag) => elem.name.eq_ignore_ascii_case(tag),
            Self::Id(id) => elem.id() == Some(id.as_str()),
            Self::Class(class) => elem.classes().any(|c| c == class),
            Self::Attribute { name, value: None } => elem.attrs.contains(name),
            Self::Attribute { name, value: Some(v) } => elem.get_attr(name) == Some(v.as_str()),
        }
    }
}

/// Compound selector: every part must match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub parts: Vec<SimpleSelector>,
}

impl Selector {
    /// Parse a compound selector; `None` if the text is not one
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let mut parts = Vec::new();

        let tag_end = s.find(['#', '.', '[']).unwrap_or(s.len());
        let (tag, mut rest) = s.split_at(tag_end);
        if tag == "*" {
            parts.push(SimpleSelector::Universal);
        } else if !tag.is_empty() {
            if !is_ident(tag) {
                return None;
            }
            parts.push(SimpleSelector::Tag(tag.to_ascii_lowercase()));
        }

        while let Some(c) = rest.chars().next() {
            match c {
                '#' | '.' => {
                    let body = &rest[1..];
                    let end = body.find(['#', '.', '[']).unwrap_or(body.len());
                    let name = &body[..end];
                    if !is_ident(name) {
                        return None;
                    }
                    parts.push(if c == '#' {
                        SimpleSelector::Id(name.to_string())
                    } else {
                        SimpleSelector::Class(name.to_string())
                    });
                    rest = &body[end..];
                }
                '[' => {
                    let close = rest.find(']')?;
                    let inner = &rest[1..close];
                    let (name, value) = match inner.split_once('=') {
                        Some((n, v)) => (n.trim(), Some(unquote(v.trim()).to_string())),
                        None => (inner.trim(), None),
                    };
                    if !is_ident(name) {
                        return None;
                    }
                    parts.push(SimpleSelector::Attribute {
                        name: name.to_string(),
                        value,
                    });
                    rest = &rest[close + 1..];
                }
                _ => return None,
            }
        }

        if parts.is_empty() {
            None
        } else {
            Some(Self { parts })
        }
    }

    pub fn matches(&self, elem: &ElementData) -> bool {
        self.parts.iter().all(|p| p.matches(elem))
    }
}

fn is_ident(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(quote).and_then(|r| r.strip_suffix(quote)) {
            return inner;
        }
    }
    s
}

impl DomTree {
    fn select(&self, root: NodeId, selector: &Selector) -> impl Iterator<Item = NodeId> + '_ {
        let selector = selector.clone();
        self.descendants(root)
            .skip(1)
            .filter(move |&n| self.element(n).is_some_and(|e| selector.matches(e)))
    }
}

impl ElementQuery for DomTree {
    fn query_selector(&self, root: NodeId, selector: &str) -> Option<NodeId> {
        let selector = Selector::parse(selector)?;
        self.select(root, &selector).next()
    }

    fn query_selector_all(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        match Selector::parse(selector) {
            Some(selector) => self.select(root, &selector).collect(),
            None => {
                tracing::debug!("unsupported selector: {}", selector);
                Vec::new()
            }
        }
    }

    fn get_elements_by_class_name(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        let selector = Selector {
            parts: vec![SimpleSelector::Class(class.to_string())],
        };
        self.select(root, &selector).collect()
    }

    fn get_elements_by_tag_name(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        let part = if tag == "*" {
            SimpleSelector::Universal
        } else {
            SimpleSelector::Tag(tag.to_string())
        };
        self.select(root, &Selector { parts: vec![part] }).collect()
    }

    fn matches(&self, element: NodeId, selector: &str) -> bool {
        match (self.element(element), Selector::parse(selector)) {
            (Some(elem), Some(selector)) => selector.matches(elem),
            _ => false,
        }
    }
}
