//! Radio group lookup

use fos_dom::{DomTree, ElementQuery, NodeId};

/// Anything with a checked state and a submitted value
pub trait RadioButton {
    fn checked(&self) -> bool;
    fn value(&self) -> &str;
}

impl<T: RadioButton + ?Sized> RadioButton for &T {
    fn checked(&self) -> bool {
        (**self).checked()
    }

    fn value(&self) -> &str {
        (**self).value()
    }
}

/// Value of the first checked button, scanning left to right.
/// `None` when nothing in the group is checked.
pub fn find_checked_radio_button<'a, B>(buttons: impl IntoIterator<Item = &'a B>) -> Option<&'a str>
where
    B: RadioButton + ?Sized + 'a,
{
    buttons.into_iter().find(|b| b.checked()).map(|b| b.value())
}

/// Detached radio button state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadioState {
    pub checked: bool,
    pub value: String,
}

impl RadioState {
    pub fn new(checked: bool, value: impl Into<String>) -> Self {
        Self {
            checked,
            value: value.into(),
        }
    }
}

impl RadioButton for RadioState {
    fn checked(&self) -> bool {
        self.checked
    }

    fn value(&self) -> &str {
        &self.value
    }
}

/// An `<input type="radio">` element inside a [`DomTree`]
#[derive(Debug, Clone, Copy)]
pub struct RadioInput<'a> {
    tree: &'a DomTree,
    node: NodeId,
}

impl<'a> RadioInput<'a> {
    pub fn new(tree: &'a DomTree, node: NodeId) -> Self {
        Self { tree, node }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn name(&self) -> Option<&'a str> {
        self.tree.get_attribute(self.node, "name")
    }
}

impl RadioButton for RadioInput<'_> {
    /// Checkedness follows the `checked` content attribute
    fn checked(&self) -> bool {
        self.tree.element(self.node).is_some_and(|e| e.attrs.contains("checked"))
    }

    /// The `value` attribute, or `"on"` when it is missing
    fn value(&self) -> &str {
        self.tree.get_attribute(self.node, "value").unwrap_or("on")
    }
}

/// Radio inputs below `root` named `name`, in document order
pub fn radio_group<'a>(tree: &'a DomTree, root: NodeId, name: &str) -> Vec<RadioInput<'a>> {
    tree.get_elements_by_tag_name(root, "input")
        .into_iter()
        .filter(|&node| {
            tree.get_attribute(node, "type")
                .is_some_and(|t| t.eq_ignore_ascii_case("radio"))
        })
        .map(|node| RadioInput::new(tree, node))
        .filter(|input| input.name() == Some(name))
        .collect()
}

/// Selected value of the radio group `name` below `root`
pub fn checked_radio_value(tree: &DomTree, root: NodeId, name: &str) -> Option<String> {
    let group = radio_group(tree, root, name);
    find_checked_radio_button(&group).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fos_dom::NodeOperations;

    #[test]
    fn test_first_checked_wins() {
        let buttons = [
            RadioState::new(false, "a"),
            RadioState::new(true, "b"),
            RadioState::new(true, "c"),
        ];
        assert_eq!(find_checked_radio_button(&buttons), Some("b"));
    }

    #[test]
    fn test_none_checked() {
        let buttons = [RadioState::new(false, "a")];
        assert_eq!(find_checked_radio_button(&buttons), None);

        let empty: Vec<RadioState> = Vec::new();
        assert_eq!(find_checked_radio_button(&empty), None);
    }

    #[test]
    fn test_trait_objects() {
        let a = RadioState::new(false, "a");
        let b = RadioState::new(true, "b");
        let group: Vec<&dyn RadioButton> = vec![&a, &b];
        assert_eq!(find_checked_radio_button(group.iter().copied()), Some("b"));
    }

    #[test]
    fn test_dom_radio_group() {
        let mut tree = DomTree::new();
        let form = tree.create_element("form");
        let small = tree.create_element_with("input", &[("type", "radio"), ("name", "size"), ("value", "s")]);
        let large = tree.create_element_with(
            "input",
            &[("type", "RADIO"), ("name", "size"), ("value", "l"), ("checked", "")],
        );
        let other = tree.create_element_with("input", &[("type", "radio"), ("name", "color"), ("checked", "")]);
        let text = tree.create_element_with("input", &[("type", "text"), ("name", "size"), ("checked", "")]);
        for node in [small, large, other, text] {
            tree.append_child(form, node).unwrap();
        }

        let group = radio_group(&tree, form, "size");
        assert_eq!(group.iter().map(RadioInput::node).collect::<Vec<_>>(), vec![small, large]);
        assert_eq!(checked_radio_value(&tree, form, "size").as_deref(), Some("l"));
        // missing value attribute defaults to "on"
        assert_eq!(checked_radio_value(&tree, form, "color").as_deref(), Some("on"));
        assert_eq!(checked_radio_value(&tree, form, "missing"), None);
    }
}
