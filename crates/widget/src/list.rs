//! A list of items that toggle their selection when clicked.
//!
//! The list never deselects an item on its own, so several items may be
//! selected at once.
use std::rc::Rc;

use crate::core::{Element, Handle, Ripple};
use crate::selection::{self, Click, Selection};

/// A list of selectable items.
#[derive(Debug, Clone, Default)]
pub struct List {
    selection: Selection,
}

impl List {
    /// Creates an empty [`List`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects or deselects one item.
    pub fn select_item(&self, handle: Handle, selected: bool) {
        self.selection.select_item(handle, selected);
    }

    /// Returns whether an item is registered.
    pub fn contains(&self, handle: Handle) -> bool {
        self.selection.contains(handle)
    }

    /// Returns the number of registered items.
    pub fn len(&self) -> usize {
        self.selection.len()
    }

    /// Returns whether no item is registered.
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// Returns the controls the items of the [`List`] use.
    pub fn controls(&self) -> selection::Controls {
        self.selection.controls()
    }

    /// Forgets every item.
    pub fn destroy(&self) {
        log::debug!("list::destroy");
        self.selection.clear();
    }
}

/// An item of a [`List`].
#[derive(Debug, Clone)]
pub struct Item {
    raw: selection::Item,
}

impl Item {
    /// Creates an [`Item`] talking to its list through `controls`.
    pub fn new(controls: selection::Controls) -> Self {
        Self {
            raw: selection::Item::new("list-item", Click::Toggle, controls),
        }
    }

    /// Sets the touch feedback of the [`Item`].
    #[must_use]
    pub fn ripple(self, ripple: Box<dyn Ripple>) -> Self {
        self.raw.set_ripple(ripple);
        self
    }

    /// Registers with the list, selecting the item if its element carries
    /// the `selected` attribute.
    pub fn mount(&self, element: Rc<dyn Element>) {
        self.raw.mount(element);
    }

    /// Toggles the selection of the [`Item`].
    pub fn on_click(&self) {
        self.raw.on_click();
    }

    /// Re-syncs the ripple with the `disabled` attribute.
    pub fn on_attribute_mutation(&self) {
        self.raw.on_attribute_mutation();
    }

    /// Returns whether the list last marked the [`Item`] as selected.
    pub fn is_selected(&self) -> bool {
        self.raw.is_selected()
    }

    /// Returns the mounted element, if any.
    pub fn element(&self) -> Option<Rc<dyn Element>> {
        self.raw.element()
    }

    /// Leaves the list.
    pub fn destroy(&self) {
        self.raw.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_utils::{MockElement, MockRipple};

    fn item(list: &List, id: &str) -> (Item, Rc<MockElement>) {
        let item = Item::new(list.controls());
        let element = MockElement::new(id);
        item.mount(element.clone());

        (item, element)
    }

    #[test]
    fn clicking_toggles_selection() {
        let list = List::new();
        let (item, _) = item(&list, "item");

        item.on_click();
        assert!(item.is_selected());

        item.on_click();
        assert!(!item.is_selected());
    }

    #[test]
    fn several_items_stay_selected() {
        let list = List::new();
        let (a, _) = item(&list, "a");
        let (b, _) = item(&list, "b");

        a.on_click();
        b.on_click();

        assert!(a.is_selected());
        assert!(b.is_selected());
    }

    #[test]
    fn selected_attribute_selects_on_mount() {
        let list = List::new();
        let item = Item::new(list.controls());
        let element = MockElement::new("item").with_attribute("selected");

        item.mount(element.clone());

        assert!(item.is_selected());
        assert!(list.contains(element.handle()));
    }

    #[test]
    fn parent_can_select_by_handle() {
        let list = List::new();
        let (item, element) = item(&list, "item");

        list.select_item(element.handle(), true);

        assert!(item.is_selected());
    }

    #[test]
    fn ripple_follows_the_disabled_attribute() {
        let list = List::new();
        let (ripple, active) = MockRipple::new();
        let item = Item::new(list.controls()).ripple(ripple);
        let element = MockElement::new("item").with_attribute("disabled");

        item.mount(element.clone());
        assert_eq!(active.get(), Some(false));

        element.set_attribute("disabled", false);
        item.on_attribute_mutation();
        assert_eq!(active.get(), Some(true));
    }

    #[test]
    fn unmounted_items_ignore_clicks() {
        let list = List::new();
        let item = Item::new(list.controls());

        item.on_click();

        assert!(!item.is_selected());
        assert!(list.is_empty());
    }

    #[test]
    fn teardown_empties_the_list() {
        let list = List::new();
        let items: Vec<_> = ["a", "b", "c"]
            .into_iter()
            .map(|id| item(&list, id).0)
            .collect();

        assert_eq!(list.len(), 3);

        for item in &items {
            item.destroy();
        }

        assert!(list.is_empty());
        assert!(items.iter().all(|item| item.element().is_none()));
    }
}
