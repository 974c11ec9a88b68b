//! A bar of menus where at most one menu is open at a time.
//!
//! Every menu of the bar registers a [`MenuItem`] under the [`Handle`] of its
//! element. Opening a menu through [`MenuBar::open_item`] closes all of its
//! siblings first.
mod state;

use std::rc::Rc;

use state::State;

use crate::core::event::{self, Event};
use crate::core::{Element, Handle};
use crate::shared::{RcWrapper, WeakWrapper};

/// The state of a menu, as reported to its bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemStatus {
    /// Whether the menu is open.
    pub open: bool,
}

/// The controls a menu hands to its [`MenuBar`] when registering.
pub trait MenuItem {
    /// Opens or closes the menu, without going back through the bar.
    fn open(&self, open: bool);

    /// Returns the current [`ItemStatus`] of the menu.
    fn status(&self) -> ItemStatus;

    /// Signals that the bar has mounted its element.
    fn bar_ready(&self);
}

/// The interaction that opens a menu of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerEvent {
    /// A click on the trigger.
    Click,
    /// The pointer entering the trigger.
    MouseEnter,
}

/// Coordinates the menus of a bar.
#[derive(Clone, Default)]
pub struct MenuBar {
    state: RcWrapper<State>,
}

impl std::fmt::Debug for MenuBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.state.with_data(|state| std::fmt::Debug::fmt(state, f))
    }
}

impl MenuBar {
    /// Creates an empty [`MenuBar`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the element of the [`MenuBar`] and signals every registered
    /// menu that the bar is ready.
    pub fn mount(&self, element: Rc<dyn Element>) {
        log::debug!("menu-bar::mount: {element:?}");

        let items = self.state.with_data_mut(|state| {
            state.element = Some(element);
            state.items.snapshot()
        });

        for (_, item) in items {
            item.bar_ready();
        }
    }

    /// Registers the controls of a menu, or removes the menu when `register`
    /// is `false`.
    ///
    /// A menu registering after the bar has mounted is signalled right away.
    /// Registering a known menu again only replaces its controls.
    pub fn register_item(&self, handle: Handle, controls: Rc<dyn MenuItem>, register: bool) {
        log::debug!("menu-bar::register_item: {handle} {register}");

        if !register {
            let _ = self
                .state
                .with_data_mut(|state| state.items.unregister(handle));
            return;
        }

        let ready = self.state.with_data_mut(|state| {
            let inserted = state.items.register(handle, Rc::clone(&controls));
            inserted && state.element.is_some()
        });

        if ready {
            controls.bar_ready();
        }
    }

    /// Opens or closes a menu.
    ///
    /// Every other menu is closed first. The menu itself is only told to
    /// change if its state differs. The bar is open afterwards only if the
    /// menu is, and a `statuschange` event is fired whenever the bar as a
    /// whole opens or closes.
    pub fn open_item(&self, handle: Handle, open: bool) {
        log::debug!("menu-bar::open_item: {handle} {open}");

        let Some(items) = self.state.with_data(|state| {
            state
                .items
                .contains(handle)
                .then(|| state.items.snapshot())
        }) else {
            log::debug!("menu-bar::open_item: item not registered: {handle}");
            return;
        };

        let mut target = None;

        for (item, controls) in items {
            if item == handle {
                target = Some(controls);
                continue;
            }

            log::debug!("menu-bar::open_item: closing {item}");
            controls.open(false);
        }

        // A disabled menu refuses to open, so the bar follows what the menu
        // actually did
        let open = match target {
            Some(controls) => {
                if controls.status().open != open {
                    log::debug!("menu-bar::open_item: toggling {handle}");
                    controls.open(open);
                }

                controls.status().open
            }
            None => open,
        };

        let changed = self.state.with_data_mut(|state| {
            if state.open == open {
                return false;
            }

            state.open = open;
            true
        });

        if changed {
            self.fire(handle, open);
        }
    }

    /// Closes every menu of the bar.
    ///
    /// Meant for interactions leaving the bar, like focus moving elsewhere.
    pub fn close_sub_menus(&self) {
        log::debug!("menu-bar::close_sub_menus");

        let items = self.state.with_data_mut(|state| {
            state.open = false;
            state.items.snapshot()
        });

        for (_, item) in items {
            item.open(false);
        }
    }

    /// Returns the interaction that opens a menu: hovering once a menu is
    /// open, clicking otherwise.
    pub fn trigger_event(&self) -> TriggerEvent {
        if self.is_open() {
            TriggerEvent::MouseEnter
        } else {
            TriggerEvent::Click
        }
    }

    /// Returns whether one of the menus is open.
    pub fn is_open(&self) -> bool {
        self.state.with_data(|state| state.open)
    }

    /// Returns whether a menu is registered.
    pub fn contains(&self, handle: Handle) -> bool {
        self.state.with_data(|state| state.items.contains(handle))
    }

    /// Returns the number of registered menus.
    pub fn len(&self) -> usize {
        self.state.with_data(|state| state.items.len())
    }

    /// Returns whether no menu is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the [`Controls`] menus use to talk to the [`MenuBar`].
    pub fn controls(&self) -> Controls {
        Controls {
            state: self.state.downgrade(),
        }
    }

    /// Forgets every menu and the element.
    pub fn destroy(&self) {
        log::debug!("menu-bar::destroy");
        self.state.with_data_mut(State::reset);
    }

    fn fire(&self, handle: Handle, open: bool) {
        let Some(element) = self.state.with_data(|state| state.element.clone()) else {
            return;
        };

        log::debug!("menu-bar::fire: statuschange {handle} {open}");

        element.dispatch(Event::new(
            event::Name::StatusChange,
            element.id(),
            event::Status::MenuBar {
                menu_item: handle,
                open,
            },
        ));
    }
}

/// The controls a [`MenuBar`] hands to its menus.
///
/// Every call is a no-op once the bar is gone.
#[derive(Clone)]
pub struct Controls {
    state: WeakWrapper<State>,
}

impl std::fmt::Debug for Controls {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controls")
            .field("alive", &self.state.upgrade().is_some())
            .finish()
    }
}

impl Controls {
    fn bar(&self) -> Option<MenuBar> {
        self.state.upgrade().map(|state| MenuBar { state })
    }

    /// See [`MenuBar::register_item`].
    pub fn register_item(&self, handle: Handle, controls: Rc<dyn MenuItem>, register: bool) {
        if let Some(bar) = self.bar() {
            bar.register_item(handle, controls, register);
        }
    }

    /// See [`MenuBar::open_item`].
    pub fn open_item(&self, handle: Handle, open: bool) {
        if let Some(bar) = self.bar() {
            bar.open_item(handle, open);
        }
    }

    /// See [`MenuBar::trigger_event`].
    pub fn trigger_event(&self) -> TriggerEvent {
        self.bar()
            .map_or(TriggerEvent::Click, |bar| bar.trigger_event())
    }

    /// Returns whether the menu is registered with a live bar.
    pub fn contains(&self, handle: Handle) -> bool {
        self.bar().is_some_and(|bar| bar.contains(handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_utils::MockElement;

    use proptest::prelude::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct Item {
        open: Cell<bool>,
        open_calls: Cell<usize>,
        ready: Cell<usize>,
        disabled: Cell<bool>,
    }

    impl MenuItem for Item {
        fn open(&self, open: bool) {
            self.open_calls.set(self.open_calls.get() + 1);
            self.open.set(open && !self.disabled.get());
        }

        fn status(&self) -> ItemStatus {
            ItemStatus {
                open: self.open.get(),
            }
        }

        fn bar_ready(&self) {
            self.ready.set(self.ready.get() + 1);
        }
    }

    fn items(count: usize) -> Vec<(Handle, Rc<Item>)> {
        (0..count)
            .map(|_| (Handle::unique(), Rc::new(Item::default())))
            .collect()
    }

    fn register_all(bar: &MenuBar, items: &[(Handle, Rc<Item>)]) {
        for (handle, item) in items {
            bar.register_item(*handle, item.clone(), true);
        }
    }

    #[test]
    fn opening_an_item_closes_its_siblings() {
        let bar = MenuBar::new();
        let element = MockElement::new("bar");
        let items = items(3);
        let [(a, item_a), (b, item_b), (_, item_c)] = &items[..] else {
            unreachable!()
        };

        register_all(&bar, &items);
        bar.mount(element.clone());

        bar.open_item(*a, true);

        assert!(item_a.open.get());
        assert!(!item_b.open.get());
        assert!(!item_c.open.get());
        assert!(bar.is_open());
        assert_eq!(
            element.events(),
            vec![Event::new(
                event::Name::StatusChange,
                "bar",
                event::Status::MenuBar {
                    menu_item: *a,
                    open: true
                }
            )]
        );

        bar.open_item(*b, true);

        assert!(!item_a.open.get());
        assert!(item_b.open.get());
        assert!(!item_c.open.get());

        // The bar was already open, so switching branches is silent
        assert_eq!(element.status_changes(), vec![true]);

        bar.open_item(*b, false);

        assert!(!item_b.open.get());
        assert!(!bar.is_open());
        assert_eq!(element.status_changes(), vec![true, false]);
    }

    #[test]
    fn bar_stays_closed_when_the_item_refuses_to_open() {
        let bar = MenuBar::new();
        let element = MockElement::new("bar");
        let items = items(2);
        let [(a, item_a), (b, item_b)] = &items[..] else {
            unreachable!()
        };

        register_all(&bar, &items);
        bar.mount(element.clone());
        item_b.disabled.set(true);

        bar.open_item(*b, true);

        assert!(!item_b.open.get());
        assert!(!bar.is_open());
        assert!(element.events().is_empty());
        assert_eq!(bar.trigger_event(), TriggerEvent::Click);

        bar.open_item(*a, true);
        bar.open_item(*b, true);

        // Siblings close even when the requested item stays shut
        assert!(!item_a.open.get());
        assert!(!bar.is_open());
        assert_eq!(element.status_changes(), vec![true, false]);
    }

    #[test]
    fn items_already_in_the_requested_state_are_left_alone() {
        let bar = MenuBar::new();
        let items = items(1);
        let (handle, item) = &items[0];
        register_all(&bar, &items);

        item.open.set(true);
        bar.open_item(*handle, true);

        assert_eq!(item.open_calls.get(), 0);
        assert!(bar.is_open());
    }

    #[test]
    fn unregistered_items_are_ignored() {
        let bar = MenuBar::new();
        let element = MockElement::new("bar");
        let items = items(2);
        register_all(&bar, &items);
        bar.mount(element.clone());

        bar.open_item(items[0].0, true);
        bar.open_item(Handle::unique(), true);

        assert!(items[0].1.open.get());
        assert_eq!(element.status_changes(), vec![true]);
    }

    #[test]
    fn items_registered_before_mount_are_readied_on_mount() {
        let bar = MenuBar::new();
        let items = items(2);
        register_all(&bar, &items);

        assert!(items.iter().all(|(_, item)| item.ready.get() == 0));

        bar.mount(MockElement::new("bar"));

        assert!(items.iter().all(|(_, item)| item.ready.get() == 1));
    }

    #[test]
    fn re_registering_does_not_ready_again() {
        let bar = MenuBar::new();
        bar.mount(MockElement::new("bar"));

        let items = items(1);
        register_all(&bar, &items);
        register_all(&bar, &items);

        assert_eq!(items[0].1.ready.get(), 1);
        assert_eq!(bar.len(), 1);
    }

    #[test]
    fn close_sub_menus_closes_everything() {
        let bar = MenuBar::new();
        let items = items(3);
        register_all(&bar, &items);

        bar.open_item(items[1].0, true);
        bar.close_sub_menus();

        assert!(items.iter().all(|(_, item)| !item.open.get()));
        assert!(!bar.is_open());
    }

    #[test]
    fn trigger_event_switches_to_hover_while_open() {
        let bar = MenuBar::new();
        let items = items(1);
        register_all(&bar, &items);

        assert_eq!(bar.trigger_event(), TriggerEvent::Click);

        bar.open_item(items[0].0, true);

        assert_eq!(bar.trigger_event(), TriggerEvent::MouseEnter);
        assert_eq!(bar.controls().trigger_event(), TriggerEvent::MouseEnter);
    }

    #[test]
    fn registry_empties_after_every_item_leaves() {
        let bar = MenuBar::new();
        let items = items(5);
        register_all(&bar, &items);

        for (handle, item) in &items {
            bar.register_item(*handle, item.clone(), false);
        }

        assert!(bar.is_empty());
    }

    #[test]
    fn controls_outliving_the_bar_are_no_ops() {
        let controls = MenuBar::new().controls();
        let items = items(1);

        controls.register_item(items[0].0, items[0].1.clone(), true);
        controls.open_item(items[0].0, true);

        assert!(!controls.contains(items[0].0));
        assert_eq!(items[0].1.open_calls.get(), 0);
        assert_eq!(controls.trigger_event(), TriggerEvent::Click);
    }

    #[test]
    fn destroy_forgets_items() {
        let bar = MenuBar::new();
        let items = items(2);
        register_all(&bar, &items);
        bar.open_item(items[0].0, true);

        bar.destroy();

        assert!(bar.is_empty());
        assert!(!bar.is_open());
    }

    proptest! {
        #[test]
        fn at_most_one_item_is_open(
            requests in proptest::collection::vec((0usize..4, any::<bool>()), 0..32)
        ) {
            let bar = MenuBar::new();
            let items = items(4);
            register_all(&bar, &items);
            bar.mount(MockElement::new("bar"));

            for (index, open) in requests {
                bar.open_item(items[index].0, open);

                let open_items = items.iter().filter(|(_, item)| item.open.get()).count();
                prop_assert!(open_items <= 1);
                prop_assert_eq!(bar.is_open(), open_items == 1 && open);
            }
        }

        #[test]
        fn every_item_is_readied_exactly_once(
            count in 0usize..6,
            mount_at in 0usize..6,
        ) {
            let bar = MenuBar::new();
            let items = items(count);
            let mount_at = mount_at.min(count);

            register_all(&bar, &items[..mount_at]);
            bar.mount(MockElement::new("bar"));
            register_all(&bar, &items[mount_at..]);

            // Late re-registration must not signal again
            register_all(&bar, &items);

            for (_, item) in &items {
                prop_assert_eq!(item.ready.get(), 1);
            }
        }
    }
}
