//! A dropdown menu, standalone or as a branch of a [`MenuBar`].
//!
//! A menu inside a bar routes every open and close request through
//! [`MenuBar::open_item`], so opening it closes its siblings.
//!
//! [`MenuBar`]: crate::menu_bar::MenuBar
//! [`MenuBar::open_item`]: crate::menu_bar::MenuBar::open_item
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use futures::future::{FutureExt, LocalBoxFuture};

use crate::core::position::{Options, Position};
use crate::core::{Element, Error, Handle, Ripple, ripple};
use crate::dropdown::{self, Dropdown, Part, Positioner, Status};
use crate::menu_bar::{self, ItemStatus, MenuItem, TriggerEvent};
use crate::runtime::{Scheduler, scheduler};

/// A dropdown menu.
#[derive(Clone)]
pub struct Menu {
    inner: Rc<Inner>,
}

struct Inner {
    dropdown: Dropdown,
    scheduler: Rc<dyn Scheduler>,
    state: RefCell<State>,
}

#[derive(Default)]
struct State {
    bar: Option<menu_bar::Controls>,
    ripple: Option<Box<dyn Ripple>>,
    init_open: Option<scheduler::Id>,
    bar_ready: bool,
}

impl std::fmt::Debug for Menu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.borrow();

        f.debug_struct("Menu")
            .field("dropdown", &self.inner.dropdown)
            .field("bar", &state.bar)
            .field("init_open", &state.init_open)
            .field("bar_ready", &state.bar_ready)
            .finish()
    }
}

impl Menu {
    /// Creates a standalone, closed [`Menu`].
    ///
    /// The [`Scheduler`] defers the initial open and lets positioning wait
    /// for layout.
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            inner: Rc::new(Inner {
                dropdown: Dropdown::new(Rc::clone(&scheduler)),
                scheduler,
                state: RefCell::new(State::default()),
            }),
        }
    }

    /// Makes the [`Menu`] a branch of the bar owning the given controls.
    #[must_use]
    pub fn bar(self, bar: menu_bar::Controls) -> Self {
        self.inner.state.borrow_mut().bar = Some(bar);
        self
    }

    /// Sets the touch feedback of the [`Menu`].
    #[must_use]
    pub fn ripple(self, ripple: Box<dyn Ripple>) -> Self {
        self.inner.state.borrow_mut().ripple = Some(ripple);
        self
    }

    /// Replaces the default positioning of the [`Menu`] content.
    #[must_use]
    pub fn positioner(self, positioner: impl Positioner + 'static) -> Self {
        let _ = self.inner.dropdown.clone().positioner(positioner);
        self
    }

    /// Stores the element, registers with the bar, if any, and schedules the
    /// initial open when the element carries the `open` attribute.
    pub fn mount(&self, element: Rc<dyn Element>) {
        log::debug!("menu::mount: {element:?}");

        let handle = element.handle();
        self.inner.dropdown.mount(element);

        if let Some(bar) = self.bar_controls() {
            bar.register_item(handle, self.item(), true);
        }

        self.setup_init_state();
    }

    /// Re-derives the state after the attributes of the element changed
    /// outside of the [`Menu`].
    pub fn on_attribute_mutation(&self) {
        log::debug!("menu::on_attribute_mutation");

        if self.inner.dropdown.element().is_none() {
            return;
        }

        self.inner.dropdown.on_attribute_mutation();
        self.setup_init_state();
    }

    /// Opens the [`Menu`], closing its siblings when inside a bar.
    pub fn open(&self) {
        self.request_open(true);
    }

    /// Closes the [`Menu`].
    pub fn close(&self) {
        self.request_open(false);
    }

    /// Closes the [`Menu`] if open; opens it otherwise.
    pub fn toggle(&self) {
        self.request_open(!self.is_open());
    }

    /// Returns whether the [`Menu`] is open.
    pub fn is_open(&self) -> bool {
        self.inner.dropdown.is_open()
    }

    /// Returns the current [`Status`], if mounted.
    pub fn status(&self) -> Option<Status> {
        self.inner.dropdown.status()
    }

    /// Returns the [`Handle`] the [`Menu`] registers under in its bar, if
    /// mounted.
    pub fn handle(&self) -> Option<Handle> {
        self.inner.dropdown.handle()
    }

    /// Returns whether the bar of the [`Menu`] has signalled it is ready.
    pub fn is_bar_ready(&self) -> bool {
        self.inner.state.borrow().bar_ready
    }

    /// Returns whether an initial open is waiting for the next render.
    pub fn is_open_scheduled(&self) -> bool {
        self.inner.state.borrow().init_open.is_some()
    }

    /// Returns the interaction opening the [`Menu`].
    pub fn trigger_event(&self) -> TriggerEvent {
        self.bar_controls()
            .map_or(TriggerEvent::Click, |bar| bar.trigger_event())
    }

    /// Returns the controls the trigger and content of the [`Menu`] use.
    pub fn controls(&self) -> Rc<dyn dropdown::Controls> {
        Rc::new(MenuControls {
            inner: Rc::downgrade(&self.inner),
        })
    }

    /// Cancels the pending initial open, leaves the bar and forgets the
    /// element.
    pub fn destroy(&self) {
        log::debug!("menu::destroy");

        let (init_open, bar) = {
            let mut state = self.inner.state.borrow_mut();
            let _ = state.ripple.take();

            (state.init_open.take(), state.bar.clone())
        };

        if let Some(id) = init_open {
            let _ = self.inner.scheduler.cancel(id);
        }

        if let (Some(bar), Some(handle)) = (bar, self.inner.dropdown.handle()) {
            bar.register_item(handle, self.item(), false);
        }

        self.inner.dropdown.destroy();
    }

    fn request_open(&self, open: bool) {
        log::debug!("menu::request_open: {open}");

        let bar = self.bar_controls();
        let handle = self.inner.dropdown.handle();

        match (bar, handle) {
            (Some(bar), Some(handle)) if bar.contains(handle) => bar.open_item(handle, open),
            _ if open => self.inner.dropdown.open(),
            _ => self.inner.dropdown.close(),
        }
    }

    fn setup_init_state(&self) {
        let Some(element) = self.inner.dropdown.element() else {
            return;
        };

        let disabled = self.inner.dropdown.is_disabled();

        {
            let state = self.inner.state.borrow();
            ripple::sync(state.ripple.as_deref(), disabled);
        }

        if disabled || !element.has_attribute("open") {
            return;
        }

        let weak = Rc::downgrade(&self.inner);
        let id = self.inner.scheduler.schedule_once(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };

            let menu = Menu { inner };
            menu.inner.state.borrow_mut().init_open = None;
            menu.request_open(true);
        }));

        let previous = self.inner.state.borrow_mut().init_open.replace(id);

        if let Some(previous) = previous {
            let _ = self.inner.scheduler.cancel(previous);
        }
    }

    fn bar_controls(&self) -> Option<menu_bar::Controls> {
        self.inner.state.borrow().bar.clone()
    }

    fn item(&self) -> Rc<dyn MenuItem> {
        Rc::new(MenuControls {
            inner: Rc::downgrade(&self.inner),
        })
    }
}

struct MenuControls {
    inner: Weak<Inner>,
}

impl MenuControls {
    fn menu(&self) -> Option<Menu> {
        self.inner.upgrade().map(|inner| Menu { inner })
    }
}

impl MenuItem for MenuControls {
    fn open(&self, open: bool) {
        let Some(menu) = self.menu() else {
            return;
        };

        if open {
            menu.inner.dropdown.open();
        } else {
            menu.inner.dropdown.close();
        }
    }

    fn status(&self) -> ItemStatus {
        ItemStatus {
            open: self.menu().is_some_and(|menu| menu.is_open()),
        }
    }

    fn bar_ready(&self) {
        let Some(menu) = self.menu() else {
            return;
        };

        log::debug!("menu::bar_ready");

        menu.inner.state.borrow_mut().bar_ready = true;
        menu.inner.dropdown.broadcast();
    }
}

impl dropdown::Controls for MenuControls {
    fn open(&self) {
        if let Some(menu) = self.menu() {
            menu.open();
        }
    }

    fn close(&self) {
        if let Some(menu) = self.menu() {
            menu.close();
        }
    }

    fn toggle(&self) {
        if let Some(menu) = self.menu() {
            menu.toggle();
        }
    }

    fn register(&self, part: Part, child: Rc<dyn dropdown::Child>, register: bool) {
        if let Some(menu) = self.menu() {
            menu.inner.dropdown.register_child(part, child, register);
        }
    }

    fn calc_content_position(
        &self,
        options: Options,
    ) -> LocalBoxFuture<'static, Result<Option<Position>, Error>> {
        match self.menu() {
            Some(menu) => menu.inner.dropdown.calc_content_position(options),
            None => futures::future::ready(Ok(None)).boxed_local(),
        }
    }
}
