//! A trigger that shows and hides a floating content panel.
//!
//! A [`Dropdown`] owns the open state. Its [`Trigger`] and [`Content`]
//! children register with it through [`Controls`] and only mirror the
//! [`Status`] it broadcasts to them.
//!
//! ```
//! # use std::rc::Rc;
//! use mdc_ui_widget::dropdown::{Dropdown, Trigger};
//! use mdc_ui_widget::runtime::Frames;
//!
//! let dropdown = Dropdown::new(Rc::new(Frames::new()));
//! let trigger = Trigger::new(dropdown.controls());
//!
//! // Nothing is mounted yet, so interactions are ignored
//! trigger.on_trigger_event();
//! assert!(!dropdown.is_open());
//! ```
mod child;
mod content;
mod positioner;
mod trigger;

pub use content::Content;
pub use positioner::{Calculator, FromFn, Positioner, from_fn};
pub use trigger::Trigger;

use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};

use crate::core::event::{self, Event};
use crate::core::position::{Options, Position};
use crate::core::{Element, Error, Handle};
use crate::runtime::Scheduler;
use crate::shared::{RcWrapper, WeakWrapper};

/// The state a [`Dropdown`] broadcasts to its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// The markup id of the dropdown element.
    pub id: String,
    /// Whether the dropdown ignores open requests.
    pub disabled: bool,
    /// Whether the content is shown.
    pub open: bool,
}

/// The role of a child registered with a [`Dropdown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// The element opening the dropdown.
    Trigger,
    /// The floating panel.
    Content,
}

/// The controls a child hands to its [`Dropdown`] when registering.
pub trait Child {
    /// Returns the mounted element of the child, if any.
    fn element(&self) -> Option<Rc<dyn Element>>;

    /// Receives the latest [`Status`] of the dropdown.
    fn set_dropdown_status(&self, status: &Status);
}

/// The controls a [`Dropdown`] hands to its children.
pub trait Controls {
    /// Opens the dropdown.
    fn open(&self);

    /// Closes the dropdown.
    fn close(&self);

    /// Opens the dropdown if closed; closes it otherwise.
    fn toggle(&self);

    /// Registers a child for the given [`Part`], or unregisters it when
    /// `register` is `false`.
    fn register(&self, part: Part, child: Rc<dyn Child>, register: bool);

    /// Computes where the content goes relative to the trigger.
    ///
    /// Resolves to `None` while either of them is not mounted.
    fn calc_content_position(
        &self,
        options: Options,
    ) -> LocalBoxFuture<'static, Result<Option<Position>, Error>>;
}

/// The open state of a trigger and content pair.
#[derive(Clone)]
pub struct Dropdown {
    state: RcWrapper<State>,
}

struct State {
    element: Option<Rc<dyn Element>>,
    open: bool,
    disabled: bool,
    trigger: Option<Rc<dyn Child>>,
    content: Option<Rc<dyn Child>>,
    positioner: Rc<dyn Positioner>,
}

impl State {
    fn is_disabled(&self) -> bool {
        self.disabled || self.element.as_ref().is_some_and(|element| element.is_disabled())
    }

    fn status(&self) -> Option<Status> {
        let element = self.element.as_ref()?;

        Some(Status {
            id: element.id(),
            disabled: self.is_disabled(),
            open: self.open,
        })
    }
}

impl std::fmt::Debug for Dropdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.state.with_data(|state| {
            f.debug_struct("Dropdown")
                .field("element", &state.element)
                .field("open", &state.open)
                .field("disabled", &state.disabled)
                .field("trigger", &state.trigger.is_some())
                .field("content", &state.content.is_some())
                .finish()
        })
    }
}

impl Dropdown {
    /// Creates a closed [`Dropdown`] positioning its content with the default
    /// [`Calculator`], which waits for layout on the given [`Scheduler`].
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            state: RcWrapper::new(State {
                element: None,
                open: false,
                disabled: false,
                trigger: None,
                content: None,
                positioner: Rc::new(Calculator::new(scheduler)),
            }),
        }
    }

    /// Replaces the default [`Calculator`] with a custom [`Positioner`].
    #[must_use]
    pub fn positioner(self, positioner: impl Positioner + 'static) -> Self {
        self.state
            .with_data_mut(|state| state.positioner = Rc::new(positioner));
        self
    }

    /// Sets whether the [`Dropdown`] ignores open requests, regardless of the
    /// `disabled` attribute of its element.
    #[must_use]
    pub fn disabled(self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    /// Sets whether the [`Dropdown`] ignores open requests.
    ///
    /// An open dropdown stays open.
    pub fn set_disabled(&self, disabled: bool) {
        self.state.with_data_mut(|state| state.disabled = disabled);
        self.broadcast();
    }

    /// Stores the element of the [`Dropdown`].
    ///
    /// The open state is taken from the `open` attribute of the element.
    pub fn mount(&self, element: Rc<dyn Element>) {
        log::debug!("dropdown::mount: {element:?}");

        self.state.with_data_mut(|state| {
            state.open = element.has_attribute("open");
            state.element = Some(element);
        });

        self.broadcast();
        self.fire(event::Name::Init);
    }

    /// Re-derives the state after the attributes of the element changed
    /// outside of the [`Dropdown`].
    pub fn on_attribute_mutation(&self) {
        log::debug!("dropdown::on_attribute_mutation");

        if self.state.with_data(|state| state.element.is_none()) {
            return;
        }

        self.broadcast();
        self.fire(event::Name::StatusChange);
    }

    /// Opens the [`Dropdown`].
    ///
    /// Does nothing if it is already open, disabled or not mounted.
    pub fn open(&self) {
        log::debug!("dropdown::open");

        let opened = self.state.with_data_mut(|state| {
            if state.open || state.element.is_none() || state.is_disabled() {
                return false;
            }

            state.open = true;
            true
        });

        if opened {
            self.broadcast();
            self.fire(event::Name::StatusChange);
        }
    }

    /// Closes the [`Dropdown`].
    ///
    /// Does nothing if it is already closed.
    pub fn close(&self) {
        log::debug!("dropdown::close");

        let closed = self.state.with_data_mut(|state| {
            if !state.open {
                return false;
            }

            state.open = false;
            true
        });

        if closed {
            self.broadcast();
            self.fire(event::Name::StatusChange);
        }
    }

    /// Closes the [`Dropdown`] if open; opens it otherwise.
    pub fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Registers a child for the given [`Part`], or clears the part when
    /// `register` is `false`.
    ///
    /// The current [`Status`] is broadcast afterwards, so a new child sees it
    /// right away.
    pub fn register_child(&self, part: Part, child: Rc<dyn Child>, register: bool) {
        log::debug!("dropdown::register_child: {part:?} {register}");

        self.state.with_data_mut(|state| {
            let slot = match part {
                Part::Trigger => &mut state.trigger,
                Part::Content => &mut state.content,
            };

            *slot = register.then_some(child);
        });

        self.broadcast();
    }

    /// Computes where the content goes relative to the trigger, using the
    /// [`Positioner`] of the [`Dropdown`].
    ///
    /// Resolves to `None` while the trigger or the content is not mounted.
    pub fn calc_content_position(
        &self,
        options: Options,
    ) -> LocalBoxFuture<'static, Result<Option<Position>, Error>> {
        log::debug!("dropdown::calc_content_position: {options:?}");

        let (positioner, trigger, content) = self.state.with_data(|state| {
            (
                Rc::clone(&state.positioner),
                state.trigger.clone(),
                state.content.clone(),
            )
        });

        let trigger = trigger.and_then(|child| child.element());
        let content = content.and_then(|child| child.element());

        async move {
            let (Some(trigger), Some(content)) = (trigger, content) else {
                log::debug!("dropdown::calc_content_position: trigger or content missing");
                return Ok(None);
            };

            positioner
                .position(trigger, content, options)
                .await
                .map(Some)
        }
        .boxed_local()
    }

    /// Returns whether the [`Dropdown`] is open.
    pub fn is_open(&self) -> bool {
        self.state.with_data(|state| state.open)
    }

    /// Returns whether the [`Dropdown`] ignores open requests.
    pub fn is_disabled(&self) -> bool {
        self.state.with_data(State::is_disabled)
    }

    /// Returns the current [`Status`], if mounted.
    pub fn status(&self) -> Option<Status> {
        self.state.with_data(State::status)
    }

    /// Returns the mounted element, if any.
    pub fn element(&self) -> Option<Rc<dyn Element>> {
        self.state.with_data(|state| state.element.clone())
    }

    /// Returns the [`Handle`] of the mounted element, if any.
    pub fn handle(&self) -> Option<Handle> {
        self.element().map(|element| element.handle())
    }

    /// Returns the [`Controls`] children use to talk to the [`Dropdown`].
    pub fn controls(&self) -> Rc<dyn Controls> {
        Rc::new(DropdownControls {
            state: self.state.downgrade(),
        })
    }

    /// Forgets the element and every child.
    ///
    /// [`Controls`] handed out before keep working as no-ops.
    pub fn destroy(&self) {
        log::debug!("dropdown::destroy");

        self.state.with_data_mut(|state| {
            state.trigger = None;
            state.content = None;
            state.element = None;
        });
    }

    /// Sends the current [`Status`] to the registered children.
    pub(crate) fn broadcast(&self) {
        let (status, trigger, content) = self.state.with_data(|state| {
            (state.status(), state.trigger.clone(), state.content.clone())
        });

        log::debug!("dropdown::broadcast: {status:?}");

        let Some(status) = status else {
            return;
        };

        for child in [trigger, content].into_iter().flatten() {
            child.set_dropdown_status(&status);
        }
    }

    fn fire(&self, name: event::Name) {
        let Some((element, status)) = self.state.with_data(|state| {
            let element = state.element.clone()?;
            let status = event::Status::Dropdown {
                open: state.open,
                disabled: state.is_disabled(),
            };

            Some((element, status))
        }) else {
            return;
        };

        log::debug!("dropdown::fire: {name}");

        element.dispatch(Event::new(name, element.id(), status));
    }
}

struct DropdownControls {
    state: WeakWrapper<State>,
}

impl DropdownControls {
    fn dropdown(&self) -> Option<Dropdown> {
        self.state.upgrade().map(|state| Dropdown { state })
    }
}

impl Controls for DropdownControls {
    fn open(&self) {
        if let Some(dropdown) = self.dropdown() {
            dropdown.open();
        }
    }

    fn close(&self) {
        if let Some(dropdown) = self.dropdown() {
            dropdown.close();
        }
    }

    fn toggle(&self) {
        if let Some(dropdown) = self.dropdown() {
            dropdown.toggle();
        }
    }

    fn register(&self, part: Part, child: Rc<dyn Child>, register: bool) {
        if let Some(dropdown) = self.dropdown() {
            dropdown.register_child(part, child, register);
        }
    }

    fn calc_content_position(
        &self,
        options: Options,
    ) -> LocalBoxFuture<'static, Result<Option<Position>, Error>> {
        match self.dropdown() {
            Some(dropdown) => dropdown.calc_content_position(options),
            None => futures::future::ready(Ok(None)).boxed_local(),
        }
    }
}
