//! Fixtures standing in for the host.
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::core::event::{self, Event};
use crate::core::position::Position;
use crate::core::{Element, Handle, Rectangle, Ripple};
use crate::dropdown::{Child, Status};

pub(crate) struct MockElement {
    handle: Handle,
    id: String,
    bounds: Cell<Rectangle>,
    attributes: RefCell<Vec<String>>,
    width: Cell<Option<f32>>,
    position: Cell<Option<Position>>,
    events: RefCell<Vec<Event>>,
}

impl MockElement {
    pub(crate) fn new(id: &str) -> Rc<Self> {
        Rc::new(Self {
            handle: Handle::unique(),
            id: id.to_owned(),
            bounds: Cell::new(Rectangle::default()),
            attributes: RefCell::new(Vec::new()),
            width: Cell::new(None),
            position: Cell::new(None),
            events: RefCell::new(Vec::new()),
        })
    }

    pub(crate) fn with_attribute(self: Rc<Self>, name: &str) -> Rc<Self> {
        self.set_attribute(name, true);
        self
    }

    pub(crate) fn with_bounds(self: Rc<Self>, bounds: Rectangle) -> Rc<Self> {
        self.bounds.set(bounds);
        self
    }

    pub(crate) fn set_attribute(&self, name: &str, present: bool) {
        let mut attributes = self.attributes.borrow_mut();
        attributes.retain(|attribute| attribute != name);

        if present {
            attributes.push(name.to_owned());
        }
    }

    pub(crate) fn width(&self) -> Option<f32> {
        self.width.get()
    }

    pub(crate) fn position(&self) -> Option<Position> {
        self.position.get()
    }

    pub(crate) fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// The `open` flag of every `statuschange` event, in order.
    pub(crate) fn status_changes(&self) -> Vec<bool> {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.name == event::Name::StatusChange)
            .map(|event| event.detail.status.is_open())
            .collect()
    }
}

impl Element for MockElement {
    fn handle(&self) -> Handle {
        self.handle
    }

    fn id(&self) -> String {
        self.id.clone()
    }

    fn bounds(&self) -> Rectangle {
        self.bounds.get()
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.attributes
            .borrow()
            .iter()
            .any(|attribute| attribute == name)
    }

    fn set_width(&self, width: f32) {
        self.width.set(Some(width));

        let mut bounds = self.bounds.get();
        bounds.width = width;
        self.bounds.set(bounds);
    }

    fn set_position(&self, position: Position) {
        self.position.set(Some(position));
    }

    fn dispatch(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

pub(crate) struct RecordingChild {
    element: Option<Rc<MockElement>>,
    statuses: RefCell<Vec<Status>>,
}

impl RecordingChild {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self {
            element: None,
            statuses: RefCell::new(Vec::new()),
        })
    }

    pub(crate) fn with_element(element: Rc<MockElement>) -> Rc<Self> {
        Rc::new(Self {
            element: Some(element),
            statuses: RefCell::new(Vec::new()),
        })
    }

    pub(crate) fn statuses(&self) -> Vec<Status> {
        self.statuses.borrow().clone()
    }
}

impl Child for RecordingChild {
    fn element(&self) -> Option<Rc<dyn Element>> {
        self.element
            .clone()
            .map(|element| element as Rc<dyn Element>)
    }

    fn set_dropdown_status(&self, status: &Status) {
        self.statuses.borrow_mut().push(status.clone());
    }
}

#[derive(Default)]
pub(crate) struct MockRipple {
    active: Rc<Cell<Option<bool>>>,
}

impl MockRipple {
    /// Returns the ripple to hand over and a probe reading its last state.
    pub(crate) fn new() -> (Box<dyn Ripple>, Rc<Cell<Option<bool>>>) {
        let ripple = Self::default();
        let active = Rc::clone(&ripple.active);

        (Box::new(ripple), active)
    }
}

impl Ripple for MockRipple {
    fn activate(&self) {
        self.active.set(Some(true));
    }

    fn deactivate(&self) {
        self.active.set(Some(false));
    }
}
