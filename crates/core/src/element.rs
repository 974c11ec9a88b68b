//! The elements widgets are mounted on.
use std::fmt;
use std::sync::atomic::{self, AtomicU64};

use crate::position::Position;
use crate::{Event, Rectangle};

/// A stable, opaque identity for a mounted element.
///
/// Parents key their children by [`Handle`]; it is never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(u64);

static COUNT: AtomicU64 = AtomicU64::new(1);

impl Handle {
    /// Creates a new unique [`Handle`].
    pub fn unique() -> Handle {
        Handle(COUNT.fetch_add(1, atomic::Ordering::Relaxed))
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A mounted element, as provided by the host.
///
/// Widgets only ever read geometry and attribute flags from an [`Element`],
/// write computed geometry back to it and dispatch events through it.
pub trait Element {
    /// Returns the [`Handle`] of the element.
    fn handle(&self) -> Handle;

    /// Returns the markup id of the element, used in event payloads.
    fn id(&self) -> String;

    /// Returns the current bounding box of the element.
    fn bounds(&self) -> Rectangle;

    /// Returns whether the element carries the given attribute.
    fn has_attribute(&self, name: &str) -> bool;

    /// Returns whether the element is disabled.
    fn is_disabled(&self) -> bool {
        self.has_attribute("disabled")
    }

    /// Sets the width of the element, in pixels.
    fn set_width(&self, width: f32);

    /// Moves the element to the given [`Position`], relative to its
    /// positioning parent.
    fn set_position(&self, position: Position);

    /// Dispatches an [`Event`] from the element.
    fn dispatch(&self, event: Event);
}

impl fmt::Debug for dyn Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("handle", &self.handle())
            .field("id", &self.id())
            .finish()
    }
}
