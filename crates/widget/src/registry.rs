//! Track the children a parent widget talks to.
use std::fmt;

use crate::core::Handle;

/// An insertion-ordered map from child [`Handle`] to the controls the child
/// handed over when it registered.
///
/// A handle appears at most once. Registering it again replaces its controls
/// in place.
pub struct Registry<C> {
    entries: Vec<(Handle, C)>,
}

impl<C> Default for Registry<C> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<C> fmt::Debug for Registry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(handle, _)| handle))
            .finish()
    }
}

impl<C> Registry<C> {
    /// Creates an empty [`Registry`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the controls of a child.
    ///
    /// Returns `true` if the handle was not registered before.
    pub fn register(&mut self, handle: Handle, controls: C) -> bool {
        if let Some(entry) = self.entries.iter_mut().find(|(h, _)| *h == handle) {
            entry.1 = controls;
            return false;
        }

        self.entries.push((handle, controls));
        true
    }

    /// Removes a child, returning its controls if it was registered.
    pub fn unregister(&mut self, handle: Handle) -> Option<C> {
        let index = self.entries.iter().position(|(h, _)| *h == handle)?;

        Some(self.entries.remove(index).1)
    }

    /// Returns the controls of a child.
    pub fn get(&self, handle: Handle) -> Option<&C> {
        self.entries
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, controls)| controls)
    }

    /// Returns whether a child is registered.
    pub fn contains(&self, handle: Handle) -> bool {
        self.get(handle).is_some()
    }

    /// Iterates over the registered children, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &C)> {
        self.entries.iter().map(|(handle, controls)| (*handle, controls))
    }

    /// Returns the number of registered children.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no child is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every child.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<C: Clone> Registry<C> {
    /// Copies the entries out, so their controls can be invoked without
    /// holding on to the registry.
    pub fn snapshot(&self) -> Vec<(Handle, C)> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empties_after_unregistering_everything() {
        let handles: Vec<Handle> = (0..8).map(|_| Handle::unique()).collect();
        let mut registry = Registry::new();

        for (i, handle) in handles.iter().enumerate() {
            assert!(registry.register(*handle, i));
        }

        assert_eq!(registry.len(), 8);

        for handle in handles.iter().rev() {
            assert!(registry.unregister(*handle).is_some());
        }

        assert!(registry.is_empty());
    }

    #[test]
    fn re_registering_keeps_order() {
        let [a, b, c] = [Handle::unique(), Handle::unique(), Handle::unique()];
        let mut registry = Registry::new();

        let _ = registry.register(a, "a");
        let _ = registry.register(b, "b");
        let _ = registry.register(c, "c");

        assert!(!registry.register(b, "b2"));

        let entries: Vec<_> = registry.iter().map(|(_, name)| *name).collect();
        assert_eq!(entries, vec!["a", "b2", "c"]);
        assert_eq!(registry.get(b), Some(&"b2"));
    }

    #[test]
    fn unregistering_unknown_handles_is_a_no_op() {
        let mut registry: Registry<()> = Registry::new();

        assert_eq!(registry.unregister(Handle::unique()), None);
        assert!(registry.is_empty());
    }
}
