// From iced_aw, license MIT

//! Shared, single-threaded widget state.
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Reference-counted wrapper for widget state
pub(crate) struct RcWrapper<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Clone for RcWrapper<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for RcWrapper<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> RcWrapper<T> {
    pub fn new(data: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(data)),
        }
    }

    /// Never call into another widget from `f`; it may call back into us.
    pub fn with_data<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow())
    }

    /// Never call into another widget from `f`; it may call back into us.
    pub fn with_data_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }

    pub fn downgrade(&self) -> WeakWrapper<T> {
        WeakWrapper {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

/// A non-owning [`RcWrapper`], handed out to other widgets as controls.
pub(crate) struct WeakWrapper<T> {
    inner: Weak<RefCell<T>>,
}

impl<T> Clone for WeakWrapper<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<T> WeakWrapper<T> {
    pub fn upgrade(&self) -> Option<RcWrapper<T>> {
        self.inner.upgrade().map(|inner| RcWrapper { inner })
    }
}
