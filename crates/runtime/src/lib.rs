//! A renderer-agnostic runtime for `mdc_ui`.
//!
//! Widgets never wait on the host directly. Instead, they ask a
//! [`Scheduler`] to run work once the current render has settled, or to
//! resolve a future on the next frame.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use mdc_ui_core as core;

pub mod frames;
pub mod scheduler;

pub use frames::Frames;
pub use scheduler::{Scheduler, Task};
