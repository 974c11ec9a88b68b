//! The core library of `mdc_ui`.
//!
//! This library holds the basic types shared by every widget: geometry,
//! alignment, positioning, element handles and events. It does not know
//! anything about how elements are rendered.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod alignment;
pub mod element;
pub mod event;
pub mod position;
pub mod ripple;

mod error;
mod rectangle;
mod size;

pub use alignment::{Axis, Horizontal, Vertical};
pub use element::{Element, Handle};
pub use error::Error;
pub use event::Event;
pub use position::Position;
pub use rectangle::Rectangle;
pub use ripple::Ripple;
pub use size::Size;
