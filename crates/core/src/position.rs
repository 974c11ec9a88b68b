//! Place floating content relative to its trigger.
//!
//! The calculation is a pure function of the two measured boxes and a set of
//! [`Options`]. Results are relative to the top-left corner of the trigger and
//! are meant to be applied as an absolute offset from it.
//!
//! ```
//! use mdc_ui_core::position::{self, Options};
//! use mdc_ui_core::{Horizontal, Size};
//!
//! let position = position::compute(
//!     Size::new(100.0, 40.0),
//!     Size::new(50.0, 20.0),
//!     &Options::new().x_align(Horizontal::Center),
//! )?;
//!
//! assert_eq!((position.left, position.top), (25.0, 40.0));
//! # Ok::<(), mdc_ui_core::Error>(())
//! ```
use crate::alignment::{Axis, Horizontal, Vertical};
use crate::{Error, Size};

/// The offset of some content from the top-left corner of its trigger, in
/// pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// Horizontal offset.
    pub left: f32,
    /// Vertical offset.
    pub top: f32,
}

impl Position {
    /// Creates a new [`Position`].
    pub const fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }
}

/// How some content should be aligned against its trigger.
///
/// Offsets are percentages of the trigger dimension on the same axis. Their
/// direction follows the alignment side: a positive offset moves `Right`
/// aligned content to the left and `Top` aligned content upwards.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// The horizontal alignment.
    pub x_align: Horizontal,
    /// The horizontal offset, in percent of the trigger width.
    pub x_offset: f32,
    /// The vertical alignment.
    pub y_align: Vertical,
    /// The vertical offset, in percent of the trigger height.
    pub y_offset: f32,
    /// Whether the content must be resized to the width of the trigger
    /// before being measured.
    pub match_trigger_width: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            x_align: Horizontal::Left,
            x_offset: 0.0,
            y_align: Vertical::Bottom,
            y_offset: 0.0,
            match_trigger_width: false,
        }
    }
}

impl Options {
    /// Creates [`Options`] that hang the content below the left edge of its
    /// trigger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the horizontal alignment.
    #[must_use]
    pub fn x_align(mut self, x_align: Horizontal) -> Self {
        self.x_align = x_align;
        self
    }

    /// Sets the horizontal offset, in percent of the trigger width.
    #[must_use]
    pub fn x_offset(mut self, x_offset: f32) -> Self {
        self.x_offset = x_offset;
        self
    }

    /// Sets the vertical alignment.
    #[must_use]
    pub fn y_align(mut self, y_align: Vertical) -> Self {
        self.y_align = y_align;
        self
    }

    /// Sets the vertical offset, in percent of the trigger height.
    #[must_use]
    pub fn y_offset(mut self, y_offset: f32) -> Self {
        self.y_offset = y_offset;
        self
    }

    /// Sets whether the content is resized to the width of the trigger.
    #[must_use]
    pub fn match_trigger_width(mut self, match_trigger_width: bool) -> Self {
        self.match_trigger_width = match_trigger_width;
        self
    }

    /// Checks that both offsets are finite numbers.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.x_offset.is_finite() {
            return Err(Error::InvalidOffset {
                axis: Axis::Horizontal,
                value: self.x_offset,
            });
        }

        if !self.y_offset.is_finite() {
            return Err(Error::InvalidOffset {
                axis: Axis::Vertical,
                value: self.y_offset,
            });
        }

        Ok(())
    }

    /// Parses [`Options`] from RON.
    #[cfg(feature = "serde")]
    pub fn from_ron(source: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(source)
    }
}

/// Computes where the content goes, given the size of its trigger and its own
/// measured size.
///
/// When [`Options::match_trigger_width`] is set, `content` must be measured
/// after its width has been set to the trigger width and layout has settled.
pub fn compute(trigger: Size, content: Size, options: &Options) -> Result<Position, Error> {
    options.validate()?;

    for size in [trigger, content] {
        if !size.is_valid() {
            return Err(Error::InvalidSize {
                width: size.width,
                height: size.height,
            });
        }
    }

    let x_offset = match options.x_align {
        Horizontal::Right => -options.x_offset,
        Horizontal::Left | Horizontal::Center => options.x_offset,
    };

    let y_offset = match options.y_align {
        Vertical::Top => -options.y_offset,
        Vertical::Middle | Vertical::Bottom => options.y_offset,
    };

    let left = match options.x_align {
        Horizontal::Left => 0.0,
        Horizontal::Right => trigger.width - content.width,
        Horizontal::Center => (trigger.width - content.width) / 2.0,
    };

    let top = match options.y_align {
        Vertical::Top => -content.height,
        Vertical::Bottom => trigger.height,
        Vertical::Middle => (trigger.height - content.height) / 2.0,
    };

    let position = Position {
        left: left + trigger.width * (x_offset / 100.0),
        top: top + trigger.height * (y_offset / 100.0),
    };

    log::debug!("position::compute: {options:?} -> {position:?}");

    Ok(position)
}
