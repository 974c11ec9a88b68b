//! Align floating content against its trigger.
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// An axis of the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The horizontal axis.
    Horizontal,

    /// The vertical axis.
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        })
    }
}

/// The horizontal alignment of some content relative to its trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Horizontal {
    /// Left edges line up.
    #[default]
    Left,

    /// Horizontally centered on the trigger.
    Center,

    /// Right edges line up.
    Right,
}

impl Horizontal {
    /// Returns the name of the alignment, as used in markup.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Horizontal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Horizontal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(Error::InvalidAlignment {
                axis: Axis::Horizontal,
                value: s.to_owned(),
            }),
        }
    }
}

/// The vertical alignment of some content relative to its trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Vertical {
    /// Content sits above the trigger.
    Top,

    /// Vertically centered on the trigger.
    Middle,

    /// Content hangs below the trigger.
    #[default]
    Bottom,
}

impl Vertical {
    /// Returns the name of the alignment, as used in markup.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Vertical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vertical {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "middle" => Ok(Self::Middle),
            "bottom" => Ok(Self::Bottom),
            _ => Err(Error::InvalidAlignment {
                axis: Axis::Vertical,
                value: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_markup_names() {
        assert_eq!("right".parse::<Horizontal>().unwrap(), Horizontal::Right);
        assert_eq!("middle".parse::<Vertical>().unwrap(), Vertical::Middle);
        assert_eq!(Horizontal::Center.to_string(), "center");
    }

    #[test]
    fn rejects_unknown_names() {
        let error = "centre".parse::<Horizontal>().unwrap_err();

        assert!(matches!(
            error,
            Error::InvalidAlignment {
                axis: Axis::Horizontal,
                ..
            }
        ));
        assert!("Bottom".parse::<Vertical>().is_err());
    }
}
