use crate::alignment::Axis;

/// An error produced while validating positioning input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// An alignment name was not one of the supported values.
    #[error("invalid {axis} alignment: {value:?}")]
    InvalidAlignment {
        /// The axis the alignment applies to.
        axis: Axis,
        /// The rejected name.
        value: String,
    },

    /// An offset was `NaN` or infinite.
    #[error("invalid {axis} offset: {value}")]
    InvalidOffset {
        /// The axis the offset applies to.
        axis: Axis,
        /// The rejected offset.
        value: f32,
    },

    /// A measured box had a negative or non-finite dimension.
    #[error("invalid box size: {width}x{height}")]
    InvalidSize {
        /// The measured width.
        width: f32,
        /// The measured height.
        height: f32,
    },
}
