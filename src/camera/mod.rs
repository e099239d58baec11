//! Camera-side values reported by the external camera collaborator.
//!
//! This module provides:
//! - Sizes and facing via [`Resolution`] and [`Facing`]
//! - Device rotation via [`Rotation`] and [`display_orientation`]
//! - Preview size selection via [`PreviewSizeSelector`]

mod orientation;
mod preview_size;
mod types;

pub use orientation::{display_orientation, DisplayOrientation, Rotation};
pub use preview_size::{
    PreviewSizeSelector, DEFAULT_MAX_PREVIEW_PIXELS, DEFAULT_MIN_PREVIEW_PIXELS,
};
pub use types::{Facing, Resolution};
