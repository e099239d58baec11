//! Semi-planar YUV420 frames and the pure transforms applied to them before
//! decoding.

mod image;
mod luminance;
mod transform;

pub use image::Nv21Image;
pub use luminance::LuminanceRegion;
pub use transform::{mirror_horizontal, rotate_clockwise_90, rotate_counter_clockwise_90, QuarterTurn};
