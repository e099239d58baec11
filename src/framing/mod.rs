//! Framing rectangles and the mapping between screen, preview and sensor
//! coordinates.

mod calculator;
mod rect;

pub use calculator::{FramingBounds, FramingCalculator};
pub use rect::{Preview, Rect, Screen, Sensor};
