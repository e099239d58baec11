//! Axis-aligned rectangles tagged with the coordinate space they live in.

use std::fmt;
use std::marker::PhantomData;

use crate::camera::Resolution;
use crate::yuv::QuarterTurn;

/// Window coordinates of the UI overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Screen;

/// Coordinates of the (possibly rotated) preview buffer handed to the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Preview;

/// Coordinates of the raw, un-rotated sensor buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sensor;

/// Rectangle with exclusive `right`/`bottom` edges in coordinate space `S`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect<S> {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    space: PhantomData<S>,
}

impl<S> Rect<S> {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            space: PhantomData,
        }
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Re-express this rectangle in another space by linear scaling from a
    /// `from`-sized space to a `to`-sized one. Each coordinate is scaled with
    /// truncating integer division.
    ///
    /// # Panics
    /// Panics if `from` has a zero side.
    pub fn scale<T>(&self, from: Resolution, to: Resolution) -> Rect<T> {
        assert!(!from.is_empty(), "cannot scale from empty resolution {}", from);
        let sx = |c: i32| scale_coord(c, to.width, from.width);
        let sy = |c: i32| scale_coord(c, to.height, from.height);
        Rect::new(
            sx(self.left),
            sy(self.top),
            sx(self.right),
            sy(self.bottom),
        )
    }
}

impl Rect<Preview> {
    /// Map a rectangle in a preview buffer produced by rotating the sensor
    /// image a quarter `turn` back into the sensor's own coordinates.
    /// `sensor` is the size of the un-rotated buffer.
    pub fn to_sensor(&self, turn: QuarterTurn, sensor: Resolution) -> Rect<Sensor> {
        let w = to_coord(i64::from(sensor.width));
        let h = to_coord(i64::from(sensor.height));
        match turn {
            // rotated (x', y') was sensor (y', h - 1 - x')
            QuarterTurn::Clockwise => {
                Rect::new(self.top, h - self.right, self.bottom, h - self.left)
            }
            // rotated (x', y') was sensor (w - 1 - y', x')
            QuarterTurn::CounterClockwise => {
                Rect::new(w - self.bottom, self.left, w - self.top, self.right)
            }
        }
    }
}

impl<S> fmt::Display for Rect<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect({}, {} - {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

fn scale_coord(c: i32, numerator: u32, denominator: u32) -> i32 {
    // i64 division truncates toward zero, which is what the fixtures expect
    to_coord(i64::from(c) * i64::from(numerator) / i64::from(denominator))
}

pub(crate) fn to_coord(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_height() {
        let rect: Rect<Screen> = Rect::new(340, 200, 940, 600);
        assert_eq!(rect.width(), 600);
        assert_eq!(rect.height(), 400);
    }

    #[test]
    fn test_scale_truncates() {
        let rect: Rect<Screen> = Rect::new(100, 440, 700, 840);
        let preview: Rect<Preview> =
            rect.scale(Resolution::new(800, 1280), Resolution::new(368, 480));
        assert_eq!(preview, Rect::new(46, 165, 322, 315));
    }

    #[test]
    fn test_scale_negative_truncates_toward_zero() {
        let rect: Rect<Screen> = Rect::new(-3, 0, 10, 10);
        let preview: Rect<Preview> = rect.scale(Resolution::new(2, 2), Resolution::new(1, 1));
        assert_eq!(preview.left, -1);
    }

    #[test]
    fn test_to_sensor_clockwise() {
        // 6x4 sensor rotated clockwise into a 4x6 preview
        let rect: Rect<Preview> = Rect::new(1, 2, 3, 5);
        let sensor = rect.to_sensor(QuarterTurn::Clockwise, Resolution::new(6, 4));
        assert_eq!(sensor, Rect::new(2, 1, 5, 3));
        assert_eq!(sensor.width(), rect.height());
        assert_eq!(sensor.height(), rect.width());
    }

    #[test]
    fn test_to_sensor_counter_clockwise() {
        let rect: Rect<Preview> = Rect::new(1, 2, 3, 5);
        let sensor = rect.to_sensor(QuarterTurn::CounterClockwise, Resolution::new(6, 4));
        assert_eq!(sensor, Rect::new(1, 1, 4, 3));
    }

    #[test]
    fn test_full_frame_maps_to_full_frame() {
        let rect: Rect<Preview> = Rect::new(0, 0, 4, 6);
        let sensor = Resolution::new(6, 4);
        assert_eq!(
            rect.to_sensor(QuarterTurn::Clockwise, sensor),
            Rect::new(0, 0, 6, 4)
        );
        assert_eq!(
            rect.to_sensor(QuarterTurn::CounterClockwise, sensor),
            Rect::new(0, 0, 6, 4)
        );
    }

    #[test]
    fn test_display() {
        let rect: Rect<Screen> = Rect::new(1, 2, 3, 4);
        assert_eq!(rect.to_string(), "Rect(1, 2 - 3, 4)");
    }
}
