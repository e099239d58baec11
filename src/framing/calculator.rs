//! Framing rectangle computation.

use serde::Deserialize;

use super::rect::{to_coord, Preview, Rect, Screen};
use crate::camera::{Resolution, Rotation};

/// Size limits for the automatic framing rectangle, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FramingBounds {
    pub min_width: u32,
    pub min_height: u32,
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for FramingBounds {
    fn default() -> Self {
        Self {
            min_width: 240,
            min_height: 240,
            max_width: 600,
            max_height: 400,
        }
    }
}

impl FramingBounds {
    /// Three quarters of `extent`, limited to `[min, max]`. The lower limit is
    /// checked first so inverted limits never panic.
    fn fit(extent: u32, min: u32, max: u32) -> u32 {
        let size = (u64::from(extent) * 3 / 4) as u32;
        if size < min {
            min
        } else if size > max {
            max
        } else {
            size
        }
    }
}

/// Computes where the UI should draw the framing rectangle and where that
/// rectangle lands in the preview buffer.
///
/// When the device rotation is a multiple of 180° both resolutions are
/// swapped on construction: the sensor is mounted a quarter turn away from
/// the device's natural orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramingCalculator {
    screen: Option<Resolution>,
    camera: Option<Resolution>,
    bounds: FramingBounds,
}

impl FramingCalculator {
    /// Empty (`0x0`) resolutions are treated the same as `None`.
    pub fn new(screen: Option<Resolution>, camera: Option<Resolution>, rotation: Rotation) -> Self {
        let orient = |r: Option<Resolution>| {
            r.filter(|r| !r.is_empty()).map(|r| {
                if rotation.needs_compensation() {
                    r.rotate()
                } else {
                    r
                }
            })
        };
        Self {
            screen: orient(screen),
            camera: orient(camera),
            bounds: FramingBounds::default(),
        }
    }

    pub fn with_bounds(mut self, bounds: FramingBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Screen resolution after orientation compensation.
    pub fn screen(&self) -> Option<Resolution> {
        self.screen
    }

    /// Camera resolution after orientation compensation.
    pub fn camera(&self) -> Option<Resolution> {
        self.camera
    }

    /// Rectangle to draw on screen, three quarters of the screen clamped to
    /// the framing bounds and centered. `None` before the screen is known.
    pub fn framing_rect(&self) -> Option<Rect<Screen>> {
        self.screen.map(|screen| Self::frame_rect(screen, self.bounds))
    }

    /// [`framing_rect`](Self::framing_rect) scaled into preview buffer
    /// coordinates. `None` until both resolutions are known.
    pub fn framing_rect_in_preview(&self) -> Option<Rect<Preview>> {
        self.framing_rect().and_then(|rect| self.to_preview(rect))
    }

    /// Scale any screen rectangle into preview buffer coordinates.
    pub fn to_preview(&self, rect: Rect<Screen>) -> Option<Rect<Preview>> {
        match (self.screen, self.camera) {
            (Some(screen), Some(camera)) => Some(rect.scale(screen, camera)),
            _ => None,
        }
    }

    /// Centered rectangle of a caller-chosen size, clamped to the screen.
    pub fn manual_rect(&self, width: u32, height: u32) -> Option<Rect<Screen>> {
        let screen = self.screen?;
        let width = width.min(screen.width);
        let height = height.min(screen.height);
        let rect = centered(screen, width, height);
        log::debug!("Calculated manual framing rect: {}", rect);
        Some(rect)
    }

    /// Framing rectangle for a screen of the given size.
    pub fn frame_rect(screen: Resolution, bounds: FramingBounds) -> Rect<Screen> {
        let width = FramingBounds::fit(screen.width, bounds.min_width, bounds.max_width);
        let height = FramingBounds::fit(screen.height, bounds.min_height, bounds.max_height);
        let rect = centered(screen, width, height);
        log::debug!("Calculated framing rect: {}", rect);
        rect
    }
}

// Offsets go negative when the rectangle is wider than the screen.
fn centered(screen: Resolution, width: u32, height: u32) -> Rect<Screen> {
    let left = (i64::from(screen.width) - i64::from(width)) / 2;
    let top = (i64::from(screen.height) - i64::from(height)) / 2;
    Rect::new(
        to_coord(left),
        to_coord(top),
        to_coord(left + i64::from(width)),
        to_coord(top + i64::from(height)),
    )
}
