//! Device rotation and preview display orientation.

use std::fmt;

use super::types::Facing;
use crate::error::GeometryError;

/// Device rotation in quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    /// No rotation (0 degrees)
    #[default]
    Rotation0,
    /// 90 degrees
    Rotation90,
    /// 180 degrees
    Rotation180,
    /// 270 degrees
    Rotation270,
}

impl Rotation {
    pub const fn degrees(self) -> u32 {
        match self {
            Rotation::Rotation0 => 0,
            Rotation::Rotation90 => 90,
            Rotation::Rotation180 => 180,
            Rotation::Rotation270 => 270,
        }
    }

    /// Map a display surface rotation index (0..=3) to a rotation.
    /// Unknown indices fall back to no rotation.
    pub fn from_surface_index(index: u32) -> Self {
        match index {
            1 => Rotation::Rotation90,
            2 => Rotation::Rotation180,
            3 => Rotation::Rotation270,
            _ => Rotation::Rotation0,
        }
    }

    /// True when `degrees % 180 == 0`: the sensor's natural landscape
    /// orientation is a quarter turn away from the device, so screen and
    /// camera sizes have to be swapped and frames rotated.
    pub const fn needs_compensation(self) -> bool {
        matches!(self, Rotation::Rotation0 | Rotation::Rotation180)
    }
}

impl TryFrom<i32> for Rotation {
    type Error = GeometryError;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        match degrees.rem_euclid(360) {
            0 => Ok(Rotation::Rotation0),
            90 => Ok(Rotation::Rotation90),
            180 => Ok(Rotation::Rotation180),
            270 => Ok(Rotation::Rotation270),
            _ => Err(GeometryError::InvalidRotation(degrees)),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// How the preview surface has to be turned to appear upright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOrientation {
    /// Clockwise rotation to apply to the preview, in degrees
    pub degrees: u32,
    /// Whether the preview surface is flipped left-right by the UI
    pub mirrored: bool,
}

/// Compute the preview display orientation for a sensor mounted at
/// `sensor_degrees` on a device currently rotated by `rotation`.
///
/// Front sensors are mirrored, so their rotation runs the other way and the
/// UI flips the preview horizontally.
pub fn display_orientation(
    sensor_degrees: u32,
    rotation: Rotation,
    facing: Facing,
) -> DisplayOrientation {
    let sensor = sensor_degrees % 360;
    let device = rotation.degrees();
    let orientation = match facing {
        Facing::Front => DisplayOrientation {
            degrees: (360 - (sensor + device) % 360) % 360,
            mirrored: true,
        },
        Facing::Back => DisplayOrientation {
            degrees: (sensor + 360 - device) % 360,
            mirrored: false,
        },
    };
    log::debug!(
        "Display orientation for {} sensor at {}° with device at {}: {}°{}",
        facing,
        sensor,
        rotation,
        orientation.degrees,
        if orientation.mirrored { " (mirrored)" } else { "" }
    );
    orientation
}
