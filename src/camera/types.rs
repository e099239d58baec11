//! Camera value types.

use std::fmt;
use std::str::FromStr;

/// Width/height pair reported by a screen or a camera sensor.
///
/// A `0x0` value is only ever used as an "unset" sentinel by callers that
/// cannot use `Option`; every computation in this crate expects positive
/// dimensions and treats an empty resolution as not yet known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Swap width and height.
    pub const fn rotate(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Aspect ratio `width / height`.
    ///
    /// # Panics
    /// Panics if `height` is zero. Callers must only ask for the ratio of a
    /// reported (non-empty) resolution.
    pub fn ratio(self) -> f32 {
        assert!(self.height > 0, "ratio of zero-height resolution {}", self);
        self.width as f32 / self.height as f32
    }

    pub const fn pixels(self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub const fn is_portrait(self) -> bool {
        self.height > self.width
    }

    /// True for the `0x0` sentinel or any resolution with a zero side.
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Portrait reports are assumed to be mistaken and are swapped.
    pub const fn to_landscape(self) -> Self {
        if self.is_portrait() {
            self.rotate()
        } else {
            self
        }
    }

    /// Byte length of a semi-planar YUV420 buffer of this size.
    pub const fn yuv420_len(self) -> usize {
        self.width as usize * self.height as usize * 3 / 2
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parse a `WIDTHxHEIGHT` string such as `1920x1080`.
impl FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('x').collect();
        if parts.len() != 2 {
            return Err(format!(
                "Invalid resolution format '{}'. Use WIDTHxHEIGHT (e.g., 1920x1080)",
                s
            ));
        }
        let width: u32 = parts[0]
            .parse()
            .map_err(|_| format!("Invalid width '{}' in resolution", parts[0]))?;
        let height: u32 = parts[1]
            .parse()
            .map_err(|_| format!("Invalid height '{}' in resolution", parts[1]))?;
        if width == 0 || height == 0 {
            return Err("Resolution width and height must be greater than 0".to_string());
        }
        Ok(Resolution { width, height })
    }
}

/// Which way the active sensor faces relative to the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    /// Faces the user (selfie camera); its image is mirrored
    Front,
    /// Faces away from the user
    #[default]
    Back,
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facing::Front => write!(f, "front"),
            Facing::Back => write!(f, "back"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_swaps_dimensions() {
        let res = Resolution::new(1280, 800);
        assert_eq!(res.rotate(), Resolution::new(800, 1280));
        assert_eq!(res.rotate().rotate(), res);
    }

    #[test]
    fn test_ratio_and_pixels() {
        let res = Resolution::new(1280, 800);
        assert!((res.ratio() - 1.6).abs() < f32::EPSILON);
        assert_eq!(res.pixels(), 1_024_000);
    }

    #[test]
    fn test_pixels_do_not_overflow() {
        let res = Resolution::new(u32::MAX, 2);
        assert_eq!(res.pixels(), u32::MAX as u64 * 2);
    }

    #[test]
    #[should_panic(expected = "zero-height")]
    fn test_ratio_of_zero_height_panics() {
        Resolution::new(640, 0).ratio();
    }

    #[test]
    fn test_portrait_and_landscape() {
        assert!(Resolution::new(800, 1280).is_portrait());
        assert!(!Resolution::new(1280, 800).is_portrait());
        assert!(!Resolution::new(800, 800).is_portrait());
        assert_eq!(
            Resolution::new(800, 1280).to_landscape(),
            Resolution::new(1280, 800)
        );
        assert_eq!(
            Resolution::new(1280, 800).to_landscape(),
            Resolution::new(1280, 800)
        );
    }

    #[test]
    fn test_empty_sentinel() {
        assert!(Resolution::default().is_empty());
        assert!(Resolution::new(0, 480).is_empty());
        assert!(!Resolution::new(640, 480).is_empty());
    }

    #[test]
    fn test_yuv420_len() {
        assert_eq!(Resolution::new(6, 4).yuv420_len(), 36);
        assert_eq!(Resolution::new(1920, 1080).yuv420_len(), 3_110_400);
    }

    #[test]
    fn test_display() {
        assert_eq!(Resolution::new(2592, 1944).to_string(), "2592x1944");
        assert_eq!(Facing::Front.to_string(), "front");
        assert_eq!(Facing::Back.to_string(), "back");
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!(
            "1920x1080".parse::<Resolution>(),
            Ok(Resolution::new(1920, 1080))
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!("1920".parse::<Resolution>().is_err());
        assert!("axb".parse::<Resolution>().is_err());
        assert!("0x1080".parse::<Resolution>().is_err());
        assert!("1920x1080x3".parse::<Resolution>().is_err());
    }
}
