//! Semi-planar YUV420 image buffers.

use std::fmt;

use crate::camera::Resolution;
use crate::error::GeometryError;

/// A semi-planar YUV420 (NV21-style) frame.
///
/// Layout of `data`, `width * height * 3 / 2` bytes long:
/// - `[0, width * height)`: luma plane, one byte per pixel, row-major
/// - `[width * height, ..)`: chroma plane, `height / 2` rows of `width / 2`
///   interleaved two-byte samples, one sample per 2x2 luma block
///
/// Width and height are always even and at least 2. Transforms return new
/// images and never modify `data`.
#[derive(Clone, PartialEq, Eq)]
pub struct Nv21Image {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Nv21Image {
    /// Wrap a raw preview buffer, checking its dimensions and length.
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Result<Self, GeometryError> {
        let resolution = Resolution::new(width, height);
        let even = width >= 2 && height >= 2 && width % 2 == 0 && height % 2 == 0;
        if !even || data.len() != resolution.yuv420_len() {
            return Err(GeometryError::invalid_frame(resolution, data.len()));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Build an image from a buffer the caller has already sized correctly.
    pub(crate) fn from_raw(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(data.len(), Resolution::new(width, height).yuv420_len());
        Self {
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn resolution(&self) -> Resolution {
        Resolution::new(self.width, self.height)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn luma(&self) -> &[u8] {
        &self.data[..self.luma_len()]
    }

    pub fn chroma(&self) -> &[u8] {
        &self.data[self.luma_len()..]
    }

    fn luma_len(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

// Frames are large; print the shape, not the bytes.
impl fmt::Debug for Nv21Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nv21Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("len", &self.data.len())
            .finish()
    }
}
