//! Error types for geometry and frame operations.
//!
//! "Not yet known" states (no screen or camera resolution reported) are
//! modelled as `Option::None` throughout the crate and never show up here.

use crate::camera::Resolution;

/// Errors that can occur while selecting sizes or wrapping camera buffers.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    /// No candidate preview size passed the pixel bounds and the camera
    /// reported no default size to fall back on.
    #[error("No usable preview size among {candidates} candidate(s) and no default size")]
    NoPreviewSize {
        /// Number of candidates that were considered
        candidates: usize,
    },

    /// A raw buffer does not describe a valid semi-planar YUV420 image.
    #[error("Invalid YUV420 frame {width}x{height}: {len} bytes (expected {expected})")]
    InvalidFrame {
        width: u32,
        height: u32,
        len: usize,
        expected: usize,
    },

    /// A rotation that is not a whole number of quarter turns.
    #[error("Rotation of {0} degrees is not a multiple of 90")]
    InvalidRotation(i32),

    /// A luminance crop does not fit inside the luma plane.
    #[error("Region {width}x{height}+{left}+{top} exceeds {data_width}x{data_height} frame")]
    RegionOutOfBounds {
        left: i32,
        top: i32,
        width: i32,
        height: i32,
        data_width: u32,
        data_height: u32,
    },
}

impl GeometryError {
    pub(crate) fn invalid_frame(resolution: Resolution, len: usize) -> Self {
        GeometryError::InvalidFrame {
            width: resolution.width,
            height: resolution.height,
            len,
            expected: resolution.yuv420_len(),
        }
    }
}
