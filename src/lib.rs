//! scanframe library crate.
//!
//! Image geometry for a barcode-scanning camera pipeline: choosing a preview
//! size, computing the on-screen framing rectangle and its preview-buffer
//! counterpart, and rotating/mirroring semi-planar YUV420 preview frames
//! before handing their luminance to a decoder.
//!
//! Camera hardware, UI drawing and decoding are left to the caller; this
//! crate only consumes sizes, rotations and raw buffers.

pub mod adapter;
pub mod camera;
pub mod config;
pub mod error;
pub mod framing;
pub mod yuv;

pub use adapter::{AdaptedFrame, FrameAdapter, FrameContext};
pub use camera::{Facing, PreviewSizeSelector, Resolution, Rotation};
pub use error::GeometryError;
pub use framing::{FramingBounds, FramingCalculator, Rect};
pub use yuv::{LuminanceRegion, Nv21Image};
