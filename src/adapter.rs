//! Per-frame orchestration: turn a raw preview frame into a decoder-ready
//! frame plus the region to decode.
//!
//! The adapter owns the only cross-frame state (cached framing rectangles
//! and a pending manual framing size). Every method that touches it takes
//! `&mut self`, so callers sharing an adapter between the camera callback
//! and a worker thread have to serialize access themselves (one frame in
//! flight at a time).

use crate::camera::{Facing, Resolution, Rotation};
use crate::error::GeometryError;
use crate::framing::{FramingBounds, FramingCalculator, Preview, Rect, Screen, Sensor};
use crate::yuv::{LuminanceRegion, Nv21Image, QuarterTurn};

/// Camera state a frame was captured under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameContext {
    /// Landscape-normalized screen size
    pub screen: Resolution,
    /// Selected preview size, as reported by the sensor
    pub camera: Resolution,
    pub rotation: Rotation,
    pub facing: Facing,
}

impl FrameContext {
    /// Rotation applied to frames captured under this context, if any.
    ///
    /// Front sensors are mirrored relative to back ones, so they turn the
    /// other way. The UI already mirrors the front preview, so no mirroring
    /// happens here.
    pub fn frame_turn(&self) -> Option<QuarterTurn> {
        if !self.rotation.needs_compensation() {
            return None;
        }
        Some(match self.facing {
            Facing::Back => QuarterTurn::Clockwise,
            Facing::Front => QuarterTurn::CounterClockwise,
        })
    }
}

/// A frame ready for decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptedFrame {
    /// The frame, rotated if the context required it
    pub image: Nv21Image,
    /// Framing rectangle in `image` coordinates
    pub region: Rect<Preview>,
    /// Rotation that produced `image` from the sensor frame
    pub turn: Option<QuarterTurn>,
    /// Size of the frame as delivered by the sensor
    pub sensor: Resolution,
}

impl AdaptedFrame {
    /// Luminance view of `region` for the decoder.
    pub fn luminance(&self) -> Result<LuminanceRegion<'_>, GeometryError> {
        LuminanceRegion::new(&self.image, self.region)
    }

    /// `region` expressed in the un-rotated sensor frame.
    pub fn sensor_region(&self) -> Rect<Sensor> {
        match self.turn {
            Some(turn) => self.region.to_sensor(turn, self.sensor),
            None => Rect::new(
                self.region.left,
                self.region.top,
                self.region.right,
                self.region.bottom,
            ),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct CachedFraming {
    context: FrameContext,
    framing: Option<Rect<Screen>>,
    preview: Option<Rect<Preview>>,
}

/// Keeps the framing rectangles current and adapts preview frames.
#[derive(Debug, Default)]
pub struct FrameAdapter {
    bounds: FramingBounds,
    manual_size: Option<(u32, u32)>,
    cache: Option<CachedFraming>,
}

impl FrameAdapter {
    pub fn new(bounds: FramingBounds) -> Self {
        Self {
            bounds,
            manual_size: None,
            cache: None,
        }
    }

    pub fn calculator(&self, context: &FrameContext) -> FramingCalculator {
        FramingCalculator::new(Some(context.screen), Some(context.camera), context.rotation)
            .with_bounds(self.bounds)
    }

    /// Framing rectangle to draw on screen under `context`.
    pub fn framing_rect(&mut self, context: &FrameContext) -> Option<Rect<Screen>> {
        self.refresh(context).framing
    }

    /// Framing rectangle in preview buffer coordinates under `context`.
    pub fn framing_rect_in_preview(&mut self, context: &FrameContext) -> Option<Rect<Preview>> {
        self.refresh(context).preview
    }

    /// Use a fixed framing size instead of the automatic one. May be called
    /// before any resolution is known; it applies as soon as one is.
    pub fn set_manual_framing_rect(&mut self, width: u32, height: u32) {
        log::debug!("Manual framing size requested: {}x{}", width, height);
        self.manual_size = Some((width, height));
        self.cache = None;
    }

    /// Forget cached rectangles and any manual framing size, as when the
    /// camera is closed.
    pub fn reset(&mut self) {
        self.manual_size = None;
        self.cache = None;
    }

    /// Prepare `frame` for decoding.
    ///
    /// When the rotation is a multiple of 180° the frame is rotated (clockwise
    /// for back sensors, counter-clockwise for front ones) and the region is
    /// recomputed for the rotated frame; otherwise the frame and the cached
    /// region pass through unchanged. Returns `None` while no framing
    /// rectangle is available.
    pub fn adapt(&mut self, frame: Nv21Image, context: &FrameContext) -> Option<AdaptedFrame> {
        if frame.resolution() != context.camera {
            log::warn!(
                "Frame is {} but camera resolution is {}",
                frame.resolution(),
                context.camera
            );
        }
        let region = self.framing_rect_in_preview(context)?;
        let sensor = frame.resolution();
        let turn = context.frame_turn();
        let image = match turn {
            Some(turn) => {
                log::debug!("Rotating {} frame {:?} for {}", context.facing, turn, context.rotation);
                turn.apply(&frame)
            }
            None => frame,
        };
        Some(AdaptedFrame {
            image,
            region,
            turn,
            sensor,
        })
    }

    fn refresh(&mut self, context: &FrameContext) -> CachedFraming {
        match self.cache {
            Some(cached) if cached.context == *context => cached,
            _ => {
                let calc = self.calculator(context);
                let framing = match self.manual_size {
                    Some((width, height)) => calc.manual_rect(width, height),
                    None => calc.framing_rect(),
                };
                let preview = framing.and_then(|rect| calc.to_preview(rect));
                let cached = CachedFraming {
                    context: *context,
                    framing,
                    preview,
                };
                self.cache = Some(cached);
                cached
            }
        }
    }
}
