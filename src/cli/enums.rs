//! CLI enum types for transform and facing options.

use clap::ValueEnum;

use scanframe::yuv::{mirror_horizontal, rotate_clockwise_90, rotate_counter_clockwise_90};
use scanframe::{Facing, Nv21Image};

/// Frame transform to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransformOp {
    RotateCw,
    RotateCcw,
    Mirror,
}

impl TransformOp {
    pub fn apply(self, image: &Nv21Image) -> Nv21Image {
        match self {
            TransformOp::RotateCw => rotate_clockwise_90(image),
            TransformOp::RotateCcw => rotate_counter_clockwise_90(image),
            TransformOp::Mirror => mirror_horizontal(image),
        }
    }
}

/// Camera facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FacingArg {
    Front,
    #[default]
    Back,
}

impl From<FacingArg> for Facing {
    fn from(f: FacingArg) -> Self {
        match f {
            FacingArg::Front => Facing::Front,
            FacingArg::Back => Facing::Back,
        }
    }
}
