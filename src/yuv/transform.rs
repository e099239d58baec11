//! Quarter-turn rotation and mirroring of semi-planar YUV420 frames.
//!
//! Chroma is always moved as whole two-byte samples so a U/V pair is never
//! split or reordered.

use super::image::Nv21Image;

/// Direction of a 90 degree rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuarterTurn {
    Clockwise,
    CounterClockwise,
}

impl QuarterTurn {
    pub fn apply(self, image: &Nv21Image) -> Nv21Image {
        match self {
            QuarterTurn::Clockwise => rotate_clockwise_90(image),
            QuarterTurn::CounterClockwise => rotate_counter_clockwise_90(image),
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            QuarterTurn::Clockwise => QuarterTurn::CounterClockwise,
            QuarterTurn::CounterClockwise => QuarterTurn::Clockwise,
        }
    }
}

/// Rotate 90° clockwise. Row `x` of the result is column `x` of the source
/// read bottom to top; the result is `height` wide and `width` tall.
pub fn rotate_clockwise_90(image: &Nv21Image) -> Nv21Image {
    let w = image.width() as usize;
    let h = image.height() as usize;
    let src = image.data();
    let mut out = vec![0u8; src.len()];

    let mut i = 0;
    for x in 0..w {
        for y in (0..h).rev() {
            out[i] = src[y * w + x];
            i += 1;
        }
    }

    // Chroma is filled from the end: last source pair column first, top row
    // first.
    let uv = image.chroma();
    let mut i = out.len();
    for x in (1..w).rev().step_by(2) {
        for y in 0..h / 2 {
            let pair = y * w + x - 1;
            i -= 2;
            out[i] = uv[pair];
            out[i + 1] = uv[pair + 1];
        }
    }

    Nv21Image::from_raw(out, image.height(), image.width())
}

/// Rotate 90° counter-clockwise. Row `n` of the result is source column
/// `width - 1 - n` read top to bottom.
pub fn rotate_counter_clockwise_90(image: &Nv21Image) -> Nv21Image {
    let w = image.width() as usize;
    let h = image.height() as usize;
    let src = image.data();
    let mut out = vec![0u8; src.len()];

    let mut i = 0;
    for x in (0..w).rev() {
        for y in 0..h {
            out[i] = src[y * w + x];
            i += 1;
        }
    }

    let uv = image.chroma();
    let mut i = out.len();
    for x in (0..w).step_by(2) {
        for y in (0..h / 2).rev() {
            let pair = y * w + x;
            i -= 2;
            out[i] = uv[pair];
            out[i + 1] = uv[pair + 1];
        }
    }

    Nv21Image::from_raw(out, image.height(), image.width())
}

/// Flip left-right. Luma rows are reversed byte by byte, chroma rows are
/// reversed pair by pair.
pub fn mirror_horizontal(image: &Nv21Image) -> Nv21Image {
    let w = image.width() as usize;
    let mut out = vec![0u8; image.data().len()];
    let (out_luma, out_chroma) = out.split_at_mut(image.luma().len());

    for (dst, src) in out_luma
        .chunks_exact_mut(w)
        .zip(image.luma().chunks_exact(w))
    {
        for (d, s) in dst.iter_mut().zip(src.iter().rev()) {
            *d = *s;
        }
    }

    for (dst, src) in out_chroma
        .chunks_exact_mut(w)
        .zip(image.chroma().chunks_exact(w))
    {
        for (d, s) in dst.chunks_exact_mut(2).zip(src.chunks_exact(2).rev()) {
            d.copy_from_slice(s);
        }
    }

    Nv21Image::from_raw(out, image.width(), image.height())
}
