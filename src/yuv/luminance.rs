//! Luminance-only view of a frame region, as consumed by a barcode decoder.

use std::borrow::Cow;

use super::image::Nv21Image;
use crate::error::GeometryError;
use crate::framing::{Preview, Rect};

/// A rectangular window onto the luma plane of an [`Nv21Image`].
///
/// Chroma is never exposed; the decoder only needs brightness.
#[derive(Debug, Clone, Copy)]
pub struct LuminanceRegion<'a> {
    luma: &'a [u8],
    data_width: usize,
    data_height: usize,
    left: usize,
    top: usize,
    width: usize,
    height: usize,
}

impl<'a> LuminanceRegion<'a> {
    /// Crop `image` to `rect`. The rectangle must be non-empty and lie
    /// entirely inside the frame.
    pub fn new(image: &'a Nv21Image, rect: Rect<Preview>) -> Result<Self, GeometryError> {
        let data_width = image.width() as usize;
        let data_height = image.height() as usize;
        let fits = rect.left >= 0
            && rect.top >= 0
            && rect.width() > 0
            && rect.height() > 0
            && rect.right as usize <= data_width
            && rect.bottom as usize <= data_height;
        if !fits {
            return Err(GeometryError::RegionOutOfBounds {
                left: rect.left,
                top: rect.top,
                width: rect.width(),
                height: rect.height(),
                data_width: image.width(),
                data_height: image.height(),
            });
        }
        Ok(Self {
            luma: image.luma(),
            data_width,
            data_height,
            left: rect.left as usize,
            top: rect.top as usize,
            width: rect.width() as usize,
            height: rect.height() as usize,
        })
    }

    /// The whole luma plane.
    pub fn full(image: &'a Nv21Image) -> Self {
        let width = image.width() as usize;
        let height = image.height() as usize;
        Self {
            luma: image.luma(),
            data_width: width,
            data_height: height,
            left: 0,
            top: 0,
            width,
            height,
        }
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub fn top(&self) -> usize {
        self.top
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Luma values of row `y` of the region.
    ///
    /// # Panics
    /// Panics if `y >= height()`.
    pub fn row(&self, y: usize) -> &'a [u8] {
        assert!(y < self.height, "row {} outside region of height {}", y, self.height);
        let start = (self.top + y) * self.data_width + self.left;
        &self.luma[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// All region luma values, row-major. Borrowed when the region covers the
    /// whole frame, copied otherwise.
    pub fn matrix(&self) -> Cow<'a, [u8]> {
        if self.width == self.data_width && self.height == self.data_height {
            return Cow::Borrowed(self.luma);
        }
        let mut matrix = Vec::with_capacity(self.width * self.height);
        for row in self.rows() {
            matrix.extend_from_slice(row);
        }
        Cow::Owned(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Nv21Image {
        Nv21Image::new((1..=36).collect(), 6, 4).unwrap()
    }

    #[test]
    fn test_crop_rows() {
        let img = fixture();
        let region = LuminanceRegion::new(&img, Rect::new(1, 1, 4, 3)).unwrap();
        assert_eq!(region.width(), 3);
        assert_eq!(region.height(), 2);
        assert_eq!(region.row(0), &[8, 9, 10]);
        assert_eq!(region.row(1), &[14, 15, 16]);
        assert_eq!(region.matrix().as_ref(), &[8, 9, 10, 14, 15, 16]);
    }

    #[test]
    fn test_full_region_borrows() {
        let img = fixture();
        let region = LuminanceRegion::full(&img);
        assert!(matches!(region.matrix(), Cow::Borrowed(_)));
        assert_eq!(region.matrix().len(), 24);
    }

    #[test]
    fn test_full_rect_equals_full() {
        let img = fixture();
        let region = LuminanceRegion::new(&img, Rect::new(0, 0, 6, 4)).unwrap();
        assert!(matches!(region.matrix(), Cow::Borrowed(_)));
    }

    #[test]
    fn test_out_of_bounds() {
        let img = fixture();
        assert!(LuminanceRegion::new(&img, Rect::new(0, 0, 7, 4)).is_err());
        assert!(LuminanceRegion::new(&img, Rect::new(-1, 0, 3, 4)).is_err());
        assert!(LuminanceRegion::new(&img, Rect::new(2, 2, 2, 4)).is_err());
    }

    #[test]
    #[should_panic(expected = "outside region")]
    fn test_row_out_of_range_panics() {
        let img = fixture();
        let region = LuminanceRegion::full(&img);
        region.row(4);
    }
}
