//! Pixel level comparison of two images of the same size.

use image::{Rgb, RgbImage};
use log::debug;

use crate::media::{Coordinate, Region};
use crate::result::Result;
use crate::PixelVeilError;

/// color of the rectangle drawn by [`bounding_box_outline`]
pub const OUTLINE_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// The smallest rectangle that contains a set of coordinates, all bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_row: u32,
    pub max_row: u32,
    pub min_col: u32,
    pub max_col: u32,
}

impl BoundingBox {
    /// `None` for no coordinates at all
    pub fn enclosing(coordinates: &[Coordinate]) -> Option<Self> {
        let (first, rest) = coordinates.split_first()?;
        let start = Self {
            min_row: first.row,
            max_row: first.row,
            min_col: first.col,
            max_col: first.col,
        };

        Some(rest.iter().fold(start, |b, c| Self {
            min_row: b.min_row.min(c.row),
            max_row: b.max_row.max(c.row),
            min_col: b.min_col.min(c.col),
            max_col: b.max_col.max(c.col),
        }))
    }

    pub fn width(&self) -> u32 {
        self.max_col - self.min_col + 1
    }

    pub fn height(&self) -> u32 {
        self.max_row - self.min_row + 1
    }

    pub fn region(&self) -> Region {
        Region::new(
            Coordinate::new(self.min_row, self.min_col),
            self.width(),
            self.height(),
        )
    }

    /// true for coordinates that lie on one of the four edges
    pub fn is_on_edge(&self, c: &Coordinate) -> bool {
        let within_rows = (self.min_row..=self.max_row).contains(&c.row);
        let within_cols = (self.min_col..=self.max_col).contains(&c.col);

        (within_cols && (c.row == self.min_row || c.row == self.max_row))
            || (within_rows && (c.col == self.min_col || c.col == self.max_col))
    }
}

fn ensure_same_dimensions(left: &RgbImage, right: &RgbImage) -> Result<()> {
    if left.dimensions() == right.dimensions() {
        return Ok(());
    }

    Err(PixelVeilError::DimensionMismatch {
        left_width: left.width(),
        left_height: left.height(),
        right_width: right.width(),
        right_height: right.height(),
    })
}

/// Tells if two images have exactly the same colors.
///
/// Images of different sizes are not comparable and fail with
/// [`PixelVeilError::DimensionMismatch`].
pub fn compare(left: &RgbImage, right: &RgbImage) -> Result<bool> {
    ensure_same_dimensions(left, right)?;

    Ok(left.pixels().eq(right.pixels()))
}

/// All coordinates where the two images differ, in row-major order.
pub fn find_differences(left: &RgbImage, right: &RgbImage) -> Result<Vec<Coordinate>> {
    ensure_same_dimensions(left, right)?;

    let differences: Vec<Coordinate> = left
        .enumerate_pixels()
        .zip(right.pixels())
        .filter(|((_, _, l), r)| l != r)
        .map(|((x, y, _), _)| Coordinate::new(y, x))
        .collect();
    debug!(
        "{} of {} pixels differ",
        differences.len(),
        Region::of(left).pixel_count()
    );

    Ok(differences)
}

/// Draws a one pixel wide [`OUTLINE_COLOR`] rectangle around all `coordinates`
/// onto a copy of `image`.
///
/// Without any coordinates the copy is returned unchanged.
pub fn bounding_box_outline(image: &RgbImage, coordinates: &[Coordinate]) -> Result<RgbImage> {
    let mut copy = image.clone();
    let Some(bounds) = BoundingBox::enclosing(coordinates) else {
        return Ok(copy);
    };

    let (host_width, host_height) = image.dimensions();
    let region = bounds.region();
    if !region.fits_within(host_width, host_height) {
        return Err(PixelVeilError::OutOfBounds {
            origin: region.origin,
            width: region.width,
            height: region.height,
            host_width,
            host_height,
        });
    }

    for col in bounds.min_col..=bounds.max_col {
        copy.put_pixel(col, bounds.min_row, OUTLINE_COLOR);
        copy.put_pixel(col, bounds.max_row, OUTLINE_COLOR);
    }
    for row in bounds.min_row..=bounds.max_row {
        copy.put_pixel(bounds.min_col, row, OUTLINE_COLOR);
        copy.put_pixel(bounds.max_col, row, OUTLINE_COLOR);
    }

    Ok(copy)
}
