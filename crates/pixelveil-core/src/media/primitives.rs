use std::fmt;

use image::RgbImage;

/// a cell of an image, addressed by row (y) and column (x)
///
/// Ordering is row-major, the same order the raster iterators visit pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub row: u32,
    pub col: u32,
}

impl Coordinate {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl From<(u32, u32)> for Coordinate {
    /// takes `(row, col)`
    fn from((row, col): (u32, u32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(row {}, col {})", self.row, self.col)
    }
}

/// A rectangle of `width` x `height` pixels whose top left corner is `origin`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub origin: Coordinate,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(origin: Coordinate, width: u32, height: u32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// the region covering the whole image
    pub fn of(image: &RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Self::new(Coordinate::default(), width, height)
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// true if the region lies completely inside an image of `width` x `height`
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        let rows_end = self.origin.row as u64 + self.height as u64;
        let cols_end = self.origin.col as u64 + self.width as u64;

        rows_end <= height as u64 && cols_end <= width as u64
    }

    pub fn contains(&self, c: &Coordinate) -> bool {
        c.row >= self.origin.row
            && c.col >= self.origin.col
            && ((c.row - self.origin.row) as u64) < self.height as u64
            && ((c.col - self.origin.col) as u64) < self.width as u64
    }
}
