use image::buffer::{PixelsMut, RowsMut};
use image::Pixel;
use std::iter::{Skip, Take};

use crate::media::{Coordinate, Region};

/// Mutable row-major access to the pixels of a region, left to right and top to bottom.
///
/// Every pixel comes with its coordinate in the whole image. The region has to fit
/// into the image, rows or columns beyond the image are simply not visited.
pub(crate) struct RasterMut<'a, P: Pixel + 'a> {
    region: Region,
    rows_taken: u32,
    col: u32,
    rows_mut: Take<Skip<RowsMut<'a, P>>>,
    pixels: Option<Take<Skip<PixelsMut<'a, P>>>>,
}

impl<'a, P: Pixel + 'a> RasterMut<'a, P> {
    /// utilises RowsMut to walk through the pixels of `region` only
    pub fn from_rows_mut(rows_mut: RowsMut<'a, P>, region: Region) -> Self {
        Self {
            region,
            rows_taken: 0,
            col: 0,
            rows_mut: rows_mut
                .skip(region.origin.row as usize)
                .take(region.height as usize),
            pixels: None,
        }
    }
}

impl<'a, P: Pixel + 'a> Iterator for RasterMut<'a, P> {
    type Item = (Coordinate, &'a mut P);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(p) = self.pixels.as_mut().and_then(|row| row.next()) {
                let c = Coordinate::new(
                    self.region.origin.row + self.rows_taken - 1,
                    self.region.origin.col + self.col,
                );
                self.col += 1;
                return Some((c, p));
            }

            let row = self.rows_mut.next()?;
            self.pixels = Some(
                row.skip(self.region.origin.col as usize)
                    .take(self.region.width as usize),
            );
            self.rows_taken += 1;
            self.col = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_4x6_linear_growing_colors;
    use image::Rgb;

    #[test]
    fn should_visit_the_whole_image_row_major() {
        let img_ro = prepare_4x6_linear_growing_colors();
        let mut img = img_ro.clone();
        let region = Region::of(&img);
        let mut raster = RasterMut::from_rows_mut(img.rows_mut(), region);

        for (x, y, expected_pixel) in img_ro.enumerate_pixels() {
            let (c, given_pixel) = raster
                .next()
                .unwrap_or_else(|| panic!("Pixel at ({x}, {y}) was not even existing!"));

            assert_eq!(c, Coordinate::new(y, x), "coordinate mismatch");
            assert_eq!(given_pixel, expected_pixel, "Pixel at ({x}, {y}) does not match");
        }
        // ensure iterator is exhausted
        assert!(raster.next().is_none());
    }

    #[test]
    fn should_visit_only_the_given_region() {
        let img_ro = prepare_4x6_linear_growing_colors();
        let mut img = img_ro.clone();
        let region = Region::new(Coordinate::new(2, 1), 2, 3);

        let visited: Vec<Coordinate> = RasterMut::from_rows_mut(img.rows_mut(), region)
            .map(|(c, _)| c)
            .collect();

        assert_eq!(
            visited,
            vec![
                Coordinate::new(2, 1),
                Coordinate::new(2, 2),
                Coordinate::new(3, 1),
                Coordinate::new(3, 2),
                Coordinate::new(4, 1),
                Coordinate::new(4, 2),
            ]
        );
    }

    #[test]
    fn should_be_possible_to_mutate_pixels() {
        let mut img = prepare_4x6_linear_growing_colors();
        let region = Region::new(Coordinate::new(5, 3), 1, 1);
        for (_, p) in RasterMut::from_rows_mut(img.rows_mut(), region) {
            *p = Rgb([1, 2, 3]);
        }

        assert_eq!(img.get_pixel(3, 5), &Rgb([1, 2, 3]));
        assert_ne!(img.get_pixel(2, 5), &Rgb([1, 2, 3]));
    }

    #[test]
    fn should_yield_nothing_for_an_empty_region() {
        let mut img = prepare_4x6_linear_growing_colors();
        let region = Region::new(Coordinate::new(1, 1), 0, 3);

        assert_eq!(RasterMut::from_rows_mut(img.rows_mut(), region).count(), 0);
    }
}
