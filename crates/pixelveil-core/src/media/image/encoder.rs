use image::{Rgb, RgbImage};

use crate::media::image::iterators::RasterMut;
use crate::media::image::LowBitPixel;
use crate::media::Region;
use crate::result::Result;
use crate::PixelVeilError;

/// Writes symbols into the low bits of an `RgbImage`, one symbol per pixel.
///
/// Pixels are used row by row, left to right, starting at the top left corner.
///
/// ## Example of usage
/// ```rust
/// use image::{Rgb, RgbImage};
/// use pixelveil_core::media::image::LowBitPixel;
/// use pixelveil_core::media::image::encoder::SymbolEncoder;
///
/// let mut image = RgbImage::from_pixel(3, 2, Rgb([200, 100, 50]));
/// SymbolEncoder::new(&mut image)
///     .write_all(&[8, 9, 0])
///     .expect("Cannot write 3 symbols");
///
/// assert_eq!(image.get_pixel(1, 0).decode_symbol(), 9);
/// ```
pub struct SymbolEncoder<'a> {
    written: usize,
    capacity: usize,
    pixel: RasterMut<'a, Rgb<u8>>,
}

impl<'a> SymbolEncoder<'a> {
    /// constructor for a given `RgbImage` that lives somewhere
    pub fn new(carrier: &'a mut RgbImage) -> Self {
        let region = Region::of(carrier);
        Self {
            written: 0,
            capacity: region.pixel_count(),
            pixel: RasterMut::from_rows_mut(carrier.rows_mut(), region),
        }
    }

    /// number of symbols that can still be written
    pub fn remaining(&self) -> usize {
        self.capacity - self.written
    }

    /// Writes one symbol into the next pixel.
    pub fn write_symbol(&mut self, symbol: u8) -> Result<()> {
        let (_, p) = self
            .pixel
            .next()
            .ok_or(PixelVeilError::CapacityExceeded {
                required: self.written + 1,
                available: self.capacity,
            })?;
        p.encode_symbol(symbol);
        self.written += 1;

        Ok(())
    }

    /// Writes all symbols, or nothing at all if they do not fit.
    pub fn write_all(&mut self, symbols: &[u8]) -> Result<()> {
        if symbols.len() > self.remaining() {
            return Err(PixelVeilError::CapacityExceeded {
                required: self.written + symbols.len(),
                available: self.capacity,
            });
        }
        for &symbol in symbols {
            self.write_symbol(symbol)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod encoder_tests {
    use super::*;
    use crate::test_utils::prepare_5x5_image;

    #[test]
    fn it_should_write_row_by_row() {
        let img_ro = prepare_5x5_image();
        let mut img = img_ro.clone();
        {
            let mut encoder = SymbolEncoder::new(&mut img);
            for symbol in 0..7 {
                encoder.write_symbol(symbol).expect("Cannot write symbol");
            }
        }

        assert_eq!(img.get_pixel(4, 0).decode_symbol(), 4);
        assert_eq!(img.get_pixel(0, 1).decode_symbol(), 5);
        assert_eq!(img.get_pixel(1, 1).decode_symbol(), 6);
        assert_eq!(
            img.get_pixel(2, 1),
            img_ro.get_pixel(2, 1),
            "pixels behind the last symbol must stay untouched"
        );
    }

    #[test]
    fn it_should_fail_when_the_image_is_full() {
        let mut img = RgbImage::new(2, 1);
        let mut encoder = SymbolEncoder::new(&mut img);

        encoder.write_symbol(1).expect("Cannot write symbol");
        encoder.write_symbol(2).expect("Cannot write symbol");
        assert_eq!(encoder.remaining(), 0);
        match encoder.write_symbol(3) {
            Err(PixelVeilError::CapacityExceeded {
                required: 3,
                available: 2,
            }) => (),
            other => panic!("expected a capacity error, got {other:?}"),
        }
    }

    #[test]
    fn write_all_should_not_touch_the_image_when_it_does_not_fit() {
        let img_ro = RgbImage::from_pixel(2, 1, Rgb([255, 255, 255]));
        let mut img = img_ro.clone();

        let result = SymbolEncoder::new(&mut img).write_all(&[1, 2, 0]);

        assert!(matches!(
            result,
            Err(PixelVeilError::CapacityExceeded {
                required: 3,
                available: 2
            })
        ));
        assert_eq!(img, img_ro);
    }
}
