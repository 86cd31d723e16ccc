use image::buffer::Pixels;
use image::{Rgb, RgbImage};

use crate::media::image::LowBitPixel;
use crate::message::EncodedMessage;
use crate::result::Result;

/// Reads the symbols hidden by [`SymbolEncoder`](super::encoder::SymbolEncoder),
/// one per pixel in row-major order.
///
/// ## Example of usage
/// ```rust
/// use image::{Rgb, RgbImage};
/// use pixelveil_core::media::image::decoder::SymbolDecoder;
/// use pixelveil_core::media::image::encoder::SymbolEncoder;
///
/// let mut image = RgbImage::from_pixel(4, 1, Rgb([7, 7, 7]));
/// SymbolEncoder::new(&mut image)
///     .write_all(&[8, 9, 0])
///     .expect("Cannot write 3 symbols");
///
/// let msg = SymbolDecoder::new(&image)
///     .read_message()
///     .expect("Cannot read the message");
/// assert_eq!(msg.decode(), "HI");
/// ```
pub struct SymbolDecoder<'i> {
    pixel: Pixels<'i, Rgb<u8>>,
}

impl<'i> SymbolDecoder<'i> {
    /// constructor for a given `RgbImage` that lives somewhere
    pub fn new(input: &'i RgbImage) -> Self {
        Self {
            pixel: input.pixels(),
        }
    }

    /// Reads codes up to and including the terminator, or until the image ends.
    pub fn read_message(self) -> Result<EncodedMessage> {
        EncodedMessage::from_codes(self)
    }
}

impl Iterator for SymbolDecoder<'_> {
    type Item = u8;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.pixel.next().map(|p| p.decode_symbol())
    }
}

#[cfg(test)]
mod decoder_tests {
    use super::*;
    use crate::media::image::encoder::SymbolEncoder;
    use crate::PixelVeilError;

    #[test]
    fn it_should_decode_one_symbol_per_pixel() {
        let img = RgbImage::from_fn(3, 2, |x, y| {
            let mut p = Rgb([128, 64, 32]);
            p.encode_symbol((y * 3 + x) as u8 * 10);
            p
        });

        let symbols: Vec<u8> = SymbolDecoder::new(&img).collect();

        assert_eq!(symbols, vec![0, 10, 20, 30, 40, 50]);
    }

    #[test]
    fn it_should_stop_reading_at_the_terminator() {
        let mut img = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));
        SymbolEncoder::new(&mut img)
            .write_all(&[15, 11, 0])
            .expect("Cannot write symbols");

        let msg = SymbolDecoder::new(&img)
            .read_message()
            .expect("Cannot read message");

        assert_eq!(msg.codes(), &[15, 11, 0]);
        assert_eq!(msg.decode(), "OK");
    }

    #[test]
    fn it_should_refuse_symbols_outside_the_alphabet() {
        // white pixels decode to 63
        let img = RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]));

        assert!(matches!(
            SymbolDecoder::new(&img).read_message(),
            Err(PixelVeilError::InvalidSymbol(63))
        ));
    }
}
