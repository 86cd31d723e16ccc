use image::Rgb;

use crate::bits::{
    clear_low_bits, combine_base4_triplet, extract_low_bits, set_low_bits,
    split_to_base4_triplet, SYMBOL_CHANNEL_LAYOUT,
};

/// the biggest symbol that fits into the 6 low bits of one pixel
pub const MAX_SYMBOL: u8 = 63;

/// dividing a channel by this keeps its top 2 bits
const HIDDEN_COLOR_SHIFT: u8 = 64;

/// Hides and unveils 2 bits per color channel of a pixel.
pub trait LowBitPixel {
    /// zeroes the two low bits of every color channel
    fn clear_low(&mut self);

    /// Hides the top 2 bits of every channel of `payload` in the low bits of `self`.
    fn set_low(&mut self, payload: &Self);

    /// Scales the hidden bits back up, only the top 2 bits of the hidden color come back.
    fn reveal_low(&self) -> Self;

    /// Spreads a 6 bit symbol over the low bits of the three color channels.
    ///
    /// Red takes the most significant base-4 digit, blue the least significant one.
    /// Symbols above [`MAX_SYMBOL`] keep only their low 6 bits.
    fn encode_symbol(&mut self, symbol: u8);

    /// reads back the symbol written by `encode_symbol`
    fn decode_symbol(&self) -> u8;
}

impl LowBitPixel for Rgb<u8> {
    fn clear_low(&mut self) {
        for c in self.0.iter_mut() {
            *c = clear_low_bits(*c);
        }
    }

    fn set_low(&mut self, payload: &Self) {
        for (c, p) in self.0.iter_mut().zip(payload.0.iter()) {
            *c = set_low_bits(*c, p / HIDDEN_COLOR_SHIFT);
        }
    }

    fn reveal_low(&self) -> Self {
        Rgb(self.0.map(|c| extract_low_bits(c) * HIDDEN_COLOR_SHIFT))
    }

    fn encode_symbol(&mut self, symbol: u8) {
        debug_assert!(symbol <= MAX_SYMBOL, "symbol {symbol} exceeds 6 bits");
        let digits = split_to_base4_triplet(symbol);
        for (digit, channel) in digits.iter().zip(SYMBOL_CHANNEL_LAYOUT) {
            self.0[channel] = set_low_bits(self.0[channel], *digit);
        }
    }

    fn decode_symbol(&self) -> u8 {
        let mut digits = [0; 3];
        for (digit, channel) in digits.iter_mut().zip(SYMBOL_CHANNEL_LAYOUT) {
            *digit = extract_low_bits(self.0[channel]);
        }
        combine_base4_triplet(digits)
    }
}
