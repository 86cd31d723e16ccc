//! Integer helpers for the two low bits of a color channel.
//!
//! A color channel is a `u8`. The two least significant bits carry the payload,
//! either as the top 2 bits of a hidden color channel or as one base-4 digit of a
//! 6-bit text symbol.

/// masks the two payload bits of a channel
pub const LOW_BITS_MASK: u8 = 0b11;

/// Channel index that stores the base-4 digit at the same position.
///
/// Digit 0 (least significant) lives in blue, digit 1 in green and digit 2 (most
/// significant) in red. Encoder and decoder both go through this table.
pub const SYMBOL_CHANNEL_LAYOUT: [usize; 3] = [2, 1, 0];

/// zeroes the two least significant bits
#[inline(always)]
pub fn clear_low_bits(value: u8) -> u8 {
    (value / 4) * 4
}

/// clears the two low bits and stores `payload` in them, only the two low bits of `payload` are used
#[inline(always)]
pub fn set_low_bits(value: u8, payload: u8) -> u8 {
    clear_low_bits(value) + (payload & LOW_BITS_MASK)
}

/// returns the two low bits, in `0..=3`
#[inline(always)]
pub fn extract_low_bits(value: u8) -> u8 {
    value % 4
}

/// Splits `n` into three base-4 digits, least significant first.
///
/// Only the low 6 bits of `n` fit into a triplet, anything above is dropped.
pub fn split_to_base4_triplet(n: u8) -> [u8; 3] {
    let mut n = n;
    let mut digits = [0; 3];
    for digit in digits.iter_mut() {
        *digit = n % 4;
        n /= 4;
    }
    digits
}

/// Inverse of [`split_to_base4_triplet`], expects the digits least significant first.
pub fn combine_base4_triplet(digits: [u8; 3]) -> u8 {
    digits[2] * 16 + digits[1] * 4 + digits[0]
}
