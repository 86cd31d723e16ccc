use image::Rgb;

use super::Coordinate;

/// The pink that `tint` hides in every pixel when no other color is given
pub const TEST_COLOR: Rgb<u8> = Rgb([255, 175, 175]);

/// Options for the image transforms that take more than a carrier and a payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    /// Top left corner in the carrier where a secret image is hidden.
    /// The secret image must fit into the carrier starting from there.
    pub origin: Coordinate,

    /// Color hidden in every pixel by `hide_color_everywhere`,
    /// only the top 2 bits of each channel survive.
    pub tint: Rgb<u8>,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            origin: Coordinate::default(),
            tint: TEST_COLOR,
        }
    }
}

impl CodecOptions {
    pub fn with_origin(mut self, origin: Coordinate) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_tint(mut self, tint: Rgb<u8>) -> Self {
        self.tint = tint;
        self
    }
}
