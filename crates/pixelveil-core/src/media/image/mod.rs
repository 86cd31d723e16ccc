pub mod decoder;
pub mod encoder;
mod iterators;
pub mod lsb_codec;
pub mod stego;

pub use lsb_codec::LowBitPixel;
pub use stego::*;
