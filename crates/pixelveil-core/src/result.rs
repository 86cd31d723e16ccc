use crate::error::PixelVeilError;

pub type Result<T> = std::result::Result<T, PixelVeilError>;
