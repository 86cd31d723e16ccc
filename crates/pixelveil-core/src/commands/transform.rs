use std::path::Path;

use crate::media::image::{clear_low_everywhere, hide_color_everywhere};
use crate::media::{load_grid, Persist};
use crate::{CodecOptions, PixelVeilError};

/// clears the two low bits of every color channel, wiping anything hidden
pub fn clear(media: &Path, write_to_file: &Path) -> Result<(), PixelVeilError> {
    let image = load_grid(media)?;

    clear_low_everywhere(&image).save_as(write_to_file)
}

/// hides `options.tint` in every pixel, `unveil_image` shows it as a flat color
pub fn tint(media: &Path, write_to_file: &Path, options: &CodecOptions) -> Result<(), PixelVeilError> {
    let image = load_grid(media)?;

    hide_color_everywhere(&image, options.tint).save_as(write_to_file)
}
