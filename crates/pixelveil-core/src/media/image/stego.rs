//! Whole image transforms, every one of them works on a copy of its input.

use image::{imageops, Rgb, RgbImage};
use log::debug;

use crate::media::codec_options::TEST_COLOR;
use crate::media::image::decoder::SymbolDecoder;
use crate::media::image::encoder::SymbolEncoder;
use crate::media::image::iterators::RasterMut;
use crate::media::image::LowBitPixel;
use crate::media::{Coordinate, Region};
use crate::message::EncodedMessage;
use crate::result::Result;
use crate::PixelVeilError;

fn map_pixels(image: &RgbImage, f: impl Fn(&mut Rgb<u8>)) -> RgbImage {
    let mut copy = image.clone();
    copy.pixels_mut().for_each(f);
    copy
}

/// clears the two low bits of every color channel
pub fn clear_low_everywhere(image: &RgbImage) -> RgbImage {
    map_pixels(image, |p| p.clear_low())
}

/// hides [`TEST_COLOR`] in every pixel
pub fn hide_colors_everywhere(image: &RgbImage) -> RgbImage {
    hide_color_everywhere(image, TEST_COLOR)
}

/// hides the top 2 bits of `color` in every pixel
pub fn hide_color_everywhere(image: &RgbImage, color: Rgb<u8>) -> RgbImage {
    map_pixels(image, |p| p.set_low(&color))
}

/// Makes whatever is hidden in the low bits visible.
pub fn reveal_colors(image: &RgbImage) -> RgbImage {
    map_pixels(image, |p| *p = p.reveal_low())
}

/// true if `secret` is at most as wide and as high as `carrier`
pub fn can_embed_image(carrier: &RgbImage, secret: &RgbImage) -> bool {
    carrier.width() >= secret.width() && carrier.height() >= secret.height()
}

/// Hides `secret` in the top left corner of `carrier`.
pub fn embed_image(carrier: &RgbImage, secret: &RgbImage) -> Result<RgbImage> {
    embed_image_at(carrier, secret, Coordinate::default())
}

/// Hides the top 2 bits of every channel of `secret` in the pixels of `carrier`,
/// starting at `origin`.
///
/// Fails with [`PixelVeilError::OutOfBounds`] if `secret` does not fit into `carrier`
/// from `origin` on.
pub fn embed_image_at(
    carrier: &RgbImage,
    secret: &RgbImage,
    origin: Coordinate,
) -> Result<RgbImage> {
    let region = Region::new(origin, secret.width(), secret.height());
    ensure_region_fits(carrier, &region)?;

    let mut copy = carrier.clone();
    for ((_, p), hidden) in RasterMut::from_rows_mut(copy.rows_mut(), region).zip(secret.pixels())
    {
        p.set_low(hidden);
    }
    debug!(
        "Hid a {}x{} image at {origin} in a {}x{} image",
        secret.width(),
        secret.height(),
        carrier.width(),
        carrier.height()
    );

    Ok(copy)
}

/// Reveals the hidden colors of the whole image, the caller knows where the secret image is.
pub fn extract_image(image: &RgbImage) -> RgbImage {
    reveal_colors(image)
}

/// Reveals the hidden colors of `region` only, cropped to the size of the region.
pub fn extract_region(image: &RgbImage, region: Region) -> Result<RgbImage> {
    ensure_region_fits(image, &region)?;
    let cropped = imageops::crop_imm(
        image,
        region.origin.col,
        region.origin.row,
        region.width,
        region.height,
    )
    .to_image();

    Ok(reveal_colors(&cropped))
}

/// number of codes a text message may have, including the terminator
pub fn text_capacity(image: &RgbImage) -> usize {
    Region::of(image).pixel_count()
}

/// Hides `text` in the pixels of `carrier`, one letter per pixel followed by a terminator.
///
/// Fails without touching anything if the text contains other characters than `A-Z`
/// and space, or if the image has fewer pixels than the text needs.
pub fn embed_text(carrier: &RgbImage, text: &str) -> Result<RgbImage> {
    let message = EncodedMessage::encode(text)?;
    let available = text_capacity(carrier);
    if message.len() > available {
        return Err(PixelVeilError::CapacityExceeded {
            required: message.len(),
            available,
        });
    }

    let mut copy = carrier.clone();
    SymbolEncoder::new(&mut copy).write_all(message.codes())?;
    debug!("Hid {} codes in {available} pixels", message.len());

    Ok(copy)
}

/// Unveils a text hidden by [`embed_text`].
///
/// Reading stops at the terminator. Without a terminator every pixel is decoded.
pub fn extract_text(image: &RgbImage) -> Result<String> {
    let message = SymbolDecoder::new(image).read_message()?;
    if !message.is_terminated() {
        debug!("No terminator found, decoded all {} pixels", message.len());
    }

    Ok(message.decode())
}

fn ensure_region_fits(image: &RgbImage, region: &Region) -> Result<()> {
    let (host_width, host_height) = image.dimensions();
    if region.fits_within(host_width, host_height) {
        Ok(())
    } else {
        Err(PixelVeilError::OutOfBounds {
            origin: region.origin,
            width: region.width,
            height: region.height,
            host_width,
            host_height,
        })
    }
}
