use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

pub use image::{Rgb, RgbImage};
use log::{debug, error};

use crate::error::PixelVeilError;
use crate::result::Result;

use super::Persist;

/// Loads an image file as a grid of RGB pixels, an alpha channel is dropped.
///
/// Supported are PNG and JPEG files, judged by the file extension.
pub fn load_grid(f: &Path) -> Result<RgbImage> {
    let Some(ext) = f.extension().and_then(|e| e.to_str()) else {
        return Err(PixelVeilError::UnsupportedMedia);
    };

    match ext.to_lowercase().as_str() {
        "png" | "jpg" | "jpeg" => {
            let img = image::open(f)
                .map_err(|e| {
                    error!("Error opening image {f:?}: {e}");
                    PixelVeilError::InvalidImageMedia
                })?
                .to_rgb8();
            debug!("Loaded {f:?} with {}x{} pixels", img.width(), img.height());

            Ok(img)
        }
        _ => Err(PixelVeilError::UnsupportedMedia),
    }
}

/// writes the image as PNG, any lossy format would destroy the hidden bits
pub fn save_to_writer<W: Write + Seek>(img: &RgbImage, mut writer: W) -> Result<()> {
    img.write_to(&mut writer, image::ImageFormat::Png)
        .map_err(|e| {
            error!("Error saving image: {e}");
            PixelVeilError::ImageEncodingError
        })
}

impl Persist for RgbImage {
    fn save_as(&self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            PixelVeilError::WriteError { source: e }
        })?;
        save_to_writer(self, BufWriter::new(f))
    }
}
