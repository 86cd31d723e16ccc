use std::path::{Path, PathBuf};

use log::info;

use crate::media::image::{extract_image, extract_region, extract_text};
use crate::media::{load_grid, Persist, Region, RgbImage};
use crate::PixelVeilError;

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    region: Option<Region>,
}

impl UnveilApi {
    /// This is the image that contains the hidden data
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Only the given region is revealed, the result has the size of the region
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// If `None` is passed the whole image is revealed
    pub fn use_region(mut self, region: Option<Region>) -> Self {
        self.region = region;
        self
    }

    /// Reads the hidden text message
    pub fn unveil_text(self) -> Result<String, PixelVeilError> {
        let image = self.load()?;

        extract_text(&image)
    }

    /// Reveals the hidden image and stores it as PNG in `output`
    pub fn unveil_image_into(self, output: impl AsRef<Path>) -> Result<(), PixelVeilError> {
        let region = self.region;
        let image = self.load()?;
        let revealed = match region {
            Some(region) => extract_region(&image, region)?,
            None => extract_image(&image),
        };

        let output = output.as_ref();
        revealed.save_as(output)?;
        info!("Revealed image written to {output:?}");

        Ok(())
    }

    fn load(self) -> Result<RgbImage, PixelVeilError> {
        let Some(secret_media) = self.secret_media else {
            return Err(PixelVeilError::CarrierNotSet);
        };

        load_grid(&secret_media)
    }
}
