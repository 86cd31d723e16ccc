use std::path::{Path, PathBuf};

use log::info;

use crate::media::image::{embed_image_at, embed_text};
use crate::media::{load_grid, Coordinate, Persist};
use crate::{CodecOptions, PixelVeilError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    secret_image: Option<PathBuf>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// Where the top left corner of the secret image goes in the carrier image
    pub fn with_origin(mut self, origin: Coordinate) -> Self {
        self.options.origin = origin;
        self
    }

    /// Text to hide, only letters `A-Z` and spaces
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// Image whose colors get hidden in the carrier image
    pub fn with_secret_image<A: AsRef<Path>>(mut self, secret_image: A) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    pub fn use_secret_image(mut self, secret_image: Option<PathBuf>) -> Self {
        self.secret_image = secret_image;
        self
    }

    /// The carrier image, it is only read
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// The resulting image is always written as PNG
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<(), PixelVeilError> {
        self.validate()?;
        let Some(image) = self.image else {
            return Err(PixelVeilError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(PixelVeilError::TargetNotSet);
        };

        let carrier = load_grid(&image)?;
        let result = match (self.message, self.secret_image) {
            (Some(message), None) => embed_text(&carrier, &message)?,
            (None, Some(secret_image)) => {
                let secret = load_grid(&secret_image)?;
                embed_image_at(&carrier, &secret, self.options.origin)?
            }
            (None, None) => return Err(PixelVeilError::MissingPayload),
            (Some(_), Some(_)) => return Err(PixelVeilError::AmbiguousPayload),
        };
        result.save_as(&output)?;
        info!("Hidden data written to {output:?}");

        Ok(())
    }

    fn validate(&self) -> Result<(), PixelVeilError> {
        if self.message.is_none() && self.secret_image.is_none() {
            return Err(PixelVeilError::MissingPayload);
        }
        if self.message.is_some() && self.secret_image.is_some() {
            return Err(PixelVeilError::AmbiguousPayload);
        }

        Ok(())
    }
}
