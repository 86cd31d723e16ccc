use std::path::{Path, PathBuf};

use crate::{CodecOptions, PixelVeilError};

pub fn hide(
    media: &Path,
    write_to_file: &Path,
    message: Option<String>,
    secret_image: Option<PathBuf>,
    options: CodecOptions,
) -> Result<(), PixelVeilError> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_image(media)
        .with_output(write_to_file)
        .use_message(message)
        .use_secret_image(secret_image)
        .execute()
}
