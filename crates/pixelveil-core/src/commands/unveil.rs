use std::path::Path;

use crate::media::Region;
use crate::PixelVeilError;

pub fn unveil_text(secret_media: &Path) -> Result<String, PixelVeilError> {
    crate::api::unveil::prepare()
        .from_secret_file(secret_media)
        .unveil_text()
}

pub fn unveil_image(
    secret_media: &Path,
    output_file: &Path,
    region: Option<Region>,
) -> Result<(), PixelVeilError> {
    crate::api::unveil::prepare()
        .from_secret_file(secret_media)
        .use_region(region)
        .unveil_image_into(output_file)
}
