use std::path::PathBuf;

use clap::Args;
use pixelveil_core::media::Rgb;
use pixelveil_core::CodecOptions;

use crate::CliResult;

/// Hides one color in every pixel, `unveil` shows it as a flat area
#[derive(Args, Debug)]
pub struct TintArgs {
    /// Source image, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Tinted image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// Color to hide, only the top 2 bits of each channel survive
    #[arg(
        short,
        long,
        value_name = "red,green,blue",
        value_parser = super::parse_list::<u8, 3>,
        default_value = "255,175,175"
    )]
    pub color: [u8; 3],
}

impl TintArgs {
    pub fn run(self) -> CliResult<()> {
        let options = CodecOptions::default().with_tint(Rgb(self.color));

        pixelveil_core::commands::tint(&self.media, &self.write_to_file, &options)
    }
}
