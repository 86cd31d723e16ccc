use std::path::PathBuf;

use clap::{ArgGroup, Args};
use pixelveil_core::{CodecOptions, Coordinate};

use crate::CliResult;

/// Hides a text message or an image in a PNG or JPEG image
#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("payload")
        .required(true)
        .args(["message", "secret_image"])
))]
pub struct HideArgs {
    /// Carrier image such as a PNG or JPEG file, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden, only letters and spaces
    #[arg(short, long, value_name = "text message")]
    pub message: Option<String>,

    /// An image whose colors will be hidden, it must fit into the carrier
    #[arg(short = 's', long = "secret", value_name = "secret image")]
    pub secret_image: Option<PathBuf>,

    /// Carrier row where the secret image starts
    #[arg(long, value_name = "row", default_value_t = 0)]
    pub row: u32,

    /// Carrier column where the secret image starts
    #[arg(long, value_name = "column", default_value_t = 0)]
    pub col: u32,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        let options = CodecOptions::default().with_origin(Coordinate::new(self.row, self.col));

        pixelveil_core::commands::hide(
            &self.media,
            &self.write_to_file,
            self.message,
            self.secret_image,
            options,
        )
    }
}
