use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Clears the two low bits of every color, wiping anything hidden
#[derive(Args, Debug)]
pub struct ClearArgs {
    /// Source image, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Cleared image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,
}

impl ClearArgs {
    pub fn run(self) -> CliResult<()> {
        pixelveil_core::commands::clear(&self.media, &self.write_to_file)
    }
}
