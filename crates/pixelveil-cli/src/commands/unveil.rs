use std::path::PathBuf;

use clap::{ArgGroup, Args};
use pixelveil_core::{Coordinate, Region};

use crate::CliResult;

/// Unveils a hidden text message or a hidden image
#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .args(["text", "output_file"])
))]
pub struct UnveilArgs {
    /// Source image that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Prints the hidden text message
    #[arg(short, long)]
    pub text: bool,

    /// The revealed image will be stored as PNG file
    #[arg(short = 'o', long = "out", value_name = "output image file")]
    pub output_file: Option<PathBuf>,

    /// Reveals only this part of the image
    #[arg(
        long,
        value_name = "row,col,width,height",
        value_parser = parse_region,
        requires = "output_file"
    )]
    pub region: Option<Region>,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        match self.output_file {
            Some(output_file) => {
                pixelveil_core::commands::unveil_image(&self.media, &output_file, self.region)
            }
            None => {
                let message = pixelveil_core::commands::unveil_text(&self.media)?;
                println!("{message}");
                Ok(())
            }
        }
    }
}

fn parse_region(s: &str) -> Result<Region, String> {
    let [row, col, width, height] = super::parse_list::<u32, 4>(s)?;

    Ok(Region::new(Coordinate::new(row, col), width, height))
}
