use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Compares two images of the same size pixel by pixel
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// First image
    #[arg(short = 'a', long = "left", value_name = "image file", required = true)]
    pub left: PathBuf,

    /// Second image, it must have the same size as the first one
    #[arg(short = 'b', long = "right", value_name = "image file", required = true)]
    pub right: PathBuf,

    /// The first image with a red box around all differences will be stored as PNG file
    #[arg(short = 'o', long = "out", value_name = "output image file")]
    pub outline_file: Option<PathBuf>,
}

impl DiffArgs {
    pub fn run(self) -> CliResult<()> {
        let report =
            pixelveil_core::commands::diff(&self.left, &self.right, self.outline_file.as_deref())?;

        match report.bounding_box {
            None => println!("The images are identical"),
            Some(b) => println!(
                "{} pixels differ, rows {}..={}, columns {}..={}",
                report.differences.len(),
                b.min_row,
                b.max_row,
                b.min_col,
                b.max_col
            ),
        }

        Ok(())
    }
}
