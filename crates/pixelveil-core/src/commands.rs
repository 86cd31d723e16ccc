//! One function per CLI subcommand, each one file in and file out.

mod diff;
mod hide;
mod transform;
mod unveil;

pub use diff::{diff, DiffReport};
pub use hide::hide;
pub use transform::{clear, tint};
pub use unveil::{unveil_image, unveil_text};
