//! Builder style API working on image files.

pub mod hide;
pub mod unveil;
