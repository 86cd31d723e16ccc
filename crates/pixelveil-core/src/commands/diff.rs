use std::path::Path;

use log::info;

use crate::diff::{bounding_box_outline, find_differences, BoundingBox};
use crate::media::{load_grid, Coordinate, Persist};
use crate::PixelVeilError;

/// Where two images differ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffReport {
    /// differing coordinates in row-major order
    pub differences: Vec<Coordinate>,
    pub bounding_box: Option<BoundingBox>,
}

impl DiffReport {
    pub fn is_identical(&self) -> bool {
        self.differences.is_empty()
    }
}

/// Compares two images of the same size.
///
/// If `outline_file` is given, a copy of `left` with the bounding box of all
/// differences drawn onto it is stored there.
pub fn diff(
    left: &Path,
    right: &Path,
    outline_file: Option<&Path>,
) -> Result<DiffReport, PixelVeilError> {
    let left = load_grid(left)?;
    let right = load_grid(right)?;

    let differences = find_differences(&left, &right)?;
    let bounding_box = BoundingBox::enclosing(&differences);

    if let Some(outline_file) = outline_file {
        bounding_box_outline(&left, &differences)?.save_as(outline_file)?;
        info!("Outlined differences written to {outline_file:?}");
    }

    Ok(DiffReport {
        differences,
        bounding_box,
    })
}
