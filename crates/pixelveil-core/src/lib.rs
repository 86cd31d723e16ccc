//! # PixelVeil Core API
//!
//! Hides data in the two least significant bits of every color channel of an RGB
//! image, and finds where two images differ.
//!
//! - [`media::image`] hides a secret image or a short text message in a carrier
//!   image and reveals it again
//! - [`diff`] lists the differing pixels of two images and outlines them
//! - [`api`] and [`commands`] do the same on image files
//!
//! All transforms take their images by reference and return a new image, the
//! input is never changed.
//!
//! # Usage Examples
//!
//! ## Hide a text message inside an image
//!
//! ```rust
//! use image::{Rgb, RgbImage};
//! use pixelveil_core::media::image::{embed_text, extract_text};
//!
//! let carrier = RgbImage::from_pixel(4, 4, Rgb([120, 80, 40]));
//!
//! // one pixel per letter, plus one for the terminator
//! let hidden = embed_text(&carrier, "hello world").expect("Failed to hide text");
//!
//! assert_eq!(extract_text(&hidden).unwrap(), "HELLO WORLD");
//! assert_ne!(hidden, carrier);
//! ```
//!
//! ## Hide an image file inside another image file
//!
//! ```rust
//! use image::{Rgb, RgbImage};
//! use pixelveil_core::media::{Coordinate, Persist};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! let secret = temp_dir.path().join("secret.png");
//! RgbImage::from_pixel(8, 8, Rgb([10, 20, 30])).save_as(&carrier).unwrap();
//! RgbImage::from_pixel(2, 2, Rgb([255, 255, 0])).save_as(&secret).unwrap();
//!
//! pixelveil_core::api::hide::prepare()
//!     .with_secret_image(&secret)
//!     .with_origin(Coordinate::new(3, 3))
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("image-with-an-image-inside.png"))
//!     .execute()
//!     .expect("Failed to hide image in image");
//! ```
//!
//! ## Outline the differences of two images
//!
//! ```rust
//! use image::{Rgb, RgbImage};
//! use pixelveil_core::diff::{bounding_box_outline, find_differences, OUTLINE_COLOR};
//!
//! let before = RgbImage::from_pixel(5, 5, Rgb([0, 0, 0]));
//! let mut after = before.clone();
//! after.put_pixel(3, 2, Rgb([1, 1, 1]));
//!
//! let differences = find_differences(&before, &after).expect("Same size");
//! let outlined = bounding_box_outline(&before, &differences).expect("Inside the image");
//!
//! assert_eq!(outlined.get_pixel(3, 2), &OUTLINE_COLOR);
//! ```

#![warn(
    // clippy::unwrap_used,
    // clippy::expect_used,
    clippy::redundant_else,
)]

pub mod api;
pub mod bits;
pub mod commands;
pub mod diff;
pub mod error;
pub mod media;
pub mod message;
pub mod result;

pub use message::EncodedMessage;

pub use crate::error::PixelVeilError;
pub use crate::media::{CodecOptions, Coordinate, Region};
pub use crate::result::Result;
