use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use tempfile::TempDir;

use pixelveil_core::commands::{clear, hide, tint, unveil_image, unveil_text};
use pixelveil_core::media::{load_grid, Persist};
use pixelveil_core::*;

/// a carrier with varying colors, so no pixel starts out with zeroed low bits
fn write_carrier(dir: &Path, width: u32, height: u32) -> PathBuf {
    let carrier = dir.join("carrier.png");
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 7 + 3) as u8, (y * 11 + 1) as u8, ((x + y) * 5 + 2) as u8])
    })
    .save_as(&carrier)
    .expect("Failed to write carrier image");

    carrier
}

#[test]
fn should_hide_and_unveil_a_text_message() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = write_carrier(out_dir.path(), 8, 8);
    let image_with_secret = out_dir.path().join("secret.png");

    hide(
        &carrier,
        &image_with_secret,
        Some("Welcome to a Text Only Secret Message".to_string()),
        None,
        CodecOptions::default(),
    )?;

    assert_eq!(
        unveil_text(&image_with_secret)?,
        "WELCOME TO A TEXT ONLY SECRET MESSAGE"
    );
    Ok(())
}

#[test]
fn should_hide_and_unveil_an_image_at_an_origin() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = write_carrier(out_dir.path(), 10, 6);
    let secret = out_dir.path().join("arch.png");
    let image_with_secret = out_dir.path().join("secret.png");
    let revealed = out_dir.path().join("revealed.png");
    let secret_image = RgbImage::from_fn(4, 3, |x, y| Rgb([x as u8 * 64, y as u8 * 64, 255]));
    secret_image.save_as(&secret)?;

    let origin = Coordinate::new(2, 5);
    hide(
        &carrier,
        &image_with_secret,
        None,
        Some(secret.clone()),
        CodecOptions::default().with_origin(origin),
    )?;
    unveil_image(
        &image_with_secret,
        &revealed,
        Some(Region::new(origin, 4, 3)),
    )?;

    let revealed = load_grid(&revealed)?;
    let expected = RgbImage::from_fn(4, 3, |x, y| Rgb([x as u8 * 64, y as u8 * 64, 192]));
    assert_eq!(revealed, expected);
    Ok(())
}

#[test]
fn should_refuse_a_secret_image_that_does_not_fit() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = write_carrier(out_dir.path(), 4, 4);
    let secret = out_dir.path().join("big.png");
    let image_with_secret = out_dir.path().join("secret.png");
    RgbImage::new(3, 3).save_as(&secret)?;

    let result = hide(
        &carrier,
        &image_with_secret,
        None,
        Some(secret),
        CodecOptions::default().with_origin(Coordinate::new(2, 0)),
    );

    assert!(matches!(result, Err(PixelVeilError::OutOfBounds { .. })));
    assert!(!image_with_secret.exists());
    Ok(())
}

#[test]
fn should_refuse_a_message_with_unsupported_characters() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = write_carrier(out_dir.path(), 8, 8);

    let result = hide(
        &carrier,
        &out_dir.path().join("secret.png"),
        Some("Hello, World!".to_string()),
        None,
        CodecOptions::default(),
    );

    assert!(matches!(
        result,
        Err(PixelVeilError::UnsupportedCharacter(','))
    ));
    Ok(())
}

#[test]
fn clear_should_wipe_a_hidden_message() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = write_carrier(out_dir.path(), 8, 8);
    let image_with_secret = out_dir.path().join("secret.png");
    let cleared = out_dir.path().join("cleared.png");

    hide(
        &carrier,
        &image_with_secret,
        Some("HI".to_string()),
        None,
        CodecOptions::default(),
    )?;
    clear(&image_with_secret, &cleared)?;

    assert_eq!(unveil_text(&cleared)?, "");
    assert!(load_grid(&cleared)?
        .pixels()
        .all(|p| p.0.iter().all(|c| c % 4 == 0)));
    Ok(())
}

#[test]
fn tint_should_reveal_as_a_flat_color() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = write_carrier(out_dir.path(), 5, 5);
    let tinted = out_dir.path().join("tinted.png");
    let revealed = out_dir.path().join("revealed.png");

    tint(&carrier, &tinted, &CodecOptions::default())?;
    unveil_image(&tinted, &revealed, None)?;

    assert!(load_grid(&revealed)?
        .pixels()
        .all(|p| *p == Rgb([192, 128, 128])));
    Ok(())
}
