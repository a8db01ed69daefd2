use std::path::Path;
use image::{DynamicImage, Rgba, RgbaImage};

use super::{
    color::*,
    error::*
};

/// Multiply-blends `color` into every non-transparent pixel of `source`.
///
/// Each channel becomes `source * color / 255`, rounded down. Alpha is kept as
/// is and fully transparent pixels are copied through untouched.
pub fn tint(source: &RgbaImage, color: Color) -> RgbaImage {
    let mut out = source.clone();
    for pixel in out.pixels_mut() {
        *pixel = tint_pixel(*pixel, color);
    }
    out
}

/// Like [`tint`], converting `source` to RGBA8 first.
pub fn tint_image(source: &DynamicImage, color: Color) -> RgbaImage {
    tint(&source.to_rgba8(), color)
}

pub fn tint_pixel(pixel: Rgba<u8>, color: Color) -> Rgba<u8> {
    let Rgba([r, g, b, a]) = pixel;
    if a == 0 {
        return pixel;
    }

    Rgba([
        multiply(r, color.red),
        multiply(g, color.green),
        multiply(b, color.blue),
        a,
    ])
}

fn multiply(channel: u8, factor: u8) -> u8 {
    (channel as u16 * factor as u16 / 255) as u8
}

/// Loads the base texture that gets tinted.
pub fn load_base(path: impl AsRef<Path>) -> Result<RgbaImage, TextureError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(TextureError::MissingInput(path.to_path_buf()));
    }

    let img = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;
    Ok(img.to_rgba8())
}
