use image::{Rgba, RgbaImage};

use super::color::*;

pub const DEFAULT_GLOW_SIZE: u32 = 16;

const FALLOFF: f64 = 0.3;
const BOOST: f64 = 1.2;

/// Synthesizes a `size`x`size` opaque block of `color`, brightest in the
/// center and dimmed to 70% at the border.
///
/// Distance from the center is the Chebyshev distance normalized to half the
/// size, so the falloff is square rather than circular.
pub fn glow(color: Color, size: u32) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        let bf = brightness(x, y, size);
        let [r, g, b] = color.channels().map(|c| boost(c, bf));
        Rgba([r, g, b, 255])
    })
}

/// Brightness factor at (x, y), 1.0 at the center down to 0.7 at the edge.
pub fn brightness(x: u32, y: u32, size: u32) -> f64 {
    let half = size as f64 / 2.0;
    let dx = (x as f64 - half).abs() / half;
    let dy = (y as f64 - half).abs() / half;
    1.0 - dx.max(dy) * FALLOFF
}

fn boost(channel: u8, bf: f64) -> u8 {
    f64::min(255.0, channel as f64 * bf * BOOST).floor() as u8
}
