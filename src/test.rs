use image::{Rgba, RgbaImage};

use super::*;

fn lone_red_pixel() -> RgbaImage {
    let mut img = RgbaImage::new(16, 16);
    img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
    img
}

fn checker() -> RgbaImage {
    RgbaImage::from_fn(7, 5, |x, y| {
        let a = if (x + y) % 2 == 0 { 0 } else { (x * 40 + 15) as u8 };
        Rgba([(x * 36) as u8, (y * 60) as u8, 200, a])
    })
}

#[test]
fn tint_keeps_transparent_pixels() {
    let src = checker();
    let out = tint(&src, Color::rgb(10, 20, 30));
    for (p, q) in src.pixels().zip(out.pixels()) {
        if p[3] == 0 {
            assert_eq!(p, q);
        }
    }
}

#[test]
fn white_tint_is_identity() {
    let src = checker();
    assert_eq!(tint(&src, Color::rgb(255, 255, 255)), src);
}

#[test]
fn tint_keeps_dimensions_and_alpha() {
    let src = checker();
    let out = tint(&src, Color::rgb(153, 51, 51));
    assert_eq!(out.dimensions(), (7, 5));
    for (p, q) in src.pixels().zip(out.pixels()) {
        assert_eq!(p[3], q[3]);
    }
}

#[test]
fn tint_rounds_down() {
    let px = tint_pixel(Rgba([100, 255, 1, 128]), Color::rgb(128, 254, 254));
    // 12800 / 255 = 50.19, 64770 / 255 = 254, 254 / 255 = 0.99
    assert_eq!(px, Rgba([50, 254, 0, 128]));
}

#[test]
fn tint_basic_red_pixel() {
    let src = lone_red_pixel();
    let basic = Palette::matter().get("basic").unwrap();
    let out = tint(&src, basic);

    assert_eq!(*out.get_pixel(0, 0), Rgba([85, 0, 0, 255]));
    for (x, y, p) in out.enumerate_pixels() {
        if (x, y) != (0, 0) {
            assert_eq!(p, src.get_pixel(x, y));
        }
    }
}

#[test]
fn tint_image_converts_rgb_sources() {
    let rgb = image::RgbImage::from_pixel(2, 2, image::Rgb([200, 100, 50]));
    let out = tint_image(&image::DynamicImage::ImageRgb8(rgb), Color::rgb(255, 0, 51));
    assert_eq!(*out.get_pixel(1, 1), Rgba([200, 0, 10, 255]));
}

#[test]
fn glow_brightness_factor() {
    assert_eq!(brightness(8, 8, 16), 1.0);
    assert_eq!(brightness(0, 0, 16), 0.7);
    assert_eq!(brightness(4, 8, 16), 0.85);
    // Chebyshev: the larger axis distance wins
    assert_eq!(brightness(0, 8, 16), brightness(0, 3, 16));
}

#[test]
fn glow_final_tier() {
    let img = glow(Color::rgb(255, 215, 0), 16);
    assert_eq!(img.dimensions(), (16, 16));
    assert_eq!(*img.get_pixel(8, 8), Rgba([255, 255, 0, 255]));
    assert_eq!(*img.get_pixel(0, 0), Rgba([214, 180, 0, 255]));
    assert_eq!(*img.get_pixel(4, 8), Rgba([255, 219, 0, 255]));
    assert_eq!(*img.get_pixel(15, 15), Rgba([225, 190, 0, 255]));
    assert_eq!(*img.get_pixel(12, 3), Rgba([248, 209, 0, 255]));
}

#[test]
fn glow_center_and_corner() {
    let cases = [
        (Color::rgb(25, 25, 25), [30, 30, 30], [21, 21, 21]),
        (Color::rgb(85, 255, 255), [102, 255, 255], [71, 214, 214]),
        (Color::rgb(53, 57, 157), [63, 68, 188], [44, 47, 131]),
    ];

    for (color, center, corner) in cases {
        let img = glow(color, DEFAULT_GLOW_SIZE);
        let [r, g, b] = center;
        assert_eq!(*img.get_pixel(8, 8), Rgba([r, g, b, 255]), "center of {}", color);
        let [r, g, b] = corner;
        assert_eq!(*img.get_pixel(0, 0), Rgba([r, g, b, 255]), "corner of {}", color);
    }
}

#[test]
fn glow_is_opaque() {
    for size in [1, 5, 16, 33] {
        for (_, color) in MATTER_COLORS {
            assert!(glow(color, size).pixels().all(|p| p[3] == 255));
        }
    }
}

#[test]
fn matter_palette_order_and_values() {
    let palette = Palette::matter();
    let names: Vec<_> = palette.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, [
        "basic", "dark", "red", "magenta", "pink", "purple", "violet", "blue",
        "cyan", "green", "lime", "yellow", "orange", "white", "fading", "final",
    ]);
    assert_eq!(palette.get("violet"), Some(Color::rgb(118, 68, 188)));
    assert_eq!(palette.get("white"), Some(Color::rgb(249, 255, 254)));
    assert_eq!(palette.get("final"), Some(Color::rgb(255, 215, 0)));
    assert_eq!(palette.get("gold"), None);
}

#[test]
fn palette_formats_agree() {
    let json = r#"[{"name": "dark", "color": [25, 25, 25]}, {"name": "final", "color": [255, 215, 0]}]"#;
    let ron = r#"[(name: "dark", color: (25, 25, 25)), (name: "final", color: (255, 215, 0))]"#;
    let yaml = "- name: dark\n  color: [25, 25, 25]\n- name: final\n  color: [255, 215, 0]\n";

    let from_json = Palette::from_json(json).unwrap();
    assert_eq!(from_json.len(), 2);
    assert_eq!(from_json.get("final"), Some(Color::rgb(255, 215, 0)));
    assert_eq!(Palette::from_ron(ron).unwrap(), from_json);
    assert_eq!(Palette::from_yaml(yaml).unwrap(), from_json);
}

#[test]
fn palette_rejects_bad_entries() {
    let entry = |name: &str| PaletteEntry { name: name.to_owned(), color: Color::rgb(1, 2, 3) };

    assert!(matches!(Palette::new(Vec::new()), Err(PaletteError::Empty)));
    assert!(matches!(
        Palette::new([entry("red"), entry("red")]),
        Err(PaletteError::DuplicateName(n)) if n == "red"
    ));
    for bad in ["", "..", "a/b", "a\\b"] {
        assert!(matches!(Palette::new([entry(bad)]), Err(PaletteError::InvalidName(_))));
    }
    assert!(Palette::from_json(r#"[{"name": "x/y", "color": [0, 0, 0]}]"#).is_err());
}

#[test]
fn color_display() {
    assert_eq!(Color::rgb(85, 255, 255).to_string(), "(85, 255, 255)");
}
