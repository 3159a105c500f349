//! Post-load image enhancement for icons and finished frames
//!
//! Each adjustment blends the image with a "degenerate" version of itself:
//! `out = degenerate + factor * (image - degenerate)`. A factor of 1.0 leaves
//! the image unchanged, below 1.0 moves toward the degenerate image, above 1.0
//! moves away from it. Alpha is never modified.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::RgbColor;
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage, Rgba, RgbaImage};

/// 3x3 smoothing kernel used as the blur reference for sharpening
const SMOOTH_KERNEL: [f32; 9] = [1.0, 1.0, 1.0, 1.0, 5.0, 1.0, 1.0, 1.0, 1.0];

// Weather icon chain
const ICON_SHARPNESS: f32 = 1.5;
const ICON_COLOR: f32 = 1.8;
const ICON_CONTRAST: f32 = 1.5;

// Extra boost for small UI glyphs
const GLYPH_BRIGHTNESS: f32 = 0.85;
const GLYPH_CONTRAST: f32 = 2.0;
const GLYPH_COLOR: f32 = 2.2;

/// ITU-R 601 luma
#[inline]
fn luminance(r: u8, g: u8, b: u8) -> f32 {
    (299.0 * r as f32 + 587.0 * g as f32 + 114.0 * b as f32) / 1000.0
}

#[inline]
fn blend_channel(degenerate: f32, value: u8, factor: f32) -> u8 {
    (degenerate + factor * (value as f32 - degenerate))
        .round()
        .clamp(0.0, 255.0) as u8
}

#[inline]
fn blend_rgb(rgb: [u8; 3], degenerate: [f32; 3], factor: f32) -> [u8; 3] {
    [
        blend_channel(degenerate[0], rgb[0], factor),
        blend_channel(degenerate[1], rgb[1], factor),
        blend_channel(degenerate[2], rgb[2], factor),
    ]
}

fn map_rgba(image: &RgbaImage, mut f: impl FnMut(u32, u32, [u8; 3]) -> [u8; 3]) -> RgbaImage {
    let mut out = image.clone();
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let [r, g, b, a] = pixel.0;
        let [r, g, b] = f(x, y, [r, g, b]);
        *pixel = Rgba([r, g, b, a]);
    }
    out
}

/// Resize to a square of `size` pixels with a Lanczos filter
pub fn resize(image: &RgbaImage, size: u32) -> RgbaImage {
    imageops::resize(image, size, size, FilterType::Lanczos3)
}

/// Fully transparent square used in place of a missing icon
pub fn placeholder(size: u32) -> RgbaImage {
    RgbaImage::new(size, size)
}

/// Sharpen (factor > 1) or soften (factor < 1) against a 3x3 smoothed copy
pub fn sharpness(image: &RgbaImage, factor: f32) -> RgbaImage {
    let smoothed: RgbaImage = imageops::filter3x3(image, &SMOOTH_KERNEL);
    let (width, height) = image.dimensions();

    map_rgba(image, |x, y, rgb| {
        // Border pixels have no full neighbourhood and are kept as-is
        if x == 0 || y == 0 || x + 1 >= width || y + 1 >= height {
            return rgb;
        }
        let s = smoothed.get_pixel(x, y).0;
        blend_rgb(rgb, [s[0] as f32, s[1] as f32, s[2] as f32], factor)
    })
}

/// Saturation against the per-pixel grayscale
pub fn color(image: &RgbaImage, factor: f32) -> RgbaImage {
    map_rgba(image, |_, _, [r, g, b]| {
        let l = luminance(r, g, b);
        blend_rgb([r, g, b], [l, l, l], factor)
    })
}

/// Contrast against the mean luminance of the visible pixels
pub fn contrast(image: &RgbaImage, factor: f32) -> RgbaImage {
    let (sum, count) = image
        .pixels()
        .filter(|p| p.0[3] > 0)
        .fold((0.0f64, 0u64), |(sum, count), p| {
            (sum + luminance(p.0[0], p.0[1], p.0[2]) as f64, count + 1)
        });
    if count == 0 {
        return image.clone();
    }
    let mean = (sum / count as f64).round() as f32;

    map_rgba(image, |_, _, rgb| blend_rgb(rgb, [mean, mean, mean], factor))
}

/// Brightness against black
pub fn brightness(image: &RgbaImage, factor: f32) -> RgbaImage {
    map_rgba(image, |_, _, rgb| blend_rgb(rgb, [0.0, 0.0, 0.0], factor))
}

/// Replace hue and saturation of every visible pixel with `tint`, scaled by
/// the pixel's original brightness.
pub fn tint(image: &RgbaImage, tint: Rgb888) -> RgbaImage {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        if a == 0 {
            continue;
        }
        let level = (r as f32 + g as f32 + b as f32) / 3.0 / 255.0;
        let scale = |c: u8| (c as f32 * level) as u8;
        *pixel = Rgba([scale(tint.r()), scale(tint.g()), scale(tint.b()), a]);
    }
    out
}

/// Enhancement chain applied to weather condition icons
pub fn weather_icon(image: &RgbaImage) -> RgbaImage {
    let image = sharpness(image, ICON_SHARPNESS);
    let image = color(&image, ICON_COLOR);
    contrast(&image, ICON_CONTRAST)
}

/// Enhancement chain applied to small UI glyphs.
///
/// Runs the weather icon chain first, then darkens slightly and pushes
/// contrast and saturation further so thin strokes survive on e-paper.
pub fn ui_glyph(image: &RgbaImage) -> RgbaImage {
    let image = weather_icon(image);
    let image = brightness(&image, GLYPH_BRIGHTNESS);
    let image = contrast(&image, GLYPH_CONTRAST);
    color(&image, GLYPH_COLOR)
}

/// Contrast pass over a full RGB frame, mean taken over every pixel
pub fn contrast_rgb(image: &RgbImage, factor: f32) -> RgbImage {
    let pixels = (image.width() as f64 * image.height() as f64).max(1.0);
    let sum: f64 = image
        .pixels()
        .map(|p| luminance(p.0[0], p.0[1], p.0[2]) as f64)
        .sum();
    let mean = (sum / pixels).round() as f32;

    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        *pixel = Rgb(blend_rgb(pixel.0, [mean, mean, mean], factor));
    }
    out
}

/// Saturation pass over a full RGB frame
pub fn color_rgb(image: &RgbImage, factor: f32) -> RgbImage {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        let [r, g, b] = pixel.0;
        let l = luminance(r, g, b);
        *pixel = Rgb(blend_rgb([r, g, b], [l, l, l], factor));
    }
    out
}
