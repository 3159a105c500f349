//! Heap-backed RGB888 framebuffer with alpha compositing.
//!
//! Every panel draws into this buffer through `embedded-graphics`. Panels that
//! need translucency (gradient fills, icon overlays) go through the
//! [`BlendTarget`] extension, which reads the existing pixel back before
//! writing. Once a frame is complete it is exported as an [`RgbImage`] for the
//! display sink.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use image::{Rgb, RgbImage, RgbaImage};
use log::debug;

use crate::icons::enhance;

/// Contrast factor of the final frame pass
const FRAME_CONTRAST: f32 = 1.4;

/// Saturation factor of the final frame pass
const FRAME_COLOR: f32 = 1.3;

/// Draw target that can also blend translucent pixels over what is already there.
pub trait BlendTarget: DrawTarget<Color = Rgb888> {
    /// Blend `color` over the pixel at `point` with the given opacity (0..=255).
    ///
    /// Out-of-bounds points are ignored.
    fn blend_pixel(&mut self, point: Point, color: Rgb888, alpha: u8);

    /// Composite an RGBA image with its top-left corner at `top_left`.
    fn composite(&mut self, image: &RgbaImage, top_left: Point) {
        for (x, y, pixel) in image.enumerate_pixels() {
            let [r, g, b, a] = pixel.0;
            if a == 0 {
                continue;
            }
            self.blend_pixel(
                top_left + Point::new(x as i32, y as i32),
                Rgb888::new(r, g, b),
                a,
            );
        }
    }
}

/// Fixed-size RGB888 canvas implementing `DrawTarget<Color = Rgb888>`.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb888>,
}

impl Canvas {
    /// Allocate a canvas filled with a single color.
    pub fn new(size: Size, color: Rgb888) -> Self {
        Self {
            width: size.width,
            height: size.height,
            pixels: vec![color; size.width as usize * size.height as usize],
        }
    }

    /// Allocate a canvas with a vertical gradient from `top` to `bottom`.
    ///
    /// Row `y` gets the color at factor `y / height`, so the bottom row stops
    /// just short of `bottom`.
    pub fn with_vertical_gradient(size: Size, top: Rgb888, bottom: Rgb888) -> Self {
        let mut canvas = Self::new(size, top);
        let height = size.height.max(1) as f32;

        for y in 0..size.height {
            let factor = y as f32 / height;
            let row = lerp(top, bottom, factor);
            let start = y as usize * size.width as usize;
            canvas.pixels[start..start + size.width as usize].fill(row);
        }

        canvas
    }

    /// Read back a pixel, `None` when out of bounds
    pub fn pixel(&self, point: Point) -> Option<Rgb888> {
        self.index(point).map(|idx| self.pixels[idx])
    }

    /// Export the frame, optionally applying the contrast/saturation pass
    /// used for e-paper output.
    pub fn to_rgb_image(&self, enhance_frame: bool) -> RgbImage {
        let mut image = RgbImage::from_fn(self.width, self.height, |x, y| {
            let c = self.pixels[y as usize * self.width as usize + x as usize];
            Rgb([c.r(), c.g(), c.b()])
        });

        if enhance_frame {
            debug!(
                "Applying frame enhancement (contrast {FRAME_CONTRAST}, color {FRAME_COLOR})"
            );
            image = enhance::contrast_rgb(&image, FRAME_CONTRAST);
            image = enhance::color_rgb(&image, FRAME_COLOR);
        }

        image
    }

    #[inline]
    fn index(&self, point: Point) -> Option<usize> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let (x, y) = (point.x as u32, point.y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if let Some(idx) = self.index(coord) {
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };

        for y in area.top_left.y..=bottom_right.y {
            let start = y as usize * self.width as usize;
            let x0 = start + area.top_left.x as usize;
            let x1 = start + bottom_right.x as usize;
            self.pixels[x0..=x1].fill(color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.pixels.fill(color);
        Ok(())
    }
}

impl BlendTarget for Canvas {
    fn blend_pixel(&mut self, point: Point, color: Rgb888, alpha: u8) {
        let Some(idx) = self.index(point) else {
            return;
        };
        let base = self.pixels[idx];
        self.pixels[idx] = lerp(base, color, alpha as f32 / 255.0);
    }
}

/// Linear interpolation between two colors, `t` clamped to 0..=1
pub fn lerp(start: Rgb888, end: Rgb888, t: f32) -> Rgb888 {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Rgb888::new(
        mix(start.r(), end.r()),
        mix(start.g(), end.g()),
        mix(start.b(), end.b()),
    )
}
