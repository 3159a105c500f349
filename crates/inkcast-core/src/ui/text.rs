//! Text rendering on top of `embedded-graphics` mono fonts
//!
//! Mono fonts top out at 10x20, which is too small for the headline
//! temperature and location. [`Scaled`] wraps a draw target and blows every
//! pixel up into an N x N block so the same fonts can be drawn at integer
//! multiples.
//!
//! Text is never wrapped. Callers that have a bounded slot pass `max_width`
//! and the string is cut at the last character that fits.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};

/// Font plus integer magnification
#[derive(Clone, Copy)]
pub struct FontSpec {
    pub font: &'static MonoFont<'static>,
    /// Pixel multiplier, at least 1
    pub scale: u32,
}

impl FontSpec {
    pub const fn new(font: &'static MonoFont<'static>) -> Self {
        Self { font, scale: 1 }
    }

    pub const fn scaled(font: &'static MonoFont<'static>, scale: u32) -> Self {
        Self { font, scale }
    }

    /// Horizontal advance of one character in pixels
    pub fn advance(&self) -> u32 {
        (self.font.character_size.width + self.font.character_spacing) * self.scale.max(1)
    }

    /// Glyph height in pixels
    pub fn line_height(&self) -> u32 {
        self.font.character_size.height * self.scale.max(1)
    }

    /// Rendered width of `text` in pixels
    pub fn text_width(&self, text: &str) -> u32 {
        let count = text.chars().count() as u32;
        if count == 0 {
            return 0;
        }
        count * self.advance() - self.font.character_spacing * self.scale.max(1)
    }

    /// Longest prefix of `text` that fits in `max_width` pixels
    pub fn fit<'a>(&self, text: &'a str, max_width: u32) -> &'a str {
        if self.text_width(text) <= max_width {
            return text;
        }

        let mut end = 0;
        for (count, (idx, ch)) in text.char_indices().enumerate() {
            let width = (count as u32 + 1) * self.advance()
                - self.font.character_spacing * self.scale.max(1);
            if width > max_width {
                break;
            }
            end = idx + ch.len_utf8();
        }
        &text[..end]
    }
}

/// Horizontal anchor of a text position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Draw target adapter that magnifies every pixel by an integer factor.
///
/// Coordinates drawn into the adapter are relative to `origin` in the
/// wrapped target.
pub struct Scaled<'a, D> {
    target: &'a mut D,
    origin: Point,
    scale: u32,
}

impl<'a, D> Scaled<'a, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    pub fn new(target: &'a mut D, origin: Point, scale: u32) -> Self {
        Self {
            target,
            origin,
            scale: scale.max(1),
        }
    }
}

impl<D> OriginDimensions for Scaled<'_, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    fn size(&self) -> Size {
        let size = self.target.bounding_box().size;
        Size::new(size.width / self.scale, size.height / self.scale)
    }
}

impl<D> DrawTarget for Scaled<'_, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    type Color = Rgb888;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let block = Size::new(self.scale, self.scale);
        for Pixel(point, color) in pixels {
            let top_left = self.origin + point * self.scale as i32;
            self.target.fill_solid(&Rectangle::new(top_left, block), color)?;
        }
        Ok(())
    }
}

/// Draw a single line of text whose top edge sits at `position.y`.
///
/// `position.x` is the left edge, center, or right edge depending on `align`.
pub fn draw_text<D: DrawTarget<Color = Rgb888>>(
    text: &str,
    position: Point,
    align: HAlign,
    spec: FontSpec,
    color: Rgb888,
    display: &mut D,
) -> Result<(), D::Error> {
    if text.is_empty() {
        return Ok(());
    }

    let width = spec.text_width(text) as i32;
    let left = match align {
        HAlign::Left => position.x,
        HAlign::Center => position.x - width / 2,
        HAlign::Right => position.x - width,
    };
    let style = MonoTextStyle::new(spec.font, color);

    if spec.scale <= 1 {
        Text::with_baseline(text, Point::new(left, position.y), style, Baseline::Top)
            .draw(display)?;
    } else {
        let mut scaled = Scaled::new(display, Point::new(left, position.y), spec.scale);
        Text::with_baseline(text, Point::zero(), style, Baseline::Top).draw(&mut scaled)?;
    }

    Ok(())
}

/// Draw text cut to `max_width` pixels
pub fn draw_text_clipped<D: DrawTarget<Color = Rgb888>>(
    text: &str,
    position: Point,
    align: HAlign,
    spec: FontSpec,
    max_width: u32,
    color: Rgb888,
    display: &mut D,
) -> Result<(), D::Error> {
    draw_text(spec.fit(text, max_width), position, align, spec, color, display)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Canvas;
    use embedded_graphics::mono_font::iso_8859_1::{FONT_6X10, FONT_10X20};

    #[test]
    fn width_accounts_for_scale() {
        let small = FontSpec::new(&FONT_10X20);
        let large = FontSpec::scaled(&FONT_10X20, 4);

        assert_eq!(small.text_width("54"), 20);
        assert_eq!(large.text_width("54"), 80);
        assert_eq!(large.line_height(), 80);
        assert_eq!(small.text_width(""), 0);
    }

    #[test]
    fn degree_sign_counts_as_one_character() {
        let spec = FontSpec::new(&FONT_6X10);
        assert_eq!(spec.text_width("54°F"), 24);
    }

    #[test]
    fn fit_cuts_on_character_boundaries() {
        let spec = FontSpec::new(&FONT_6X10);
        assert_eq!(spec.fit("Philadelphia", 1000), "Philadelphia");
        assert_eq!(spec.fit("Philadelphia", 30), "Phila");
        assert_eq!(spec.fit("°°°°", 13), "°°");
        assert_eq!(spec.fit("abc", 0), "");
    }

    #[test]
    fn scaled_text_covers_a_larger_area() {
        let spec = FontSpec::scaled(&FONT_10X20, 3);
        let mut canvas = Canvas::new(Size::new(200, 100), Rgb888::BLACK);

        draw_text("8", Point::new(10, 10), HAlign::Left, spec, Rgb888::WHITE, &mut canvas).unwrap();

        let lit = (0..200)
            .flat_map(|x| (0..100).map(move |y| Point::new(x, y)))
            .filter(|p| canvas.pixel(*p) == Some(Rgb888::WHITE))
            .collect::<Vec<_>>();
        assert!(!lit.is_empty());
        assert!(lit.iter().all(|p| p.x >= 10 && p.x < 40 && p.y >= 10 && p.y < 70));
        assert!(lit.iter().any(|p| p.y > 40));
    }

    #[test]
    fn right_alignment_ends_at_anchor() {
        let spec = FontSpec::new(&FONT_6X10);
        let mut canvas = Canvas::new(Size::new(100, 20), Rgb888::BLACK);

        draw_text("MM", Point::new(50, 0), HAlign::Right, spec, Rgb888::WHITE, &mut canvas).unwrap();

        for x in 50..100 {
            for y in 0..20 {
                assert_eq!(canvas.pixel(Point::new(x, y)), Some(Rgb888::BLACK));
            }
        }
    }
}
