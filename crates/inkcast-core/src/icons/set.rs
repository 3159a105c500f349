//! Preloaded, pre-enhanced icon bitmaps
//!
//! Icons are decoded, resized and enhanced once when the render context is
//! built. Drawing only ever borrows the finished bitmaps.

use std::path::{Path, PathBuf};

use embedded_graphics::pixelcolor::Rgb888;
use log::{debug, info, warn};

use crate::error::IconError;

use super::enhance;
use super::{UiIcon, WeatherIcon};

/// File extension of icon assets
const ICON_EXTENSION: &str = "png";

/// Pixel sizes icons are prepared at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSizes {
    /// Current conditions icon
    pub hero: u32,
    /// Forecast card icon
    pub card: u32,
    /// Detail grid glyph
    pub glyph: u32,
}

/// Where a weather icon is placed, selecting its prepared size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSlot {
    Hero,
    Card,
}

/// Immutable collection of every icon the dashboard can draw
pub struct IconSet {
    hero: Vec<image::RgbaImage>,
    card: Vec<image::RgbaImage>,
    glyphs: Vec<image::RgbaImage>,
    missing: Vec<&'static str>,
}

impl IconSet {
    /// Load every icon from `dir`.
    ///
    /// Missing or undecodable files are replaced by transparent placeholders
    /// and logged; loading itself never fails.
    pub fn load(dir: &Path, sizes: IconSizes, sun_tint: Rgb888) -> Self {
        let mut missing = Vec::new();
        let mut hero = Vec::with_capacity(WeatherIcon::ALL.len());
        let mut card = Vec::with_capacity(WeatherIcon::ALL.len());

        for icon in WeatherIcon::ALL {
            match read_icon(dir, icon.name()) {
                Ok(source) => {
                    hero.push(enhance::weather_icon(&enhance::resize(&source, sizes.hero)));
                    card.push(enhance::weather_icon(&enhance::resize(&source, sizes.card)));
                }
                Err(e) => {
                    warn!("{e}; using transparent placeholder");
                    missing.push(icon.name());
                    hero.push(enhance::placeholder(sizes.hero));
                    card.push(enhance::placeholder(sizes.card));
                }
            }
        }

        let mut glyphs = Vec::with_capacity(UiIcon::ALL.len());
        for icon in UiIcon::ALL {
            match read_icon(dir, icon.name()) {
                Ok(source) => {
                    let mut glyph = enhance::ui_glyph(&enhance::resize(&source, sizes.glyph));
                    if icon.is_sun() {
                        glyph = enhance::tint(&glyph, sun_tint);
                    }
                    glyphs.push(glyph);
                }
                Err(e) => {
                    warn!("{e}; using transparent placeholder");
                    missing.push(icon.name());
                    glyphs.push(enhance::placeholder(sizes.glyph));
                }
            }
        }

        let total = WeatherIcon::ALL.len() + UiIcon::ALL.len();
        info!(
            "Loaded {} of {} icons from {}",
            total - missing.len(),
            total,
            dir.display()
        );

        Self {
            hero,
            card,
            glyphs,
            missing,
        }
    }

    /// Icon set made only of transparent placeholders
    pub fn placeholders(sizes: IconSizes) -> Self {
        Self {
            hero: WeatherIcon::ALL
                .iter()
                .map(|_| enhance::placeholder(sizes.hero))
                .collect(),
            card: WeatherIcon::ALL
                .iter()
                .map(|_| enhance::placeholder(sizes.card))
                .collect(),
            glyphs: UiIcon::ALL
                .iter()
                .map(|_| enhance::placeholder(sizes.glyph))
                .collect(),
            missing: WeatherIcon::ALL
                .iter()
                .map(|i| i.name())
                .chain(UiIcon::ALL.iter().map(|i| i.name()))
                .collect(),
        }
    }

    /// Prepared bitmap for a weather icon
    pub fn weather(&self, icon: WeatherIcon, slot: IconSlot) -> &image::RgbaImage {
        match slot {
            IconSlot::Hero => &self.hero[icon as usize],
            IconSlot::Card => &self.card[icon as usize],
        }
    }

    /// Prepared bitmap for a detail glyph
    pub fn glyph(&self, icon: UiIcon) -> &image::RgbaImage {
        &self.glyphs[icon as usize]
    }

    /// Asset names that fell back to placeholders
    pub fn missing(&self) -> &[&'static str] {
        &self.missing
    }
}

fn icon_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{ICON_EXTENSION}"))
}

fn read_icon(dir: &Path, name: &str) -> Result<image::RgbaImage, IconError> {
    let path = icon_path(dir, name);
    if !path.is_file() {
        return Err(IconError::Missing(path));
    }

    debug!("Loading icon {}", path.display());
    let image = image::open(&path).map_err(|source| IconError::Decode { path, source })?;
    Ok(image.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    const SIZES: IconSizes = IconSizes {
        hero: 24,
        card: 12,
        glyph: 8,
    };

    const YELLOW: Rgb888 = Rgb888::new(255, 220, 0);

    fn write_icon(dir: &Path, name: &str, rgba: [u8; 4]) {
        RgbaImage::from_pixel(32, 32, Rgba(rgba))
            .save(icon_path(dir, name))
            .unwrap();
    }

    #[test]
    fn missing_directory_yields_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        let set = IconSet::load(&dir.path().join("nope"), SIZES, YELLOW);

        assert_eq!(set.missing().len(), WeatherIcon::ALL.len() + UiIcon::ALL.len());
        let hero = set.weather(WeatherIcon::ClearDay, IconSlot::Hero);
        assert_eq!(hero.dimensions(), (24, 24));
        assert!(hero.pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn loaded_icons_are_resized_per_slot() {
        let dir = tempfile::tempdir().unwrap();
        write_icon(dir.path(), "rain_day", [40, 80, 200, 255]);
        write_icon(dir.path(), "wind", [90, 90, 90, 255]);

        let set = IconSet::load(dir.path(), SIZES, YELLOW);

        assert!(!set.missing().contains(&"rain_day"));
        assert!(set.missing().contains(&"clear_day"));
        assert_eq!(set.weather(WeatherIcon::RainDay, IconSlot::Hero).dimensions(), (24, 24));
        assert_eq!(set.weather(WeatherIcon::RainDay, IconSlot::Card).dimensions(), (12, 12));
        assert_eq!(set.glyph(UiIcon::Wind).dimensions(), (8, 8));
        assert!(set.glyph(UiIcon::Wind).pixels().any(|p| p.0[3] > 0));
    }

    #[test]
    fn sun_glyphs_are_tinted_yellow() {
        let dir = tempfile::tempdir().unwrap();
        write_icon(dir.path(), "sunrise", [255, 255, 255, 255]);

        let set = IconSet::load(dir.path(), SIZES, YELLOW);
        let [r, g, b, a] = set.glyph(UiIcon::Sunrise).get_pixel(4, 4).0;

        assert!(a > 200);
        assert_eq!(b, 0);
        assert!(r >= g);
    }

    #[test]
    fn corrupt_file_degrades_to_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(icon_path(dir.path(), "mist"), b"not a png").unwrap();

        let set = IconSet::load(dir.path(), SIZES, YELLOW);
        assert!(set.missing().contains(&"mist"));
    }
}
