//! Color definitions and palette management
//!
//! The dashboard renders in full RGB888 and relies on the final
//! contrast/saturation pass to make these read well on a color e-paper panel.

use embedded_graphics::pixelcolor::Rgb888;

// ============================================================================
// Base Colors
// ============================================================================

/// Top of the background gradient - very dark blue, almost black
pub const DARK_BLUE: Rgb888 = Rgb888::new(5, 8, 15);

/// Bottom of the background gradient
pub const BLACK: Rgb888 = Rgb888::new(0, 0, 0);

/// Forecast card surface
pub const CARD_BACKGROUND: Rgb888 = Rgb888::new(15, 20, 30);

/// Card outline
pub const BORDER: Rgb888 = Rgb888::new(100, 100, 120);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text
pub const WHITE: Rgb888 = Rgb888::new(255, 255, 255);

/// Slightly dimmed text for labels and secondary values
pub const TEXT_SECONDARY: Rgb888 = Rgb888::new(200, 200, 220);

/// No-data headline
pub const ERROR_RED: Rgb888 = Rgb888::new(230, 80, 80);

// ============================================================================
// Accent Colors
// ============================================================================

/// Temperature series
pub const ACCENT_WARM: Rgb888 = Rgb888::new(255, 140, 66);

/// Precipitation series
pub const ACCENT_COOL: Rgb888 = Rgb888::new(100, 150, 255);

/// Flat tint for sunrise/sunset glyphs
pub const SUN_YELLOW: Rgb888 = Rgb888::new(255, 220, 0);

// ============================================================================
// Color Palette
// ============================================================================

/// Colors grouped by role so panels never reach for raw constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    /// Gradient start (top row)
    pub background_top: Rgb888,
    /// Gradient end (bottom row)
    pub background_bottom: Rgb888,
    /// Card fill
    pub surface: Rgb888,
    /// Card outline
    pub border: Rgb888,
    pub text_primary: Rgb888,
    pub text_secondary: Rgb888,
    pub error: Rgb888,
    /// Temperature curve and fill
    pub temperature: Rgb888,
    /// Precipitation curve and fill
    pub precipitation: Rgb888,
    /// Sunrise/sunset glyph tint
    pub sun: Rgb888,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorPalette {
    /// Light text on a near-black gradient
    pub fn dark() -> Self {
        Self {
            background_top: DARK_BLUE,
            background_bottom: BLACK,
            surface: CARD_BACKGROUND,
            border: BORDER,
            text_primary: WHITE,
            text_secondary: TEXT_SECONDARY,
            error: ERROR_RED,
            temperature: ACCENT_WARM,
            precipitation: ACCENT_COOL,
            sun: SUN_YELLOW,
        }
    }
}
