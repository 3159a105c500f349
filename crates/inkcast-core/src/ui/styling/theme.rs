//! Global theme management
//!
//! Combines the color palette with the font assignments of every text role
//! into a single value owned by the render context.

use embedded_graphics::mono_font::iso_8859_1::{
    FONT_6X10, FONT_7X13, FONT_8X13, FONT_8X13_BOLD, FONT_9X18, FONT_9X18_BOLD, FONT_10X20,
};

use crate::ui::text::FontSpec;

use super::colors::ColorPalette;

// ============================================================================
// Typography
// ============================================================================

/// Font for each text role on the dashboard.
///
/// The ISO 8859-1 variants are used throughout because temperatures carry a
/// degree sign.
#[derive(Clone, Copy)]
pub struct Typography {
    /// "City, Country"
    pub location: FontSpec,
    /// Date and last-updated time
    pub date: FontSpec,
    /// Current temperature numeral
    pub temperature: FontSpec,
    /// Unit glyph next to the numeral
    pub temperature_unit: FontSpec,
    pub description: FontSpec,
    pub feels_like: FontSpec,
    pub detail_label: FontSpec,
    pub detail_value: FontSpec,
    pub forecast_day: FontSpec,
    pub forecast_temperature: FontSpec,
    /// Chart corner and time labels
    pub axis: FontSpec,
    /// No-data page headline
    pub headline: FontSpec,
    /// No-data page body
    pub body: FontSpec,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            location: FontSpec::scaled(&FONT_10X20, 2),
            date: FontSpec::new(&FONT_9X18),
            temperature: FontSpec::scaled(&FONT_10X20, 4),
            temperature_unit: FontSpec::scaled(&FONT_10X20, 2),
            description: FontSpec::new(&FONT_9X18),
            feels_like: FontSpec::new(&FONT_8X13),
            detail_label: FontSpec::new(&FONT_7X13),
            detail_value: FontSpec::new(&FONT_9X18_BOLD),
            forecast_day: FontSpec::new(&FONT_8X13_BOLD),
            forecast_temperature: FontSpec::new(&FONT_7X13),
            axis: FontSpec::new(&FONT_6X10),
            headline: FontSpec::scaled(&FONT_10X20, 2),
            body: FontSpec::new(&FONT_10X20),
        }
    }
}

// ============================================================================
// Theme
// ============================================================================

/// Colors and fonts used by every panel
#[derive(Clone, Copy, Default)]
pub struct Theme {
    pub palette: ColorPalette,
    pub typography: Typography,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            palette: ColorPalette::dark(),
            typography: Typography::default(),
        }
    }
}
