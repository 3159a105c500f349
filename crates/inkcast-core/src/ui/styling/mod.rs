//! Styling system for the dashboard
//!
//! - [`colors`] - Color constants and palette
//! - [`layout`] - Panel geometry scaled from the reference canvas
//! - [`theme`] - Palette plus typography

pub mod colors;
pub mod layout;
pub mod theme;

pub use colors::{
    ACCENT_COOL, ACCENT_WARM, BLACK, BORDER, CARD_BACKGROUND, ColorPalette, DARK_BLUE,
    TEXT_SECONDARY, WHITE,
};
pub use layout::{CardRow, Layout, REFERENCE_HEIGHT_PX, REFERENCE_WIDTH_PX};
pub use theme::{Theme, Typography};
