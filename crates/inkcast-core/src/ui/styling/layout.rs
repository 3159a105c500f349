//! Panel geometry
//!
//! All positions are authored against an 800x480 reference canvas and scaled
//! linearly to the configured display size. Fonts are bitmap fonts and do not
//! scale, so layouts much smaller than the reference will get crowded.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::icons::IconSizes;

/// Reference canvas width in pixels
pub const REFERENCE_WIDTH_PX: u32 = 800;

/// Reference canvas height in pixels
pub const REFERENCE_HEIGHT_PX: u32 = 480;

// ============================================================================
// Header
// ============================================================================

/// Top of the location line in pixels
const LOCATION_Y_PX: i32 = 12;

/// Top of the date line in pixels
const DATE_Y_PX: i32 = 58;

/// Top of the last-updated stamp in pixels
const UPDATED_Y_PX: i32 = 22;

/// Gap between the last-updated stamp and the right edge in pixels
const UPDATED_RIGHT_MARGIN_PX: i32 = 80;

// ============================================================================
// Current conditions
// ============================================================================

/// Hero icon top-left corner in pixels
const HERO_ICON_X_PX: i32 = 60;
const HERO_ICON_Y_PX: i32 = 82;

/// Hero icon edge length in pixels
const HERO_ICON_SIZE_PX: u32 = 152;

/// Temperature numeral top-left corner in pixels
const TEMPERATURE_X_PX: i32 = 232;
const TEMPERATURE_Y_PX: i32 = 100;

/// Gap between numeral and unit glyph in pixels
const UNIT_GAP_PX: i32 = 2;

/// Description line offset below the numeral top in pixels
const DESCRIPTION_OFFSET_PX: i32 = 94;

/// Feels-like line offset below the numeral top in pixels
const FEELS_LIKE_OFFSET_PX: i32 = 116;

// ============================================================================
// Details
// ============================================================================

/// Left edge of the two detail columns in pixels
const DETAIL_COLUMNS_X_PX: [i32; 2] = [430, 590];

/// Top of the first detail row in pixels
const DETAIL_TOP_PX: i32 = 90;

/// Vertical distance between detail rows in pixels
const DETAIL_ROW_SPACING_PX: i32 = 50;

/// Detail glyph edge length in pixels
const DETAIL_ICON_SIZE_PX: u32 = 38;

/// Label/value indent from the column edge in pixels
const DETAIL_TEXT_INDENT_PX: i32 = 44;

/// Label offset below the row top in pixels
const DETAIL_LABEL_OFFSET_PX: i32 = 4;

/// Value offset below the row top in pixels
const DETAIL_VALUE_OFFSET_PX: i32 = 20;

// ============================================================================
// Chart
// ============================================================================

/// Chart band in pixels
const CHART_X_PX: i32 = 85;
const CHART_Y_PX: i32 = 257;
const CHART_WIDTH_PX: u32 = 590;
const CHART_HEIGHT_PX: u32 = 80;

/// Left edge of the temperature corner labels in pixels
const CHART_LABEL_X_PX: i32 = 42;

/// Gap between the band and the probability labels in pixels
const CHART_LABEL_GAP_PX: i32 = 8;

/// Gap between the band bottom and the time labels in pixels
const TIME_LABEL_GAP_PX: i32 = 10;

// ============================================================================
// Forecast
// ============================================================================

/// Top of the forecast card row in pixels
const FORECAST_Y_PX: i32 = 370;

/// Left edge of the first card in pixels
const CARD_LEFT_PX: i32 = 42;

/// Combined horizontal margin reserved around the row in pixels
const CARD_ROW_MARGINS_PX: u32 = 58 * 2;

/// Gap between cards in pixels
const CARD_GAP_PX: u32 = 3;

const CARD_HEIGHT_PX: u32 = 90;
const CARD_RADIUS_PX: u32 = 8;
const CARD_BORDER_PX: u32 = 2;
const CARD_ICON_SIZE_PX: u32 = 46;

/// Offsets inside a card in pixels
const CARD_DAY_OFFSET_PX: i32 = 6;
const CARD_ICON_OFFSET_PX: i32 = 25;
const CARD_TEMPERATURE_OFFSET_PX: i32 = 73;

// ============================================================================
// Layout
// ============================================================================

/// Horizontal placement of an evenly divided card row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRow {
    /// Left edge of the first card
    pub left: i32,
    pub card_width: u32,
    pub gap: u32,
    pub count: usize,
}

impl CardRow {
    /// Divide the space left after margins and gaps evenly between `count` cards.
    pub fn divide(count: usize, canvas_width: u32, left: i32, margins: u32, gap: u32) -> Self {
        let count = count.max(1);
        let gaps = gap * (count as u32 - 1);
        let available = canvas_width.saturating_sub(margins + gaps);

        Self {
            left,
            card_width: available / count as u32,
            gap,
            count,
        }
    }

    /// Left edge of card `index`
    pub fn x(&self, index: usize) -> i32 {
        self.left + index as i32 * (self.card_width + self.gap) as i32
    }

    /// Width occupied by all cards and the gaps between them
    pub fn span(&self) -> u32 {
        self.card_width * self.count as u32 + self.gap * (self.count as u32 - 1)
    }
}

/// Scaled geometry for every panel
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub size: Size,

    pub location_y: i32,
    pub date_y: i32,
    pub updated_y: i32,
    pub updated_right_margin: i32,

    pub hero_icon: Point,
    pub hero_icon_size: u32,
    pub temperature: Point,
    pub unit_gap: i32,
    pub description_offset: i32,
    pub feels_like_offset: i32,

    pub detail_columns: [i32; 2],
    pub detail_top: i32,
    pub detail_row_spacing: i32,
    pub detail_icon_size: u32,
    pub detail_text_indent: i32,
    pub detail_label_offset: i32,
    pub detail_value_offset: i32,

    /// Pixel band of the time-series chart
    pub chart: Rectangle,
    pub chart_label_x: i32,
    pub chart_label_gap: i32,
    pub time_label_gap: i32,

    pub forecast_y: i32,
    pub card_left: i32,
    pub card_row_margins: u32,
    pub card_gap: u32,
    pub card_height: u32,
    pub card_radius: u32,
    pub card_border: u32,
    pub card_icon_size: u32,
    pub card_day_offset: i32,
    pub card_icon_offset: i32,
    pub card_temperature_offset: i32,
}

impl Default for Layout {
    fn default() -> Self {
        Self::for_size(Size::new(REFERENCE_WIDTH_PX, REFERENCE_HEIGHT_PX))
    }
}

impl Layout {
    /// Scale the reference layout to `size`
    pub fn for_size(size: Size) -> Self {
        let sx = size.width as f32 / REFERENCE_WIDTH_PX as f32;
        let sy = size.height as f32 / REFERENCE_HEIGHT_PX as f32;
        // Square elements (icons, radii) follow the tighter axis
        let s = sx.min(sy);

        let x = |v: i32| (v as f32 * sx).round() as i32;
        let y = |v: i32| (v as f32 * sy).round() as i32;
        let w = |v: u32| ((v as f32 * sx).round() as u32).max(1);
        let h = |v: u32| ((v as f32 * sy).round() as u32).max(1);
        let sq = |v: u32| ((v as f32 * s).round() as u32).max(1);

        Self {
            size,

            location_y: y(LOCATION_Y_PX),
            date_y: y(DATE_Y_PX),
            updated_y: y(UPDATED_Y_PX),
            updated_right_margin: x(UPDATED_RIGHT_MARGIN_PX),

            hero_icon: Point::new(x(HERO_ICON_X_PX), y(HERO_ICON_Y_PX)),
            hero_icon_size: sq(HERO_ICON_SIZE_PX),
            temperature: Point::new(x(TEMPERATURE_X_PX), y(TEMPERATURE_Y_PX)),
            unit_gap: UNIT_GAP_PX,
            description_offset: y(DESCRIPTION_OFFSET_PX),
            feels_like_offset: y(FEELS_LIKE_OFFSET_PX),

            detail_columns: DETAIL_COLUMNS_X_PX.map(x),
            detail_top: y(DETAIL_TOP_PX),
            detail_row_spacing: y(DETAIL_ROW_SPACING_PX),
            detail_icon_size: sq(DETAIL_ICON_SIZE_PX),
            detail_text_indent: x(DETAIL_TEXT_INDENT_PX),
            detail_label_offset: y(DETAIL_LABEL_OFFSET_PX),
            detail_value_offset: y(DETAIL_VALUE_OFFSET_PX),

            chart: Rectangle::new(
                Point::new(x(CHART_X_PX), y(CHART_Y_PX)),
                Size::new(w(CHART_WIDTH_PX), h(CHART_HEIGHT_PX)),
            ),
            chart_label_x: x(CHART_LABEL_X_PX),
            chart_label_gap: x(CHART_LABEL_GAP_PX),
            time_label_gap: y(TIME_LABEL_GAP_PX),

            forecast_y: y(FORECAST_Y_PX),
            card_left: x(CARD_LEFT_PX),
            card_row_margins: w(CARD_ROW_MARGINS_PX),
            card_gap: w(CARD_GAP_PX),
            card_height: h(CARD_HEIGHT_PX),
            card_radius: sq(CARD_RADIUS_PX),
            card_border: CARD_BORDER_PX,
            card_icon_size: sq(CARD_ICON_SIZE_PX),
            card_day_offset: y(CARD_DAY_OFFSET_PX),
            card_icon_offset: y(CARD_ICON_OFFSET_PX),
            card_temperature_offset: y(CARD_TEMPERATURE_OFFSET_PX),
        }
    }

    /// Horizontal placement of `count` forecast cards
    pub fn card_row(&self, count: usize) -> CardRow {
        CardRow::divide(
            count,
            self.size.width,
            self.card_left,
            self.card_row_margins,
            self.card_gap,
        )
    }

    /// Width available to a detail column's text
    pub fn detail_text_width(&self) -> u32 {
        let column = self.detail_columns[1] - self.detail_columns[0];
        (column - self.detail_text_indent).max(0) as u32
    }

    /// Icon sizes needed by this layout
    pub fn icon_sizes(&self) -> IconSizes {
        IconSizes {
            hero: self.hero_icon_size,
            card: self.card_icon_size,
            glyph: self.detail_icon_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_size_keeps_authored_values() {
        let layout = Layout::default();
        assert_eq!(
            layout.chart,
            Rectangle::new(Point::new(85, 257), Size::new(590, 80))
        );
        assert_eq!(layout.hero_icon_size, 152);
        assert_eq!(layout.detail_columns, [430, 590]);
        assert_eq!(layout.forecast_y, 370);
    }

    #[test]
    fn card_row_fits_canvas() {
        let layout = Layout::default();
        for count in [1, 2, 6, 7] {
            let row = layout.card_row(count);
            assert!(
                row.span() + layout.card_row_margins <= layout.size.width,
                "{count} cards overflow"
            );
            assert!(row.card_width > 0);
        }
    }

    #[test]
    fn six_cards_match_reference_geometry() {
        let row = Layout::default().card_row(6);
        assert_eq!(row.card_width, 111);
        assert_eq!(row.x(0), 42);
        assert_eq!(row.x(1), 156);
    }

    #[test]
    fn scaling_follows_canvas() {
        let layout = Layout::for_size(Size::new(1600, 960));
        assert_eq!(layout.chart.top_left, Point::new(170, 514));
        assert_eq!(layout.chart.size, Size::new(1180, 160));
        assert_eq!(layout.hero_icon_size, 304);
    }

    #[test]
    fn zero_cards_is_treated_as_one() {
        let row = Layout::default().card_row(0);
        assert_eq!(row.count, 1);
    }
}
