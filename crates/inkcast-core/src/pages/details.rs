//! Detail grid: two columns of glyph, label and value

use embedded_graphics::prelude::*;

use crate::framebuffer::BlendTarget;
use crate::icons::UiIcon;
use crate::model::{RenderModel, UnitSystem, format_clock};
use crate::render::RenderContext;
use crate::ui::text::{HAlign, draw_text_clipped};

use super::panel::Panel;

/// Rows per detail column
pub const DETAIL_ROWS: usize = 3;

/// One line of the grid
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub icon: UiIcon,
    pub label: &'static str,
    pub value: String,
}

/// Grid contents, column by column
pub fn detail_rows(model: &RenderModel, units: UnitSystem) -> [[DetailRow; DETAIL_ROWS]; 2] {
    let current = &model.current;
    let row = |icon, label, value: String| DetailRow { icon, label, value };

    [
        [
            row(UiIcon::Sunrise, "Sunrise", format_clock(current.sunrise)),
            row(
                UiIcon::Wind,
                "Wind",
                format!("{:.1} {}", current.wind_speed, units.wind_unit()),
            ),
            row(
                UiIcon::Visibility,
                "Visibility",
                format!("{:.1} {}", current.visibility, units.distance_unit()),
            ),
        ],
        [
            row(UiIcon::Sunset, "Sunset", format_clock(current.sunset)),
            row(UiIcon::Humidity, "Humidity", format!("{} %", current.humidity)),
            row(
                UiIcon::AirQuality,
                "Air Quality",
                current.air_quality.label.clone(),
            ),
        ],
    ]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailsPanel;

impl Panel for DetailsPanel {
    fn name(&self) -> &'static str {
        "details"
    }

    fn draw<D: BlendTarget>(
        &self,
        ctx: &RenderContext,
        model: &RenderModel,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let layout = &ctx.layout;
        let fonts = &ctx.theme.typography;
        let palette = &ctx.theme.palette;
        let text_width = layout.detail_text_width();

        for (column_x, rows) in layout.detail_columns.iter().zip(detail_rows(model, ctx.units)) {
            for (i, row) in rows.iter().enumerate() {
                let row_y = layout.detail_top + i as i32 * layout.detail_row_spacing;
                let top = Point::new(*column_x, row_y);
                display.composite(ctx.icons.glyph(row.icon), top);

                let text_x = top.x + layout.detail_text_indent;
                draw_text_clipped(
                    row.label,
                    Point::new(text_x, top.y + layout.detail_label_offset),
                    HAlign::Left,
                    fonts.detail_label,
                    text_width,
                    palette.text_secondary,
                    display,
                )?;
                draw_text_clipped(
                    &row.value,
                    Point::new(text_x, top.y + layout.detail_value_offset),
                    HAlign::Left,
                    fonts.detail_value,
                    text_width,
                    palette.text_primary,
                    display,
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SampleSource;
    use chrono::NaiveDate;

    fn model() -> RenderModel {
        let now = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(15, 5, 0)
            .unwrap();
        RenderModel::build(&SampleSource::snapshot(now), 6)
    }

    #[test]
    fn imperial_values() {
        let [left, right] = detail_rows(&model(), UnitSystem::Imperial);

        let values: Vec<&str> = left.iter().chain(right.iter()).map(|r| r.value.as_str()).collect();
        assert_eq!(
            values,
            ["7:20 AM", "6.0 mph", "10.0 mi", "6:10 PM", "60 %", "Fair"]
        );
    }

    #[test]
    fn metric_units_change_labels_only() {
        let [left, _] = detail_rows(&model(), UnitSystem::Metric);
        assert_eq!(left[1].value, "6.0 m/s");
        assert_eq!(left[2].value, "10.0 km");
    }

    #[test]
    fn every_glyph_is_used_once() {
        let rows = detail_rows(&model(), UnitSystem::Imperial);
        let mut icons: Vec<UiIcon> = rows.iter().flatten().map(|r| r.icon).collect();
        icons.dedup();
        assert_eq!(icons.len(), UiIcon::ALL.len());
        for icon in UiIcon::ALL {
            assert!(icons.contains(&icon));
        }
    }
}
