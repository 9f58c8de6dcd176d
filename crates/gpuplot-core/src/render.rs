//! Multi-axis chart rendering.
//!
//! One chart overlays three time series on a shared elapsed-time axis with
//! three independently scaled vertical axes: fan speed on the left,
//! temperature on the right, and power on a second spine drawn further
//! outboard so the two right-hand scales never overlap. Each axis carries
//! its own color and unit.
//!
//! The [`Renderer`] trait is the seam the pipeline renders through; the
//! production implementation is [`PngRenderer`] on top of plotters'
//! bitmap backend.

use std::fmt::Display;
use std::path::Path;

use plotters::coord::Shift;
use plotters::element::{PathElement, Text};
use plotters::prelude::*;
use plotters::style::FontTransform;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::{Error, Result};
use crate::ingest::MILLIS_IN_UNIT;
use crate::scale::{AxisBounds, ChartBounds};
use crate::style::ChartStyle;
use crate::table::TableView;

/// Format elapsed milliseconds as zero-padded `MM:SS`.
pub fn format_elapsed(ms: u64) -> String {
    let total_seconds = ms / MILLIS_IN_UNIT;
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Renders one table slice to one output target.
pub trait Renderer {
    /// Draw `view` scaled by `bounds` and write the chart to `target`.
    fn render(&self, view: TableView<'_>, bounds: &ChartBounds, target: &Path) -> Result<()>;
}

/// Plotters bitmap renderer producing PNG files.
pub struct PngRenderer {
    style: ChartStyle,
}

impl PngRenderer {
    pub fn new(style: ChartStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }
}

impl Renderer for PngRenderer {
    fn render(&self, view: TableView<'_>, bounds: &ChartBounds, target: &Path) -> Result<()> {
        draw_chart(view, bounds, &self.style, target)
    }
}

fn to_render_err<E: Display>(e: E) -> Error {
    Error::Render(e.to_string())
}

/// Which side of the plot a hand-drawn vertical axis sits on.
enum AxisSide {
    Left,
    /// Offset in pixels outboard of the plot's right edge.
    Right(i32),
}

fn draw_chart(
    view: TableView<'_>,
    bounds: &ChartBounds,
    style: &ChartStyle,
    target: &Path,
) -> Result<()> {
    // A slice with fewer than two samples (or only duplicate timestamps)
    // has no elapsed-time span to spread ticks over.
    let (x_start, x_end) = match view.elapsed_range() {
        Some((start, end)) if view.len() >= 2 && end > start => (start as f64, end as f64),
        _ => {
            return Err(Error::DegenerateRange {
                samples: view.len(),
            });
        }
    };

    let root = BitMapBackend::new(target, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(to_render_err)?;

    let fan = bounds.fan_speed;
    let mut chart = ChartBuilder::on(&root)
        .margin(style.margin)
        .margin_right(style.power_axis_area)
        .x_label_area_size(style.x_label_area)
        .y_label_area_size(style.y_label_area)
        .right_y_label_area_size(style.right_y_label_area)
        .build_cartesian_2d(x_start..x_end, fan.lower..fan.upper)
        .map_err(to_render_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(style.x_tick_count)
        .y_labels(0)
        .x_label_formatter(&|ms: &f64| format_elapsed(*ms as u64))
        .x_desc("Time, mm:ss")
        .label_style(("sans-serif", style.label_font_size).into_font())
        .axis_desc_style(("sans-serif", style.axis_font_size).into_font())
        .axis_style(BLACK.stroke_width(1))
        .draw()
        .map_err(to_render_err)?;

    // All three series share the primary coordinate system; temperature and
    // power are mapped into it by their own bounds so each reads against
    // its own axis.
    let temperature_scale = primary_scale(fan, bounds.temperature);
    let power_scale = primary_scale(fan, bounds.power_usage);

    chart
        .draw_series(LineSeries::new(
            view.iter().map(|(t, s)| (t as f64, s.fan_speed)),
            style
                .fan_color
                .mix(style.line_alpha)
                .stroke_width(style.stroke_width),
        ))
        .map_err(to_render_err)?;

    chart
        .draw_series(LineSeries::new(
            view.iter()
                .map(|(t, s)| (t as f64, s.temperature * temperature_scale)),
            style
                .temperature_color
                .mix(style.line_alpha)
                .stroke_width(style.stroke_width),
        ))
        .map_err(to_render_err)?;

    chart
        .draw_series(LineSeries::new(
            view.iter()
                .map(|(t, s)| (t as f64, s.power_usage * power_scale)),
            style
                .power_color
                .mix(style.line_alpha)
                .stroke_width(style.stroke_width),
        ))
        .map_err(to_render_err)?;

    let (px, py) = chart.plotting_area().get_pixel_range();

    draw_y_axis(
        &root,
        (px.start, py.start, py.end),
        bounds.fan_speed,
        AxisSide::Left,
        "Fan RPM, %",
        style.fan_color,
        style,
    )?;
    draw_y_axis(
        &root,
        (px.end, py.start, py.end),
        bounds.temperature,
        AxisSide::Right(0),
        "Temperature, °C",
        style.temperature_color,
        style,
    )?;
    draw_y_axis(
        &root,
        (px.end, py.start, py.end),
        bounds.power_usage,
        AxisSide::Right(style.right_y_label_area as i32 + style.power_axis_gap),
        "Power, W",
        style.power_color,
        style,
    )?;

    root.present().map_err(to_render_err)?;
    Ok(())
}

/// Factor mapping a metric's value into the primary (fan) coordinate
/// system. A zero-height axis maps everything to the baseline rather than
/// dividing by zero.
fn primary_scale(primary: AxisBounds, metric: AxisBounds) -> f64 {
    if metric.span() > 0.0 {
        primary.span() / metric.span()
    } else {
        0.0
    }
}

/// Map a metric value to a pixel row within the plot area.
fn value_to_y(value: f64, bounds: AxisBounds, y_top: i32, y_bottom: i32) -> i32 {
    let frac = if bounds.span() > 0.0 {
        (value - bounds.lower) / bounds.span()
    } else {
        0.0
    };
    y_bottom - ((y_bottom - y_top) as f64 * frac).round() as i32
}

/// Hand-draw one vertical axis: spine, tick marks, tick labels, and a
/// rotated title, all in the axis's own color. The power axis uses a
/// positive right offset so its spine sits clear of the temperature
/// labels.
fn draw_y_axis<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    (edge_x, y_top, y_bottom): (i32, i32, i32),
    bounds: AxisBounds,
    side: AxisSide,
    title: &str,
    color: RGBColor,
    style: &ChartStyle,
) -> Result<()> {
    let spine_x = match side {
        AxisSide::Left => edge_x,
        AxisSide::Right(offset) => edge_x + offset,
    };
    let outward = match side {
        AxisSide::Left => -1,
        AxisSide::Right(_) => 1,
    };

    root.draw(&PathElement::new(
        vec![(spine_x, y_top), (spine_x, y_bottom)],
        color.stroke_width(1),
    ))
    .map_err(to_render_err)?;

    let label_style = ("sans-serif", style.label_font_size)
        .into_font()
        .color(&color)
        .pos(Pos::new(
            if outward < 0 { HPos::Right } else { HPos::Left },
            VPos::Center,
        ));

    let ticks = style.y_tick_count.max(1);
    for k in 0..=ticks {
        let value = bounds.lower + bounds.span() * k as f64 / ticks as f64;
        let y = value_to_y(value, bounds, y_top, y_bottom);
        let tick_end = spine_x + outward * style.tick_length;
        root.draw(&PathElement::new(
            vec![(spine_x, y), (tick_end, y)],
            color.stroke_width(1),
        ))
        .map_err(to_render_err)?;
        root.draw(&Text::new(
            format!("{value:.0}"),
            (tick_end + outward * 6, y),
            label_style.clone(),
        ))
        .map_err(to_render_err)?;
    }

    let title_x = spine_x + outward * (style.tick_length + style.label_font_size as i32 * 3);
    let title_style = ("sans-serif", style.axis_font_size)
        .into_font()
        .color(&color)
        .pos(Pos::new(HPos::Center, VPos::Center))
        .transform(match side {
            AxisSide::Left => FontTransform::Rotate270,
            AxisSide::Right(_) => FontTransform::Rotate90,
        });
    root.draw(&Text::new(
        title.to_string(),
        (title_x, (y_top + y_bottom) / 2),
        title_style,
    ))
    .map_err(to_render_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::compute_bounds;
    use crate::table::{RecordTable, Sample};

    fn table(n: usize) -> RecordTable {
        let samples = (0..n)
            .map(|i| Sample {
                timestamp_ms: i as u64 * 250,
                device_index: 0,
                fan_speed: 30.0 + i as f64,
                temperature: 50.0,
                power_usage: 120.0,
            })
            .collect();
        RecordTable::new(samples)
    }

    // -----------------------------------------------------------------------
    // format_elapsed
    // -----------------------------------------------------------------------

    #[test]
    fn test_format_elapsed_zero() {
        assert_eq!(format_elapsed(0), "00:00");
    }

    #[test]
    fn test_format_elapsed_minutes_and_seconds() {
        assert_eq!(format_elapsed(125_000), "02:05");
    }

    #[test]
    fn test_format_elapsed_truncates_sub_second() {
        assert_eq!(format_elapsed(999), "00:00");
        assert_eq!(format_elapsed(60_999), "01:00");
    }

    // -----------------------------------------------------------------------
    // degenerate slices
    // -----------------------------------------------------------------------

    #[test]
    fn test_single_sample_is_degenerate() {
        let t = table(1);
        let bounds = compute_bounds(t.full_view()).unwrap();
        let renderer = PngRenderer::new(ChartStyle::compact());
        let err = renderer
            .render(t.full_view(), &bounds, Path::new("unused.png"))
            .unwrap_err();
        assert!(matches!(err, Error::DegenerateRange { samples: 1 }));
    }

    #[test]
    fn test_zero_span_is_degenerate() {
        let samples = vec![
            Sample {
                timestamp_ms: 100,
                device_index: 0,
                fan_speed: 1.0,
                temperature: 2.0,
                power_usage: 3.0,
            };
            3
        ];
        let t = RecordTable::new(samples);
        let bounds = compute_bounds(t.full_view()).unwrap();
        let renderer = PngRenderer::new(ChartStyle::compact());
        let err = renderer
            .render(t.full_view(), &bounds, Path::new("unused.png"))
            .unwrap_err();
        assert!(matches!(err, Error::DegenerateRange { samples: 3 }));
    }

    // -----------------------------------------------------------------------
    // coordinate mapping
    // -----------------------------------------------------------------------

    #[test]
    fn test_value_to_y_spans_plot() {
        let bounds = AxisBounds::from_upper(100.0);
        assert_eq!(value_to_y(0.0, bounds, 10, 210), 210);
        assert_eq!(value_to_y(100.0, bounds, 10, 210), 10);
        assert_eq!(value_to_y(50.0, bounds, 10, 210), 110);
    }

    #[test]
    fn test_zero_span_axis_maps_to_baseline() {
        let bounds = AxisBounds::from_upper(0.0);
        assert_eq!(value_to_y(0.0, bounds, 10, 210), 210);
        assert_eq!(primary_scale(AxisBounds::from_upper(100.0), bounds), 0.0);
    }
}
