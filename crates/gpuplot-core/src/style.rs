//! Chart styling constants.
//!
//! Styling is an immutable value passed into the renderer, not hidden
//! global state. [`ChartStyle::default`] reproduces the monitor toolchain's
//! output format: a 22×9 figure at 300 dots per unit, three colored series
//! at fixed opacity, 25 time ticks.

use plotters::style::RGBColor;

/// Figure width in layout units.
pub const FIGURE_WIDTH_UNITS: u32 = 22;
/// Figure height in layout units.
pub const FIGURE_HEIGHT_UNITS: u32 = 9;
/// Raster dots per layout unit.
pub const FIGURE_DPU: u32 = 300;

/// Line opacity shared by all three series, low enough that overlapping
/// traces stay distinguishable.
pub const LINE_ALPHA: f64 = 0.7;

/// Number of ticks on the elapsed-time axis.
pub const X_TICK_COUNT: usize = 25;

/// Fan speed series color.
pub const FAN_SPEED_COLOR: RGBColor = RGBColor(0x2a, 0x7a, 0xb9);
/// Temperature series color.
pub const TEMPERATURE_COLOR: RGBColor = RGBColor(0x51, 0x31, 0x5e);
/// Power usage series color.
pub const POWER_USAGE_COLOR: RGBColor = RGBColor(0x7b, 0xb2, 0x74);

/// Rendering configuration for one chart.
#[derive(Debug, Clone, Copy)]
pub struct ChartStyle {
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
    /// Series line opacity (0.0–1.0).
    pub line_alpha: f64,
    /// Series stroke width in pixels.
    pub stroke_width: u32,
    /// Tick count on the shared time axis.
    pub x_tick_count: usize,
    /// Tick count on each vertical axis.
    pub y_tick_count: usize,
    /// Outer margin in pixels.
    pub margin: u32,
    /// Height reserved for time-axis labels.
    pub x_label_area: u32,
    /// Width reserved for the fan axis labels (left).
    pub y_label_area: u32,
    /// Width reserved for the temperature axis labels (right).
    pub right_y_label_area: u32,
    /// Extra right margin housing the outboard power axis.
    pub power_axis_area: u32,
    /// Gap between the temperature labels and the power spine.
    pub power_axis_gap: i32,
    /// Tick mark length on the power spine.
    pub tick_length: i32,
    /// Font size for tick labels.
    pub label_font_size: u32,
    /// Font size for axis titles.
    pub axis_font_size: u32,
    /// Fan speed series/axis color.
    pub fan_color: RGBColor,
    /// Temperature series/axis color.
    pub temperature_color: RGBColor,
    /// Power usage series/axis color.
    pub power_color: RGBColor,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: FIGURE_WIDTH_UNITS * FIGURE_DPU,
            height: FIGURE_HEIGHT_UNITS * FIGURE_DPU,
            line_alpha: LINE_ALPHA,
            stroke_width: 3,
            x_tick_count: X_TICK_COUNT,
            y_tick_count: 6,
            margin: 40,
            x_label_area: 140,
            y_label_area: 170,
            right_y_label_area: 170,
            power_axis_area: 280,
            power_axis_gap: 60,
            tick_length: 12,
            label_font_size: 40,
            axis_font_size: 48,
            fan_color: FAN_SPEED_COLOR,
            temperature_color: TEMPERATURE_COLOR,
            power_color: POWER_USAGE_COLOR,
        }
    }
}

impl ChartStyle {
    /// A scaled-down style for fast test rasters.
    pub fn compact() -> Self {
        Self {
            width: 880,
            height: 360,
            stroke_width: 1,
            margin: 8,
            x_label_area: 28,
            y_label_area: 36,
            right_y_label_area: 36,
            power_axis_area: 64,
            power_axis_gap: 12,
            tick_length: 4,
            label_font_size: 10,
            axis_font_size: 12,
            ..Self::default()
        }
    }
}
