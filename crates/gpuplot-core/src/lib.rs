//! # gpuplot-core
//!
//! Turn a GPU monitor's telemetry log into a sequence of rendered charts.
//!
//! The monitor polls each device every 250 ms and appends one CSV record
//! per reading (fan speed, temperature, power draw). This crate takes that
//! record stream and produces one "full view" chart plus a deterministic
//! sequence of fixed-duration sub-window charts, each overlaying the three
//! metrics on one shared elapsed-time axis with three independently scaled
//! vertical axes.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gpuplot_core::{OutputTemplate, PngRenderer, ChartStyle};
//!
//! let records = gpuplot_core::read_records(std::io::stdin())?;
//! let table = gpuplot_core::build_table(&gpuplot_core::filter_device(records, 0));
//!
//! let template = OutputTemplate::new("monitor.{suffix}.png")?;
//! let renderer = PngRenderer::new(ChartStyle::default());
//! let report = gpuplot_core::run(&table, &template, &renderer)?;
//! println!("{} charts written", report.outputs.len());
//! # Ok::<(), gpuplot_core::Error>(())
//! ```
//!
//! ## Architecture
//!
//! Log → extract → records → table → bounds + windows → charts
//!
//! Axis bounds are derived once from the entire table and reused for every
//! window, so all charts of one run share a comparable vertical scale.
//! Windows are lazy borrowed slices; nothing is mutated after the table is
//! built.

pub mod error;
pub mod extract;
pub mod ingest;
pub mod pipeline;
pub mod render;
pub mod scale;
pub mod style;
pub mod table;
pub mod window;

pub use error::{Error, Result};
pub use extract::{LOG_HEADER_MARKER, extract_lines, extract_records};
pub use ingest::{
    MILLIS_IN_UNIT, RawRecord, build_table, filter_device, read_records, write_records,
};
pub use pipeline::{
    DEFAULT_OUTPUT_TEMPLATE, FULL_VIEW_SUFFIX, OutputTemplate, RunReport, run,
};
pub use render::{PngRenderer, Renderer, format_elapsed};
pub use scale::{AxisBounds, ChartBounds, FAN_SPEED_LIMIT, Y_SCALING, compute_bounds};
pub use style::ChartStyle;
pub use table::{RecordTable, Sample, TableView};
pub use window::{
    POLLING_PERIOD_MS, Segments, WINDOW_SECONDS, Windows, samples_per_window, segment,
    window_count,
};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
