//! Rendering pipeline: one table in, a deterministic chart sequence out.
//!
//! Bounds are computed once from the whole table, the full view renders
//! first, then every fixed-duration sub-window in ascending order. The
//! first failure aborts the rest of the run; files already written stay
//! on disk.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::render::Renderer;
use crate::scale::{ChartBounds, compute_bounds};
use crate::table::RecordTable;
use crate::window::{samples_per_window, segment};

/// Suffix substituted for the full-view chart.
pub const FULL_VIEW_SUFFIX: &str = "full";

/// Output template used when the caller supplies none.
pub const DEFAULT_OUTPUT_TEMPLATE: &str = "monitor.{suffix}.png";

const SUFFIX_PLACEHOLDER: &str = "{suffix}";

/// Output path template with a `{suffix}` placeholder.
///
/// The pipeline substitutes `full` for the full view and `1`, `2`, … for
/// sub-windows. A template without the placeholder would make every chart
/// overwrite the previous one, so construction rejects it.
#[derive(Debug, Clone)]
pub struct OutputTemplate {
    template: String,
}

impl OutputTemplate {
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !template.contains(SUFFIX_PLACEHOLDER) {
            return Err(Error::InvalidTemplate { template });
        }
        Ok(Self { template })
    }

    /// The path for one window suffix.
    pub fn path(&self, suffix: &str) -> PathBuf {
        PathBuf::from(self.template.replace(SUFFIX_PLACEHOLDER, suffix))
    }
}

impl Default for OutputTemplate {
    fn default() -> Self {
        Self {
            template: DEFAULT_OUTPUT_TEMPLATE.to_string(),
        }
    }
}

/// What one pipeline run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Samples in the input table.
    pub samples: usize,
    /// Sub-windows rendered (the full view is not counted).
    pub windows: usize,
    /// Axis bounds shared by every chart of the run.
    pub bounds: ChartBounds,
    /// Paths written, in render order: full view first, then sub-windows.
    pub outputs: Vec<PathBuf>,
}

/// Render the full view plus every sub-window of `table` through
/// `renderer`, naming outputs via `template`.
///
/// Propagates [`Error::EmptyInput`] before anything is written. Rendering
/// is strictly ordered and synchronous; a render failure aborts the
/// remaining windows without cleaning up earlier outputs.
pub fn run<R: Renderer>(
    table: &RecordTable,
    template: &OutputTemplate,
    renderer: &R,
) -> Result<RunReport> {
    let view = table.full_view();
    let bounds = compute_bounds(view)?;
    let segments = segment(view, samples_per_window())?;
    let window_total = segments.window_count();

    let mut outputs = Vec::with_capacity(window_total + 1);

    let full_target = template.path(FULL_VIEW_SUFFIX);
    log::info!("drawing full window to '{}'", full_target.display());
    renderer.render(segments.full_view(), &bounds, &full_target)?;
    outputs.push(full_target);

    for (i, window) in segments.windows().enumerate() {
        let target = template.path(&(i + 1).to_string());
        log::info!(
            "drawing subwindow {} of {} to '{}'",
            i + 1,
            window_total,
            target.display()
        );
        renderer.render(window, &bounds, &target)?;
        outputs.push(target);
    }

    Ok(RunReport {
        samples: table.len(),
        windows: window_total,
        bounds,
        outputs,
    })
}
