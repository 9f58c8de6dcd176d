//! Error taxonomy for the chart pipeline.
//!
//! Every failure aborts the remaining work; nothing substitutes a default
//! scale, window, or output path on the caller's behalf.

use thiserror::Error;

/// Errors produced by ingest, segmentation, scaling, and rendering.
#[derive(Debug, Error)]
pub enum Error {
    /// No samples are available to derive an axis scale from.
    #[error("no samples to derive axis scale from")]
    EmptyInput,

    /// The configured window size cannot partition anything.
    #[error("samples per window must be positive (got {got})")]
    InvalidWindowSize { got: usize },

    /// The output path template has nowhere to put the window suffix.
    #[error("output template '{template}' is missing the {{suffix}} placeholder")]
    InvalidTemplate { template: String },

    /// The slice's elapsed-time span cannot support tick placement.
    #[error("cannot place time ticks over {samples} sample(s) with zero span")]
    DegenerateRange { samples: usize },

    /// CSV decode/encode failure.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure, surfaced as-is.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Chart backend failure, stringified from the drawing backend.
    #[error("chart backend error: {0}")]
    Render(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
