//! Time-indexed telemetry sample table.
//!
//! A [`RecordTable`] owns one device's samples in timestamp order and
//! re-indexes them so the earliest timestamp reads as elapsed-time zero.
//! Everything downstream (scaling, windowing, rendering) works on borrowed
//! [`TableView`] slices that share the table's time origin, so a sub-window
//! keeps its global position on the time axis.

/// One telemetry reading at one timestamp for one device.
///
/// `power_usage` is in watts; the raw monitor log stores milliwatts and the
/// ingest layer divides before samples reach this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Milliseconds since a device-specific epoch. Non-decreasing.
    pub timestamp_ms: u64,
    /// Index of the device this reading came from.
    pub device_index: u32,
    /// Fan speed in percent (0–100).
    pub fan_speed: f64,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Power draw in watts.
    pub power_usage: f64,
}

/// Ordered, time-indexed collection of samples for a single device.
///
/// Built once per pipeline run and never mutated afterward. Duplicate
/// timestamps are permitted and preserved in input order.
#[derive(Debug, Clone)]
pub struct RecordTable {
    samples: Vec<Sample>,
    base_ms: u64,
}

impl RecordTable {
    /// Build a table from timestamp-ordered samples. The elapsed-time origin
    /// is the minimum timestamp present.
    pub fn new(samples: Vec<Sample>) -> Self {
        let base_ms = samples
            .iter()
            .map(|s| s.timestamp_ms)
            .min()
            .unwrap_or_default();
        Self { samples, base_ms }
    }

    /// Number of samples in the table.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the table holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Elapsed-time origin: the minimum timestamp, in milliseconds.
    pub fn base_ms(&self) -> u64 {
        self.base_ms
    }

    /// A view spanning the entire table.
    pub fn full_view(&self) -> TableView<'_> {
        TableView {
            samples: &self.samples,
            base_ms: self.base_ms,
        }
    }
}

/// A contiguous, read-only slice of a [`RecordTable`].
///
/// Views are cheap to copy and share the owning table's time origin, so
/// `elapsed_ms` values are comparable across every view of one table.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    samples: &'a [Sample],
    base_ms: u64,
}

impl<'a> TableView<'a> {
    /// Number of samples in this view.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether this view holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The underlying samples.
    pub fn samples(&self) -> &'a [Sample] {
        self.samples
    }

    /// Elapsed milliseconds of sample `i`, relative to the table origin.
    pub fn elapsed_ms(&self, i: usize) -> u64 {
        self.samples[i].timestamp_ms.saturating_sub(self.base_ms)
    }

    /// Iterate samples paired with their elapsed milliseconds.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &'a Sample)> + 'a {
        let base = self.base_ms;
        self.samples
            .iter()
            .map(move |s| (s.timestamp_ms.saturating_sub(base), s))
    }

    /// First and last elapsed milliseconds of this view, if non-empty.
    pub fn elapsed_range(&self) -> Option<(u64, u64)> {
        if self.samples.is_empty() {
            return None;
        }
        Some((self.elapsed_ms(0), self.elapsed_ms(self.samples.len() - 1)))
    }

    /// A sub-view over `[start, end)`, sharing this view's time origin.
    pub fn slice(&self, start: usize, end: usize) -> TableView<'a> {
        TableView {
            samples: &self.samples[start..end],
            base_ms: self.base_ms,
        }
    }
}
