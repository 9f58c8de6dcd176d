//! Fixed-duration window segmentation.
//!
//! The table is walked in fixed-size, non-overlapping, order-preserving
//! chunks. Windows are transient borrowed views, produced lazily one at a
//! time; each call to [`Segments::windows`] starts a fresh walk.

use crate::error::{Error, Result};
use crate::ingest::MILLIS_IN_UNIT;
use crate::table::TableView;

/// Monitor polling period in milliseconds.
pub const POLLING_PERIOD_MS: u64 = 250;

/// Duration covered by one sub-window chart, in seconds.
pub const WINDOW_SECONDS: u64 = 180;

/// Samples per sub-window at the nominal polling rate (720).
pub fn samples_per_window() -> usize {
    ((MILLIS_IN_UNIT / POLLING_PERIOD_MS) * WINDOW_SECONDS) as usize
}

/// Number of windows needed to cover `len` samples in chunks of `spw`.
pub fn window_count(len: usize, spw: usize) -> usize {
    len.div_ceil(spw)
}

/// The full view plus a restartable sequence of sub-window views.
#[derive(Debug, Clone, Copy)]
pub struct Segments<'a> {
    full: TableView<'a>,
    samples_per_window: usize,
}

impl<'a> Segments<'a> {
    /// The entire input table, unmodified.
    pub fn full_view(&self) -> TableView<'a> {
        self.full
    }

    /// How many sub-windows [`Self::windows`] will yield.
    pub fn window_count(&self) -> usize {
        window_count(self.full.len(), self.samples_per_window)
    }

    /// A fresh iterator over the sub-windows, in ascending order. No cursor
    /// is shared between calls.
    pub fn windows(&self) -> Windows<'a> {
        Windows {
            view: self.full,
            samples_per_window: self.samples_per_window,
            next: 0,
        }
    }
}

/// Partition a table view into fixed-size sub-windows.
///
/// The final window may be shorter when the table length is not an exact
/// multiple of `samples_per_window`. A zero window size fails with
/// [`Error::InvalidWindowSize`]; an empty view yields zero sub-windows.
pub fn segment(view: TableView<'_>, samples_per_window: usize) -> Result<Segments<'_>> {
    if samples_per_window == 0 {
        return Err(Error::InvalidWindowSize {
            got: samples_per_window,
        });
    }
    Ok(Segments {
        full: view,
        samples_per_window,
    })
}

/// Lazy iterator of sub-window views.
#[derive(Debug, Clone)]
pub struct Windows<'a> {
    view: TableView<'a>,
    samples_per_window: usize,
    next: usize,
}

impl<'a> Iterator for Windows<'a> {
    type Item = TableView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next * self.samples_per_window;
        if start >= self.view.len() {
            return None;
        }
        let end = (start + self.samples_per_window).min(self.view.len());
        self.next += 1;
        Some(self.view.slice(start, end))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let total = window_count(self.view.len(), self.samples_per_window);
        let remaining = total.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Windows<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{RecordTable, Sample};

    fn table(n: usize) -> RecordTable {
        let samples = (0..n)
            .map(|i| Sample {
                timestamp_ms: i as u64 * POLLING_PERIOD_MS,
                device_index: 0,
                fan_speed: 30.0,
                temperature: 50.0,
                power_usage: 120.0,
            })
            .collect();
        RecordTable::new(samples)
    }

    #[test]
    fn test_samples_per_window_constant() {
        assert_eq!(samples_per_window(), 720);
    }

    #[test]
    fn test_zero_window_size_is_an_error() {
        let t = table(10);
        assert!(matches!(
            segment(t.full_view(), 0),
            Err(Error::InvalidWindowSize { got: 0 })
        ));
    }

    #[test]
    fn test_window_count_is_ceiling() {
        let t = table(10);
        let segments = segment(t.full_view(), 3).unwrap();
        assert_eq!(segments.window_count(), 4);
        assert_eq!(segments.windows().len(), 4);
    }

    #[test]
    fn test_partition_has_no_gaps_or_overlaps() {
        let t = table(10);
        let segments = segment(t.full_view(), 3).unwrap();
        let lens: Vec<usize> = segments.windows().map(|w| w.len()).collect();
        assert_eq!(lens, vec![3, 3, 3, 1]);

        // Concatenating the windows reproduces the table exactly.
        let rejoined: Vec<u64> = segments
            .windows()
            .flat_map(|w| w.samples().iter().map(|s| s.timestamp_ms).collect::<Vec<_>>())
            .collect();
        let original: Vec<u64> = t
            .full_view()
            .samples()
            .iter()
            .map(|s| s.timestamp_ms)
            .collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn test_windows_restart_identically() {
        let t = table(10);
        let segments = segment(t.full_view(), 4).unwrap();
        let first: Vec<(u64, u64)> = segments
            .windows()
            .map(|w| w.elapsed_range().unwrap())
            .collect();
        let second: Vec<(u64, u64)> = segments
            .windows()
            .map(|w| w.elapsed_range().unwrap())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_view_yields_no_windows() {
        let t = table(0);
        let segments = segment(t.full_view(), 720).unwrap();
        assert_eq!(segments.window_count(), 0);
        assert_eq!(segments.windows().count(), 0);
        assert!(segments.full_view().is_empty());
    }

    #[test]
    fn test_exact_multiple_has_no_short_tail() {
        let t = table(720);
        let segments = segment(t.full_view(), samples_per_window()).unwrap();
        let lens: Vec<usize> = segments.windows().map(|w| w.len()).collect();
        assert_eq!(lens, vec![720]);
    }
}
