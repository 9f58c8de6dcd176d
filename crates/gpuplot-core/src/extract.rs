//! Monitor-log extraction: strip the header preamble down to CSV records.
//!
//! A monitor log starts with a free-form banner that ends at the line
//! announcing the polling loop. Everything after that line is one CSV
//! record per line, possibly interleaved with blank lines.

use std::io::{BufRead, Write};

use crate::error::Result;

/// Line that terminates the log's header preamble.
pub const LOG_HEADER_MARKER: &str = "Monitoring GPUs";

/// Drop every line up to and including the header marker, then trim the
/// rest and drop blanks.
pub fn extract_lines<I>(lines: I) -> impl Iterator<Item = String>
where
    I: Iterator<Item = String>,
{
    let mut in_header = true;
    lines.filter_map(move |line| {
        let line = line.trim();
        if in_header {
            if line.starts_with(LOG_HEADER_MARKER) {
                in_header = false;
            }
            return None;
        }
        if line.is_empty() {
            None
        } else {
            Some(line.to_string())
        }
    })
}

/// Stream a raw monitor log into a flat record stream, line-buffered.
/// Returns the number of record lines written.
pub fn extract_records<R: BufRead, W: Write>(input: R, mut output: W) -> Result<usize> {
    let mut in_header = true;
    let mut written = 0usize;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if in_header {
            if line.starts_with(LOG_HEADER_MARKER) {
                in_header = false;
            }
            continue;
        }
        if line.is_empty() {
            continue;
        }
        writeln!(output, "{line}")?;
        written += 1;
    }
    output.flush()?;
    Ok(written)
}
