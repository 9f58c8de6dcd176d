//! `gpuplot extract` — strip monitor log headers to a record stream.

use std::path::Path;

use gpuplot_core::extract_records;

use super::{open_input, open_output};

/// Run the extract command.
pub fn run(monitor_log: Option<&Path>, output: Option<&Path>) {
    let input = match open_input(monitor_log) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error opening monitor log: {e}");
            std::process::exit(1);
        }
    };
    let writer = match open_output(output) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error opening output: {e}");
            std::process::exit(1);
        }
    };

    match extract_records(input, writer) {
        Ok(written) => {
            eprintln!("Extracted {written} record lines");
        }
        Err(e) => {
            eprintln!("Error extracting records: {e}");
            std::process::exit(1);
        }
    }
}
