//! `gpuplot filter` — restrict monitoring data to a specific device.

use std::path::Path;

use gpuplot_core::{filter_device, read_records, write_records};

use super::{open_input, open_output};

/// Run the filter command.
pub fn run(device_index: u32, input: Option<&Path>, output: Option<&Path>) {
    let reader = match open_input(input) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error opening input: {e}");
            std::process::exit(1);
        }
    };

    let records = match read_records(reader) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error reading records: {e}");
            std::process::exit(1);
        }
    };

    let total = records.len();
    let filtered = filter_device(records, device_index);
    let kept = filtered.len();

    let writer = match open_output(output) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error opening output: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = write_records(writer, &filtered) {
        eprintln!("Error writing records: {e}");
        std::process::exit(1);
    }

    eprintln!("Kept {kept} of {total} records for device {device_index}");
}
