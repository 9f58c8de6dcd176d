//! `gpuplot chart` — render the full view plus sub-window charts.

use std::path::Path;

use gpuplot_core::{
    ChartStyle, OutputTemplate, PngRenderer, build_table, read_records,
};

use super::open_input;

/// Run the chart command.
pub fn run(output_format: &str, input: Option<&Path>, manifest: Option<&Path>) {
    let template = match OutputTemplate::new(output_format) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

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

    let table = build_table(&records);
    let renderer = PngRenderer::new(ChartStyle::default());

    let report = match gpuplot_core::run(&table, &template, &renderer) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error rendering charts: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "Rendered {} charts from {} samples ({} sub-windows)",
        report.outputs.len(),
        report.samples,
        report.windows
    );
    for path in &report.outputs {
        println!("  {}", path.display());
    }

    if let Some(manifest_path) = manifest {
        let json = match serde_json::to_string_pretty(&report) {
            Ok(j) => j,
            Err(e) => {
                eprintln!("Error serializing manifest: {e}");
                std::process::exit(1);
            }
        };
        if let Err(e) = std::fs::write(manifest_path, json) {
            eprintln!("Error writing manifest: {e}");
            std::process::exit(1);
        }
        println!("Manifest written to {}", manifest_path.display());
    }
}
