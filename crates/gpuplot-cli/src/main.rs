//! CLI for gpuplot — chart GPU monitor telemetry logs.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gpuplot")]
#[command(about = "gpuplot — turn GPU monitor telemetry logs into windowed charts")]
#[command(version = gpuplot_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Strip a monitor log's header preamble down to the CSV record stream
    Extract {
        /// Path to the monitor log file ("-" or absent: stdin)
        monitor_log: Option<PathBuf>,

        /// Path for the extracted record stream ("-" or absent: stdout)
        output: Option<PathBuf>,
    },

    /// Restrict a multi-device record table to one device index
    Filter {
        /// Index of the device to keep
        #[arg(default_value = "0")]
        device_index: u32,

        /// Path to the input record table ("-" or absent: stdin)
        input: Option<PathBuf>,

        /// Path for the filtered table ("-" or absent: stdout)
        output: Option<PathBuf>,
    },

    /// Render the full view plus fixed-duration sub-window charts
    Chart {
        /// Output path format with a {suffix} placeholder
        #[arg(default_value = gpuplot_core::DEFAULT_OUTPUT_TEMPLATE)]
        output_format: String,

        /// Path to the single-device record table ("-" or absent: stdin)
        input: Option<PathBuf>,

        /// Write a JSON manifest of the run (bounds, outputs) to this path
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            monitor_log,
            output,
        } => commands::extract::run(monitor_log.as_deref(), output.as_deref()),
        Commands::Filter {
            device_index,
            input,
            output,
        } => commands::filter::run(device_index, input.as_deref(), output.as_deref()),
        Commands::Chart {
            output_format,
            input,
            manifest,
        } => commands::chart::run(&output_format, input.as_deref(), manifest.as_deref()),
    }
}
