use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[clap(
    version = "0.1.0",
    name = "sprintsim",
    about = "A time-discrete sprint race simulator written in Rust"
)]
pub struct SimOpts {
    // FLAGS ---------------------------------------------------------------------------------------
    /// Activate debug printing (only for non-watch mode)
    #[clap(short, long)]
    pub debug: bool,

    /// Watch the race live in the terminal - it will be simulated in real-time
    #[clap(short, long)]
    pub watch: bool,

    /// Write the recorded timeline to a CSV file in output/
    #[clap(long)]
    pub export_csv: bool,

    /// Write a position-over-time plot to a PNG file in output/
    #[clap(long)]
    pub export_plot: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Set path to the simulation parameter file (OPTIONAL: if not set, uses the built-in
    /// body-systems roster)
    #[clap(short, long)]
    pub parfile_path: Option<PathBuf>,

    /// Set real-time factor (only relevant in watch mode)
    #[clap(short, long, default_value = "1.0")]
    pub realtime_factor: f64,

    /// Set simulation timestep size in seconds, should be in the range [0.001, 1.0]
    #[clap(short, long, default_value = "0.1")]
    pub timestep_size: f64,
}
