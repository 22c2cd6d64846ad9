use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use dynamic_routing::{
    config::RunConfig, history::HistoryFormat, render::RendererKind, simulation,
};
use log::error;

/// Periodically recomputes and renders the routing trees of every router
/// while the edge weights drift.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name of the input file containing the adjacency matrix
    #[arg(short = 'i', long)]
    input_matrix: PathBuf,

    /// Name for the configuration file for Graphviz
    #[arg(short = 'o', long)]
    output_file: PathBuf,

    /// Time interval in seconds between two route updates
    #[arg(short = 't', long)]
    time_interval: u64,

    /// Number of iterations, with the time interval between each
    #[arg(short = 'n', long)]
    n_iterations: u32,

    /// Seed for the edge weights, random if not given
    #[arg(long)]
    seed: Option<u64>,

    /// Path of the history log
    #[arg(long, default_value = "history.txt")]
    history: PathBuf,

    #[arg(long, value_enum, default_value_t = HistoryFormat::Text)]
    history_format: HistoryFormat,

    #[arg(long, value_enum, default_value_t = RendererKind::Graphviz)]
    renderer: RendererKind,

    /// Directory the rendered trees are written to
    #[arg(long, default_value = ".")]
    image_dir: PathBuf,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        RunConfig {
            input_matrix: args.input_matrix,
            output_file: args.output_file,
            time_interval: args.time_interval,
            iterations: args.n_iterations,
            seed: args.seed,
            history: args.history,
            history_format: args.history_format,
            renderer: args.renderer,
            image_dir: args.image_dir,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::init();

    let config = RunConfig::from(args);
    match simulation::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
