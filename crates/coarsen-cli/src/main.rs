//! coarsen: multilevel coarsening of k-partite networks.
//!
//! ```bash
//! # Contract layer 0 of a bipartite graph once, heavy-edge matching
//! coarsen -f graph.ncol -v 4 3 -r 1.0 1.0 -m 1 1 -l 0
//!
//! # Keep every level, gml output, reproducible random matching
//! coarsen -f graph.ncol -v 1000 500 -c rm --seed 7 --save_hierarchy -e gml
//! ```

mod args;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use coarsen_core::errors::{CoarsenErrorCode, CoarsenResult};
use coarsen_core::{tracing_setup, CoarsenConfig};

use args::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_setup::init(&cli.log_level);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(code = err.error_code(), "run failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> CoarsenResult<()> {
    let overrides = cli.overrides();
    let config = CoarsenConfig::load(Path::new("."), cli.config.as_deref(), Some(&overrides))?;
    if cli.dump_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }
    let options = config.resolve()?;
    let summary = coarsen_io::run(&options)?;
    tracing::info!(
        seed = summary.seed,
        rounds = summary.rounds,
        levels = ?summary.final_levels,
        layer_sizes = ?summary.final_layer_sizes,
        "done"
    );
    Ok(())
}
