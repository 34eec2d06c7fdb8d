//! End-to-end run: load → coarsen → write artifacts → timing.

use std::path::PathBuf;

use chrono::Local;
use coarsen_core::config::RunOptions;
use coarsen_core::errors::CoarsenResult;
use coarsen_engine::HierarchyController;

use crate::artifacts::write_hierarchy;
use crate::loader::load;
use crate::paths::OutputPaths;
use crate::timing::Timing;
use crate::writers::create_writer;

/// What a run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub seed: u64,
    pub rounds: usize,
    pub final_levels: Vec<u32>,
    pub final_layer_sizes: Vec<usize>,
    /// Artifact files in write order (coarsest level first).
    pub written: Vec<PathBuf>,
    pub timing: Timing,
}

/// Run the whole pipeline for already-validated options.
pub fn run(options: &RunOptions) -> CoarsenResult<RunSummary> {
    let controller = HierarchyController::new(options.coarsening.clone())?;
    let paths = OutputPaths::resolve(&options.input.filename, &options.output, Local::now());
    paths.ensure_directory()?;

    let mut timing = Timing::new();
    let graph = timing.time("Load", || {
        load(&options.input.filename, &options.coarsening.layer_sizes)
    })?;
    let hierarchy = timing.time("Coarsening", || controller.run(graph))?;

    let writer = create_writer(options.output.format);
    let written = timing.time("Save", || {
        write_hierarchy(&paths, hierarchy.snapshots(), writer.as_ref())
    })?;

    if options.output.show_timing {
        print!("{}", timing.render_table());
    }
    if options.output.save_timing_csv {
        timing.save_csv(&paths.file(".timing.csv"))?;
    }
    if options.output.save_timing_json {
        timing.save_json(&paths.file(".timing.json"))?;
    }

    let last = hierarchy.final_graph();
    tracing::info!(
        seed = hierarchy.seed(),
        rounds = hierarchy.rounds(),
        files = written.len(),
        directory = %paths.directory.display(),
        "run complete"
    );
    Ok(RunSummary {
        seed: hierarchy.seed(),
        rounds: hierarchy.rounds(),
        final_levels: last.levels().to_vec(),
        final_layer_sizes: last.layer_sizes().to_vec(),
        written,
        timing,
    })
}
