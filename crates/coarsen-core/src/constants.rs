/// Crate version, written into serialized graph headers.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default per-layer reduction factor.
pub const DEFAULT_REDUCTION_FACTOR: f64 = 0.5;

/// Default per-layer number of contraction rounds.
pub const DEFAULT_MAX_LEVELS: u32 = 3;

/// Default project config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "coarsen.toml";

/// Suffix appended to the input file stem when no output prefix is given.
pub const DEFAULT_PREFIX_SUFFIX: &str = "_coarsened_";

/// Separator between level counters in artifact file names (`1-0`).
pub const LEVEL_KEY_SEPARATOR: &str = "-";

/// Absolute tolerance used when flooring `reduction_factor * n`.
pub const BUDGET_EPSILON: f64 = 1e-9;
