//! Stable error codes surfaced to the CLI and logs.

/// Every subsystem error maps onto one of the codes below.
pub trait CoarsenErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const UNKNOWN_NAME: &str = "UNKNOWN_NAME";
pub const GRAPH_ERROR: &str = "GRAPH_ERROR";
pub const MATCHING_ERROR: &str = "MATCHING_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
