use thiserror::Error;

/// Configuration validation failures.
///
/// Construction is the only fallible operation in the engine: every runtime
/// operation models "errors" as silently rejected moves or no-ops instead.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board dimensions must be positive")]
    InvalidDimensions,
    #[error("seed rows exceed board height")]
    SeedRowsOutOfRange,
    #[error("probability `{0}` must lie in [0, 1]")]
    InvalidProbability(&'static str),
    #[error("fall interval must be positive and not below its floor")]
    InvalidFallInterval,
}

pub type Result<T> = core::result::Result<T, ConfigError>;
