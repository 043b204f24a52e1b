use crate::MAX_SEQUENCE_LENGTH;

/// Errors reported by sequence validation, index construction and the driver.
///
/// Invalid inputs and index build failures are fatal for the run. The driver
/// never produces partial anchor output for a reference that failed to index.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("at least two sequences are required (a reference and one query)")]
    TooFewSequences,

    #[error("sequence {name} is empty")]
    EmptySequence { name: String },

    #[error(
        "sequence {name} is {len} bases long, the maximum supported length is {MAX_SEQUENCE_LENGTH}"
    )]
    SequenceTooLong { name: String, len: usize },

    #[error("failed to allocate memory for the index")]
    AllocationFailed,

    #[error("suffix array construction failed: {0}")]
    IndexBuildFailed(String),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
