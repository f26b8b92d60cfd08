//! Error types for sequence output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error returned while setting up or writing the term stream.
///
/// Every variant is fatal: the stream either completes and flushes in full
/// or the process gives up with no partial-output guarantee.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConipError {
    /// The named output destination could not be created.
    #[error("cannot create output file {}: {source}", .path.display())]
    CreateOutput {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// An I/O error occurred while writing or flushing the stream.
    #[error("write error: {0}")]
    Io(
        #[from]
        #[source]
        io::Error,
    ),

    /// The requested output buffer size is not a positive byte count.
    #[error("invalid output buffer size {0}: must be positive")]
    InvalidBufferSize(usize),
}
