//! Output errors.

use std::io;
use std::path::PathBuf;

/// Error returned when a stylesheet cannot be written or a formatter profile
/// cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// Reading or writing a file (or creating its directory) failed.
    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Writing to a caller-supplied sink failed.
    #[error("failed to write stylesheet: {0}")]
    Sink(#[from] io::Error),
    /// A formatter profile could not be parsed.
    #[error("invalid formatter profile: {0}")]
    Profile(#[from] serde_yaml::Error),
}
