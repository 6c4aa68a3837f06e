//! Error types for codec operations.

use std::io;

use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Codec error types.
#[derive(Debug, Error)]
pub enum Error {
    /// The block engine reported a failure. The engine is opaque, so the
    /// failure is not decomposed further.
    #[error("engine error: {message}")]
    Engine { message: String },

    /// The upstream source ended while the engine still expected input.
    ///
    /// Distinguished from clean completion so callers can tell "valid data,
    /// fully consumed" apart from "data corrupted or cut off".
    #[error("stream ended before decoding completed ({bytes_read} bytes read)")]
    TruncatedStream { bytes_read: usize },

    /// The destination had no remaining capacity while the engine needed
    /// more output space.
    #[error("destination buffer too small: need more than {provided} bytes")]
    UndersizedBuffer { provided: usize },

    /// Operation attempted after the stream was closed.
    #[error("stream closed")]
    ClosedStream,

    /// I/O error from the underlying source or sink, propagated verbatim.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create an opaque engine error.
    pub fn engine(message: impl Into<String>) -> Self {
        Error::Engine {
            message: message.into(),
        }
    }

    /// Create a truncated stream error.
    pub fn truncated(bytes_read: usize) -> Self {
        Error::TruncatedStream { bytes_read }
    }

    /// Create an undersized destination error.
    pub fn undersized(provided: usize) -> Self {
        Error::UndersizedBuffer { provided }
    }

    /// Check if this error indicates corrupt or incomplete input rather
    /// than a caller mistake.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Error::Engine { .. } | Error::TruncatedStream { .. }
        )
    }
}

// Adapters latch the first failure and report it on every subsequent call,
// so the stored error must be reproducible.
impl Clone for Error {
    fn clone(&self) -> Self {
        match self {
            Error::Engine { message } => Error::Engine {
                message: message.clone(),
            },
            Error::TruncatedStream { bytes_read } => Error::TruncatedStream {
                bytes_read: *bytes_read,
            },
            Error::UndersizedBuffer { provided } => Error::UndersizedBuffer {
                provided: *provided,
            },
            Error::ClosedStream => Error::ClosedStream,
            Error::Io(e) => Error::Io(io::Error::new(e.kind(), e.to_string())),
        }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> io::Error {
        match err {
            Error::Io(e) => e,
            Error::TruncatedStream { .. } => {
                io::Error::new(io::ErrorKind::UnexpectedEof, err.to_string())
            }
            Error::Engine { .. } => io::Error::new(io::ErrorKind::InvalidData, err.to_string()),
            Error::UndersizedBuffer { .. } => {
                io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
            }
            Error::ClosedStream => io::Error::other(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_maps_to_unexpected_eof() {
        let io_err: io::Error = Error::truncated(12).into();
        assert_eq!(io_err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_engine_maps_to_invalid_data() {
        let io_err: io::Error = Error::engine("bad bit stream").into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_io_error_passes_through() {
        let inner = io::Error::new(io::ErrorKind::BrokenPipe, "pipe gone");
        let io_err: io::Error = Error::Io(inner).into();
        assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_clone_preserves_io_kind() {
        let err = Error::Io(io::Error::new(io::ErrorKind::BrokenPipe, "pipe gone"));
        match err.clone() {
            Error::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected clone: {other:?}"),
        }
    }
}
