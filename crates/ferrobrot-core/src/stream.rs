//! Stream adapter state tracking.

/// Lifecycle state of a stream adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamState {
    /// Stream open and usable.
    #[default]
    Active,

    /// The engine reported completion; further reads yield end of stream.
    Finished,

    /// A failure was latched; every subsequent operation reports it.
    Failed,

    /// The stream was closed and its engine resources released.
    Closed,
}

impl StreamState {
    /// Check if the stream is in a terminal state.
    pub fn is_terminal(self) -> bool {
        !matches!(self, StreamState::Active)
    }

    /// Check if the stream can still move data.
    pub fn is_active(self) -> bool {
        matches!(self, StreamState::Active)
    }
}
