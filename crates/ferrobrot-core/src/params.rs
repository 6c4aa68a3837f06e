//! Compression parameters.
//!
//! A [`BrotliParams`] value is consumed when a compressor or decompressor
//! handle is created and is never mutated afterwards; changing parameters
//! requires creating a new handle.

use crate::sizing;

/// Content hint handed to the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// The compressor does not know anything in advance about the
    /// properties of the input.
    #[default]
    Generic,

    /// Input is UTF-8 formatted text.
    Text,

    /// Input is WOFF 2.0 font data.
    Font,
}

/// Immutable encoder/decoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrotliParams {
    mode: Mode,
    quality: u32,
    lgwin: u32,
    lgblock: u32,
}

impl BrotliParams {
    /// Create parameters with the default settings: generic mode,
    /// quality 11, 4 MB window, automatic block size.
    pub fn new() -> Self {
        BrotliParams {
            mode: Mode::Generic,
            quality: sizing::MAX_QUALITY,
            lgwin: 22,
            lgblock: 0,
        }
    }

    /// Set the content mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the quality. Controls the compression-speed vs
    /// compression-density tradeoff; the higher the quality, the slower
    /// the compression. Clamped to `[0, 11]`.
    pub fn with_quality(mut self, quality: u32) -> Self {
        self.quality = quality.min(sizing::MAX_QUALITY);
        self
    }

    /// Set the base-2 logarithm of the sliding window size.
    /// Clamped to `[10, 24]`.
    pub fn with_lgwin(mut self, lgwin: u32) -> Self {
        self.lgwin = lgwin.clamp(sizing::MIN_WINDOW_BITS, sizing::MAX_WINDOW_BITS);
        self
    }

    /// Set the base-2 logarithm of the maximum input block size.
    /// Clamped to `[16, 24]`; `0` keeps the automatic setting derived
    /// from quality and window size.
    pub fn with_lgblock(mut self, lgblock: u32) -> Self {
        self.lgblock = if lgblock == 0 {
            0
        } else {
            lgblock.clamp(sizing::MIN_BLOCK_BITS, sizing::MAX_BLOCK_BITS)
        };
        self
    }

    /// Get the content mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Get the quality.
    pub fn quality(&self) -> u32 {
        self.quality
    }

    /// Get the window size log2.
    pub fn lgwin(&self) -> u32 {
        self.lgwin
    }

    /// Get the configured block size log2 (`0` = automatic).
    pub fn lgblock(&self) -> u32 {
        self.lgblock
    }
}

impl Default for BrotliParams {
    fn default() -> Self {
        Self::new()
    }
}
