//! # Ferrobrot Core
//!
//! Engine contract, parameters, and sizing heuristics for the Ferrobrot
//! streaming compression codec.
//!
//! The block engine itself is an external collaborator: a stateful,
//! block-structured compressor/decompressor that works in pre-sized
//! buffers and explicit progress signals rather than byte streams. This
//! crate pins down that contract ([`BlockCompressor`],
//! [`BlockDecompressor`], [`StepStatus`]) together with the immutable
//! [`BrotliParams`] configuration and the buffer sizing strategy shared
//! by the one-shot and streaming call paths.
//!
//! ## Example
//!
//! ```ignore
//! use ferrobrot_core::{BrotliParams, sizing};
//!
//! let params = BrotliParams::new().with_quality(9).with_lgwin(20);
//! let estimate = sizing::max_compressed_size(&params, data.len());
//! ```

pub mod engine;
pub mod error;
pub mod params;
pub mod sizing;
pub mod stream;

pub use engine::{BlockCompressor, BlockDecompressor, StepProgress, StepStatus};
pub use error::{Error, Result};
pub use params::{BrotliParams, Mode};
pub use stream::StreamState;
