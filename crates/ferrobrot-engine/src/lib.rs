//! # Ferrobrot Engine
//!
//! Production block-engine backend for the Ferrobrot streaming codec,
//! implemented over the pure-Rust `brotli` crate's low-level streaming
//! entry points.
//!
//! The handles here implement the contracts from `ferrobrot-core`:
//!
//! - [`BrotliBlockCompressor`] — stateful encoder handle with an input
//!   staging area and block-granular output steps
//! - [`BrotliBlockDecompressor`] — stateful decoder handle answering each
//!   step with done / needs-more-input / needs-more-output
//!
//! Handles are exclusively owned by their stream adapter and released on
//! close or drop. The [`dictionary`] module exposes the process-wide
//! built-in dictionary table.
//!
//! ## Example
//!
//! ```ignore
//! use ferrobrot_core::{BlockCompressor, BrotliParams};
//! use ferrobrot_engine::BrotliBlockCompressor;
//!
//! let mut compressor = BrotliBlockCompressor::new(&BrotliParams::new());
//! compressor.copy_input(data);
//! let compressed = compressor.step(true, false)?;
//! ```

pub mod decoder;
pub mod dictionary;
pub mod encoder;

pub use decoder::{decoded_size_hint, BrotliBlockDecompressor};
pub use dictionary::{SharedDictionary, DICTIONARY_SIZE};
pub use encoder::BrotliBlockCompressor;
