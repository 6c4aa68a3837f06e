//! # Ferrobrot
//!
//! Streaming Brotli compression for Rust: byte-stream adapters and
//! one-shot buffer calls over a stateful block engine.
//!
//! The engine works in pre-sized buffers and explicit progress signals;
//! this crate exposes it two ways that share one contract:
//!
//! - **Streaming** — [`reader`] wraps any `std::io::Read` source in a
//!   decompressing [`BrotliReader`]; [`writer`] wraps any
//!   `std::io::Write` sink in a compressing [`BrotliWriter`] with
//!   explicit flush and close semantics.
//! - **One-shot** — [`compress`] and [`decompress`] drive the engine over
//!   a whole buffer, sizing output from a heuristic bound and growing by
//!   doubling when the guess falls short.
//!
//! ## Example
//!
//! ```
//! use std::io::Read;
//!
//! use ferrobrot::BrotliParams;
//!
//! let params = BrotliParams::new().with_quality(9);
//! let compressed = ferrobrot::compress(&params, b"Hello, Brotli!").unwrap();
//!
//! let mut reader = ferrobrot::reader(compressed.as_slice());
//! let mut restored = Vec::new();
//! reader.read_to_end(&mut restored).unwrap();
//! assert_eq!(restored, b"Hello, Brotli!");
//! ```

use std::io::{Read, Write};

mod oneshot;

pub use ferrobrot_core::{
    sizing, BlockCompressor, BlockDecompressor, BrotliParams, Error, Mode, Result, StepProgress,
    StepStatus, StreamState,
};
pub use ferrobrot_engine::{
    decoded_size_hint, BrotliBlockCompressor, BrotliBlockDecompressor, SharedDictionary,
    DICTIONARY_SIZE,
};
pub use ferrobrot_stream::{CompressWriter, DecompressReader, StreamBuffer, DEFAULT_BUFFER_SIZE};

pub use oneshot::{compress, compress_with_hint, decompress, decompress_with_hint};

/// Decompressing reader over the production engine.
pub type BrotliReader<R> = DecompressReader<R, BrotliBlockDecompressor>;

/// Compressing writer over the production engine.
pub type BrotliWriter<W> = CompressWriter<W, BrotliBlockCompressor>;

/// Wrap `source` in a decompressing reader with the default re-buffer
/// size.
pub fn reader<R: Read>(source: R) -> BrotliReader<R> {
    DecompressReader::new(source, BrotliBlockDecompressor::new())
}

/// Wrap `source` in a decompressing reader with the given re-buffer
/// size.
pub fn reader_with_buffer_size<R: Read>(source: R, buffer_size: usize) -> BrotliReader<R> {
    DecompressReader::with_buffer_size(source, BrotliBlockDecompressor::new(), buffer_size)
}

/// Wrap `sink` in a compressing writer using `params`.
pub fn writer<W: Write>(sink: W, params: &BrotliParams) -> BrotliWriter<W> {
    CompressWriter::new(sink, BrotliBlockCompressor::new(params))
}
