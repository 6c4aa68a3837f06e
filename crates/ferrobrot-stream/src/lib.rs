//! # Ferrobrot Stream
//!
//! Byte-stream adapters over the Ferrobrot block-engine contract.
//!
//! The block engine works in pre-sized buffers and explicit progress
//! signals; the adapters here bridge that to sequential byte I/O:
//!
//! - [`DecompressReader`] — pull interface (`std::io::Read`) that
//!   incrementally decodes from an upstream byte source
//! - [`CompressWriter`] — push interface (`std::io::Write`) with
//!   explicit flush and close/finish semantics
//!
//! Each adapter exclusively owns its engine handle and releases it
//! deterministically on close, finish, or drop. Adapters are synchronous
//! and single-threaded; wiring a compressing writer to a decompressing
//! reader through a pipe is the caller's choice and imposes nothing
//! beyond ordinary pipe semantics.
//!
//! ## Example
//!
//! ```ignore
//! use ferrobrot_stream::CompressWriter;
//! use ferrobrot_engine::BrotliBlockCompressor;
//! use std::io::Write;
//!
//! let file = File::create("output.br")?;
//! let mut writer = CompressWriter::new(file, BrotliBlockCompressor::new(&params));
//! writer.write_all(b"Hello, compression!")?;
//! writer.finish()?;
//! ```

mod buffer;
mod reader;
mod writer;

#[cfg(test)]
pub(crate) mod testutil;

pub use buffer::StreamBuffer;
pub use reader::DecompressReader;
pub use writer::CompressWriter;

/// Default re-buffer size for streaming operations (64 KB).
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;
