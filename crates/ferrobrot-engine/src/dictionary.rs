//! Built-in dictionary state.
//!
//! The engine ships a static dictionary table consulted by both the
//! encoder and the decoder. It is process-wide, read-only after
//! initialization, and safe for concurrent use by unrelated codec
//! instances; there is no teardown.

use std::sync::OnceLock;

use brotli_decompressor::dictionary::kBrotliDictionary;

/// Size in bytes of the built-in dictionary table.
pub const DICTIONARY_SIZE: usize = 122_784;

static SHARED: OnceLock<SharedDictionary> = OnceLock::new();

/// Read-only view of the built-in dictionary.
#[derive(Debug)]
pub struct SharedDictionary {
    data: &'static [u8],
}

impl SharedDictionary {
    /// Get the process-wide dictionary, initializing it on first use.
    pub fn get() -> &'static SharedDictionary {
        SHARED.get_or_init(|| SharedDictionary {
            data: &kBrotliDictionary[..],
        })
    }

    /// The raw dictionary bytes.
    pub fn as_bytes(&self) -> &'static [u8] {
        self.data
    }

    /// Dictionary length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// A dictionary is never empty; present for slice-like completeness.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
