//! Staging buffer for upstream bytes.

use std::io::{self, Read};

/// Fixed-capacity staging buffer between an upstream byte source and the
/// block engine.
///
/// The engine is only ever fed from this buffer, never directly from the
/// upstream source: a pending "needs more output" answer must be resumed
/// with the same unconsumed bytes, so staged data has to survive across
/// reads without touching upstream. Callers refill only once the staged
/// data has been drained.
#[derive(Debug)]
pub struct StreamBuffer {
    data: Vec<u8>,
    /// Read cursor into `data`.
    start: usize,
    /// End of valid data in `data`.
    end: usize,
}

impl StreamBuffer {
    /// Create a buffer with the given fixed capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        StreamBuffer {
            data: vec![0u8; capacity.max(1)],
            start: 0,
            end: 0,
        }
    }

    /// The buffer capacity in bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Number of staged bytes not yet consumed.
    #[inline]
    pub fn available(&self) -> usize {
        self.end - self.start
    }

    /// Check if all staged bytes have been consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The staged bytes not yet consumed.
    #[inline]
    pub fn readable(&self) -> &[u8] {
        &self.data[self.start..self.end]
    }

    /// Mark `n` staged bytes as consumed.
    #[inline]
    pub fn consume(&mut self, n: usize) {
        self.start = (self.start + n).min(self.end);
    }

    /// Drop all staged bytes.
    #[inline]
    pub fn clear(&mut self) {
        self.start = 0;
        self.end = 0;
    }

    /// Refill from `source`, compacting unconsumed bytes to the front
    /// first. Returns the number of bytes read; zero means the source
    /// reached end of data.
    pub fn fill_from<R: Read>(&mut self, source: &mut R) -> io::Result<usize> {
        if self.start > 0 {
            let available = self.available();
            if available > 0 {
                self.data.copy_within(self.start..self.end, 0);
            }
            self.start = 0;
            self.end = available;
        }

        loop {
            match source.read(&mut self.data[self.end..]) {
                Ok(n) => {
                    self.end += n;
                    return Ok(n);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}
