//! Push-side compression stream.

use std::io::{self, Write};
use std::mem::ManuallyDrop;

use ferrobrot_core::{BlockCompressor, Error, StreamState};
use tracing::{debug, trace};

/// A writer that compresses data before pushing it to the inner writer.
///
/// Caller data is copied into the engine's ring buffer in block-sized
/// chunks; compressed output is appended to the sink as the engine emits
/// it. `flush` forces emission of all buffered-but-unemitted compressed
/// data without ending the logical stream, so an interactive consumer can
/// decode everything written so far.
///
/// [`finish`](CompressWriter::finish) or
/// [`close`](CompressWriter::close) terminate the stream and release the
/// engine exactly once; dropping the writer finishes it on a best-effort
/// basis as a secondary guarantee.
pub struct CompressWriter<W: Write, C: BlockCompressor> {
    inner: ManuallyDrop<W>,
    engine: Option<C>,
    state: StreamState,
    failure: Option<Error>,
}

impl<W: Write, C: BlockCompressor> CompressWriter<W, C> {
    /// Create a compressing writer over `inner`.
    pub fn new(inner: W, engine: C) -> Self {
        CompressWriter {
            inner: ManuallyDrop::new(inner),
            engine: Some(engine),
            state: StreamState::Active,
            failure: None,
        }
    }

    /// Get a reference to the inner writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Get a mutable reference to the inner writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Terminate the stream, push the trailing compressed bytes, and
    /// return the inner writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.finalize()?;
        // Safety: self is consumed and forgotten below, so the inner
        // writer is taken exactly once.
        let inner = unsafe { ManuallyDrop::take(&mut self.inner) };
        std::mem::forget(self);
        Ok(inner)
    }

    /// Terminate the stream in place and release the engine. Idempotent;
    /// any write after close fails with a "stream closed" error.
    pub fn close(&mut self) -> io::Result<()> {
        self.finalize()
    }

    fn finalize(&mut self) -> io::Result<()> {
        match self.state {
            StreamState::Closed => return Ok(()),
            StreamState::Failed => {
                // Release without re-driving a failed engine; the stored
                // failure is reported one last time.
                self.engine = None;
                self.state = StreamState::Closed;
                return Err(self.replay_failure());
            }
            _ => {}
        }

        let trailer = match self.engine.as_mut() {
            Some(engine) => engine.step(true, false),
            None => Ok(Vec::new()),
        };
        // The engine is released exactly once, whatever the outcome.
        self.engine = None;
        self.state = StreamState::Closed;

        let trailer = trailer.map_err(io::Error::from)?;
        debug!(trailer_len = trailer.len(), "compress stream closed");
        if !trailer.is_empty() {
            self.inner.write_all(&trailer)?;
        }
        self.inner.flush()
    }

    fn fail(&mut self, error: Error) -> io::Error {
        self.state = StreamState::Failed;
        self.failure = Some(error.clone());
        error.into()
    }

    fn replay_failure(&self) -> io::Error {
        match &self.failure {
            Some(error) => error.clone().into(),
            None => Error::ClosedStream.into(),
        }
    }
}

impl<W: Write, C: BlockCompressor> Write for CompressWriter<W, C> {
    /// Accepts the whole of `buf`: the bytes reported written always
    /// equal the bytes handed in, and a sink failure surfaces
    /// immediately instead of as partial acceptance.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.state {
            StreamState::Closed => return Err(Error::ClosedStream.into()),
            StreamState::Failed => return Err(self.replay_failure()),
            _ => {}
        }

        let block = match self.engine.as_ref() {
            Some(engine) => engine.input_block_size().max(1),
            None => return Err(Error::ClosedStream.into()),
        };

        for chunk in buf.chunks(block) {
            let step = {
                let engine = match self.engine.as_mut() {
                    Some(engine) => engine,
                    None => return Err(Error::ClosedStream.into()),
                };
                engine.copy_input(chunk);
                engine.step(false, false)
            };
            match step {
                Ok(out) => {
                    if !out.is_empty() {
                        self.inner.write_all(&out)?;
                    }
                }
                Err(error) => return Err(self.fail(error)),
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.state {
            StreamState::Closed => return Err(Error::ClosedStream.into()),
            StreamState::Failed => return Err(self.replay_failure()),
            _ => {}
        }

        let step = {
            let engine = match self.engine.as_mut() {
                Some(engine) => engine,
                None => return Err(Error::ClosedStream.into()),
            };
            engine.step(false, true)
        };
        match step {
            Ok(out) => {
                trace!(flushed_len = out.len(), "forced flush");
                if !out.is_empty() {
                    self.inner.write_all(&out)?;
                }
                self.inner.flush()
            }
            Err(error) => Err(self.fail(error)),
        }
    }
}

impl<W: Write, C: BlockCompressor> Drop for CompressWriter<W, C> {
    fn drop(&mut self) {
        let _ = self.finalize();
        // Safety: drop is the only remaining owner of the inner writer.
        unsafe { ManuallyDrop::drop(&mut self.inner) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{ChunkedDecoder, ChunkedEncoder, POISON};
    use ferrobrot_core::BlockDecompressor;

    fn decode_all(compressed: &[u8]) -> Vec<u8> {
        let mut decoder = ChunkedDecoder::new();
        let mut out = vec![0u8; 1024];
        let progress = decoder.step(compressed, &mut out).unwrap();
        assert_eq!(
            progress.status,
            ferrobrot_core::StepStatus::Done,
            "mock stream should be complete"
        );
        out.truncate(progress.produced);
        out
    }

    #[test]
    fn test_write_and_finish_roundtrip() {
        let mut writer = CompressWriter::new(Vec::new(), ChunkedEncoder::new(8));
        writer.write_all(b"compress me in several blocks").unwrap();
        let sink = writer.finish().unwrap();

        assert_eq!(decode_all(&sink), b"compress me in several blocks");
    }

    #[test]
    fn test_plain_writes_keep_partial_block_buffered() {
        let mut writer = CompressWriter::new(Vec::new(), ChunkedEncoder::new(16));
        writer.write_all(b"short").unwrap();
        // Less than one block: nothing reaches the sink yet.
        assert!(writer.get_ref().is_empty());

        writer.flush().unwrap();
        assert!(!writer.get_ref().is_empty());
    }

    #[test]
    fn test_flush_makes_written_data_decodable() {
        let mut writer = CompressWriter::new(Vec::new(), ChunkedEncoder::new(8));
        writer.write_all(b"flushed prefix").unwrap();
        writer.flush().unwrap();

        // The sink prefix decodes to everything written so far even
        // though the stream is still open.
        let mut decoder = ChunkedDecoder::new();
        let mut out = vec![0u8; 64];
        let progress = decoder.step(writer.get_ref(), &mut out).unwrap();
        assert_eq!(&out[..progress.produced], b"flushed prefix");
    }

    #[test]
    fn test_flush_of_empty_buffer_is_harmless() {
        let mut writer = CompressWriter::new(Vec::new(), ChunkedEncoder::new(8));
        writer.write_all(b"eightby!").unwrap();
        let emitted = writer.get_ref().len();

        writer.flush().unwrap();
        writer.flush().unwrap();
        assert_eq!(writer.get_ref().len(), emitted);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut writer = CompressWriter::new(Vec::new(), ChunkedEncoder::new(8));
        writer.write_all(b"data").unwrap();
        writer.close().unwrap();
        writer.close().unwrap();
    }

    #[test]
    fn test_write_after_close_fails() {
        let mut writer = CompressWriter::new(Vec::new(), ChunkedEncoder::new(8));
        writer.close().unwrap();

        let err = writer.write(b"late").unwrap_err();
        assert!(err.to_string().contains("closed"));
        let err = writer.flush().unwrap_err();
        assert!(err.to_string().contains("closed"));
    }

    #[test]
    fn test_write_reports_full_acceptance() {
        let mut writer = CompressWriter::new(Vec::new(), ChunkedEncoder::new(4));
        let n = writer.write(b"a longer buffer spanning many blocks").unwrap();
        assert_eq!(n, 36);
    }

    #[test]
    fn test_engine_failure_is_sticky() {
        let mut writer = CompressWriter::new(Vec::new(), ChunkedEncoder::new(4));
        let err = writer.write(&[b'a', POISON, b'b', b'c']).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        let err = writer.write(b"fine").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_sink_error_surfaces_immediately() {
        struct FailingSink;

        impl Write for FailingSink {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink gone"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut writer = CompressWriter::new(FailingSink, ChunkedEncoder::new(2));
        let err = writer.write(b"abcd").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_drop_finishes_stream() {
        let mut sink = Vec::new();
        {
            let mut writer = CompressWriter::new(&mut sink, ChunkedEncoder::new(8));
            writer.write_all(b"dropped without finish").unwrap();
        }
        assert_eq!(decode_all(&sink), b"dropped without finish");
    }

    #[test]
    fn test_finish_returns_inner_writer() {
        let mut writer = CompressWriter::new(Vec::new(), ChunkedEncoder::new(8));
        writer.write_all(b"hand the sink back").unwrap();
        let sink = writer.finish().unwrap();
        assert_eq!(decode_all(&sink), b"hand the sink back");
    }

    #[test]
    fn test_empty_stream_still_terminated() {
        let writer = CompressWriter::new(Vec::new(), ChunkedEncoder::new(8));
        let sink = writer.finish().unwrap();
        assert_eq!(decode_all(&sink), b"");
    }
}
