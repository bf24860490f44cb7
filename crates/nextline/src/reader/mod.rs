mod accumulate;
mod split;


use bstr::{BStr, BString, ByteSlice};
use tracing::{debug, trace};

use crate::{Handle, ReadLineError, ReaderOptions, Source, store::SavedBuffers};

/// Reads one line per call from any handle of a [`Source`], keeping per-handle
/// leftovers between calls.
///
/// The reader owns the bytes it has read ahead for every handle. Lines are
/// handed out as owned [`BString`]s. Handles themselves are never opened or
/// closed.
///
/// # Examples
///
/// ```rust
/// use nextline::{LineReader, ReaderOptions};
///
/// let mut reader = LineReader::new(vec![&b"abc\ndef\n"[..]], ReaderOptions::default());
/// let lines: Vec<_> = reader.lines(0).collect();
/// assert_eq!(lines, ["abc\n", "def\n"]);
/// ```
#[derive(Debug)]
pub struct LineReader<S> {
    source: S,
    store: SavedBuffers,
    options: ReaderOptions,
}

impl<S: Source> LineReader<S> {
    /// Create a reader that pulls bytes from `source`.
    #[must_use]
    pub fn new(source: S, options: ReaderOptions) -> Self {
        Self {
            source,
            store: SavedBuffers::new(options.capacity),
            options,
        }
    }

    /// Return the next line of `handle`, terminator included.
    ///
    /// The last line of a stream that does not end with the terminator is
    /// returned without one. `None` means there is no line: the stream is
    /// exhausted, the handle is out of range, a read failed, or memory ran
    /// out. Use [`try_next_line`](Self::try_next_line) to tell these apart.
    pub fn next_line(&mut self, handle: Handle) -> Option<BString> {
        match self.try_next_line(handle) {
            Ok(line) => line,
            Err(err) => {
                debug!(handle, error = %err, "no line");
                None
            }
        }
    }

    /// Return the next line of `handle`, reporting why none could be read.
    ///
    /// `Ok(None)` means the stream is exhausted and nothing is buffered.
    ///
    /// # Errors
    ///
    /// - [`ReadLineError::InvalidHandle`] if `handle` is negative or not
    ///   below the configured capacity. No state is touched.
    /// - [`ReadLineError::Io`] if the source fails to read.
    /// - [`ReadLineError::OutOfMemory`] if a chunk or the line cannot be
    ///   allocated.
    ///
    /// Read and allocation failures release the bytes saved for `handle`.
    pub fn try_next_line(&mut self, handle: Handle) -> Result<Option<BString>, ReadLineError> {
        if !self.store.admits(handle) {
            return Err(ReadLineError::InvalidHandle {
                handle,
                capacity: self.store.capacity(),
            });
        }

        let terminator = self.options.terminator;
        let mut saved = self.store.take(handle).unwrap_or_default();

        if saved.find_byte(terminator).is_none() {
            let filled = accumulate::fill(
                &mut self.source,
                handle,
                &mut saved,
                self.options.chunk_size.get(),
                terminator,
            );
            if let Err(err) = filled {
                debug!(handle, released = saved.len(), "read failed, releasing saved bytes");
                return Err(err);
            }
        }

        if saved.is_empty() {
            trace!(handle, "end of stream");
            return Ok(None);
        }

        let line = match split::extract(&saved, terminator) {
            Ok(line) => line,
            Err(err) => {
                debug!(handle, released = saved.len(), "line allocation failed, releasing saved bytes");
                return Err(err.into());
            }
        };

        if let Some(rest) = split::remainder(saved, line.len(), self.options.chunk_size.get()) {
            self.store.put(handle, rest);
        }
        trace!(
            handle,
            len = line.len(),
            buffered = self.store.get(handle).map_or(0, <[u8]>::len),
            "line"
        );

        Ok(Some(line))
    }

    /// Iterate over the remaining lines of `handle`.
    ///
    /// The iterator stops at the first call that yields no line.
    pub fn lines(&mut self, handle: Handle) -> Lines<'_, S> {
        Lines {
            reader: self,
            handle,
        }
    }
}

impl<S> LineReader<S> {
    /// Drop and return the bytes saved for `handle`.
    ///
    /// Call this before closing a handle that was not read to the end, so the
    /// reader does not hold on to its leftovers.
    pub fn discard(&mut self, handle: Handle) -> Option<BString> {
        self.store.take(handle).map(BString::from)
    }

    /// The bytes read ahead for `handle` that no line has returned yet.
    #[must_use]
    pub fn buffered(&self, handle: Handle) -> Option<&BStr> {
        self.store.get(handle).map(BStr::new)
    }

    /// Number of handles currently holding saved bytes.
    #[must_use]
    pub fn tracked(&self) -> usize {
        self.store.len()
    }

    /// The options this reader was created with.
    #[must_use]
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Borrow the underlying source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutably borrow the underlying source.
    ///
    /// Reading from the source directly skips over bytes the reader may
    /// already have saved for that handle.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consume the reader, dropping all saved bytes, and return the source.
    #[must_use]
    pub fn into_source(self) -> S {
        self.source
    }
}

/// Iterator over the lines of one handle, created by
/// [`LineReader::lines`].
#[derive(Debug)]
pub struct Lines<'a, S> {
    reader: &'a mut LineReader<S>,
    handle: Handle,
}

impl<S: Source> Iterator for Lines<'_, S> {
    type Item = BString;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.next_line(self.handle)
    }
}
