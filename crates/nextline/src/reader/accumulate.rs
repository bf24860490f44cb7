use std::io;

use bstr::ByteSlice;
use tracing::trace;

use crate::{Handle, ReadLineError, Source};

/// Appends chunks read from `handle` to `saved` until a chunk carries the
/// terminator or the stream ends.
///
/// Each iteration issues exactly one successful read of at most `chunk_size`
/// bytes and appends exactly the bytes it reported. On error `saved` is left
/// holding only what it held before the failing read; the caller is expected
/// to drop it.
pub(super) fn fill<S: Source + ?Sized>(
    source: &mut S,
    handle: Handle,
    saved: &mut Vec<u8>,
    chunk_size: usize,
    terminator: u8,
) -> Result<(), ReadLineError> {
    loop {
        let start = saved.len();
        saved.try_reserve(chunk_size)?;
        saved.resize(start + chunk_size, 0);

        let read = loop {
            match source.read(handle, &mut saved[start..]) {
                Ok(read) => break read,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => {
                    saved.truncate(start);
                    return Err(err.into());
                }
            }
        };
        debug_assert!(read <= chunk_size, "source reported more bytes than requested");
        saved.truncate(start + read.min(chunk_size));
        trace!(handle, read, buffered = saved.len(), "read chunk");

        if read == 0 || saved[start..].find_byte(terminator).is_some() {
            return Ok(());
        }
    }
}
