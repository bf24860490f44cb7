use std::io;

/// Identifies an open, readable byte stream.
///
/// Handles have the width of a POSIX file descriptor. They are supplied by
/// the caller and never opened or closed by this crate.
pub type Handle = i32;

/// A byte-oriented read primitive addressed by handle.
///
/// `read` follows the contract of [`io::Read::read`]: it returns the number of
/// bytes written into `buf`, `0` at end-of-stream, or an error.
pub trait Source {
    /// Read up to `buf.len()` bytes from the stream behind `handle`.
    ///
    /// # Errors
    ///
    /// Returns any error reported by the underlying stream, or an error of
    /// kind [`io::ErrorKind::NotFound`] when the source has no stream for
    /// `handle`.
    fn read(&mut self, handle: Handle, buf: &mut [u8]) -> io::Result<usize>;
}

impl<S: Source + ?Sized> Source for &mut S {
    fn read(&mut self, handle: Handle, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read(handle, buf)
    }
}

/// Handle `i` reads from element `i`.
impl<R: io::Read> Source for Vec<R> {
    fn read(&mut self, handle: Handle, buf: &mut [u8]) -> io::Result<usize> {
        let stream = usize::try_from(handle)
            .ok()
            .and_then(|index| self.get_mut(index))
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("no stream for handle {handle}"))
            })?;
        stream.read(buf)
    }
}

/// Reads raw POSIX file descriptors with `read(2)`.
///
/// The descriptor is borrowed for the duration of each call only; whoever
/// opened it stays responsible for closing it.
///
/// ```rust,no_run
/// use std::{fs::File, os::fd::AsRawFd};
///
/// use nextline::{FdSource, LineReader, ReaderOptions};
///
/// let file = File::open("/etc/hosts")?;
/// let mut reader = LineReader::new(FdSource, ReaderOptions::default());
/// while let Some(line) = reader.next_line(file.as_raw_fd()) {
///     print!("{line}");
/// }
/// # Ok::<(), std::io::Error>(())
/// ```
#[cfg(all(unix, feature = "fd"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct FdSource;

#[cfg(all(unix, feature = "fd"))]
impl Source for FdSource {
    fn read(&mut self, handle: Handle, buf: &mut [u8]) -> io::Result<usize> {
        // SAFETY: `buf` is a live, exclusively borrowed region of exactly
        // `buf.len()` bytes. An invalid descriptor makes read(2) fail with
        // EBADF rather than touch memory.
        let n = unsafe { libc::read(handle, buf.as_mut_ptr().cast(), buf.len()) };
        // A negative return is the only failure signal; errno holds the cause.
        usize::try_from(n).map_err(|_| io::Error::last_os_error())
    }
}
