//! Resumable, line-at-a-time reading from integer-addressed byte streams.
//!
//! A [`LineReader`] returns one line per call for a given handle, keeping the
//! bytes it read past the end of that line so the next call picks up where
//! the previous one stopped. Any number of handles may be read in an
//! interleaved fashion; each has its own saved buffer.
//!
//! ```rust
//! use nextline::{LineReader, ReaderOptions};
//!
//! let streams = vec![&b"abc\ndef"[..], &b"one\n"[..]];
//! let mut reader = LineReader::new(streams, ReaderOptions::default());
//!
//! assert_eq!(reader.next_line(0).unwrap(), "abc\n");
//! assert_eq!(reader.next_line(1).unwrap(), "one\n");
//! assert_eq!(reader.next_line(0).unwrap(), "def");
//! assert_eq!(reader.next_line(0), None);
//! assert_eq!(reader.next_line(1), None);
//! ```

mod error;
mod options;
mod reader;
mod source;
mod store;

#[cfg(test)]
mod tests;

pub use bstr::{BStr, BString};
pub use error::ReadLineError;
pub use options::{DEFAULT_CAPACITY, DEFAULT_CHUNK_SIZE, ReaderOptions};
pub use reader::{LineReader, Lines};
#[cfg(all(unix, feature = "fd"))]
pub use source::FdSource;
pub use source::{Handle, Source};
