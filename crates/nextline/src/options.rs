use core::num::NonZeroUsize;

/// Number of bytes requested from the source per read call, unless
/// configured otherwise.
pub const DEFAULT_CHUNK_SIZE: NonZeroUsize = NonZeroUsize::new(4096).unwrap();

/// Number of handles (`0..DEFAULT_CAPACITY`) a reader tracks by default.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Configuration options for a [`LineReader`](crate::LineReader).
///
/// # Examples
///
/// ```rust
/// use core::num::NonZeroUsize;
/// use nextline::{LineReader, ReaderOptions};
///
/// let options = ReaderOptions {
///     chunk_size: NonZeroUsize::new(1).unwrap(),
///     capacity: None,
///     ..Default::default()
/// };
/// let mut reader = LineReader::new(vec![&b"a\r\nb"[..]], options);
/// assert_eq!(reader.next_line(0).unwrap(), "a\r\n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReaderOptions {
    /// How many bytes to request from the source in a single read.
    ///
    /// Larger values mean fewer read calls at the cost of a larger saved
    /// buffer per handle. The sequence of lines returned does not depend on
    /// this value.
    ///
    /// # Default
    ///
    /// [`DEFAULT_CHUNK_SIZE`]
    pub chunk_size: NonZeroUsize,

    /// Upper bound (exclusive) on the handles the reader accepts.
    ///
    /// Requests for a handle at or above the bound are answered with "no
    /// line" instead of being tracked. `None` accepts every non-negative
    /// handle. Negative handles are always rejected.
    ///
    /// # Default
    ///
    /// `Some(DEFAULT_CAPACITY)`
    pub capacity: Option<usize>,

    /// The byte that ends a line. It is included in the returned line.
    ///
    /// # Default
    ///
    /// `b'\n'`
    pub terminator: u8,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            capacity: Some(DEFAULT_CAPACITY),
            terminator: b'\n',
        }
    }
}
