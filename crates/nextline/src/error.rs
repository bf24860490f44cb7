use std::{collections::TryReserveError, io};

use thiserror::Error;

use crate::Handle;

/// Why [`LineReader::try_next_line`](crate::LineReader::try_next_line) could
/// not produce a line.
///
/// `Io` and `OutOfMemory` release the saved state of the handle involved;
/// `InvalidHandle` is reported before any state is touched. Other handles are
/// never affected.
#[derive(Error, Debug)]
pub enum ReadLineError {
    /// The handle is negative or not below the configured capacity.
    #[error("handle {handle} is outside the supported range (capacity: {capacity:?})")]
    InvalidHandle {
        /// The rejected handle.
        handle: Handle,
        /// The capacity in effect when the handle was rejected.
        capacity: Option<usize>,
    },
    /// The underlying read primitive failed.
    #[error("read failed: {0}")]
    Io(#[from] io::Error),
    /// Storage for a chunk or a line could not be reserved.
    #[error("out of memory while buffering line: {0}")]
    OutOfMemory(#[from] TryReserveError),
}
