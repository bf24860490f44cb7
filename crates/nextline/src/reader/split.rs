use std::collections::TryReserveError;

use bstr::{BString, ByteSlice};

/// Copies the next line out of `saved`: everything up to and including the
/// first terminator, or the whole buffer when there is none.
pub(super) fn extract(saved: &[u8], terminator: u8) -> Result<BString, TryReserveError> {
    let end = saved.find_byte(terminator).map_or(saved.len(), |i| i + 1);
    let mut line = Vec::new();
    line.try_reserve_exact(end)?;
    line.extend_from_slice(&saved[..end]);
    Ok(BString::from(line))
}

/// Drops the first `consumed` bytes of `saved`.
///
/// Returns `None` instead of an empty buffer once nothing is left. When the
/// leftover would occupy less than half of the allocation (counting at least
/// `keep` bytes of room for the next read), it is moved into a right-sized
/// buffer so one long line does not pin its peak allocation. If that buffer
/// cannot be allocated the leftover is compacted in place instead.
pub(super) fn remainder(mut saved: Vec<u8>, consumed: usize, keep: usize) -> Option<Vec<u8>> {
    if consumed >= saved.len() {
        return None;
    }
    let rest = &saved[consumed..];
    let wanted = rest.len().max(keep);
    if saved.capacity() / 2 > wanted {
        let mut fresh = Vec::new();
        if fresh.try_reserve_exact(wanted).is_ok() {
            fresh.extend_from_slice(rest);
            return Some(fresh);
        }
    }
    saved.drain(..consumed);
    Some(saved)
}
