use std::collections::BTreeMap;

use crate::Handle;

/// Saved bytes per handle, bounded by an optional capacity.
///
/// An entry exists only while its buffer is non-empty, so "no saved state"
/// and "empty saved state" are the same thing.
#[derive(Debug, Default)]
pub(crate) struct SavedBuffers {
    slots: BTreeMap<Handle, Vec<u8>>,
    capacity: Option<usize>,
}

impl SavedBuffers {
    pub(crate) fn new(capacity: Option<usize>) -> Self {
        Self {
            slots: BTreeMap::new(),
            capacity,
        }
    }

    pub(crate) fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Whether `handle` lies within `0..capacity`.
    pub(crate) fn admits(&self, handle: Handle) -> bool {
        match (usize::try_from(handle), self.capacity) {
            (Err(_), _) => false,
            (Ok(index), Some(capacity)) => index < capacity,
            (Ok(_), None) => true,
        }
    }

    /// Removes the saved buffer for `handle`, leaving the slot clear.
    pub(crate) fn take(&mut self, handle: Handle) -> Option<Vec<u8>> {
        self.slots.remove(&handle)
    }

    /// Stores `saved` for `handle`. Empty buffers are dropped instead.
    pub(crate) fn put(&mut self, handle: Handle, saved: Vec<u8>) {
        debug_assert!(self.admits(handle));
        if saved.is_empty() {
            self.slots.remove(&handle);
        } else {
            self.slots.insert(handle, saved);
        }
    }

    pub(crate) fn get(&self, handle: Handle) -> Option<&[u8]> {
        self.slots.get(&handle).map(Vec::as_slice)
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }
}
