//! Generic slot+generation handle table for FFI lifetime management.
//!
//! Prevents use-after-free across the C boundary: destroyed handles have
//! stale generation counters and safely return `None` instead of causing UB.
//! Double-destroy is a safe no-op (returns `None`).
//!
//! Live generations are never 0, so the handle value `0` never resolves and
//! is used as the invalid-handle sentinel.

/// Handle value that never refers to a live object.
pub const CALYX_INVALID_HANDLE: u64 = 0;

/// Handle encoding: upper 32 bits = slot index, lower 32 bits = generation.
fn encode(slot: u32, generation: u32) -> u64 {
    ((slot as u64) << 32) | (generation as u64)
}

fn decode(handle: u64) -> (u32, u32) {
    let slot = (handle >> 32) as u32;
    let generation = handle as u32;
    (slot, generation)
}

struct Slot<T> {
    generation: u32,
    data: Option<T>,
}

/// A slot+generation handle table mapping `u64` handles to owned values.
///
/// Reuses slots via a free list. Generation counters increment on removal,
/// making stale handles detectable without UB.
pub(crate) struct HandleTable<T> {
    slots: Vec<Slot<T>>,
    free_list: Vec<u32>,
    live: usize,
}

impl<T> HandleTable<T> {
    /// Create an empty handle table.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            live: 0,
        }
    }

    /// Insert a value and return its handle.
    ///
    /// Returns `None` only when every one of the 2^32 slot indices is taken.
    pub fn insert(&mut self, value: T) -> Option<u64> {
        let handle = if let Some(slot_idx) = self.free_list.pop() {
            let slot = &mut self.slots[slot_idx as usize];
            slot.data = Some(value);
            encode(slot_idx, slot.generation)
        } else {
            let slot_idx = u32::try_from(self.slots.len()).ok()?;
            self.slots.push(Slot {
                generation: 1,
                data: Some(value),
            });
            encode(slot_idx, 1)
        };
        self.live += 1;
        Some(handle)
    }

    /// Get an immutable reference to the value behind a handle.
    ///
    /// Returns `None` if the handle is stale (wrong generation) or was never valid.
    pub fn get(&self, handle: u64) -> Option<&T> {
        let (slot_idx, generation) = decode(handle);
        let slot = self.slots.get(slot_idx as usize)?;
        if slot.generation != generation {
            return None;
        }
        slot.data.as_ref()
    }

    /// Remove the value behind a handle, returning it.
    ///
    /// Increments the generation counter and adds the slot to the free list.
    /// A slot whose generation wraps back to 0 is permanently retired, since
    /// generation 0 is reserved for the invalid handle and recycling it would
    /// let stale handles from the first epoch resolve again.
    /// Returns `None` if the handle is stale (double-remove is safe).
    pub fn remove(&mut self, handle: u64) -> Option<T> {
        let (slot_idx, generation) = decode(handle);
        let slot = self.slots.get_mut(slot_idx as usize)?;
        if slot.generation != generation {
            return None;
        }
        let value = slot.data.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        if slot.generation != 0 {
            self.free_list.push(slot_idx);
        }
        self.live -= 1;
        Some(value)
    }

    /// Number of live values.
    pub fn len(&self) -> usize {
        self.live
    }
}
