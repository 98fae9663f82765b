//! Fixed-length scratch buffer of `f64`.
//!
//! Unlike the other containers, the arena's accessors are lenient: an
//! out-of-range [`ResourceArena::set`] is silently discarded and an
//! out-of-range [`ResourceArena::get`] reads as `0.0`. Callers that need to
//! distinguish a stored zero from a miss use [`ResourceArena::try_get`].

use crate::error::{zeroed, CoreError};

/// A zero-initialised `f64` buffer whose length never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceArena {
    data: Box<[f64]>,
}

impl ResourceArena {
    /// Allocate `size` zeroed cells.
    pub fn new(size: usize) -> Result<Self, CoreError> {
        Ok(Self {
            data: zeroed(size)?.into_boxed_slice(),
        })
    }

    /// Write `value` at `index`; out-of-range writes are dropped.
    pub fn set(&mut self, index: usize, value: f64) {
        if let Some(slot) = self.data.get_mut(index) {
            *slot = value;
        }
    }

    /// Stored value at `index`, or `0.0` when out of range.
    pub fn get(&self, index: usize) -> f64 {
        self.try_get(index).unwrap_or(0.0)
    }

    /// Stored value at `index`, or `None` when out of range.
    pub fn try_get(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied()
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the arena has zero cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
