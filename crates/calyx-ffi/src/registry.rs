//! Per-kind handle registries.
//!
//! Each object kind owns one process-wide [`Registry`]: a named,
//! mutex-guarded [`HandleTable`] of `Arc<Mutex<T>>`. The table lock is held
//! only long enough to clone the `Arc` out; the work itself runs under the
//! object's own lock, so a long call on one handle never stalls calls on
//! another. Lookups that miss record an "invalid handle" error in the
//! last-error slot and yield [`CalyxStatus::NullPointer`].

use std::sync::{Arc, Mutex, MutexGuard};

use crate::handle::HandleTable;
use crate::last_error::set_last_error;
use crate::status::CalyxStatus;

type Shared<T> = Arc<Mutex<T>>;

pub(crate) struct Registry<T> {
    kind: &'static str,
    table: Mutex<HandleTable<Shared<T>>>,
}

impl<T> Registry<T> {
    pub const fn new(kind: &'static str) -> Self {
        Self {
            kind,
            table: Mutex::new(HandleTable::new()),
        }
    }

    fn poisoned(&self, what: &str) -> CalyxStatus {
        tracing::error!(target: "calyx_ffi", kind = self.kind, what, "lock poisoned");
        set_last_error(format!("{} {what} is poisoned by an earlier panic", self.kind));
        CalyxStatus::UnknownError
    }

    fn lock_table(&self) -> Result<MutexGuard<'_, HandleTable<Shared<T>>>, CalyxStatus> {
        self.table.lock().map_err(|_| self.poisoned("table"))
    }

    fn lock_object<'a>(&self, object: &'a Mutex<T>) -> Result<MutexGuard<'a, T>, CalyxStatus> {
        object.lock().map_err(|_| self.poisoned("object"))
    }

    fn invalid(&self, handle: u64) -> CalyxStatus {
        set_last_error(format!("invalid {} handle {handle:#x}", self.kind));
        CalyxStatus::NullPointer
    }

    /// Clone the `Arc` for `handle`, briefly locking the table.
    fn fetch(&self, handle: u64) -> Result<Shared<T>, CalyxStatus> {
        let found = self.lock_table()?.get(handle).cloned();
        found.ok_or_else(|| self.invalid(handle))
    }

    /// Take ownership of `value` and return a fresh handle for it.
    pub fn insert(&self, value: T) -> Result<u64, CalyxStatus> {
        let shared = Arc::new(Mutex::new(value));
        let handle = self.lock_table()?.insert(shared).ok_or_else(|| {
            set_last_error(format!("{} table has no free slots", self.kind));
            CalyxStatus::MemoryError
        })?;
        tracing::trace!(target: "calyx_ffi", kind = self.kind, handle, "handle created");
        Ok(handle)
    }

    /// Destroy the object behind `handle`. Stale handles are a safe no-op.
    ///
    /// A call already running on the object keeps it alive until it returns.
    pub fn destroy(&self, handle: u64) -> CalyxStatus {
        let (removed, live) = match self.lock_table() {
            Ok(mut table) => (table.remove(handle), table.len()),
            Err(status) => return status,
        };
        match removed {
            Some(object) => {
                drop(object);
                tracing::trace!(target: "calyx_ffi", kind = self.kind, handle, live, "handle destroyed");
                CalyxStatus::Success
            }
            None => self.invalid(handle),
        }
    }

    /// Run `f` against the object behind `handle`.
    pub fn with<R>(&self, handle: u64, f: impl FnOnce(&T) -> R) -> Result<R, CalyxStatus> {
        let object = self.fetch(handle)?;
        let guard = self.lock_object(&object)?;
        Ok(f(&*guard))
    }

    /// Run `f` against the object behind `handle`, mutably.
    pub fn with_mut<R>(&self, handle: u64, f: impl FnOnce(&mut T) -> R) -> Result<R, CalyxStatus> {
        let object = self.fetch(handle)?;
        let mut guard = self.lock_object(&object)?;
        Ok(f(&mut *guard))
    }

    /// Run `f` against two objects of this kind. `a` and `b` may be equal.
    ///
    /// The two object locks are always taken in address order, so opposite
    /// pairings on different threads cannot deadlock.
    pub fn with_pair<R>(
        &self,
        a: u64,
        b: u64,
        f: impl FnOnce(&T, &T) -> R,
    ) -> Result<R, CalyxStatus> {
        let lhs = self.fetch(a)?;
        let rhs = self.fetch(b)?;
        if Arc::ptr_eq(&lhs, &rhs) {
            let guard = self.lock_object(&lhs)?;
            return Ok(f(&*guard, &*guard));
        }
        let lhs_first = Arc::as_ptr(&lhs) < Arc::as_ptr(&rhs);
        let (first, second) = if lhs_first { (&lhs, &rhs) } else { (&rhs, &lhs) };
        let first = self.lock_object(first)?;
        let second = self.lock_object(second)?;
        if lhs_first {
            Ok(f(&*first, &*second))
        } else {
            Ok(f(&*second, &*first))
        }
    }
}
