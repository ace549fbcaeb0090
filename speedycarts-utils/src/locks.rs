//! Lock aliases so call sites don't name the underlying crate directly.

/// Synchronous mutex used for entity fields.
pub type SyncMutex<T> = parking_lot::Mutex<T>;
