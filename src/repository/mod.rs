//! Read access to the shift store.
//!
//! [`ShiftStore`] is the interface of the external storage collaborator;
//! every method may fail. [`ShiftRepository`] wraps a store and applies the
//! degrade rules an export relies on: read failures are logged and replaced
//! by a safe default, never propagated.

mod adapter;
mod memory;
mod store;

pub use adapter::ShiftRepository;
pub use memory::{MemoryStore, StoreSnapshot};
pub use store::ShiftStore;
