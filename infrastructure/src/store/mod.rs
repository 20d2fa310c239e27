//! Local state adapters.

mod file_store;

pub use file_store::FileVersionStore;
