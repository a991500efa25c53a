//! Persistent key-value store implementations

mod file;

pub use file::FileStore;
