//! Storage backends.

mod file;
mod memory;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;
