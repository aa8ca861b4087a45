//! Service adapters: in-process gateway implementations.

pub mod memory;

pub use memory::{InMemoryPersistence, InMemoryUploader};
