//! Adapters: concrete implementations of the ports.

pub mod memory;

pub use memory::InMemoryHistory;
