//! Repository interfaces and the in-memory store.

#[path = "trait.rs"]
mod trait_;
mod collection;
mod memory;


pub use collection::Collection;
pub use memory::InMemoryRepository;
pub use trait_::Repository;
