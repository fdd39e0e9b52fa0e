//! Collection store adapters implementing the
//! [`CollectionStore`](roster_application::CollectionStore) port.

mod collections;
mod connect;
mod file;
mod memory;

pub use collections::Collections;
pub use connect::connect;
pub use file::FileCollectionStore;
pub use memory::InMemoryCollectionStore;
