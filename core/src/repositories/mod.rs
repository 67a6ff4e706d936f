pub mod data;
pub mod store;

pub use data::{DataRepository, DataRepositoryConfig};
pub use store::KeyValueStore;

#[cfg(test)]
pub use store::MockKeyValueStore;
