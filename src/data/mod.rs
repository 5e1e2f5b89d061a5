pub mod file_store;
pub mod store;

pub use file_store::JsonFileStore;
pub use store::{load_json, save_json, KeyValueStore, MemoryStore, StoreError};
