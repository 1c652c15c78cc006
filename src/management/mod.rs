mod cache;

pub use cache::InMemoryStore;
pub use cache::KvStore;
pub use cache::MAX_ENTRIES;
