//! Hacker stories engine: HTTP search fetches and key-value persistence.
mod decode;
mod engine;
mod fetch;
mod persist;
mod types;

pub use decode::decode_search_page;
pub use engine::{Clock, EngineConfig, EngineHandle};
pub use fetch::{FetchSettings, ReqwestFetcher, StoryFetcher};
pub use persist::{ensure_store_dir, AtomicFileWriter, KeyValueStore, MemoryStore, PersistError};
pub use types::{EngineEvent, FailureKind, FetchError, Hit, ObjectId, RequestId, SearchPage};
