//! Draft persistence across visits

mod storage;
mod store;

pub use storage::{FileStorage, MemoryStorage};
pub use store::{DraftStore, FormDraft};
