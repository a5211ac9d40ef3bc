//! Storage Adapters

mod json_storage;

pub use json_storage::{JsonChapterStorage, INDEX_FILE_NAME};
