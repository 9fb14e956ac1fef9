pub mod model;

pub use model::{CreateStoredFile, FileMetadata, StoredFile, split_filename};
