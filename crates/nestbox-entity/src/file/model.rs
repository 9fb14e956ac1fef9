//! Stored file entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A file record pointing at an uploaded blob.
///
/// The binary content itself lives in blob storage; only the retrievable
/// URL is kept here. Records are created on upload and re-parented by
/// auto-organize; they are never otherwise mutated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StoredFile {
    /// Unique file identifier.
    pub id: Uuid,
    /// File name without its extension.
    pub name: String,
    /// Extension (text after the last dot), possibly empty.
    pub extension: String,
    /// Retrievable URL into blob storage.
    pub storage_url: String,
    /// The directory containing this file.
    pub directory_id: Uuid,
    /// The file owner.
    pub owner_id: String,
    /// When the file was uploaded.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new file record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStoredFile {
    /// File name without its extension.
    pub name: String,
    /// Extension, possibly empty.
    pub extension: String,
    /// Retrievable URL into blob storage.
    pub storage_url: String,
    /// The directory to place the file in.
    pub directory_id: Uuid,
    /// The file owner.
    pub owner_id: String,
}

/// The metadata projection handed to the insight collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FileMetadata {
    /// Unique file identifier.
    pub id: Uuid,
    /// File name without its extension.
    pub name: String,
    /// Extension, possibly empty.
    pub extension: String,
    /// Retrievable URL into blob storage.
    pub storage_url: String,
    /// When the file was uploaded.
    pub created_at: DateTime<Utc>,
}

/// Split an original filename into (name, extension) at the last dot.
///
/// A name with no dot, a trailing dot, or only a leading dot yields an
/// empty extension and keeps the rest as the name.
pub fn split_filename(original: &str) -> (String, String) {
    match original.rfind('.') {
        Some(idx) if idx > 0 => (
            original[..idx].to_string(),
            original[idx + 1..].to_string(),
        ),
        _ => (original.to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple() {
        assert_eq!(
            split_filename("photo.png"),
            ("photo".to_string(), "png".to_string())
        );
    }

    #[test]
    fn test_split_multi_dot_takes_last() {
        assert_eq!(
            split_filename("archive.tar.gz"),
            ("archive.tar".to_string(), "gz".to_string())
        );
    }

    #[test]
    fn test_split_no_dot_yields_empty_extension() {
        assert_eq!(
            split_filename("report"),
            ("report".to_string(), String::new())
        );
    }

    #[test]
    fn test_split_trailing_dot() {
        assert_eq!(split_filename("name."), ("name".to_string(), String::new()));
    }

    #[test]
    fn test_split_hidden_file_keeps_whole_name() {
        assert_eq!(
            split_filename(".gitignore"),
            (".gitignore".to_string(), String::new())
        );
    }

    #[test]
    fn test_split_hidden_file_with_extension() {
        assert_eq!(
            split_filename(".env.local"),
            (".env".to_string(), "local".to_string())
        );
    }
}
