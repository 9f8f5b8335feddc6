use serde::{Deserialize, Serialize};
use std::fmt;

/// A backend-tracked file or directory record inside a course directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_directory_id: Option<u64>,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub storage_name: String,
}

impl DirectoryEntry {
    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// The `type` discriminator of an entry. Anything that is not a directory is
/// some kind of file, and unknown kinds are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntryKind {
    Directory,
    File,
    Other(String),
}

impl EntryKind {
    pub fn as_str(&self) -> &str {
        match self {
            EntryKind::Directory => "directory",
            EntryKind::File => "file",
            EntryKind::Other(kind) => kind,
        }
    }
}

impl From<String> for EntryKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "directory" => EntryKind::Directory,
            "file" => EntryKind::File,
            _ => EntryKind::Other(value),
        }
    }
}

impl From<&str> for EntryKind {
    fn from(value: &str) -> Self {
        EntryKind::from(value.to_string())
    }
}

impl From<EntryKind> for String {
    fn from(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Other(kind) => kind,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_shape() {
        let json = r#"{
            "id": 7,
            "course_directory_id": 3,
            "path": "/lectures/week1.pdf",
            "type": "file",
            "created_at": "2025-03-01T10:00:00",
            "storage_name": "a1b2c3"
        }"#;
        let entry: DirectoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 7);
        assert_eq!(entry.course_directory_id, Some(3));
        assert_eq!(entry.kind, EntryKind::File);
        assert!(!entry.is_directory());
    }

    #[test]
    fn unknown_kind_is_kept_verbatim() {
        let json = r#"{"id": 1, "path": "/nb.ipynb", "type": "notebook"}"#;
        let entry: DirectoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.kind, EntryKind::Other("notebook".to_string()));
        assert_eq!(entry.created_at, "");

        let back = serde_json::to_value(&entry).unwrap();
        assert_eq!(back["type"], "notebook");
    }

    #[test]
    fn directory_marker() {
        let json = r#"{"id": 2, "path": "/docs", "type": "directory"}"#;
        let entry: DirectoryEntry = serde_json::from_str(json).unwrap();
        assert!(entry.is_directory());
    }
}
