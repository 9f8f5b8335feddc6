use super::EntrySource;
use crate::core::errors::{Error, Result};
use crate::models::{Course, CourseDirectory, DirectoryEntry};
use crate::services::tree::path::normalize_path;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::RwLock;

/// Serialized backend state: everything the explorer can ask for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub directories: Vec<CourseDirectory>,
    #[serde(default)]
    pub entries: Vec<DirectoryEntry>,
}

/// In-process backend answering from a [`Snapshot`].
pub struct MemoryEntrySource {
    state: RwLock<Snapshot>,
}

impl MemoryEntrySource {
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            state: RwLock::new(snapshot),
        }
    }

    pub fn from_snapshot_file(path: impl AsRef<Path>) -> Result<Self> {
        let body = fs::read_to_string(path.as_ref())?;
        let snapshot: Snapshot = serde_json::from_str(&body)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            courses = snapshot.courses.len(),
            entries = snapshot.entries.len(),
            "loaded snapshot"
        );
        Ok(Self::from_snapshot(snapshot))
    }

    /// Adds an entry, replacing any existing entry with the same id.
    pub fn upsert_entry(&self, entry: DirectoryEntry) -> Result<()> {
        let mut state = self
            .state
            .write()
            .map_err(|_| Error::Other("snapshot lock poisoned".to_string()))?;
        state.entries.retain(|existing| existing.id != entry.id);
        state.entries.push(entry);
        Ok(())
    }

    pub fn remove_entry(&self, entry_id: u64) -> Result<bool> {
        let mut state = self
            .state
            .write()
            .map_err(|_| Error::Other("snapshot lock poisoned".to_string()))?;
        let before = state.entries.len();
        state.entries.retain(|existing| existing.id != entry_id);
        Ok(state.entries.len() != before)
    }

    fn read<T>(&self, f: impl FnOnce(&Snapshot) -> Result<T>) -> Result<T> {
        let state = self
            .state
            .read()
            .map_err(|_| Error::Other("snapshot lock poisoned".to_string()))?;
        f(&state)
    }
}

fn rooted(path: &str) -> String {
    format!("/{}", normalize_path(path).unwrap_or_default())
}

impl EntrySource for MemoryEntrySource {
    fn courses(&self) -> Result<Vec<Course>> {
        self.read(|state| Ok(state.courses.clone()))
    }

    fn directories(&self, course_id: u64) -> Result<Vec<CourseDirectory>> {
        self.read(|state| {
            if !state.courses.iter().any(|course| course.id == course_id) {
                return Err(Error::UnknownCourse(course_id));
            }
            Ok(state
                .directories
                .iter()
                .filter(|directory| directory.course_id == course_id)
                .cloned()
                .collect())
        })
    }

    fn entries(&self, directory_id: u64, path: &str, fuzzy: bool) -> Result<Vec<DirectoryEntry>> {
        let wanted = rooted(path);
        self.read(|state| {
            if !state.directories.iter().any(|directory| directory.id == directory_id) {
                return Err(Error::UnknownDirectory(directory_id));
            }
            Ok(state
                .entries
                .iter()
                .filter(|entry| entry.course_directory_id == Some(directory_id))
                .filter(|entry| {
                    let candidate = format!("/{}", entry.path.trim_start_matches('/'));
                    if fuzzy {
                        candidate.starts_with(&wanted)
                    } else {
                        candidate.trim_end_matches('/') == wanted
                    }
                })
                .cloned()
                .collect())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryKind;

    fn snapshot() -> Snapshot {
        let entry = |id: u64, directory: u64, path: &str, kind: EntryKind| DirectoryEntry {
            id,
            course_directory_id: Some(directory),
            path: path.to_string(),
            kind,
            created_at: String::new(),
            storage_name: String::new(),
        };
        Snapshot {
            courses: vec![Course {
                id: 1,
                name: "Compilers".to_string(),
                description: String::new(),
                teacher_name: None,
                created_at: None,
            }],
            directories: vec![
                CourseDirectory {
                    id: 10,
                    course_id: 1,
                    name: "Lectures".to_string(),
                    created_at: None,
                },
                CourseDirectory {
                    id: 11,
                    course_id: 1,
                    name: "Labs".to_string(),
                    created_at: None,
                },
            ],
            entries: vec![
                entry(100, 10, "/week1", EntryKind::Directory),
                entry(101, 10, "/week1/intro.pdf", EntryKind::File),
                entry(102, 10, "/week2/parsing.pdf", EntryKind::File),
                entry(103, 11, "/lab1.md", EntryKind::File),
            ],
        }
    }

    #[test]
    fn fuzzy_root_returns_whole_directory() {
        let source = MemoryEntrySource::from_snapshot(snapshot());
        let entries = source.entries(10, "/", true).unwrap();
        assert_eq!(entries.iter().map(|e| e.id).collect::<Vec<_>>(), vec![100, 101, 102]);
    }

    #[test]
    fn fuzzy_prefix_and_exact_match() {
        let source = MemoryEntrySource::from_snapshot(snapshot());
        assert_eq!(source.entries(10, "/week1", true).unwrap().len(), 2);
        let exact = source.entries(10, "week1/intro.pdf", false).unwrap();
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].id, 101);
    }

    #[test]
    fn unknown_ids_are_errors() {
        let source = MemoryEntrySource::from_snapshot(snapshot());
        assert!(matches!(source.entries(99, "/", true), Err(Error::UnknownDirectory(99))));
        assert!(matches!(source.directories(7), Err(Error::UnknownCourse(7))));
    }

    #[test]
    fn upsert_and_remove() {
        let source = MemoryEntrySource::from_snapshot(snapshot());
        let mut moved = source.entries(11, "/", true).unwrap().remove(0);
        moved.path = "/archive/lab1.md".to_string();
        source.upsert_entry(moved).unwrap();

        let entries = source.entries(11, "/", true).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "/archive/lab1.md");

        assert!(source.remove_entry(103).unwrap());
        assert!(!source.remove_entry(103).unwrap());
        assert!(source.entries(11, "/", true).unwrap().is_empty());
    }
}
