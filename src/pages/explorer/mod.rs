//! Course explorer data provider.
//!
//! Answers the tree view's lazy `children` requests. Directory expansion
//! fetches the directory's complete entry list and materializes it into a
//! forest; virtual folders already hold their children, so expanding them
//! never touches the backend.

pub mod icons;
pub mod types;

pub use types::{Collapsible, Command, CourseTreeItem};

use crate::core::errors::{Error, Result};
use crate::models::{DirectoryEntry, Forest};
use crate::services::backend::{EntrySource, ROOT_PATH};
use crate::services::tree::PathTreeBuilder;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

type EntryCache = Arc<RwLock<HashMap<u64, DirectoryEntry>>>;

/// When listing the courses warms the entry cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Preload {
    /// Each course is preloaded on a detached blocking task.
    #[default]
    Background,
    /// `children(None)` returns only after every course is preloaded.
    Inline,
    Off,
}

pub struct CourseExplorer {
    source: Arc<dyn EntrySource>,
    preload: Preload,
    entry_cache: EntryCache,
    forest_cache: RwLock<HashMap<u64, Arc<Forest>>>,
}

impl CourseExplorer {
    pub fn new(source: Arc<dyn EntrySource>) -> Self {
        Self {
            source,
            preload: Preload::default(),
            entry_cache: Arc::new(RwLock::new(HashMap::new())),
            forest_cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_preload(mut self, preload: Preload) -> Self {
        self.preload = preload;
        self
    }

    /// Children of `parent`, or the courses when `parent` is `None`.
    pub async fn children(&self, parent: Option<&CourseTreeItem>) -> Result<Vec<CourseTreeItem>> {
        let Some(parent) = parent else {
            let source = self.source.clone();
            let courses = tokio::task::spawn_blocking(move || source.courses()).await??;
            for course in &courses {
                self.start_preload(course.id).await;
            }
            return Ok(courses.into_iter().map(CourseTreeItem::Course).collect());
        };

        match parent {
            CourseTreeItem::Course(course) => {
                let source = self.source.clone();
                let course_id = course.id;
                let directories =
                    tokio::task::spawn_blocking(move || source.directories(course_id)).await??;
                Ok(directories.into_iter().map(CourseTreeItem::Directory).collect())
            }
            CourseTreeItem::Directory(directory) => {
                let forest = self.directory_forest(directory.id).await?;
                Ok(forest.iter().cloned().map(CourseTreeItem::from).collect())
            }
            CourseTreeItem::Folder(folder) => Ok(folder
                .children
                .iter()
                .cloned()
                .map(CourseTreeItem::from)
                .collect()),
            CourseTreeItem::File(_) => Ok(Vec::new()),
        }
    }

    /// Sorted forest for a directory, built once and cached until [`refresh`].
    ///
    /// [`refresh`]: CourseExplorer::refresh
    pub async fn directory_forest(&self, directory_id: u64) -> Result<Arc<Forest>> {
        if let Some(forest) = self.cached_forest(directory_id)? {
            debug!(directory_id, "course tree cache hit");
            return Ok(forest);
        }

        let source = self.source.clone();
        let fetched = tokio::task::spawn_blocking(move || {
            let entries = source.entries(directory_id, ROOT_PATH, true)?;
            let forest = PathTreeBuilder::new(directory_id).build(&entries);
            Ok::<_, Error>((entries, forest))
        })
        .await?;

        let (entries, forest) = match fetched {
            Ok(fetched) => fetched,
            Err(e) => {
                warn!(directory_id, "failed to fetch directory entries: {}", e);
                return Err(e);
            }
        };

        {
            let mut cache = self
                .entry_cache
                .write()
                .map_err(|_| Error::Other("entry cache lock poisoned".to_string()))?;
            for entry in entries {
                cache.insert(entry.id, entry);
            }
        }

        let forest = Arc::new(forest);
        self.forest_cache
            .write()
            .map_err(|_| Error::Other("forest cache lock poisoned".to_string()))?
            .insert(directory_id, forest.clone());
        Ok(forest)
    }

    fn cached_forest(&self, directory_id: u64) -> Result<Option<Arc<Forest>>> {
        let cache = self
            .forest_cache
            .read()
            .map_err(|_| Error::Other("forest cache lock poisoned".to_string()))?;
        Ok(cache.get(&directory_id).cloned())
    }

    /// Fetches every directory of `course_id` into the entry cache and
    /// returns how many entries were recorded.
    ///
    /// Only a failure to list the directories is an error; a directory whose
    /// entries cannot be fetched is logged and skipped.
    pub async fn preload_course_entries(&self, course_id: u64) -> Result<usize> {
        let source = self.source.clone();
        let cache = self.entry_cache.clone();
        tokio::task::spawn_blocking(move || preload_blocking(source.as_ref(), &cache, course_id))
            .await?
    }

    async fn start_preload(&self, course_id: u64) {
        match self.preload {
            Preload::Off => {}
            Preload::Background => {
                let source = self.source.clone();
                let cache = self.entry_cache.clone();
                tokio::task::spawn_blocking(move || {
                    if let Err(e) = preload_blocking(source.as_ref(), &cache, course_id) {
                        warn!(course_id, "course preload failed: {}", e);
                    }
                });
            }
            Preload::Inline => {
                if let Err(e) = self.preload_course_entries(course_id).await {
                    warn!(course_id, "course preload failed: {}", e);
                }
            }
        }
    }

    /// Entry previously seen in any fetched or preloaded directory.
    pub fn find_entry(&self, entry_id: u64) -> Option<DirectoryEntry> {
        match self.entry_cache.read() {
            Ok(cache) => cache.get(&entry_id).cloned(),
            Err(_) => {
                warn!(entry_id, "entry cache lock poisoned, lookup skipped");
                None
            }
        }
    }

    /// Drops every cached forest so the next expansion refetches. Known
    /// entries stay available to [`find_entry`](CourseExplorer::find_entry).
    pub fn refresh(&self) {
        match self.forest_cache.write() {
            Ok(mut cache) => cache.clear(),
            Err(_) => warn!("forest cache lock poisoned, refresh skipped"),
        }
    }

    /// Expands everything below `root` depth-first, in display order.
    pub async fn expand_all(
        &self,
        root: Option<&CourseTreeItem>,
    ) -> Result<Vec<(usize, CourseTreeItem)>> {
        let mut expanded = Vec::new();
        let mut stack: Vec<(usize, CourseTreeItem)> = self
            .children(root)
            .await?
            .into_iter()
            .rev()
            .map(|item| (0, item))
            .collect();

        while let Some((depth, item)) = stack.pop() {
            let children = self.children(Some(&item)).await?;
            stack.extend(children.into_iter().rev().map(|child| (depth + 1, child)));
            expanded.push((depth, item));
        }
        Ok(expanded)
    }
}

fn preload_blocking(source: &dyn EntrySource, cache: &EntryCache, course_id: u64) -> Result<usize> {
    let directories = source.directories(course_id)?;
    let mut recorded = 0;
    for directory in directories {
        let entries = match source.entries(directory.id, ROOT_PATH, true) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(course_id, directory_id = directory.id, "skipping directory preload: {}", e);
                continue;
            }
        };
        let count = entries.len();
        let mut cache = cache
            .write()
            .map_err(|_| Error::Other("entry cache lock poisoned".to_string()))?;
        for entry in entries {
            cache.insert(entry.id, entry);
        }
        recorded += count;
        debug!(course_id, directory_id = directory.id, entries = count, "preloaded directory");
    }
    Ok(recorded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, CourseDirectory, EntryKind};
    use crate::services::backend::{MemoryEntrySource, Snapshot};

    fn explorer() -> CourseExplorer {
        let snapshot = Snapshot {
            courses: vec![Course {
                id: 1,
                name: "Compilers".to_string(),
                description: String::new(),
                teacher_name: None,
                created_at: None,
            }],
            directories: vec![CourseDirectory {
                id: 3,
                course_id: 1,
                name: "Labs".to_string(),
                created_at: None,
            }],
            entries: vec![DirectoryEntry {
                id: 30,
                course_directory_id: Some(3),
                path: "/lab1/lexer.rs".to_string(),
                kind: EntryKind::File,
                created_at: "2025-03-01T10:00:00".to_string(),
                storage_name: "lexer".to_string(),
            }],
        };
        CourseExplorer::new(Arc::new(MemoryEntrySource::from_snapshot(snapshot)))
            .with_preload(Preload::Off)
    }

    #[tokio::test]
    async fn poisoned_entry_cache_reads_as_missing() {
        let explorer = explorer();
        explorer.preload_course_entries(1).await.unwrap();
        assert!(explorer.find_entry(30).is_some());

        let cache = explorer.entry_cache.clone();
        let poisoner = std::thread::spawn(move || {
            let _guard = cache.write().unwrap();
            panic!("writer died holding the entry cache");
        });
        assert!(poisoner.join().is_err());

        assert!(explorer.find_entry(30).is_none());
        let result = explorer.preload_course_entries(1).await;
        assert!(matches!(result, Err(Error::Other(_))));
    }

    #[tokio::test]
    async fn poisoned_forest_cache_refresh_does_not_panic() {
        let explorer = explorer();
        explorer.directory_forest(3).await.unwrap();

        std::thread::scope(|scope| {
            let poisoner = scope.spawn(|| {
                let _guard = explorer.forest_cache.write().unwrap();
                panic!("writer died holding the forest cache");
            });
            assert!(poisoner.join().is_err());
        });

        explorer.refresh();
        assert!(explorer.directory_forest(3).await.is_err());
    }
}
