use super::identity::{file_node_id, folder_node_id};
use super::path::normalize_segments;
use super::sort::sort_forest;
use crate::models::{DirectoryEntry, FileNode, FolderNode, Forest, TreeNode};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Reconstructs a folder hierarchy from the paths of one directory's entries.
///
/// Explicit `directory` entries are ignored; folders exist only because some
/// file path passes through them, and each cumulative folder path is realized
/// exactly once per build. The builder never fails: entries that cannot be
/// placed are skipped.
#[derive(Debug, Clone, Copy)]
pub struct PathTreeBuilder {
    owner_directory_id: u64,
}

/// Counters from a single build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub files: usize,
    pub folders: usize,
    pub skipped_directories: usize,
    pub skipped_degenerate: usize,
    pub replaced_duplicates: usize,
}

enum Slot {
    Folder(usize),
    File(FileNode),
}

struct PendingFolder {
    id: String,
    name: String,
    full_path: String,
    children: Vec<Slot>,
}

impl PathTreeBuilder {
    pub fn new(owner_directory_id: u64) -> Self {
        Self { owner_directory_id }
    }

    pub fn owner_directory_id(&self) -> u64 {
        self.owner_directory_id
    }

    /// Builds the sorted forest for `entries`.
    pub fn build(&self, entries: &[DirectoryEntry]) -> Forest {
        self.build_with_stats(entries).0
    }

    pub fn build_with_stats(&self, entries: &[DirectoryEntry]) -> (Forest, BuildStats) {
        let mut stats = BuildStats::default();
        let mut roots: Vec<Slot> = Vec::new();
        let mut folders: Vec<PendingFolder> = Vec::new();
        let mut folder_index: HashMap<String, usize> = HashMap::new();
        // full path -> (parent folder, position among its children)
        let mut file_slots: HashMap<String, (Option<usize>, usize)> = HashMap::new();

        for entry in entries {
            if entry.is_directory() {
                trace!(entry_id = entry.id, path = %entry.path, "skipping directory marker");
                stats.skipped_directories += 1;
                continue;
            }
            let Some(segments) = normalize_segments(&entry.path) else {
                trace!(entry_id = entry.id, path = %entry.path, "skipping unplaceable path");
                stats.skipped_degenerate += 1;
                continue;
            };
            let Some((file_name, folder_segments)) = segments.split_last() else {
                unreachable!("normalized paths have at least one segment");
            };

            let mut parent: Option<usize> = None;
            let mut current_path = String::new();
            for segment in folder_segments {
                if !current_path.is_empty() {
                    current_path.push('/');
                }
                current_path.push_str(segment);

                let existing = folder_index.get(&current_path).copied();
                let index = match existing {
                    Some(index) => index,
                    None => {
                        let index = folders.len();
                        folders.push(PendingFolder {
                            id: folder_node_id(self.owner_directory_id, &current_path),
                            name: segment.to_string(),
                            full_path: current_path.clone(),
                            children: Vec::new(),
                        });
                        folder_index.insert(current_path.clone(), index);
                        children_of(&mut roots, &mut folders, parent).push(Slot::Folder(index));
                        index
                    }
                };
                parent = Some(index);
            }

            let full_path = if current_path.is_empty() {
                file_name.to_string()
            } else {
                format!("{current_path}/{file_name}")
            };
            let node = FileNode {
                id: file_node_id(entry, &full_path),
                name: file_name.to_string(),
                full_path: full_path.clone(),
                owner_directory_id: self.owner_directory_id,
                entry: entry.clone(),
            };

            match file_slots.get(&full_path).copied() {
                Some((slot_parent, position)) => {
                    debug!(
                        entry_id = entry.id,
                        path = %full_path,
                        "duplicate path, later entry wins"
                    );
                    children_of(&mut roots, &mut folders, slot_parent)[position] = Slot::File(node);
                    stats.replaced_duplicates += 1;
                }
                None => {
                    let siblings = children_of(&mut roots, &mut folders, parent);
                    file_slots.insert(full_path, (parent, siblings.len()));
                    siblings.push(Slot::File(node));
                    stats.files += 1;
                }
            }
        }

        stats.folders = folders.len();
        let mut forest = assemble(roots, &mut folders, self.owner_directory_id);
        sort_forest(&mut forest);

        debug!(
            owner_directory_id = self.owner_directory_id,
            files = stats.files,
            folders = stats.folders,
            skipped = stats.skipped_directories + stats.skipped_degenerate,
            "built course tree"
        );
        (forest, stats)
    }
}

fn children_of<'a>(
    roots: &'a mut Vec<Slot>,
    folders: &'a mut [PendingFolder],
    parent: Option<usize>,
) -> &'a mut Vec<Slot> {
    match parent {
        Some(index) => &mut folders[index].children,
        None => roots,
    }
}

// Every folder index appears in exactly one slot, so taking its fields is safe.
fn assemble(slots: Vec<Slot>, folders: &mut [PendingFolder], owner_directory_id: u64) -> Forest {
    let mut nodes = Vec::with_capacity(slots.len());
    for slot in slots {
        match slot {
            Slot::File(file) => nodes.push(TreeNode::File(file)),
            Slot::Folder(index) => {
                let pending = &mut folders[index];
                let id = std::mem::take(&mut pending.id);
                let name = std::mem::take(&mut pending.name);
                let full_path = std::mem::take(&mut pending.full_path);
                let children = std::mem::take(&mut pending.children);
                nodes.push(TreeNode::Folder(FolderNode {
                    id,
                    name,
                    full_path,
                    owner_directory_id,
                    children: assemble(children, folders, owner_directory_id),
                }));
            }
        }
    }
    nodes
}
