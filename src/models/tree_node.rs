use super::directory_entry::DirectoryEntry;
use serde::Serialize;

/// Ordered collection of root-level nodes.
pub type Forest = Vec<TreeNode>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    File(FileNode),
    Folder(FolderNode),
}

/// Leaf node backed by a concrete entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileNode {
    pub id: String,
    pub name: String,
    pub full_path: String,
    pub owner_directory_id: u64,
    pub entry: DirectoryEntry,
}

/// Virtual folder reconstructed from the paths of its descendants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderNode {
    pub id: String,
    pub name: String,
    pub full_path: String,
    pub owner_directory_id: u64,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn id(&self) -> &str {
        match self {
            TreeNode::File(file) => &file.id,
            TreeNode::Folder(folder) => &folder.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::File(file) => &file.name,
            TreeNode::Folder(folder) => &folder.name,
        }
    }

    pub fn full_path(&self) -> &str {
        match self {
            TreeNode::File(file) => &file.full_path,
            TreeNode::Folder(folder) => &folder.full_path,
        }
    }

    pub fn owner_directory_id(&self) -> u64 {
        match self {
            TreeNode::File(file) => file.owner_directory_id,
            TreeNode::Folder(folder) => folder.owner_directory_id,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, TreeNode::Folder(_))
    }

    /// Children of a folder; files have none.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File(_) => &[],
            TreeNode::Folder(folder) => &folder.children,
        }
    }

    pub fn entry(&self) -> Option<&DirectoryEntry> {
        match self {
            TreeNode::File(file) => Some(&file.entry),
            TreeNode::Folder(_) => None,
        }
    }
}
