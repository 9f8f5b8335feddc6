pub mod course;
pub mod directory_entry;
pub mod tree_node;

pub use course::{Course, CourseDirectory};
pub use directory_entry::{DirectoryEntry, EntryKind};
pub use tree_node::{FileNode, FolderNode, Forest, TreeNode};
