use super::icons::file_icon;
use crate::models::{Course, CourseDirectory, FileNode, FolderNode, TreeNode};
use crate::services::tree::identity::unix_millis;
use serde::Serialize;

pub const OPEN_FILE_COMMAND: &str = "intelligent-ide.course.openFile";

/// One row of the course explorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CourseTreeItem {
    Course(Course),
    Directory(CourseDirectory),
    Folder(FolderNode),
    File(FileNode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Collapsible {
    None,
    Collapsed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    pub command: &'static str,
    pub title: &'static str,
}

impl From<TreeNode> for CourseTreeItem {
    fn from(node: TreeNode) -> Self {
        match node {
            TreeNode::File(file) => CourseTreeItem::File(file),
            TreeNode::Folder(folder) => CourseTreeItem::Folder(folder),
        }
    }
}

impl CourseTreeItem {
    pub fn label(&self) -> &str {
        match self {
            CourseTreeItem::Course(course) => &course.name,
            CourseTreeItem::Directory(directory) => &directory.name,
            CourseTreeItem::Folder(folder) => &folder.name,
            CourseTreeItem::File(file) => &file.name,
        }
    }

    /// Identity used by the tree view to keep expansion state across refreshes.
    pub fn id(&self) -> String {
        match self {
            CourseTreeItem::Course(course) => {
                let millis = course.created_at.as_deref().and_then(unix_millis);
                match millis {
                    Some(millis) => format!("course-{}-{}", course.id, millis),
                    None => format!("course-{}", course.id),
                }
            }
            CourseTreeItem::Directory(directory) => format!("directory-{}", directory.id),
            CourseTreeItem::Folder(folder) => folder.id.clone(),
            CourseTreeItem::File(file) => file.id.clone(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CourseTreeItem::Course(_) => "book",
            CourseTreeItem::Directory(_) | CourseTreeItem::Folder(_) => "folder",
            CourseTreeItem::File(file) => file_icon(&file.full_path),
        }
    }

    pub fn context_value(&self) -> &'static str {
        match self {
            CourseTreeItem::Course(_) => "course",
            CourseTreeItem::Directory(_) => "directory",
            CourseTreeItem::Folder(_) => "virtual-directory",
            CourseTreeItem::File(_) => "entry-file",
        }
    }

    pub fn tooltip(&self) -> String {
        match self {
            CourseTreeItem::Course(course) => {
                format!("Course: {} (ID: {})", course.name, course.id)
            }
            CourseTreeItem::Directory(directory) => {
                format!("Directory: {} (ID: {})", directory.name, directory.id)
            }
            CourseTreeItem::Folder(folder) => {
                format!("Directory: {} (ID: {})", folder.name, folder.id)
            }
            CourseTreeItem::File(file) => {
                format!("File: {} (ID: {})", file.full_path, file.entry.id)
            }
        }
    }

    pub fn collapsible(&self) -> Collapsible {
        match self {
            CourseTreeItem::File(_) => Collapsible::None,
            _ => Collapsible::Collapsed,
        }
    }

    /// Command bound to a click on the row.
    pub fn command(&self) -> Option<Command> {
        match self {
            CourseTreeItem::File(_) => Some(Command {
                command: OPEN_FILE_COMMAND,
                title: "Open File",
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DirectoryEntry, EntryKind};
    use crate::services::tree::PathTreeBuilder;

    fn course(created_at: Option<&str>) -> CourseTreeItem {
        CourseTreeItem::Course(Course {
            id: 4,
            name: "Operating Systems".to_string(),
            description: String::new(),
            teacher_name: Some("Lin".to_string()),
            created_at: created_at.map(str::to_string),
        })
    }

    #[test]
    fn course_presentation() {
        let item = course(Some("1970-01-01T00:00:02Z"));
        assert_eq!(item.id(), "course-4-2000");
        assert_eq!(course(None).id(), "course-4");
        assert_eq!(item.icon(), "book");
        assert_eq!(item.tooltip(), "Course: Operating Systems (ID: 4)");
        assert_eq!(item.collapsible(), Collapsible::Collapsed);
        assert_eq!(item.command(), None);
    }

    #[test]
    fn file_and_folder_presentation() {
        let entry = DirectoryEntry {
            id: 12,
            course_directory_id: Some(3),
            path: "/hw/solution.py".to_string(),
            kind: EntryKind::File,
            created_at: String::new(),
            storage_name: String::new(),
        };
        let mut forest = PathTreeBuilder::new(3).build(&[entry]);
        let folder = CourseTreeItem::from(forest.remove(0));
        assert_eq!(folder.context_value(), "virtual-directory");
        assert_eq!(folder.icon(), "folder");
        assert_eq!(folder.label(), "hw");

        let CourseTreeItem::Folder(folder) = folder else {
            panic!("expected a folder");
        };
        let file = CourseTreeItem::from(folder.children[0].clone());
        assert_eq!(file.icon(), "symbol-namespace");
        assert_eq!(file.context_value(), "entry-file");
        assert_eq!(file.tooltip(), "File: hw/solution.py (ID: 12)");
        assert_eq!(file.collapsible(), Collapsible::None);
        assert_eq!(file.command().map(|c| c.command), Some(OPEN_FILE_COMMAND));
    }
}
