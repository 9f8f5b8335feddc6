use crate::models::TreeNode;

/// Renders the forest as an indented text tree. Folder names end in `/`.
pub fn render_forest(nodes: &[TreeNode]) -> String {
    let mut lines = Vec::new();
    render_level(nodes, "", &mut lines);
    lines.join("\n")
}

fn render_level(nodes: &[TreeNode], prefix: &str, lines: &mut Vec<String>) {
    for (index, node) in nodes.iter().enumerate() {
        let last = index + 1 == nodes.len();
        let branch = if last { "└── " } else { "├── " };
        let suffix = if node.is_folder() { "/" } else { "" };
        lines.push(format!("{prefix}{branch}{}{suffix}", node.name()));

        if node.is_folder() {
            let child_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
            render_level(node.children(), &child_prefix, lines);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DirectoryEntry, EntryKind};
    use crate::services::tree::PathTreeBuilder;

    #[test]
    fn renders_nested_tree() {
        let entries: Vec<DirectoryEntry> = ["/src/main.rs", "/src/util/io.rs", "/README.md"]
            .iter()
            .enumerate()
            .map(|(i, path)| DirectoryEntry {
                id: i as u64,
                course_directory_id: None,
                path: path.to_string(),
                kind: EntryKind::File,
                created_at: String::new(),
                storage_name: String::new(),
            })
            .collect();
        let forest = PathTreeBuilder::new(1).build(&entries);

        let expected = "\
├── src/
│   ├── util/
│   │   └── io.rs
│   └── main.rs
└── README.md";
        assert_eq!(render_forest(&forest), expected);
    }

    #[test]
    fn empty_forest_renders_nothing() {
        assert_eq!(render_forest(&[]), "");
    }
}
