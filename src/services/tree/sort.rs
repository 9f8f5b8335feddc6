use crate::models::TreeNode;
use std::cmp::Ordering;

/// Sorts every level of the forest in place: folders before files, then by
/// [`collate`] on the display name.
pub fn sort_forest(nodes: &mut [TreeNode]) {
    nodes.sort_by(compare_nodes);
    for node in nodes.iter_mut() {
        if let TreeNode::Folder(folder) = node {
            sort_forest(&mut folder.children);
        }
    }
}

pub fn compare_nodes(a: &TreeNode, b: &TreeNode) -> Ordering {
    // Folders before files
    match b.is_folder().cmp(&a.is_folder()) {
        Ordering::Equal => collate(a.name(), b.name()),
        kind_order => kind_order,
    }
}

/// Case-insensitive comparison that breaks ties with lowercase before
/// uppercase and finally raw bytes, giving a total order.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collate_ignores_case_first() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn collate_lowercase_wins_ties() {
        assert_eq!(collate("a.txt", "A.txt"), Ordering::Less);
        assert_eq!(collate("A.txt", "a.txt"), Ordering::Greater);
        assert_eq!(collate("same", "same"), Ordering::Equal);
    }

    #[test]
    fn collate_numbers_and_punctuation() {
        let mut names = vec!["b", "_x", "10", "2", "A"];
        names.sort_by(|a, b| collate(a, b));
        assert_eq!(names, vec!["10", "2", "_x", "A", "b"]);
    }
}
