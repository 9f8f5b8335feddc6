use super::path::normalize_segments;
use crate::models::TreeNode;

/// Visits nodes depth-first in display order, passing the nesting depth.
pub fn walk<'a>(nodes: &'a [TreeNode], visit: &mut impl FnMut(&'a TreeNode, usize)) {
    walk_at(nodes, 0, visit);
}

fn walk_at<'a>(nodes: &'a [TreeNode], depth: usize, visit: &mut impl FnMut(&'a TreeNode, usize)) {
    for node in nodes {
        visit(node, depth);
        walk_at(node.children(), depth + 1, visit);
    }
}

pub fn count_files(nodes: &[TreeNode]) -> usize {
    let mut count = 0;
    walk(nodes, &mut |node, _| {
        if !node.is_folder() {
            count += 1;
        }
    });
    count
}

pub fn count_folders(nodes: &[TreeNode]) -> usize {
    let mut count = 0;
    walk(nodes, &mut |node, _| {
        if node.is_folder() {
            count += 1;
        }
    });
    count
}

/// Looks a node up by its path. Intermediate segments must be folders; when a
/// folder and a file share the final segment the folder is returned.
pub fn find_by_path<'a>(nodes: &'a [TreeNode], path: &str) -> Option<&'a TreeNode> {
    let segments = normalize_segments(path)?;
    let (last, parents) = segments.split_last()?;

    let mut level = nodes;
    for segment in parents {
        level = level
            .iter()
            .find(|node| node.is_folder() && node.name() == *segment)?
            .children();
    }
    level
        .iter()
        .find(|node| node.is_folder() && node.name() == *last)
        .or_else(|| level.iter().find(|node| node.name() == *last))
}

pub fn find_by_id<'a>(nodes: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
    let mut found = None;
    walk(nodes, &mut |node, _| {
        if found.is_none() && node.id() == id {
            found = Some(node);
        }
    });
    found
}
