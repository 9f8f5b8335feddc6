//! Flat entry list to folder/file forest.

pub mod builder;
pub mod identity;
pub mod path;
pub mod query;
pub mod render;
pub mod sort;

pub use builder::{BuildStats, PathTreeBuilder};
pub use query::{count_files, count_folders, find_by_id, find_by_path, walk};
pub use render::render_forest;
pub use sort::{collate, sort_forest};
