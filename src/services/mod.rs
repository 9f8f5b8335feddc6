pub mod backend;
pub mod tree;
