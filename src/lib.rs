//! Course explorer tree materialization.
//!
//! Turns the flat, path-addressed entry lists a course backend returns into
//! an ordered forest of folders and files that a tree view can expand lazily.

pub mod core;
pub mod models;
pub mod pages;
pub mod services;
