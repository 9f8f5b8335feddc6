//! The course backend as seen by the explorer: courses, their directories,
//! and the flat entry list of each directory.

pub mod envelope;
pub mod memory;

pub use envelope::{decode_entries, decode_response, ApiResponse, ResponseStatus};
pub use memory::{MemoryEntrySource, Snapshot};

use crate::core::errors::Result;
use crate::models::{Course, CourseDirectory, DirectoryEntry};

/// Root path requested when materializing a whole directory.
pub const ROOT_PATH: &str = "/";

pub trait EntrySource: Send + Sync {
    fn courses(&self) -> Result<Vec<Course>>;

    fn directories(&self, course_id: u64) -> Result<Vec<CourseDirectory>>;

    /// Entries of `directory_id` under `path`. With `fuzzy` every entry whose
    /// path starts with `path` is returned, otherwise only an exact match.
    fn entries(&self, directory_id: u64, path: &str, fuzzy: bool) -> Result<Vec<DirectoryEntry>>;
}
