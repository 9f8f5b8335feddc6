//! Presentation-stable node identifiers.
//!
//! Tree views key expansion state on node ids, so ids must be a pure function
//! of the data: re-fetching an unchanged directory yields the same ids.

use crate::models::DirectoryEntry;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

pub const FILE_TAG: &str = "entry";
pub const FOLDER_TAG: &str = "virtual-directory";

/// `entry-{id}-{created_at millis}-{path}`.
pub fn file_node_id(entry: &DirectoryEntry, full_path: &str) -> String {
    format!(
        "{}-{}-{}-{}",
        FILE_TAG,
        entry.id,
        timestamp_key(&entry.created_at),
        full_path
    )
}

/// `virtual-directory-{owner}-{cumulative path}`.
pub fn folder_node_id(owner_directory_id: u64, full_path: &str) -> String {
    format!("{}-{}-{}", FOLDER_TAG, owner_directory_id, full_path)
}

/// Unix milliseconds of `created_at` when it parses, the raw string otherwise.
pub fn timestamp_key(created_at: &str) -> String {
    match unix_millis(created_at) {
        Some(millis) => millis.to_string(),
        None => created_at.to_string(),
    }
}

/// Accepts RFC 3339 and the naive ISO-8601 forms the backend emits; naive
/// timestamps are read as UTC.
pub fn unix_millis(created_at: &str) -> Option<i128> {
    let created_at = created_at.trim();
    if let Ok(dt) = OffsetDateTime::parse(created_at, &Rfc3339) {
        return Some(dt.unix_timestamp_nanos() / 1_000_000);
    }

    let naive_formats = [
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    ];
    naive_formats.into_iter().find_map(|format| {
        PrimitiveDateTime::parse(created_at, format)
            .ok()
            .map(|dt| dt.assume_utc().unix_timestamp_nanos() / 1_000_000)
    })
}
