//! Cursor-based pagination types
//!
//! A page is addressed by an opaque [`Cursor`] pointing at the last record
//! the caller has seen, plus a direction and a limit. The response carries
//! the page plus [`PageMeta`] with the cursors needed to continue walking
//! in either direction.

use serde::{Deserialize, Serialize};

/// Default page size when the caller does not specify one.
pub const DEFAULT_LIMIT: u32 = 10;

/// Upper bound on page size. Enforced by the caller-facing layer
/// (e.g. [`ProductService`](crate::application::ProductService)), not by
/// the engine itself.
pub const MAX_LIMIT: u32 = 100;

/// Opaque token referencing a record's position in a stable ordering.
///
/// The value is the stringified id of the record it was issued from and is
/// only meaningful against the key space that issued it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Cursor {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Cursor {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Walk direction relative to the cursor anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Next,
    Prev,
}

/// A request for one page of records.
#[derive(Debug, Clone)]
pub struct PageRequest {
    /// Anchor to resume from. `None` means the start of the key space for
    /// `Next` and the end of it for `Prev`.
    pub cursor: Option<Cursor>,
    /// Maximum number of records to return. Must be in `1..=MAX_LIMIT`.
    pub limit: u32,
    pub direction: Direction,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            cursor: None,
            limit: DEFAULT_LIMIT,
            direction: Direction::Next,
        }
    }
}

impl PageRequest {
    /// First page of `limit` records.
    pub fn first(limit: u32) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Page of `limit` records after `cursor`.
    pub fn after(cursor: impl Into<Cursor>, limit: u32) -> Self {
        Self {
            cursor: Some(cursor.into()),
            limit,
            direction: Direction::Next,
        }
    }

    /// Page of `limit` records before `cursor`.
    pub fn before(cursor: impl Into<Cursor>, limit: u32) -> Self {
        Self {
            cursor: Some(cursor.into()),
            limit,
            direction: Direction::Prev,
        }
    }
}

/// Page metadata derived from the trimmed page, computed fresh per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Cursor for the page after this one. Present only when a next page
    /// is known to exist relative to this request's anchor.
    pub next_cursor: Option<Cursor>,
    /// Cursor for the page before this one.
    pub prev_cursor: Option<Cursor>,
    /// Whether the overfetch saw more rows than the limit.
    pub has_more: bool,
    /// Number of records in this page.
    pub count: usize,
}

/// One page of records plus its metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub data: Vec<T>,
    pub page_meta: PageMeta,
}
