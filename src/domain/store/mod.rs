//! Ordered record store capability
//!
//! The pagination engine does not talk to a database directly; it consumes
//! [`RecordStore`], a capability that scans an ordered key space from an
//! optional anchor. Storage backends implement the trait; the engine in
//! [`paginate`] stays purely computational.

mod paginate;

pub use paginate::paginate;

use async_trait::async_trait;

use crate::shared::{Cursor, DomainResult};

/// An entity with a strictly ordered, unique, immutable identifier.
///
/// Ascending id order must be fixed for the lifetime of the dataset;
/// cursor stability depends on it.
pub trait Record: Send + Sync {
    type Id: Ord + Clone + std::fmt::Display + Send + Sync;

    fn id(&self) -> Self::Id;

    /// Cursor token for this record: the stringified id.
    fn cursor(&self) -> Cursor {
        Cursor::new(self.id().to_string())
    }
}

/// One scan request against the store's ascending-id key space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan {
    /// Anchor position. The anchor row itself is included in the window;
    /// `skip` exists to drop it.
    pub cursor: Option<Cursor>,
    /// Signed row cap. Positive scans forward from the anchor, negative
    /// scans backward; the magnitude bounds the row count. Rows come back
    /// in ascending id order either way.
    pub take: i64,
    /// Rows to drop at the anchor end of the window (0 or 1). Applied only
    /// when the exact anchor row exists; a cursor pointing at a deleted id
    /// is treated as a boundary, not a row.
    pub skip: usize,
}

/// Read capability over an ordered record collection.
#[async_trait]
pub trait RecordStore: Send + Sync {
    type Rec: Record;
    /// Filter criteria, composed by the caller. Opaque to the pagination
    /// engine.
    type Filter: Send + Sync;

    /// Return the rows matching `filter` within the scan window, in
    /// ascending id order.
    ///
    /// A cursor that does not denote a position in this key space (e.g. a
    /// token that cannot be parsed as an id) is a
    /// [`Validation`](crate::shared::DomainError::Validation) error.
    async fn scan(&self, filter: &Self::Filter, scan: Scan) -> DomainResult<Vec<Self::Rec>>;
}
