//! The pagination engine
//!
//! One overfetch scan per page request: ask the store for `limit + 1` rows
//! so the lookahead row answers "is there more?" without a count query,
//! trim the lookahead off, and derive cursors from the trimmed page.

use super::{Record, RecordStore, Scan};
use crate::shared::{Direction, DomainResult, PageMeta, PageRequest, PageResult};

/// Fetch one page of records from `store`.
///
/// Issues exactly one scan. Pagination state lives entirely in the cursor
/// the caller passes back in, so concurrent calls need no coordination.
///
/// Precondition: `request.limit` is in `1..=MAX_LIMIT`. Bounds are the
/// responsibility of the caller-facing layer; the engine trusts its input.
///
/// Cursor rules, all derived from the trimmed page:
/// - `next_cursor` is the last row's id, present when going forward with
///   more rows ahead, or going backward from an anchor (the anchor page is
///   known to exist ahead).
/// - `prev_cursor` is the first row's id, present when going backward with
///   more rows behind, or going forward from an anchor.
/// - A first page (`Next`, no cursor) never carries a `prev_cursor`.
pub async fn paginate<S>(
    store: &S,
    filter: &S::Filter,
    request: &PageRequest,
) -> DomainResult<PageResult<S::Rec>>
where
    S: RecordStore + ?Sized,
{
    let limit = request.limit as usize;
    let overfetch = limit as i64 + 1;

    let take = match request.direction {
        Direction::Next => overfetch,
        Direction::Prev => -overfetch,
    };
    let anchored = request.cursor.is_some();

    let rows = store
        .scan(
            filter,
            Scan {
                cursor: request.cursor.clone(),
                take,
                // Skip the anchor row itself.
                skip: usize::from(anchored),
            },
        )
        .await?;

    let has_more = rows.len() > limit;

    // Drop the lookahead row: trailing when scanning forward, leading
    // (the oldest row of the backward window) when scanning backward.
    let data: Vec<S::Rec> = if has_more {
        match request.direction {
            Direction::Next => rows.into_iter().take(limit).collect(),
            Direction::Prev => rows.into_iter().skip(1).collect(),
        }
    } else {
        rows
    };

    let next_cursor = if (request.direction == Direction::Next && has_more)
        || (request.direction == Direction::Prev && anchored)
    {
        data.last().map(Record::cursor)
    } else {
        None
    };
    let prev_cursor = if (request.direction == Direction::Next && anchored)
        || (request.direction == Direction::Prev && has_more)
    {
        data.first().map(Record::cursor)
    } else {
        None
    };

    let page_meta = PageMeta {
        next_cursor,
        prev_cursor,
        has_more,
        count: data.len(),
    };

    Ok(PageResult { data, page_meta })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::shared::Cursor;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row(u64);

    impl Record for Row {
        type Id = u64;

        fn id(&self) -> u64 {
            self.0
        }
    }

    /// Store double that returns a scripted response and records the scan
    /// it was asked for.
    struct ScriptedStore {
        response: Vec<Row>,
        seen: Mutex<Vec<Scan>>,
    }

    impl ScriptedStore {
        fn returning(ids: &[u64]) -> Self {
            Self {
                response: ids.iter().copied().map(Row).collect(),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn last_scan(&self) -> Scan {
            self.seen.lock().unwrap().last().cloned().unwrap()
        }

        fn scan_count(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl RecordStore for ScriptedStore {
        type Rec = Row;
        type Filter = ();

        async fn scan(&self, _filter: &(), scan: Scan) -> DomainResult<Vec<Row>> {
            self.seen.lock().unwrap().push(scan);
            Ok(self.response.clone())
        }
    }

    fn ids(page: &PageResult<Row>) -> Vec<u64> {
        page.data.iter().map(|r| r.0).collect()
    }

    #[tokio::test]
    async fn first_page_overfetches_without_skip() {
        let store = ScriptedStore::returning(&[1, 2, 3]);
        let page = paginate(&store, &(), &PageRequest::first(2)).await.unwrap();

        assert_eq!(
            store.last_scan(),
            Scan {
                cursor: None,
                take: 3,
                skip: 0,
            }
        );
        assert_eq!(store.scan_count(), 1);
        assert_eq!(ids(&page), vec![1, 2]);
        assert!(page.page_meta.has_more);
        assert_eq!(page.page_meta.next_cursor, Some(Cursor::new("2")));
        assert_eq!(page.page_meta.prev_cursor, None);
        assert_eq!(page.page_meta.count, 2);
    }

    #[tokio::test]
    async fn anchored_next_skips_the_anchor_row() {
        let store = ScriptedStore::returning(&[3, 4, 5]);
        let page = paginate(&store, &(), &PageRequest::after("2", 2))
            .await
            .unwrap();

        assert_eq!(
            store.last_scan(),
            Scan {
                cursor: Some(Cursor::new("2")),
                take: 3,
                skip: 1,
            }
        );
        assert_eq!(ids(&page), vec![3, 4]);
        assert_eq!(page.page_meta.next_cursor, Some(Cursor::new("4")));
        assert_eq!(page.page_meta.prev_cursor, Some(Cursor::new("3")));
        assert!(page.page_meta.has_more);
    }

    #[tokio::test]
    async fn prev_flips_take_sign_and_drops_leading_lookahead() {
        // Backward window in ascending order; the extra row is the oldest.
        let store = ScriptedStore::returning(&[2, 3, 4]);
        let page = paginate(&store, &(), &PageRequest::before("5", 2))
            .await
            .unwrap();

        assert_eq!(
            store.last_scan(),
            Scan {
                cursor: Some(Cursor::new("5")),
                take: -3,
                skip: 1,
            }
        );
        assert_eq!(ids(&page), vec![3, 4]);
        assert!(page.page_meta.has_more);
        assert_eq!(page.page_meta.prev_cursor, Some(Cursor::new("3")));
        // Anchored backward walk: the page we came from is ahead.
        assert_eq!(page.page_meta.next_cursor, Some(Cursor::new("4")));
    }

    #[tokio::test]
    async fn prev_without_more_rows_keeps_whole_window() {
        let store = ScriptedStore::returning(&[1, 2]);
        let page = paginate(&store, &(), &PageRequest::before("3", 2))
            .await
            .unwrap();

        assert_eq!(ids(&page), vec![1, 2]);
        assert!(!page.page_meta.has_more);
        assert_eq!(page.page_meta.prev_cursor, None);
        assert_eq!(page.page_meta.next_cursor, Some(Cursor::new("2")));
    }

    #[tokio::test]
    async fn short_final_page_has_no_next_cursor() {
        let store = ScriptedStore::returning(&[5]);
        let page = paginate(&store, &(), &PageRequest::after("4", 2))
            .await
            .unwrap();

        assert_eq!(ids(&page), vec![5]);
        assert!(!page.page_meta.has_more);
        assert_eq!(page.page_meta.next_cursor, None);
        assert_eq!(page.page_meta.prev_cursor, Some(Cursor::new("5")));
        assert_eq!(page.page_meta.count, 1);
    }

    #[tokio::test]
    async fn empty_result_yields_null_cursors() {
        let store = ScriptedStore::returning(&[]);
        let page = paginate(&store, &(), &PageRequest::first(10)).await.unwrap();

        assert!(page.data.is_empty());
        assert_eq!(
            page.page_meta,
            PageMeta {
                next_cursor: None,
                prev_cursor: None,
                has_more: false,
                count: 0,
            }
        );
    }

    #[tokio::test]
    async fn exact_boundary_dataset_is_not_more() {
        // Dataset size equals the limit: the lookahead row never arrives.
        let store = ScriptedStore::returning(&[1, 2]);
        let page = paginate(&store, &(), &PageRequest::first(2)).await.unwrap();

        assert_eq!(ids(&page), vec![1, 2]);
        assert!(!page.page_meta.has_more);
        assert_eq!(page.page_meta.next_cursor, None);
        assert_eq!(page.page_meta.prev_cursor, None);
    }

    #[tokio::test]
    async fn first_page_is_idempotent() {
        let store = ScriptedStore::returning(&[1, 2, 3]);
        let request = PageRequest::first(2);
        let a = paginate(&store, &(), &request).await.unwrap();
        let b = paginate(&store, &(), &request).await.unwrap();

        assert_eq!(ids(&a), ids(&b));
        assert_eq!(a.page_meta, b.page_meta);
    }
}
