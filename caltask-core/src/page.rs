//! Paginated collection fetching.
//!
//! Backend list endpoints report `current_page` / `total_pages` alongside
//! each page. Dedup and matching must only ever run against a complete
//! snapshot, so pages are merged into one collection before anything
//! downstream sees them.

use std::future::Future;

/// One page of a remote collection.
#[derive(Debug, Clone)]
pub struct PageOf<T> {
    pub data: Vec<T>,
    pub current_page: u32,
    pub total_pages: u32,
}

/// A merged collection, with an explicit completeness flag.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    /// Records in arrival order across pages.
    pub records: Vec<T>,
    /// False when the page ceiling was hit before the source reported the
    /// last page. Callers decide whether to treat that as fatal.
    pub complete: bool,
}

/// Fetch pages `1, 2, …` until the source reports the last page, appending
/// records in arrival order.
///
/// `page_cap` bounds the loop against a source that misreports
/// `total_pages`; hitting it yields `complete == false` rather than a
/// silently truncated result. Transport errors propagate immediately.
pub async fn fetch_all<T, E, F, Fut>(page_cap: u32, mut fetch: F) -> Result<Collection<T>, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<PageOf<T>, E>>,
{
    let mut records = Vec::new();

    for page in 1..=page_cap.max(1) {
        let mut chunk = fetch(page).await?;
        records.append(&mut chunk.data);

        if chunk.current_page >= chunk.total_pages {
            return Ok(Collection {
                records,
                complete: true,
            });
        }
    }

    Ok(Collection {
        records,
        complete: false,
    })
}
