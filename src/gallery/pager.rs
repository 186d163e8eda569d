use std::num::NonZeroUsize;

use crate::model::{FilterSet, Page, RepositoryRecord};

/// Filters `records` through `filter` and cuts the survivors into pages of at
/// most `page_size`, preserving order. Only the last page may be short.
pub fn paginate(
    records: &[RepositoryRecord],
    filter: &FilterSet,
    page_size: NonZeroUsize,
) -> Vec<Page> {
    let filtered: Vec<&RepositoryRecord> = records.iter().filter(|r| filter.allows(r)).collect();
    filtered
        .chunks(page_size.get())
        .map(|chunk| chunk.iter().map(|r| (*r).clone()).collect())
        .collect()
}
