use std::collections::HashSet;

use crate::model::{RepositoryRecord, SHOW_ALL, UNCLASSIFIED};

/// Distinct language tags in first-occurrence order, with [`SHOW_ALL`] first
/// and missing languages reported as [`UNCLASSIFIED`].
pub fn extract_languages(records: &[RepositoryRecord]) -> Vec<String> {
    let mut seen = HashSet::from([SHOW_ALL]);
    let mut out = vec![SHOW_ALL.to_string()];
    for r in records {
        let tag = r.language.as_deref().unwrap_or(UNCLASSIFIED);
        if seen.insert(tag) {
            out.push(tag.to_string());
        }
    }
    out
}
