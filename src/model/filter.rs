use std::collections::BTreeSet;

use super::RepositoryRecord;

/// Pseudo-tag that disables language filtering.
pub const SHOW_ALL: &str = "Show All";

/// Tag used for repositories without a detected language.
pub const UNCLASSIFIED: &str = "Unclassified";

/// Active language selections.
///
/// Membership is OR: a record passes when any selected tag equals its raw
/// language. An empty set, or one holding [`SHOW_ALL`], passes everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSet {
    tags: BTreeSet<String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        self.tags.insert(tag.into())
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        self.tags.remove(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn is_unrestricted(&self) -> bool {
        self.tags.is_empty() || self.tags.contains(SHOW_ALL)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Matches against the raw language, so a record with no language is
    /// only admitted by an unrestricted set.
    pub fn allows(&self, record: &RepositoryRecord) -> bool {
        if self.is_unrestricted() {
            return true;
        }
        match record.language.as_deref() {
            Some(lang) => self.tags.contains(lang),
            None => false,
        }
    }
}

impl<S: Into<String>> FromIterator<S> for FilterSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().map(Into::into).collect(),
        }
    }
}
