use serde::Serialize;

use crate::model::RepositoryRecord;

/// Display projection of one repository.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    pub image: String,
    /// Shown instead of `image` when it fails to load.
    pub fallback_image: String,
    pub title: String,
    pub description: String,
    pub repo_url: String,
    pub demo_url: Option<String>,
    pub language: Option<String>,
}

impl Card {
    pub fn from_record(record: &RepositoryRecord, fallback_image: &str) -> Self {
        Self {
            image: record.display_image.clone(),
            fallback_image: fallback_image.to_string(),
            title: record.display_title.clone(),
            description: record.description.clone().unwrap_or_default(),
            repo_url: record.html_url.clone(),
            demo_url: record.demo_url.clone(),
            language: record.language.clone(),
        }
    }
}
