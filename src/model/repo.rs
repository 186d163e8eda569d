use serde::{Deserialize, Serialize};

/// A repository as shown in the gallery.
///
/// Everything except `display_image` and `display_title` is copied from the
/// listing payload; those two are derived once at fetch time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub id: u64,
    pub owner_login: String,
    pub fork: bool,
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// `;`-delimited image URLs.
    #[serde(default)]
    pub homepage: Option<String>,

    pub html_url: String,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,

    pub display_image: String,
    pub display_title: String,
}

impl RepositoryRecord {
    /// Image candidates listed in `homepage`, empty segments dropped.
    pub fn homepage_images(&self) -> Vec<&str> {
        self.homepage
            .as_deref()
            .map(split_images)
            .unwrap_or_default()
    }
}

pub(crate) fn split_images(homepage: &str) -> Vec<&str> {
    homepage
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn display_title(name: &str) -> String {
    name.replace('-', " ")
}

/// Ordered chunk of records; never longer than the page size it was cut with.
pub type Page = Vec<RepositoryRecord>;
