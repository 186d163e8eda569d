//! Listing fetch and normalization into gallery records.

use super::*;
use crate::model::{display_title, split_images};

impl RemoteClient {
    /// Fetches the account's repositories.
    ///
    /// Any failure (transport, status, body, JSON shape) is logged and turned
    /// into an empty list; callers treat "no data" and "fetch failed" alike.
    pub fn fetch_repositories(&self, picker: &mut dyn ImagePicker) -> Vec<RepositoryRecord> {
        let url = self.config.listing_url();
        match self.try_fetch_repositories(&url, picker) {
            Ok(records) => {
                tracing::info!(url = %url, count = records.len(), "fetched repositories");
                records
            }
            Err(err) => {
                let err = format!("{:#}", err);
                tracing::warn!(url = %url, error = %err, "repository fetch failed");
                Vec::new()
            }
        }
    }

    fn try_fetch_repositories(
        &self,
        url: &str,
        picker: &mut dyn ImagePicker,
    ) -> Result<Vec<RepositoryRecord>> {
        let bytes = self.get_json_bytes(url, "list repositories")?;
        let listings: Vec<RepoListing> =
            serde_json::from_slice(&bytes).context("parse repository listing")?;
        tracing::debug!(total = listings.len(), "listing decoded");
        Ok(select_owned(
            listings,
            &self.config.account,
            &self.config.fallback_images,
            picker,
        ))
    }
}

/// Keeps non-fork listings owned by `account` and derives display fields.
pub fn select_owned(
    listings: Vec<RepoListing>,
    account: &str,
    fallback_images: &[String],
    picker: &mut dyn ImagePicker,
) -> Vec<RepositoryRecord> {
    listings
        .into_iter()
        .filter(|l| l.owner.login.eq_ignore_ascii_case(account) && !l.fork)
        .map(|l| {
            let display_image = choose_image(l.homepage.as_deref(), fallback_images, picker);
            RepositoryRecord {
                id: l.id,
                display_title: display_title(&l.name),
                owner_login: l.owner.login,
                fork: l.fork,
                name: l.name,
                description: l.description,
                homepage: l.homepage,
                html_url: l.html_url,
                language: l.language,
                demo_url: l.demo,
                display_image,
            }
        })
        .collect()
}

fn choose_image(
    homepage: Option<&str>,
    fallback_images: &[String],
    picker: &mut dyn ImagePicker,
) -> String {
    if let Some(homepage) = homepage {
        let images = split_images(homepage);
        if !images.is_empty() {
            let i = picker.pick(images.len()).min(images.len() - 1);
            return images[i].to_string();
        }
    }
    if fallback_images.is_empty() {
        return String::new();
    }
    let i = picker.pick(fallback_images.len()).min(fallback_images.len() - 1);
    fallback_images[i].clone()
}
