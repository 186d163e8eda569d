use anyhow::{Context, Result};

use crate::model::{GalleryConfig, RepositoryRecord};

mod fetch;
mod http_client;
mod picker;
mod types;

pub use self::fetch::select_owned;
pub use self::picker::{ImagePicker, OsRandomPicker};
pub use self::types::{ListingOwner, RepoListing};

/// Blocking client for the repository listing endpoint.
pub struct RemoteClient {
    config: GalleryConfig,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(config: GalleryConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(20))
            .build()
            .context("build reqwest client")?;
        Ok(Self { config, client })
    }
}

#[cfg(test)]
#[path = "tests/remote/fetch_tests.rs"]
mod fetch_tests;
