//! Wire shape of the repository listing endpoint.

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ListingOwner {
    pub login: String,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RepoListing {
    pub id: u64,
    pub owner: ListingOwner,
    pub fork: bool,
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub homepage: Option<String>,

    pub html_url: String,

    #[serde(default)]
    pub language: Option<String>,

    // Not part of the hosting API; fixtures and mirrors may provide it.
    #[serde(default)]
    pub demo: Option<String>,
}
