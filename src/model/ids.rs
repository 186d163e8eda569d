use serde::{Deserialize, Serialize};

pub const SELECTOR_PREFIX: &str = "lang-filter-";

/// Token identifying one language selector on the filter surface.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectorId(pub String);

impl SelectorId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SelectorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Prefix + counter generator. Tokens are never persisted, so uniqueness only
/// has to hold for the lifetime of the generator.
#[derive(Clone, Debug, Default)]
pub struct SelectorIds {
    next: u64,
}

impl SelectorIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> SelectorId {
        let id = SelectorId(format!("{}{}", SELECTOR_PREFIX, self.next));
        self.next += 1;
        id
    }
}
