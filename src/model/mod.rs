mod config;
mod filter;
mod ids;
mod repo;

pub use self::config::{CONFIG_VERSION, GalleryConfig};
pub use self::filter::{FilterSet, SHOW_ALL, UNCLASSIFIED};
pub use self::ids::{SELECTOR_PREFIX, SelectorId, SelectorIds};
pub use self::repo::{Page, RepositoryRecord, display_title};
pub(crate) use self::repo::split_images;

#[cfg(test)]
#[path = "../tests/model/filter_tests.rs"]
mod filter_tests;

#[cfg(test)]
#[path = "../tests/model/config_tests.rs"]
mod config_tests;
