//! Fetch-independent gallery pipeline: language extraction, paging, paced
//! rendering and filter state.

mod card;
mod controller;
mod languages;
mod pacing;
mod pager;
mod renderer;

pub use self::card::Card;
pub use self::controller::{GalleryController, LanguageSelector, NO_MATCHES_MESSAGE};
pub use self::languages::extract_languages;
pub use self::pacing::{Delay, NoDelay, ThreadSleep};
pub use self::pager::paginate;
pub use self::renderer::Renderer;

#[cfg(test)]
#[path = "tests/gallery/pipeline_tests.rs"]
mod pipeline_tests;

#[cfg(test)]
#[path = "tests/gallery/controller_tests.rs"]
mod controller_tests;
