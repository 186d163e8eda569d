use std::num::NonZeroUsize;

use super::{Delay, Renderer, extract_languages, paginate};
use crate::model::{FilterSet, GalleryConfig, RepositoryRecord, SelectorId, SelectorIds};
use crate::sink::CardSink;

pub const NO_MATCHES_MESSAGE: &str = "No projects match the selected languages.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageSelector {
    pub id: SelectorId,
    pub tag: String,
    pub checked: bool,
}

/// Owns the fetched projects, the active filter and the render state.
///
/// Every change to the filter clears the surface, re-pages the projects and
/// replays as many pages as were on screen before the change.
#[derive(Clone, Debug)]
pub struct GalleryController {
    projects: Vec<RepositoryRecord>,
    selectors: Vec<LanguageSelector>,
    filter: FilterSet,
    page_size: NonZeroUsize,
    renderer: Renderer,
}

impl GalleryController {
    pub fn new(projects: Vec<RepositoryRecord>, config: &GalleryConfig) -> Self {
        let mut ids = SelectorIds::new();
        let selectors = extract_languages(&projects)
            .into_iter()
            .map(|tag| LanguageSelector {
                id: ids.next_id(),
                tag,
                checked: false,
            })
            .collect();
        Self {
            projects,
            selectors,
            filter: FilterSet::new(),
            page_size: config.page_size,
            renderer: Renderer::new(config.reveal_delay(), config.broken_image.clone()),
        }
    }

    pub fn projects(&self) -> &[RepositoryRecord] {
        &self.projects
    }

    pub fn languages(&self) -> Vec<&str> {
        self.selectors.iter().map(|s| s.tag.as_str()).collect()
    }

    pub fn selectors(&self) -> &[LanguageSelector] {
        &self.selectors
    }

    pub fn filter(&self) -> &FilterSet {
        &self.filter
    }

    pub fn pages_shown(&self) -> usize {
        self.renderer.pages_shown()
    }

    /// Initial render: all projects, first page only.
    pub fn load(&mut self, sink: &mut dyn CardSink, delay: &mut dyn Delay) {
        self.rerender(1, sink, delay);
    }

    /// Reveals one more page. Returns false when nothing was pending.
    pub fn show_more(&mut self, sink: &mut dyn CardSink, delay: &mut dyn Delay) -> bool {
        if !self.renderer.has_more() {
            sink.set_show_more_visible(false);
            return false;
        }
        self.renderer.advance(sink, delay);
        true
    }

    /// Checks or unchecks `tag` and re-renders.
    pub fn toggle(
        &mut self,
        tag: &str,
        checked: bool,
        sink: &mut dyn CardSink,
        delay: &mut dyn Delay,
    ) {
        if checked {
            self.filter.insert(tag);
        } else {
            self.filter.remove(tag);
        }
        for s in self.selectors.iter_mut().filter(|s| s.tag == tag) {
            s.checked = checked;
        }
        let replay = self.renderer.pages_shown().max(1);
        self.rerender(replay, sink, delay);
    }

    /// Same as [`Self::toggle`], addressed by selector token. Returns false
    /// for unknown tokens.
    pub fn toggle_selector(
        &mut self,
        id: &SelectorId,
        checked: bool,
        sink: &mut dyn CardSink,
        delay: &mut dyn Delay,
    ) -> bool {
        let Some(tag) = self
            .selectors
            .iter()
            .find(|s| &s.id == id)
            .map(|s| s.tag.clone())
        else {
            return false;
        };
        self.toggle(&tag, checked, sink, delay);
        true
    }

    fn rerender(&mut self, replay: usize, sink: &mut dyn CardSink, delay: &mut dyn Delay) {
        sink.clear();
        let pages = paginate(&self.projects, &self.filter, self.page_size);
        tracing::debug!(
            pages = pages.len(),
            replay,
            filter = ?self.filter.iter().collect::<Vec<_>>(),
            "recomputed gallery pages"
        );
        self.renderer.reset(pages);

        if !self.renderer.has_more() {
            tracing::info!("no projects match the active filter");
            sink.show_placeholder(NO_MATCHES_MESSAGE);
            sink.set_show_more_visible(false);
            return;
        }

        for _ in 0..replay {
            if !self.renderer.has_more() {
                break;
            }
            self.renderer.advance(sink, delay);
        }
    }
}
