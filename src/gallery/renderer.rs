use std::collections::VecDeque;
use std::time::Duration;

use super::{Card, Delay};
use crate::model::Page;
use crate::sink::CardSink;

/// Pending pages plus the count of pages already emitted.
#[derive(Clone, Debug)]
pub struct Renderer {
    pending: VecDeque<Page>,
    pages_shown: usize,
    interval: Duration,
    fallback_image: String,
}

impl Renderer {
    pub fn new(interval: Duration, fallback_image: impl Into<String>) -> Self {
        Self {
            pending: VecDeque::new(),
            pages_shown: 0,
            interval,
            fallback_image: fallback_image.into(),
        }
    }

    /// Replaces the queue and zeroes the shown count.
    pub fn reset(&mut self, pages: Vec<Page>) {
        self.pending = pages.into();
        self.pages_shown = 0;
    }

    pub fn pages_shown(&self) -> usize {
        self.pages_shown
    }

    pub fn has_more(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Emits the front page, one card at a time, waiting `interval` between
    /// cards. Returns the number of cards appended (0 when nothing was
    /// pending). The show-more affordance tracks whether pages remain.
    pub fn advance(&mut self, sink: &mut dyn CardSink, delay: &mut dyn Delay) -> usize {
        let mut appended = 0;
        if let Some(page) = self.pending.pop_front() {
            for (i, record) in page.iter().enumerate() {
                if i > 0 {
                    delay.wait(self.interval);
                }
                sink.append(Card::from_record(record, &self.fallback_image));
                appended += 1;
            }
            self.pages_shown += 1;
        }
        sink.set_show_more_visible(self.has_more());
        appended
    }
}
