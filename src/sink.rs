//! Display surfaces the renderer writes cards into.

use crate::gallery::Card;

mod html;
mod memory;
mod text;

pub use self::html::HtmlSink;
pub use self::memory::MemorySink;
pub use self::text::TextSink;

/// An ordered display surface.
pub trait CardSink {
    fn append(&mut self, card: Card);

    /// Drops every card and any placeholder.
    fn clear(&mut self);

    /// Replaces the content with a message; used when nothing matches.
    fn show_placeholder(&mut self, message: &str);

    fn set_show_more_visible(&mut self, visible: bool);
}

#[cfg(test)]
#[path = "tests/sink/sink_tests.rs"]
mod sink_tests;
