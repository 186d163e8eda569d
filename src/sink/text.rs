use std::io::{self, Write};

use super::{Card, CardSink};

/// Streams cards to a writer as they are appended.
///
/// The sink interface is infallible, so the first write error is kept and
/// reported by [`TextSink::finish`]; later writes are skipped.
pub struct TextSink<W: Write> {
    out: W,
    written: usize,
    show_more_visible: bool,
    error: Option<io::Error>,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            written: 0,
            show_more_visible: false,
            error: None,
        }
    }

    pub fn show_more_visible(&self) -> bool {
        self.show_more_visible
    }

    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn emit(&mut self, f: impl FnOnce(&mut W) -> io::Result<()>) {
        if self.error.is_some() {
            return;
        }
        let res = f(&mut self.out).and_then(|_| self.out.flush());
        if let Err(err) = res {
            self.error = Some(err);
        }
    }
}

impl<W: Write> CardSink for TextSink<W> {
    fn append(&mut self, card: Card) {
        self.written += 1;
        let n = self.written;
        self.emit(|out| {
            let lang = card.language.as_deref().unwrap_or("-");
            writeln!(out, "[{}] {}  ({})", n, card.title, lang)?;
            if !card.description.is_empty() {
                writeln!(out, "    {}", card.description)?;
            }
            writeln!(out, "    repo:  {}", card.repo_url)?;
            if let Some(demo) = &card.demo_url {
                writeln!(out, "    demo:  {}", demo)?;
            }
            writeln!(out, "    image: {}", card.image)
        });
    }

    fn clear(&mut self) {
        self.written = 0;
    }

    fn show_placeholder(&mut self, message: &str) {
        self.emit(|out| writeln!(out, "{}", message));
    }

    fn set_show_more_visible(&mut self, visible: bool) {
        self.show_more_visible = visible;
    }
}
