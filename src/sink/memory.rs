use super::{Card, CardSink};

#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    pub cards: Vec<Card>,
    pub placeholder: Option<String>,
    pub show_more_visible: bool,
    /// Bumped on every clear so readers can tell content was replaced.
    pub generation: u64,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.title.as_str()).collect()
    }
}

impl CardSink for MemorySink {
    fn append(&mut self, card: Card) {
        self.placeholder = None;
        self.cards.push(card);
    }

    fn clear(&mut self) {
        self.cards.clear();
        self.placeholder = None;
        self.generation += 1;
    }

    fn show_placeholder(&mut self, message: &str) {
        self.cards.clear();
        self.placeholder = Some(message.to_string());
    }

    fn set_show_more_visible(&mut self, visible: bool) {
        self.show_more_visible = visible;
    }
}
