use std::fmt::Write as _;

use super::{Card, CardSink};

/// Collects cards and renders them as a standalone HTML page.
#[derive(Clone, Debug, Default)]
pub struct HtmlSink {
    cards: Vec<Card>,
    placeholder: Option<String>,
    show_more_visible: bool,
}

impl HtmlSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// `active` lists the checked language tags shown in the header.
    pub fn render_document(&self, heading: &str, active: &[&str]) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(out, "<title>{}</title>", escape(heading));
        out.push_str("</head>\n<body>\n");
        let _ = writeln!(out, "<h1>{}</h1>", escape(heading));
        if !active.is_empty() {
            let tags: Vec<String> = active.iter().map(|t| escape(t)).collect();
            let _ = writeln!(
                out,
                "<p class=\"active-filters\">Languages: {}</p>",
                tags.join(", ")
            );
        }
        out.push_str("<div class=\"projects\">\n");
        if let Some(msg) = &self.placeholder {
            let _ = writeln!(out, "<p class=\"no-projects\">{}</p>", escape(msg));
        }
        for card in &self.cards {
            write_card(&mut out, card);
        }
        out.push_str("</div>\n");
        if self.show_more_visible {
            out.push_str("<p class=\"show-more\">More projects available.</p>\n");
        }
        out.push_str("</body>\n</html>\n");
        out
    }
}

fn write_card(out: &mut String, card: &Card) {
    out.push_str("<div class=\"project-card\">\n");
    let _ = writeln!(
        out,
        "<img class=\"project-image\" src=\"{}\" alt=\"{}\" onerror=\"this.onerror=null;this.src='{}';\">",
        escape(&card.image),
        escape(&card.title),
        escape(&js_string(&card.fallback_image))
    );
    let _ = writeln!(out, "<h3 class=\"project-title\">{}</h3>", escape(&card.title));
    let _ = writeln!(
        out,
        "<p class=\"project-description\">{}</p>",
        escape(&card.description)
    );
    let _ = writeln!(
        out,
        "<a class=\"project-link\" href=\"{}\">View Repository</a>",
        escape(&card.repo_url)
    );
    if let Some(demo) = &card.demo_url {
        let _ = writeln!(
            out,
            "<a class=\"project-link demo-link\" href=\"{}\">Live Demo</a>",
            escape(demo)
        );
    }
    out.push_str("</div>\n");
}

/// Escapes `s` for a single-quoted JavaScript string literal. The result
/// still needs HTML escaping before it goes into an attribute.
fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl CardSink for HtmlSink {
    fn append(&mut self, card: Card) {
        self.placeholder = None;
        self.cards.push(card);
    }

    fn clear(&mut self) {
        self.cards.clear();
        self.placeholder = None;
    }

    fn show_placeholder(&mut self, message: &str) {
        self.cards.clear();
        self.placeholder = Some(message.to_string());
    }

    fn set_show_more_visible(&mut self, visible: bool) {
        self.show_more_visible = visible;
    }
}
