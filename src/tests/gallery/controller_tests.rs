    use std::num::NonZeroUsize;

    use super::*;
    use crate::model::{GalleryConfig, RepositoryRecord, SelectorId, display_title};
    use crate::sink::MemorySink;

    fn record(id: u64, language: Option<&str>) -> RepositoryRecord {
        let name = format!("repo-{}", id);
        RepositoryRecord {
            id,
            owner_login: "me".to_string(),
            fork: false,
            display_title: display_title(&name),
            html_url: format!("https://example.test/{}", name),
            name,
            description: None,
            homepage: None,
            language: language.map(str::to_string),
            demo_url: None,
            display_image: "img.png".to_string(),
        }
    }

    fn config(page_size: usize) -> GalleryConfig {
        GalleryConfig {
            page_size: NonZeroUsize::new(page_size).unwrap(),
            ..GalleryConfig::default()
        }
    }

    fn projects() -> Vec<RepositoryRecord> {
        let langs = [Some("Rust"), Some("Go"), None];
        (1..=12).map(|i| record(i, langs[(i as usize) % 3])).collect()
    }

    fn ids(sink: &MemorySink) -> Vec<String> {
        sink.titles().iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn load_shows_first_page() {
        let mut c = GalleryController::new(projects(), &config(3));
        let mut sink = MemorySink::new();
        c.load(&mut sink, &mut NoDelay);

        assert_eq!(ids(&sink), vec!["repo 1", "repo 2", "repo 3"]);
        assert_eq!(c.pages_shown(), 1);
        assert!(sink.show_more_visible);
    }

    #[test]
    fn selectors_carry_unique_tokens() {
        let c = GalleryController::new(projects(), &config(3));
        assert_eq!(c.languages(), vec!["Show All", "Go", "Unclassified", "Rust"]);
        let tokens: Vec<&str> = c.selectors().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            tokens,
            vec!["lang-filter-0", "lang-filter-1", "lang-filter-2", "lang-filter-3"]
        );
        assert!(c.selectors().iter().all(|s| !s.checked));
    }

    #[test]
    fn show_more_until_exhausted() {
        let mut c = GalleryController::new(projects(), &config(5));
        let mut sink = MemorySink::new();
        c.load(&mut sink, &mut NoDelay);

        assert!(c.show_more(&mut sink, &mut NoDelay));
        assert!(sink.show_more_visible);
        assert!(c.show_more(&mut sink, &mut NoDelay));
        assert!(!sink.show_more_visible);
        assert_eq!(sink.cards.len(), 12);
        assert!(!c.show_more(&mut sink, &mut NoDelay));
        assert_eq!(c.pages_shown(), 3);
    }

    #[test]
    fn toggle_replays_previous_depth() {
        let mut c = GalleryController::new(projects(), &config(2));
        let mut sink = MemorySink::new();
        c.load(&mut sink, &mut NoDelay);
        c.show_more(&mut sink, &mut NoDelay);
        assert_eq!(c.pages_shown(), 2);

        c.toggle("Rust", true, &mut sink, &mut NoDelay);

        // Rust repos are 3, 6, 9, 12: two pages of two.
        assert_eq!(c.pages_shown(), 2);
        assert_eq!(ids(&sink), vec!["repo 3", "repo 6", "repo 9", "repo 12"]);
        assert!(!sink.show_more_visible);
        assert!(c.filter().contains("Rust"));
    }

    #[test]
    fn replay_stops_when_fewer_pages_exist() {
        let mut c = GalleryController::new(projects(), &config(2));
        let mut sink = MemorySink::new();
        c.load(&mut sink, &mut NoDelay);
        for _ in 0..4 {
            c.show_more(&mut sink, &mut NoDelay);
        }
        assert_eq!(c.pages_shown(), 5);

        c.toggle("Go", true, &mut sink, &mut NoDelay);
        assert_eq!(c.pages_shown(), 2);
        assert_eq!(sink.cards.len(), 4);
    }

    #[test]
    fn unmatched_filter_shows_placeholder() {
        let mut c = GalleryController::new(projects(), &config(3));
        let mut sink = MemorySink::new();
        c.load(&mut sink, &mut NoDelay);

        c.toggle("Haskell", true, &mut sink, &mut NoDelay);
        assert!(sink.cards.is_empty());
        assert_eq!(sink.placeholder.as_deref(), Some(NO_MATCHES_MESSAGE));
        assert!(!sink.show_more_visible);
        assert!(!c.show_more(&mut sink, &mut NoDelay));

        c.toggle("Haskell", false, &mut sink, &mut NoDelay);
        assert!(sink.placeholder.is_none());
        assert_eq!(sink.cards.len(), 3);
    }

    #[test]
    fn show_all_disables_other_selections() {
        let mut c = GalleryController::new(projects(), &config(20));
        let mut sink = MemorySink::new();
        c.load(&mut sink, &mut NoDelay);

        c.toggle("Go", true, &mut sink, &mut NoDelay);
        assert_eq!(sink.cards.len(), 4);
        c.toggle("Show All", true, &mut sink, &mut NoDelay);
        assert_eq!(sink.cards.len(), 12);
    }

    #[test]
    fn toggle_by_selector_token() {
        let mut c = GalleryController::new(projects(), &config(20));
        let mut sink = MemorySink::new();
        c.load(&mut sink, &mut NoDelay);

        let unclassified = c
            .selectors()
            .iter()
            .find(|s| s.tag == "Unclassified")
            .map(|s| s.id.clone())
            .unwrap();
        assert!(c.toggle_selector(&unclassified, true, &mut sink, &mut NoDelay));
        // The sentinel never matches a missing language.
        assert_eq!(sink.placeholder.as_deref(), Some(NO_MATCHES_MESSAGE));
        assert!(c.selectors().iter().any(|s| s.id == unclassified && s.checked));

        let bogus = SelectorId("lang-filter-99".to_string());
        assert!(!c.toggle_selector(&bogus, true, &mut sink, &mut NoDelay));
    }

    #[test]
    fn empty_gallery_shows_placeholder_on_load() {
        let mut c = GalleryController::new(Vec::new(), &config(3));
        let mut sink = MemorySink::new();
        c.load(&mut sink, &mut NoDelay);
        assert_eq!(c.languages(), vec!["Show All"]);
        assert_eq!(sink.placeholder.as_deref(), Some(NO_MATCHES_MESSAGE));
        assert_eq!(c.pages_shown(), 0);
    }
