    use super::*;
    use crate::model::{GalleryConfig, RepositoryRecord, display_title};

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

    fn app() -> App {
        let projects = vec![
            record(1, Some("Go")),
            record(2, Some("Rust")),
            record(3, Some("Go")),
            record(4, None),
            record(5, Some("Rust")),
        ];
        App::load(crate::tui::TuiRunOptions {
            config: GalleryConfig::default(),
            projects,
        })
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn cards_are_revealed_one_interval_apart() {
        let mut app = app();
        let t0 = Instant::now();
        assert_eq!(app.surface.cards.len(), 3);

        assert!(app.tick(t0));
        assert_eq!(app.visible_cards().len(), 1);
        assert!(!app.tick(t0 + Duration::from_millis(50)));
        assert!(app.tick(t0 + Duration::from_millis(200)));
        assert!(app.tick(t0 + Duration::from_millis(400)));
        assert_eq!(app.visible_cards().len(), 3);
        assert!(!app.revealing());
        assert!(!app.tick(t0 + Duration::from_millis(600)));
    }

    #[test]
    fn toggling_resets_reveal() {
        let mut app = app();
        let t0 = Instant::now();
        for i in 0..3 {
            app.tick(t0 + Duration::from_millis(200 * i));
        }
        assert_eq!(app.visible_cards().len(), 3);

        // Selectors: Show All, Go, Rust, Unclassified.
        event_loop::handle_key(&mut app, key(KeyCode::Down));
        event_loop::handle_key(&mut app, key(KeyCode::Down));
        event_loop::handle_key(&mut app, key(KeyCode::Char(' ')));
        assert!(app.controller.filter().contains("Rust"));

        app.tick(t0 + Duration::from_millis(1000));
        assert_eq!(app.visible_cards().len(), 1);
        assert_eq!(app.surface.titles(), vec!["repo 2", "repo 5"]);
    }

    #[test]
    fn show_more_key_appends_next_page() {
        let mut app = app();
        assert!(app.surface.show_more_visible);
        event_loop::handle_key(&mut app, key(KeyCode::Char('m')));
        assert_eq!(app.surface.cards.len(), 5);
        assert!(!app.surface.show_more_visible);

        event_loop::handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.surface.cards.len(), 5);
    }

    #[test]
    fn selection_is_clamped_and_q_quits() {
        let mut app = app();
        event_loop::handle_key(&mut app, key(KeyCode::Up));
        assert_eq!(app.selected, 0);
        for _ in 0..10 {
            event_loop::handle_key(&mut app, key(KeyCode::Down));
        }
        assert_eq!(app.selected, 3);
        event_loop::handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(app.quit);
    }
