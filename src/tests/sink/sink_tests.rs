    use super::*;

    fn card(title: &str, demo: Option<&str>) -> Card {
        Card {
            image: "shot.png".to_string(),
            fallback_image: "broken.png".to_string(),
            title: title.to_string(),
            description: "a <small> project".to_string(),
            repo_url: format!("https://example.test/{}", title),
            demo_url: demo.map(str::to_string),
            language: Some("Rust".to_string()),
        }
    }

    #[test]
    fn memory_sink_tracks_clears_and_placeholder() {
        let mut s = MemorySink::new();
        s.append(card("a", None));
        s.clear();
        assert!(s.cards.is_empty());
        assert_eq!(s.generation, 1);

        s.show_placeholder("nothing here");
        assert_eq!(s.placeholder.as_deref(), Some("nothing here"));
        s.append(card("b", None));
        assert!(s.placeholder.is_none());
        assert_eq!(s.titles(), vec!["b"]);
    }

    #[test]
    fn text_sink_numbers_cards_and_lists_demo() {
        let mut s = TextSink::new(Vec::new());
        s.append(card("one", None));
        s.append(card("two", Some("https://demo.test")));
        s.set_show_more_visible(true);
        assert!(s.show_more_visible());

        let out = String::from_utf8(s.finish().unwrap()).unwrap();
        assert!(out.contains("[1] one  (Rust)"));
        assert!(out.contains("[2] two  (Rust)"));
        assert_eq!(out.matches("demo:").count(), 1);
        assert!(out.contains("demo:  https://demo.test"));
    }

    #[test]
    fn html_sink_escapes_and_wires_fallback_image() {
        let mut s = HtmlSink::new();
        s.append(card("one", None));
        s.append(card("two", Some("https://demo.test")));
        s.set_show_more_visible(true);

        let doc = s.render_document("Projects & Things", &["Rust"]);
        assert!(doc.contains("<title>Projects &amp; Things</title>"));
        assert!(doc.contains("a &lt;small&gt; project"));
        assert!(doc.contains("onerror=\"this.onerror=null;this.src='broken.png';\""));
        assert_eq!(doc.matches("class=\"project-card\"").count(), 2);
        assert_eq!(doc.matches("demo-link").count(), 1);
        assert!(doc.contains("Languages: Rust"));
        assert!(doc.contains("class=\"show-more\""));
    }

    #[test]
    fn html_sink_placeholder_replaces_cards() {
        let mut s = HtmlSink::new();
        s.append(card("one", None));
        s.show_placeholder("No projects");
        assert!(s.is_empty());
        let doc = s.render_document("P", &[]);
        assert!(doc.contains("<p class=\"no-projects\">No projects</p>"));
        assert!(!doc.contains("show-more"));
        assert!(!doc.contains("active-filters"));
    }

    #[test]
    fn html_sink_fallback_path_with_quote_stays_a_valid_script() {
        let mut s = HtmlSink::new();
        let mut c = card("one", None);
        c.fallback_image = r"img\it's.png".to_string();
        s.append(c);

        let doc = s.render_document("P", &[]);
        // After attribute decoding the handler reads this.src='img\\it\'s.png';
        assert!(doc.contains(r"this.src='img\\it\&#39;s.png';"));
        assert!(!doc.contains("it's.png"));
    }
