    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = GalleryConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.page_size.get(), 3);
        assert_eq!(cfg.reveal_delay(), std::time::Duration::from_millis(200));
        assert_eq!(
            cfg.listing_url(),
            "https://api.github.com/users/thenthmichael/repos?per_page=100"
        );
    }

    #[test]
    fn partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.json");
        std::fs::write(
            &path,
            r#"{"version":1,"account":"octo","api_base_url":"http://127.0.0.1:9/","page_size":5}"#,
        )
        .unwrap();

        let cfg = GalleryConfig::load(&path).unwrap();
        assert_eq!(cfg.account, "octo");
        assert_eq!(cfg.page_size.get(), 5);
        assert_eq!(cfg.per_page, 100);
        assert_eq!(
            cfg.listing_url(),
            "http://127.0.0.1:9/users/octo/repos?per_page=100"
        );
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.json");
        std::fs::write(&path, r#"{"page_size":0}"#).unwrap();
        assert!(GalleryConfig::load(&path).is_err());
    }

    #[test]
    fn empty_fallback_pool_is_rejected() {
        let cfg = GalleryConfig {
            fallback_images: Vec::new(),
            ..GalleryConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(format!("{:#}", err).contains("fallback_images"));
    }
