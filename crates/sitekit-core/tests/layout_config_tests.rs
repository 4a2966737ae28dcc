//! Integration tests for layout class composition and configuration loading.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use sitekit_core::{ClassNames, CurrentPath, Error, LayoutConfig, ROOT_PATH};

const BASE_TOKENS: [&str; 4] = [
    "text-slate-500",
    "dark:text-slate-400",
    "bg-slate-50",
    "dark:bg-slate-900",
];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("sitekit_core=debug")
        .try_init();
}

fn tokens(classes: &str) -> Vec<&str> {
    classes.split(' ').collect()
}

struct FixedPath(&'static str);

impl CurrentPath for FixedPath {
    fn current_path(&self) -> String {
        self.0.to_string()
    }
}

#[test]
fn full_background_only_on_root() {
    let config = LayoutConfig::default();

    let root = config.container_classes(ROOT_PATH);
    assert!(tokens(&root).contains(&"background-linear-full"));

    for path in ["/docs", "/docs/getting-started", "/api", "", "/?q=1"] {
        let classes = config.container_classes(path);
        assert!(
            !tokens(&classes).contains(&"background-linear-full"),
            "{path:?} must not get the full background"
        );
    }
}

#[test]
fn base_and_background_classes_on_every_route() {
    let config = LayoutConfig::default();

    for path in ["/", "/docs", "/not-found"] {
        let classes = config.container_classes(path);
        let tokens = tokens(&classes);
        for token in BASE_TOKENS {
            assert!(tokens.contains(&token), "{token} missing on {path}");
        }
        assert!(tokens.contains(&"background-linear"));
    }
}

#[test]
fn custom_source_drives_composition() {
    let config = LayoutConfig::default();
    assert_eq!(
        config.container_classes_for(&FixedPath("/")),
        config.container_classes("/")
    );
    assert_eq!(
        config.container_classes_for("/docs"),
        config.container_classes("/docs")
    );
}

#[test]
fn json_overrides_round_through_composition() {
    init_tracing();

    let json = r#"{
        "base_classes": "text-zinc-600 bg-white",
        "background_class": "hero",
        "full_background_class": "hero-full",
        "root_path": "/"
    }"#;
    let config = LayoutConfig::from_json(json).unwrap();

    assert_eq!(config.container_classes("/"), "text-zinc-600 bg-white hero hero-full");
    assert_eq!(config.container_classes("/docs"), "text-zinc-600 bg-white hero");
    assert_eq!(config.content_classes(), "overflow-hidden");
}

#[test]
fn empty_object_is_default() {
    init_tracing();

    let config = LayoutConfig::from_json("{}").unwrap();
    assert_eq!(config, LayoutConfig::default());
}

#[test]
fn invalid_configuration_is_reported() {
    init_tracing();

    assert!(matches!(
        LayoutConfig::from_json(r#"{"root_path": ""}"#),
        Err(Error::InvalidRootPath(_))
    ));
    assert!(matches!(
        LayoutConfig::from_json(r#"{"background_class": ""}"#),
        Err(Error::EmptyClass {
            field: "background_class"
        })
    ));
    assert!(matches!(
        LayoutConfig::from_json(r#"{"root_path": 3}"#),
        Err(Error::Json(_))
    ));
}

#[test]
fn selector_classes_must_be_single_tokens() {
    init_tracing();

    assert!(matches!(
        LayoutConfig::from_json(r#"{"background_class": "hero band"}"#),
        Err(Error::InvalidClassToken {
            field: "background_class",
            ..
        })
    ));
    assert!(matches!(
        LayoutConfig::from_json(r#"{"full_background_class": "x{}body{display:none"}"#),
        Err(Error::InvalidClassToken {
            field: "full_background_class",
            ..
        })
    ));

    // Multi-token values stay allowed where they never reach a selector
    let config = LayoutConfig::from_json(r#"{"content_classes": "overflow-hidden relative"}"#)
        .unwrap();
    assert_eq!(config.content_classes(), "overflow-hidden relative");
}

#[test]
fn composer_matches_layout_output() {
    let config = LayoutConfig::default();
    let manual = ClassNames::new()
        .literal(&config.base_classes)
        .toggles([("background-linear", true), ("background-linear-full", false)])
        .build();
    assert_eq!(manual, config.container_classes("/docs"));
}
