//! Integration tests for configuration files

mod common;

use common::span_classes;
use spanlight_core::{
    HighlightSettings, LanguageDefinition, RuleDefinition, SemanticClass, SpanlightConfig,
    SpanlightError,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_save_and_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");

    let mut config = SpanlightConfig {
        highlight: HighlightSettings {
            class_prefix: "tok-".to_string(),
            cache_capacity: 8,
            ..Default::default()
        },
        ..Default::default()
    };
    config.aliases.insert("vue".to_string(), "html".to_string());
    config.languages.push(LanguageDefinition {
        id: "sql".to_string(),
        aliases: vec!["psql".to_string()],
        rules: vec![
            RuleDefinition {
                name: "comment".to_string(),
                pattern: "--[^\\n]*".to_string(),
                class: SemanticClass::Comment,
            },
            RuleDefinition {
                name: "keyword".to_string(),
                pattern: r"\b(?i:select|from|where)\b".to_string(),
                class: SemanticClass::Keyword,
            },
        ],
    });

    config.to_file(&path).unwrap();
    let loaded = SpanlightConfig::from_file(&path).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_custom_language_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[[languages]]
id = "sql"
aliases = ["psql"]
rules = [
    { name = "string", pattern = "'[^']*'", class = "string" },
    { name = "comment", pattern = "--[^\\n]*", class = "comment" },
    { name = "keyword", pattern = "\\b(?i:select|from|where)\\b", class = "keyword" },
    { name = "operator", pattern = "&lt;|&gt;|=", class = "operator" },
]
"#,
    )
    .unwrap();

    let highlighter = SpanlightConfig::from_file(&path)
        .unwrap()
        .build_highlighter()
        .unwrap();

    let markup = highlighter.highlight("SELECT name FROM t WHERE a < 'x--y' -- done", "psql");

    assert_eq!(
        span_classes(&markup),
        vec![
            "sh-keyword",
            "sh-keyword",
            "sh-keyword",
            "sh-operator",
            "sh-string",
            "sh-comment",
        ]
    );
    assert!(markup.contains(r#"<span class="sh-operator">&lt;</span>"#));

    // Built-in languages are still there
    assert!(highlighter.supports("js"));
    assert_eq!(highlighter.registry().canonical("psql"), Some("sql"));
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = SpanlightConfig::from_file(&temp_dir.path().join("absent.toml"));

    assert!(matches!(result, Err(SpanlightError::Io(_))));
}

#[test]
fn test_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[highlight\nclass_prefix = ").unwrap();

    let result = SpanlightConfig::from_file(&path);
    assert!(matches!(result, Err(SpanlightError::ConfigParse(_))));
}

#[test]
fn test_invalid_settings_rejected_on_load() {
    let result = SpanlightConfig::from_toml("[highlight]\nclass_prefix = \"a b\"\n");
    assert!(matches!(result, Err(SpanlightError::InvalidConfig(_))));
}

#[test]
fn test_overriding_builtin_keeps_aliases_cached_separately() {
    let config = SpanlightConfig::from_toml(
        r#"
[[languages]]
id = "css"
rules = [{ name = "word", pattern = "\\w+", class = "keyword" }]
"#,
    )
    .unwrap();
    let highlighter = config.build_highlighter().unwrap();
    assert!(highlighter.settings().enable_cache);

    let overridden = highlighter.highlight("color: red", "css");
    let builtin = highlighter.highlight("color: red", "scss");

    assert_eq!(
        overridden,
        r#"<span class="sh-keyword">color</span>: <span class="sh-keyword">red</span>"#
    );
    assert_eq!(builtin, r#"<span class="sh-property">color</span>: red"#);

    // Repeating in the other order is served from the cache and agrees
    assert_eq!(highlighter.highlight("color: red", "scss"), builtin);
    assert_eq!(highlighter.highlight("color: red", "css"), overridden);
}

#[test]
fn test_config_language_output_needs_no_collapse() {
    let rules = r#"
[[languages]]
id = "shout"
rules = [
    { name = "quoted", pattern = "\"[^\"]*\"", class = "string" },
    { name = "upper", pattern = "[A-Z]+", class = "keyword" },
    { name = "word", pattern = "\\w+", class = "property" },
]
"#;
    let collapsing = SpanlightConfig::from_toml(rules)
        .unwrap()
        .build_highlighter()
        .unwrap();
    let raw = SpanlightConfig::from_toml(&format!(
        "[highlight]\ncollapse_nested_spans = false\n{rules}"
    ))
    .unwrap()
    .build_highlighter()
    .unwrap();

    let text = r#"say "HI there" LOUD now"#;
    let markup = collapsing.highlight(text, "shout");

    assert_eq!(markup, raw.highlight(text, "shout"));
    assert_eq!(
        markup,
        concat!(
            r#"<span class="sh-property">say</span> "#,
            r#"<span class="sh-string">"HI there"</span> "#,
            r#"<span class="sh-keyword">LOUD</span> "#,
            r#"<span class="sh-property">now</span>"#
        )
    );
}
