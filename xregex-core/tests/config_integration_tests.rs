// xregex-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use xregex_core::config::{self, PatternConfig, PatternEntry};
use xregex_core::XRegexError;

const PATTERN_FILE: &str = r#"
patterns:
  - name: section
    description: "INI section header"
    flags: m
    pattern: |
      ^ \[ (?<section> [^\] ]+ ) \]   # [section]
  - name: pair
    flags: gm
    tags: ["ini"]
    pattern: |
      ^ (?<name> \w+ ) \s* = \s* (?<value> .* ) $   # key = value
"#;

fn write_temp(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_from_file() -> Result<()> {
    let file = write_temp(PATTERN_FILE)?;
    let config = PatternConfig::load_from_file(file.path())?;

    assert_eq!(config.patterns.len(), 2);
    assert_eq!(config.patterns[0].name, "section");
    assert_eq!(config.patterns[0].flags, "m");
    assert_eq!(config.patterns[0].description.as_deref(), Some("INI section header"));
    assert_eq!(config.patterns[1].tags, Some(vec!["ini".to_string()]));
    Ok(())
}

#[test]
fn test_flags_default_to_empty() -> Result<()> {
    let config = PatternConfig::from_yaml_str("patterns:\n  - name: bare\n    pattern: 'a b'\n")?;
    assert_eq!(config.patterns[0].flags, "");
    assert_eq!(config.patterns[0].description, None);
    Ok(())
}

#[test]
fn test_load_missing_file_fails_with_context() {
    let err = PatternConfig::load_from_file("/definitely/not/here/xregex.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read pattern file"));
}

#[test]
fn test_invalid_yaml_is_rejected() -> Result<()> {
    let file = write_temp("patterns: [unclosed")?;
    assert!(PatternConfig::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_duplicate_names_are_rejected() {
    let yaml = "patterns:\n  - name: a\n    pattern: x\n  - name: a\n    pattern: y\n";
    let err = PatternConfig::from_yaml_str(yaml).unwrap_err();
    assert!(format!("{:#}", err).contains("Duplicate pattern name found: 'a'"));
}

#[test]
fn test_compile_patterns_and_match() -> Result<()> {
    let config = PatternConfig::from_yaml_str(PATTERN_FILE)?;
    let compiled = config::compile_patterns(&config)?;

    let section = compiled.get("section").expect("section pattern compiled");
    assert_eq!(section.matcher.source(), r"^\[(?<section>[^\] ]+)\]");
    assert_eq!(&section.matcher.captures("x\n[main]").unwrap()["section"], "main");

    let pair = compiled.get("pair").expect("pair pattern compiled");
    let found = pair.matcher.matches("a = 1\nb=2");
    assert_eq!(found.len(), 2);
    assert_eq!(&found[1]["value"], "2");
    Ok(())
}

#[test]
fn test_compile_patterns_collects_every_failure() {
    let config = PatternConfig {
        patterns: vec![
            PatternEntry { name: "ok".into(), pattern: "a".into(), ..Default::default() },
            PatternEntry { name: "bad_group".into(), pattern: "( a".into(), ..Default::default() },
            PatternEntry { name: "bad_flags".into(), pattern: "a".into(), flags: "z".into(), ..Default::default() },
        ],
    };
    let err = config::compile_patterns(&config).unwrap_err();
    match err {
        XRegexError::Fatal(message) => {
            assert!(message.starts_with("Failed to compile 2 pattern(s)"));
            assert!(message.contains("Pattern 'bad_group'"));
            assert!(message.contains("Pattern 'bad_flags': Invalid flags: unsupported flag 'z'"));
            assert!(!message.contains("Pattern 'ok'"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
