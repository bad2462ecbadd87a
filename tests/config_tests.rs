//! Request deserialization and validation.

use wikibinder::{ExportRequest, PageFormat, RenderOptions, MAX_URLS};

#[test]
fn empty_configuration_yields_documented_defaults() {
    let request: ExportRequest =
        serde_json::from_str(r#"{"urls": [], "configuration": {}}"#).unwrap();

    let c = &request.configuration;
    assert!(!c.landscape);
    assert!(c.images);
    assert!(c.contents);
    assert!(!c.related);
    assert!(!c.footnotes);
    assert!(!c.references);
    assert_eq!(c.format, PageFormat::Letter);
    assert_eq!(c.scale, 1.0);
    assert_eq!(c.margin, ".125in");
}

#[test]
fn missing_fields_default_at_the_top_level_too() {
    let request: ExportRequest = serde_json::from_str("{}").unwrap();
    assert!(request.urls.is_empty());
    assert_eq!(request.configuration.margin, ".125in");
    assert!(request.validate().is_ok());
}

#[test]
fn format_tokens_are_lowercase_on_the_wire() {
    for (token, format) in [
        ("letter", PageFormat::Letter),
        ("legal", PageFormat::Legal),
        ("tabloid", PageFormat::Tabloid),
        ("ledger", PageFormat::Ledger),
        ("a0", PageFormat::A0),
        ("a4", PageFormat::A4),
        ("a6", PageFormat::A6),
    ] {
        let json = format!(r#"{{"configuration": {{"format": "{token}"}}}}"#);
        let request: ExportRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request.configuration.format, format);
    }
}

#[test]
fn unknown_format_token_is_rejected() {
    let result: Result<ExportRequest, _> =
        serde_json::from_str(r#"{"configuration": {"format": "a7"}}"#);
    assert!(result.is_err());
}

#[test]
fn url_cap_is_enforced() {
    let urls: Vec<String> = (0..=MAX_URLS)
        .map(|i| format!("https://example.org/wiki/Page_{i}"))
        .collect();
    let request = ExportRequest {
        urls,
        configuration: RenderOptions::default(),
    };
    assert!(request.validate().is_err());
}

#[test]
fn cap_sized_request_is_accepted() {
    let urls: Vec<String> = (0..MAX_URLS)
        .map(|i| format!("https://example.org/wiki/Page_{i}"))
        .collect();
    let request = ExportRequest {
        urls,
        configuration: RenderOptions::default(),
    };
    assert!(request.validate().is_ok());
}

#[test]
fn scale_domain_is_enforced() {
    for bad in [0.05, 2.5, -1.0] {
        let options = RenderOptions {
            scale: bad,
            ..RenderOptions::default()
        };
        assert!(options.validate().is_err(), "scale {bad} should be rejected");
    }
    for good in [0.1, 1.0, 2.0] {
        let options = RenderOptions {
            scale: good,
            ..RenderOptions::default()
        };
        assert!(options.validate().is_ok(), "scale {good} should be accepted");
    }
}

#[test]
fn malformed_urls_are_rejected() {
    let request = ExportRequest {
        urls: vec!["not a url".to_string()],
        configuration: RenderOptions::default(),
    };
    assert!(request.validate().is_err());
}

#[test]
fn bad_margin_token_is_a_validation_error() {
    let options = RenderOptions {
        margin: "wide".to_string(),
        ..RenderOptions::default()
    };
    assert!(options.validate().is_err());
}
