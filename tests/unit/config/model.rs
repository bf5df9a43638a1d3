use super::*;

#[test]
fn missing_keys_take_defaults() {
    let cfg = Config::from_json("{}").unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.z_index_base, -9999);
    assert!(!cfg.show_ticker);
    assert!(cfg.autoplay);
    assert_eq!(cfg.autoplay_timeout_ms, 3000);
    assert_eq!(cfg.default_effect_name, "fadeOut");
    assert_eq!(cfg.effect_duration_ms, 1000);
}

#[test]
fn recognized_keys_are_camel_case_and_unknown_keys_ignored() {
    let cfg = Config::from_json(
        r#"{
            "zIndexBase": 10,
            "showTicker": true,
            "autoplayTimeoutMs": 500,
            "defaultEffectName": "slideUp",
            "effectDurationMs": 250,
            "wrapperClass": "ignored"
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.z_index_base, 10);
    assert!(cfg.show_ticker);
    assert_eq!(cfg.autoplay_timeout(), Duration::from_millis(500));
    assert_eq!(cfg.default_effect_name, "slideUp");
    assert_eq!(cfg.effect_duration(), Duration::from_millis(250));
}

#[test]
fn wrong_type_is_a_serde_error() {
    let err = Config::from_json(r#"{ "autoplayTimeoutMs": "soon" }"#).unwrap_err();
    assert!(matches!(err, SlideshowError::Serde(_)));
}

#[test]
fn validate_rejects_blank_effect_and_zero_timeout() {
    let err = Config::default().with_default_effect("  ").validate().unwrap_err();
    assert!(matches!(err, SlideshowError::InvalidInput(_)));

    let err = Config::default()
        .with_autoplay_timeout_ms(0)
        .validate()
        .unwrap_err();
    assert!(matches!(err, SlideshowError::InvalidInput(_)));

    Config::default().validate().unwrap();
}

#[test]
fn unknown_default_effect_passes_validation() {
    Config::default()
        .with_default_effect("notYetRegistered")
        .validate()
        .unwrap();
}

#[test]
fn from_value_matches_from_json() {
    let v = serde_json::json!({ "showTicker": true, "effectDurationMs": 40 });
    let cfg = Config::from_value(v).unwrap();
    let parsed = Config::from_json(r#"{ "showTicker": true, "effectDurationMs": 40 }"#).unwrap();
    assert_eq!(cfg, parsed);
    assert!(matches!(
        Config::from_value(serde_json::json!([1, 2])),
        Err(SlideshowError::Serde(_))
    ));
}
