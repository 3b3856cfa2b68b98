use super::*;

#[test]
fn default_matches_shipped_page() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.headline, ["W E L C O M E", "I T Z", "F I Z Z"]);
    assert_eq!(cfg.stats.len(), 3);
    assert_eq!(cfg.stats[1].value, "0.2s");
    assert_eq!(cfg.stats[2].accent, "teal-400");
    assert_eq!(cfg.hero_image.file, "car.jpg");
    assert_eq!(cfg.base_path, "/Scroll_Animation");
    assert!(cfg.validate().is_ok());
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg = PageConfig::from_json(r#"{ "headline": ["H I"] }"#).unwrap();
    assert_eq!(cfg.headline, ["H I"]);
    assert_eq!(cfg.stats, PageConfig::default().stats);
}

#[test]
fn invalid_configs_are_rejected() {
    assert!(PageConfig::from_json(r#"{ "headline": [] }"#).is_err());
    assert!(PageConfig::from_json(r#"{ "stats": [] }"#).is_err());
    assert!(PageConfig::from_json(r#"{ "base_path": "relative" }"#).is_err());
    assert!(PageConfig::from_json("not json").is_err());
}

#[test]
fn serde_round_trip_preserves_config() {
    let cfg = PageConfig::default();
    let json = serde_json::to_string(&cfg).unwrap();
    assert_eq!(PageConfig::from_json(&json).unwrap(), cfg);
}

#[test]
fn missing_file_is_a_config_error() {
    let err = PageConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("config error:"));
}
