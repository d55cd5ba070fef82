use pretty_assertions::assert_eq;
use thenmap_engine::{DEFAULT_MAP, DEFAULT_WIDTH, MapConfig, MapOptions};
use thenmap_types::ColorEntry;

#[test]
fn default_config() {
    let config = MapConfig::default();
    assert_eq!(config.map, DEFAULT_MAP);
    assert_eq!(config.width, Some(DEFAULT_WIDTH));
    assert_eq!(config.height, None);
    assert_eq!(config.language, None);
    assert_eq!(config.projection, None);
    assert!(config.data.is_none());
    assert!(config.data_key.is_none());
}

#[test]
fn default_date_is_rfc3339() {
    let config = MapConfig::default();
    assert!(chrono::DateTime::parse_from_rfc3339(&config.date).is_ok());
}

#[test]
fn empty_options_keep_defaults() {
    let config = MapConfig::merged(MapOptions::default());
    assert_eq!(config.map, DEFAULT_MAP);
    assert_eq!(config.width, Some(DEFAULT_WIDTH));
}

#[test]
fn options_overlay_defaults() {
    let options = MapOptions {
        width: Some(640),
        height: Some(480),
        language: Some("sv".to_string()),
        projection: Some("mercator".to_string()),
        map: Some("se-7".to_string()),
        date: Some("2015-11-11".to_string()),
        ..Default::default()
    };

    let config = MapConfig::merged(options);
    assert_eq!(config.width, Some(640));
    assert_eq!(config.height, Some(480));
    assert_eq!(config.language.as_deref(), Some("sv"));
    assert_eq!(config.projection.as_deref(), Some("mercator"));
    assert_eq!(config.map, "se-7");
    assert_eq!(config.date, "2015-11-11");
}

#[test]
fn data_and_key_are_carried() {
    let options = MapOptions {
        data: Some(vec![ColorEntry::new("se", "red")]),
        data_key: Some("sheet-1".to_string()),
        ..Default::default()
    };

    let config = MapConfig::merged(options);
    assert_eq!(config.data.as_ref().unwrap().len(), 1);
    assert_eq!(config.data_key.as_deref(), Some("sheet-1"));
}

// ── deprecated `dataset` alias ───────────────────────────────────

#[test]
fn dataset_aliases_map() {
    let options = MapOptions {
        dataset: Some("fr-7".to_string()),
        ..Default::default()
    };
    assert_eq!(MapConfig::merged(options).map, "fr-7");
}

#[test]
fn dataset_wins_over_map() {
    // historical behavior: the legacy spelling overwrites the new one
    let options = MapOptions {
        map: Some("world-2".to_string()),
        dataset: Some("fr-7".to_string()),
        ..Default::default()
    };
    assert_eq!(MapConfig::merged(options).map, "fr-7");
}

#[test]
fn options_debug_does_not_leak_callback() {
    let options = MapOptions {
        on_ready: Some(Box::new(|_| {})),
        ..Default::default()
    };
    let repr = format!("{options:?}");
    assert!(repr.contains("on_ready: true"));
}
