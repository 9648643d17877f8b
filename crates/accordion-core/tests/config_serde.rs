#![forbid(unsafe_code)]

//! Deserialization of the configuration object (requires the `serde` feature).

use accordion_core::{
    ConfigError, Filter, FilterCondition, OpenPolicy, PanelSetConfig, PanelSetState,
};

#[test]
fn full_config_deserializes() {
    let config: PanelSetConfig = serde_json::from_value(serde_json::json!({
        "items": [
            {
                "title": "Living Room",
                "category": "light",
                "room": "living",
                "card": {"type": "light-card", "entity": "light.sofa"}
            },
            {"category": "cover", "favorite": true}
        ],
        "policy": "independent",
        "open_at_start": true,
        "filters": [
            {"name": "Alle"},
            {"name": "Lights", "condition": "item.category === 'light'"}
        ]
    }))
    .unwrap();

    assert_eq!(config.policy, OpenPolicy::Independent);
    assert!(config.open_at_start);
    assert_eq!(config.items.len(), 2);
    assert_eq!(config.items[0].title.as_deref(), Some("Living Room"));
    assert!(config.items[0].card.is_some());
    assert!(config.items[1].title.is_none());
    assert!(config.items[1].favorite);
    assert_eq!(config.filters.len(), 2);
    assert!(config.filters[0].is_match_all());

    let state = PanelSetState::new(config).unwrap();
    let entries = state.derive();
    assert!(entries.iter().all(|e| e.open && e.visible));
}

#[test]
fn missing_items_key_is_a_deserialization_error() {
    let result: Result<PanelSetConfig, _> =
        serde_json::from_value(serde_json::json!({"policy": "exclusive"}));
    assert!(result.is_err());
}

#[test]
fn empty_items_deserialize_but_fail_construction() {
    let config: PanelSetConfig =
        serde_json::from_value(serde_json::json!({"items": []})).unwrap();
    assert_eq!(PanelSetState::new(config), Err(ConfigError::NoItems));
}

#[test]
fn legacy_always_open_alias_is_accepted() {
    let config: PanelSetConfig = serde_json::from_value(serde_json::json!({
        "items": [{"title": "Garage"}],
        "always_open_at_start": true
    }))
    .unwrap();
    assert!(config.open_at_start);
}

#[test]
fn malformed_filter_condition_deserializes_fail_closed() {
    let config: PanelSetConfig = serde_json::from_value(serde_json::json!({
        "items": [{"title": "Garage", "category": "cover"}],
        "filters": [{"name": "Broken", "condition": "item.category.startsWith('c')"}]
    }))
    .unwrap();

    assert!(matches!(
        config.filters[0].condition(),
        FilterCondition::Invalid(_)
    ));

    let mut state = PanelSetState::new(config).unwrap();
    assert!(state.activate_filter("Broken"));
    assert!(state.derive().iter().all(|e| !e.visible));
}

#[test]
fn filters_roundtrip_through_serialization() {
    let filter = Filter::from_expression("Lights", "item.category === 'light'");
    let json = serde_json::to_value(&filter).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"name": "Lights", "condition": "item.category === 'light'"})
    );
    let back: Filter = serde_json::from_value(json).unwrap();
    assert_eq!(back, filter);
}
