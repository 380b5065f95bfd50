// Browser-only tests: `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use astrals_hub::WebHub;
use astrals_hub::storage::{KeyValueStore, LocalStorage};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn local_storage_round_trips_a_key() {
    let mut store = LocalStorage::open().unwrap();
    store.set("astralsHub_test", "42").unwrap();
    assert_eq!(store.get("astralsHub_test").unwrap().as_deref(), Some("42"));
    store.remove("astralsHub_test").unwrap();
    assert_eq!(store.get("astralsHub_test").unwrap(), None);
}

#[wasm_bindgen_test]
fn web_hub_reports_a_default_profile() {
    let hub = WebHub::new(Some(r#"{"chat_endpoint": ""}"#.to_string())).unwrap();
    let profile: serde_json::Value = serde_json::from_str(&hub.profile().unwrap()).unwrap();
    assert!(profile["level"].as_u64().unwrap() >= 1);
    let view: serde_json::Value = serde_json::from_str(&hub.quiz_view().unwrap()).unwrap();
    assert_eq!(view["state"], "idle");
}
