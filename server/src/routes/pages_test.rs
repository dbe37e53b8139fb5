use super::*;

use client::state::home::Person;

use crate::assets::fallback_tags;

fn store_with(names: &[&str]) -> StoreState {
    StoreState {
        home: HomeState {
            list: names
                .iter()
                .map(|name| Person {
                    name: (*name).to_owned(),
                })
                .collect(),
            ..HomeState::default()
        },
    }
}

#[test]
fn home_document_is_a_complete_page() {
    let html = home_document(&store_with(&[]), &fallback_tags("/statics/"), Mode::Development);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(&format!("<title>{HOME_TITLE}</title>")));
    assert!(html.contains("window.initialState"));
}

#[test]
fn home_document_renders_prefetched_people() {
    let html = home_document(&store_with(&["A"]), &fallback_tags("/statics/"), Mode::Development);
    assert!(html.contains("person-row"));
    assert!(html.contains("A"));
}

#[test]
fn embedded_state_round_trips_to_the_prefetched_store() {
    let store = store_with(&["Ada", "Grace"]);
    let html = home_document(&store, &fallback_tags("/statics/"), Mode::Development);

    let start = html.find("window.initialState = ").expect("state assignment") +
        "window.initialState = ".len();
    let end = html[start..].find(";</script>").expect("assignment end") + start;
    let parsed: StoreState = serde_json::from_str(&html[start..end]).expect("valid state json");
    assert_eq!(parsed, store);
}

#[test]
fn home_document_carries_asset_tags() {
    let tags = fallback_tags("/statics/");
    let html = home_document(&store_with(&[]), &tags, Mode::Production);
    assert!(html.contains(&tags.scripts));
    assert!(html.contains(&tags.styles));
}
