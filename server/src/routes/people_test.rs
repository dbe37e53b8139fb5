use super::*;

use serde_json::json;

use crate::state::test_helpers::test_app_state;

#[tokio::test]
async fn list_people_serves_the_seeded_directory() {
    let Json(people) = list_people(State(test_app_state(&["A", "B"])))
        .await
        .expect("seed source never fails");
    assert_eq!(people.len(), 2);
    assert_eq!(people[0].name, "A");
    assert_eq!(people[1].name, "B");
}

#[tokio::test]
async fn people_serialize_as_name_objects() {
    let Json(people) = list_people(State(test_app_state(&["A"])))
        .await
        .expect("seed source never fails");
    let value = serde_json::to_value(&people).expect("serialize");
    assert_eq!(value, json!([{"name": "A"}]));
}

#[test]
fn unavailable_source_maps_to_internal_error() {
    let err = PeopleError::Unavailable("offline".to_owned());
    assert_eq!(people_error_to_status(err), StatusCode::INTERNAL_SERVER_ERROR);
}
