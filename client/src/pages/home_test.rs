use super::*;

use crate::state::home::Person;

fn state_with(names: &[&str]) -> HomeState {
    HomeState {
        list: names
            .iter()
            .map(|name| Person {
                name: (*name).to_owned(),
            })
            .collect(),
        blank_visible: true,
    }
}

#[test]
fn row_labels_follow_store_order() {
    let state = state_with(&["Ada", "Grace", "Alan"]);
    assert_eq!(person_row_labels(&state), ["Ada", "Grace", "Alan"]);
}

#[test]
fn single_person_yields_single_row() {
    let state = state_with(&["A"]);
    let labels = person_row_labels(&state);
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0], "A");
}

#[test]
fn empty_list_yields_no_rows() {
    let state = state_with(&[]);
    assert!(person_row_labels(&state).is_empty());
}
