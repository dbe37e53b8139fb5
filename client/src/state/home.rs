//! Home feature state and its reducer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::action::Action;

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

/// Action kind that replaces the people list. Payload: array of people.
pub const UPDATE_PERSON_LIST: &str = "home:list:update";

/// Action kind that sets the blank-panel visibility. Payload: bool.
pub const TOGGLE_BLANK_VISIBLE: &str = "home:blank:toggle";

/// One person in the directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
}

/// State slice behind the home page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HomeState {
    /// People shown in the directory list.
    #[serde(default)]
    pub list: Vec<Person>,
    /// Whether the blank placeholder panel is shown.
    #[serde(default = "blank_visible_default")]
    pub blank_visible: bool,
}

fn blank_visible_default() -> bool {
    true
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            list: Vec::new(),
            blank_visible: true,
        }
    }
}

/// Reduce one action into the next state snapshot.
///
/// Recognized actions with well-formed payloads produce a new snapshot
/// that touches only their own field. Everything else, including
/// malformed payloads, reduces to the same `Arc` so callers can skip
/// publishing via pointer equality.
#[must_use]
pub fn reduce(state: &Arc<HomeState>, action: &Action) -> Arc<HomeState> {
    match action.kind.as_str() {
        UPDATE_PERSON_LIST => {
            match serde_json::from_value::<Vec<Person>>(action.payload.clone()) {
                Ok(list) => Arc::new(HomeState {
                    list,
                    blank_visible: state.blank_visible,
                }),
                Err(_) => Arc::clone(state),
            }
        }
        TOGGLE_BLANK_VISIBLE => match action.payload.as_bool() {
            Some(visible) => Arc::new(HomeState {
                list: state.list.clone(),
                blank_visible: visible,
            }),
            None => Arc::clone(state),
        },
        _ => Arc::clone(state),
    }
}
