//! Store actions.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::home::{Person, TOGGLE_BLANK_VISIBLE, UPDATE_PERSON_LIST};

#[cfg(test)]
#[path = "action_test.rs"]
mod action_test;

/// A dispatched store event: a namespaced kind plus a JSON payload.
///
/// Kinds are open strings rather than a closed enum. The reducer ignores
/// anything it does not recognize, so new features can dispatch their
/// own kinds without touching existing ones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub kind: String,
    #[serde(default)]
    pub payload: Value,
}

impl Action {
    /// Replace the people list.
    #[must_use]
    pub fn update_person_list(list: &[Person]) -> Self {
        Self {
            kind: UPDATE_PERSON_LIST.to_owned(),
            // Infallible: Person serializes to plain JSON objects.
            payload: serde_json::to_value(list).unwrap_or_default(),
        }
    }

    /// Set the blank-panel visibility.
    #[must_use]
    pub fn toggle_blank_visible(visible: bool) -> Self {
        Self {
            kind: TOGGLE_BLANK_VISIBLE.to_owned(),
            payload: json!(visible),
        }
    }
}
