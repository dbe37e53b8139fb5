//! Store state, actions, and the reducer.
//!
//! DESIGN
//! ======
//! One store, one reducer, keyed by feature area. Snapshots are
//! immutable `Arc`s: the reducer returns a fresh snapshot for recognized
//! actions and the same snapshot (pointer-equal) for everything else,
//! which is what lets the store skip publishing no-op updates.

pub mod action;
pub mod home;
pub mod store;

use serde::{Deserialize, Serialize};

use self::home::HomeState;

/// Serialized shape of the whole store: one slice per feature area.
/// This is the payload the server embeds as `window.initialState` and
/// the browser entry point reads back before mounting.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreState {
    #[serde(default)]
    pub home: HomeState,
}
