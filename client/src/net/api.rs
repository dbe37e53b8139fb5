//! REST API helpers for communicating with the server.
//!
//! Browser builds make real HTTP calls via `gloo-net`. Other builds get
//! stubs that return errors: on the server, initial data arrives through
//! the bootstrap state rather than HTTP.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures
//! degrade to the data already in the store.

#![allow(clippy::unused_async)]

use crate::state::home::Person;

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Path of the people listing endpoint.
pub const PEOPLE_ENDPOINT: &str = "/api/people";

/// Fetch the full people list from the server.
///
/// # Errors
///
/// Returns a human-readable message when the request fails, the server
/// responds with a non-success status, or the body is not a people list.
pub async fn fetch_people() -> Result<Vec<Person>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(PEOPLE_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<Vec<Person>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Error message for a non-success people response.
#[must_use]
pub fn request_failed_message(status: u16) -> String {
    format!("people request failed: {status}")
}
