//! People API routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use client::state::home::Person;

use crate::people::PeopleError;
use crate::state::AppState;

#[cfg(test)]
#[path = "people_test.rs"]
mod people_test;

/// `GET /api/people` — the full people list, in directory order.
pub async fn list_people(
    State(state): State<AppState>,
) -> Result<Json<Vec<Person>>, StatusCode> {
    let people = state.people.list().await.map_err(people_error_to_status)?;
    Ok(Json(people))
}

/// Map a people-source failure onto the response status.
pub fn people_error_to_status(err: PeopleError) -> StatusCode {
    tracing::error!(error = %err, "people source failed");
    match err {
        PeopleError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
