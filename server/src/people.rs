//! People directory data source.
//!
//! DESIGN
//! ======
//! The scaffold ships without a database. The directory behind the API
//! and the SSR prefetch is a fixed in-memory seed, reached through the
//! `PeopleDirectory` trait object in `AppState`, so a real source can
//! replace it without touching the handlers. The trait is fallible for
//! that replacement's sake; the seed itself never fails.

use client::state::home::Person;

#[cfg(test)]
#[path = "people_test.rs"]
mod people_test;

/// Error from a people source.
#[derive(Debug, thiserror::Error)]
pub enum PeopleError {
    /// The backing source could not be reached or read.
    #[error("people source unavailable: {0}")]
    Unavailable(String),
}

/// Read side of the people directory. Enables mocking in tests.
#[async_trait::async_trait]
pub trait PeopleDirectory: Send + Sync {
    /// Every person, in directory order.
    async fn list(&self) -> Result<Vec<Person>, PeopleError>;
}

/// Fixed seed data standing in for a real people source.
pub struct SeedPeople {
    people: Vec<Person>,
}

impl SeedPeople {
    #[must_use]
    pub fn new() -> Self {
        Self::with_names(&["Dana Yao", "Priya Nair", "Sam Whitfield", "Maria Ponce"])
    }

    /// Seed with explicit names, in order.
    #[must_use]
    pub fn with_names(names: &[&str]) -> Self {
        Self {
            people: names
                .iter()
                .map(|name| Person {
                    name: (*name).to_owned(),
                })
                .collect(),
        }
    }
}

impl Default for SeedPeople {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl PeopleDirectory for SeedPeople {
    async fn list(&self) -> Result<Vec<Person>, PeopleError> {
        Ok(self.people.clone())
    }
}
