use super::*;

#[tokio::test]
async fn seed_people_lists_names_in_order() {
    let seed = SeedPeople::with_names(&["A", "B"]);
    let people = seed.list().await.expect("seed never fails");
    assert_eq!(people.len(), 2);
    assert_eq!(people[0].name, "A");
    assert_eq!(people[1].name, "B");
}

#[tokio::test]
async fn default_seed_is_not_empty() {
    let people = SeedPeople::new().list().await.expect("seed never fails");
    assert!(!people.is_empty());
}

#[test]
fn unavailable_error_names_the_source() {
    let err = PeopleError::Unavailable("directory offline".to_owned());
    assert_eq!(err.to_string(), "people source unavailable: directory offline");
}
