//! Tests for the experience record and its identifier validation.

use super::*;
use crate::domain::user::UserValidationError;

#[test]
fn experience_id_rejects_empty_input() {
    assert_eq!(
        ExperienceId::new(""),
        Err(ExperienceValidationError::EmptyId)
    );
}

#[test]
fn experience_id_rejects_surrounding_whitespace() {
    assert_eq!(
        ExperienceId::new("e1 "),
        Err(ExperienceValidationError::PaddedId)
    );
}

#[test]
fn invalid_owner_id_surfaces_the_owner_error() {
    let result = Experience::try_from_parts("e1", "", "Kayak trip", None);
    assert_eq!(
        result,
        Err(ExperienceValidationError::Owner(
            UserValidationError::EmptyId
        ))
    );
}

#[test]
fn title_and_description_are_carried_unvalidated() {
    let experience = Experience::from_parts("e1", "u1", "", Some(String::new()));
    assert_eq!(experience.title(), "");
    assert_eq!(experience.description(), Some(""));
}

#[test]
fn experience_round_trips_through_json() {
    let experience = Experience::from_parts("e1", "u1", "Kayak trip", Some("Half day".to_owned()));
    let value = serde_json::to_value(&experience).expect("experience serialises");
    assert_eq!(
        value,
        serde_json::json!({
            "id": "e1",
            "owner": "u1",
            "title": "Kayak trip",
            "description": "Half day",
        })
    );

    let decoded: Experience = serde_json::from_value(value).expect("experience deserialises");
    assert_eq!(decoded, experience);
}

#[test]
fn missing_description_is_omitted_from_json() {
    let experience = Experience::from_parts("e1", "u1", "Kayak trip", None);
    let value = serde_json::to_value(&experience).expect("experience serialises");
    assert_eq!(
        value,
        serde_json::json!({ "id": "e1", "owner": "u1", "title": "Kayak trip" })
    );
}
