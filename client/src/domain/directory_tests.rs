//! Tests for the experience directory service.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::*;
use crate::domain::ports::{
    ExperienceServiceError, MockExperienceService, MockUserService, UserServiceError,
};

fn experience(id: &str, owner: &str, title: &str) -> Experience {
    Experience::from_parts(id, owner, title, None)
}

fn sample_users() -> Vec<User> {
    vec![
        User::from_strings("u1", "Ana"),
        User::from_strings("u2", "Bea"),
    ]
}

fn sample_experiences() -> Vec<Experience> {
    vec![
        experience("e1", "u1", "Kayak trip"),
        experience("e2", "u2", "Cooking class"),
        experience("e3", "u1", "Museum tour"),
    ]
}

fn listing_mocks(
    experiences: Vec<Experience>,
    users: Vec<User>,
) -> (MockExperienceService, MockUserService) {
    let mut experience_service = MockExperienceService::new();
    experience_service
        .expect_list()
        .return_once(move || Ok(experiences));

    let mut user_service = MockUserService::new();
    user_service.expect_list().return_once(move || Ok(users));

    (experience_service, user_service)
}

async fn loaded_directory(
    experience_service: MockExperienceService,
    user_service: MockUserService,
) -> ExperienceDirectory<MockExperienceService, MockUserService> {
    let mut directory =
        ExperienceDirectory::new(Arc::new(experience_service), Arc::new(user_service));
    directory.refresh().await.expect("initial refresh succeeds");
    directory
}

fn owner(id: &str) -> UserId {
    UserId::new(id).expect("valid owner id")
}

#[tokio::test]
async fn resolve_owner_name_returns_the_snapshot_user_name() {
    let (experience_service, user_service) = listing_mocks(sample_experiences(), sample_users());
    let directory = loaded_directory(experience_service, user_service).await;

    let name = directory
        .resolve_owner_name(&owner("u1"))
        .expect("owner resolves");
    assert_eq!(name.as_ref(), "Ana");
}

#[tokio::test]
async fn resolve_owner_name_returns_none_for_an_unknown_owner() {
    let (experience_service, user_service) = listing_mocks(sample_experiences(), sample_users());
    let directory = loaded_directory(experience_service, user_service).await;

    assert!(directory.resolve_owner_name(&owner("u9")).is_none());
}

#[tokio::test]
async fn lookups_before_the_first_refresh_find_nothing() {
    let directory = ExperienceDirectory::new(
        Arc::new(MockExperienceService::new()),
        Arc::new(MockUserService::new()),
    );

    assert!(!directory.is_loaded());
    assert!(directory.snapshot().is_none());
    assert!(directory.resolve_owner_name(&owner("u1")).is_none());
    assert!(directory.filter_by_owner_name("Ana").is_empty());
}

#[tokio::test]
async fn filter_returns_the_owner_experiences_in_snapshot_order() {
    let (experience_service, user_service) = listing_mocks(sample_experiences(), sample_users());
    let directory = loaded_directory(experience_service, user_service).await;

    let filtered = directory.filter_by_owner_name("Ana");
    assert_eq!(
        filtered,
        vec![
            experience("e1", "u1", "Kayak trip"),
            experience("e3", "u1", "Museum tour"),
        ]
    );
}

#[tokio::test]
async fn filter_returns_empty_when_the_query_names_no_user() {
    let (experience_service, user_service) = listing_mocks(sample_experiences(), sample_users());
    let directory = loaded_directory(experience_service, user_service).await;

    assert!(directory.filter_by_owner_name("Bob").is_empty());
}

#[tokio::test]
async fn filter_matches_names_case_sensitively() {
    let (experience_service, user_service) = listing_mocks(sample_experiences(), sample_users());
    let directory = loaded_directory(experience_service, user_service).await;

    assert!(directory.filter_by_owner_name("ana").is_empty());
}

#[tokio::test]
async fn an_empty_query_yields_no_experiences() {
    // Display names are never blank, so the empty query can never name a
    // user; the result is an empty list, not the unfiltered one.
    let (experience_service, user_service) = listing_mocks(sample_experiences(), sample_users());
    let directory = loaded_directory(experience_service, user_service).await;

    assert!(directory.filter_by_owner_name("").is_empty());
}

#[tokio::test]
async fn filtering_by_known_and_unknown_names_matches_ownership() {
    let users = vec![User::from_strings("u1", "Ana")];
    let experiences = vec![
        experience("e1", "u1", "Kayak trip"),
        experience("e2", "u1", "Museum tour"),
    ];
    let (experience_service, user_service) = listing_mocks(experiences.clone(), users);
    let directory = loaded_directory(experience_service, user_service).await;

    assert_eq!(directory.filter_by_owner_name("Ana"), experiences);
    assert!(directory.filter_by_owner_name("Bob").is_empty());
}

#[tokio::test]
async fn refresh_twice_against_an_unchanged_remote_is_idempotent() {
    let mut experience_service = MockExperienceService::new();
    experience_service
        .expect_list()
        .times(2)
        .returning(|| Ok(sample_experiences()));

    let mut user_service = MockUserService::new();
    user_service
        .expect_list()
        .times(2)
        .returning(|| Ok(sample_users()));

    let mut directory =
        ExperienceDirectory::new(Arc::new(experience_service), Arc::new(user_service));

    let first = directory.refresh().await.expect("first refresh").clone();
    let second = directory.refresh().await.expect("second refresh").clone();
    assert_eq!(first, second);
}

#[tokio::test]
async fn a_failed_user_fetch_keeps_the_previous_snapshot() {
    let mut experience_service = MockExperienceService::new();
    let listings = Mutex::new(VecDeque::from([
        Ok(sample_experiences()),
        // The second experience fetch succeeds with different data; none of
        // it may leak into the snapshot once the paired user fetch fails.
        Ok(vec![experience("e9", "u9", "Ghost entry")]),
    ]));
    experience_service.expect_list().times(2).returning(move || {
        listings
            .lock()
            .expect("listings mutex")
            .pop_front()
            .expect("scripted listing")
    });

    let mut user_service = MockUserService::new();
    let user_listings = Mutex::new(VecDeque::from([
        Ok(sample_users()),
        Err(UserServiceError::transport("connection reset")),
    ]));
    user_service.expect_list().times(2).returning(move || {
        user_listings
            .lock()
            .expect("user listings mutex")
            .pop_front()
            .expect("scripted user listing")
    });

    let mut directory =
        ExperienceDirectory::new(Arc::new(experience_service), Arc::new(user_service));

    let before = directory.refresh().await.expect("first refresh").clone();
    let error = directory.refresh().await.expect_err("second refresh fails");

    assert_eq!(
        error,
        DirectoryError::RefreshFailed {
            cause: RefreshCause::Users(UserServiceError::transport("connection reset")),
        }
    );
    assert_eq!(directory.snapshot(), Some(&before));
}

#[tokio::test]
async fn a_failed_experience_fetch_leaves_the_directory_empty() {
    let mut experience_service = MockExperienceService::new();
    experience_service
        .expect_list()
        .return_once(|| Err(ExperienceServiceError::timeout("deadline elapsed")));

    // The experience fetch fails on its first poll, so the paired user
    // fetch may never run; leave its call count unconstrained.
    let mut user_service = MockUserService::new();
    user_service.expect_list().returning(|| Ok(sample_users()));

    let mut directory =
        ExperienceDirectory::new(Arc::new(experience_service), Arc::new(user_service));

    let error = directory.refresh().await.expect_err("refresh fails");
    assert_eq!(
        error,
        DirectoryError::RefreshFailed {
            cause: RefreshCause::Experiences(ExperienceServiceError::timeout("deadline elapsed")),
        }
    );
    assert!(!directory.is_loaded());
}

#[tokio::test]
async fn delete_removes_the_single_matching_entry() {
    let experiences = vec![
        experience("e1", "u1", "Kayak trip"),
        experience("e2", "u2", "Cooking class"),
    ];
    let (mut experience_service, user_service) = listing_mocks(experiences, sample_users());
    experience_service
        .expect_delete()
        .withf(|id| id.as_ref() == "e1")
        .times(1)
        .returning(|_| Ok(()));

    let mut directory = loaded_directory(experience_service, user_service).await;
    let id = ExperienceId::new("e1").expect("valid id");
    directory.delete_experience(&id).await.expect("delete succeeds");

    let snapshot = directory.snapshot().expect("directory stays loaded");
    assert_eq!(
        snapshot.experiences(),
        &[experience("e2", "u2", "Cooking class")]
    );
}

#[tokio::test]
async fn a_failed_delete_leaves_the_snapshot_unchanged() {
    let (mut experience_service, user_service) =
        listing_mocks(sample_experiences(), sample_users());
    experience_service
        .expect_delete()
        .times(1)
        .returning(|_| Err(ExperienceServiceError::upstream(503_u16, "unavailable")));

    let mut directory = loaded_directory(experience_service, user_service).await;
    let before = directory.snapshot().expect("loaded").clone();

    let id = ExperienceId::new("e1").expect("valid id");
    let error = directory
        .delete_experience(&id)
        .await
        .expect_err("delete fails");

    assert_eq!(
        error,
        DirectoryError::DeleteFailed {
            id: id.clone(),
            cause: ExperienceServiceError::upstream(503_u16, "unavailable"),
        }
    );
    let snapshot = directory.snapshot().expect("loaded");
    assert_eq!(snapshot, &before);
    assert!(
        snapshot
            .experiences()
            .iter()
            .any(|experience| experience.id() == &id),
        "the record must still be listed after a failed delete",
    );
}

#[tokio::test]
async fn deleting_an_id_absent_from_the_snapshot_is_a_noop_locally() {
    let (mut experience_service, user_service) =
        listing_mocks(sample_experiences(), sample_users());
    experience_service
        .expect_delete()
        .times(1)
        .returning(|_| Ok(()));

    let mut directory = loaded_directory(experience_service, user_service).await;
    let before = directory.snapshot().expect("loaded").clone();

    let id = ExperienceId::new("e9").expect("valid id");
    directory.delete_experience(&id).await.expect("remote accepts");

    assert_eq!(directory.snapshot(), Some(&before));
}
