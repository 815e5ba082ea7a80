//! Unit tests for the facility service

use std::sync::Arc;

use crate::domain::dto::FacilityDto;
use crate::domain::entities::{Facility, FacilityStatus};
use crate::domain::messages;
use crate::errors::{FacilityError, RepositoryError};
use crate::services::facility::{validate_name, FacilityService};
use crate::services::mocks::MockFacilityRepository;

fn gym_dto() -> FacilityDto {
    FacilityDto {
        id: None,
        name: "Gym".to_string(),
        description: "Gym facility".to_string(),
        picture: "gym.jpg".to_string(),
        status: None,
    }
}

fn stored_facility(id: i32, status: FacilityStatus) -> Facility {
    Facility {
        id: Some(id),
        name: "Gym".to_string(),
        description: "Gym facility".to_string(),
        picture: "gym.jpg".to_string(),
        status,
    }
}

fn create_service(
    repo: MockFacilityRepository,
) -> (FacilityService<MockFacilityRepository>, Arc<MockFacilityRepository>) {
    let repo = Arc::new(repo);
    (FacilityService::new(repo.clone()), repo)
}

#[test]
fn test_validate_name() {
    assert!(validate_name("Gym").is_ok());
    assert!(matches!(validate_name(""), Err(FacilityError::InvalidName)));
    assert!(matches!(validate_name("   "), Err(FacilityError::InvalidName)));
}

#[tokio::test]
async fn test_create_facility_success() {
    let (service, repo) = create_service(MockFacilityRepository::new());

    let response = service.create_facility(gym_dto()).await.unwrap();

    assert_eq!(response.message, messages::FACILITY_STATUS_SUCCESS);
    assert_eq!(response.dto.id, Some(1));
    assert_eq!(response.dto.name, "Gym");
    assert_eq!(response.dto.description, "Gym facility");
    assert_eq!(response.dto.picture, "gym.jpg");
    assert_eq!(response.dto.status, Some(FacilityStatus::Available));
    assert_eq!(repo.save_calls(), 1);
}

#[tokio::test]
async fn test_create_facility_keeps_explicit_status() {
    let (service, _repo) = create_service(MockFacilityRepository::new());
    let mut dto = gym_dto();
    dto.status = Some(FacilityStatus::Occupied);

    let response = service.create_facility(dto).await.unwrap();

    assert_eq!(response.dto.status, Some(FacilityStatus::Occupied));
}

#[tokio::test]
async fn test_create_facility_invalid_name() {
    let (service, repo) = create_service(MockFacilityRepository::new());
    let mut dto = gym_dto();
    dto.name = String::new();

    let err = service.create_facility(dto).await.unwrap_err();

    assert!(matches!(err, FacilityError::InvalidName));
    assert_eq!(err.to_string(), messages::INVALID_FACILITY_NAME);
    assert_eq!(repo.save_calls(), 0);
}

#[tokio::test]
async fn test_update_facility_success() {
    let (service, repo) = create_service(MockFacilityRepository::with_records(vec![
        stored_facility(1, FacilityStatus::Occupied),
    ]));
    let dto = FacilityDto {
        name: "Updated Gym".to_string(),
        description: "Updated description".to_string(),
        picture: "updated_gym.jpg".to_string(),
        ..Default::default()
    };

    let response = service.update_facility(dto, 1).await.unwrap();

    assert_eq!(response, "Facility with id:1 is updated successfully.");
    assert_eq!(repo.save_calls(), 1);

    let stored = repo.get(1).unwrap();
    assert_eq!(stored.name, "Updated Gym");
    assert_eq!(stored.picture, "updated_gym.jpg");
    assert_eq!(stored.status, FacilityStatus::Occupied);
}

#[tokio::test]
async fn test_update_facility_not_found() {
    let (service, repo) = create_service(MockFacilityRepository::new());

    let err = service
        .update_facility(FacilityDto::default(), 1)
        .await
        .unwrap_err();

    assert!(matches!(err, FacilityError::NotFound));
    assert_eq!(err.to_string(), messages::FACILITY_NOT_FOUND);
    assert_eq!(repo.save_calls(), 0);
}

#[tokio::test]
async fn test_delete_facility_success() {
    let (service, repo) = create_service(MockFacilityRepository::with_records(vec![
        stored_facility(1, FacilityStatus::Available),
    ]));

    let response = service.delete_facility(1).await.unwrap();

    assert_eq!(response, "Facility with id:1 is deleted.");
    assert_eq!(repo.delete_calls(), 1);
    assert!(repo.get(1).is_none());
}

#[tokio::test]
async fn test_delete_facility_not_found() {
    let (service, repo) = create_service(MockFacilityRepository::new());

    let result = service.delete_facility(1).await;

    assert!(matches!(result, Err(FacilityError::NotFound)));
    assert_eq!(repo.delete_calls(), 0);
}

#[tokio::test]
async fn test_get_all_facility() {
    let (service, _repo) = create_service(MockFacilityRepository::with_records(vec![
        stored_facility(1, FacilityStatus::Available),
    ]));

    let facilities = service.get_all_facility().await.unwrap();

    assert_eq!(facilities.len(), 1);
    assert_eq!(facilities[0].id, Some(1));
}

#[tokio::test]
async fn test_get_all_facility_empty() {
    let (service, _repo) = create_service(MockFacilityRepository::new());

    assert!(service.get_all_facility().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_facility_by_id() {
    let (service, _repo) = create_service(MockFacilityRepository::with_records(vec![
        stored_facility(1, FacilityStatus::Available),
    ]));

    let dto = service.get_facility_by_id(1).await.unwrap();
    assert_eq!(dto.id, Some(1));

    let result = service.get_facility_by_id(2).await;
    assert!(matches!(result, Err(FacilityError::NotFound)));
}

#[tokio::test]
async fn test_change_status_to_available_success() {
    let (service, repo) = create_service(MockFacilityRepository::with_records(vec![
        stored_facility(1, FacilityStatus::Occupied),
    ]));

    let response = service.change_status_to_available(1).await.unwrap();

    assert_eq!(response, "Facility with id:1 is available now.");
    assert_eq!(repo.save_calls(), 1);
    assert_eq!(repo.get(1).unwrap().status, FacilityStatus::Available);
}

#[tokio::test]
async fn test_change_status_to_available_already_available() {
    let (service, repo) = create_service(MockFacilityRepository::with_records(vec![
        stored_facility(1, FacilityStatus::Available),
    ]));

    let err = service.change_status_to_available(1).await.unwrap_err();

    assert!(matches!(err, FacilityError::AlreadyAvailable));
    assert_eq!(err.to_string(), messages::FACILITY_ALREADY_AVAILABLE);
    assert_eq!(repo.save_calls(), 0);
}

#[tokio::test]
async fn test_change_status_to_available_not_found() {
    let (service, repo) = create_service(MockFacilityRepository::new());

    let result = service.change_status_to_available(1).await;

    assert!(matches!(result, Err(FacilityError::NotFound)));
    assert_eq!(repo.save_calls(), 0);
}

#[tokio::test]
async fn test_change_status_to_occupied() {
    let (service, repo) = create_service(MockFacilityRepository::with_records(vec![
        stored_facility(1, FacilityStatus::Available),
    ]));

    let response = service.change_status_to_occupied(1).await.unwrap();
    assert_eq!(response, "Facility with id:1 is occupied now.");
    assert_eq!(repo.get(1).unwrap().status, FacilityStatus::Occupied);

    let err = service.change_status_to_occupied(1).await.unwrap_err();
    assert!(matches!(err, FacilityError::AlreadyOccupied));
    assert_eq!(repo.save_calls(), 1);
}

#[tokio::test]
async fn test_repository_failure_propagates() {
    let (service, repo) = create_service(MockFacilityRepository::new());
    repo.fail_with(RepositoryError::Unavailable {
        message: "down".to_string(),
    });

    let err = service.get_all_facility().await.unwrap_err();

    assert!(matches!(err, FacilityError::Repository(RepositoryError::Unavailable { .. })));
}
