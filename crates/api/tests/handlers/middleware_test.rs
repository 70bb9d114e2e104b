use axum::http::StatusCode;
use rstest::rstest;
use slotcast_api::middleware::error_handling::{AppError, map_error};
use slotcast_core::errors::BookingError;
use slotcast_hub::HubError;

#[rstest]
#[case::not_found(BookingError::NotFound("Slot not found".into()), StatusCode::NOT_FOUND)]
#[case::validation(BookingError::validation("Invalid input"), StatusCode::BAD_REQUEST)]
#[case::fetch(BookingError::Fetch(eyre::eyre!("Upstream down")), StatusCode::BAD_GATEWAY)]
#[case::internal(
    BookingError::Internal(Box::new(std::io::Error::other("Internal error"))),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn test_error_status_mapping(#[case] error: BookingError, #[case] expected: StatusCode) {
    let response = map_error(error);

    assert_eq!(response.status(), expected);
}

#[test]
fn test_hub_error_maps_to_bad_gateway() {
    let error: AppError = HubError::Status {
        status: 500,
        body: "boom".into(),
    }
    .into();

    assert_eq!(error.status(), StatusCode::BAD_GATEWAY);
}
