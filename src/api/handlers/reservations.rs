//! Reservation booking handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::api::dto::{ApiResponse, BookRoomRequest, ReservationDto, SortQuery};
use crate::api::extract::ValidatedJson;
use crate::api::handlers::{domain_error_response, AppState};
use crate::domain::reservation::ReservationSort;

type HandlerError = (StatusCode, Json<ApiResponse<()>>);

/// Book a room for one day
///
/// Checks run in order and stop at the first failure: the date must parse
/// as an ISO calendar date, must not lie in the past (same-day is fine) and
/// the room must still be free on that day. A successful booking also
/// clears the room's availability flag.
#[utoipa::path(
    post,
    path = "/api/v1/rooms/{id}/reservations",
    tag = "Reservations",
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    request_body = BookRoomRequest,
    responses(
        (status = 201, description = "Reservation created", body = ApiResponse<ReservationDto>),
        (status = 404, description = "Room not found"),
        (status = 409, description = "Room already reserved for that date"),
        (status = 422, description = "Invalid or past date")
    )
)]
pub async fn book_room(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<BookRoomRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ReservationDto>>), HandlerError> {
    let reservation = state
        .bookings
        .book_room(id, &req.date, req.comment)
        .await
        .map_err(domain_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            reservation.into(),
            "Room reservation completed successfully.",
        )),
    ))
}

/// Reservations of a room
///
/// Date-ascending by default; `sort_option=2` flips to descending.
#[utoipa::path(
    get,
    path = "/api/v1/rooms/{id}/reservations",
    tag = "Reservations",
    params(
        ("id" = i32, Path, description = "Room ID"),
        SortQuery
    ),
    responses(
        (status = 200, description = "Reservations of the room", body = ApiResponse<Vec<ReservationDto>>),
        (status = 404, description = "Room not found")
    )
)]
pub async fn list_room_reservations(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<SortQuery>,
) -> Result<Json<ApiResponse<Vec<ReservationDto>>>, HandlerError> {
    let sort = ReservationSort::from_option(params.sort_option.as_deref());
    let (_, reservations) = state
        .rooms
        .room_detail(id, sort)
        .await
        .map_err(domain_error_response)?;

    let dtos: Vec<ReservationDto> = reservations.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(dtos)))
}
