//! Room management handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::api::dto::{
    ApiResponse, RoomDetailDto, RoomDto, RoomForm, SearchRoomsParams, SortQuery,
};
use crate::api::extract::ValidatedJson;
use crate::api::handlers::{domain_error_response, AppState};
use crate::domain::reservation::ReservationSort;
use crate::domain::room::{RoomSearch, RoomSort, SearchOutcome};

type HandlerError = (StatusCode, Json<ApiResponse<()>>);

/// List all rooms
///
/// `sort_option=1` orders by capacity descending, `sort_option=2` ascending;
/// anything else yields the unsorted list. An empty catalog is reported with
/// a "No rooms available." message.
#[utoipa::path(
    get,
    path = "/api/v1/rooms",
    tag = "Rooms",
    params(SortQuery),
    responses(
        (status = 200, description = "All rooms", body = ApiResponse<Vec<RoomDto>>)
    )
)]
pub async fn list_rooms(
    State(state): State<AppState>,
    Query(params): Query<SortQuery>,
) -> Result<Json<ApiResponse<Vec<RoomDto>>>, HandlerError> {
    let sort = RoomSort::from_option(params.sort_option.as_deref());
    let rooms = state
        .rooms
        .list_rooms(sort)
        .await
        .map_err(domain_error_response)?;

    if rooms.is_empty() {
        return Ok(Json(ApiResponse::success_with_message(
            Vec::new(),
            "No rooms available.",
        )));
    }
    let dtos: Vec<RoomDto> = rooms.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

/// Create a new room
///
/// A blank name, an already-used name and a non-positive capacity are each
/// checked independently, so one submission can come back with several
/// messages at once.
#[utoipa::path(
    post,
    path = "/api/v1/rooms",
    tag = "Rooms",
    request_body = RoomForm,
    responses(
        (status = 201, description = "Room created", body = ApiResponse<RoomDto>),
        (status = 422, description = "Invalid form input")
    )
)]
pub async fn create_room(
    State(state): State<AppState>,
    ValidatedJson(form): ValidatedJson<RoomForm>,
) -> Result<(StatusCode, Json<ApiResponse<RoomDto>>), HandlerError> {
    let room = state
        .rooms
        .create_room(form.into())
        .await
        .map_err(domain_error_response)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(room.into()))))
}

/// Room detail
///
/// The room together with its reservations, date-ascending by default;
/// `sort_option=2` flips to descending. Also serves as the data source for
/// the edit form and the delete confirmation view.
#[utoipa::path(
    get,
    path = "/api/v1/rooms/{id}",
    tag = "Rooms",
    params(
        ("id" = i32, Path, description = "Room ID"),
        SortQuery
    ),
    responses(
        (status = 200, description = "Room with its reservations", body = ApiResponse<RoomDetailDto>),
        (status = 404, description = "Room not found")
    )
)]
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<SortQuery>,
) -> Result<Json<ApiResponse<RoomDetailDto>>, HandlerError> {
    let sort = ReservationSort::from_option(params.sort_option.as_deref());
    let (room, reservations) = state
        .rooms
        .room_detail(id, sort)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(RoomDetailDto {
        room: room.into(),
        reservations: reservations.into_iter().map(Into::into).collect(),
    })))
}

/// Edit a room
///
/// Overwrites all four form fields. Name uniqueness is not re-checked on
/// edit; only creation enforces it.
#[utoipa::path(
    put,
    path = "/api/v1/rooms/{id}",
    tag = "Rooms",
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    request_body = RoomForm,
    responses(
        (status = 200, description = "Room updated", body = ApiResponse<RoomDto>),
        (status = 404, description = "Room not found"),
        (status = 422, description = "Invalid form input")
    )
)]
pub async fn update_room(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(form): ValidatedJson<RoomForm>,
) -> Result<Json<ApiResponse<RoomDto>>, HandlerError> {
    let room = state
        .rooms
        .update_room(id, form.into())
        .await
        .map_err(domain_error_response)?;
    Ok(Json(ApiResponse::success(room.into())))
}

/// Delete a room
///
/// Removes the room and, by cascade, all of its reservations.
#[utoipa::path(
    delete,
    path = "/api/v1/rooms/{id}",
    tag = "Rooms",
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Room deleted", body = ApiResponse<RoomDto>),
        (status = 404, description = "Room not found")
    )
)]
pub async fn delete_room(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<RoomDto>>, HandlerError> {
    let room = state
        .rooms
        .delete_room(id)
        .await
        .map_err(domain_error_response)?;
    Ok(Json(ApiResponse::success_with_message(
        room.into(),
        "Room removed.",
    )))
}

/// Search rooms
///
/// Applies the supplied criteria conjunctively. Without any criteria no
/// query runs and the response only carries a prompt; criteria that match
/// nothing come back with an informational message and an empty list.
#[utoipa::path(
    get,
    path = "/api/v1/rooms/search",
    tag = "Rooms",
    params(SearchRoomsParams),
    responses(
        (status = 200, description = "Matching rooms", body = ApiResponse<Vec<RoomDto>>)
    )
)]
pub async fn search_rooms(
    State(state): State<AppState>,
    Query(params): Query<SearchRoomsParams>,
) -> Result<Json<ApiResponse<Vec<RoomDto>>>, HandlerError> {
    let criteria: RoomSearch = params.into();
    let outcome = state
        .rooms
        .search_rooms(criteria)
        .await
        .map_err(domain_error_response)?;

    let response = match outcome {
        SearchOutcome::NoCriteria => {
            ApiResponse::success_with_message(Vec::new(), "Please enter search criteria.")
        }
        SearchOutcome::Found(rooms) if rooms.is_empty() => ApiResponse::success_with_message(
            Vec::new(),
            "No rooms found matching the search criteria.",
        ),
        SearchOutcome::Found(rooms) => {
            ApiResponse::success(rooms.into_iter().map(Into::into).collect())
        }
    };
    Ok(Json(response))
}
