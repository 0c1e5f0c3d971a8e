//! API Router with Swagger UI

use axum::{
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::dto::{
    ApiResponse, BookRoomRequest, ReservationDto, RoomDetailDto, RoomDto, RoomForm,
};
use crate::api::handlers::{health, reservations, rooms, AppState};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Rooms
        rooms::list_rooms,
        rooms::create_room,
        rooms::get_room,
        rooms::update_room,
        rooms::delete_room,
        rooms::search_rooms,
        // Reservations
        reservations::book_room,
        reservations::list_room_reservations,
    ),
    components(
        schemas(
            ApiResponse<String>,
            RoomDto,
            RoomForm,
            RoomDetailDto,
            ReservationDto,
            BookRoomRequest,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service health check for uptime monitoring."),
        (name = "Rooms", description = "Room catalog administration: create, edit, delete, list (sortable by capacity) and search. Room names are unique on creation by business rule; every room carries a capacity, a projector flag and an availability flag."),
        (name = "Reservations", description = "Day-granularity room bookings. A room can hold at most one reservation per calendar day; booking a room clears its availability flag. Reservations are removed only together with their room."),
    ),
    info(
        title = "Room Booking API",
        version = "1.0.0",
        description = "REST API for administering bookable rooms and their day-granularity reservations.

## Response format

Every endpoint wraps its payload in a standard envelope:
```json
{\"success\": true, \"data\": {...}, \"messages\": [\"...\"]}
```

On failure:
```json
{\"success\": false, \"data\": null, \"error\": \"joined messages\", \"messages\": [...]}
```

`messages` carries the user-facing status messages of the form UI (for
example \"Room removed.\" or \"No rooms available.\").",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let room_routes = Router::new()
        .route("/", get(rooms::list_rooms).post(rooms::create_room))
        .route("/search", get(rooms::search_rooms))
        .route(
            "/{id}",
            get(rooms::get_room)
                .put(rooms::update_room)
                .delete(rooms::delete_room),
        )
        .route(
            "/{id}/reservations",
            get(reservations::list_room_reservations).post(reservations::book_room),
        )
        .with_state(state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .route("/health", get(health::health_check))
        .nest("/api/v1/rooms", room_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────
