// HTTP handlers for room endpoints

use crate::auth::middleware::AuthenticatedUser;
use crate::room::{
    error::RoomError,
    models::{CheckRoomResponse, CreateRoomResponse, RoomAdmin},
};
use crate::validation;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

/// Query parameters for room creation
#[derive(Debug, Deserialize)]
pub struct CreateRoomQuery {
    pub name: Option<String>,
}

/// Handler for GET /api/room/create?name=...
/// Registers a room with the requesting user as admin
#[utoipa::path(
    get,
    path = "/api/room/create",
    params(
        ("name" = String, Query, description = "Display name for the room")
    ),
    responses(
        (status = 200, description = "Room created", body = CreateRoomResponse),
        (status = 400, description = "Missing or blank room name", body = crate::auth::models::MessageResponse),
        (status = 401, description = "Missing or invalid session", body = crate::auth::models::MessageResponse)
    ),
    tag = "room"
)]
pub async fn create_room_handler(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Query(query): Query<CreateRoomQuery>,
) -> Result<Json<CreateRoomResponse>, RoomError> {
    let name = query.name.unwrap_or_default();
    validation::validate_room_name(&name)
        .map_err(|_| RoomError::Validation("Room name is required.".to_string()))?;
    let name = name.trim();

    let room = state.rooms.create(name, RoomAdmin::from(&user.0)).await;
    tracing::info!("Room {} created by user {}", room.id, user.0.id);

    Ok(Json(CreateRoomResponse {
        room_id: room.id,
        room_name: room.name,
        admin: room.admin,
    }))
}

/// Handler for GET /api/room/check/:room_id
/// Reports whether a room code is registered
///
/// An unknown code is a valid:false answer, not an error.
#[utoipa::path(
    get,
    path = "/api/room/check/{room_id}",
    params(
        ("room_id" = String, Path, description = "Room code to validate")
    ),
    responses(
        (status = 200, description = "Validity of the room code", body = CheckRoomResponse),
        (status = 401, description = "Missing or invalid session", body = crate::auth::models::MessageResponse)
    ),
    tag = "room"
)]
pub async fn check_room_handler(
    State(state): State<crate::AppState>,
    _user: AuthenticatedUser,
    Path(room_id): Path<String>,
) -> Json<CheckRoomResponse> {
    match state.rooms.get(&room_id).await {
        Some(room) => Json(CheckRoomResponse {
            valid: true,
            admin: Some(room.admin),
        }),
        None => {
            tracing::debug!("Room check missed: {}", room_id);
            Json(CheckRoomResponse {
                valid: false,
                admin: None,
            })
        }
    }
}
