// Room data models and DTOs

use crate::auth::models::User;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Room admin reference, embedded in room payloads
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomAdmin {
    pub id: Uuid,
    pub full_name: String,
}

impl From<&User> for RoomAdmin {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name.clone(),
        }
    }
}

/// A registered room
///
/// Rooms are ephemeral: they live in the in-memory registry and disappear on
/// restart.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub admin: RoomAdmin,
    pub created_at: DateTime<Utc>,
}

/// Response body for room creation
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomResponse {
    pub room_id: String,
    pub room_name: String,
    pub admin: RoomAdmin,
}

/// Response body for room code validation
#[derive(Debug, Serialize, ToSchema)]
pub struct CheckRoomResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<RoomAdmin>,
}
