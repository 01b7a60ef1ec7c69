// In-memory room registry

use crate::room::models::{Room, RoomAdmin};
use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Length of the shareable room code
pub const ROOM_CODE_LEN: usize = 8;

fn generate_room_code() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ROOM_CODE_LEN)
        .map(char::from)
        .collect()
}

/// Registry of live rooms, shared across request handlers
///
/// Rooms are keyed by their code. The whole registry is lost on restart.
#[derive(Clone, Default)]
pub struct RoomRegistry {
    rooms: Arc<RwLock<HashMap<String, Room>>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a room under a fresh unique code and return it
    pub async fn create(&self, name: &str, admin: RoomAdmin) -> Room {
        let mut rooms = self.rooms.write().await;

        let mut code = generate_room_code();
        while rooms.contains_key(&code) {
            code = generate_room_code();
        }

        let room = Room {
            id: code.clone(),
            name: name.to_string(),
            admin,
            created_at: Utc::now(),
        };
        rooms.insert(code, room.clone());
        room
    }

    /// Look up a room by code
    pub async fn get(&self, id: &str) -> Option<Room> {
        self.rooms.read().await.get(id).cloned()
    }

    /// Number of live rooms
    pub async fn len(&self) -> usize {
        self.rooms.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rooms.read().await.is_empty()
    }
}
