// Room module
// Ephemeral rooms: an in-memory registry plus the create/check endpoints

pub mod error;
pub mod handlers;
pub mod models;
pub mod registry;

pub use error::RoomError;
pub use handlers::{check_room_handler, create_room_handler};
pub use models::{CheckRoomResponse, CreateRoomResponse, Room, RoomAdmin};
pub use registry::RoomRegistry;
