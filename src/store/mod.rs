// Room store module
// Client-side room state: immutable state value, pure reducers, and the
// backend-synchronizing client

pub mod client;
pub mod state;

pub use client::{RoomClient, RoomClientError};
pub use state::{reduce, Participant, RoomAction, RoomState};
