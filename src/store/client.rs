// Network half of the room store
//
// Takes the current RoomState in and hands the next state back, so callers
// keep the single owned value the reducers operate on.

use crate::store::state::{reduce, Participant, RoomAction, RoomState};
use serde::Deserialize;
use tracing::debug;

/// Errors surfaced to the UI by room creation
///
/// Validity checks never error; they collapse every failure into `false`.
#[derive(Debug, thiserror::Error)]
pub enum RoomClientError {
    #[error("Failed to create room")]
    CreateFailed,

    #[error("Failed to create room: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateRoomPayload {
    room_id: String,
    #[serde(default)]
    room_name: Option<String>,
    #[serde(default)]
    admin: Option<Participant>,
}

#[derive(Debug, Deserialize)]
struct CheckRoomPayload {
    #[serde(default)]
    valid: bool,
    #[serde(default)]
    admin: Option<Participant>,
}

/// HTTP client for the room endpoints
///
/// Carries a cookie store so the session cookie set at login rides along on
/// room calls.
pub struct RoomClient {
    http: reqwest::Client,
    base_url: String,
}

impl RoomClient {
    /// Build a client against a backend base URL (no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Result<Self, RoomClientError> {
        let http = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Build a client from the BACKEND_URL environment variable
    pub fn from_env() -> Result<Self, RoomClientError> {
        let base_url =
            std::env::var("BACKEND_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
        Self::new(base_url)
    }

    /// Create a room and move the state onto it
    ///
    /// Returns the next state and the new room identifier. If the response
    /// omits the room name, the requested name is kept.
    pub async fn create_room(
        &self,
        state: RoomState,
        room_name: &str,
    ) -> Result<(RoomState, String), RoomClientError> {
        let url = format!("{}/api/room/create", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("name", room_name)])
            .send()
            .await?;

        if !response.status().is_success() {
            debug!("Room creation answered {}", response.status());
            return Err(RoomClientError::CreateFailed);
        }

        let payload: CreateRoomPayload = response.json().await?;
        let room_id = payload.room_id;

        let next = RoomState {
            room_id: Some(room_id.clone()),
            room_name: payload.room_name.unwrap_or_else(|| room_name.to_string()),
            admin: payload.admin,
            ..state
        };
        Ok((next, room_id))
    }

    /// Check whether a room identifier is valid
    ///
    /// Never fails: transport errors, HTTP error statuses and undecodable
    /// bodies all come back as `false` with the state untouched. A valid
    /// answer that carries admin data refreshes the admin field in place.
    pub async fn check_room_id(&self, state: RoomState, room_id: &str) -> (RoomState, bool) {
        let url = format!(
            "{}/api/room/check/{}",
            self.base_url,
            urlencoding::encode(room_id)
        );

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("Room check transport failure: {}", e);
                return (state, false);
            }
        };
        if !response.status().is_success() {
            debug!("Room check answered {}", response.status());
            return (state, false);
        }

        let payload: CheckRoomPayload = match response.json().await {
            Ok(payload) => payload,
            Err(_) => return (state, false),
        };

        let state = if payload.valid && payload.admin.is_some() {
            reduce(state, RoomAction::SetAdmin(payload.admin))
        } else {
            state
        };
        (state, payload.valid)
    }
}
