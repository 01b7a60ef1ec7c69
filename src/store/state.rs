// Client-side room state and its reducers
//
// The state is an explicitly passed value; reducers are pure functions from
// (state, action) to the next state. Callers hold the current value and
// re-render from whatever reduce returns.

use serde::{Deserialize, Serialize};

/// A user visible in the room: the admin or a participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Room state as the client sees it
///
/// Default is the empty state: no room joined.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoomState {
    pub room_id: Option<String>,
    pub room_name: String,
    pub admin: Option<Participant>,
    pub participants: Vec<Participant>,
    pub typing_user_id: Option<String>,
}

/// State transitions
#[derive(Debug, Clone)]
pub enum RoomAction {
    /// Wholesale replacement of the room identity and membership
    SetRoomData {
        room_id: Option<String>,
        participants: Vec<Participant>,
        admin: Option<Participant>,
        room_name: String,
    },
    SetParticipants(Vec<Participant>),
    SetAdmin(Option<Participant>),
    SetTypingUser(Option<String>),
    /// Leave the room; the last room name is kept for display
    ClearRoom,
}

/// Apply an action to a state, producing the next state
pub fn reduce(state: RoomState, action: RoomAction) -> RoomState {
    match action {
        RoomAction::SetRoomData {
            room_id,
            participants,
            admin,
            room_name,
        } => RoomState {
            room_id,
            participants,
            admin,
            room_name,
            ..state
        },
        RoomAction::SetParticipants(participants) => RoomState {
            participants,
            ..state
        },
        RoomAction::SetAdmin(admin) => RoomState { admin, ..state },
        RoomAction::SetTypingUser(typing_user_id) => RoomState {
            typing_user_id,
            ..state
        },
        RoomAction::ClearRoom => RoomState {
            room_name: state.room_name,
            ..RoomState::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(id: &str) -> Participant {
        Participant {
            id: id.to_string(),
            full_name: None,
        }
    }

    fn joined_state() -> RoomState {
        RoomState {
            room_id: Some("R1".to_string()),
            room_name: "Study".to_string(),
            admin: Some(participant("U1")),
            participants: vec![participant("U1"), participant("U2")],
            typing_user_id: Some("U2".to_string()),
        }
    }

    #[test]
    fn set_room_data_replaces_identity_but_not_typing() {
        let state = joined_state();
        let next = reduce(
            state,
            RoomAction::SetRoomData {
                room_id: Some("R2".to_string()),
                participants: vec![participant("U3")],
                admin: Some(participant("U3")),
                room_name: "New Room".to_string(),
            },
        );

        assert_eq!(next.room_id.as_deref(), Some("R2"));
        assert_eq!(next.room_name, "New Room");
        assert_eq!(next.admin, Some(participant("U3")));
        assert_eq!(next.participants, vec![participant("U3")]);
        assert_eq!(next.typing_user_id.as_deref(), Some("U2"));
    }

    #[test]
    fn set_participants_touches_only_participants() {
        let state = joined_state();
        let next = reduce(
            state.clone(),
            RoomAction::SetParticipants(vec![participant("U9")]),
        );

        assert_eq!(next.participants, vec![participant("U9")]);
        assert_eq!(next.room_id, state.room_id);
        assert_eq!(next.admin, state.admin);
    }

    #[test]
    fn set_admin_preserves_everything_else() {
        let state = joined_state();
        let next = reduce(state.clone(), RoomAction::SetAdmin(Some(participant("U2"))));

        assert_eq!(next.admin, Some(participant("U2")));
        assert_eq!(next.participants, state.participants);
        assert_eq!(next.room_id, state.room_id);
        assert_eq!(next.typing_user_id, state.typing_user_id);
    }

    #[test]
    fn typing_marker_sets_and_clears() {
        let state = RoomState::default();
        let next = reduce(state, RoomAction::SetTypingUser(Some("U1".to_string())));
        assert_eq!(next.typing_user_id.as_deref(), Some("U1"));

        let next = reduce(next, RoomAction::SetTypingUser(None));
        assert_eq!(next.typing_user_id, None);
    }

    #[test]
    fn clear_room_keeps_the_name_and_resets_the_rest() {
        let next = reduce(joined_state(), RoomAction::ClearRoom);

        assert_eq!(next.room_id, None);
        assert_eq!(next.admin, None);
        assert!(next.participants.is_empty());
        assert_eq!(next.typing_user_id, None);
        assert_eq!(next.room_name, "Study");
    }

    #[test]
    fn participant_decodes_with_or_without_full_name() {
        let bare: Participant = serde_json::from_str(r#"{"id":"U1"}"#).unwrap();
        assert_eq!(bare, participant("U1"));

        let named: Participant =
            serde_json::from_str(r#"{"id":"U1","fullName":"Ada"}"#).unwrap();
        assert_eq!(named.full_name.as_deref(), Some("Ada"));
    }
}
