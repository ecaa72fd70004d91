use serde::Serialize;

/// Closed set of in-match event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchEventType {
    Goal,
    YellowCard,
    RedCard,
    Substitution,
    Injury,
    Assist,
    Save,
    Offside,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchEvent {
    /// 1-90.
    pub minute: u8,
    pub event_type: MatchEventType,
    pub player_id: u32,
    pub team_id: u32,
    pub description: String,
    /// Assist linkage and substitution pairs.
    pub related_player_id: Option<u32>,
}

impl MatchEvent {
    pub fn new(
        minute: u8,
        event_type: MatchEventType,
        player_id: u32,
        team_id: u32,
        description: String,
    ) -> Self {
        MatchEvent {
            minute,
            event_type,
            player_id,
            team_id,
            description,
            related_player_id: None,
        }
    }

    pub fn with_related_player(
        minute: u8,
        event_type: MatchEventType,
        player_id: u32,
        team_id: u32,
        description: String,
        related_player_id: u32,
    ) -> Self {
        MatchEvent {
            minute,
            event_type,
            player_id,
            team_id,
            description,
            related_player_id: Some(related_player_id),
        }
    }
}
