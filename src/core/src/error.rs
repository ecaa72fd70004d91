use thiserror::Error;

/// Fatal contract violations surfaced by the simulation core.
///
/// Degenerate-but-valid situations (no eligible assist provider, all
/// selection weights zero) are recovered locally and never reach here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("team {team_id} has an empty squad")]
    EmptySquad { team_id: u32 },

    #[error("no league table row for team {team_id}")]
    TeamNotFound { team_id: u32 },

    #[error("team {team_id} has no selectable player")]
    NoSelectablePlayer { team_id: u32 },
}
