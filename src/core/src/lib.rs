pub mod club;
pub mod error;
pub mod league;
pub mod r#match;
pub mod shared;
pub mod simulator;
pub mod utils;

pub use error::SimulationError;
pub use shared::FullName;
pub use utils::{Logging, TimeEstimation};

// Club exports
pub use club::{
    Formation, PassingStyle, Player, PlayerBuilder, PlayerCollection, PlayerDevelopment,
    PlayerDevelopmentResult, PlayerFieldPositionGroup, PlayerPositionType, PlayerSkills,
    PlayerStatistics, PressingIntensity, SkillType, Tactics, Team, TeamBuilder,
    TeamDevelopment, TeamDevelopmentResult, TeamMentality, TeamTraining,
};

// Match exports
pub use r#match::{
    Fixture, HOME_ADVANTAGE, Match, MatchEngine, MatchEvent, MatchEventType, MatchStatistics,
    PlayerSelector, TeamMatchStatistics, possession_split, select_weighted, team_strength,
};

// League exports
pub use league::{LeagueTable, LeagueTableRow};

// Simulator exports
pub use simulator::{GameSession, ScorerEntry, Season};
