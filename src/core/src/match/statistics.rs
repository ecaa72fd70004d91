use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TeamMatchStatistics {
    /// Percentage; home and away always sum to 100.
    pub possession: u8,
    pub shots: u16,
    pub shots_on_target: u16,
    pub corners: u8,
    pub fouls: u8,
    /// Percentage, capped at 95.
    pub pass_accuracy: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchStatistics {
    pub home: TeamMatchStatistics,
    pub away: TeamMatchStatistics,
}
