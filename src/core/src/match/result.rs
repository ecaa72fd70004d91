use crate::r#match::events::MatchEvent;
use crate::r#match::statistics::MatchStatistics;
use chrono::NaiveDate;
use serde::Serialize;

/// A scheduled, not-yet-simulated pairing. Consumed by the engine, which
/// makes accidental re-simulation of the same fixture impossible.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fixture {
    pub id: String,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub competition: String,
}

impl Fixture {
    pub fn new(id: String, home_team_id: u32, away_team_id: u32, competition: String) -> Self {
        Fixture {
            id,
            home_team_id,
            away_team_id,
            competition,
        }
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}

/// A fully resolved match. Read-only once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub id: String,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub home_team_name: String,
    pub away_team_name: String,
    pub home_score: u8,
    pub away_score: u8,
    pub date: NaiveDate,
    pub competition: String,
    pub played: bool,
    pub events: Vec<MatchEvent>,
    pub statistics: MatchStatistics,
}

impl Match {
    pub fn involves(&self, team_id: u32) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    pub fn is_draw(&self) -> bool {
        self.home_score == self.away_score
    }

    pub fn winner_id(&self) -> Option<u32> {
        if self.home_score > self.away_score {
            Some(self.home_team_id)
        } else if self.away_score > self.home_score {
            Some(self.away_team_id)
        } else {
            None
        }
    }
}
