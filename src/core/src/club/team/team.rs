use crate::club::player::player::PlayerCollection;
use crate::club::team::builder::TeamBuilder;
use crate::club::team::tactics::{Formation, Tactics};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Team {
    pub id: u32,
    pub name: String,

    pub players: PlayerCollection,

    pub formation: Formation,
    pub tactics: Tactics,

    pub budget: u32,
    pub reputation: u16,

    /// Derived 0-100 team cohesion score. Recomputed only by the
    /// development cycle, never written by match simulation.
    pub chemistry: u8,
}

impl Team {
    pub fn builder() -> TeamBuilder {
        TeamBuilder::new()
    }

    pub fn average_morale(&self) -> f32 {
        if self.players.is_empty() {
            return 0.0;
        }

        let total: u32 = self.players.players.iter().map(|p| p.morale as u32).sum();

        total as f32 / self.players.len() as f32
    }

    pub fn average_passing(&self) -> f32 {
        if self.players.is_empty() {
            return 0.0;
        }

        let total: f32 = self.players.players.iter().map(|p| p.skills.passing).sum();

        total / self.players.len() as f32
    }

    pub fn reset_season_statistics(&mut self) {
        for player in &mut self.players.players {
            player.statistics.reset();
        }
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
