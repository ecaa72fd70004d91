use crate::club::player::player::{Player, PlayerCollection};
use crate::club::team::tactics::{Formation, Tactics};
use crate::club::team::team::Team;

// Builder for Team
#[derive(Default)]
pub struct TeamBuilder {
    id: Option<u32>,
    name: Option<String>,
    players: Option<Vec<Player>>,
    formation: Option<Formation>,
    tactics: Option<Tactics>,
    budget: Option<u32>,
    reputation: Option<u16>,
    chemistry: Option<u8>,
}

impl TeamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn players(mut self, players: Vec<Player>) -> Self {
        self.players = Some(players);
        self
    }

    pub fn formation(mut self, formation: Formation) -> Self {
        self.formation = Some(formation);
        self
    }

    pub fn tactics(mut self, tactics: Tactics) -> Self {
        self.tactics = Some(tactics);
        self
    }

    pub fn budget(mut self, budget: u32) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn reputation(mut self, reputation: u16) -> Self {
        self.reputation = Some(reputation);
        self
    }

    pub fn chemistry(mut self, chemistry: u8) -> Self {
        self.chemistry = Some(chemistry);
        self
    }

    pub fn build(self) -> Team {
        Team {
            id: self.id.expect("team id is required"),
            name: self.name.expect("team name is required"),
            players: PlayerCollection::new(self.players.unwrap_or_default()),
            formation: self.formation.unwrap_or(Formation::F442),
            tactics: self.tactics.unwrap_or_default(),
            budget: self.budget.unwrap_or(0),
            reputation: self.reputation.unwrap_or(1000),
            chemistry: self.chemistry.unwrap_or(70),
        }
    }
}
