use crate::club::player::builder::PlayerBuilder;
use crate::club::player::position::PlayerPositionType;
use crate::club::player::skills::PlayerSkills;
use crate::shared::fullname::FullName;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};
use std::ops::Index;

pub const FORM_MIN_VALUE: f32 = 1.0;
pub const FORM_MAX_VALUE: f32 = 10.0;

pub const MORALE_MIN_VALUE: u8 = 1;
pub const MORALE_MAX_VALUE: u8 = 100;

#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub id: u32,
    pub full_name: FullName,
    pub age: u8,
    pub country_id: u32,
    pub position: PlayerPositionType,

    pub skills: PlayerSkills,

    /// Short-term performance modifier, 1-10.
    pub form: f32,
    /// 1-100.
    pub morale: u8,
    /// Current stamina, 0-100, recovered between matches toward `max_stamina`.
    pub stamina: u8,
    pub max_stamina: u8,

    pub is_injured: bool,
    pub injury_days_remaining: u16,

    pub statistics: PlayerStatistics,
}

impl Player {
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    #[inline]
    pub fn overall(&self) -> u8 {
        self.skills.overall()
    }

    #[inline]
    pub fn market_value(&self) -> u32 {
        self.skills.market_value()
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        !self.is_injured
    }

    pub fn change_form(&mut self, delta: f32) {
        self.form = (self.form + delta).clamp(FORM_MIN_VALUE, FORM_MAX_VALUE);
    }

    /// Morale change with an explicit floor. Negative events never push a
    /// player below the stated floor, positive ones cap at 100.
    pub fn change_morale(&mut self, delta: i16, floor: u8) {
        let changed = (self.morale as i16 + delta).clamp(floor as i16, MORALE_MAX_VALUE as i16);
        self.morale = changed as u8;
    }

    pub fn change_stamina(&mut self, delta: i16, floor: u8) {
        // Capacity wins over the floor for players whose max_stamina sits
        // below it, so the bounds never invert
        let cap = self.max_stamina as i16;
        let changed = (self.stamina as i16 + delta).max(floor as i16).min(cap);
        self.stamina = changed as u8;
    }

    pub fn set_injury(&mut self, days: u16) {
        self.is_injured = true;
        self.injury_days_remaining = days;
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} ({}, {})",
            self.full_name,
            self.position.get_short_name(),
            self.overall()
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlayerStatistics {
    pub played: u16,
    pub goals: u16,
    pub assists: u16,
    pub yellow_cards: u8,
    pub red_cards: u8,
    pub minutes_played: u32,
}

impl PlayerStatistics {
    pub fn reset(&mut self) {
        *self = PlayerStatistics::default();
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerCollection {
    pub players: Vec<Player>,
}

impl PlayerCollection {
    pub fn new(players: Vec<Player>) -> Self {
        PlayerCollection { players }
    }

    pub fn add(&mut self, player: Player) {
        debug_assert!(
            !self.contains(player.id),
            "duplicate player id in squad: {}",
            player.id
        );

        self.players.push(player);
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn contains(&self, player_id: u32) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    pub fn get(&self, player_id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn get_mut(&mut self, player_id: u32) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    pub fn players(&self) -> Vec<&Player> {
        self.players.iter().collect()
    }

    pub fn available_players(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.is_available()).collect()
    }
}

impl Index<u32> for PlayerCollection {
    type Output = Player;

    fn index(&self, player_id: u32) -> &Self::Output {
        self.get(player_id)
            .unwrap_or_else(|| panic!("no player with id = {}", player_id))
    }
}
