use crate::club::player::player::{Player, PlayerStatistics};
use crate::club::player::position::PlayerPositionType;
use crate::club::player::skills::PlayerSkills;
use crate::shared::fullname::FullName;

// Builder for Player
#[derive(Default)]
pub struct PlayerBuilder {
    id: Option<u32>,
    full_name: Option<FullName>,
    age: Option<u8>,
    country_id: Option<u32>,
    position: Option<PlayerPositionType>,
    skills: Option<PlayerSkills>,
    form: Option<f32>,
    morale: Option<u8>,
    stamina: Option<u8>,
    max_stamina: Option<u8>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn full_name(mut self, full_name: FullName) -> Self {
        self.full_name = Some(full_name);
        self
    }

    pub fn age(mut self, age: u8) -> Self {
        self.age = Some(age);
        self
    }

    pub fn country_id(mut self, country_id: u32) -> Self {
        self.country_id = Some(country_id);
        self
    }

    pub fn position(mut self, position: PlayerPositionType) -> Self {
        self.position = Some(position);
        self
    }

    pub fn skills(mut self, skills: PlayerSkills) -> Self {
        self.skills = Some(skills);
        self
    }

    pub fn form(mut self, form: f32) -> Self {
        self.form = Some(form);
        self
    }

    pub fn morale(mut self, morale: u8) -> Self {
        self.morale = Some(morale);
        self
    }

    pub fn stamina(mut self, stamina: u8) -> Self {
        self.stamina = Some(stamina);
        self
    }

    pub fn max_stamina(mut self, max_stamina: u8) -> Self {
        self.max_stamina = Some(max_stamina);
        self
    }

    pub fn build(self) -> Player {
        let max_stamina = self.max_stamina.unwrap_or(100);

        Player {
            id: self.id.expect("player id is required"),
            full_name: self.full_name.expect("player name is required"),
            age: self.age.expect("player age is required"),
            country_id: self.country_id.unwrap_or(0),
            position: self.position.expect("player position is required"),
            skills: self.skills.unwrap_or_default(),
            form: self.form.unwrap_or(5.0),
            morale: self.morale.unwrap_or(50),
            stamina: self.stamina.unwrap_or(max_stamina),
            max_stamina,
            is_injured: false,
            injury_days_remaining: 0,
            statistics: PlayerStatistics::default(),
        }
    }
}
