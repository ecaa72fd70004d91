use serde::Serialize;

pub const SKILL_MIN_VALUE: f32 = 1.0;
pub const SKILL_MAX_VALUE: f32 = 99.0;

/// Market value is always derived from the overall rating, never stored
/// independently.
pub const MARKET_VALUE_PER_OVERALL_POINT: u32 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SkillType {
    Pace,
    Shooting,
    Passing,
    Dribbling,
    Defending,
    Physical,
}

pub const SKILL_TYPES: [SkillType; 6] = [
    SkillType::Pace,
    SkillType::Shooting,
    SkillType::Passing,
    SkillType::Dribbling,
    SkillType::Defending,
    SkillType::Physical,
];

/// The six core outfield skills, each on a 1-99 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerSkills {
    pub pace: f32,
    pub shooting: f32,
    pub passing: f32,
    pub dribbling: f32,
    pub defending: f32,
    pub physical: f32,
}

impl PlayerSkills {
    pub fn new(
        pace: f32,
        shooting: f32,
        passing: f32,
        dribbling: f32,
        defending: f32,
        physical: f32,
    ) -> Self {
        let mut skills = PlayerSkills {
            pace,
            shooting,
            passing,
            dribbling,
            defending,
            physical,
        };

        skills.clamp_all();

        skills
    }

    pub fn get(&self, skill: SkillType) -> f32 {
        match skill {
            SkillType::Pace => self.pace,
            SkillType::Shooting => self.shooting,
            SkillType::Passing => self.passing,
            SkillType::Dribbling => self.dribbling,
            SkillType::Defending => self.defending,
            SkillType::Physical => self.physical,
        }
    }

    pub fn add(&mut self, skill: SkillType, delta: f32) {
        let value = match skill {
            SkillType::Pace => &mut self.pace,
            SkillType::Shooting => &mut self.shooting,
            SkillType::Passing => &mut self.passing,
            SkillType::Dribbling => &mut self.dribbling,
            SkillType::Defending => &mut self.defending,
            SkillType::Physical => &mut self.physical,
        };

        *value = (*value + delta).clamp(SKILL_MIN_VALUE, SKILL_MAX_VALUE);
    }

    pub fn average(&self) -> f32 {
        (self.pace + self.shooting + self.passing + self.dribbling + self.defending + self.physical)
            / 6.0
    }

    /// Overall rating: the rounded mean of the six skills.
    pub fn overall(&self) -> u8 {
        self.average().round() as u8
    }

    pub fn market_value(&self) -> u32 {
        self.overall() as u32 * MARKET_VALUE_PER_OVERALL_POINT
    }

    fn clamp_all(&mut self) {
        self.pace = self.pace.clamp(SKILL_MIN_VALUE, SKILL_MAX_VALUE);
        self.shooting = self.shooting.clamp(SKILL_MIN_VALUE, SKILL_MAX_VALUE);
        self.passing = self.passing.clamp(SKILL_MIN_VALUE, SKILL_MAX_VALUE);
        self.dribbling = self.dribbling.clamp(SKILL_MIN_VALUE, SKILL_MAX_VALUE);
        self.defending = self.defending.clamp(SKILL_MIN_VALUE, SKILL_MAX_VALUE);
        self.physical = self.physical.clamp(SKILL_MIN_VALUE, SKILL_MAX_VALUE);
    }
}

impl Default for PlayerSkills {
    fn default() -> Self {
        PlayerSkills::new(50.0, 50.0, 50.0, 50.0, 50.0, 50.0)
    }
}
