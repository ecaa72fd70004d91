use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TeamMentality {
    Defensive,
    Balanced,
    Attacking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PassingStyle {
    Short,
    Mixed,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PressingIntensity {
    Low,
    Medium,
    High,
}

/// Tactical shape of the starting eleven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Formation {
    F442,
    F433,
    F352,
    F4231,
    F4321,
}

impl Formation {
    pub fn display_name(&self) -> &'static str {
        match self {
            Formation::F442 => "4-4-2",
            Formation::F433 => "4-3-3",
            Formation::F352 => "3-5-2",
            Formation::F4231 => "4-2-3-1",
            Formation::F4321 => "4-3-2-1",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tactics {
    pub mentality: TeamMentality,
    /// 1-10.
    pub width: u8,
    /// 1-10.
    pub tempo: u8,
    pub passing_style: PassingStyle,
    pub pressing: PressingIntensity,
}

impl Tactics {
    pub fn new(
        mentality: TeamMentality,
        width: u8,
        tempo: u8,
        passing_style: PassingStyle,
        pressing: PressingIntensity,
    ) -> Self {
        Tactics {
            mentality,
            width: width.clamp(1, 10),
            tempo: tempo.clamp(1, 10),
            passing_style,
            pressing,
        }
    }
}

impl Default for Tactics {
    fn default() -> Self {
        Tactics::new(
            TeamMentality::Balanced,
            5,
            5,
            PassingStyle::Mixed,
            PressingIntensity::Medium,
        )
    }
}
