pub mod player;
pub mod team;

// Player exports (except conflicting modules)
pub use player::{
    FORM_MAX_VALUE, FORM_MIN_VALUE, MARKET_VALUE_PER_OVERALL_POINT, MORALE_MAX_VALUE,
    MORALE_MIN_VALUE, Player, PlayerBuilder, PlayerCollection, PlayerDevelopment,
    PlayerDevelopmentResult, PlayerFieldPositionGroup, PlayerPositionType, PlayerSkills,
    PlayerStatistics, SKILL_MAX_VALUE, SKILL_MIN_VALUE, SKILL_TYPES, SkillType,
};

// Team exports (except conflicting modules)
pub use team::{
    CHEMISTRY_BASE, CHEMISTRY_MAX_VALUE, CHEMISTRY_MIN_VALUE, Formation, PassingStyle,
    PressingIntensity, Tactics, Team, TeamBuilder, TeamDevelopment, TeamDevelopmentResult,
    TeamMentality, TeamTraining,
};
