use crate::club::player::player::Player;
use crate::club::player::position::PlayerPositionType;
use crate::club::player::skills::SkillType;

/// Growth rate per development cycle for players under 23.
pub const GROWTH_RATE_YOUNG: f32 = 0.5;
/// Growth rate per cycle at peak age (23-27).
pub const GROWTH_RATE_PEAK: f32 = 0.2;
/// Decline rate per cycle for players over 30.
pub const DECLINE_RATE_VETERAN: f32 = 0.3;

/// Pace falls away faster than the other physical skills.
pub const PACE_DECLINE_MULTIPLIER: f32 = 1.5;

pub const PACE_DECLINE_FLOOR: f32 = 40.0;
pub const PHYSICAL_DECLINE_FLOOR: f32 = 50.0;
pub const STAMINA_CAPACITY_FLOOR: u8 = 60;

/// Growth stops once a player is already near the ceiling.
const GROWTH_OVERALL_CEILING: u8 = 95;
const GROWTH_SKILL_CEILING: f32 = 95.0;
/// Decline only sets in for players still above journeyman level.
const DECLINE_OVERALL_FLOOR: u8 = 60;

const HOT_FORM_THRESHOLD: f32 = 7.0;
const COLD_FORM_THRESHOLD: f32 = 4.0;
const FORM_MORALE_SHIFT: i16 = 2;
const PRODUCTIVITY_FORM_BONUS: f32 = 0.5;

pub const STAMINA_RECOVERY_PER_CYCLE: i16 = 20;

/// Fixed morale drop when a player returns from injury.
pub const INJURY_COMEBACK_MORALE_PENALTY: i16 = 10;
pub const MORALE_SHIFT_FLOOR: u8 = 20;

#[derive(Debug, Default)]
pub struct PlayerDevelopmentResult {
    pub player_id: u32,
    pub recovered_from_injury: bool,
}

pub struct PlayerDevelopment;

impl PlayerDevelopment {
    /// One development cycle for a single player: age curve, form-driven
    /// morale, stamina recovery and injury progression.
    pub fn develop(player: &mut Player) -> PlayerDevelopmentResult {
        let mut result = PlayerDevelopmentResult {
            player_id: player.id,
            ..PlayerDevelopmentResult::default()
        };

        Self::apply_age_curve(player);
        Self::apply_form_effects(player);
        Self::recover_stamina(player);
        Self::progress_injury(player, &mut result);

        result
    }

    fn apply_age_curve(player: &mut Player) {
        match player.age {
            age if age < 23 => Self::improve(player, GROWTH_RATE_YOUNG),
            age if age > 30 => Self::decline(player, DECLINE_RATE_VETERAN),
            age if age <= 27 => Self::improve(player, GROWTH_RATE_PEAK),
            _ => {}
        }
    }

    fn improve(player: &mut Player, amount: f32) {
        if player.overall() >= GROWTH_OVERALL_CEILING {
            return;
        }

        for skill in Self::relevant_skills(player.position) {
            if player.skills.get(*skill) < GROWTH_SKILL_CEILING {
                player.skills.add(*skill, amount);
            }
        }
    }

    fn decline(player: &mut Player, amount: f32) {
        if player.overall() <= DECLINE_OVERALL_FLOOR {
            return;
        }

        let declined_pace =
            (player.skills.pace - amount * PACE_DECLINE_MULTIPLIER).max(PACE_DECLINE_FLOOR);
        player.skills.add(SkillType::Pace, declined_pace - player.skills.pace);

        let declined_physical = (player.skills.physical - amount).max(PHYSICAL_DECLINE_FLOOR);
        player
            .skills
            .add(SkillType::Physical, declined_physical - player.skills.physical);

        let declined_capacity = (player.max_stamina as f32 - amount).floor() as u8;
        player.max_stamina = declined_capacity.max(STAMINA_CAPACITY_FLOOR);
        if player.stamina > player.max_stamina {
            player.stamina = player.max_stamina;
        }
    }

    /// The 1-3 skills a position trains naturally.
    pub fn relevant_skills(position: PlayerPositionType) -> &'static [SkillType] {
        match position {
            PlayerPositionType::Goalkeeper => &[SkillType::Defending, SkillType::Physical],
            PlayerPositionType::CenterBack => &[SkillType::Defending, SkillType::Physical],
            PlayerPositionType::LeftBack | PlayerPositionType::RightBack => {
                &[SkillType::Defending, SkillType::Pace]
            }
            PlayerPositionType::DefensiveMidfielder => {
                &[SkillType::Defending, SkillType::Passing]
            }
            PlayerPositionType::CenterMidfielder => &[SkillType::Passing, SkillType::Physical],
            PlayerPositionType::AttackingMidfielder => {
                &[SkillType::Passing, SkillType::Dribbling]
            }
            PlayerPositionType::LeftMidfielder | PlayerPositionType::RightMidfielder => {
                &[SkillType::Pace, SkillType::Dribbling]
            }
            PlayerPositionType::LeftWinger | PlayerPositionType::RightWinger => {
                &[SkillType::Pace, SkillType::Dribbling, SkillType::Shooting]
            }
            PlayerPositionType::Striker => &[SkillType::Shooting, SkillType::Physical],
        }
    }

    fn apply_form_effects(player: &mut Player) {
        if player.form > HOT_FORM_THRESHOLD {
            player.change_morale(FORM_MORALE_SHIFT, MORALE_SHIFT_FLOOR);
        } else if player.form < COLD_FORM_THRESHOLD {
            player.change_morale(-FORM_MORALE_SHIFT, MORALE_SHIFT_FLOOR);
        }

        // Productive players trend upward regardless of current form
        if player.statistics.goals > 0 || player.statistics.assists > 0 {
            player.change_form(PRODUCTIVITY_FORM_BONUS);
        }
    }

    fn recover_stamina(player: &mut Player) {
        if !player.is_injured {
            player.change_stamina(STAMINA_RECOVERY_PER_CYCLE, 0);
        }
    }

    fn progress_injury(player: &mut Player, result: &mut PlayerDevelopmentResult) {
        if !player.is_injured || player.injury_days_remaining == 0 {
            return;
        }

        player.injury_days_remaining -= 1;

        if player.injury_days_remaining == 0 {
            player.is_injured = false;
            player.change_morale(-INJURY_COMEBACK_MORALE_PENALTY, MORALE_SHIFT_FLOOR);
            result.recovered_from_injury = true;
        }
    }
}
