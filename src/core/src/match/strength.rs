use crate::club::team::team::Team;
use crate::error::SimulationError;

/// Chemistry gives at most a 10% boost at the 100 ceiling.
const CHEMISTRY_BONUS_DIVISOR: f32 = 1000.0;

/// Scalar team strength: squad-wide mean of `overall × form/10`, scaled by
/// the chemistry bonus. Deliberately averages the full squad rather than a
/// starting eleven.
pub fn team_strength(team: &Team) -> Result<f32, SimulationError> {
    if team.players.is_empty() {
        return Err(SimulationError::EmptySquad { team_id: team.id });
    }

    let total: f32 = team
        .players
        .players
        .iter()
        .map(|p| p.overall() as f32 * (p.form / 10.0))
        .sum();

    let base = total / team.players.len() as f32;
    let chemistry_bonus = 1.0 + team.chemistry as f32 / CHEMISTRY_BONUS_DIVISOR;

    Ok(base * chemistry_bonus)
}

/// Possession percentages from the pre-match strength ratio; the two sides
/// always sum to 100.
pub fn possession_split(home_strength: f32, away_strength: f32) -> (u8, u8) {
    let home = (home_strength / (home_strength + away_strength) * 100.0).round() as u8;

    (home, 100 - home)
}
