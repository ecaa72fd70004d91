use crate::club::player::development::PlayerDevelopment;
use crate::club::team::team::Team;
use itertools::Itertools;
use log::debug;

pub const CHEMISTRY_BASE: i32 = 70;
pub const CHEMISTRY_MIN_VALUE: i32 = 40;
pub const CHEMISTRY_MAX_VALUE: i32 = 100;

/// Squads drawn from few countries gel faster.
const LOW_DIVERSITY_THRESHOLD: usize = 5;
const LOW_DIVERSITY_BONUS: i32 = 15;
const MID_DIVERSITY_THRESHOLD: usize = 8;
const MID_DIVERSITY_BONUS: i32 = 10;
/// Every distinct nationality beyond the mid threshold costs chemistry.
const DIVERSITY_PENALTY_PER_COUNTRY: i32 = 2;

#[derive(Debug, Default)]
pub struct TeamDevelopmentResult {
    pub team_id: u32,
    pub recovered_players: Vec<u32>,
    pub chemistry: u8,
}

pub struct TeamDevelopment;

impl TeamDevelopment {
    /// One development cycle for the whole squad, followed by the nightly
    /// chemistry recomputation.
    pub fn develop(team: &mut Team) -> TeamDevelopmentResult {
        let mut result = TeamDevelopmentResult {
            team_id: team.id,
            ..TeamDevelopmentResult::default()
        };

        for player in &mut team.players.players {
            let player_result = PlayerDevelopment::develop(player);

            if player_result.recovered_from_injury {
                debug!("player {} recovered from injury", player_result.player_id);
                result.recovered_players.push(player_result.player_id);
            }
        }

        result.chemistry = Self::update_chemistry(team);

        result
    }

    /// Chemistry is derived from nationality diversity and squad morale;
    /// it is never written anywhere else.
    pub fn update_chemistry(team: &mut Team) -> u8 {
        let nationalities = team
            .players
            .players
            .iter()
            .map(|p| p.country_id)
            .unique()
            .count();

        let mut chemistry = CHEMISTRY_BASE;

        if nationalities <= LOW_DIVERSITY_THRESHOLD {
            chemistry += LOW_DIVERSITY_BONUS;
        } else if nationalities <= MID_DIVERSITY_THRESHOLD {
            chemistry += MID_DIVERSITY_BONUS;
        }

        chemistry += ((team.average_morale() - 50.0) / 5.0).floor() as i32;

        let diversity_penalty = nationalities.saturating_sub(MID_DIVERSITY_THRESHOLD) as i32
            * DIVERSITY_PENALTY_PER_COUNTRY;

        let chemistry = (chemistry - diversity_penalty)
            .clamp(CHEMISTRY_MIN_VALUE, CHEMISTRY_MAX_VALUE) as u8;

        team.chemistry = chemistry;

        chemistry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::player::player::Player;
    use crate::club::player::position::PlayerPositionType;
    use crate::club::player::skills::PlayerSkills;
    use crate::shared::fullname::FullName;

    fn make_player(id: u32, country_id: u32, morale: u8) -> Player {
        Player::builder()
            .id(id)
            .full_name(FullName::with_full(format!("Player{}", id), String::from("Test")))
            .age(25)
            .country_id(country_id)
            .position(PlayerPositionType::CenterMidfielder)
            .skills(PlayerSkills::new(70.0, 70.0, 70.0, 70.0, 70.0, 70.0))
            .morale(morale)
            .build()
    }

    fn make_team(players: Vec<Player>) -> Team {
        Team::builder()
            .id(1)
            .name(String::from("Test FC"))
            .players(players)
            .build()
    }

    #[test]
    fn single_nationality_squad_hits_maximum_diversity_tier() {
        // 17 players, one nationality, neutral morale
        let players = (1..=17).map(|id| make_player(id, 44, 50)).collect();
        let mut team = make_team(players);

        let chemistry = TeamDevelopment::update_chemistry(&mut team);

        assert_eq!(chemistry, (CHEMISTRY_BASE + LOW_DIVERSITY_BONUS) as u8);
        assert_eq!(team.chemistry, chemistry);
    }

    #[test]
    fn excessive_diversity_is_penalised() {
        // 12 players, 12 distinct nationalities
        let players = (1..=12).map(|id| make_player(id, id, 50)).collect();
        let mut team = make_team(players);

        let chemistry = TeamDevelopment::update_chemistry(&mut team);

        // No tier bonus, 4 countries over the threshold
        assert_eq!(chemistry, (CHEMISTRY_BASE - 4 * DIVERSITY_PENALTY_PER_COUNTRY) as u8);
    }

    #[test]
    fn morale_shifts_chemistry() {
        let players = (1..=11).map(|id| make_player(id, 44, 90)).collect();
        let mut team = make_team(players);

        let chemistry = TeamDevelopment::update_chemistry(&mut team);

        // (90 - 50) / 5 = +8 on top of base and low-diversity bonus
        assert_eq!(chemistry, (CHEMISTRY_BASE + LOW_DIVERSITY_BONUS + 8) as u8);
    }

    #[test]
    fn chemistry_is_clamped() {
        let players = (1..=11).map(|id| make_player(id, 44, 100)).collect();
        let mut team = make_team(players);

        let chemistry = TeamDevelopment::update_chemistry(&mut team);

        assert!(chemistry as i32 <= CHEMISTRY_MAX_VALUE);
    }

    #[test]
    fn develop_reports_recovered_players() {
        let mut players: Vec<Player> = (1..=11).map(|id| make_player(id, 44, 50)).collect();
        players[0].set_injury(1);
        let mut team = make_team(players);

        let result = TeamDevelopment::develop(&mut team);

        assert_eq!(result.recovered_players, vec![1]);
        assert!(!team.players[1].is_injured);
    }
}
