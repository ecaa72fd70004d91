use crate::club::player::player::Player;
use crate::club::team::team::Team;
use crate::error::SimulationError;
use rand::{Rng, RngExt};

/// Weighted-random choice: probability proportional to the candidate's
/// non-negative weight. An all-zero weight distribution degenerates to
/// uniform selection. Returns `None` only for an empty candidate list.
pub fn select_weighted<'c, T, R, F>(
    candidates: &[&'c T],
    weight_fn: F,
    rng: &mut R,
) -> Option<&'c T>
where
    R: Rng,
    F: Fn(&T) -> f32,
{
    if candidates.is_empty() {
        return None;
    }

    let total: f32 = candidates.iter().map(|c| weight_fn(c).max(0.0)).sum();

    if total <= 0.0 {
        return Some(candidates[rng.random_range(0..candidates.len())]);
    }

    let mut remainder = rng.random_range(0.0..total);

    for candidate in candidates {
        remainder -= weight_fn(candidate).max(0.0);
        if remainder <= 0.0 {
            return Some(candidate);
        }
    }

    // Floating point summation can leave a sliver of remainder
    candidates.last().copied()
}

/// Actor selection policies used by the match engine. All selectors return
/// player ids so the engine can re-borrow squads mutably afterwards.
pub struct PlayerSelector;

impl PlayerSelector {
    /// Scorer selection: attacking positions weighted by shooting form,
    /// falling back to any fit player, then to the full squad.
    pub fn select_attacker<R: Rng>(team: &Team, rng: &mut R) -> Result<u32, SimulationError> {
        if team.players.is_empty() {
            return Err(SimulationError::EmptySquad { team_id: team.id });
        }

        let attackers: Vec<&Player> = team
            .players
            .players
            .iter()
            .filter(|p| p.is_available() && p.position.is_attacking())
            .collect();

        let pool = if !attackers.is_empty() {
            attackers
        } else {
            let available = team.players.available_players();
            if !available.is_empty() {
                available
            } else {
                team.players.players()
            }
        };

        select_weighted(&pool, |p| p.skills.shooting * (p.form / 10.0), rng)
            .map(|p| p.id)
            .ok_or(SimulationError::NoSelectablePlayer { team_id: team.id })
    }

    /// Assist selection: fit midfielders weighted by passing. Assists are
    /// optional, so an empty pool is not an error.
    pub fn select_playmaker<R: Rng>(team: &Team, exclude_id: u32, rng: &mut R) -> Option<u32> {
        let midfielders: Vec<&Player> = team
            .players
            .players
            .iter()
            .filter(|p| p.is_available() && p.position.is_playmaking() && p.id != exclude_id)
            .collect();

        select_weighted(&midfielders, |p| p.skills.passing, rng).map(|p| p.id)
    }

    /// Uniform pick over both squads for cards: fit players first, the
    /// unfiltered pool only when everyone is injured.
    pub fn select_any<R: Rng>(
        home: &Team,
        away: &Team,
        rng: &mut R,
    ) -> Result<(u32, u32), SimulationError> {
        let mut pool: Vec<(u32, u32)> = Self::combined_pool(home, away, true);

        if pool.is_empty() {
            pool = Self::combined_pool(home, away, false);
        }

        if pool.is_empty() {
            return Err(SimulationError::EmptySquad { team_id: home.id });
        }

        Ok(pool[rng.random_range(0..pool.len())])
    }

    /// Uniform pick over the combined fit pool for injuries. `None` when
    /// every player is already injured: no further injuries can occur.
    pub fn select_injury_victim<R: Rng>(
        home: &Team,
        away: &Team,
        rng: &mut R,
    ) -> Option<(u32, u32)> {
        let pool = Self::combined_pool(home, away, true);

        if pool.is_empty() {
            return None;
        }

        Some(pool[rng.random_range(0..pool.len())])
    }

    fn combined_pool(home: &Team, away: &Team, fit_only: bool) -> Vec<(u32, u32)> {
        home.players
            .players
            .iter()
            .map(|p| (p, home.id))
            .chain(away.players.players.iter().map(|p| (p, away.id)))
            .filter(|(p, _)| !fit_only || p.is_available())
            .map(|(p, team_id)| (p.id, team_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::player::position::PlayerPositionType;
    use crate::club::player::skills::PlayerSkills;
    use crate::shared::fullname::FullName;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn make_player(id: u32, position: PlayerPositionType, shooting: f32) -> Player {
        Player::builder()
            .id(id)
            .full_name(FullName::with_full(format!("Player{}", id), String::from("Test")))
            .age(25)
            .country_id(1)
            .position(position)
            .skills(PlayerSkills::new(70.0, shooting, 70.0, 70.0, 70.0, 70.0))
            .build()
    }

    fn make_team(id: u32, players: Vec<Player>) -> Team {
        Team::builder()
            .id(id)
            .name(format!("Team {}", id))
            .players(players)
            .build()
    }

    #[test]
    fn weighted_selection_converges_to_expected_proportions() {
        let mut rng = StdRng::seed_from_u64(1234);

        let items = [1u32, 2, 3];
        let candidates: Vec<&u32> = items.iter().collect();

        const DRAWS: usize = 60_000;

        let mut counts = [0usize; 3];
        for _ in 0..DRAWS {
            let picked = select_weighted(&candidates, |v| *v as f32, &mut rng).unwrap();
            counts[(*picked - 1) as usize] += 1;
        }

        // Expected proportions 1/6, 2/6, 3/6 within 2% absolute tolerance
        for (value, count) in items.iter().zip(counts.iter()) {
            let expected = *value as f64 / 6.0;
            let observed = *count as f64 / DRAWS as f64;
            assert!(
                (observed - expected).abs() < 0.02,
                "value {}: observed {:.3}, expected {:.3}",
                value,
                observed,
                expected
            );
        }
    }

    #[test]
    fn zero_weights_degenerate_to_uniform() {
        let mut rng = StdRng::seed_from_u64(99);

        let items = [10u32, 20, 30];
        let candidates: Vec<&u32> = items.iter().collect();

        let mut counts = [0usize; 3];
        for _ in 0..30_000 {
            let picked = select_weighted(&candidates, |_| 0.0, &mut rng).unwrap();
            counts[(*picked / 10 - 1) as usize] += 1;
        }

        for count in counts {
            let observed = count as f64 / 30_000.0;
            assert!((observed - 1.0 / 3.0).abs() < 0.02);
        }
    }

    #[test]
    fn empty_candidates_yield_none() {
        let mut rng = StdRng::seed_from_u64(5);
        let candidates: Vec<&u32> = Vec::new();

        assert!(select_weighted(&candidates, |v| *v as f32, &mut rng).is_none());
    }

    #[test]
    fn attacker_selection_prefers_attacking_positions() {
        let mut rng = StdRng::seed_from_u64(42);

        let team = make_team(
            1,
            vec![
                make_player(1, PlayerPositionType::Goalkeeper, 20.0),
                make_player(2, PlayerPositionType::CenterBack, 30.0),
                make_player(3, PlayerPositionType::Striker, 90.0),
            ],
        );

        for _ in 0..50 {
            let selected = PlayerSelector::select_attacker(&team, &mut rng).unwrap();
            assert_eq!(selected, 3);
        }
    }

    #[test]
    fn attacker_selection_falls_back_when_no_attacker_is_fit() {
        let mut rng = StdRng::seed_from_u64(42);

        let mut striker = make_player(3, PlayerPositionType::Striker, 90.0);
        striker.set_injury(10);

        let team = make_team(
            1,
            vec![
                make_player(1, PlayerPositionType::Goalkeeper, 20.0),
                make_player(2, PlayerPositionType::CenterBack, 30.0),
                striker,
            ],
        );

        for _ in 0..50 {
            let selected = PlayerSelector::select_attacker(&team, &mut rng).unwrap();
            assert_ne!(selected, 3);
        }
    }

    #[test]
    fn empty_squad_is_a_loud_error() {
        let mut rng = StdRng::seed_from_u64(42);
        let team = make_team(1, Vec::new());

        assert_eq!(
            PlayerSelector::select_attacker(&team, &mut rng),
            Err(SimulationError::EmptySquad { team_id: 1 })
        );
    }

    #[test]
    fn playmaker_selection_excludes_scorer_and_may_be_empty() {
        let mut rng = StdRng::seed_from_u64(42);

        let team = make_team(
            1,
            vec![
                make_player(1, PlayerPositionType::CenterMidfielder, 50.0),
                make_player(2, PlayerPositionType::Striker, 90.0),
            ],
        );

        let playmaker = PlayerSelector::select_playmaker(&team, 1, &mut rng);
        assert_eq!(playmaker, None);

        let playmaker = PlayerSelector::select_playmaker(&team, 2, &mut rng);
        assert_eq!(playmaker, Some(1));
    }
}
