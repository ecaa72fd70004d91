use crate::club::player::player::Player;
use crate::club::player::skills::{SKILL_TYPES, SkillType};
use crate::club::team::team::Team;
use rand::{Rng, RngExt};

const TRAINING_SKILL_CEILING: f32 = 99.0;
const TRAINING_STAMINA_COST: i16 = 15;
const TRAINING_STAMINA_FLOOR: u8 = 30;
const TRAINING_MORALE_BONUS: i16 = 2;

pub struct TeamTraining;

impl TeamTraining {
    /// Focused drill for one player: +1..2 on the chosen skill, at the cost
    /// of stamina. Injured players sit out.
    pub fn train_player<R: Rng>(player: &mut Player, skill: SkillType, rng: &mut R) {
        if player.is_injured {
            return;
        }

        if player.skills.get(skill) < TRAINING_SKILL_CEILING {
            let improvement = rng.random_range(1..=2) as f32;
            player.skills.add(skill, improvement);
        }

        player.change_stamina(-TRAINING_STAMINA_COST, TRAINING_STAMINA_FLOOR);
        player.change_morale(TRAINING_MORALE_BONUS, 0);
    }

    /// Squad-wide session. Without a focus skill every player trains a
    /// randomly drawn one.
    pub fn session<R: Rng>(team: &mut Team, focus: Option<SkillType>, rng: &mut R) {
        for player in &mut team.players.players {
            if player.is_injured {
                continue;
            }

            let skill = match focus {
                Some(skill) => skill,
                None => SKILL_TYPES[rng.random_range(0..SKILL_TYPES.len())],
            };

            Self::train_player(player, skill, rng);
        }
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

    fn make_player(id: u32) -> Player {
        Player::builder()
            .id(id)
            .full_name(FullName::with_full(format!("Player{}", id), String::from("Test")))
            .age(24)
            .country_id(1)
            .position(PlayerPositionType::Striker)
            .skills(PlayerSkills::new(70.0, 70.0, 70.0, 70.0, 70.0, 70.0))
            .build()
    }

    #[test]
    fn training_improves_skill_and_costs_stamina() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut player = make_player(1);

        TeamTraining::train_player(&mut player, SkillType::Shooting, &mut rng);

        assert!(player.skills.shooting >= 71.0 && player.skills.shooting <= 72.0);
        assert_eq!(player.stamina, 85);
        assert_eq!(player.morale, 52);
        assert_eq!(player.market_value(), player.overall() as u32 * 100_000);
    }

    #[test]
    fn injured_players_skip_training() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut player = make_player(1);
        player.set_injury(5);

        TeamTraining::train_player(&mut player, SkillType::Shooting, &mut rng);

        assert_eq!(player.skills.shooting, 70.0);
        assert_eq!(player.stamina, 100);
    }

    #[test]
    fn stamina_never_drops_below_training_floor() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut player = make_player(1);
        player.stamina = 35;

        TeamTraining::train_player(&mut player, SkillType::Pace, &mut rng);

        assert_eq!(player.stamina, TRAINING_STAMINA_FLOOR);
    }

    #[test]
    fn focused_session_trains_every_fit_player() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut players: Vec<Player> = (1..=3).map(make_player).collect();
        players[2].set_injury(3);

        let mut team = Team::builder()
            .id(1)
            .name(String::from("Test FC"))
            .players(players)
            .build();

        TeamTraining::session(&mut team, Some(SkillType::Passing), &mut rng);

        assert!(team.players[1].skills.passing > 70.0);
        assert!(team.players[2].skills.passing > 70.0);
        assert_eq!(team.players[3].skills.passing, 70.0);
    }
}
