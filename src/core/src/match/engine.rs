use crate::club::team::tactics::{PassingStyle, PressingIntensity};
use crate::club::team::team::Team;
use crate::error::SimulationError;
use crate::r#match::events::{MatchEvent, MatchEventType};
use crate::r#match::result::{Fixture, Match};
use crate::r#match::selection::PlayerSelector;
use crate::r#match::statistics::{MatchStatistics, TeamMatchStatistics};
use crate::r#match::strength::{possession_split, team_strength};
use chrono::NaiveDate;
use log::debug;
use rand::{Rng, RngExt};
use std::collections::HashMap;

/// Home sides play above their raw strength.
pub const HOME_ADVANTAGE: f32 = 1.1;

pub const MATCH_MINUTES: u8 = 90;
pub const TICK_MINUTES: u8 = 5;

// Per-tick probabilities (5 simulated minutes per tick). Empirically tuned
// balancing values, kept in one place.
const HOME_GOAL_FACTOR: f64 = 0.03;
const AWAY_GOAL_FACTOR: f64 = 0.025;
const MISSED_SHOT_PROBABILITY: f64 = 0.05;
const YELLOW_CARD_PROBABILITY: f64 = 0.02;
const YELLOW_CARD_HIGH_PRESSING_PROBABILITY: f64 = 0.025;
const SECOND_YELLOW_ESCALATION_PROBABILITY: f64 = 0.3;
const DIRECT_RED_PROBABILITY: f64 = 0.003;
const HOME_OFFSIDE_PROBABILITY: f64 = 0.04;
const AWAY_OFFSIDE_PROBABILITY: f64 = 0.03;
const HOME_PENALTY_PROBABILITY: f64 = 0.008;
const AWAY_PENALTY_PROBABILITY: f64 = 0.006;
const PENALTY_CONVERSION_PROBABILITY: f64 = 0.8;
const HOME_CORNER_PROBABILITY: f64 = 0.08;
const AWAY_CORNER_PROBABILITY: f64 = 0.06;
const INJURY_PROBABILITY: f64 = 0.005;

const INJURY_MIN_DAYS: u16 = 3;
const INJURY_MAX_DAYS: u16 = 17;

const PASS_ACCURACY_FACTOR: f32 = 0.8;
const PASS_ACCURACY_CAP: f32 = 95.0;
const SHORT_PASSING_ACCURACY_BONUS: f32 = 5.0;
const MIXED_PASSING_ACCURACY_BONUS: f32 = 2.0;

const POST_MATCH_STAMINA_LOSS_MIN: i16 = 10;
const POST_MATCH_STAMINA_LOSS_MAX: i16 = 39;
const POST_MATCH_STAMINA_FLOOR: u8 = 20;

/// Runs one fixture to completion. Synchronous, no suspension points;
/// consumes the fixture so the same pairing cannot be replayed by accident.
/// Mutates season counters, form and fitness on both squads in place.
pub struct MatchEngine;

impl MatchEngine {
    pub fn play<R: Rng>(
        fixture: Fixture,
        date: NaiveDate,
        home: &mut Team,
        away: &mut Team,
        rng: &mut R,
    ) -> Result<Match, SimulationError> {
        let home_strength = team_strength(home)? * HOME_ADVANTAGE;
        let away_strength = team_strength(away)?;

        debug!(
            "match {}: {} ({:.1}) vs {} ({:.1})",
            fixture.id, home.name, home_strength, away.name, away_strength
        );

        // Possession is fixed by the pre-match strength ratio
        let (home_possession, away_possession) = possession_split(home_strength, away_strength);

        let mut statistics = MatchStatistics {
            home: TeamMatchStatistics {
                possession: home_possession,
                ..TeamMatchStatistics::default()
            },
            away: TeamMatchStatistics {
                possession: away_possession,
                ..TeamMatchStatistics::default()
            },
        };

        let mut events: Vec<MatchEvent> = Vec::new();
        let mut home_score: u8 = 0;
        let mut away_score: u8 = 0;
        let mut match_yellows: HashMap<u32, u8> = HashMap::new();

        let strength_total = home_strength + away_strength;
        let home_goal_probability = (home_strength / strength_total) as f64 * HOME_GOAL_FACTOR;
        let away_goal_probability = (away_strength / strength_total) as f64 * AWAY_GOAL_FACTOR;

        let mut minute = 1u8;
        while minute <= MATCH_MINUTES {
            let home_scored = rng.random_bool(home_goal_probability);
            if home_scored {
                home_score += 1;
                Self::process_goal(minute, home, &mut statistics.home, &mut events, rng)?;
            }

            let away_scored = rng.random_bool(away_goal_probability);
            if away_scored {
                away_score += 1;
                Self::process_goal(minute, away, &mut statistics.away, &mut events, rng)?;
            }

            if !home_scored && rng.random_bool(MISSED_SHOT_PROBABILITY) {
                statistics.home.shots += 1;
            }
            if !away_scored && rng.random_bool(MISSED_SHOT_PROBABILITY) {
                statistics.away.shots += 1;
            }

            Self::process_cards(
                minute,
                home,
                away,
                &mut statistics,
                &mut events,
                &mut match_yellows,
                rng,
            )?;

            Self::process_offsides(minute, home, away, &mut events, rng)?;

            if rng.random_bool(HOME_PENALTY_PROBABILITY) {
                Self::process_penalty(
                    minute,
                    home,
                    &mut home_score,
                    &mut statistics.home,
                    &mut events,
                    rng,
                )?;
            }
            if rng.random_bool(AWAY_PENALTY_PROBABILITY) {
                Self::process_penalty(
                    minute,
                    away,
                    &mut away_score,
                    &mut statistics.away,
                    &mut events,
                    rng,
                )?;
            }

            if rng.random_bool(HOME_CORNER_PROBABILITY) {
                statistics.home.corners += 1;
            }
            if rng.random_bool(AWAY_CORNER_PROBABILITY) {
                statistics.away.corners += 1;
            }

            if rng.random_bool(INJURY_PROBABILITY) {
                Self::process_injury(minute, home, away, &mut events, rng);
            }

            minute += TICK_MINUTES;
        }

        statistics.home.pass_accuracy = Self::pass_accuracy(home);
        statistics.away.pass_accuracy = Self::pass_accuracy(away);

        Self::apply_post_match_fatigue(home, rng);
        Self::apply_post_match_fatigue(away, rng);

        Ok(Match {
            id: fixture.id,
            home_team_id: home.id,
            away_team_id: away.id,
            home_team_name: home.name.clone(),
            away_team_name: away.name.clone(),
            home_score,
            away_score,
            date,
            competition: fixture.competition,
            played: true,
            events,
            statistics,
        })
    }

    fn process_goal<R: Rng>(
        minute: u8,
        team: &mut Team,
        side_statistics: &mut TeamMatchStatistics,
        events: &mut Vec<MatchEvent>,
        rng: &mut R,
    ) -> Result<(), SimulationError> {
        let scorer_id = PlayerSelector::select_attacker(team, rng)?;
        let assister_id = PlayerSelector::select_playmaker(team, scorer_id, rng);

        side_statistics.shots += 1;
        side_statistics.shots_on_target += 1;

        // Assist event precedes the goal it created, same minute
        if let Some(assister_id) = assister_id {
            let assister = team
                .players
                .get_mut(assister_id)
                .expect("selected assister must exist");
            assister.statistics.assists += 1;

            events.push(MatchEvent::with_related_player(
                minute,
                MatchEventType::Assist,
                assister_id,
                team.id,
                format!("🎯 {} with the assist", assister.full_name),
                scorer_id,
            ));
        }

        let scorer = team
            .players
            .get_mut(scorer_id)
            .expect("selected scorer must exist");
        scorer.statistics.goals += 1;
        scorer.statistics.played += 1;

        let mut goal_event = MatchEvent::new(
            minute,
            MatchEventType::Goal,
            scorer_id,
            team.id,
            format!("⚽ {} scores!", scorer.full_name),
        );
        goal_event.related_player_id = assister_id;

        events.push(goal_event);

        Ok(())
    }

    fn process_cards<R: Rng>(
        minute: u8,
        home: &mut Team,
        away: &mut Team,
        statistics: &mut MatchStatistics,
        events: &mut Vec<MatchEvent>,
        match_yellows: &mut HashMap<u32, u8>,
        rng: &mut R,
    ) -> Result<(), SimulationError> {
        // One draw compared against the pressing-adjusted threshold: the
        // card chance depends on the offender's team, which is only known
        // after selection.
        let roll: f64 = rng.random();

        if roll < YELLOW_CARD_HIGH_PRESSING_PROBABILITY {
            let (player_id, team_id) = PlayerSelector::select_any(home, away, rng)?;

            let (team, side_statistics) = if team_id == home.id {
                (&mut *home, &mut statistics.home)
            } else {
                (&mut *away, &mut statistics.away)
            };

            let threshold = if team.tactics.pressing == PressingIntensity::High {
                YELLOW_CARD_HIGH_PRESSING_PROBABILITY
            } else {
                YELLOW_CARD_PROBABILITY
            };

            if roll < threshold {
                let player = team
                    .players
                    .get_mut(player_id)
                    .expect("selected player must exist");
                player.statistics.yellow_cards += 1;
                side_statistics.fouls += 1;

                let yellows = match_yellows.entry(player_id).or_insert(0);
                *yellows += 1;

                if *yellows >= 2 && rng.random_bool(SECOND_YELLOW_ESCALATION_PROBABILITY) {
                    player.statistics.red_cards += 1;

                    events.push(MatchEvent::new(
                        minute,
                        MatchEventType::RedCard,
                        player_id,
                        team_id,
                        format!("🟥 {} is sent off after a second yellow", player.full_name),
                    ));
                } else {
                    events.push(MatchEvent::new(
                        minute,
                        MatchEventType::YellowCard,
                        player_id,
                        team_id,
                        format!("🟨 {} receives a yellow card", player.full_name),
                    ));
                }
            }
        }

        if rng.random_bool(DIRECT_RED_PROBABILITY) {
            let (player_id, team_id) = PlayerSelector::select_any(home, away, rng)?;

            let team = if team_id == home.id {
                &mut *home
            } else {
                &mut *away
            };

            let player = team
                .players
                .get_mut(player_id)
                .expect("selected player must exist");
            player.statistics.red_cards += 1;

            events.push(MatchEvent::new(
                minute,
                MatchEventType::RedCard,
                player_id,
                team_id,
                format!("🟥 {} is shown a straight red card", player.full_name),
            ));
        }

        Ok(())
    }

    fn process_offsides<R: Rng>(
        minute: u8,
        home: &Team,
        away: &Team,
        events: &mut Vec<MatchEvent>,
        rng: &mut R,
    ) -> Result<(), SimulationError> {
        // Cosmetic events: no statistics beyond the event log
        if rng.random_bool(HOME_OFFSIDE_PROBABILITY) {
            let player_id = PlayerSelector::select_attacker(home, rng)?;

            events.push(MatchEvent::new(
                minute,
                MatchEventType::Offside,
                player_id,
                home.id,
                format!("🚩 {} is caught offside", home.players[player_id].full_name),
            ));
        }

        if rng.random_bool(AWAY_OFFSIDE_PROBABILITY) {
            let player_id = PlayerSelector::select_attacker(away, rng)?;

            events.push(MatchEvent::new(
                minute,
                MatchEventType::Offside,
                player_id,
                away.id,
                format!("🚩 {} is caught offside", away.players[player_id].full_name),
            ));
        }

        Ok(())
    }

    fn process_penalty<R: Rng>(
        minute: u8,
        team: &mut Team,
        score: &mut u8,
        side_statistics: &mut TeamMatchStatistics,
        events: &mut Vec<MatchEvent>,
        rng: &mut R,
    ) -> Result<(), SimulationError> {
        let taker_id = PlayerSelector::select_attacker(team, rng)?;

        if rng.random_bool(PENALTY_CONVERSION_PROBABILITY) {
            *score += 1;
            side_statistics.shots_on_target += 1;

            let taker = team
                .players
                .get_mut(taker_id)
                .expect("selected taker must exist");
            taker.statistics.goals += 1;

            events.push(MatchEvent::new(
                minute,
                MatchEventType::Goal,
                taker_id,
                team.id,
                format!("⚽ {} converts the penalty!", taker.full_name),
            ));
        } else {
            events.push(MatchEvent::new(
                minute,
                MatchEventType::Save,
                taker_id,
                team.id,
                format!("🧤 {}'s penalty is saved", team.players[taker_id].full_name),
            ));
        }

        Ok(())
    }

    fn process_injury<R: Rng>(
        minute: u8,
        home: &mut Team,
        away: &mut Team,
        events: &mut Vec<MatchEvent>,
        rng: &mut R,
    ) {
        // Every player already injured: nothing left to hurt
        let Some((player_id, team_id)) = PlayerSelector::select_injury_victim(home, away, rng)
        else {
            return;
        };

        let team = if team_id == home.id { home } else { away };

        let days = rng.random_range(INJURY_MIN_DAYS..=INJURY_MAX_DAYS);

        let player = team
            .players
            .get_mut(player_id)
            .expect("selected victim must exist");
        player.set_injury(days);

        events.push(MatchEvent::new(
            minute,
            MatchEventType::Injury,
            player_id,
            team_id,
            format!("🤕 {} goes down injured ({} days)", player.full_name, days),
        ));
    }

    fn pass_accuracy(team: &Team) -> u8 {
        let style_bonus = match team.tactics.passing_style {
            PassingStyle::Short => SHORT_PASSING_ACCURACY_BONUS,
            PassingStyle::Mixed => MIXED_PASSING_ACCURACY_BONUS,
            PassingStyle::Long => 0.0,
        };

        (team.average_passing() * PASS_ACCURACY_FACTOR + style_bonus).min(PASS_ACCURACY_CAP) as u8
    }

    fn apply_post_match_fatigue<R: Rng>(team: &mut Team, rng: &mut R) {
        for player in &mut team.players.players {
            if player.is_injured {
                continue;
            }

            player.statistics.minutes_played += MATCH_MINUTES as u32;

            let fatigue = rng.random_range(POST_MATCH_STAMINA_LOSS_MIN..=POST_MATCH_STAMINA_LOSS_MAX);
            player.change_stamina(-fatigue, POST_MATCH_STAMINA_FLOOR);
        }
    }
}
