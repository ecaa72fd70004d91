use crate::club::player::player::Player;
use crate::club::team::development::TeamDevelopment;
use crate::club::team::team::Team;
use crate::error::SimulationError;
use crate::league::table::LeagueTable;
use crate::r#match::engine::MatchEngine;
use crate::r#match::result::{Fixture, Match};
use crate::utils::Logging;
use chrono::{Datelike, Days, NaiveDate};
use itertools::Itertools;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

/// Development runs every second simulated week.
const DEVELOPMENT_CADENCE_WEEKS: u16 = 2;

const DAYS_PER_WEEK: u64 = 7;

#[derive(Debug, Clone)]
pub struct Season {
    pub year: i32,
    pub fixtures: Vec<Fixture>,
    pub matches: Vec<Match>,
    pub table: LeagueTable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScorerEntry {
    pub player_id: u32,
    pub player_name: String,
    pub team_name: String,
    pub count: u32,
}

/// Owns every `Team` and `Player` record for one running season. All
/// subsystems borrow into this store; nothing keeps a divergent copy.
/// Construct one per season (and per test) with an explicit seed, no
/// process-wide state is involved.
pub struct GameSession {
    pub teams: Vec<Team>,
    pub season: Season,
    pub week: u16,
    pub date: NaiveDate,
    rng: StdRng,
}

impl GameSession {
    pub fn new(teams: Vec<Team>, start_date: NaiveDate, seed: u64) -> Self {
        let table = LeagueTable::with_teams(teams.iter().map(|t| (t.id, t.name.clone())));
        let fixtures = Self::generate_fixtures(&teams, start_date.year());

        info!(
            "🏟️ season {}: {} teams, {} fixtures",
            start_date.year(),
            teams.len(),
            fixtures.len()
        );

        GameSession {
            teams,
            season: Season {
                year: start_date.year(),
                fixtures,
                matches: Vec::new(),
                table,
            },
            week: 1,
            date: start_date,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    // Double round-robin: every ordered pair hosts once
    fn generate_fixtures(teams: &[Team], year: i32) -> Vec<Fixture> {
        let mut fixtures = Vec::with_capacity(teams.len() * teams.len().saturating_sub(1));

        let mut sequence = 0u32;
        for (i, home) in teams.iter().enumerate() {
            for (j, away) in teams.iter().enumerate() {
                if i == j {
                    continue;
                }

                sequence += 1;
                fixtures.push(Fixture::new(
                    format!("{}-{:04}", year, sequence),
                    home.id,
                    away.id,
                    String::from("League"),
                ));
            }
        }

        fixtures
    }

    pub fn team(&self, team_id: u32) -> Result<&Team, SimulationError> {
        self.teams
            .iter()
            .find(|t| t.id == team_id)
            .ok_or(SimulationError::TeamNotFound { team_id })
    }

    pub fn team_mut(&mut self, team_id: u32) -> Result<&mut Team, SimulationError> {
        self.teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or(SimulationError::TeamNotFound { team_id })
    }

    pub fn table(&self) -> &LeagueTable {
        &self.season.table
    }

    pub fn upcoming_fixtures(&self, team_id: u32, limit: usize) -> Vec<&Fixture> {
        self.season
            .fixtures
            .iter()
            .filter(|f| f.involves(team_id))
            .take(limit)
            .collect()
    }

    pub fn recent_matches(&self, team_id: u32, limit: usize) -> Vec<&Match> {
        self.season
            .matches
            .iter()
            .rev()
            .filter(|m| m.involves(team_id))
            .take(limit)
            .collect()
    }

    pub fn top_scorers(&self, limit: usize) -> Vec<ScorerEntry> {
        self.ranked_players(limit, |p| p.statistics.goals as u32)
    }

    pub fn top_assisters(&self, limit: usize) -> Vec<ScorerEntry> {
        self.ranked_players(limit, |p| p.statistics.assists as u32)
    }

    fn ranked_players(
        &self,
        limit: usize,
        count_fn: impl Fn(&Player) -> u32,
    ) -> Vec<ScorerEntry> {
        let count_fn = &count_fn;

        self.teams
            .iter()
            .flat_map(move |team| {
                team.players.players.iter().map(move |player| ScorerEntry {
                    player_id: player.id,
                    player_name: player.full_name.to_string(),
                    team_name: team.name.clone(),
                    count: count_fn(player),
                })
            })
            .filter(|entry| entry.count > 0)
            .sorted_by_key(|entry| std::cmp::Reverse(entry.count))
            .take(limit)
            .collect()
    }

    /// Plays the next unplayed fixture involving `team_id`, if any.
    /// Does not advance the calendar; week progression belongs to
    /// [`GameSession::play_week`].
    pub fn simulate_next_match(
        &mut self,
        team_id: u32,
    ) -> Result<Option<Match>, SimulationError> {
        let Some(position) = self
            .season
            .fixtures
            .iter()
            .position(|f| f.involves(team_id))
        else {
            return Ok(None);
        };

        let fixture = self.season.fixtures.remove(position);
        let result = self.play_fixture(fixture)?;

        Ok(Some(result))
    }

    /// Plays one round of fixtures, advances the calendar by a week and
    /// runs player development on the bi-weekly cadence.
    pub fn play_week(&mut self) -> Result<Vec<Match>, SimulationError> {
        let round_size = (self.teams.len() / 2).max(1);
        let mut results = Vec::with_capacity(round_size);

        for _ in 0..round_size {
            if self.season.fixtures.is_empty() {
                break;
            }

            let fixture = self.season.fixtures.remove(0);
            results.push(self.play_fixture(fixture)?);
        }

        self.week += 1;
        self.date = self
            .date
            .checked_add_days(Days::new(DAYS_PER_WEEK))
            .unwrap_or(self.date);

        if self.week % DEVELOPMENT_CADENCE_WEEKS == 0 {
            self.develop_teams();
        }

        Ok(results)
    }

    pub fn is_season_over(&self) -> bool {
        self.season.fixtures.is_empty()
    }

    pub fn reset_season_statistics(&mut self) {
        for team in &mut self.teams {
            team.reset_season_statistics();
        }
    }

    fn play_fixture(&mut self, fixture: Fixture) -> Result<Match, SimulationError> {
        let home_index = self.team_index(fixture.home_team_id)?;
        let away_index = self.team_index(fixture.away_team_id)?;

        let date = self.date;
        let rng = &mut self.rng;
        let (home, away) = pair_mut(&mut self.teams, home_index, away_index);

        let message = format!("play match: {} vs {}", home.name, away.name);

        let result = Logging::estimate_result(
            || MatchEngine::play(fixture, date, home, away, rng),
            &message,
        )?;

        info!(
            "⚽ {} {} - {} {}",
            result.home_team_name, result.home_score, result.away_score, result.away_team_name
        );

        self.season.table.update_from_match(&result)?;
        self.season.matches.push(result.clone());

        Ok(result)
    }

    // Development is deterministic per player, so the parallel sweep
    // keeps seed-for-seed reproducibility.
    fn develop_teams(&mut self) {
        let results = Logging::estimate_result(
            || {
                self.teams
                    .par_iter_mut()
                    .map(TeamDevelopment::develop)
                    .collect::<Vec<_>>()
            },
            "develop players",
        );

        let recovered: usize = results.iter().map(|r| r.recovered_players.len()).sum();
        debug!(
            "week {}: developed {} teams, {} players recovered",
            self.week,
            results.len(),
            recovered
        );
    }

    fn team_index(&self, team_id: u32) -> Result<usize, SimulationError> {
        self.teams
            .iter()
            .position(|t| t.id == team_id)
            .ok_or(SimulationError::TeamNotFound { team_id })
    }
}

fn pair_mut(teams: &mut [Team], first: usize, second: usize) -> (&mut Team, &mut Team) {
    debug_assert_ne!(first, second, "a team cannot play itself");

    if first < second {
        let (left, right) = teams.split_at_mut(second);
        (&mut left[first], &mut right[0])
    } else {
        let (left, right) = teams.split_at_mut(first);
        (&mut right[0], &mut left[second])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::player::position::PlayerPositionType;
    use crate::club::player::skills::PlayerSkills;
    use crate::shared::fullname::FullName;

    fn make_team(id: u32, skill: f32) -> Team {
        let positions = [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::CenterBack,
            PlayerPositionType::LeftBack,
            PlayerPositionType::RightBack,
            PlayerPositionType::CenterMidfielder,
            PlayerPositionType::AttackingMidfielder,
            PlayerPositionType::LeftWinger,
            PlayerPositionType::Striker,
        ];

        let players = positions
            .iter()
            .enumerate()
            .map(|(idx, position)| {
                Player::builder()
                    .id(id * 100 + idx as u32)
                    .full_name(FullName::with_full(
                        format!("P{}", idx),
                        format!("T{}", id),
                    ))
                    .age(24)
                    .country_id(id)
                    .position(*position)
                    .skills(PlayerSkills::new(skill, skill, skill, skill, skill, skill))
                    .build()
            })
            .collect();

        Team::builder()
            .id(id)
            .name(format!("Team {}", id))
            .players(players)
            .build()
    }

    fn make_session(seed: u64) -> GameSession {
        let teams = vec![
            make_team(1, 75.0),
            make_team(2, 70.0),
            make_team(3, 65.0),
            make_team(4, 60.0),
        ];

        GameSession::new(teams, NaiveDate::from_ymd_opt(2025, 8, 9).unwrap(), seed)
    }

    #[test]
    fn double_round_robin_schedule() {
        let session = make_session(1);

        // 4 teams, every ordered pair once
        assert_eq!(session.season.fixtures.len(), 12);

        for team_id in 1..=4u32 {
            let involving = session
                .season
                .fixtures
                .iter()
                .filter(|f| f.involves(team_id))
                .count();
            assert_eq!(involving, 6);
        }
    }

    #[test]
    fn play_week_consumes_a_round_and_advances_the_calendar() {
        let mut session = make_session(7);

        let results = session.play_week().unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(session.season.fixtures.len(), 10);
        assert_eq!(session.season.matches.len(), 2);
        assert_eq!(session.week, 2);
        assert_eq!(session.date, NaiveDate::from_ymd_opt(2025, 8, 16).unwrap());
    }

    #[test]
    fn full_season_keeps_the_table_consistent() {
        let mut session = make_session(7);

        while !session.is_season_over() {
            session.play_week().unwrap();
        }

        let table = session.table();
        assert_eq!(table.rows.len(), 4);

        let total_played: u32 = table.rows.iter().map(|r| r.played as u32).sum();
        assert_eq!(total_played, 24);

        for row in &table.rows {
            assert_eq!(row.played, 6);
            assert_eq!(row.points, 3 * row.won + row.drawn);
        }

        let total_for: u32 = table.rows.iter().map(|r| r.goals_for as u32).sum();
        let total_against: u32 = table.rows.iter().map(|r| r.goals_against as u32).sum();
        assert_eq!(total_for, total_against);
    }

    #[test]
    fn same_seed_reproduces_the_season() {
        let mut first = make_session(99);
        let mut second = make_session(99);

        while !first.is_season_over() {
            first.play_week().unwrap();
            second.play_week().unwrap();
        }

        assert_eq!(first.season.matches, second.season.matches);
        assert_eq!(first.season.table, second.season.table);
    }

    #[test]
    fn simulate_next_match_plays_only_the_requested_team() {
        let mut session = make_session(3);

        let result = session.simulate_next_match(3).unwrap().unwrap();
        assert!(result.involves(3));
        assert_eq!(session.season.matches.len(), 1);

        // Unknown team simply has no fixture left
        assert_eq!(session.simulate_next_match(42).unwrap(), None);
    }

    #[test]
    fn top_scorers_ranked_by_goals() {
        let mut session = make_session(5);

        while !session.is_season_over() {
            session.play_week().unwrap();
        }

        let scorers = session.top_scorers(5);

        for pair in scorers.windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }

        for entry in &scorers {
            assert!(entry.count > 0);
        }
    }

    #[test]
    fn season_reset_clears_player_counters() {
        let mut session = make_session(11);

        session.play_week().unwrap();
        session.reset_season_statistics();

        for team in &session.teams {
            for player in &team.players.players {
                assert_eq!(player.statistics.goals, 0);
                assert_eq!(player.statistics.minutes_played, 0);
            }
        }
    }
}
