use crate::error::SimulationError;
use crate::r#match::result::Match;
use serde::Serialize;

const WIN_POINTS: u8 = 3;
const DRAW_POINTS: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeagueTableRow {
    pub team_id: u32,
    pub team_name: String,
    pub played: u8,
    pub won: u8,
    pub drawn: u8,
    pub lost: u8,
    pub goals_for: u16,
    pub goals_against: u16,
    pub points: u8,
}

impl LeagueTableRow {
    pub fn new(team_id: u32, team_name: String) -> Self {
        LeagueTableRow {
            team_id,
            team_name,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
        }
    }

    pub fn goal_difference(&self) -> i32 {
        self.goals_for as i32 - self.goals_against as i32
    }

    fn record_result(&mut self, scored: u8, conceded: u8) {
        self.played += 1;
        self.goals_for += scored as u16;
        self.goals_against += conceded as u16;

        if scored > conceded {
            self.won += 1;
            self.points += WIN_POINTS;
        } else if scored == conceded {
            self.drawn += 1;
            self.points += DRAW_POINTS;
        } else {
            self.lost += 1;
        }
    }
}

/// League standings, kept sorted after every update: points first,
/// goal difference as the tie-breaker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeagueTable {
    pub rows: Vec<LeagueTableRow>,
}

impl LeagueTable {
    pub fn with_teams(teams: impl IntoIterator<Item = (u32, String)>) -> Self {
        LeagueTable {
            rows: teams
                .into_iter()
                .map(|(id, name)| LeagueTableRow::new(id, name))
                .collect(),
        }
    }

    pub fn update_from_match(&mut self, result: &Match) -> Result<(), SimulationError> {
        // Validate both sides before touching either row
        for team_id in [result.home_team_id, result.away_team_id] {
            if self.row(team_id).is_none() {
                return Err(SimulationError::TeamNotFound { team_id });
            }
        }

        self.row_mut(result.home_team_id)?
            .record_result(result.home_score, result.away_score);
        self.row_mut(result.away_team_id)?
            .record_result(result.away_score, result.home_score);

        self.sort();

        Ok(())
    }

    pub fn position_of(&self, team_id: u32) -> Option<usize> {
        self.rows.iter().position(|row| row.team_id == team_id)
    }

    pub fn row(&self, team_id: u32) -> Option<&LeagueTableRow> {
        self.rows.iter().find(|row| row.team_id == team_id)
    }

    fn row_mut(&mut self, team_id: u32) -> Result<&mut LeagueTableRow, SimulationError> {
        self.rows
            .iter_mut()
            .find(|row| row.team_id == team_id)
            .ok_or(SimulationError::TeamNotFound { team_id })
    }

    fn sort(&mut self) {
        self.rows.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::statistics::MatchStatistics;
    use chrono::NaiveDate;

    fn table_for(ids: &[u32]) -> LeagueTable {
        LeagueTable::with_teams(ids.iter().map(|id| (*id, format!("Team {}", id))))
    }

    fn result(home: u32, away: u32, home_score: u8, away_score: u8) -> Match {
        Match {
            id: format!("{}-{}", home, away),
            home_team_id: home,
            away_team_id: away,
            home_team_name: format!("Team {}", home),
            away_team_name: format!("Team {}", away),
            home_score,
            away_score,
            date: NaiveDate::from_ymd_opt(2025, 9, 6).unwrap(),
            competition: String::from("League"),
            played: true,
            events: Vec::new(),
            statistics: MatchStatistics::default(),
        }
    }

    #[test]
    fn points_track_wins_and_draws() {
        let mut table = table_for(&[1, 2, 3]);

        table.update_from_match(&result(1, 2, 2, 0)).unwrap();
        table.update_from_match(&result(1, 3, 1, 1)).unwrap();
        table.update_from_match(&result(2, 3, 0, 3)).unwrap();

        for row in &table.rows {
            assert_eq!(row.points, 3 * row.won + row.drawn);
            assert_eq!(row.played, row.won + row.drawn + row.lost);
        }

        let leader = table.row(3).unwrap();
        assert_eq!(leader.points, 4);
        assert_eq!(leader.goals_for, 4);
        assert_eq!(leader.goals_against, 1);
    }

    #[test]
    fn goal_difference_breaks_point_ties() {
        let mut table = table_for(&[1, 2, 3]);

        // Both 1 and 2 win once, but 1 wins bigger
        table.update_from_match(&result(1, 3, 4, 0)).unwrap();
        table.update_from_match(&result(2, 3, 1, 0)).unwrap();

        assert_eq!(table.position_of(1), Some(0));
        assert_eq!(table.position_of(2), Some(1));
        assert_eq!(table.position_of(3), Some(2));
    }

    #[test]
    fn unknown_team_is_an_error() {
        let mut table = table_for(&[1, 2]);

        let outcome = table.update_from_match(&result(1, 99, 1, 0));

        assert_eq!(
            outcome,
            Err(SimulationError::TeamNotFound { team_id: 99 })
        );

        // A rejected result leaves the table untouched
        assert_eq!(table.row(1).unwrap().played, 0);
    }
}
