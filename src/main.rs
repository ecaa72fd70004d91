use std::env;

use chrono::NaiveDate;
use env_logger::Env;
use fm_core::club::player::player::Player;
use fm_core::club::player::position::PlayerPositionType;
use fm_core::club::player::skills::PlayerSkills;
use fm_core::club::team::tactics::{
    Formation, PassingStyle, PressingIntensity, Tactics, TeamMentality,
};
use fm_core::club::team::team::Team;
use fm_core::shared::fullname::FullName;
use fm_core::simulator::GameSession;
use fm_core::utils::TimeEstimation;
use log::info;

const DEFAULT_SEED: u64 = 20250809;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let seed = env::var("SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);

    let start_date = NaiveDate::from_ymd_opt(2025, 8, 9).expect("valid season start date");

    let mut session = GameSession::new(generate_teams(), start_date, seed);

    let (_, estimated) = TimeEstimation::estimate(|| {
        while !session.is_season_over() {
            session.play_week().expect("league roster is fixed at setup");
        }
    });

    info!("season finished: {} ms", estimated);

    print_table(&session);
    print_scorers(&session);

    Ok(())
}

fn print_table(session: &GameSession) {
    println!();
    println!(
        "{:<4}{:<22}{:>4}{:>4}{:>4}{:>4}{:>6}{:>5}",
        "#", "Team", "P", "W", "D", "L", "GD", "Pts"
    );

    for (position, row) in session.table().rows.iter().enumerate() {
        println!(
            "{:<4}{:<22}{:>4}{:>4}{:>4}{:>4}{:>6}{:>5}",
            position + 1,
            row.team_name,
            row.played,
            row.won,
            row.drawn,
            row.lost,
            row.goal_difference(),
            row.points
        );
    }
}

fn print_scorers(session: &GameSession) {
    println!();
    println!("Top scorers:");

    for entry in session.top_scorers(10) {
        println!(
            "  {:<24}{:<22}{:>3}",
            entry.player_name, entry.team_name, entry.count
        );
    }
}

fn generate_teams() -> Vec<Team> {
    let clubs = [
        ("Crimson Athletic", TeamMentality::Attacking, PassingStyle::Short, PressingIntensity::High),
        ("Northbridge United", TeamMentality::Balanced, PassingStyle::Mixed, PressingIntensity::Medium),
        ("Harbour City", TeamMentality::Balanced, PassingStyle::Short, PressingIntensity::Medium),
        ("Oakfield Rovers", TeamMentality::Defensive, PassingStyle::Long, PressingIntensity::Low),
        ("Saint Aurelio", TeamMentality::Attacking, PassingStyle::Mixed, PressingIntensity::High),
        ("Westgate Town", TeamMentality::Balanced, PassingStyle::Mixed, PressingIntensity::Medium),
        ("Riverside Albion", TeamMentality::Defensive, PassingStyle::Long, PressingIntensity::Medium),
        ("Valcourt FC", TeamMentality::Balanced, PassingStyle::Short, PressingIntensity::Low),
    ];

    clubs
        .iter()
        .enumerate()
        .map(|(idx, (name, mentality, passing, pressing))| {
            let team_id = idx as u32 + 1;

            Team::builder()
                .id(team_id)
                .name(String::from(*name))
                .players(generate_squad(team_id))
                .formation(Formation::F442)
                .tactics(Tactics::new(*mentality, 5, 5, *passing, *pressing))
                .build()
        })
        .collect()
}

fn generate_squad(team_id: u32) -> Vec<Player> {
    let positions = [
        PlayerPositionType::Goalkeeper,
        PlayerPositionType::Goalkeeper,
        PlayerPositionType::LeftBack,
        PlayerPositionType::CenterBack,
        PlayerPositionType::CenterBack,
        PlayerPositionType::CenterBack,
        PlayerPositionType::RightBack,
        PlayerPositionType::DefensiveMidfielder,
        PlayerPositionType::LeftMidfielder,
        PlayerPositionType::CenterMidfielder,
        PlayerPositionType::CenterMidfielder,
        PlayerPositionType::RightMidfielder,
        PlayerPositionType::AttackingMidfielder,
        PlayerPositionType::LeftWinger,
        PlayerPositionType::RightWinger,
        PlayerPositionType::Striker,
        PlayerPositionType::Striker,
    ];

    let first_names = ["Alex", "Marco", "Jonas", "Pavel", "Luca", "Erik", "Tomas", "Diego"];
    let last_names = [
        "Hartmann", "Silva", "Berg", "Novak", "Moretti", "Lindqvist", "Dvorak", "Ferreira",
        "Keller", "Costa", "Holm", "Urban", "Greco", "Nilsson", "Maly", "Pinto", "Vogel",
    ];

    positions
        .iter()
        .enumerate()
        .map(|(idx, position)| {
            let player_id = team_id * 100 + idx as u32;

            // Deterministic attribute spread, no RNG at setup
            let base = 58.0 + ((player_id * 7) % 20) as f32;
            let tilt = ((player_id * 13) % 9) as f32;

            let skills = match position {
                PlayerPositionType::Goalkeeper => {
                    PlayerSkills::new(base - 10.0, 30.0, base - 5.0, 40.0, base + tilt, base)
                }
                p if p.is_attacking() => {
                    PlayerSkills::new(base + tilt, base + 8.0, base, base + 4.0, base - 15.0, base)
                }
                p if p.is_playmaking() => {
                    PlayerSkills::new(base, base - 5.0, base + 8.0 + tilt, base + 3.0, base - 5.0, base)
                }
                _ => PlayerSkills::new(
                    base,
                    base - 15.0,
                    base - 2.0,
                    base - 5.0,
                    base + 8.0 + tilt,
                    base + 3.0,
                ),
            };

            Player::builder()
                .id(player_id)
                .full_name(FullName::with_full(
                    String::from(first_names[(player_id as usize * 3) % first_names.len()]),
                    String::from(last_names[player_id as usize % last_names.len()]),
                ))
                .age(18 + ((player_id * 11) % 18) as u8)
                .country_id((player_id * 5) % 11)
                .position(*position)
                .skills(skills)
                .build()
        })
        .collect()
}
