//! Synthetic leaderboards for the detail view.
//!
//! Peers are invented on every call with scores clustered around the subject's clutch
//! factor. These boards are flavor content and are never stored.

use rand::seq::index;
use rand::Rng;
use serde::Serialize;

use crate::models::Prospect;

pub const PEERS_PER_BOARD: usize = 4;
pub const PEER_SPREAD: i32 = 75;

const PEER_NAMES: &[&str] = &[
    "Adams, Drew",
    "Bennett, Luke",
    "Chavez, Marco",
    "Dixon, Trey",
    "Ellis, Grady",
    "Flores, Adrian",
    "Grant, Micah",
    "Hayes, Brody",
    "Irwin, Caleb",
    "Jordan, Reid",
    "Kim, Daniel",
    "Lawson, Hunter",
    "Morales, Javier",
    "Nash, Colby",
    "Owens, Derek",
    "Price, Landon",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardScope {
    Overall,
    Position,
    GraduationClass,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub name: String,
    pub score: i32,
    pub is_subject: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leaderboard {
    pub scope: LeaderboardScope,
    pub title: String,
    pub entries: Vec<LeaderboardEntry>,
}

/// Overall, position and graduation-class boards, in that order.
pub fn build_leaderboards<R: Rng>(prospect: &Prospect, rng: &mut R) -> Vec<Leaderboard> {
    vec![
        build_board(
            LeaderboardScope::Overall,
            "Overall Clutch Leaders".to_string(),
            prospect,
            rng,
        ),
        build_board(
            LeaderboardScope::Position,
            format!("{} Leaders", prospect.position),
            prospect,
            rng,
        ),
        build_board(
            LeaderboardScope::GraduationClass,
            format!("Class of {} Leaders", prospect.graduation_label()),
            prospect,
            rng,
        ),
    ]
}

fn build_board<R: Rng>(
    scope: LeaderboardScope,
    title: String,
    prospect: &Prospect,
    rng: &mut R,
) -> Leaderboard {
    let pool: Vec<&str> = PEER_NAMES
        .iter()
        .copied()
        .filter(|name| *name != prospect.name)
        .collect();
    let picks = index::sample(rng, pool.len(), PEERS_PER_BOARD.min(pool.len()));

    let mut rows: Vec<(String, i32, bool)> = Vec::with_capacity(PEERS_PER_BOARD + 1);
    rows.push((prospect.name.clone(), prospect.clutch_factor, true));
    for i in picks.iter() {
        let offset = rng.random_range(-PEER_SPREAD..=PEER_SPREAD);
        let score = prospect.clutch_factor.saturating_add(offset).max(0);
        rows.push((pool[i].to_string(), score, false));
    }

    // Stable: the subject stays ahead of peers it ties with.
    rows.sort_by(|a, b| b.1.cmp(&a.1));

    let entries = rows
        .into_iter()
        .enumerate()
        .map(|(i, (name, score, is_subject))| LeaderboardEntry {
            rank: i + 1,
            name,
            score,
            is_subject,
        })
        .collect();

    Leaderboard {
        scope,
        title,
        entries,
    }
}
