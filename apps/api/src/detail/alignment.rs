//! Coach/athlete alignment breakdown shown in the detail view.
//!
//! Each dimension gets an independent weighted draw: HIGH 50%, MODERATE 30%, LOW 20%.
//! LOW is promoted to MODERATE when the overall fit score exceeds 80. Nothing is ever
//! demoted.

use rand::Rng;
use serde::Serialize;

/// Psychometric dimensions from the coach's philosophy profile.
pub const DIMENSIONS: [&str; 10] = [
    "Role Definition",
    "Adaptability Support",
    "Communication Style",
    "Feedback Cadence",
    "Pressure Motivation",
    "Accountability Style",
    "Trust Formation",
    "Teaching Approach",
    "Decision-Making",
    "Team Culture",
];

pub const PROMOTION_THRESHOLD: u8 = 80;

pub const LOCKED_MESSAGE: &str =
    "Coaches Fit locked. Run a Fit Analysis to unlock the alignment breakdown.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlignmentLevel {
    High,
    Moderate,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignmentInsight {
    pub dimension: &'static str,
    pub level: AlignmentLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AlignmentSection {
    Locked { message: &'static str },
    Ready {
        fit_score: u8,
        insights: Vec<AlignmentInsight>,
    },
}

impl AlignmentSection {
    pub fn is_locked(&self) -> bool {
        matches!(self, AlignmentSection::Locked { .. })
    }
}

/// Weighted draw over the three levels.
pub fn draw_level<R: Rng>(rng: &mut R) -> AlignmentLevel {
    match rng.random_range(0..100u8) {
        0..=49 => AlignmentLevel::High,
        50..=79 => AlignmentLevel::Moderate,
        _ => AlignmentLevel::Low,
    }
}

pub fn promote(level: AlignmentLevel, fit_score: u8) -> AlignmentLevel {
    if level == AlignmentLevel::Low && fit_score > PROMOTION_THRESHOLD {
        AlignmentLevel::Moderate
    } else {
        level
    }
}

pub fn build_alignment<R: Rng>(fit_score: Option<u8>, rng: &mut R) -> AlignmentSection {
    let Some(fit_score) = fit_score else {
        return AlignmentSection::Locked {
            message: LOCKED_MESSAGE,
        };
    };

    let insights = DIMENSIONS
        .iter()
        .map(|&dimension| AlignmentInsight {
            dimension,
            level: promote(draw_level(rng), fit_score),
        })
        .collect();

    AlignmentSection::Ready {
        fit_score,
        insights,
    }
}
