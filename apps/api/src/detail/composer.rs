//! Detail View Composer: builds the per-prospect report bundle.
//!
//! Not memoized: every call draws fresh leaderboard peers and alignment insights.
//! Narrative blocks are plain interpolation over the record and never read
//! `needs_retest`.

use serde::Serialize;

use crate::detail::alignment::{build_alignment, AlignmentSection};
use crate::detail::leaderboard::{build_leaderboards, Leaderboard};
use crate::models::{PlayerLevel, Prospect};
use crate::random::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClutchTier {
    Elite,
    High,
    Solid,
    Developing,
}

impl ClutchTier {
    pub fn from_clutch_factor(clutch_factor: i32) -> Self {
        if clutch_factor >= 850 {
            ClutchTier::Elite
        } else if clutch_factor >= 700 {
            ClutchTier::High
        } else if clutch_factor >= 550 {
            ClutchTier::Solid
        } else {
            ClutchTier::Developing
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            ClutchTier::Elite => "elite composure in high-leverage moments",
            ClutchTier::High => "above-average poise when the game tightens",
            ClutchTier::Solid => "steady, repeatable execution under moderate pressure",
            ClutchTier::Developing => "a pressure response that is still taking shape",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrativeBlocks {
    pub summary: String,
    pub practice_suggestion: String,
    pub coaching_approach: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailView {
    pub prospect: Prospect,
    pub graduation_display: String,
    pub retest_label: &'static str,
    pub clutch_tier: ClutchTier,
    pub leaderboards: Vec<Leaderboard>,
    pub narrative: NarrativeBlocks,
    pub alignment: AlignmentSection,
}

pub fn compose(prospect: &Prospect, rng: &RandomSource) -> DetailView {
    let (leaderboards, alignment) = rng.with(|rng| {
        (
            build_leaderboards(prospect, rng),
            build_alignment(prospect.fit_score, rng),
        )
    });

    DetailView {
        prospect: prospect.clone(),
        graduation_display: prospect.graduation_label(),
        retest_label: prospect.retest_label(),
        clutch_tier: ClutchTier::from_clutch_factor(prospect.clutch_factor),
        leaderboards,
        narrative: narrative_blocks(prospect),
        alignment,
    }
}

pub fn narrative_blocks(prospect: &Prospect) -> NarrativeBlocks {
    let tier = ClutchTier::from_clutch_factor(prospect.clutch_factor);
    let first_name = first_name(&prospect.name);

    let fit_clause = match prospect.fit_score {
        Some(score) => format!("projects a {score}% fit probability with your program"),
        None => "has not been through a Fit Analysis yet".to_string(),
    };

    let summary = format!(
        "{} is a {} {} ({}, class of {}) with a Clutch Factor of {}, showing {}. {} {}.",
        prospect.name,
        prospect.level.label(),
        prospect.position.to_lowercase(),
        prospect.round,
        prospect.graduation_label(),
        prospect.clutch_factor,
        tier.describe(),
        first_name,
        fit_clause,
    );

    let practice_suggestion = match tier {
        ClutchTier::Elite | ClutchTier::High => format!(
            "Stack late-inning simulations for {first_name}: full counts, runners in scoring \
             position, and a live scoreboard so the {} rehearses finishing rather than surviving.",
            prospect.position.to_lowercase()
        ),
        ClutchTier::Solid | ClutchTier::Developing => format!(
            "Build {first_name}'s pressure tolerance gradually: short competitive reps with a \
             visible consequence, then debrief each rep before raising the stakes at {}.",
            prospect.position.to_lowercase()
        ),
    };

    let coaching_approach = match prospect.level {
        PlayerLevel::HighSchool => format!(
            "{first_name} is still forming habits. Define the role clearly, give brief direct \
             feedback after each rep, and let trust build through consistent execution."
        ),
        PlayerLevel::Juco | PlayerLevel::Ncaa => format!(
            "{first_name} has competed against college arms. Lean on data-driven check-ins and \
             hold the same public standard you hold for the rest of the roster."
        ),
        PlayerLevel::Pro => format!(
            "{first_name} arrives with professional routines. Set the constraints, let them \
             solve problems on their own terms, and reserve intervention for high-stakes moments."
        ),
    };

    NarrativeBlocks {
        summary,
        practice_suggestion,
        coaching_approach,
    }
}

/// "Last, First" → "First"; anything else is returned trimmed.
fn first_name(name: &str) -> &str {
    match name.split_once(',') {
        Some((_, first)) if !first.trim().is_empty() => first.trim(),
        _ => name.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::alignment::AlignmentSection;
    use crate::roster::seed::sample_prospect;

    #[test]
    fn test_unscored_prospect_gets_locked_alignment() {
        let prospect = sample_prospect("a", "Smith, John", 720);
        let view = compose(&prospect, &RandomSource::seeded(1));
        assert!(view.alignment.is_locked());
        assert_eq!(view.leaderboards.len(), 3);
        assert!(view.narrative.summary.contains("has not been through a Fit Analysis"));
    }

    #[test]
    fn test_scored_prospect_gets_breakdown() {
        let mut prospect = sample_prospect("a", "Smith, John", 720);
        prospect.fit_score = Some(64);
        let view = compose(&prospect, &RandomSource::seeded(1));
        match view.alignment {
            AlignmentSection::Ready { fit_score, insights } => {
                assert_eq!(fit_score, 64);
                assert_eq!(insights.len(), 10);
            }
            AlignmentSection::Locked { .. } => panic!("expected breakdown"),
        }
        assert!(view.narrative.summary.contains("64% fit probability"));
    }

    #[test]
    fn test_same_seed_reproduces_flavor_content() {
        let mut prospect = sample_prospect("a", "Smith, John", 720);
        prospect.fit_score = Some(50);
        let a = compose(&prospect, &RandomSource::seeded(21));
        let b = compose(&prospect, &RandomSource::seeded(21));
        assert_eq!(a.leaderboards, b.leaderboards);
        assert_eq!(a.alignment, b.alignment);
    }

    #[test]
    fn test_repeated_composition_is_not_memoized() {
        let mut prospect = sample_prospect("a", "Smith, John", 720);
        prospect.fit_score = Some(50);
        let rng = RandomSource::seeded(22);
        let first = compose(&prospect, &rng);
        let differs = (0..10).any(|_| {
            let next = compose(&prospect, &rng);
            next.leaderboards != first.leaderboards || next.alignment != first.alignment
        });
        assert!(differs);
    }

    #[test]
    fn test_narrative_ignores_retest_flag() {
        let mut fresh = sample_prospect("a", "Smith, John", 720);
        fresh.fit_score = Some(70);
        let mut stale = fresh.clone();
        stale.needs_retest = true;
        assert_eq!(narrative_blocks(&fresh), narrative_blocks(&stale));
    }

    #[test]
    fn test_first_name_extraction() {
        assert_eq!(first_name("Smith, John"), "John");
        assert_eq!(first_name("Madonna"), "Madonna");
        assert_eq!(first_name("Trailing,"), "Trailing,");
    }

    #[test]
    fn test_clutch_tiers() {
        assert_eq!(ClutchTier::from_clutch_factor(900), ClutchTier::Elite);
        assert_eq!(ClutchTier::from_clutch_factor(700), ClutchTier::High);
        assert_eq!(ClutchTier::from_clutch_factor(600), ClutchTier::Solid);
        assert_eq!(ClutchTier::from_clutch_factor(100), ClutchTier::Developing);
    }
}
