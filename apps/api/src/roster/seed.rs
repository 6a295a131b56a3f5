//! Fixed prospect dataset loaded into the Record Store at process start.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::models::{GraduationYear, PlayerLevel, Prospect, ProspectId, RosterStatus};

enum SeedClass {
    Year(i32),
    Label(&'static str),
    Unspecified,
}

struct SeedRow {
    id: &'static str,
    name: &'static str,
    position: &'static str,
    level: PlayerLevel,
    round: &'static str,
    class: SeedClass,
    clutch_factor: i32,
    status: RosterStatus,
    needs_retest: bool,
    last_tested: &'static str,
}

use PlayerLevel::{HighSchool, Juco, Ncaa, Pro};
use RosterStatus::{Active, Inactive, Pending};
use SeedClass::{Label, Unspecified, Year};

#[rustfmt::skip]
const SEED_ROWS: &[SeedRow] = &[
    SeedRow { id: "p-001", name: "Alvarez, Mateo", position: "Shortstop", level: HighSchool, round: "Round 1", class: Year(2026), clutch_factor: 912, status: Active, needs_retest: false, last_tested: "2024-10-02" },
    SeedRow { id: "p-002", name: "Brooks, Tyler", position: "Pitcher", level: Ncaa, round: "Round 1", class: Year(2025), clutch_factor: 874, status: Active, needs_retest: true, last_tested: "2024-06-18" },
    SeedRow { id: "p-003", name: "Castillo, Andres", position: "Catcher", level: Juco, round: "Round 2", class: Year(2026), clutch_factor: 655, status: Active, needs_retest: false, last_tested: "2024-09-21" },
    SeedRow { id: "p-004", name: "Dawson, Eli", position: "Outfielder", level: HighSchool, round: "Round 2", class: Year(2027), clutch_factor: 731, status: Pending, needs_retest: false, last_tested: "2024-10-11" },
    SeedRow { id: "p-005", name: "Everett, Cole", position: "First Base", level: Ncaa, round: "Round 3", class: Label("2025"), clutch_factor: 588, status: Active, needs_retest: true, last_tested: "2024-04-30" },
    SeedRow { id: "p-006", name: "Fujimoto, Kenji", position: "Pitcher", level: Pro, round: "Round 1", class: Unspecified, clutch_factor: 961, status: Active, needs_retest: false, last_tested: "2024-08-14" },
    SeedRow { id: "p-007", name: "Garcia, Luis", position: "Third Base", level: HighSchool, round: "Round 3", class: Year(2028), clutch_factor: 497, status: Active, needs_retest: false, last_tested: "2024-10-05" },
    SeedRow { id: "p-008", name: "Harper, Jace", position: "Infielder", level: Juco, round: "Round 2", class: Year(2026), clutch_factor: 702, status: Inactive, needs_retest: true, last_tested: "2024-02-09" },
    SeedRow { id: "p-009", name: "Ibarra, Nico", position: "Outfielder", level: Ncaa, round: "Round 1", class: Year(2025), clutch_factor: 846, status: Active, needs_retest: false, last_tested: "2024-09-01" },
    SeedRow { id: "p-010", name: "Jensen, Carter", position: "Catcher", level: HighSchool, round: "Round 4", class: Year(2029), clutch_factor: 433, status: Pending, needs_retest: false, last_tested: "2024-10-15" },
    SeedRow { id: "p-011", name: "Kowalski, Ryan", position: "Pitcher", level: HighSchool, round: "Round 2", class: Year(2027), clutch_factor: 779, status: Active, needs_retest: false, last_tested: "2024-09-28" },
    SeedRow { id: "p-012", name: "Lopez, Diego", position: "Shortstop", level: Juco, round: "Round 3", class: Year(2026), clutch_factor: 612, status: Active, needs_retest: true, last_tested: "2024-05-12" },
    SeedRow { id: "p-013", name: "Mitchell, Grant", position: "Third Base", level: Ncaa, round: "Round 2", class: Year(2025), clutch_factor: 690, status: Active, needs_retest: false, last_tested: "2024-08-30" },
    SeedRow { id: "p-014", name: "Nguyen, Bao", position: "Infielder", level: HighSchool, round: "Round 1", class: Year(2030), clutch_factor: 355, status: Pending, needs_retest: false, last_tested: "2024-10-17" },
    SeedRow { id: "p-015", name: "Ortiz, Rafael", position: "Outfielder", level: Pro, round: "Round 4", class: Unspecified, clutch_factor: 808, status: Inactive, needs_retest: true, last_tested: "2024-01-22" },
    SeedRow { id: "p-016", name: "Parker, Owen", position: "First Base", level: HighSchool, round: "Round 3", class: Year(2028), clutch_factor: 541, status: Active, needs_retest: false, last_tested: "2024-09-09" },
    SeedRow { id: "p-017", name: "Quinn, Austin", position: "Pitcher", level: Juco, round: "Round 1", class: Year(2026), clutch_factor: 887, status: Active, needs_retest: false, last_tested: "2024-09-19" },
    SeedRow { id: "p-018", name: "Smith, Jordan", position: "Catcher", level: Ncaa, round: "Round 2", class: Year(2025), clutch_factor: 724, status: Active, needs_retest: true, last_tested: "2024-03-03" },
];

/// Materializes the fixed dataset as prospect records.
pub fn seed_prospects() -> Result<Vec<Prospect>> {
    SEED_ROWS.iter().map(to_prospect).collect()
}

fn to_prospect(row: &SeedRow) -> Result<Prospect> {
    let last_tested_date = NaiveDate::parse_from_str(row.last_tested, "%Y-%m-%d")
        .with_context(|| format!("invalid last_tested date for seed row {}", row.id))?;

    let graduation_year = match row.class {
        Year(year) => Some(GraduationYear::Year(year)),
        Label(label) => Some(GraduationYear::Label(label.to_string())),
        Unspecified => None,
    };

    Ok(Prospect {
        id: ProspectId::new(row.id),
        name: row.name.to_string(),
        position: row.position.to_string(),
        level: row.level,
        round: row.round.to_string(),
        graduation_year,
        clutch_factor: row.clutch_factor,
        status: row.status,
        needs_retest: row.needs_retest,
        last_tested_date,
        is_interested: false,
        fit_score: None,
    })
}

/// Minimal record for unit tests across the crate.
#[cfg(test)]
pub(crate) fn sample_prospect(id: &str, name: &str, clutch_factor: i32) -> Prospect {
    Prospect {
        id: ProspectId::new(id),
        name: name.to_string(),
        position: "Pitcher".to_string(),
        level: PlayerLevel::HighSchool,
        round: "Round 1".to_string(),
        graduation_year: Some(GraduationYear::Year(2026)),
        clutch_factor,
        status: RosterStatus::Active,
        needs_retest: false,
        last_tested_date: NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
        is_interested: false,
        fit_score: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::store::ProspectStore;

    #[test]
    fn test_seed_dataset_loads_into_store() {
        let prospects = seed_prospects().unwrap();
        assert_eq!(prospects.len(), SEED_ROWS.len());
        assert!(prospects.iter().all(|p| p.fit_score.is_none() && !p.is_interested));

        let store = ProspectStore::seed(prospects).unwrap();
        assert_eq!(store.len(), SEED_ROWS.len());
    }

    #[test]
    fn test_seed_has_mixed_graduation_shapes() {
        let prospects = seed_prospects().unwrap();
        assert!(prospects.iter().any(|p| p.graduation_year.is_none()));
        assert!(prospects
            .iter()
            .any(|p| matches!(p.graduation_year, Some(GraduationYear::Label(_)))));
    }
}
