// Table rows: a projected record plus the display helpers the dashboard shows beside it.

use serde::Serialize;

use crate::analysis::{AnalysisStatus, FitAnalysisScheduler};
use crate::models::Prospect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FitBand {
    Strong,
    Solid,
    Developing,
    LongShot,
}

impl FitBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            75..=u8::MAX => FitBand::Strong,
            50..=74 => FitBand::Solid,
            30..=49 => FitBand::Developing,
            _ => FitBand::LongShot,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProspectRow {
    #[serde(flatten)]
    pub prospect: Prospect,
    pub graduation_display: String,
    pub retest_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit_band: Option<FitBand>,
    pub analysis: AnalysisStatus,
}

impl ProspectRow {
    pub fn new(prospect: Prospect, analysis: AnalysisStatus) -> Self {
        Self {
            graduation_display: prospect.graduation_label(),
            retest_label: prospect.retest_label(),
            fit_band: prospect.fit_score.map(FitBand::from_score),
            analysis,
            prospect,
        }
    }
}

pub fn to_rows(records: Vec<Prospect>, scheduler: &FitAnalysisScheduler) -> Vec<ProspectRow> {
    records
        .into_iter()
        .map(|p| {
            let status = scheduler.status_of(&p.id, p.fit_score);
            ProspectRow::new(p, status)
        })
        .collect()
}
