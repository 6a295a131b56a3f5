use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Opaque, stable identifier for a prospect record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProspectId(pub String);

impl ProspectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ProspectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerLevel {
    #[serde(rename = "High School")]
    HighSchool,
    #[serde(rename = "NCAA")]
    Ncaa,
    #[serde(rename = "JUCO")]
    Juco,
    #[serde(rename = "PRO")]
    Pro,
}

impl PlayerLevel {
    pub const ALL: [PlayerLevel; 4] = [
        PlayerLevel::HighSchool,
        PlayerLevel::Ncaa,
        PlayerLevel::Juco,
        PlayerLevel::Pro,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PlayerLevel::HighSchool => "High School",
            PlayerLevel::Ncaa => "NCAA",
            PlayerLevel::Juco => "JUCO",
            PlayerLevel::Pro => "PRO",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterStatus {
    Active,
    Inactive,
    Pending,
}

/// Graduation class as it arrives in the source data: usually a year, sometimes free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GraduationYear {
    Year(i32),
    Label(String),
}

impl GraduationYear {
    /// Numeric year when one can be read from the value.
    pub fn as_year(&self) -> Option<i32> {
        match self {
            GraduationYear::Year(year) => Some(*year),
            GraduationYear::Label(label) => label.trim().parse().ok(),
        }
    }
}

impl fmt::Display for GraduationYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraduationYear::Year(year) => write!(f, "{year}"),
            GraduationYear::Label(label) => f.write_str(label),
        }
    }
}

/// A single athlete's profile plus the coach's annotations.
///
/// `clutch_factor` is fixed at seed time. Only `is_interested` and `fit_score`
/// change afterwards, and only through [`crate::roster::store::ProspectStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prospect {
    pub id: ProspectId,
    pub name: String,
    pub position: String,
    pub level: PlayerLevel,
    pub round: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<GraduationYear>,
    pub clutch_factor: i32,
    pub status: RosterStatus,
    /// Informational only. Never feeds a score or a derived narrative figure.
    pub needs_retest: bool,
    pub last_tested_date: NaiveDate,
    #[serde(default)]
    pub is_interested: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit_score: Option<u8>,
}

impl Prospect {
    pub fn graduation_label(&self) -> String {
        self.graduation_year
            .as_ref()
            .map(|year| year.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn retest_label(&self) -> &'static str {
        if self.needs_retest {
            "Needs Retest"
        } else {
            "Up To Date"
        }
    }
}
