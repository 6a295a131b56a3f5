//! Filter/Sort Pipeline: pure projection of the record list into the table's rows.
//!
//! `project` never mutates its input and is deterministic for identical arguments.
//! Every predicate is independent; they compose by logical AND.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::{GraduationYear, PlayerLevel, Prospect};

/// Sentinel accepted by every categorical filter.
pub const ALL: &str = "All";

pub const POSITIONS: &[&str] = &[
    "Pitcher",
    "Catcher",
    "Infielder",
    "Outfielder",
    "Shortstop",
    "First Base",
    "Third Base",
];

pub const GRADUATION_CLASSES: &[&str] = &["2025", "2026", "2027", "2028", "2029", "2030"];

// ────────────────────────────────────────────────────────────────────────────
// Criteria types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    All,
    Interested,
}

/// A categorical filter: either the `All` sentinel or one exact value.
///
/// Unknown values are accepted as-is and simply match nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn parse(raw: &str) -> Self {
        if raw == ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(raw.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(expected) => expected == value,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL,
            CategoryFilter::Only(value) => value,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        CategoryFilter::parse(&value)
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Position,
    Level,
    GraduationYear,
    ClutchFactor,
    FitScore,
}

impl SortField {
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            SortField::ClutchFactor | SortField::GraduationYear | SortField::FitScore
        )
    }

    /// Direction selected when the coach switches to this column.
    pub fn default_direction(&self) -> SortDirection {
        if self.is_numeric() {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::ClutchFactor,
            direction: SortDirection::Desc,
        }
    }
}

impl SortState {
    /// Column-header click: same field flips, a new field starts at its default direction.
    pub fn click(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = field.default_direction();
        }
    }
}

/// Everything the table projection depends on besides the records themselves.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectionCriteria {
    #[serde(default)]
    pub view: ViewMode,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub position: CategoryFilter,
    #[serde(default)]
    pub level: CategoryFilter,
    #[serde(default)]
    pub graduation_year: CategoryFilter,
    #[serde(default)]
    pub sort: SortState,
}

// ────────────────────────────────────────────────────────────────────────────
// Projection
// ────────────────────────────────────────────────────────────────────────────

/// Filters and orders `records` for display.
pub fn project(records: &[Prospect], criteria: &ProjectionCriteria) -> Vec<Prospect> {
    let mut result: Vec<Prospect> = records
        .iter()
        .filter(|p| matches(p, criteria))
        .cloned()
        .collect();

    result.sort_by(|a, b| compare(a, b, criteria.sort));
    result
}

/// True when `record` satisfies every active predicate in `criteria`.
pub fn matches(record: &Prospect, criteria: &ProjectionCriteria) -> bool {
    passes_view(record, criteria.view)
        && matches_query(record, &criteria.query.to_lowercase())
        && criteria.position.matches(&record.position)
        && criteria.level.matches(record.level.label())
        && matches_graduation(record, &criteria.graduation_year)
}

fn passes_view(record: &Prospect, view: ViewMode) -> bool {
    match view {
        ViewMode::All => true,
        ViewMode::Interested => record.is_interested,
    }
}

/// `query` must already be lowercased.
fn matches_query(record: &Prospect, query: &str) -> bool {
    query.is_empty()
        || record.name.to_lowercase().contains(query)
        || record.position.to_lowercase().contains(query)
}

fn matches_graduation(record: &Prospect, filter: &CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::Only(_) => record
            .graduation_year
            .as_ref()
            .is_some_and(|year| filter.matches(&year.to_string())),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Ordering
// ────────────────────────────────────────────────────────────────────────────

enum SortKey<'a> {
    Text(&'a str),
    Number(i64),
    Year(&'a GraduationYear),
}

fn sort_key(record: &Prospect, field: SortField) -> Option<SortKey<'_>> {
    match field {
        SortField::Name => Some(SortKey::Text(&record.name)),
        SortField::Position => Some(SortKey::Text(&record.position)),
        SortField::Level => Some(SortKey::Text(record.level.label())),
        SortField::GraduationYear => record.graduation_year.as_ref().map(SortKey::Year),
        SortField::ClutchFactor => Some(SortKey::Number(i64::from(record.clutch_factor))),
        SortField::FitScore => record.fit_score.map(|s| SortKey::Number(i64::from(s))),
    }
}

fn compare_keys(a: &SortKey<'_>, b: &SortKey<'_>) -> Ordering {
    match (a, b) {
        (SortKey::Text(x), SortKey::Text(y)) => x.cmp(y),
        (SortKey::Number(x), SortKey::Number(y)) => x.cmp(y),
        (SortKey::Year(x), SortKey::Year(y)) => match (x.as_year(), y.as_year()) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => x.to_string().cmp(&y.to_string()),
        },
        // Keys for one field always share a variant.
        _ => Ordering::Equal,
    }
}

/// Comparator used by `project`. Missing values sort last in both directions.
pub fn compare(a: &Prospect, b: &Prospect, sort: SortState) -> Ordering {
    match (sort_key(a, sort.field), sort_key(b, sort.field)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => {
            let ordering = compare_keys(&x, &y);
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Filter option catalogues
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct FilterOptions {
    pub positions: Vec<String>,
    pub levels: Vec<String>,
    pub graduation_years: Vec<String>,
}

impl FilterOptions {
    pub fn catalogue() -> Self {
        Self {
            positions: with_all(POSITIONS.iter().copied()),
            levels: with_all(PlayerLevel::ALL.iter().map(|level| level.label())),
            graduation_years: with_all(GRADUATION_CLASSES.iter().copied()),
        }
    }
}

fn with_all<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    std::iter::once(ALL)
        .chain(values)
        .map(str::to_string)
        .collect()
}
