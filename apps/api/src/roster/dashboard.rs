//! Dashboard Session: the single shared view state the table is projected against.
//!
//! Holds the current view, search text, categorical filters and sort. Mutated only
//! through the operations below; the projection itself stays in `pipeline`.

use serde::{Deserialize, Serialize};

use crate::models::Prospect;
use crate::roster::pipeline::{project, CategoryFilter, ProjectionCriteria, SortField, ViewMode};

/// Partial filter update. Omitted fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterUpdate {
    pub view: Option<ViewMode>,
    pub query: Option<String>,
    pub position: Option<CategoryFilter>,
    pub level: Option<CategoryFilter>,
    pub graduation_year: Option<CategoryFilter>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardState {
    criteria: ProjectionCriteria,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criteria(&self) -> &ProjectionCriteria {
        &self.criteria
    }

    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(view) = update.view {
            self.criteria.view = view;
        }
        if let Some(query) = update.query {
            self.criteria.query = query;
        }
        if let Some(position) = update.position {
            self.criteria.position = position;
        }
        if let Some(level) = update.level {
            self.criteria.level = level;
        }
        if let Some(graduation_year) = update.graduation_year {
            self.criteria.graduation_year = graduation_year;
        }
    }

    /// Resets position, level and graduation class. View, search and sort are kept.
    pub fn reset_filters(&mut self) {
        self.criteria.position = CategoryFilter::All;
        self.criteria.level = CategoryFilter::All;
        self.criteria.graduation_year = CategoryFilter::All;
    }

    pub fn click_sort(&mut self, field: SortField) {
        self.criteria.sort.click(field);
    }

    pub fn visible(&self, records: &[Prospect]) -> Vec<Prospect> {
        project(records, &self.criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::pipeline::SortDirection;
    use crate::roster::seed::sample_prospect;

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let mut dashboard = DashboardState::new();
        dashboard.apply(FilterUpdate {
            query: Some("smith".to_string()),
            position: Some(CategoryFilter::parse("Catcher")),
            ..Default::default()
        });
        dashboard.apply(FilterUpdate {
            view: Some(ViewMode::Interested),
            ..Default::default()
        });
        let criteria = dashboard.criteria();
        assert_eq!(criteria.query, "smith");
        assert_eq!(criteria.position, CategoryFilter::Only("Catcher".to_string()));
        assert_eq!(criteria.view, ViewMode::Interested);
    }

    #[test]
    fn test_reset_clears_only_categorical_filters() {
        let mut dashboard = DashboardState::new();
        dashboard.apply(FilterUpdate {
            view: Some(ViewMode::Interested),
            query: Some("doe".to_string()),
            position: Some(CategoryFilter::parse("Pitcher")),
            level: Some(CategoryFilter::parse("NCAA")),
            graduation_year: Some(CategoryFilter::parse("2026")),
        });
        dashboard.click_sort(SortField::Name);
        dashboard.reset_filters();

        let criteria = dashboard.criteria();
        assert_eq!(criteria.position, CategoryFilter::All);
        assert_eq!(criteria.level, CategoryFilter::All);
        assert_eq!(criteria.graduation_year, CategoryFilter::All);
        assert_eq!(criteria.view, ViewMode::Interested);
        assert_eq!(criteria.query, "doe");
        assert_eq!(criteria.sort.field, SortField::Name);
    }

    #[test]
    fn test_sort_clicks_toggle() {
        let mut dashboard = DashboardState::new();
        dashboard.click_sort(SortField::ClutchFactor);
        assert_eq!(dashboard.criteria().sort.direction, SortDirection::Asc);
        dashboard.click_sort(SortField::Name);
        assert_eq!(dashboard.criteria().sort.field, SortField::Name);
        assert_eq!(dashboard.criteria().sort.direction, SortDirection::Asc);
        dashboard.click_sort(SortField::FitScore);
        assert_eq!(dashboard.criteria().sort.direction, SortDirection::Desc);
    }

    #[test]
    fn test_visible_uses_session_criteria() {
        let records = vec![
            sample_prospect("a", "Smith, John", 500),
            sample_prospect("b", "Doe, Jane", 900),
        ];
        let mut dashboard = DashboardState::new();
        let ids: Vec<_> = dashboard
            .visible(&records)
            .into_iter()
            .map(|p| p.id.0)
            .collect();
        assert_eq!(ids, vec!["b", "a"]);

        dashboard.apply(FilterUpdate {
            query: Some("SMITH".to_string()),
            ..Default::default()
        });
        let ids: Vec<_> = dashboard
            .visible(&records)
            .into_iter()
            .map(|p| p.id.0)
            .collect();
        assert_eq!(ids, vec!["a"]);
    }
}
