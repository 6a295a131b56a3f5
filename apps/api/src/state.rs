use std::sync::Arc;

use parking_lot::Mutex;

use crate::analysis::FitAnalysisScheduler;
use crate::config::Config;
use crate::detail::views::DetailViewRegistry;
use crate::narrative::NarrativeAdapter;
use crate::random::RandomSource;
use crate::roster::dashboard::DashboardState;
use crate::roster::store::ProspectStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProspectStore>,
    pub scheduler: FitAnalysisScheduler,
    /// Pluggable narrative source. `GeminiNarrator` when a key is configured.
    pub narrator: Arc<dyn NarrativeAdapter>,
    pub details: Arc<DetailViewRegistry>,
    /// One dashboard session shared by every caller.
    pub dashboard: Arc<Mutex<DashboardState>>,
    pub rng: Arc<RandomSource>,
}

impl AppState {
    pub fn new(store: ProspectStore, narrator: Arc<dyn NarrativeAdapter>, config: &Config) -> Self {
        let store = Arc::new(store);
        let rng = Arc::new(RandomSource::from_config(config.random_seed));
        let scheduler =
            FitAnalysisScheduler::new(store.clone(), rng.clone(), config.fit_analysis_delay);

        Self {
            store,
            scheduler,
            narrator,
            details: Arc::new(DetailViewRegistry::new()),
            dashboard: Arc::new(Mutex::new(DashboardState::new())),
            rng,
        }
    }
}
