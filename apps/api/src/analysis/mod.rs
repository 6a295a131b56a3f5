// Fit Analysis: simulated, delayed scoring that writes back into the record store.

pub mod handlers;
pub mod scheduler;

pub use scheduler::{AnalysisStatus, FitAnalysisScheduler, TriggerOutcome};
