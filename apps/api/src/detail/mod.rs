// Detail view: per-prospect report composition and the registry of open views.

pub mod alignment;
pub mod composer;
pub mod handlers;
pub mod leaderboard;
pub mod views;
