// Roster: the prospect records, their seed data, and the dashboard table over them.

pub mod dashboard;
pub mod handlers;
pub mod pipeline;
pub mod rows;
pub mod seed;
pub mod store;
