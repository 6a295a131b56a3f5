pub mod prospect;

pub use prospect::{GraduationYear, PlayerLevel, Prospect, ProspectId, RosterStatus};
