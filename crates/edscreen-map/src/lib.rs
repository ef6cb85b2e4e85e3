//! Record linkage of substances against one loaded source table.

pub mod engine;
pub mod keys;

pub use engine::{MatchOutcome, Matcher, RowMatch, cell_matches, find_first_match, project_row};
pub use keys::CandidateKeys;
