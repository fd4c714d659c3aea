//! Functional queries over a small character roster: projections,
//! aggregates, selections, orderings, every/some checks, and
//! first-occurrence deduplication.

pub mod data;
pub mod dedup;
pub mod report;

pub use data::model::{Character, NameAndHeight, Roster};
pub use report::WorksheetReport;
