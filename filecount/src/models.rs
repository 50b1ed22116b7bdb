// src/models.rs
pub mod directory_tally;
pub mod totals;

pub use directory_tally::DirectoryTally;
pub use totals::Totals;
