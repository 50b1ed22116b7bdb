// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, PROMPT, execute, run};
pub use crate::core::error::FilesystemAccessError;
pub use crate::core::walker::{walk, walk_into, walk_with};
pub use crate::models::{DirectoryTally, Totals};
pub use crate::utils::{format_summary, read_root_path};
