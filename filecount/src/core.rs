// src/core.rs
pub mod error;
pub mod walker;
