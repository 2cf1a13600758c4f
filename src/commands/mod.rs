//! CLI command handlers

pub mod check;
pub mod classify;
pub mod run;
