//! CLI Commands

pub mod check;
pub mod classify;
pub mod score;
