//! Route handlers

pub mod dashboard;
pub mod theme;
