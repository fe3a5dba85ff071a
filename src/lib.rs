// Library root: re-exports all modules so integration tests and external
// consumers can access the crate's public API.

pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod model;
pub mod tables;
pub mod tui;
pub mod web;
