//! Library entry for questlist exposing the engine for the binary and integration tests.

pub mod app;
pub mod catalog;
pub mod config;
pub mod logic;
pub mod state;
pub mod surface;
