//! HTTP facade over StatsBomb football data.
//!
//! Competitions, seasons and matches are read from a provider on every
//! request, reshaped into JSON records and served through axum.

pub mod api;
pub mod config;
pub mod models;
pub mod monitoring;
pub mod provider;
pub mod service;
