//! Chirpy - a short-message service.
//!
//! Users register, log in with a short-lived access token and a long-lived
//! refresh token, and post chirps of up to 140 characters. Everything is
//! persisted in a single JSON document guarded by an exclusive
//! read-modify-write section.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
