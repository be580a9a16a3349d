// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity Signups: manage student rosters for school activities.
//!
//! This crate provides the HTTP API for listing activities and signing
//! students up for them or removing them, plus a small static front-end.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::ActivityStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub activities: ActivityStore,
}
