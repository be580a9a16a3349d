// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity catalog loading.
//!
//! The catalog defines which activities exist and who is enrolled when the
//! server starts. It never changes afterwards; rosters live in the store.

use crate::models::ActivityDirectory;
use std::fs;
use std::path::Path;

/// Catalog compiled into the binary, used when no file is configured.
const BUILTIN_CATALOG: &str = include_str!("../../data/activities.json");

/// Service for loading the seed activity catalog.
#[derive(Debug, Default, Clone)]
pub struct CatalogService {
    activities: ActivityDirectory,
}

impl CatalogService {
    /// Load the built-in catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::load_from_json(BUILTIN_CATALOG)
    }

    /// Load the catalog from `path`, or the built-in one if no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::builtin(),
        }
    }

    /// Load a catalog from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load a catalog from a JSON string.
    ///
    /// Rosters that list the same email twice are rejected.
    pub fn load_from_json(json_data: &str) -> Result<Self, CatalogError> {
        let activities: ActivityDirectory = serde_json::from_str(json_data)
            .map_err(|e| CatalogError::ParseError(e.to_string()))?;

        for (name, activity) in activities.iter() {
            if let Some(email) = activity.duplicate_participant() {
                return Err(CatalogError::DuplicateParticipant {
                    activity: name.to_string(),
                    email: email.to_string(),
                });
            }
        }

        tracing::info!(count = activities.len(), "Loaded activity catalog");
        Ok(Self { activities })
    }

    /// Get the loaded activities.
    pub fn activities(&self) -> &ActivityDirectory {
        &self.activities
    }

    /// Consume the service, yielding the activities.
    pub fn into_activities(self) -> ActivityDirectory {
        self.activities
    }
}

/// Errors from catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse catalog: {0}")]
    ParseError(String),

    #[error("Activity {activity:?} lists {email} more than once")]
    DuplicateParticipant { activity: String, email: String },
}
