// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory activity store.
//!
//! The store owns the activity directory for the lifetime of the process.
//! Each operation holds the lock for its whole read-check-write sequence, so
//! concurrent requests never interleave within a single signup or removal.

use crate::error::AppError;
use crate::models::{Activity, ActivityDirectory};
use tokio::sync::RwLock;

/// Activity directory with signup and unregister operations.
#[derive(Debug, Default)]
pub struct ActivityStore {
    directory: RwLock<ActivityDirectory>,
}

impl ActivityStore {
    /// Create a store seeded with `activities`.
    pub fn new(activities: ActivityDirectory) -> Self {
        Self {
            directory: RwLock::new(activities),
        }
    }

    /// Snapshot of every activity, in catalog order.
    pub async fn list(&self) -> ActivityDirectory {
        self.directory.read().await.clone()
    }

    /// Get a single activity by name.
    pub async fn get(&self, name: &str) -> Option<Activity> {
        self.directory.read().await.get(name).cloned()
    }

    /// Add `email` to the roster of `activity_name`.
    ///
    /// Capacity is advisory and not enforced here.
    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<(), AppError> {
        let mut directory = self.directory.write().await;
        let activity = directory
            .get_mut(activity_name)
            .ok_or_else(AppError::activity_not_found)?;

        if activity.has_participant(email) {
            tracing::debug!(activity = activity_name, email, "Duplicate signup rejected");
            return Err(AppError::already_signed_up());
        }

        activity.participants.push(email.to_string());
        tracing::info!(
            activity = activity_name,
            email,
            spots_left = activity.spots_left(),
            "Participant signed up"
        );
        Ok(())
    }

    /// Remove `email` from the roster of `activity_name`.
    pub async fn unregister(&self, activity_name: &str, email: &str) -> Result<(), AppError> {
        let mut directory = self.directory.write().await;
        let activity = directory
            .get_mut(activity_name)
            .ok_or_else(AppError::activity_not_found)?;

        let Some(index) = activity.participants.iter().position(|p| p == email) else {
            tracing::debug!(activity = activity_name, email, "Unregister of absent participant");
            return Err(AppError::participant_not_found());
        };

        activity.participants.remove(index);
        tracing::info!(activity = activity_name, email, "Participant unregistered");
        Ok(())
    }
}
