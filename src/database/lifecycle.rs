// ABOUTME: Owned open/close slot for the process's single database handle
// ABOUTME: Connects lazily and idempotently, and closes exactly once on shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Database lifecycle
//!
//! A [`DatabaseLifecycle`] is created by whoever owns the process (the server
//! binary, or a test) and handed down explicitly. Each lifecycle holds at
//! most one open [`Database`], so independent lifecycles give independent
//! stores: two tests using separate lifecycles never share state.

use super::{Database, DatabaseResult};
use crate::config::DatabaseConfig;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Open/close slot for one [`Database`]
#[derive(Debug)]
pub struct DatabaseLifecycle {
    config: DatabaseConfig,
    instance: Mutex<Option<Database>>,
}

impl DatabaseLifecycle {
    /// Create an empty slot for the store described by `config`
    #[must_use]
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            instance: Mutex::new(None),
        }
    }

    /// Open the store, or return the already-open handle.
    ///
    /// Concurrent callers wait on the same slot, so only one handle is ever
    /// created per lifecycle.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened or migrated. The slot
    /// stays empty and a later call retries.
    pub async fn connect(&self) -> DatabaseResult<Database> {
        let mut slot = self.instance.lock().await;
        if let Some(db) = slot.as_ref() {
            debug!("Reusing open database handle");
            return Ok(db.clone());
        }

        let db = Database::connect(&self.config).await?;
        *slot = Some(db.clone());
        Ok(db)
    }

    /// Close the open handle, if any. A second call is a no-op.
    pub async fn close(&self) {
        let taken = self.instance.lock().await.take();
        match taken {
            Some(db) => {
                db.close().await;
                info!("Database lifecycle closed");
            }
            None => debug!("Database lifecycle already closed"),
        }
    }

    /// Whether a handle is currently open
    pub async fn is_connected(&self) -> bool {
        self.instance.lock().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_is_idempotent() {
        let lifecycle = DatabaseLifecycle::new(DatabaseConfig::in_memory());
        let first = lifecycle.connect().await.unwrap();
        let user = first.create_user("alice").await.unwrap();

        let second = lifecycle.connect().await.unwrap();
        let found = second.get_user(user.id).await.unwrap();
        assert_eq!(found, Some(user));
        assert!(lifecycle.is_connected().await);
    }

    #[tokio::test]
    async fn test_close_twice_is_noop() {
        let lifecycle = DatabaseLifecycle::new(DatabaseConfig::in_memory());
        let db = lifecycle.connect().await.unwrap();

        lifecycle.close().await;
        assert!(db.is_closed());
        assert!(!lifecycle.is_connected().await);

        lifecycle.close().await;
        assert!(!lifecycle.is_connected().await);
    }

    #[tokio::test]
    async fn test_separate_lifecycles_do_not_share_state() {
        let left = DatabaseLifecycle::new(DatabaseConfig::in_memory());
        let right = DatabaseLifecycle::new(DatabaseConfig::in_memory());

        left.connect().await.unwrap().create_user("alice").await.unwrap();
        let users = right.connect().await.unwrap().list_users().await.unwrap();
        assert!(users.is_empty());
    }
}
