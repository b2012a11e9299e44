//! Vocabulary hot reload.
//!
//! # Design Decisions
//! - Only the `[resolver]` section is published; listener and observability
//!   changes need a restart
//! - A reload that leaves the resolver section untouched publishes nothing
//! - An empty file is a write in progress, not a request to clear the
//!   vocabulary
//! - A file that fails to parse or validate keeps the current vocabulary

use std::fs;
use std::path::{Path, PathBuf};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::watch;

use crate::config::loader::{parse_config, ConfigError};
use crate::config::schema::ResolverConfig;

/// Outcome of re-reading the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reload {
    /// A different resolver section was published.
    Published,
    /// The resolver section matched the current one.
    Unchanged,
    /// The file was empty.
    Skipped,
}

/// Publishes the resolver section of a config file whenever it changes.
pub struct VocabularyWatcher {
    path: PathBuf,
    tx: watch::Sender<ResolverConfig>,
}

impl VocabularyWatcher {
    /// `current` is the resolver section already in service; the receiver
    /// starts out holding it.
    pub fn new(path: &Path, current: ResolverConfig) -> (Self, watch::Receiver<ResolverConfig>) {
        let (tx, rx) = watch::channel(current);
        let watcher = Self {
            path: path.to_path_buf(),
            tx,
        };
        (watcher, rx)
    }

    /// Re-read the file and publish its resolver section if it differs.
    pub fn reload(&self) -> Result<Reload, ConfigError> {
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Reload::Skipped);
        }
        let resolver = parse_config(&content)?.resolver;

        let published = self.tx.send_if_modified(|current| {
            if *current == resolver {
                false
            } else {
                *current = resolver;
                true
            }
        });
        Ok(if published {
            Reload::Published
        } else {
            Reload::Unchanged
        })
    }

    /// Start watching the file. Reloads stop when the returned handle drops.
    pub fn spawn(self) -> Result<RecommendedWatcher, notify::Error> {
        let path = self.path.clone();
        let mut handle = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let event = match res {
                Ok(event) => event,
                Err(e) => {
                    tracing::error!(error = %e, "Config watch error");
                    return;
                }
            };
            if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                return;
            }
            match self.reload() {
                Ok(Reload::Published) => tracing::info!(path = ?self.path, "Resolver config reloaded"),
                Ok(outcome) => tracing::debug!(path = ?self.path, ?outcome, "Resolver config not republished"),
                Err(e) => tracing::error!(path = ?self.path, error = %e, "Rejected config reload"),
            }
        })?;

        handle.watch(&path, RecursiveMode::NonRecursive)?;
        tracing::info!(path = ?path, "Watching config file");
        Ok(handle)
    }
}
