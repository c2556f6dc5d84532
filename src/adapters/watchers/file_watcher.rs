// SPDX-License-Identifier: MIT OR Apache-2.0

//! File system watcher for configuration document changes.
//!
//! This module provides a watcher that monitors a configuration file for
//! external modifications and triggers reload callbacks when they happen.

use crate::domain::{ConfigError, Result};
use crate::ports::{ChangeCallback, ConfigWatcher};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// File system watcher for a configuration document.
///
/// The watcher monitors the document's parent directory (watching files
/// directly is unreliable on some platforms) and invokes the callback with
/// the document path when it changes. Rapid successive events are debounced.
///
/// Pair this with [`ConfigDocument::reload`](crate::document::ConfigDocument::reload)
/// behind a lock to keep a document current; see `demos/dynamic_reload.rs`.
///
/// # Examples
///
/// ```rust,no_run
/// use config_api::adapters::FileWatcher;
/// use config_api::ports::ConfigWatcher;
/// use std::sync::Arc;
///
/// # fn main() -> config_api::domain::Result<()> {
/// let mut watcher = FileWatcher::new("/path/to/config.yaml", None)?;
///
/// watcher.watch(Arc::new(|path| {
///     println!("Configuration changed: {}", path.display());
/// }))?;
///
/// // Later, stop watching
/// watcher.stop()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FileWatcher {
    /// Path of the document being watched
    file_path: PathBuf,
    /// Debounce delay (default 500ms)
    debounce_delay: Duration,
    /// Internal watcher, present while running
    watcher: Option<RecommendedWatcher>,
    /// Thread handle for the event loop
    watch_thread: Option<JoinHandle<()>>,
    /// Stop signal sender
    stop_tx: Option<Sender<()>>,
}

impl FileWatcher {
    /// Creates a new watcher for the given document path.
    ///
    /// The file must already exist. `debounce_delay` defaults to 500ms.
    pub fn new(path: impl AsRef<Path>, debounce_delay: Option<Duration>) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();

        if !file_path.exists() {
            return Err(ConfigError::WatcherError {
                message: format!("File does not exist: {}", file_path.display()),
                source: None,
            });
        }

        Ok(Self {
            file_path,
            debounce_delay: debounce_delay.unwrap_or(Duration::from_millis(500)),
            watcher: None,
            watch_thread: None,
            stop_tx: None,
        })
    }
}

impl ConfigWatcher for FileWatcher {
    fn watch(&mut self, callback: ChangeCallback) -> Result<()> {
        if self.watcher.is_some() {
            return Err(ConfigError::WatcherError {
                message: "Watcher is already running".to_string(),
                source: None,
            });
        }

        let (event_tx, event_rx) = channel();
        let (stop_tx, stop_rx) = channel::<()>();

        let mut watcher =
            RecommendedWatcher::new(event_tx, notify::Config::default()).map_err(|e| {
                ConfigError::WatcherError {
                    message: format!("Failed to create file watcher: {}", e),
                    source: Some(Box::new(e)),
                }
            })?;

        // Watch the parent directory rather than the file itself; atomic
        // saves replace the file and would otherwise drop the watch.
        let watch_path = self
            .file_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| ConfigError::WatcherError {
                message: "Failed to get parent directory".to_string(),
                source: None,
            })?
            .to_path_buf();

        watcher
            .watch(&watch_path, RecursiveMode::NonRecursive)
            .map_err(|e| ConfigError::WatcherError {
                message: format!("Failed to start watching: {}", e),
                source: Some(Box::new(e)),
            })?;

        self.watcher = Some(watcher);
        self.stop_tx = Some(stop_tx);

        let file_path = self.file_path.clone();
        let debounce_delay = self.debounce_delay;

        let watch_thread = thread::spawn(move || {
            let mut last_event_time: Option<Instant> = None;

            loop {
                if stop_rx.try_recv().is_ok() {
                    break;
                }

                if let Ok(Ok(event)) = event_rx.recv_timeout(Duration::from_millis(100)) {
                    if !is_relevant(&event, &file_path) {
                        continue;
                    }

                    let now = Instant::now();
                    let should_trigger = last_event_time
                        .map(|last| now.duration_since(last) >= debounce_delay)
                        .unwrap_or(true);

                    if should_trigger {
                        last_event_time = Some(now);
                        callback(file_path.clone());
                    }
                }
            }
        });

        self.watch_thread = Some(watch_thread);

        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }

        if let Some(handle) = self.watch_thread.take() {
            handle.join().map_err(|_| ConfigError::WatcherError {
                message: "Failed to join watcher thread".to_string(),
                source: None,
            })?;
        }

        self.watcher = None;

        Ok(())
    }
}

fn is_relevant(event: &Event, file_path: &Path) -> bool {
    event.paths.iter().any(|p| p == file_path)
}

impl Drop for FileWatcher {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}
