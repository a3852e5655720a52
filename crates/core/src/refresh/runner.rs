//! Refresh loop implementation.
//!
//! States: updating (fetch + replace), idle (sleeping one interval), stopped.
//! Shutdown is checked before each fetch, while a fetch is in flight (the
//! request is dropped), and during the sleep. The catalog replace itself is
//! synchronous and is never interrupted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use tokio::sync::{broadcast, Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use super::types::{RefreshError, RefreshStatus};
use crate::catalog::{CatalogStore, Entry};
use crate::feed::{FeedClient, FeedError};
use crate::metrics::{REFRESH_CYCLES, REFRESH_DURATION};

/// Periodically refreshes a [`CatalogStore`] from a [`FeedClient`].
pub struct Refresher {
    worker: Worker,
    running: Arc<AtomicBool>,
    shutdown_tx: broadcast::Sender<()>,
    task: Mutex<Option<JoinHandle<()>>>,
}

/// The part of the refresher that the background task owns a copy of.
#[derive(Clone)]
struct Worker {
    feed: Arc<dyn FeedClient>,
    store: Arc<CatalogStore>,
    interval: Duration,
    status: Arc<RwLock<RefreshStatus>>,
}

impl Refresher {
    /// Create a new refresher. Nothing runs until [`Refresher::start`].
    pub fn new(feed: Arc<dyn FeedClient>, store: Arc<CatalogStore>, interval: Duration) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        let status = RefreshStatus {
            interval_secs: interval.as_secs(),
            ..RefreshStatus::default()
        };

        Self {
            worker: Worker {
                feed,
                store,
                interval,
                status: Arc::new(RwLock::new(status)),
            },
            running: Arc::new(AtomicBool::new(false)),
            shutdown_tx,
            task: Mutex::new(None),
        }
    }

    /// Run a single fetch-and-replace cycle now.
    ///
    /// Returns the number of entries in the published catalog.
    pub async fn refresh_once(&self) -> Result<usize, RefreshError> {
        let start = Instant::now();
        let fetched = self.worker.feed.get_books().await;
        self.worker.complete_cycle(fetched, start).await
    }

    /// Start the background loop. The first cycle runs immediately.
    pub async fn start(&self) {
        if self.running.swap(true, Ordering::SeqCst) {
            warn!("Refresher already running");
            return;
        }

        info!(
            "Starting catalog refresher (feed: {}, interval: {:?})",
            self.worker.feed.name(),
            self.worker.interval
        );

        let worker = self.worker.clone();
        let running = Arc::clone(&self.running);
        let shutdown_rx = self.shutdown_tx.subscribe();
        let handle = tokio::spawn(worker.run(running, shutdown_rx));

        *self.task.lock().await = Some(handle);
    }

    /// Stop the background loop and wait for it to exit.
    ///
    /// A fetch in flight is abandoned; a replace in progress completes first.
    pub async fn stop(&self) {
        if !self.running.swap(false, Ordering::SeqCst) {
            warn!("Refresher not running");
            return;
        }

        info!("Stopping catalog refresher");

        // Signal shutdown to the loop
        let _ = self.shutdown_tx.send(());

        if let Some(handle) = self.task.lock().await.take() {
            if let Err(e) = handle.await {
                error!("Refresh task ended abnormally: {}", e);
            }
        }

        info!("Catalog refresher stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Current refresh status.
    pub async fn status(&self) -> RefreshStatus {
        let mut status = self.worker.status.read().await.clone();
        status.running = self.is_running();
        status
    }
}

impl Worker {
    async fn run(self, running: Arc<AtomicBool>, mut shutdown_rx: broadcast::Receiver<()>) {
        info!("Refresh loop started");
        loop {
            if !running.load(Ordering::Relaxed) {
                break;
            }

            let start = Instant::now();
            let fetched = tokio::select! {
                _ = shutdown_rx.recv() => {
                    info!("Refresh loop received shutdown signal during fetch");
                    break;
                }
                fetched = self.feed.get_books() => fetched,
            };

            if let Err(e) = self.complete_cycle(fetched, start).await {
                warn!("Catalog refresh failed, keeping previous catalog: {}", e);
            }

            debug!("Refresh cycle done, sleeping for {:?}", self.interval);
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    info!("Refresh loop received shutdown signal");
                    break;
                }
                _ = tokio::time::sleep(self.interval) => {}
            }
        }
        info!("Refresh loop exited");
    }

    /// Publish a fetch result and record the outcome.
    async fn complete_cycle(
        &self,
        fetched: Result<Vec<Entry>, FeedError>,
        start: Instant,
    ) -> Result<usize, RefreshError> {
        let result = match fetched {
            Ok(entries) => self
                .store
                .replace_all(entries)
                .map(|()| self.store.len())
                .map_err(RefreshError::from),
            Err(e) => Err(RefreshError::from(e)),
        };

        let elapsed = start.elapsed();
        let label = match &result {
            Ok(_) => "success",
            Err(e) => e.kind(),
        };
        REFRESH_CYCLES.with_label_values(&[label]).inc();
        REFRESH_DURATION
            .with_label_values(&[label])
            .observe(elapsed.as_secs_f64());

        let mut status = self.status.write().await;
        status.cycles += 1;
        match &result {
            Ok(count) => {
                debug!("Refresh published {} entries in {:?}", count, elapsed);
                status.last_entry_count = *count;
                status.last_success_at = Some(Utc::now());
            }
            Err(e) => {
                status.failures += 1;
                status.last_failure_at = Some(Utc::now());
                status.last_error = Some(e.to_string());
            }
        }

        result
    }
}
