//! # Credential Countdown
//!
//! A once-per-second ticker publishing the whole seconds left before a
//! credential expires. It only reads: nothing in the store is changed when
//! the countdown hits zero.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::debug;

use crate::domain::models::credential::remaining_seconds;

const TICK: Duration = Duration::from_secs(1);

/// Ticker bound to one expiry timestamp.
///
/// Must be created inside a tokio runtime. The ticking task is aborted when
/// the countdown is dropped or retargeted.
pub struct CredentialCountdown {
    sender: Arc<watch::Sender<u64>>,
    handle: JoinHandle<()>,
}

impl CredentialCountdown {
    pub fn start(expires_at: DateTime<Utc>) -> Self {
        let (sender, _) = watch::channel(remaining_seconds(expires_at, Utc::now()));
        let sender = Arc::new(sender);
        let handle = spawn_ticker(sender.clone(), expires_at);
        Self { sender, handle }
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.sender.subscribe()
    }

    /// Seconds left as of the last tick
    pub fn remaining(&self) -> u64 {
        *self.sender.borrow()
    }

    /// True once the countdown reached zero (or was cancelled)
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Restart the countdown against a new expiry, e.g. after the credential
    /// was regenerated
    pub fn retarget(&mut self, expires_at: DateTime<Utc>) {
        self.handle.abort();
        self.sender.send_replace(remaining_seconds(expires_at, Utc::now()));
        self.handle = spawn_ticker(self.sender.clone(), expires_at);
    }
}

impl Drop for CredentialCountdown {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn spawn_ticker(sender: Arc<watch::Sender<u64>>, expires_at: DateTime<Utc>) -> JoinHandle<()> {
    // Anchor the wall-clock expiry to the runtime clock once, then tick on it.
    let left = (expires_at - Utc::now()).to_std().unwrap_or(Duration::ZERO);
    let deadline = Instant::now() + left;

    tokio::spawn(async move {
        let mut interval = time::interval(TICK);
        loop {
            interval.tick().await;
            let remaining = deadline.saturating_duration_since(Instant::now()).as_secs();
            sender.send_replace(remaining);
            if remaining == 0 {
                debug!("Credential countdown reached zero");
                break;
            }
        }
    })
}
