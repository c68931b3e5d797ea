use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A writer panicked while holding the lock
    #[error("identity store is unavailable: {0} lock poisoned")]
    LockPoisoned(&'static str),
}
