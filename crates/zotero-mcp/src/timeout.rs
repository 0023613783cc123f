//! Wall-clock deadline enforcement for blocking calls.
//!
//! Zotero lookups go through blocking client code; [`run_with_deadline`]
//! bounds how long a caller waits for one. Enforcement is best-effort:
//! the deadline aborts the caller's wait, not the worker's execution. A
//! worker that misses its deadline keeps running on the blocking pool
//! until it finishes naturally.

use std::time::Duration;

use crate::error::{Error, Result};

/// Run a blocking closure, waiting at most `deadline` for its result.
///
/// The closure runs on the runtime's blocking pool. Within the deadline,
/// its `Ok` value or `Err` is returned unchanged; a panic inside the
/// closure is resumed on the caller thread. Once the deadline elapses the
/// worker is abandoned, not cancelled, and [`Error::Timeout`] names the
/// function and the configured duration.
///
/// # Errors
///
/// Returns [`Error::Timeout`] when the deadline elapses first, or the
/// closure's own error when it fails in time.
///
/// # Panics
///
/// Panics if the closure panics.
pub async fn run_with_deadline<T, F>(function: &str, deadline: Duration, work: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    let worker = tokio::task::spawn_blocking(work);

    match tokio::time::timeout(deadline, worker).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_err)) => {
            if join_err.is_panic() {
                std::panic::resume_unwind(join_err.into_panic());
            }
            Err(Error::worker_lost(function))
        }
        Err(_elapsed) => {
            // Dropping the JoinHandle detaches the worker; it keeps
            // running on the blocking pool until it finishes on its own.
            tracing::warn!(function, ?deadline, "deadline elapsed, abandoning worker");
            Err(Error::timeout(function, deadline))
        }
    }
}
