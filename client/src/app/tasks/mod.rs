//! # Async Tasks
//!
//! Background tasks that call the journal API and report back through the
//! event channel. Tasks never touch [`crate::app::AppState`] directly.

pub mod auth;
pub mod entries;

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tokio::task::JoinHandle;

static TASK_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Spawn a task with lifecycle logging
pub(crate) fn spawn_tracked<F>(name: &'static str, future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    let task_id = TASK_COUNTER.fetch_add(1, Ordering::Relaxed);
    let start = Instant::now();
    tracing::debug!(task = %name, task_id, "Task spawned");

    tokio::spawn(async move {
        let result = future.await;
        tracing::debug!(
            task = %name,
            task_id,
            duration_ms = start.elapsed().as_millis(),
            "Task completed"
        );
        result
    })
}
