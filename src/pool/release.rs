//! # Delayed Release
//!
//! Fire-and-forget timers on the tokio runtime.
//!
//! Scheduled callbacks cannot be cancelled and report nothing back: once
//! scheduled they run exactly once after the delay, unless the runtime
//! shuts down first.

use super::ObjectPool;
use log::{trace, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Runs `callback` once on the current tokio runtime after `delay`.
///
/// Never blocks the caller. Outside a runtime the callback is dropped
/// with a warning.
pub fn run_after<F>(delay: Duration, callback: F)
where
    F: FnOnce() + Send + 'static,
{
    match Handle::try_current() {
        Ok(runtime) => {
            runtime.spawn(async move {
                tokio::time::sleep(delay).await;
                callback();
            });
        }
        Err(_) => {
            warn!(
                "No async runtime available, dropping callback scheduled in {:?}",
                delay
            );
        }
    }
}

/// Releases `element` back into `pool` once `delay` has passed.
///
/// A failing release is swallowed.
///
/// # Examples
///
/// ```
/// use lrs_toolkit::{wait_for_release, Pool};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// # tokio_test::block_on(async {
/// let pool = Arc::new(Pool::new(|| [0.0_f32; 3], 16));
/// let particle = pool.get();
///
/// wait_for_release(pool.clone(), particle, Duration::from_millis(5));
/// tokio::time::sleep(Duration::from_millis(50)).await;
/// assert_eq!(pool.count_inactive(), 1);
/// # });
/// ```
pub fn wait_for_release<P, T>(pool: Arc<P>, element: T, delay: Duration)
where
    P: ObjectPool<T> + Send + Sync + ?Sized + 'static,
    T: Send + 'static,
{
    run_after(delay, move || {
        if let Err(e) = pool.release(element) {
            trace!("Delayed release failed: {}", e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Pool, ToolkitError, ToolkitResult};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct RejectingPool {
        attempts: AtomicUsize,
    }

    impl ObjectPool<u32> for RejectingPool {
        fn release(&self, _element: u32) -> ToolkitResult<()> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(ToolkitError::PoolRelease("rejected".to_string()))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_release_fires_after_delay() {
        let pool = Arc::new(Pool::new(|| 7_u32, 8));
        let element = pool.get();

        wait_for_release(pool.clone(), element, Duration::from_millis(500));

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert_eq!(pool.count_inactive(), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(pool.count_inactive(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_release_is_swallowed() {
        let pool = Arc::new(RejectingPool {
            attempts: AtomicUsize::new(0),
        });

        wait_for_release(pool.clone(), 3, Duration::from_secs(1));
        tokio::time::sleep(Duration::from_secs(5)).await;
        tokio::task::yield_now().await;

        assert_eq!(pool.attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_after_does_not_block_caller() {
        let fired = Arc::new(AtomicUsize::new(0));
        let flag = fired.clone();

        run_after(Duration::from_secs(60), move || {
            flag.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_secs(61)).await;
        tokio::task::yield_now().await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_run_after_without_runtime_drops_callback() {
        let fired = Arc::new(AtomicUsize::new(0));
        let flag = fired.clone();

        run_after(Duration::ZERO, move || {
            flag.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_release_on_block_on_runtime() {
        let pool = Arc::new(Pool::new(String::new, 4));
        let element = pool.get();

        tokio_test::block_on(async {
            wait_for_release(pool.clone(), element, Duration::from_millis(10));
            tokio::time::sleep(Duration::from_millis(100)).await;
        });

        assert_eq!(pool.count_inactive(), 1);
        assert_eq!(pool.count_active(), 0);
    }
}
