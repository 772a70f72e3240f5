//! # Pool Module
//!
//! Object pooling and delayed release back into a pool.

pub mod release;

pub use release::*;

use crate::{ToolkitError, ToolkitResult};
use std::sync::{Mutex, PoisonError};

/// Anything elements can be returned to.
pub trait ObjectPool<T> {
    /// Returns `element` to the pool.
    fn release(&self, element: T) -> ToolkitResult<()>;
}

struct PoolState<T> {
    inactive: Vec<T>,
    /// Elements created and not yet dropped, active or inactive
    count_all: usize,
}

/// A stack-based pool that creates elements on demand.
///
/// Released elements are kept for reuse up to `max_size`; beyond that
/// they are dropped. The pool is safe to share between threads.
///
/// # Examples
///
/// ```
/// use lrs_toolkit::{ObjectPool, Pool};
///
/// let pool = Pool::new(|| vec![0u8; 64], 8);
/// let buffer = pool.get();
/// assert_eq!(pool.count_active(), 1);
///
/// pool.release(buffer).unwrap();
/// assert_eq!(pool.count_inactive(), 1);
/// ```
pub struct Pool<T> {
    state: Mutex<PoolState<T>>,
    create: Box<dyn Fn() -> T + Send + Sync>,
    max_size: usize,
}

impl<T> Pool<T> {
    /// Creates an empty pool.
    pub fn new(create: impl Fn() -> T + Send + Sync + 'static, max_size: usize) -> Self {
        Self {
            state: Mutex::new(PoolState {
                inactive: Vec::new(),
                count_all: 0,
            }),
            create: Box::new(create),
            max_size,
        }
    }

    /// Takes an element from the pool, creating one if none is idle.
    pub fn get(&self) -> T {
        let mut state = self.lock();
        match state.inactive.pop() {
            Some(element) => element,
            None => {
                state.count_all += 1;
                (self.create)()
            }
        }
    }

    /// Number of idle elements kept for reuse.
    pub fn count_inactive(&self) -> usize {
        self.lock().inactive.len()
    }

    /// Number of elements handed out and not yet released.
    pub fn count_active(&self) -> usize {
        let state = self.lock();
        state.count_all - state.inactive.len()
    }

    /// Number of live elements owned by or handed out from this pool.
    pub fn count_all(&self) -> usize {
        self.lock().count_all
    }

    /// Maximum number of idle elements kept.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Drops every idle element.
    pub fn clear(&self) {
        let mut state = self.lock();
        let dropped = state.inactive.len();
        state.inactive.clear();
        state.count_all -= dropped;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, PoolState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> ObjectPool<T> for Pool<T> {
    fn release(&self, element: T) -> ToolkitResult<()> {
        let mut state = self.lock();
        if state.count_all == state.inactive.len() {
            return Err(ToolkitError::PoolRelease(
                "released more elements than were taken".to_string(),
            ));
        }
        if state.inactive.len() < self.max_size {
            state.inactive.push(element);
        } else {
            state.count_all -= 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_get_reuses_released_elements() {
        let created = Arc::new(AtomicUsize::new(0));
        let counter = created.clone();
        let pool = Pool::new(
            move || counter.fetch_add(1, Ordering::SeqCst),
            4,
        );

        let first = pool.get();
        pool.release(first).unwrap();
        let again = pool.get();

        assert_eq!(again, first);
        assert_eq!(created.load(Ordering::SeqCst), 1);
        assert_eq!(pool.count_all(), 1);
    }

    #[test]
    fn test_release_beyond_max_size_drops() {
        let pool = Pool::new(String::new, 1);
        let a = pool.get();
        let b = pool.get();
        assert_eq!(pool.count_all(), 2);

        pool.release(a).unwrap();
        pool.release(b).unwrap();

        assert_eq!(pool.count_inactive(), 1);
        assert_eq!(pool.count_all(), 1);
        assert_eq!(pool.count_active(), 0);
    }

    #[test]
    fn test_over_release_is_an_error() {
        let pool = Pool::new(|| 0_u32, 4);
        let result = pool.release(5);
        assert!(matches!(result, Err(ToolkitError::PoolRelease(_))));
        assert_eq!(pool.count_inactive(), 0);
    }

    #[test]
    fn test_clear_drops_idle_elements() {
        let pool = Pool::new(|| 1_u8, 4);
        let held = pool.get();
        let idle = pool.get();
        pool.release(idle).unwrap();

        pool.clear();
        assert_eq!(pool.count_inactive(), 0);
        assert_eq!(pool.count_all(), 1);

        pool.release(held).unwrap();
        assert_eq!(pool.count_inactive(), 1);
    }
}
