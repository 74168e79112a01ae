//! Synchronization primitives shared by the host and the protocol worker.
//!
//! [`BlockingChannel`] carries command and response lines between threads.
//! [`SearchFlag`] marks the worker as busy computing a move.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex, MutexGuard};

/// A FIFO queue that many threads may push to and pop from.
///
/// Each element is handed to exactly one consumer. Popping waits for data
/// up to a timeout; a zero timeout waits indefinitely.
#[derive(Debug)]
pub struct BlockingChannel<T> {
    queue: Mutex<VecDeque<T>>,
    ready: Condvar,
}

impl<T> BlockingChannel<T> {
    #[must_use]
    pub fn new() -> Self {
        BlockingChannel {
            queue: Mutex::new(VecDeque::new()),
            ready: Condvar::new(),
        }
    }

    /// Append `item` and wake one waiting consumer.
    pub fn push(&self, item: T) {
        self.queue.lock().push_back(item);
        self.ready.notify_one();
    }

    /// Remove the front element, waiting up to `timeout` for one to arrive.
    ///
    /// `Duration::ZERO` waits forever. Returns `None` on timeout.
    pub fn pop(&self, timeout: Duration) -> Option<T> {
        let mut queue = self.queue.lock();
        self.wait_for_data(&mut queue, timeout);
        queue.pop_front()
    }

    fn wait_for_data(&self, queue: &mut MutexGuard<'_, VecDeque<T>>, timeout: Duration) {
        if !queue.is_empty() {
            return;
        }
        // Zero, or too far out to be represented, waits forever.
        let deadline = Some(timeout)
            .filter(|t| !t.is_zero())
            .and_then(|t| Instant::now().checked_add(t));
        let Some(deadline) = deadline else {
            while queue.is_empty() {
                self.ready.wait(queue);
            }
            return;
        };
        while queue.is_empty() {
            if self.ready.wait_until(queue, deadline).timed_out() {
                break;
            }
        }
    }

    /// Remove the front element without waiting.
    pub fn try_pop(&self) -> Option<T> {
        self.queue.lock().pop_front()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    /// Drop every queued element.
    pub fn clear(&self) {
        self.queue.lock().clear();
    }
}

impl<T> Default for BlockingChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> BlockingChannel<T> {
    /// Copy of the front element, waiting like [`BlockingChannel::pop`].
    pub fn peek(&self, timeout: Duration) -> Option<T> {
        let mut queue = self.queue.lock();
        self.wait_for_data(&mut queue, timeout);
        let front = queue.front().cloned();
        drop(queue);
        // The element stays queued, so pass the wakeup on.
        if front.is_some() {
            self.ready.notify_one();
        }
        front
    }
}

impl BlockingChannel<String> {
    /// Split `text` on line breaks and queue each non-empty line in order.
    ///
    /// Returns the number of lines queued.
    pub fn push_lines(&self, text: &str) -> usize {
        let mut queue = self.queue.lock();
        let before = queue.len();
        queue.extend(
            text.split('\n')
                .map(|line| line.trim_end_matches('\r'))
                .filter(|line| !line.is_empty())
                .map(str::to_owned),
        );
        let pushed = queue.len() - before;
        drop(queue);
        if pushed > 0 {
            self.ready.notify_all();
        }
        pushed
    }
}

/// Raised by the worker while its selector runs.
const WORKER_BIT: u8 = 1;
/// Raised by the host; only an explicit clear lowers it.
const HOST_BIT: u8 = 1 << 1;

/// A thread-safe flag raised while the worker is computing a move.
///
/// The worker and the host hold separate bits, so the worker finishing a
/// move never lowers a flag the host raised in the meantime.
#[derive(Clone, Debug, Default)]
pub struct SearchFlag(Arc<AtomicU8>);

impl SearchFlag {
    /// Create a new flag (initially idle).
    #[must_use]
    pub fn new() -> Self {
        SearchFlag(Arc::new(AtomicU8::new(0)))
    }

    #[inline]
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.0.load(Ordering::Acquire) != 0
    }

    /// Raise or lower the flag on behalf of the host.
    ///
    /// Lowering clears the worker's bit too, like [`SearchFlag::clear`].
    #[inline]
    pub fn set(&self, searching: bool) {
        if searching {
            self.0.fetch_or(HOST_BIT, Ordering::AcqRel);
        } else {
            self.clear();
        }
    }

    /// Lower the flag.
    #[inline]
    pub fn clear(&self) {
        self.0.store(0, Ordering::Release);
    }

    /// Mark the worker busy for the lifetime of the returned guard.
    #[must_use]
    pub fn begin_search(&self) -> SearchGuard<'_> {
        self.0.fetch_or(WORKER_BIT, Ordering::AcqRel);
        SearchGuard(self)
    }
}

/// Lowers the worker's bit of a [`SearchFlag`] when dropped.
#[derive(Debug)]
pub struct SearchGuard<'a>(&'a SearchFlag);

impl Drop for SearchGuard<'_> {
    fn drop(&mut self) {
        (self.0).0.fetch_and(!WORKER_BIT, Ordering::AcqRel);
    }
}
