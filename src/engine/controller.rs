//! Host-side handle owning the protocol worker thread.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{info, warn};

use super::{Config, MoveSelector, Protocol, RandomSelector};
use crate::gomocup::GomocupSession;
use crate::sync::{BlockingChannel, SearchFlag};

/// Name of the worker thread.
pub const WORKER_THREAD_NAME: &str = "gomoku-brain";

/// Line that stops the worker.
const END_COMMAND: &str = "END";

/// A running brain: two line channels and the worker that serves them.
///
/// Dropping the engine sends `END` and waits for the worker to finish.
pub struct Engine {
    input: Arc<BlockingChannel<String>>,
    output: Arc<BlockingChannel<String>>,
    search: SearchFlag,
    worker: Option<JoinHandle<()>>,
}

impl Engine {
    /// Start a brain with the default configuration and a random move selector.
    pub fn new() -> io::Result<Self> {
        Self::spawn(Config::default(), RandomSelector::default())
    }

    /// Start a brain that picks its moves with `selector`.
    pub fn with_selector<S: MoveSelector + 'static>(selector: S) -> io::Result<Self> {
        Self::spawn(Config::default(), selector)
    }

    /// Start a brain with an initial `config` and `selector`.
    pub fn spawn<S: MoveSelector + 'static>(config: Config, selector: S) -> io::Result<Self> {
        let input = Arc::new(BlockingChannel::new());
        let output = Arc::new(BlockingChannel::new());
        let search = SearchFlag::new();

        let mut session = GomocupSession::new(Arc::clone(&input), Arc::clone(&output))
            .with_config(config)
            .with_selector(Box::new(selector))
            .with_search_flag(search.clone());

        let worker = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || {
                info!("{} worker started", session.name());
                session.run();
                info!("{} worker stopped", session.name());
            })?;

        Ok(Engine {
            input,
            output,
            search,
            worker: Some(worker),
        })
    }

    /// Queue newline-separated commands. Empty lines are dropped.
    ///
    /// Returns the number of lines queued.
    pub fn push_commands(&self, text: &str) -> usize {
        self.input.push_lines(text)
    }

    /// Next response line, waiting up to `timeout`. A zero timeout waits
    /// until a line arrives.
    pub fn read_output(&self, timeout: Duration) -> Option<String> {
        self.output.pop(timeout)
    }

    /// Next response line if one is queued.
    pub fn try_read_output(&self) -> Option<String> {
        self.output.try_pop()
    }

    #[must_use]
    pub fn is_output_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Returns true while commands wait to be processed.
    #[must_use]
    pub fn has_pending_input(&self) -> bool {
        !self.input.is_empty()
    }

    #[must_use]
    pub fn is_in_search(&self) -> bool {
        self.search.is_searching()
    }

    /// Mark the worker busy. While set only `END` and `YXSTOP` are served.
    pub fn set_in_search(&self, searching: bool) {
        self.search.set(searching);
    }

    /// Returns true once the worker has left its read loop.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.worker.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        if let Some(worker) = self.worker.take() {
            self.input.push(END_COMMAND.to_string());
            if worker.join().is_err() {
                warn!("{WORKER_THREAD_NAME} worker panicked");
            }
        }
    }
}
