//! Engine handle, session configuration and move selection.
//!
//! [`Engine`] runs a Gomocup session on its own thread. The host talks to it
//! only through text lines; board and configuration stay on the worker.

mod config;
mod controller;
mod protocol;
mod selector;
pub mod time;

pub use config::{Config, DEFAULT_MAX_DEPTH, DEFAULT_MAX_MEMORY};
pub use controller::{Engine, WORKER_THREAD_NAME};
pub use protocol::{CommandResult, Protocol};
pub use selector::{MoveSelector, RandomSelector, DEFAULT_SEED};
pub use time::{SearchLimits, TimeControl};
