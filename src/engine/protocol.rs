//! Protocol trait driven by the engine worker thread.

/// Result of processing one command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    /// Keep reading commands
    Continue,
    /// Leave the read loop
    Quit,
}

/// A line protocol that owns its game state and writes its own responses.
pub trait Protocol {
    /// Process a single command line and return the result
    fn process_command(&mut self, line: &str) -> CommandResult;

    /// Block until the next command line is available
    fn next_line(&mut self) -> Option<String>;

    /// Get the protocol name (for logging/debugging)
    fn name(&self) -> &'static str;

    /// Run the read-dispatch loop until a command asks to quit
    fn run(&mut self) {
        while let Some(line) = self.next_line() {
            if self.process_command(&line) == CommandResult::Quit {
                break;
            }
        }
    }
}
