//! Gomocup (piskvork) brain protocol.
//!
//! The manager drives the brain with one command per line:
//!
//! - `START 15` / `RESTART` set up the board, answered with `OK`
//! - `BEGIN` / `TURN x,y` ask for a move, answered with `x,y`
//! - `BOARD` ... `DONE` loads a whole position, one `x,y,who` per line
//! - `INFO key value` tunes limits, `END` closes the session
//!
//! Lines are trimmed and upper-cased before dispatch. Errors are answered
//! with a single `ERROR ...` line and never end the session.

pub mod command;
mod error;
pub mod info;
pub mod output;
pub mod parse;

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};

use crate::board::{Board, Move, Stone};
use crate::engine::{
    CommandResult, Config, MoveSelector, Protocol, RandomSelector, SearchLimits,
};
use crate::sync::{BlockingChannel, SearchFlag};

use command::{parse_command, GomocupCommand};
use output::{format_about, format_move, format_unknown, OK};
use parse::{parse_numbers, parse_pair, parse_triple, NUMBER_DELIMITERS};

pub use error::CommandError;

/// Stone the brain plays.
pub const OWN_STONE: Stone = Stone::Cross;

/// Stone the manager's opponent plays.
pub const OPPONENT_STONE: Stone = Stone::Nought;

/// Marker ending a `BOARD` block.
const DONE_MARKER: &str = "DONE";

/// Who owns a stone listed in a position block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    /// `who` 1 is the brain
    Board,
    /// `who` 1 is the opponent
    YxBoard,
}

impl BlockKind {
    fn stone_for(self, who: i64) -> Option<Stone> {
        let (first, second) = match self {
            BlockKind::Board => (OWN_STONE, OPPONENT_STONE),
            BlockKind::YxBoard => (OPPONENT_STONE, OWN_STONE),
        };
        match who {
            1 => Some(first),
            2 => Some(second),
            _ => None,
        }
    }
}

/// Worker-side session state: board, configuration and the two channels.
pub struct GomocupSession {
    board: Option<Board>,
    config: Config,
    input: Arc<BlockingChannel<String>>,
    output: Arc<BlockingChannel<String>>,
    search: SearchFlag,
    selector: Box<dyn MoveSelector>,
}

impl GomocupSession {
    /// Create a session reading `input` and answering on `output`.
    #[must_use]
    pub fn new(
        input: Arc<BlockingChannel<String>>,
        output: Arc<BlockingChannel<String>>,
    ) -> Self {
        GomocupSession {
            board: None,
            config: Config::default(),
            input,
            output,
            search: SearchFlag::new(),
            selector: Box::new(RandomSelector::default()),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_selector(mut self, selector: Box<dyn MoveSelector>) -> Self {
        self.selector = selector;
        self
    }

    /// Share `flag` with the host so it can put the session in search mode.
    #[must_use]
    pub fn with_search_flag(mut self, flag: SearchFlag) -> Self {
        self.search = flag;
        self
    }

    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn in_search(&self) -> bool {
        self.search.is_searching()
    }

    pub fn set_in_search(&mut self, searching: bool) {
        self.search.set(searching);
    }

    fn respond(&self, line: impl Into<String>) {
        let line = line.into();
        debug!(">> {line}");
        self.output.push(line);
    }

    fn board_mut(&mut self) -> Result<&mut Board, CommandError> {
        self.board.as_mut().ok_or(CommandError::NoBoard)
    }

    fn execute(
        &mut self,
        cmd: GomocupCommand,
        rest: &str,
        line: &str,
    ) -> Result<CommandResult, CommandError> {
        match cmd {
            GomocupCommand::About => self.respond(format_about()),
            GomocupCommand::Start => self.handle_start(rest)?,
            GomocupCommand::Restart => {
                self.board_mut()?.reset();
                self.respond(OK);
            }
            GomocupCommand::Begin => {
                let m = self.play_own_move()?;
                self.respond(format_move(m));
            }
            GomocupCommand::Turn => {
                let (x, y) = parse_coords(rest)?;
                self.place(OPPONENT_STONE, x, y)?;
                let m = self.play_own_move()?;
                self.respond(format_move(m));
            }
            GomocupCommand::Play => {
                let (x, y) = parse_coords(rest)?;
                self.place(OWN_STONE, x, y)?;
            }
            GomocupCommand::Takeback => self.handle_takeback(rest)?,
            GomocupCommand::Board => return self.handle_board(BlockKind::Board),
            GomocupCommand::YxBoard => return self.handle_board(BlockKind::YxBoard),
            GomocupCommand::Info => {
                let (key, value) = rest
                    .split_once(char::is_whitespace)
                    .unwrap_or((rest, ""));
                info::apply_info(&mut self.config, key, value)?;
            }
            GomocupCommand::YxShowForbid => {}
            GomocupCommand::YxStop => self.search.clear(),
            GomocupCommand::End => return Ok(CommandResult::Quit),
            GomocupCommand::Unknown => self.respond(format_unknown(line)),
        }
        Ok(CommandResult::Continue)
    }

    fn handle_start(&mut self, rest: &str) -> Result<(), CommandError> {
        let dims = parse_numbers(rest, NUMBER_DELIMITERS);
        let (width, height) = match dims[..] {
            [size] => (size, size),
            [width, height, ..] => (width, height),
            [] => return Err(CommandError::BoardSize),
        };
        let width = u32::try_from(width).map_err(|_| CommandError::BoardSize)?;
        let height = u32::try_from(height).map_err(|_| CommandError::BoardSize)?;
        let board = Board::try_new(width, height).ok_or(CommandError::BoardSize)?;

        self.config.set_width(width).set_height(height);
        self.board = Some(board);
        self.respond(OK);
        Ok(())
    }

    fn handle_takeback(&mut self, rest: &str) -> Result<(), CommandError> {
        let (x, y) = parse_coords(rest)?;
        let board = self.board_mut()?;
        match board.last_move() {
            Some(last) if i64::from(last.x()) == x && i64::from(last.y()) == y => {
                board.undo_move(last);
                self.respond(OK);
                Ok(())
            }
            _ => Err(CommandError::Takeback { x, y }),
        }
    }

    /// Read a position block until `DONE`. An `END` inside the block ends
    /// the session.
    fn handle_board(&mut self, kind: BlockKind) -> Result<CommandResult, CommandError> {
        match self.board.as_mut() {
            Some(board) => board.reset(),
            None => {
                let board = Board::try_new(self.config.width(), self.config.height())
                    .ok_or(CommandError::BoardSize)?;
                self.board = Some(board);
            }
        }

        while let Some(raw) = self.next_line() {
            let line = raw.trim().to_ascii_uppercase();
            debug!("<< {line}");

            if line.contains(DONE_MARKER) {
                return Ok(CommandResult::Continue);
            }
            if parse_command(&line).0 == GomocupCommand::End {
                warn!("session ended inside a position block");
                return Ok(CommandResult::Quit);
            }

            let (x, y, stone) = parse_triple(&line)
                .and_then(|(x, y, who)| Some((x, y, kind.stone_for(who)?)))
                .ok_or_else(|| CommandError::BoardLine(line.clone()))?;
            if let Err(e) = self.place(stone, x, y) {
                warn!("{e}");
                self.respond(e.to_string());
            }
        }
        Ok(CommandResult::Quit)
    }

    /// Place a stone given raw wire coordinates.
    fn place(&mut self, stone: Stone, x: i64, y: i64) -> Result<Move, CommandError> {
        let error = || {
            if stone == OWN_STONE {
                CommandError::MyMove { x, y }
            } else {
                CommandError::OpponentMove { x, y }
            }
        };
        let board = self.board_mut()?;
        let m = move_on_board(board, stone, x, y).ok_or_else(error)?;
        board.try_apply_move(m).map_err(|e| {
            debug!("placement rejected: {e}");
            error()
        })?;
        Ok(m)
    }

    /// Ask the selector for a move and play it.
    fn play_own_move(&mut self) -> Result<Move, CommandError> {
        let limits = SearchLimits::from_config(&self.config);
        let board = self.board.as_mut().ok_or(CommandError::NoBoard)?;

        let choice = {
            let _busy = self.search.begin_search();
            self.selector.select(board, OWN_STONE, &limits)
        };

        if choice.is_empty() {
            return Err(CommandError::NoMoveAvailable);
        }
        let m = choice.with_stone(OWN_STONE);
        board.try_apply_move(m).map_err(|e| {
            warn!("selector returned an unplayable move {m:?}: {e}");
            CommandError::NoMoveAvailable
        })?;
        debug!("played {m:?} in {:?}", limits.elapsed());
        Ok(m)
    }
}

fn parse_coords(rest: &str) -> Result<(i64, i64), CommandError> {
    parse_pair(rest).ok_or_else(|| CommandError::Coordinates(rest.to_string()))
}

/// Build a move if `(x, y)` lies on `board`.
fn move_on_board(board: &Board, stone: Stone, x: i64, y: i64) -> Option<Move> {
    let x = u32::try_from(x).ok().filter(|&x| x < board.width())?;
    let y = u32::try_from(y).ok().filter(|&y| y < board.height())?;
    Some(Move::new(stone, x, y))
}

impl Protocol for GomocupSession {
    fn process_command(&mut self, line: &str) -> CommandResult {
        let line = line.trim().to_ascii_uppercase();
        if line.is_empty() {
            return CommandResult::Continue;
        }
        debug!("<< {line}");

        let (cmd, rest) = parse_command(&line);
        if self.search.is_searching()
            && !matches!(cmd, GomocupCommand::End | GomocupCommand::YxStop)
        {
            self.respond(CommandError::InSearch.to_string());
            return CommandResult::Continue;
        }

        match self.execute(cmd, rest, &line) {
            Ok(result) => result,
            Err(e) => {
                warn!("{line}: {e}");
                self.respond(e.to_string());
                CommandResult::Continue
            }
        }
    }

    fn next_line(&mut self) -> Option<String> {
        self.input.pop(Duration::ZERO)
    }

    fn name(&self) -> &'static str {
        "gomocup"
    }
}
