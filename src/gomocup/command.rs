//! Gomocup command classification.

/// Commands understood by the brain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GomocupCommand {
    /// Identify the brain
    About,
    /// `START n` or `START n m`: create a board
    Start,
    /// Clear the board, keep its size
    Restart,
    /// Brain plays the first move
    Begin,
    /// `TURN x,y`: opponent move, brain replies
    Turn,
    /// `PLAY x,y`: place an own stone without thinking
    Play,
    /// `TAKEBACK x,y`: undo the last move
    Takeback,
    /// Position block, `who` 1 = own stone
    Board,
    /// Yixin position block, `who` 1 = opponent stone
    YxBoard,
    /// `INFO key value`
    Info,
    YxShowForbid,
    /// Leave search mode
    YxStop,
    /// Terminate the session
    End,
    Unknown,
}

/// Split an upper-cased line into its command and the remaining text.
///
/// The remainder is trimmed and may be empty.
#[must_use]
pub fn parse_command(line: &str) -> (GomocupCommand, &str) {
    let trimmed = line.trim();
    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (trimmed, ""),
    };

    let cmd = match keyword {
        "ABOUT" => GomocupCommand::About,
        "START" => GomocupCommand::Start,
        "RESTART" => GomocupCommand::Restart,
        "BEGIN" => GomocupCommand::Begin,
        "TURN" => GomocupCommand::Turn,
        "PLAY" => GomocupCommand::Play,
        "TAKEBACK" => GomocupCommand::Takeback,
        "BOARD" => GomocupCommand::Board,
        "YXBOARD" => GomocupCommand::YxBoard,
        "INFO" => GomocupCommand::Info,
        "YXSHOWFORBID" => GomocupCommand::YxShowForbid,
        "YXSTOP" => GomocupCommand::YxStop,
        "END" => GomocupCommand::End,
        _ => GomocupCommand::Unknown,
    };
    (cmd, rest)
}
