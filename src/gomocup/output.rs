//! Gomocup response formatting.

use crate::board::Move;

/// Acknowledgement line.
pub const OK: &str = "OK";

pub const BRAIN_NAME: &str = "Generic Gomoku Brain";

/// Identification line answered to `ABOUT`.
#[must_use]
pub fn format_about() -> String {
    format!(
        "name=\"{BRAIN_NAME}\", version=\"{}\", author=\"gomoku_brain contributors\", country=\"CZ\"",
        env!("CARGO_PKG_VERSION")
    )
}

/// Move reply in `x,y` form.
#[must_use]
pub fn format_move(m: Move) -> String {
    format!("{},{}", m.x(), m.y())
}

#[must_use]
pub fn format_unknown(line: &str) -> String {
    format!("UNKNOWN command {line}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    #[test]
    fn test_about_names_brain() {
        let about = format_about();
        assert!(about.contains("Generic"));
        assert!(about.starts_with("name=\""));
        assert!(about.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_format_move() {
        assert_eq!(format_move(Move::new(Stone::Cross, 7, 12)), "7,12");
        assert_eq!(format_move(Move::new(Stone::Nought, 0, 0)), "0,0");
    }

    #[test]
    fn test_format_unknown() {
        assert_eq!(format_unknown("FOO"), "UNKNOWN command FOO");
    }
}
