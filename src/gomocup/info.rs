//! `INFO key value` handling.

use log::debug;

use super::CommandError;
use crate::engine::Config;

/// Keys managers send that this brain accepts without acting on.
const IGNORED_KEYS: &[&str] = &["folder", "hash_size", "cache_size", "gui_mode", "show_detail"];

/// Apply one `INFO` pair to `config`. Keys are case-insensitive.
///
/// Unknown keys are ignored. Negative times and node limits clamp to zero.
pub fn apply_info(config: &mut Config, key: &str, value: &str) -> Result<(), CommandError> {
    let normalized = key.trim().to_ascii_lowercase();
    let value = value.trim();
    let number = || {
        value.parse::<i64>().map_err(|_| CommandError::InfoValue {
            key: normalized.clone(),
            value: value.to_string(),
        })
    };
    let clamp = |n: i64| u64::try_from(n).unwrap_or(0);

    match normalized.as_str() {
        "timeout_turn" => {
            config.set_timeout_turn(clamp(number()?));
        }
        "timeout_match" => {
            config.set_timeout_match(clamp(number()?));
        }
        "time_left" => {
            config.set_time_left(clamp(number()?));
        }
        "time_inc" | "time_increment" => {
            config.set_time_inc(clamp(number()?));
        }
        "max_memory" => {
            config.set_max_memory(clamp(number()?));
        }
        "max_node" | "max_nodes" => {
            config.set_max_nodes(clamp(number()?));
        }
        "max_depth" => {
            let depth = number()?.clamp(0, i64::from(u32::MAX));
            config.set_max_depth(u32::try_from(depth).unwrap_or(u32::MAX));
        }
        "rule" | "game_type" | "continuous" => {
            let n = i32::try_from(number()?).map_err(|_| CommandError::InfoValue {
                key: normalized.clone(),
                value: value.to_string(),
            })?;
            match normalized.as_str() {
                "rule" => config.set_rule(n),
                "game_type" => config.set_game_type(n),
                _ => config.set_continuous(n),
            };
        }
        key if IGNORED_KEYS.contains(&key) => {
            debug!("info {key} accepted, not used");
        }
        key => {
            debug!("info {key} unknown, ignored");
        }
    }
    Ok(())
}
