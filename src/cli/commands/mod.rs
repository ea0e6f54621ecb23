//! CLI subcommand implementations

pub mod analyze;
pub mod evaluate;
pub mod play;

use anyhow::{Result, anyhow};

use crate::board::Player;

/// Parse a player token such as `x`, `o`, `first`, or `second`
pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.to_lowercase().as_str() {
        "x" | "first" | "player1" | "p1" => Ok(Player::X),
        "o" | "second" | "player2" | "p2" => Ok(Player::O),
        other => Err(anyhow!("Invalid value '{other}' for {flag} (expected 'x' or 'o')")),
    }
}
