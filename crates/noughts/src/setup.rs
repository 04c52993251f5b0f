//! Interactive game setup: mode selection and player creation.

use crate::config::GameConfig;
use crate::console::Terminal;
use anyhow::{Result, bail};
use noughts_core::{Player, Symbol};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Who sits at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum Mode {
    /// Two humans share the terminal.
    #[strum(to_string = "Player1 vs Player2")]
    PlayerVsPlayer,
    /// One human against the search.
    #[strum(to_string = "Player1 vs Computer")]
    PlayerVsComputer,
}

/// Shows the mode menu and reads a choice, re-prompting on bad input.
#[instrument(skip(term))]
pub fn choose_mode(term: &mut dyn Terminal) -> Result<Mode> {
    for (i, mode) in Mode::iter().enumerate() {
        term.say(&format!("{}({}) {}", " ".repeat(20), i + 1, mode))?;
    }

    loop {
        let Some(line) = term.ask("Choose mode (1 or 2): ")? else {
            bail!("Input closed before a mode was chosen");
        };
        let choice = line
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Mode::iter().nth(i));
        match choice {
            Some(mode) => {
                debug!(%mode, "Mode chosen");
                return Ok(mode);
            }
            None => term.say("Invalid Input")?,
        }
    }
}

/// Seat symbols: `+1` for the first seat, `-1` for the second.
pub fn seat_symbol(seat: usize) -> Symbol {
    if seat == 0 { Symbol::FIRST } else { Symbol::SECOND }
}

/// Prompts for a human player's name and glyph.
///
/// Blank answers take `Player N` and the configured default glyph. Glyphs
/// already in `taken` are refused.
#[instrument(skip(term, config, taken))]
pub fn create_human(
    term: &mut dyn Terminal,
    config: &GameConfig,
    seat: usize,
    taken: &[char],
) -> Result<Player> {
    let number = seat + 1;
    term.say(&format!("Player {number}:"))?;
    term.say(&"=".repeat(20))?;

    let Some(name) = term.ask(&format!("Player's Name (default -> Player {number}): "))? else {
        bail!("Input closed during player setup");
    };
    let name = match name.trim() {
        "" => format!("Player {number}"),
        trimmed => trimmed.to_string(),
    };

    let fallback = config.default_glyphs()[seat.min(1)];
    let glyph = loop {
        let prompt = format!("Player's Symbol (default -> {fallback}): ");
        let Some(answer) = term.ask(&prompt)? else {
            bail!("Input closed during player setup");
        };
        let glyph = answer.trim().chars().next().unwrap_or(fallback);
        if taken.contains(&glyph) {
            term.say(&format!("Symbol '{glyph}' is already taken"))?;
            continue;
        }
        break glyph;
    };

    Ok(Player::human(name, glyph, seat_symbol(seat)))
}

/// Builds the roster for `mode`, prompting for each human.
#[instrument(skip(term, config))]
pub fn create_players(
    term: &mut dyn Terminal,
    config: &GameConfig,
    mode: Mode,
) -> Result<Vec<Player>> {
    match mode {
        Mode::PlayerVsPlayer => {
            let first = create_human(term, config, 0, &[])?;
            let second = create_human(term, config, 1, &[first.glyph()])?;
            Ok(vec![first, second])
        }
        Mode::PlayerVsComputer => {
            let computer_glyph = *config.computer_glyph();
            let human = create_human(term, config, 0, &[computer_glyph])?;
            let computer =
                Player::computer(config.computer_name(), computer_glyph, seat_symbol(1));
            Ok(vec![human, computer])
        }
    }
}
