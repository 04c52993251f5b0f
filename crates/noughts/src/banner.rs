//! Title banner.

use crate::console::Terminal;
use anyhow::Result;

const TITLE: &str = r"
  _____ _        _____            _____
 |_   _(_) ___  |_   _|_ _  ___  |_   _|__   ___
   | | | |/ __|   | |/ _` |/ __|   | |/ _ \ / _ \
   | | | | (__    | | (_| | (__    | | (_) |  __/
   |_| |_|\___|   |_|\__,_|\___|   |_|\___/ \___|
";

/// Prints the title and a rule beneath it.
pub fn show_title(term: &mut dyn Terminal) -> Result<()> {
    term.say(TITLE)?;
    term.say(&"=".repeat(100))
}
