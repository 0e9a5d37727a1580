//! Plain-text board rendering.
//!
//! Produces the textual game board the transport delivers to the room.
//! How the host platform decorates it (code blocks, embeds) is its own
//! business; this layer only decides the content.

use std::fmt::Write;

use crate::Hangman;

/// Gallows art, one frame per mistake count. Frame 0 is the empty scaffold;
/// frame 7 is the complete figure.
pub const GALLOWS: [&str; 8] = [
    "     \n     \n     \n     \n     \n=========",
    "     +---+\n     |   |\n         |\n         |\n         |\n     =========",
    "     +---+\n     |   |\n     O   |\n         |\n         |\n     =========",
    "     +---+\n     |   |\n     O   |\n     |   |\n         |\n     =========",
    "     +---+\n     |   |\n     O   |\n    /|   |\n         |\n     =========",
    "     +---+\n     |   |\n     O   |\n    /|\\  |\n         |\n     =========",
    "     +---+\n     |   |\n     O   |\n    /|\\  |\n    /    |\n     =========",
    "     +---+\n     |   |\n     O   |\n    /|\\  |\n    / \\  |\n     =========",
];

/// The gallows frame for a mistake count, clamped to the final frame.
pub fn gallows_stage(mistakes: usize) -> &'static str {
    GALLOWS[mistakes.min(GALLOWS.len() - 1)]
}

/// Renders the full board: gallows, masked word, mistake tally, attempted
/// letters, optional hint, and the how-to-play footer.
pub fn board_text(game: &Hangman) -> String {
    let mut out = String::new();
    out.push_str(gallows_stage(game.mistakes()));
    out.push('\n');

    let _ = writeln!(out, "Word: {}", game.masked_word());
    let _ = writeln!(
        out,
        "Mistakes: {}/{}",
        game.mistakes(),
        game.max_mistakes()
    );

    let attempted = game.attempted_letters();
    if attempted.is_empty() {
        out.push_str("Tried: none yet\n");
    } else {
        let letters: Vec<String> =
            attempted.iter().map(char::to_string).collect();
        let _ = writeln!(out, "Tried: {}", letters.join(", "));
    }

    if let Some(hint) = game.hint() {
        let _ = writeln!(out, "Hint: {hint}");
    }

    out.push_str("Guess by sending a single letter.");
    out
}
