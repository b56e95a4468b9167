//! Puzzle difficulty scoring.
//!
//! ```text
//! U     = distinct letters of the text, minus the category's free letters
//! R     = Σ rarity(letter) for letter in U
//! score = |U| × R × avg_word_len / word_count
//! ```
//!
//! Pure and deterministic for a given text, category and [`GameConfig`].

use crate::config::GameConfig;
use crate::letter::LetterSet;

/// Letters that count toward a puzzle's difficulty.
pub fn scored_letters(text: &str, category: &str, config: &GameConfig) -> LetterSet {
    LetterSet::from_text(text).difference(config.free_letters_for(category))
}

/// Scores a puzzle. Text without words scores `0.0`.
pub fn score(text: &str, category: &str, config: &GameConfig) -> f64 {
    let letters = scored_letters(text, category, config);
    let rarity: u32 = letters
        .letters()
        .map(|letter| config.rarity_of(letter))
        .sum();

    let (word_count, total_len) = text
        .split_whitespace()
        .fold((0usize, 0usize), |(count, len), word| {
            (count + 1, len + word.chars().count())
        });
    if word_count == 0 {
        return 0.0;
    }

    let words = word_count as f64;
    let avg_len = total_len as f64 / words;
    letters.count() as f64 * f64::from(rarity) * avg_len / words
}
