//! Shipped puzzle corpus.

use phrase_core::{GameConfig, PoolError, Puzzle, PuzzlePool};

/// `(phrase, category)` pairs available without any data directory.
pub const BUILTIN_PUZZLES: &[(&str, &str)] = &[
    ("TEA", "Food & Drink"),
    ("HOT TEA", "Food & Drink"),
    ("ICE CREAM", "Food & Drink"),
    ("SALT AND PEPPER", "Food & Drink"),
    ("PEANUT BUTTER", "Food & Drink"),
    ("FRENCH TOAST", "Food & Drink"),
    ("GRILLED CHEESE SANDWICH", "Food & Drink"),
    ("SPICY JALAPENO POPPERS", "Food & Drink"),
    ("LEMONADE", "Food & Drink"),
    ("ROAST TURKEY", "Food & Drink"),
    ("BLUEBERRY PANCAKES", "Food & Drink"),
    ("FROZEN YOGURT", "Food & Drink"),
    ("READING", "What Are You Doing?"),
    ("SINGING", "What Are You Doing?"),
    ("EATING", "What Are You Doing?"),
    ("RESTING", "What Are You Doing?"),
    ("SITTING", "What Are You Doing?"),
    ("TEA STEEPING", "What Are You Doing?"),
    ("ROASTING MARSHMALLOWS", "What Are You Doing?"),
    ("JUGGLING", "What Are You Doing?"),
    ("SKYDIVING", "What Are You Doing?"),
    ("WAXING THE CAR", "What Are You Doing?"),
    ("QUILTING", "What Are You Doing?"),
    ("THE SUN", "Things"),
    ("A TIN HAT", "Things"),
    ("OLD RED DOOR", "Things"),
    ("LEATHER SADDLE", "Things"),
    ("RUSTY NAIL", "Things"),
    ("GOLDEN RETRIEVER", "Things"),
    ("JIGSAW PUZZLE", "Things"),
    ("JUKEBOX", "Things"),
    ("SNOW GLOBE", "Things"),
    ("POCKET WATCH", "Things"),
    ("LONDON", "Places"),
    ("ROME", "Places"),
    ("TORONTO", "Places"),
    ("DEATH VALLEY", "Places"),
    ("THE GRAND CANYON", "Places"),
    ("ZANZIBAR", "Places"),
    ("NEW ORLEANS", "Places"),
    ("LAS VEGAS STRIP", "Places"),
    ("MOUNT KILIMANJARO", "Places"),
    ("TIMES SQUARE", "Places"),
    ("ANTS", "Animals"),
    ("SEAL", "Animals"),
    ("HORSE", "Animals"),
    ("LION", "Animals"),
    ("RATTLESNAKE", "Animals"),
    ("DUCK", "Animals"),
    ("ZEBRA", "Animals"),
    ("GRIZZLY BEAR", "Animals"),
    ("KOALA", "Animals"),
    ("HUMPBACK WHALE", "Animals"),
    ("ARCTIC FOX", "Animals"),
    ("ON THE DOT", "Phrase"),
    ("TIT FOR TAT", "Phrase"),
    ("NOT SO FAST", "Phrase"),
    ("LET IT RAIN", "Phrase"),
    ("SLEEP ON IT", "Phrase"),
    ("ONCE IN A BLUE MOON", "Phrase"),
    ("BREAK A LEG", "Phrase"),
    ("PIECE OF CAKE", "Phrase"),
    ("THE QUICK BROWN FOX", "Phrase"),
    ("JUMPING TO CONCLUSIONS", "Phrase"),
    ("EASY AS PIE", "Phrase"),
    ("HIT THE SACK", "Phrase"),
    ("SEE SAW", "Misc"),
    ("TOOTH FAIRY", "Misc"),
    ("CLAUDE OF FORTUNE", "Misc"),
    ("SHOOTING STAR", "Misc"),
    ("FIREWORKS SHOW", "Misc"),
    ("TREASURE HUNT", "Misc"),
    ("HAPPY BIRTHDAY", "Misc"),
    ("JACK OF ALL TRADES", "Misc"),
    ("QUIZ SHOW", "Misc"),
];

pub fn builtin_puzzles() -> Vec<Puzzle> {
    BUILTIN_PUZZLES
        .iter()
        .map(|&(text, category)| Puzzle::new(text, category))
        .collect()
}

/// Built-in corpus scored against `config`.
pub fn builtin_pool(config: &GameConfig) -> Result<PuzzlePool, PoolError> {
    PuzzlePool::new(builtin_puzzles(), config)
}
