use std::fs;
use std::path::Path;

use phrase_content::{ContentFactory, GameContent, PuzzleLoader};
use phrase_core::{EntryKind, GameConfig, UpgradeEffect};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("temp file should be writable");
}

#[test]
fn empty_directory_falls_back_to_builtin() {
    let dir = TempDir::new().expect("temp dir");
    let loaded = ContentFactory::new(dir.path()).load().expect("load");
    let builtin = GameContent::builtin().expect("builtin content");

    assert_eq!(loaded.config, builtin.config);
    assert_eq!(loaded.pool.len(), builtin.pool.len());
    assert_eq!(loaded.catalog, builtin.catalog);
}

#[test]
fn loads_every_file_from_data_dir() {
    let dir = TempDir::new().expect("temp dir");
    write(
        dir.path(),
        "config.toml",
        r#"
        base_strikes = 4
        unbounded_from_streak = 2

        [[difficulty_tiers]]
        min_streak = 0
        max_difficulty = 50.0
        "#,
    );
    write(
        dir.path(),
        "puzzles.ron",
        r#"(
            puzzles: [
                (text: "TEA", category: "Food & Drink"),
                (text: "QUIZ SHOW", category: "Misc"),
            ],
        )"#,
    );
    write(
        dir.path(),
        "catalog.ron",
        r#"(
            entries: [
                Upgrade((
                    id: "auto_vowel_1",
                    label: "Free Vowel",
                    description: "A random vowel is revealed each round",
                    cost: 100,
                    effect: AutoReveal(Vowel),
                )),
                Upgrade((
                    id: "auto_vowel_guaranteed_1",
                    label: "Guaranteed Vowel",
                    description: "Free vowel is guaranteed to be in the phrase",
                    cost: 200,
                    requires: Some("auto_vowel_1"),
                    effect: GuaranteeReveal,
                )),
                Consumable((
                    id: "bonus_strike",
                    label: "Bonus Strike",
                    description: "Absorbs one wrong guess before a real strike",
                    cost: 75,
                    effect: BonusStrike,
                )),
            ],
        )"#,
    );

    let content = ContentFactory::new(dir.path()).load().expect("load");
    assert_eq!(content.config.base_strikes, 4);
    assert_eq!(content.config.max_difficulty(1), 50.0);
    assert!(content.config.max_difficulty(2).is_infinite());
    assert_eq!(content.pool.len(), 2);
    assert_eq!(content.catalog.entries().len(), 3);

    let guaranteed = content
        .catalog
        .get("auto_vowel_guaranteed_1")
        .and_then(|entry| entry.as_upgrade())
        .expect("guarantee upgrade");
    assert_eq!(guaranteed.effect, UpgradeEffect::GuaranteeReveal);
    assert_eq!(
        guaranteed.requires.as_ref().map(|id| id.as_str()),
        Some("auto_vowel_1")
    );

    // Only TEA fits under the first ceiling.
    let mut session = content.into_session(3);
    let start = session.start_round().expect("round should start");
    assert_eq!(start.category, "Food & Drink");
    assert_eq!(start.max_strikes, 4);
}

#[test]
fn shop_layout_generates_catalog() {
    let dir = TempDir::new().expect("temp dir");
    write(
        dir.path(),
        "shop.toml",
        r#"
        [auto_consonant]
        slots = 1
        base_cost = 40

        [extra_strike]
        slots = 3
        base_cost = 100

        [consumables]
        bonus_strike = 0
        "#,
    );

    let factory = ContentFactory::new(dir.path());
    let config = GameConfig::default();
    let catalog = factory.load_catalog(&config).expect("catalog");

    assert_eq!(catalog.get("auto_consonant_1").map(|e| e.cost()), Some(40));
    assert!(catalog.get("auto_consonant_2").is_none());
    // Families left out of the file keep their defaults.
    assert_eq!(catalog.get("auto_vowel_1").map(|e| e.cost()), Some(100));
    assert_eq!(catalog.get("extra_strike_3").map(|e| e.cost()), Some(400));
    assert_eq!(
        catalog.get("extra_strike_3").map(|e| e.label().to_string()),
        Some("6th Strike".to_string())
    );
    assert!(catalog.get("bonus_strike").is_none());
    assert_eq!(
        catalog.get("free_guess").map(|e| e.kind()),
        Some(EntryKind::Consumable)
    );
}

#[test]
fn invalid_files_are_reported() {
    let dir = TempDir::new().expect("temp dir");
    write(
        dir.path(),
        "catalog.ron",
        r#"(
            entries: [
                Consumable((
                    id: "free_guess",
                    label: "Free Guess",
                    description: "",
                    cost: 0,
                    effect: FreeGuess,
                )),
            ],
        )"#,
    );
    let err = ContentFactory::new(dir.path())
        .load()
        .expect_err("zero cost should be rejected");
    assert!(err.to_string().contains("Invalid catalog"), "{err}");

    write(dir.path(), "puzzles.ron", "(puzzles: [])");
    let err = PuzzleLoader::load_pool(&dir.path().join("puzzles.ron"), &GameConfig::default())
        .expect_err("empty corpus should be rejected");
    assert!(err.to_string().contains("empty"), "{err}");

    write(dir.path(), "config.toml", "difficulty_tiers = []");
    let err = ContentFactory::new(dir.path())
        .load_config()
        .expect_err("missing tiers should be rejected");
    assert!(err.to_string().contains("Invalid game config"), "{err}");
}

#[test]
fn missing_file_errors_name_the_path() {
    let err = PuzzleLoader::load(Path::new("/nonexistent/puzzles.ron")).expect_err("missing");
    assert!(err.to_string().contains("/nonexistent/puzzles.ron"));
}
