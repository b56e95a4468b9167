use phrase_core::{
    Catalog, CatalogEntry, ConsumableDef, ConsumableEffect, EffectOutcome, EntryId, EntryKind,
    GameConfig, GameSession, GuessError, LetterClass, PurchaseError, Puzzle, PuzzlePool,
    RoundError, RoundPhase, StrikeAbsorber, UpgradeDef, UpgradeEffect,
};

fn upgrade(id: &str, cost: u64, requires: Option<&str>, effect: UpgradeEffect) -> CatalogEntry {
    CatalogEntry::Upgrade(UpgradeDef {
        id: EntryId::new(id),
        label: id.to_string(),
        description: String::new(),
        cost,
        requires: requires.map(EntryId::new),
        effect,
    })
}

fn consumable(id: &str, cost: u64, effect: ConsumableEffect) -> CatalogEntry {
    CatalogEntry::Consumable(ConsumableDef {
        id: EntryId::new(id),
        label: id.to_string(),
        description: String::new(),
        cost,
        effect,
    })
}

fn shop() -> Catalog {
    Catalog::new(vec![
        upgrade(
            "auto_vowel_1",
            50,
            None,
            UpgradeEffect::AutoReveal(LetterClass::Vowel),
        ),
        upgrade(
            "auto_vowel_guaranteed_1",
            100,
            Some("auto_vowel_1"),
            UpgradeEffect::GuaranteeReveal,
        ),
        upgrade("extra_strike_1", 250, None, UpgradeEffect::ExtraStrike),
        upgrade(
            "extra_strike_2",
            500,
            Some("extra_strike_1"),
            UpgradeEffect::ExtraStrike,
        ),
        consumable("eliminate_letters", 25, ConsumableEffect::EliminateLetters),
        consumable("free_guess", 50, ConsumableEffect::FreeGuess),
        consumable("bonus_strike", 75, ConsumableEffect::BonusStrike),
    ])
    .expect("test catalog should validate")
}

fn single_puzzle_session(text: &str, category: &str, seed: u64) -> GameSession {
    let config = GameConfig::default();
    let pool = PuzzlePool::new(vec![Puzzle::new(text, category)], &config)
        .expect("pool should build");
    GameSession::new(config, pool, shop(), seed)
}

/// Guesses every distinct letter of the current phrase.
fn solve(session: &mut GameSession) {
    let letters = session
        .state()
        .round()
        .expect("round should be active")
        .hidden();
    for letter in letters.letters() {
        session
            .submit_guess(letter.as_char())
            .expect("phrase letter should be accepted");
    }
}

/// A clean solve pays out and extends the streak without charging a strike.
#[test]
fn solving_without_strikes_pays_out() {
    let mut session = single_puzzle_session("CLAUDE OF FORTUNE", "Misc", 1);
    let start = session.start_round().expect("first round should start");
    assert_eq!(start.category, "Misc");
    assert_eq!(start.max_strikes, 3);

    for c in "CLAUDEOFRTN".chars() {
        let outcome = session.submit_guess(c).expect("guess should be accepted");
        assert!(outcome.matched, "{c} is in the phrase");
        assert!(!outcome.strike_charged);
    }

    let summary = session.summary().expect("round should be over");
    assert!(summary.won);
    assert_eq!(summary.revealed_phrase, "CLAUDE OF FORTUNE");
    assert_eq!(summary.streak_after, 1);
    // 311.67 / 10 * 1 * 1.15 = 35.8
    assert_eq!(summary.money_earned, 36);

    let view = session.view();
    assert_eq!(view.masked_phrase, "CLAUDE OF FORTUNE");
    assert_eq!(view.strikes, 0);
    assert_eq!(view.money, 36);
    assert_eq!(view.streak, 1);
}

/// Three misses end the round and wipe the economy.
#[test]
fn three_misses_lose_and_reset() {
    let mut session = single_puzzle_session("TEA", "Food & Drink", 2);

    // Win a round first so there is a streak and money to lose.
    session.start_round().expect("round should start");
    solve(&mut session);
    assert_eq!(session.view().streak, 1);
    assert!(session.view().money > 0);

    session.start_next_round().expect("next round should start");
    for (i, c) in ['X', 'Z', 'Q'].into_iter().enumerate() {
        let outcome = session.submit_guess(c).expect("guess should be accepted");
        assert!(!outcome.matched);
        assert_eq!(outcome.game_over, i == 2);
    }

    let summary = session.summary().expect("round should be over");
    assert!(!summary.won);
    assert_eq!(summary.streak_before, 1);
    assert_eq!(summary.money_earned, 0);

    let view = session.view();
    assert_eq!(view.phase, RoundPhase::RoundLost);
    assert_eq!(view.streak, 0);
    assert_eq!(view.previous_streak, 1);
    assert_eq!(view.money, 0);
    assert!(session.state().ledger.purchased().is_empty());

    assert_eq!(session.submit_guess('T'), Err(GuessError::RoundNotActive));
}

/// An upgrade charges its cost; an unaffordable one changes nothing.
#[test]
fn upgrade_charges_cost_then_rejects_unaffordable() {
    let mut session = single_puzzle_session("TEA", "Food & Drink", 3);
    session.start_round().expect("round should start");
    solve(&mut session);
    while session.view().money < 50 {
        session.start_next_round().expect("round should start");
        solve(&mut session);
    }
    let money = session.view().money;

    let receipt = session
        .purchase(EntryKind::Upgrade, "auto_vowel_1")
        .expect("upgrade should be affordable");
    assert_eq!(receipt.cost, 50);
    assert_eq!(receipt.balance, money - 50);

    let err = session
        .purchase(EntryKind::Upgrade, "extra_strike_1")
        .expect_err("upgrade should be unaffordable");
    assert!(matches!(err, PurchaseError::InsufficientFunds { cost: 250, .. }));
    assert_eq!(session.view().money, money - 50);
    assert!(!session.state().ledger.owns("extra_strike_1"));
    assert!(session.state().ledger.owns("auto_vowel_1"));
}

#[test]
fn prerequisites_gate_visibility_and_purchase() {
    let mut session = single_puzzle_session("TEA", "Food & Drink", 4);
    let visible: Vec<_> = session
        .shop()
        .iter()
        .map(|row| row.entry.id().to_string())
        .collect();
    assert!(!visible.contains(&"auto_vowel_guaranteed_1".to_string()));
    assert!(!visible.contains(&"extra_strike_2".to_string()));

    let err = session
        .purchase(EntryKind::Upgrade, "extra_strike_2")
        .expect_err("prerequisite is missing");
    assert!(matches!(err, PurchaseError::PrerequisiteUnmet { .. }));
}

#[test]
fn extra_strike_applies_from_next_round() {
    let mut session = single_puzzle_session("QUIZ SHOW", "Misc", 5);
    session.start_round().expect("round should start");
    solve(&mut session);
    while session.view().money < 250 {
        session.start_next_round().expect("round should start");
        solve(&mut session);
    }

    session.start_next_round().expect("round should start");
    session
        .purchase(EntryKind::Upgrade, "extra_strike_1")
        .expect("upgrade should be affordable");
    assert_eq!(session.view().max_strikes, 3);

    solve(&mut session);
    let start = session.start_next_round().expect("round should start");
    assert_eq!(start.max_strikes, 4);

    for c in ['B', 'C', 'D'] {
        let outcome = session.submit_guess(c).expect("guess should be accepted");
        assert!(!outcome.game_over);
    }
    assert!(session.submit_guess('F').expect("guess").game_over);
}

#[test]
fn bonus_and_free_guess_absorb_misses() {
    let mut session = single_puzzle_session("QUIZ SHOW", "Misc", 6);
    session.start_round().expect("round should start");
    solve(&mut session);
    while session.view().money < 125 {
        session.start_next_round().expect("round should start");
        solve(&mut session);
    }
    session.start_next_round().expect("round should start");

    let receipt = session
        .purchase(EntryKind::Consumable, "bonus_strike")
        .expect("bonus strike should be affordable");
    assert_eq!(
        receipt.outcome,
        Some(EffectOutcome::BonusStrikeGranted { available: 1 })
    );
    session
        .purchase(EntryKind::Consumable, "free_guess")
        .expect("free guess should be affordable");
    assert!(session.view().free_guess);
    assert_eq!(
        session.purchase(EntryKind::Consumable, "free_guess"),
        Err(PurchaseError::EffectUnavailable("free_guess".into()))
    );

    let first = session.submit_guess('B').expect("guess");
    assert_eq!(first.absorbed_by, Some(StrikeAbsorber::BonusStrike));
    let second = session.submit_guess('C').expect("guess");
    assert_eq!(second.absorbed_by, Some(StrikeAbsorber::FreeGuess));
    let third = session.submit_guess('D').expect("guess");
    assert!(third.strike_charged);
    assert_eq!(session.view().strikes, 1);
    assert!(!session.view().free_guess);
}

/// A broke player is told about money even when the effect has no target.
#[test]
fn unaffordable_consumable_reports_funds_first() {
    let mut session = single_puzzle_session("QUIZ SHOW", "Misc", 11);
    session.start_round().expect("round should start");
    solve(&mut session);
    session.start_next_round().expect("round should start");

    session
        .purchase(EntryKind::Consumable, "free_guess")
        .expect("free guess should be affordable");
    let balance = session.view().money;
    assert!(balance < 50);
    assert!(session.view().free_guess);

    assert_eq!(
        session.purchase(EntryKind::Consumable, "free_guess"),
        Err(PurchaseError::InsufficientFunds {
            id: "free_guess".into(),
            cost: 50,
            balance,
        })
    );
    assert_eq!(session.view().money, balance);
    assert!(session.view().free_guess);
}

#[test]
fn consumables_rejected_outside_a_round() {
    let mut session = single_puzzle_session("TEA", "Food & Drink", 7);
    assert_eq!(
        session.purchase(EntryKind::Consumable, "bonus_strike"),
        Err(PurchaseError::RoundNotActive)
    );

    session.start_round().expect("round should start");
    assert_eq!(session.start_round(), Err(RoundError::RoundInProgress));
    solve(&mut session);
    assert_eq!(
        session.purchase(EntryKind::Consumable, "bonus_strike"),
        Err(PurchaseError::RoundNotActive)
    );
}

#[test]
fn eliminate_never_charges_or_reveals() {
    let mut session = single_puzzle_session("QUIZ SHOW", "Misc", 8);
    session.start_round().expect("round should start");
    solve(&mut session);
    session.start_next_round().expect("round should start");

    let receipt = session
        .purchase(EntryKind::Consumable, "eliminate_letters")
        .expect("eliminate should be affordable");
    let Some(EffectOutcome::Eliminated(removed)) = receipt.outcome else {
        panic!("expected eliminated letters, got {:?}", receipt.outcome);
    };
    assert_eq!(removed.len(), 3);

    let view = session.view();
    assert_eq!(view.strikes, 0);
    assert_eq!(view.masked_phrase, "____ ____");
    for letter in removed {
        assert!(view.guessed.has(letter));
        assert_eq!(
            session.submit_guess(letter.as_char()),
            Err(GuessError::AlreadyGuessed(letter))
        );
    }
}

#[test]
fn guaranteed_vowel_reveal_uncovers_phrase_vowel() {
    let mut session = single_puzzle_session("QUIZ SHOW", "Misc", 9);
    session.start_round().expect("round should start");
    solve(&mut session);
    while session.view().money < 150 {
        session.start_next_round().expect("round should start");
        solve(&mut session);
    }
    session
        .purchase(EntryKind::Upgrade, "auto_vowel_1")
        .expect("upgrade should be affordable");
    session
        .purchase(EntryKind::Upgrade, "auto_vowel_guaranteed_1")
        .expect("upgrade should be affordable");

    let start = session.start_next_round().expect("round should start");
    assert_eq!(start.auto_revealed.len(), 1);
    let vowel = start.auto_revealed[0];
    assert!(matches!(vowel.as_char(), 'U' | 'I' | 'O'));
    assert_eq!(session.view().strikes, 0);
}

/// Every puzzle handed out at streak 0 respects the first ceiling.
#[test]
fn selection_respects_streak_ceiling() {
    let config = GameConfig::default();
    let corpus = vec![
        Puzzle::new("TEA", "Food & Drink"),
        Puzzle::new("HOT TEA", "Food & Drink"),
        Puzzle::new("CLAUDE OF FORTUNE", "Misc"),
        Puzzle::new("JACK OF ALL TRADES", "Misc"),
        Puzzle::new("SINGING", "What Are You Doing?"),
    ];
    let pool = PuzzlePool::new(corpus, &config).expect("pool should build");
    let ceiling = config.max_difficulty(0);

    for seed in 0..40 {
        let mut session = GameSession::new(config.clone(), pool.clone(), shop(), seed);
        let start = session.start_round().expect("round should start");
        assert!(
            start.difficulty <= ceiling,
            "seed {seed}: {} > {ceiling}",
            start.difficulty
        );
        assert_ne!(session.state().round().map(|r| r.phrase()), Some("CLAUDE OF FORTUNE"));
    }
}

#[test]
fn same_seed_replays_same_puzzles() {
    let config = GameConfig::default();
    let corpus = vec![
        Puzzle::new("TEA", "Food & Drink"),
        Puzzle::new("HOT TEA", "Food & Drink"),
        Puzzle::new("SEAL", "Animals"),
        Puzzle::new("ROME", "Places"),
        Puzzle::new("SINGING", "What Are You Doing?"),
    ];
    let pool = PuzzlePool::new(corpus, &config).expect("pool should build");

    let phrases = |seed| {
        let mut session = GameSession::new(config.clone(), pool.clone(), shop(), seed);
        (0..5)
            .map(|_| {
                session.start_round().expect("round should start");
                let phrase = session
                    .state()
                    .round()
                    .map(|r| r.phrase().to_string())
                    .unwrap_or_default();
                solve(&mut session);
                phrase
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(phrases(42), phrases(42));
}
