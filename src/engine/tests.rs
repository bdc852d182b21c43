use crate::api::{Article, Game, GameStatus, GuessRecord};

fn game(title: &str, content: &str) -> Game {
    Game::load(Article { title: title.to_string(), url: None, content: content.to_string() })
}

fn visible_words(game: &Game) -> Vec<&str> {
    game.board()
        .iter()
        .filter(|t| !t.is_punctuation && !t.hidden && !t.is_close_guess)
        .map(|t| t.original.as_str())
        .collect()
}

fn token<'g>(game: &'g Game, original: &str) -> &'g crate::api::Token {
    game.board().iter().find(|t| t.original == original).unwrap()
}

#[test]
fn direct_reveal_counts_every_occurrence() {
    let mut g = game("Maison", "La maison. Une maison blanche.");
    let out = g.apply_guess("maison");

    assert!(out.board_changed);
    assert_eq!(
        g.ledger()["maison"],
        GuessRecord { found: true, count: 2, is_title: true, is_synonym: false }
    );
    assert!(g.board().iter().filter(|t| t.original == "maison").all(|t| !t.hidden));
    assert!(token(&g, "blanche").hidden);
}

#[test]
fn duplicate_found_guess_is_a_no_op() {
    let mut g = game("Blanche", "La maison. Une maison blanche.");
    g.apply_guess("maison");
    let ledger_before = g.ledger().clone();
    let board_before = g.board().to_vec();

    let out = g.apply_guess("maison");
    assert!(!out.board_changed);
    assert!(!out.won);
    assert_eq!(g.ledger(), &ledger_before);
    assert_eq!(g.board(), &board_before[..]);
    assert_eq!(g.guess_count(), 1);
    // History still records the attempt.
    assert_eq!(g.history(), ["maison", "maison"]);
}

#[test]
fn pure_miss_is_recorded_without_touching_the_board() {
    let mut g = game("Maison", "La maison est grande.");
    let board_before = g.board().to_vec();
    let out = g.apply_guess("zèbre");

    assert!(!out.board_changed);
    assert_eq!(g.board(), &board_before[..]);
    assert_eq!(
        g.ledger()["zebre"],
        GuessRecord { found: false, count: 0, is_title: false, is_synonym: false }
    );
}

#[test]
fn guesses_fold_case_accents_and_elision() {
    let mut g = game("Étoile", "Une étoile brille.");
    let out = g.apply_guess("L'ÉTOILE");
    assert!(out.board_changed);
    assert!(out.won);
    assert!(g.ledger()["etoile"].found);
}

#[test]
fn morphological_variants_reveal_siblings() {
    let mut g = game("Cheval", "Les chevaux galopent.");
    let out = g.apply_guess("cheval");
    assert!(out.board_changed);
    assert!(!token(&g, "chevaux").hidden);
    assert_eq!(g.ledger()["cheval"].count, 1);
}

#[test]
fn conjugated_forms_reveal_like_variants() {
    let mut g = game("Jeanne", "Jeanne naquit en 1412. Elle est née ici.");
    let out = g.apply_guess("naitre");
    assert!(out.board_changed);
    assert!(!token(&g, "naquit").hidden);
    assert!(!token(&g, "née").hidden);
    assert!(g.ledger()["naitre"].found);
    assert_eq!(g.ledger()["naitre"].count, 2);
}

#[test]
fn numeric_hints_keep_a_strictly_improving_watermark() {
    let mut g = game("Bataille", "La bataille eut lieu en 1905.");

    let out = g.apply_guess("1900");
    assert!(out.board_changed);
    {
        let t = token(&g, "1905");
        assert!(!t.hidden);
        assert!(t.is_close_guess);
        assert_eq!(t.display_as.as_deref(), Some("1900"));
        assert_eq!(t.closest_guess_distance, Some(5));
    }
    assert_eq!(
        g.ledger()["1900"],
        GuessRecord { found: false, count: 0, is_title: false, is_synonym: true }
    );

    // Strictly closer: the hint is replaced.
    let out = g.apply_guess("1902");
    assert!(out.board_changed);
    {
        let t = token(&g, "1905");
        assert_eq!(t.display_as.as_deref(), Some("1902"));
        assert_eq!(t.closest_guess_distance, Some(3));
    }

    // Equally close or worse: nothing moves, and the guess is a recorded miss.
    let out = g.apply_guess("1908");
    assert!(!out.board_changed);
    assert_eq!(token(&g, "1905").display_as.as_deref(), Some("1902"));
    assert_eq!(
        g.ledger()["1908"],
        GuessRecord { found: false, count: 0, is_title: false, is_synonym: false }
    );

    // The exact value converts the hint into a true reveal.
    let out = g.apply_guess("1905");
    assert!(out.board_changed);
    let t = token(&g, "1905");
    assert!(!t.hidden);
    assert!(!t.is_close_guess);
    assert_eq!(t.display_as, None);
    assert_eq!(t.closest_guess_distance, None);
    assert!(g.ledger()["1905"].found);
}

#[test]
fn roman_numeral_tokens_take_numeric_hints() {
    let mut g = game("Louis", "Louis XIV régna longtemps.");
    let out = g.apply_guess("14");
    assert!(out.board_changed);
    let t = token(&g, "XIV");
    assert!(t.is_close_guess);
    assert_eq!(t.display_as.as_deref(), Some("14"));
    assert_eq!(t.closest_guess_distance, Some(0));
    assert!(g.ledger()["14"].is_synonym);
}

#[test]
fn related_clue_hints_its_target() {
    let mut g = game("Maison", "La maison est grande.");
    let out = g.apply_guess("foyer");
    assert!(out.board_changed);
    let t = token(&g, "maison");
    assert!(t.is_close_guess);
    assert_eq!(t.display_as.as_deref(), Some("foyer"));
    assert!(token(&g, "grande").hidden);
    assert_eq!(
        g.ledger()["foyer"],
        GuessRecord { found: false, count: 0, is_title: false, is_synonym: true }
    );
}

#[test]
fn category_member_hints_hidden_members() {
    let mut g = game("Calendrier", "Il naquit en juin.");
    let out = g.apply_guess("janvier");
    assert!(out.board_changed);
    let t = token(&g, "juin");
    assert!(t.is_close_guess);
    assert_eq!(t.display_as.as_deref(), Some("janvier"));
    assert!(token(&g, "naquit").hidden);
    assert!(g.ledger()["janvier"].is_synonym);
}

#[test]
fn typo_within_threshold_hints_exactly_one_token() {
    let mut g = game("Chat", "Un chat noir et un chat blanc.");
    let out = g.apply_guess("chap");
    assert!(out.board_changed);

    let hinted: Vec<_> = g.board().iter().filter(|t| t.is_close_guess).collect();
    assert_eq!(hinted.len(), 1);
    assert_eq!(hinted[0].display_as.as_deref(), Some("chap"));
    // The second occurrence stays hidden.
    assert_eq!(g.board().iter().filter(|t| t.original == "chat" && t.hidden).count(), 1);
    assert!(g.ledger()["chap"].is_synonym);
}

#[test]
fn typo_threshold_scales_with_guess_length() {
    // Length ≤ 4 tolerates a single edit only.
    let mut g = game("Chat", "Le chat dort.");
    let out = g.apply_guess("chta");
    assert!(!out.board_changed);
    assert!(token(&g, "chat").hidden);
    assert!(!g.ledger()["chta"].is_synonym);

    // Longer guesses tolerate two edits.
    let mut g = game("Bonjour", "Bonjour tout le monde.");
    let out = g.apply_guess("banjoor");
    assert!(out.board_changed);
    assert_eq!(token(&g, "Bonjour").display_as.as_deref(), Some("banjoor"));
}

#[test]
fn short_guesses_never_reach_the_typo_strategy() {
    let mut g = game("Chat", "Le chat dort.");
    let out = g.apply_guess("ch");
    assert!(!out.board_changed);
    assert!(token(&g, "chat").hidden);
}

#[test]
fn blocklisted_words_need_an_exact_raw_match() {
    let mut g = game("Os", "Un os de dinosaure.");

    // "oss" generates the variant "os", but the blocklist demands exact raw
    // equality for such short function-word lookalikes.
    let out = g.apply_guess("oss");
    assert!(!out.board_changed);
    assert!(token(&g, "os").hidden);

    let out = g.apply_guess("os");
    assert!(out.board_changed);
    assert!(!token(&g, "os").hidden);
    assert!(g.ledger()["os"].found);
}

#[test]
fn jeanne_darc_end_to_end_win() {
    let mut g = game("Jeanne d'Arc", "Jeanne d'Arc est née à Orléans.");

    let expected: std::collections::HashSet<String> =
        ["jeanne", "arc"].iter().map(|w| w.to_string()).collect();
    assert_eq!(g.title_words(), &expected);

    let out = g.apply_guess("jeanne");
    assert!(out.board_changed);
    assert!(!out.won);
    assert!(g.ledger()["jeanne"].is_title);

    // Case-insensitive: "Arc" resolves like "arc" and wins the round.
    let out = g.apply_guess("Arc");
    assert!(out.board_changed);
    assert!(out.won);
    assert_eq!(g.status(), GameStatus::Won);
    assert!(visible_words(&g).contains(&"Jeanne"));
    assert!(visible_words(&g).contains(&"d'Arc"));
    // Non-title words stay hidden after the win.
    assert!(token(&g, "née").hidden);
    assert!(token(&g, "Orléans").hidden);
}

#[test]
fn winning_reveals_unguessed_occurrences_of_title_words() {
    let mut g = game("Or", "L'or brille. Or, il dort.");

    // The exact raw match reveals the bare token; the elided "L'or" shares the
    // key but a different raw form, so it survives until the win pass.
    let out = g.apply_guess("Or");
    assert!(out.won);
    assert!(!token(&g, "L'or").hidden);
    assert!(!token(&g, "Or").hidden);
}

#[test]
fn empty_title_can_never_be_won() {
    let mut g = game("", "Une maison et un chat.");
    assert!(g.title_words().is_empty());

    for guess in ["maison", "chat"] {
        let out = g.apply_guess(guess);
        assert!(!out.won);
    }
    assert_eq!(g.status(), GameStatus::Playing);
}

#[test]
fn blank_and_punctuation_guesses_are_absorbed() {
    let mut g = game("Maison", "La maison.");

    assert_eq!(g.apply_guess(""), Default::default());
    assert_eq!(g.apply_guess("   "), Default::default());
    assert_eq!(g.guess_count(), 0);
    assert!(g.history().is_empty());

    // Input that normalizes to nothing is recorded in history only.
    assert_eq!(g.apply_guess("?!…"), Default::default());
    assert_eq!(g.guess_count(), 0);
    assert!(g.ledger().is_empty());
    assert_eq!(g.history(), ["?!…"]);
}

#[test]
fn full_reveal_unmasks_everything_and_ends_the_round() {
    let mut g = game("Bataille", "La bataille eut lieu en 1905.");
    g.apply_guess("1900");
    let ledger_before = g.ledger().clone();

    g.full_reveal();
    assert_eq!(g.status(), GameStatus::Revealed);
    assert!(g.board().iter().all(|t| !t.hidden && !t.is_close_guess));
    assert_eq!(g.ledger(), &ledger_before);

    // The round is over: further guesses change nothing.
    let out = g.apply_guess("bataille");
    assert!(!out.board_changed);
    assert_eq!(g.ledger(), &ledger_before);
}

#[test]
fn progress_counters_track_the_ledger() {
    let mut g = game("Maison", "La maison et le chat de la maison.");
    assert_eq!(g.total_unique_words(), 2);
    assert_eq!(g.found_words_count(), 0);

    g.apply_guess("chat");
    assert_eq!(g.found_words_count(), 1);
    g.apply_guess("licorne");
    assert_eq!(g.found_words_count(), 1);
    g.apply_guess("maison");
    assert_eq!(g.found_words_count(), 2);
    assert_eq!(g.guess_count(), 3);
}

#[test]
fn same_document_and_guesses_give_identical_outcomes() {
    let guesses = ["foyer", "1900", "chevaux", "banjoor", "maison", "zèbre"];
    let content = "La maison de Jeanne. Les chevaux en 1905. Bonjour.";

    let mut a = game("Jeanne", content);
    let mut b = game("Jeanne", content);
    for guess in guesses {
        assert_eq!(a.apply_guess(guess), b.apply_guess(guess));
    }
    assert_eq!(a.board(), b.board());
    assert_eq!(a.ledger(), b.ledger());
}
