use motcache::{Game, GameStatus, GuessOutcome, normalize};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub use ansi::Palette;

pub fn print_round_header(game: &Game, palette: &Palette) {
    println!(
        "\n{}  {}",
        palette.bold(palette.paint("⚙  motcache", ansi::CYAN)),
        palette.dim(format!("{} hidden words · title has {} word(s)", game.total_unique_words(), game.title_words().len())),
    );
}

/// Render the board: hidden words as length-preserving masks, hint chips as
/// the bracketed near-miss text, everything else verbatim.
pub fn print_board(game: &Game, palette: &Palette) {
    println!("\n{}", palette.paint("━━━ Article ━━━", ansi::GRAY));
    println!("  {}", masked_title(game, palette));
    println!();

    let mut line = String::from("  ");
    for token in game.board() {
        let rendered = if token.is_punctuation {
            token.original.clone()
        } else if token.is_close_guess {
            let chip = token.display_as.as_deref().unwrap_or(&token.original);
            palette.paint(format!("⟨{chip}⟩"), ansi::YELLOW)
        } else if token.hidden {
            palette.dim("·".repeat(token.original.chars().count()))
        } else {
            token.original.clone()
        };

        for part in rendered.split_inclusive('\n') {
            match part.strip_suffix('\n') {
                Some(head) => {
                    line.push_str(head);
                    println!("{line}");
                    line = String::from("  ");
                }
                None => line.push_str(part),
            }
        }
    }
    if !line.trim().is_empty() {
        println!("{line}");
    }
}

fn masked_title(game: &Game, palette: &Palette) -> String {
    let over = game.status() != GameStatus::Playing;
    game.title()
        .split(' ')
        .map(|word| {
            let key = normalize(word);
            let found = game.ledger().get(&key).is_some_and(|record| record.found);
            if over || found || key.is_empty() {
                palette.bold(word)
            } else {
                palette.dim("·".repeat(word.chars().count()))
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_guess(input: &str, outcome: &GuessOutcome, game: &Game, palette: &Palette) {
    let key = normalize(input);
    let summary = match game.ledger().get(&key) {
        Some(record) if record.found => {
            palette.paint(format!("✓ revealed {} token(s)", record.count), ansi::GREEN)
        }
        Some(record) if record.is_synonym => palette.paint("~ close", ansi::YELLOW),
        Some(_) if !outcome.board_changed => palette.dim("✗ nothing"),
        _ => palette.dim("(absorbed)"),
    };
    println!("\n  {} {}", palette.bold(input), summary);
}

pub fn print_ledger(game: &Game, palette: &Palette) {
    println!("\n{}", palette.paint("━━━ Ledger ━━━", ansi::GRAY));
    if game.ledger().is_empty() {
        println!("{}", palette.dim("  no guesses yet"));
        return;
    }

    let mut entries: Vec<_> = game.ledger().iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    for (word, record) in entries {
        let mark = if record.found {
            palette.paint(format!("✓ ×{}", record.count), ansi::GREEN)
        } else if record.is_synonym {
            palette.paint("~", ansi::YELLOW)
        } else {
            palette.dim("✗")
        };
        let title_tag = if record.is_title { palette.paint(" [titre]", ansi::CYAN) } else { String::new() };
        println!("  {word} {mark}{title_tag}");
    }
    println!(
        "  {}",
        palette.dim(format!(
            "{} guess(es) · {}/{} words found",
            game.guess_count(),
            game.found_words_count(),
            game.total_unique_words()
        ))
    );
}

pub fn print_win(game: &Game, palette: &Palette) {
    println!(
        "\n{} {}",
        palette.bold(palette.paint("★ Gagné !", ansi::GREEN)),
        palette.dim(format!("« {} » en {} guess(es)", game.title(), game.guess_count())),
    );
}

pub fn print_surrender(game: &Game, palette: &Palette) {
    println!(
        "\n{} {}",
        palette.paint("— Révélé.", ansi::YELLOW),
        palette.dim(format!("C'était « {} ».", game.title())),
    );
}
