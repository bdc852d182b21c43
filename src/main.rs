mod render;

use motcache::{Article, Game};
use std::io::{self, BufRead, IsTerminal, Write};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let article = match load_article(&config) {
        Ok(article) => article,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let mut game = Game::load(article);
    let palette = render::Palette::new(config.color);
    let interactive = io::stdin().is_terminal();

    render::print_round_header(&game, &palette);
    render::print_board(&game, &palette);

    let stdin = io::stdin();
    loop {
        if interactive {
            print!("motcache> ");
            let _ = io::stdout().flush();
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let input = line.trim();
        match input {
            "" => continue,
            ":q" | ":quit" => break,
            ":ledger" => {
                render::print_ledger(&game, &palette);
                continue;
            }
            ":reveal" => {
                game.full_reveal();
                render::print_board(&game, &palette);
                render::print_surrender(&game, &palette);
                break;
            }
            _ => {}
        }

        let outcome = game.apply_guess(input);
        render::print_guess(input, &outcome, &game, &palette);
        render::print_board(&game, &palette);
        if outcome.won {
            render::print_win(&game, &palette);
            break;
        }
    }
}

struct CliConfig {
    article_path: String,
    title: Option<String>,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut article_path: Option<String> = None;
    let mut title: Option<String> = None;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("motcache {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--article" | "-a" => {
                let value = args.next().ok_or_else(|| "error: --article expects a path".to_string())?;
                if article_path.is_some() {
                    return Err("error: article provided multiple times".to_string());
                }
                article_path = Some(value);
            }
            "--title" => {
                let value = args.next().ok_or_else(|| "error: --title expects a value".to_string())?;
                title = Some(value);
            }
            _ if arg.starts_with("--article=") => {
                let value = arg.trim_start_matches("--article=");
                if article_path.is_some() {
                    return Err("error: article provided multiple times".to_string());
                }
                article_path = Some(value.to_string());
            }
            _ if arg.starts_with("--title=") => {
                title = Some(arg.trim_start_matches("--title=").to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                if article_path.is_some() {
                    return Err("error: article provided multiple times".to_string());
                }
                article_path = Some(arg);
            }
        }
    }

    let article_path = article_path.ok_or_else(|| format!("error: no article provided\n\n{}", help_text()))?;

    Ok(CliConfig { article_path, title, color })
}

/// Read the document file. Without `--title`, the first line is the title and
/// the remainder is the content.
fn load_article(config: &CliConfig) -> Result<Article, String> {
    let raw = std::fs::read_to_string(&config.article_path)
        .map_err(|err| format!("error: failed to read '{}': {err}", config.article_path))?;

    let (title, content) = match &config.title {
        Some(title) => (title.clone(), raw),
        None => {
            let mut lines = raw.splitn(2, '\n');
            let title = lines.next().unwrap_or("").trim().to_string();
            let content = lines.next().unwrap_or("").to_string();
            (title, content)
        }
    };

    if content.trim().is_empty() {
        return Err(format!("error: '{}' has no document content", config.article_path));
    }

    Ok(Article { title, url: None, content })
}

fn help_text() -> String {
    format!(
        "motcache {version}

Word-reveal guessing game over a local document.

Usage:
  motcache [OPTIONS] --article <path>
  motcache [OPTIONS] <path>

The file's first line is the document title and the rest is its content,
unless --title overrides the title. Guesses are read line by line from
stdin; piping a fixed guess list replays a round reproducibly.

Options:
  -a, --article <path>   Document file to play.
  --title <text>         Use <text> as the title and the whole file as content.
  --color                Force ANSI color output.
  --no-color             Disable ANSI color output.
  -h, --help             Show this help message.
  -V, --version          Print version information.

Commands during play:
  :ledger                Show the guess ledger.
  :reveal                Surrender and unmask the board.
  :q, :quit              Exit.

Exit codes:
  0  Success.
  1  Document failed to load.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
