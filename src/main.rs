mod ui;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use diceware::{Config, DEFAULT_WORDS, Passphrase};
use log::info;
use std::io::Write;

#[derive(Parser)]
#[command(
    name = "diceware",
    version,
    author,
    about = "Diceware passphrase generator using an 8192-word list"
)]
struct Cli {
    /// Number of words in each passphrase
    #[arg(short, long, default_value_t = DEFAULT_WORDS)]
    words: usize,

    /// Append a random symbol to one of the words
    #[arg(short = 'x', long)]
    extra: bool,

    /// Skip the minimum length and word count check
    #[arg(long)]
    no_validate: bool,

    /// Print words without separating spaces
    #[arg(short, long)]
    plain: bool,

    /// Number of passphrases to generate
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Print only the passphrases
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Logs go to stderr so stdout only ever carries passphrases and the report.
fn build_logger(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    env_logger::Builder::from_env(env)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    build_logger(log_level(cli.verbose));

    let config = Config::default()
        .with_words(cli.words)
        .with_extra(cli.extra)
        .with_validate(!cli.no_validate);

    let options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: ui::detect_color_support(),
        quiet: cli.quiet,
    };

    let mut passphrase = Passphrase::new(config).context("Failed to generate passphrase")?;
    let mut outputs = Vec::with_capacity(cli.count as usize);

    for i in 0..cli.count {
        if i > 0 {
            passphrase
                .regenerate()
                .with_context(|| format!("Failed to generate passphrase {}", i + 1))?;
        }
        outputs.push(ui::Output::new(&passphrase, !cli.plain));
    }

    info!("generated {} passphrase(s)", outputs.len());
    ui::display_output(&outputs, passphrase.config(), &options);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["diceware"]).unwrap();
        assert_eq!(cli.words, DEFAULT_WORDS);
        assert_eq!(cli.count, 1);
        assert!(!cli.extra && !cli.no_validate && !cli.plain && !cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_flags() {
        let cli =
            Cli::try_parse_from(["diceware", "-w", "8", "-x", "--no-validate", "-p", "-n", "3", "-vv"])
                .unwrap();
        assert_eq!(cli.words, 8);
        assert!(cli.extra && cli.no_validate && cli.plain);
        assert_eq!(cli.count, 3);
        assert_eq!(log_level(cli.verbose), "debug");
    }

    #[test]
    fn test_cli_rejects_zero_count() {
        assert!(Cli::try_parse_from(["diceware", "-n", "0"]).is_err());
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0), "warn");
        assert_eq!(log_level(1), "info");
        assert_eq!(log_level(3), "trace");
        assert_eq!(log_level(9), "trace");
    }
}
