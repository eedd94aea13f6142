use console::Style;
use diceware::{Config, MIN_PHRASE_LENGTH, Passphrase, wordlist_size};
use zeroize::Zeroizing;

/// log2 of the word list size; each word is one of 8192.
pub const BITS_PER_WORD: usize = 13;

pub const EXTRAS_COUNT: usize = 36;

pub struct Output {
    pub text: Zeroizing<String>,
    pub length: usize,
    pub word_count: usize,
    pub valid: bool,
}

impl Output {
    pub fn new(passphrase: &Passphrase, humanized: bool) -> Self {
        Self {
            text: passphrase.render(humanized),
            length: passphrase.len(),
            word_count: passphrase.word_count(),
            valid: passphrase.is_valid(),
        }
    }
}

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

fn tree_branches(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("├─", "└─")
    } else {
        ("|-", "`-")
    }
}

/// Word-count bits only; the extra symbol is not counted.
pub fn counted_bits(word_count: usize) -> usize {
    word_count * BITS_PER_WORD
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}

fn status_style(secure: bool, options: &DisplayOptions) -> Style {
    if !options.color_support {
        Style::new()
    } else if secure {
        Style::new().green()
    } else {
        Style::new().yellow()
    }
}

pub fn display_output(outputs: &[Output], config: &Config, options: &DisplayOptions) {
    if options.quiet {
        for output in outputs {
            println!("{}", &*output.text);
        }
        return;
    }

    for (i, output) in outputs.iter().enumerate() {
        println!("Out[{}]:\n{}\n", i, &*output.text);
    }

    display_settings(config, options);

    // Report the weakest passphrase of the batch.
    if let Some(weakest) = outputs.iter().min_by_key(|output| output.length) {
        display_stats(weakest, outputs.iter().all(|output| output.valid), options);
    }
}

fn display_settings(config: &Config, options: &DisplayOptions) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);
    let (branch, last) = tree_branches(options.unicode_support);

    let words_secure = config.words >= diceware::DEFAULT_WORDS;
    let words_style = status_style(words_secure, options);
    let validate_style = status_style(config.validate, options);

    println!("Settings:");

    println!(
        "  {} Words      {} {} {}",
        branch,
        words_style.apply_to(format!(
            "[{}]",
            if words_secure { check_ok } else { check_warn }
        )),
        words_style.apply_to(config.words),
        plural(config.words, "word", "words")
    );

    if config.extra {
        println!(
            "  {} Extra      1 of {} symbols on 1 word",
            branch, EXTRAS_COUNT
        );
    } else {
        println!("  {} Extra      none", branch);
    }

    println!(
        "  {} Validation {} {}",
        branch,
        validate_style.apply_to(format!(
            "[{}]",
            if config.validate { check_ok } else { check_warn }
        )),
        if config.validate {
            format!("min {} chars, {} words", MIN_PHRASE_LENGTH, diceware::DEFAULT_WORDS)
        } else {
            "disabled".to_string()
        }
    );

    println!("  {} Wordlist   Diceware 8k ({} words)", branch, wordlist_size());
    println!("  {} Source     OS random generator", branch);
    println!("  {} Sampling   13-bit mask, unbiased rejection", last);

    println!();
}

fn display_stats(output: &Output, all_valid: bool, options: &DisplayOptions) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);
    let (branch, last) = tree_branches(options.unicode_support);

    let bits = counted_bits(output.word_count);
    let length_secure = output.length >= MIN_PHRASE_LENGTH;

    let (status_icon, status_text) = if all_valid {
        (check_ok, "Strong")
    } else {
        (check_warn, "Weak")
    };
    let security_style = status_style(all_valid, options);
    let length_style = status_style(length_secure, options);

    println!("Stats:");

    println!(
        "  {} Bits       {} {} ({} x {})",
        branch,
        security_style.apply_to(format!("[{}]", status_icon)),
        security_style.apply_to(bits),
        output.word_count,
        BITS_PER_WORD
    );

    println!(
        "  {} Length     {} {} {}",
        branch,
        length_style.apply_to(format!(
            "[{}]",
            if length_secure { check_ok } else { check_warn }
        )),
        length_style.apply_to(output.length),
        plural(output.length, "char", "chars")
    );

    println!(
        "  {} Words      {} {}",
        last,
        output.word_count,
        plural(output.word_count, "word", "words")
    );

    println!(
        "\n{} Security: {}",
        security_style.apply_to(format!("[{}]", status_icon)),
        security_style.apply_to(status_text)
    );
}
