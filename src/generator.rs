// This file is part of Diceware.
//
// Copyright (c) 2025  René Coignard <contact@renecoignard.com>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::error::{Error, Result};
use crate::wordlist::get_word;
use log::debug;
use rand::TryCryptoRng;
use rand::rngs::OsRng;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Whether a symbol is appended to one of the words.
pub const DEFAULT_EXTRA: bool = false;

/// Word count used when none is configured. Also the minimum a passphrase
/// needs to pass validation.
pub const DEFAULT_WORDS: usize = 6;

pub const DEFAULT_VALIDATE: bool = true;

/// Shortest accepted plain passphrase, in bytes.
pub const MIN_PHRASE_LENGTH: usize = 17;

/// Smallest word count accepted at construction. Not a safe choice.
pub const MIN_WORDS: usize = 1;

pub(crate) const EXTRAS: &[u8] = b"~!#$%^&*()-=+[]\\{}:;\"'<>?/0123456789";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub words: usize,
    pub extra: bool,
    pub validate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS,
            extra: DEFAULT_EXTRA,
            validate: DEFAULT_VALIDATE,
        }
    }
}

impl Config {
    pub const fn with_words(mut self, words: usize) -> Self {
        self.words = words;
        self
    }

    pub const fn with_extra(mut self, extra: bool) -> Self {
        self.extra = extra;
        self
    }

    pub const fn with_validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    fn check(&self) -> Result<()> {
        if self.words < MIN_WORDS {
            return Err(Error::InvalidWordCount {
                requested: self.words,
                minimum: MIN_WORDS,
            });
        }
        Ok(())
    }
}

/// A diceware passphrase: a handful of words picked at random from the
/// 8192-word list. The words are wiped from memory on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Passphrase {
    #[zeroize(skip)]
    config: Config,
    words: Vec<String>,
}

impl Passphrase {
    /// Checks `config`, generates the words and, if enabled, validates them.
    pub fn new(config: Config) -> Result<Self> {
        config.check()?;

        let mut passphrase = Self {
            config,
            words: Vec::new(),
        };
        passphrase.regenerate()?;

        Ok(passphrase)
    }

    /// Same as `Passphrase::new(Config::default())`.
    pub fn generate() -> Result<Self> {
        Self::new(Config::default())
    }

    /// Replaces the words with a fresh draw from the OS random source,
    /// keeping the configuration.
    pub fn regenerate(&mut self) -> Result<()> {
        self.fill(&mut OsRng)?;
        self.check_validity()
    }

    fn check_validity(&self) -> Result<()> {
        if self.config.validate && !self.is_valid() {
            debug!(
                "passphrase rejected by validation ({} words, {} chars)",
                self.words.len(),
                self.len()
            );
            return Err(Error::ValidationFailed);
        }
        Ok(())
    }

    /// The words are only swapped in once every draw has succeeded.
    fn fill<R>(&mut self, rng: &mut R) -> std::result::Result<(), R::Error>
    where
        R: TryCryptoRng + ?Sized,
    {
        let word_count = self.config.words;
        let mut words = Zeroizing::new(Vec::with_capacity(word_count));

        for _ in 0..word_count {
            let id = rng.try_next_u64()? >> 1;
            words.push(get_word(id).to_owned());
        }

        if self.config.extra {
            let symbol = EXTRAS[random_below(rng, EXTRAS.len() as u64)? as usize];
            let target = random_below(rng, word_count as u64)? as usize;
            words[target].push(symbol as char);
        }

        std::mem::swap(&mut self.words, &mut *words);
        debug!(
            "generated {} words (extra: {})",
            word_count, self.config.extra
        );

        Ok(())
    }

    /// True when the plain form is at least `MIN_PHRASE_LENGTH` long and the
    /// passphrase has at least `DEFAULT_WORDS` words. The word count is
    /// compared with the default, not with the configured count.
    pub fn is_valid(&self) -> bool {
        MIN_PHRASE_LENGTH <= self.len() && DEFAULT_WORDS <= self.config.words
    }

    pub fn render(&self, humanized: bool) -> Zeroizing<String> {
        if humanized {
            let joined = Zeroizing::new(self.words.join(" "));
            Zeroizing::new(joined.trim().to_owned())
        } else {
            Zeroizing::new(self.words.concat())
        }
    }

    /// Words separated by single spaces.
    pub fn humanize(&self) -> Zeroizing<String> {
        self.render(true)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Length of the plain form in bytes.
    pub fn len(&self) -> usize {
        self.words.iter().map(String::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.words.iter().try_for_each(|word| f.write_str(word))
    }
}

impl fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Passphrase")
            .field("config", &self.config)
            .field("words", &"<redacted>")
            .finish()
    }
}

/// Uniform draw in `[0, bound)` by rejection sampling.
fn random_below<R>(rng: &mut R, bound: u64) -> std::result::Result<u64, R::Error>
where
    R: TryCryptoRng + ?Sized,
{
    debug_assert!(bound > 0);
    let rejection_threshold = u64::MAX - (u64::MAX % bound);

    loop {
        let value = rng.try_next_u64()?;
        if value < rejection_threshold {
            return Ok(value % bound);
        }
    }
}
