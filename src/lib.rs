pub mod error;
pub mod generator;
pub mod wordlist;

pub use error::{Error, Result};
pub use generator::{
    Config, DEFAULT_EXTRA, DEFAULT_VALIDATE, DEFAULT_WORDS, MIN_PHRASE_LENGTH, MIN_WORDS,
    Passphrase,
};
pub use wordlist::{get_word, get_wordlist, wordlist_size};
