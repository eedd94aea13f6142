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

use std::sync::OnceLock;

const WORDLIST_DATA: &str = include_str!("../assets/wordlist_8k.txt");

#[cfg(test)]
const EXPECTED_SHA256: &str = "89f35f5fe215bc6eb4e603ad05e3b757036d98e18f47f97a21206e8f62e471a9";

/// 0x1fff, folds any index into the list.
const INDEX_MASK: u64 = 0x1fff;

static WORDLIST: OnceLock<Vec<&'static str>> = OnceLock::new();

pub fn get_wordlist() -> &'static [&'static str] {
    WORDLIST.get_or_init(|| {
        let words: Vec<&'static str> = WORDLIST_DATA
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        assert_eq!(
            words.len(),
            wordlist_size(),
            "Wordlist must contain exactly 8192 words"
        );
        words
    })
}

pub const fn wordlist_size() -> usize {
    8192
}

/// Returns the word at `id mod 8192`. Any `u64` is a valid index.
pub fn get_word(id: u64) -> &'static str {
    get_wordlist()[(id & INDEX_MASK) as usize]
}
