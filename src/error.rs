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

use rand::rand_core::OsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid word count {requested}, at least {minimum} required")]
    InvalidWordCount { requested: usize, minimum: usize },
    #[error("generated passphrase does not meet the minimum security requirements")]
    ValidationFailed,
    #[error("operating system random source failed")]
    RandomSource(#[from] OsError),
}

pub type Result<T> = std::result::Result<T, Error>;
