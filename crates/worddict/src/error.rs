// Stretchy
// Copyright (C) 2026 Stretchy

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use thiserror::Error;

/// Errors that can occur while reading a word-list file
#[derive(Debug, Error)]
pub enum WordDictError {
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),

    #[error("word list contains no lines")]
    EmptyWordList,
}

/// Type alias for word dictionary results
pub type WordDictResult<T> = Result<T, WordDictError>;
