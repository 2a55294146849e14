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

//! File-based random word picker
//!
//! Counts and draws lines from a newline-delimited word list on disk. The
//! draw is uniform over the line count.

pub mod dict; // Line counting and the random draw
pub mod error; // I/O and empty-list failures

// Re-export main components for easier access
pub use dict::{count_lines, pick_random_line};
pub use error::{WordDictError, WordDictResult};
