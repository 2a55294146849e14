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

//! Word List Access
//!
//! Line counting and the uniform random draw over a word-list file. The two
//! operations share the convention that a line is terminated by `'\n'`, so a
//! trailing fragment without a terminator is never drawn.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rand::Rng;
use tracing::debug;

use crate::error::{WordDictError, WordDictResult};

/// Count the lines in a word-list file
///
/// Only `'\n'`-terminated lines count; an unterminated final fragment is
/// excluded. Fails when the file cannot be opened or read.
pub fn count_lines(path: impl AsRef<Path>) -> WordDictResult<usize> {
    let file = File::open(path.as_ref())?;
    let mut reader = BufReader::new(file);
    let mut lines = 0usize;

    loop {
        let (newlines, consumed) = {
            let chunk = reader.fill_buf()?;
            if chunk.is_empty() {
                break;
            }
            (chunk.iter().filter(|&&b| b == b'\n').count(), chunk.len())
        };
        lines += newlines;
        reader.consume(consumed);
    }

    Ok(lines)
}

/// Draw a uniformly random line from a word-list file
///
/// The index is drawn uniformly over [`count_lines`] and the file is then
/// scanned to the chosen line, which is returned without its terminator.
/// Fails on I/O errors and on a word list with no lines.
pub fn pick_random_line(path: impl AsRef<Path>) -> WordDictResult<String> {
    let path = path.as_ref();
    let total = count_lines(path)?;
    if total == 0 {
        return Err(WordDictError::EmptyWordList);
    }

    let target = rand::thread_rng().gen_range(0..total);
    debug!(total, target, path = %path.display(), "drawing word from list");

    // The file is re-read for the scan; the count above guarantees `target`
    // is reachable unless the list changed in between
    let reader = BufReader::new(File::open(path)?);
    let line = reader
        .lines()
        .nth(target)
        .ok_or(WordDictError::EmptyWordList)??;
    Ok(line)
}
