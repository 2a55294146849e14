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

/// Errors that can occur while managing buffer storage
///
/// Allocation exhaustion is the only runtime failure mode of the buffer.
/// Contract violations such as popping an empty buffer are assertions, not
/// error values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufError {
    #[error("failed to allocate buffer storage for {requested} elements")]
    AllocationFailed { requested: usize },

    #[error("requested capacity overflows the maximum allocation size")]
    CapacityOverflow,
}

/// Type alias for buffer operation results
pub type BufResult<T> = Result<T, BufError>;
