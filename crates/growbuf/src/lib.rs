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

//! Growable contiguous buffer primitive
//!
//! This crate provides [`GrowBuf`], a type-generic sequence container with
//! amortized O(1) append and explicit capacity control. A default-constructed
//! buffer is already a valid empty buffer; the allocator is only touched once
//! elements arrive.

pub mod buf; // The container itself
pub mod error; // Allocation failure taxonomy

// Re-export main components for easier access
pub use buf::{GrowBuf, MIN_CAPACITY};
pub use error::{BufError, BufResult};
