//! Foundational value types for the Nonet board engine.
//!
//! This crate defines the small, copyable types every other Nonet crate is
//! built on:
//!
//! - [`Digit`]: type-safe representation of the digits 1-9
//! - [`Position`]: a `(row, col)` cell coordinate on the 9×9 board
//! - [`DigitSet`]: a 9-bit set of digits, used for candidate queries
//!
//! All types are plain values with no heap allocation; every operation on
//! them is constant time.
//!
//! # Examples
//!
//! ```
//! use nonet_core::{Digit, DigitSet, Position};
//!
//! let pos = Position::new(4, 4);
//! assert_eq!(pos.box_index(), 4); // center box
//!
//! // The 20 peer cells share a row, column, or box with `pos`.
//! assert_eq!(pos.peers().len(), 20);
//!
//! let mut used = DigitSet::new();
//! used.insert(Digit::D5);
//! assert!(used.contains(Digit::D5));
//! ```

pub mod digit;
pub mod digit_set;
pub mod position;

pub use self::{digit::Digit, digit_set::DigitSet, position::Position};
