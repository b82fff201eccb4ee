// SPDX-FileCopyrightText: 2024 - 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD
#![warn(missing_docs)]

//! Solutions to the early days of [Advent of Code 2019], built around a small Intcode
//! interpreter.
//!
//! | Day | Module     |
//! |-----|------------|
//! | 1   | [fuel]     |
//! | 2   | [intcode], [search] |
//! | 3   | [wires]    |
//! | 4   | [password] |
//! | 6   | [orbits]   |
//!
//! # Example
//!
//! ```rust
//! use advent2019::prelude::*;
//!
//! let template = Interpreter::new(parse_program("1,0,0,0,99").unwrap());
//! assert_eq!(run_with(&template, 4, 4), Ok(198));
//! assert_eq!(
//!     search(&template, 198).unwrap(),
//!     SearchOutcome::Found(NounVerb { noun: 4, verb: 4 })
//! );
//! ```
//!
//! [Advent of Code 2019]: https://adventofcode.com/2019

pub mod fuel;
pub mod intcode;
pub mod orbits;
pub mod parse;
pub mod password;
pub mod search;
pub mod wires;

/// A small module that re-exports items needed when working with the Intcode interpreter
pub mod prelude {
    pub use crate::intcode::{Interpreter, InterpreterError, State};
    pub use crate::parse::parse_program;
    pub use crate::search::{NounVerb, SearchOutcome, run_with, search};
}
