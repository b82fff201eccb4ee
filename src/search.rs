// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Searching for the noun and verb that make an Intcode program produce a given output
//!
//! The noun and verb are written to addresses 1 and 2 of a fresh copy of the program before each
//! run, and the output is whatever is at address 0 once it halts.
//!
//! # Example
//!
//! ```rust
//! use advent2019::intcode::Interpreter;
//! use advent2019::search::{NounVerb, SearchOutcome, search};
//!
//! // 0 <- *noun + *verb
//! let template = Interpreter::new([1, 0, 0, 0, 99]);
//! assert_eq!(
//!     search(&template, 100).unwrap(),
//!     SearchOutcome::Found(NounVerb { noun: 0, verb: 4 }),
//! );
//! assert_eq!(search(&template, 12345).unwrap(), SearchOutcome::NotFound);
//! ```

use std::error::Error;
use std::fmt::{self, Display};
use std::ops::Range;

use itertools::iproduct;
use log::{debug, info};

use crate::intcode::{Interpreter, InterpreterError};

/// Address the noun is written to
pub const NOUN_ADDR: i64 = 1;
/// Address the verb is written to
pub const VERB_ADDR: i64 = 2;
/// Address the output is read from
pub const OUTPUT_ADDR: i64 = 0;

/// A noun and verb pair
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct NounVerb {
    #[allow(missing_docs, reason = "trivial")]
    pub noun: i64,
    #[allow(missing_docs, reason = "trivial")]
    pub verb: i64,
}

impl NounVerb {
    /// The puzzle answer format: `100 * noun + verb`
    pub const fn encode(self) -> i64 {
        100 * self.noun + self.verb
    }
}

impl Display for NounVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "noun {}, verb {}", self.noun, self.verb)
    }
}

/// The result of a search that ran to completion
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SearchOutcome {
    /// The first pair, in order, that produced the target
    Found(NounVerb),
    /// No pair in the search space produced the target
    NotFound,
}

/// A search that could not be carried out
#[derive(Debug, PartialEq, Clone)]
pub enum SearchError {
    /// The program is too short to hold a noun and verb
    TemplateTooShort(usize),
    /// The first row and first column of the search space all failed in the same way, so the
    /// program itself is broken
    Structural {
        /// The error every trial in the row and column failed with
        error: InterpreterError,
        /// Number of trials that had run when the search gave up
        trials: usize,
    },
}

impl Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TemplateTooShort(len) => {
                write!(f, "program has {len} ints, too few to hold a noun and verb")
            }
            Self::Structural { error, trials } => {
                write!(f, "program fails regardless of noun and verb ({trials} trials): {error}")
            }
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::TemplateTooShort(_) => None,
            Self::Structural { error, .. } => Some(error),
        }
    }
}

/// The bounds of a search. Both bounds are half-open.
#[derive(Debug, PartialEq, Clone)]
pub struct SearchSpace {
    #[allow(missing_docs, reason = "trivial")]
    pub nouns: Range<i64>,
    #[allow(missing_docs, reason = "trivial")]
    pub verbs: Range<i64>,
}

impl Default for SearchSpace {
    /// `0..100` for both the noun and verb
    fn default() -> Self {
        Self {
            nouns: 0..100,
            verbs: 0..100,
        }
    }
}

/// Run a copy of `template` with the given noun and verb, returning the output
///
/// ```rust
/// use advent2019::intcode::Interpreter;
/// use advent2019::search::run_with;
/// let template = Interpreter::new([1, 0, 0, 0, 99]);
/// assert_eq!(run_with(&template, 4, 4), Ok(198));
/// ```
pub fn run_with(template: &Interpreter, noun: i64, verb: i64) -> Result<i64, InterpreterError> {
    let mut interp = template.clone();
    interp.mem_set(NOUN_ADDR, noun)?;
    interp.mem_set(VERB_ADDR, verb)?;
    interp.run()?;
    interp.mem_get(OUTPUT_ADDR)
}

/// Search the [default search space](SearchSpace::default) for a noun and verb that produce
/// `target`
pub fn search(template: &Interpreter, target: i64) -> Result<SearchOutcome, SearchError> {
    search_in(template, target, SearchSpace::default())
}

/// Search `space` for the first noun and verb that produce `target`, with the noun varying
/// slowest.
///
/// A pair that makes the program fail is skipped. If every pair for the first noun fails in
/// exactly the same way, the first verb is tried with each remaining noun, and if those all fail
/// in that same way too the search is abandoned with [`SearchError::Structural`].
pub fn search_in(
    template: &Interpreter,
    target: i64,
    space: SearchSpace,
) -> Result<SearchOutcome, SearchError> {
    let len = template.memory().len();
    if len <= VERB_ADDR as usize {
        return Err(SearchError::TemplateTooShort(len));
    }

    let row_len = space.verbs.clone().count();
    let column = space.nouns.clone();
    let (first_noun, first_verb) = (space.nouns.start, space.verbs.start);
    // the error shared by every trial so far, while still in the first row
    let mut repeated: Option<InterpreterError> = None;
    let mut failures = 0_usize;

    for (trials, (noun, verb)) in iproduct!(space.nouns, space.verbs).enumerate() {
        match run_with(template, noun, verb) {
            Ok(output) if output == target => {
                let found = NounVerb { noun, verb };
                info!("found {found} after {} trials ({failures} failed)", trials + 1);
                return Ok(SearchOutcome::Found(found));
            }
            Ok(_) => repeated = None,
            Err(e) => {
                debug!("noun {noun}, verb {verb} failed: {e}");
                failures += 1;
                if noun == first_noun {
                    repeated = match repeated {
                        None if verb == first_verb => Some(e),
                        Some(prev) if prev == e => Some(prev),
                        _ => None,
                    };
                }
            }
        }
        if trials + 1 == row_len
            && let Some(error) = repeated.take()
        {
            debug!("every verb failed for noun {first_noun}: {error}");
            if let Some(extra) = fails_for_every_noun(template, column.clone(), first_verb, &error) {
                return Err(SearchError::Structural {
                    error,
                    trials: row_len + extra,
                });
            }
        }
    }
    info!("target {target} not found ({failures} trials failed)");
    Ok(SearchOutcome::NotFound)
}

/// Run `verb` with every noun after the first, returning the number of trials run if all of them
/// failed with `error`
fn fails_for_every_noun(
    template: &Interpreter,
    nouns: Range<i64>,
    verb: i64,
    error: &InterpreterError,
) -> Option<usize> {
    let mut trials = 0;
    for noun in nouns.skip(1) {
        trials += 1;
        match run_with(template, noun, verb) {
            Err(e) if e == *error => {}
            _ => return None,
        }
    }
    Some(trials)
}
