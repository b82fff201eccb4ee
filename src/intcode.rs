// SPDX-FileCopyrightText: 2024 - 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! The Intcode interpreter from [Day 2]
//!
//! Only the [opcodes](OpCode) defined on Day 2 are supported, and every parameter is positional:
//! it is the address of the value to use, not the value itself.
//!
//! # Example
//!
//! ```rust
//! use advent2019::intcode::{Interpreter, State};
//! let mut interpreter = Interpreter::new([1, 9, 10, 3, 2, 3, 11, 0, 99, 30, 40, 50]);
//!
//! assert_eq!(interpreter.run(), Ok(State::Halted));
//! assert_eq!(interpreter[0], 3500);
//! ```
//!
//! [Day 2]: https://adventofcode.com/2019/day/2

mod internals;
mod mem;
pub mod trace;

use std::error::Error;
use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};

use mem::IntcodeMem;
use trace::Trace;

/// The state of the interpreter after executing an instruction
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum State {
    /// There are more instructions to execute
    Running,
    /// A `HALT` instruction has been executed. Once it's been returned, no more instructions will
    /// be executed.
    Halted,
}

/// An error occured when executing an intcode instruction
#[derive(Debug, PartialEq, Clone)]
pub enum InterpreterError {
    /// An invalid opcode was encountered
    UnrecognizedOpcode(i64),
    /// An address outside of memory was read from or written to
    OutOfBounds {
        /// The address that was accessed
        address: i64,
        /// The size of memory
        len: usize,
    },
    /// The result of an `ADD` or `MUL` did not fit in an `i64`
    Overflow {
        /// The address of the instruction that overflowed
        instr_ptr: i64,
    },
    /// A previous instruction failed, so the interpreter refuses to continue
    Poisoned,
}

impl Display for InterpreterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedOpcode(n) => write!(f, "encountered unrecognized opcode {n}"),
            Self::OutOfBounds { address, len } => {
                write!(f, "address {address} is out of bounds for memory of size {len}")
            }
            Self::Overflow { instr_ptr } => {
                write!(f, "instruction at {instr_ptr} overflowed")
            }
            Self::Poisoned => write!(f, "interpreter is poisoned by an earlier error"),
        }
    }
}

impl Error for InterpreterError {}

/// The instructions understood by the interpreter
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum OpCode {
    /// `ADD a, b, dest` stores `*a + *b` into `*dest`
    Add = 1,
    /// `MUL a, b, dest` stores `*a * *b` into `*dest`
    Mul = 2,
    /// `HALT` stops execution
    Halt = 99,
}

impl OpCode {
    /// Number of ints an instruction with this opcode takes up, including the opcode itself
    pub const fn width(self) -> i64 {
        match self {
            OpCode::Add | OpCode::Mul => 4,
            OpCode::Halt => 1,
        }
    }
}

impl TryFrom<i64> for OpCode {
    type Error = InterpreterError;
    fn try_from(i: i64) -> Result<Self, Self::Error> {
        match i {
            1 => Ok(OpCode::Add),
            2 => Ok(OpCode::Mul),
            99 => Ok(OpCode::Halt),
            _ => Err(InterpreterError::UnrecognizedOpcode(i)),
        }
    }
}

impl Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpCode::Add => write!(f, "ADD"),
            OpCode::Mul => write!(f, "MUL"),
            OpCode::Halt => write!(f, "HALT"),
        }
    }
}

/// An intcode interpreter, which can optionally [trace](Interpreter::start_trace) the
/// instructions it executes.
///
/// Cloning an interpreter produces a fully independent copy of its memory, so a template can be
/// cloned once per run without runs affecting each other.
#[derive(Clone)]
pub struct Interpreter {
    index: i64,
    code: IntcodeMem,
    halted: bool,
    poisoned: bool,
    trace: Option<Trace>,
}

// ignore the trace field
impl PartialEq for Interpreter {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
            && self.halted == other.halted
            && self.poisoned == other.poisoned
            && self.code == other.code
    }
}

impl fmt::Debug for Interpreter {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Interpreter")
            .field("code", &self.code)
            .field("ip", &self.index)
            .field("halted", &self.halted)
            .field("poisoned", &self.poisoned)
            .field("tracing", &self.trace.is_some())
            .finish()
    }
}

/// Panics if `i` is out of bounds. See [Interpreter::mem_get] for a checked alternative.
impl Index<i64> for Interpreter {
    type Output = i64;

    fn index(&self, i: i64) -> &Self::Output {
        self.code.index(i)
    }
}

/// Panics if `i` is out of bounds. See [Interpreter::mem_set] for a checked alternative.
impl IndexMut<i64> for Interpreter {
    fn index_mut(&mut self, i: i64) -> &mut Self::Output {
        self.code.index_mut(i)
    }
}

impl Interpreter {
    /// Create a new interpreter. Collects `code` into the starting memory state.
    pub fn new(code: impl IntoIterator<Item = i64>) -> Self {
        Self {
            index: 0,
            code: code.into_iter().collect(),
            halted: false,
            poisoned: false,
            trace: None,
        }
    }

    /// Get the memory at `address`
    #[doc(alias = "peek")]
    pub fn mem_get(&self, address: i64) -> Result<i64, InterpreterError> {
        self.code.get(address)
    }

    /// Manually set a memory location
    #[doc(alias("poke", "write"))]
    pub fn mem_set(&mut self, address: i64, value: i64) -> Result<(), InterpreterError> {
        *self.code.get_mut(address)? = value;
        Ok(())
    }

    /// The address of the next instruction to execute
    pub fn instr_ptr(&self) -> i64 {
        self.index
    }

    /// Whether a `HALT` instruction has been executed
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Whether an instruction has failed. A poisoned interpreter won't execute any more
    /// instructions.
    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    /// View the full contents of memory
    pub fn memory(&self) -> &[i64] {
        self.code.as_slice()
    }

    /// Consume the interpreter, returning its memory
    pub fn into_memory(self) -> Vec<i64> {
        self.code.into_vec()
    }

    /// Execute a single instruction.
    ///
    /// If the interpreter has already halted, this does nothing and returns [`State::Halted`].
    /// If the instruction fails, the interpreter is poisoned, and every later call returns
    /// [`InterpreterError::Poisoned`].
    pub fn step(&mut self) -> Result<State, InterpreterError> {
        if self.poisoned {
            return Err(InterpreterError::Poisoned);
        }
        if self.halted {
            return Ok(State::Halted);
        }
        let result = self.exec_instruction();
        if result.is_err() {
            self.poisoned = true;
        }
        result
    }

    /// Execute until the program halts or an instruction fails
    pub fn run(&mut self) -> Result<State, InterpreterError> {
        while self.step()? == State::Running {}
        Ok(State::Halted)
    }
}

/// Run `code` to completion on a fresh interpreter, returning the final state of memory
///
/// ```rust
/// use advent2019::intcode::execute;
/// assert_eq!(execute(vec![2, 4, 4, 5, 99, 0]), Ok(vec![2, 4, 4, 5, 99, 9801]));
/// ```
pub fn execute(code: impl IntoIterator<Item = i64>) -> Result<Vec<i64>, InterpreterError> {
    let mut interpreter = Interpreter::new(code);
    interpreter.run()?;
    Ok(interpreter.into_memory())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_by_step() {
        let mut interpreter = Interpreter::new([1, 9, 10, 3, 2, 3, 11, 0, 99, 30, 40, 50]);

        assert_eq!(interpreter.step(), Ok(State::Running));
        assert_eq!(interpreter[3], 70);
        assert_eq!(interpreter.instr_ptr(), 4);

        assert_eq!(interpreter.step(), Ok(State::Running));
        assert_eq!(interpreter[0], 3500);

        assert_eq!(interpreter.step(), Ok(State::Halted));
        assert!(interpreter.is_halted());
        assert_eq!(interpreter.instr_ptr(), 8);

        // halting is sticky
        let halted = interpreter.clone();
        assert_eq!(interpreter.step(), Ok(State::Halted));
        assert_eq!(interpreter, halted);
    }

    #[test]
    fn small_examples() {
        let cases: [(&[i64], i64, i64); 5] = [
            (&[1, 9, 10, 3, 2, 3, 11, 0, 99, 30, 40, 50], 0, 3500),
            (&[1, 0, 0, 0, 99], 0, 2),
            (&[2, 3, 0, 3, 99], 3, 6),
            (&[2, 4, 4, 5, 99, 0], 5, 9801),
            (&[1, 1, 1, 4, 99, 5, 6, 0, 99], 0, 30),
        ];
        for (code, address, expected) in cases {
            let mem = execute(code.iter().copied()).unwrap();
            assert_eq!(mem[address as usize], expected, "{code:?}");
        }
    }

    #[test]
    fn deterministic() {
        let code = [1, 1, 1, 4, 99, 5, 6, 0, 99];
        assert_eq!(execute(code), execute(code));
    }

    /// Anything other than 1, 2, or 99 is an error rather than an implicit halt
    #[test]
    fn unrecognized_opcode_poisons() {
        let mut interpreter = Interpreter::new([1, 0, 0, 0, 42, 0, 0, 0, 99]);
        let before_failure = {
            let mut i = interpreter.clone();
            i.step().unwrap();
            i.into_memory()
        };
        assert_eq!(
            interpreter.run(),
            Err(InterpreterError::UnrecognizedOpcode(42))
        );
        assert!(interpreter.is_poisoned());
        assert_eq!(interpreter.memory(), before_failure.as_slice());
        assert_eq!(interpreter.step(), Err(InterpreterError::Poisoned));
        assert_eq!(interpreter.run(), Err(InterpreterError::Poisoned));
    }

    #[test]
    fn out_of_bounds_operand() {
        assert_eq!(
            execute([1, 0, 12, 0, 99]),
            Err(InterpreterError::OutOfBounds { address: 12, len: 5 })
        );
        assert_eq!(
            execute([1, -1, 0, 0, 99]),
            Err(InterpreterError::OutOfBounds { address: -1, len: 5 })
        );
    }

    #[test]
    fn out_of_bounds_destination() {
        let mut interpreter = Interpreter::new([1, 0, 0, 5, 99]);
        assert_eq!(
            interpreter.run(),
            Err(InterpreterError::OutOfBounds { address: 5, len: 5 })
        );
        assert_eq!(interpreter.memory(), &[1, 0, 0, 5, 99]);
    }

    /// Running off the end without a `HALT` is an error too
    #[test]
    fn missing_halt() {
        assert_eq!(
            execute([1, 0, 0, 0]),
            Err(InterpreterError::OutOfBounds { address: 4, len: 4 })
        );
        assert_eq!(
            execute([1, 0, 0]),
            Err(InterpreterError::OutOfBounds { address: 3, len: 3 })
        );
    }

    #[test]
    fn overflow() {
        assert_eq!(
            execute([2, 5, 5, 0, 99, i64::MAX]),
            Err(InterpreterError::Overflow { instr_ptr: 0 })
        );
    }

    #[test]
    fn checked_access() {
        let mut interpreter = Interpreter::new([1, 0, 0, 0, 99]);
        assert_eq!(interpreter.mem_set(1, 4), Ok(()));
        assert_eq!(interpreter.mem_get(1), Ok(4));
        assert_eq!(
            interpreter.mem_set(9, 4),
            Err(InterpreterError::OutOfBounds { address: 9, len: 5 })
        );
        // a failed poke is not an execution failure
        assert!(!interpreter.is_poisoned());
        assert_eq!(interpreter.run(), Ok(State::Halted));
        assert_eq!(interpreter[0], 100);
    }

    #[test]
    fn clones_are_independent() {
        let template = Interpreter::new([1, 0, 0, 0, 99]);
        let mut a = template.clone();
        let mut b = template.clone();
        a[1] = 4;
        a[2] = 4;
        b[1] = 0;
        b[2] = 4;
        a.run().unwrap();
        b.run().unwrap();
        assert_eq!(a[0], 198);
        assert_eq!(b[0], 100);
        assert_eq!(template.memory(), &[1, 0, 0, 0, 99]);
    }
}
