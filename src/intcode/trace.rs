// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Tracing of executed instructions
use std::fmt::{self, Debug, Display};

use super::{Interpreter, OpCode};

#[derive(Clone, Copy)]
enum TracedOp {
    Add((i64, i64), (i64, i64), (i64, i64)),
    Mul((i64, i64), (i64, i64), (i64, i64)),
    Halt,
}

#[derive(Clone)]
/// An opaque type containing information about what instruction was executed, which can be queried
/// with its various methods, or converted into a [String] using its [Display] impl.
pub struct TracedInstr {
    op: TracedOp,
    op_int: i64,
    instr_ptr: i64,
    opcode: OpCode,
}

impl TracedInstr {
    /// Return the instruction pointer's position when the traced instruction was executed
    pub fn instr_ptr(&self) -> i64 {
        self.instr_ptr
    }

    /// Return the actual integer of the traced instruction
    pub fn op_int(&self) -> i64 {
        self.op_int
    }

    /// Return the opcode of the traced instruction
    pub fn op_code(&self) -> OpCode {
        self.opcode
    }

    /// If the instruction stored a value, return that value
    pub fn stored_val(&self) -> Option<i64> {
        match self.op {
            TracedOp::Add(_, _, (_, val)) | TracedOp::Mul(_, _, (_, val)) => Some(val),
            TracedOp::Halt => None,
        }
    }

    /// If the instruction stored a value, return the address it was stored to
    pub fn dest(&self) -> Option<i64> {
        match self.op {
            TracedOp::Add(_, _, (dest, _)) | TracedOp::Mul(_, _, (dest, _)) => Some(dest),
            TracedOp::Halt => None,
        }
    }

    /// Return the `(address, value)` pairs that the instruction's input parameters resolved to
    pub fn inputs(&self) -> Option<[(i64, i64); 2]> {
        match self.op {
            TracedOp::Add(a, b, _) | TracedOp::Mul(a, b, _) => Some([a, b]),
            TracedOp::Halt => None,
        }
    }

    pub(super) fn build(
        opcode: OpCode,
        op_int: i64,
        instr_ptr: i64,
        resolved_params: &[(i64, i64)],
    ) -> Self {
        macro_rules! op {
            {$id: ident(_, _, _)} => {{
                debug_assert_eq!(resolved_params.len(), 3);
                TracedOp::$id(resolved_params[0], resolved_params[1], resolved_params[2])
            }};
            {$id: ident} => {{
                debug_assert_eq!(resolved_params.len(), 0);
                TracedOp::$id
            }}
        }

        let op = match opcode {
            OpCode::Add => op! { Add(_, _, _) },
            OpCode::Mul => op! { Mul(_, _, _) },
            OpCode::Halt => op! { Halt },
        };
        Self {
            op,
            op_int,
            instr_ptr,
            opcode,
        }
    }
}

impl Interpreter {
    /// Begin a [Trace] of executed instructions. If a trace is already running, this replaces that
    /// trace and returns in a [`Some`], otherwise, it returns [`None`].
    ///
    /// # Example
    /// ```
    /// use advent2019::intcode::Interpreter;
    /// let mut interp = Interpreter::new([1, 0, 0, 0, 99]);
    /// interp.start_trace();
    /// interp.run().unwrap();
    /// let trace = interp.end_trace().unwrap();
    /// assert_eq!(trace.0.len(), 2);
    /// assert_eq!(trace.0[0].stored_val(), Some(2));
    /// ```
    pub fn start_trace(&mut self) -> Option<Trace> {
        self.trace.replace(Trace::new())
    }

    /// Stop tracing executed instructions into a [Trace]. If no trace was active, returns [`None`]
    ///
    /// see [Interpreter::start_trace]
    pub fn end_trace(&mut self) -> Option<Trace> {
        self.trace.take()
    }

    /// Get a view of the current trace
    pub fn show_trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }
}

#[derive(Debug, Default, Clone)]
/// A log of instructions that an [Interpreter] has executed since a call to
/// [Interpreter::start_trace]
///
/// see [Interpreter::start_trace]
pub struct Trace(pub Vec<TracedInstr>);

impl Trace {
    pub(crate) fn push(
        &mut self,
        opcode: OpCode,
        op_int: i64,
        instr_ptr: i64,
        resolved_params: &[(i64, i64)],
    ) {
        self.0
            .push(TracedInstr::build(opcode, op_int, instr_ptr, resolved_params))
    }

    pub(crate) fn new() -> Self {
        Self(Vec::new())
    }
}

impl Debug for TracedOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        macro_rules! arg {
            ($arg: ident) => {
                format_args!("{} => {}", $arg.0, $arg.1)
            };
        }
        macro_rules! variant {
            ($name: literal, ($($arg: ident),*)) => {
                f.debug_tuple($name)
                $(.field(&arg!($arg) ))*
                .finish()
            }
        }
        match self {
            Self::Add(a0, a1, a2) => variant!("Add", (a0, a1, a2)),
            Self::Mul(a0, a1, a2) => variant!("Mul", (a0, a1, a2)),
            Self::Halt => write!(f, "Halt"),
        }
    }
}

impl Debug for TracedInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracedInstr")
            .field("op", &self.op)
            .field("op_int", &self.op_int)
            .field("instr_ptr", &self.instr_ptr)
            .field("opcode", &self.opcode)
            .finish()
    }
}

impl Display for TracedInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ran instruction at {:0>4}: op int {: <5} | ",
            self.instr_ptr, self.op_int
        )?;

        match self.op {
            TracedOp::Add((pa, va), (pb, vb), (dest, val))
            | TracedOp::Mul((pa, va), (pb, vb), (dest, val)) => {
                write!(
                    f,
                    "[{} {pa} (resolves to {va}), {pb} (resolves to {vb}), {dest} (stored {val})]",
                    self.opcode,
                )
            }
            TracedOp::Halt => write!(f, "[HALT]"),
        }
    }
}

impl Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instr in &self.0 {
            writeln!(f, "{instr}")?;
        }
        Ok(())
    }
}
