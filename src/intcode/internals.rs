// SPDX-FileCopyrightText: 2024 - 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use log::trace;

use super::*;

impl Interpreter {
    /// Fetch, decode, and execute the instruction at the instruction pointer.
    ///
    /// Nothing in memory is modified unless the whole instruction succeeds.
    pub(super) fn exec_instruction(&mut self) -> Result<State, InterpreterError> {
        let op_int = self.code.get(self.index)?;
        match OpCode::try_from(op_int)? {
            OpCode::Add => self.op3(OpCode::Add, op_int, i64::checked_add),
            OpCode::Mul => self.op3(OpCode::Mul, op_int, i64::checked_mul),
            OpCode::Halt => {
                trace!("ip: {:>6} | {op_int:>5} [HALT]", self.index);
                self.record(OpCode::Halt, op_int, &[]);
                self.halted = true;
                Ok(State::Halted)
            }
        }
    }

    /// Resolve the positional parameter `offset` ints past the instruction pointer, returning
    /// both the address it refers to and the value stored there
    fn resolve_param(&self, offset: i64) -> Result<(i64, i64), InterpreterError> {
        let address = self.code.get(self.index + offset)?;
        Ok((address, self.code.get(address)?))
    }

    /// Resolve the destination parameter `offset` ints past the instruction pointer, making sure
    /// that it can be written to
    fn resolve_dest(&self, offset: i64) -> Result<i64, InterpreterError> {
        let address = self.code.get(self.index + offset)?;
        self.code.get(address).map(|_| address)
    }

    /// common logic of the instructions that take 3 parameters
    fn op3(
        &mut self,
        opcode: OpCode,
        op_int: i64,
        operation: impl Fn(i64, i64) -> Option<i64>,
    ) -> Result<State, InterpreterError> {
        let a = self.resolve_param(1)?;
        let b = self.resolve_param(2)?;
        let dest = self.resolve_dest(3)?;
        let val = operation(a.1, b.1).ok_or(InterpreterError::Overflow {
            instr_ptr: self.index,
        })?;
        trace!(
            "ip: {:>6} | {op_int:>5} [{opcode} {} ({}), {} ({}), {dest} <- {val}]",
            self.index, a.0, a.1, b.0, b.1,
        );
        self.record(opcode, op_int, &[a, b, (dest, val)]);
        *self.code.get_mut(dest)? = val;
        self.index += opcode.width();
        Ok(State::Running)
    }

    fn record(&mut self, opcode: OpCode, op_int: i64, resolved_params: &[(i64, i64)]) {
        if let Some(trace) = self.trace.as_mut() {
            trace.push(opcode, op_int, self.index, resolved_params);
        }
    }
}
