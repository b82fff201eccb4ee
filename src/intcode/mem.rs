// SPDX-FileCopyrightText: 2025 - 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use std::fmt;

use super::InterpreterError;

/// Fixed-size, bounds-checked memory.
///
/// Unlike a full Intcode computer's memory, this never grows: any address outside of the loaded
/// program, negative or past the end, is an [`InterpreterError::OutOfBounds`].
#[derive(Clone, PartialEq)]
pub(super) struct IntcodeMem {
    cells: Box<[i64]>,
}

impl IntcodeMem {
    fn resolve(&self, address: i64) -> Result<usize, InterpreterError> {
        usize::try_from(address)
            .ok()
            .filter(|&i| i < self.cells.len())
            .ok_or(InterpreterError::OutOfBounds {
                address,
                len: self.cells.len(),
            })
    }

    pub(super) fn get(&self, address: i64) -> Result<i64, InterpreterError> {
        self.resolve(address).map(|i| self.cells[i])
    }

    pub(super) fn get_mut(&mut self, address: i64) -> Result<&mut i64, InterpreterError> {
        let i = self.resolve(address)?;
        Ok(&mut self.cells[i])
    }

    pub(super) fn as_slice(&self) -> &[i64] {
        &self.cells
    }

    pub(super) fn into_vec(self) -> Vec<i64> {
        self.cells.into_vec()
    }
}

impl std::iter::FromIterator<i64> for IntcodeMem {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl std::ops::Index<i64> for IntcodeMem {
    type Output = i64;
    fn index(&self, i: i64) -> &i64 {
        match self.resolve(i) {
            Ok(i) => &self.cells[i],
            Err(e) => panic!("{e}"),
        }
    }
}

impl std::ops::IndexMut<i64> for IntcodeMem {
    fn index_mut(&mut self, i: i64) -> &mut i64 {
        match self.get_mut(i) {
            Ok(cell) => cell,
            Err(e) => panic!("{e}"),
        }
    }
}

impl fmt::Debug for IntcodeMem {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        // one entry per 4 ints, the width of an ADD or MUL instruction
        let mut fmtmap = fmt.debug_map();
        for (n, chunk) in self.cells.chunks(4).enumerate() {
            fmtmap.entry(&format_args!("{:04}", n * 4), &format_args!("{chunk:?}"));
        }
        fmtmap.finish()
    }
}
