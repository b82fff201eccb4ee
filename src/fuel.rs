// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Fuel requirements for [Day 1]
//!
//! [Day 1]: https://adventofcode.com/2019/day/1

/// Fuel required to launch a module of the given mass: a third of the mass, rounded down, minus 2.
/// Masses too small to need fuel need none, rather than negative fuel.
pub const fn mass_to_fuel(mass: u64) -> u64 {
    (mass / 3).saturating_sub(2)
}

/// Fuel required for a module of the given mass, counting the mass of the fuel itself, the mass
/// of the fuel needed for that fuel, and so on.
pub fn total_fuel(mass: u64) -> u64 {
    std::iter::successors(Some(mass_to_fuel(mass)), |&f| Some(mass_to_fuel(f)))
        .take_while(|&f| f > 0)
        .sum()
}
