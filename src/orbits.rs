// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Universal Orbit Map for [Day 6]
//!
//! [Day 6]: https://adventofcode.com/2019/day/6

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::error::Error;
use std::fmt::{self, Display};

use crate::parse::{ParseError, ParseErrorKind};

/// A problem with the orbit map
#[derive(Debug, PartialEq, Clone)]
pub enum OrbitError {
    /// A line of the map could not be parsed
    Parse(ParseError),
    /// An object was listed as orbiting two different objects
    DuplicateOrbit(Box<str>),
    /// Following an object's orbits leads back to itself
    Cycle(Box<str>),
    /// An object that isn't in the map was asked about
    UnknownObject(Box<str>),
    /// The two objects don't share any object they both orbit
    Disconnected(Box<str>, Box<str>),
}

impl Display for OrbitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => Display::fmt(e, f),
            Self::DuplicateOrbit(obj) => write!(f, "{obj} orbits more than one object"),
            Self::Cycle(obj) => write!(f, "{obj} indirectly orbits itself"),
            Self::UnknownObject(obj) => write!(f, "{obj} is not in the orbit map"),
            Self::Disconnected(a, b) => write!(f, "{a} and {b} are in separate orbit systems"),
        }
    }
}

impl Error for OrbitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for OrbitError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

/// A map of which object each object directly orbits
#[derive(Debug, PartialEq, Clone, Default)]
pub struct OrbitMap {
    parents: HashMap<Box<str>, Box<str>>,
    /// number of objects each object orbits, directly or indirectly
    depths: HashMap<Box<str>, usize>,
}

impl OrbitMap {
    /// Parse lines in the form `A)B`, meaning `B` orbits `A`, and make sure that no object
    /// orbits itself, directly or indirectly.
    pub fn parse(input: &str) -> Result<Self, OrbitError> {
        let mut parents: HashMap<Box<str>, Box<str>> = HashMap::new();
        for (n, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (center, satellite) = line
                .split_once(')')
                .filter(|(a, b)| !a.is_empty() && !b.is_empty())
                .ok_or_else(|| {
                    ParseError::new(n + 1, 1, line, ParseErrorKind::Malformed("CENTER)SATELLITE"))
                })?;
            match parents.entry(Box::from(satellite)) {
                Entry::Occupied(_) => return Err(OrbitError::DuplicateOrbit(satellite.into())),
                Entry::Vacant(v) => {
                    v.insert(Box::from(center));
                }
            }
        }
        let mut map = Self {
            parents,
            depths: HashMap::new(),
        };
        map.depths = map
            .parents
            .keys()
            .map(|obj| Ok((obj.clone(), map.ancestors(obj)?.len())))
            .collect::<Result<_, OrbitError>>()?;
        Ok(map)
    }

    /// The objects that `obj` orbits, directly or indirectly, nearest first
    fn ancestors(&self, obj: &str) -> Result<Vec<&str>, OrbitError> {
        let mut chain = Vec::new();
        let mut current = obj;
        while let Some(parent) = self.parents.get(current) {
            if chain.len() > self.parents.len() {
                return Err(OrbitError::Cycle(obj.into()));
            }
            chain.push(&**parent);
            current = &**parent;
        }
        Ok(chain)
    }

    /// Total number of direct and indirect orbits
    pub fn total_orbits(&self) -> usize {
        self.depths.values().sum()
    }

    /// Number of objects `obj` orbits, directly or indirectly
    pub fn depth(&self, obj: &str) -> Result<usize, OrbitError> {
        self.depths
            .get(obj)
            .copied()
            .ok_or_else(|| OrbitError::UnknownObject(obj.into()))
    }

    /// Number of orbital transfers needed to get from the object `from` is orbiting to the object
    /// `to` is orbiting
    pub fn transfers(&self, from: &str, to: &str) -> Result<usize, OrbitError> {
        let known = |obj: &str| {
            if self.parents.contains_key(obj) {
                Ok(())
            } else {
                Err(OrbitError::UnknownObject(obj.into()))
            }
        };
        known(from)?;
        known(to)?;
        let from_chain = self.ancestors(from)?;
        let to_chain = self.ancestors(to)?;
        let depths: HashMap<&str, usize> =
            to_chain.iter().enumerate().map(|(i, &o)| (o, i)).collect();
        from_chain
            .iter()
            .enumerate()
            .find_map(|(i, o)| depths.get(o).map(|j| i + j))
            .ok_or_else(|| OrbitError::Disconnected(from.into(), to.into()))
    }
}
