// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Crossed wires for [Day 3]
//!
//! Each wire starts at the origin and is laid out as a sequence of axis-aligned segments. Rather
//! than rasterizing the wires onto a grid, every segment of one wire is checked against every
//! segment of the other.
//!
//! ```rust
//! use advent2019::wires::{Wire, closest_crossing, fewest_steps};
//! let a = Wire::parse(1, "R8,U5,L5,D3").unwrap();
//! let b = Wire::parse(2, "U7,R6,D4,L4").unwrap();
//! assert_eq!(closest_crossing(&a, &b), Some(6));
//! assert_eq!(fewest_steps(&a, &b), Some(30));
//! ```
//!
//! [Day 3]: https://adventofcode.com/2019/day/3

use crate::parse::{ParseError, ParseErrorKind};

/// A point on the grid, as `(x, y)`, with up being positive `y`
pub type Point = (i64, i64);

/// Manhattan distance of `point` from the origin
pub const fn manhattan_distance((x, y): Point) -> i64 {
    x.abs() + y.abs()
}

#[derive(Debug, PartialEq, Clone, Copy)]
#[allow(missing_docs, reason = "trivial")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl TryFrom<char> for Direction {
    type Error = ParseErrorKind;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'U' => Ok(Self::Up),
            'D' => Ok(Self::Down),
            'L' => Ok(Self::Left),
            'R' => Ok(Self::Right),
            _ => Err(ParseErrorKind::BadDirection(c)),
        }
    }
}

/// One straight run of wire
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Segment {
    /// Where the segment starts
    pub begin: Point,
    /// Where the segment ends
    pub end: Point,
    /// Number of steps along the segment
    pub len: i64,
}

impl Segment {
    /// Lay a segment `len` steps in `direction` from `begin`
    pub const fn new(begin: Point, direction: Direction, len: i64) -> Self {
        let (x, y) = begin;
        let end = match direction {
            Direction::Up => (x, y + len),
            Direction::Down => (x, y - len),
            Direction::Left => (x - len, y),
            Direction::Right => (x + len, y),
        };
        Self { begin, end, len }
    }

    const fn is_vertical(&self) -> bool {
        self.begin.0 == self.end.0
    }

    /// If `self` and `other` cross, return the point where they do, along with the number of
    /// steps along `self` it takes to get there.
    ///
    /// Only perpendicular crossings count; parallel segments never cross, even if they overlap.
    pub fn intersect(&self, other: &Segment) -> Option<(Point, i64)> {
        fn between(v: i64, a: i64, b: i64) -> bool {
            a.min(b) <= v && v <= a.max(b)
        }

        if self.is_vertical() == other.is_vertical() {
            return None;
        }
        let (vert, horiz) = if self.is_vertical() {
            (self, other)
        } else {
            (other, self)
        };
        let point = (vert.begin.0, horiz.begin.1);
        let on_both = between(point.1, vert.begin.1, vert.end.1)
            && between(point.0, horiz.begin.0, horiz.end.0);
        let steps = manhattan_distance((point.0 - self.begin.0, point.1 - self.begin.1));
        on_both.then_some((point, steps))
    }
}

/// A wire, as the segments it's made up of
#[derive(Debug, PartialEq, Clone)]
pub struct Wire(pub Vec<Segment>);

impl Wire {
    /// Parse a comma-separated list of moves like `R8,U5,L5,D3`.
    ///
    /// `line` is only used to report the location of errors.
    pub fn parse(line: usize, input: &str) -> Result<Self, ParseError> {
        let mut pos = (0, 0);
        input
            .trim()
            .split(',')
            .enumerate()
            .map(|(i, field)| {
                let err = |kind: ParseErrorKind| ParseError::new(line, i + 1, field, kind);
                let mut chars = field.trim().chars();
                let dir = chars.next().ok_or_else(|| err(ParseErrorKind::Empty))?;
                let dir = Direction::try_from(dir).map_err(err)?;
                let len: i64 = crate::parse::field(line, i + 1, chars.as_str())?;
                if len < 0 {
                    return Err(err(ParseErrorKind::Malformed("a non-negative length")));
                }
                let seg = Segment::new(pos, dir, len);
                pos = seg.end;
                Ok(seg)
            })
            .collect::<Result<_, _>>()
            .map(Self)
    }

    /// Parse the two wires of the puzzle input, one per line
    pub fn parse_pair(input: &str) -> Result<(Self, Self), ParseError> {
        let mut lines = input.lines().filter(|l| !l.trim().is_empty());
        let mut next = |n| {
            lines
                .next()
                .ok_or_else(|| ParseError::new(n, 1, "", ParseErrorKind::MissingLine))
                .and_then(|l| Self::parse(n, l))
        };
        Ok((next(1)?, next(2)?))
    }
}

/// A point where two wires cross
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Crossing {
    /// Where the wires cross
    pub point: Point,
    /// The combined number of steps both wires take to first reach this crossing
    pub steps: i64,
}

/// All points where the two wires cross, other than the origin they both start at.
///
/// If a wire passes through the same point more than once, the crossing is listed once per pair
/// of segments that cross there.
pub fn crossings(a: &Wire, b: &Wire) -> Vec<Crossing> {
    let mut found = Vec::new();
    let mut a_steps = 0;
    for sa in &a.0 {
        let mut b_steps = 0;
        for sb in &b.0 {
            if let Some((point, a_part)) = sa.intersect(sb)
                && point != (0, 0)
            {
                let b_part = manhattan_distance((point.0 - sb.begin.0, point.1 - sb.begin.1));
                found.push(Crossing {
                    point,
                    steps: a_steps + a_part + b_steps + b_part,
                });
            }
            b_steps += sb.len;
        }
        a_steps += sa.len;
    }
    found
}

/// Manhattan distance from the origin to the closest crossing, if the wires cross at all
pub fn closest_crossing(a: &Wire, b: &Wire) -> Option<i64> {
    crossings(a, b)
        .into_iter()
        .map(|c| manhattan_distance(c.point))
        .min()
}

/// The fewest combined steps the wires take to reach a crossing, if the wires cross at all
pub fn fewest_steps(a: &Wire, b: &Wire) -> Option<i64> {
    crossings(a, b).into_iter().map(|c| c.steps).min()
}
