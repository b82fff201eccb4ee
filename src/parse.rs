// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Input parsing shared by every puzzle

use std::error::Error;
use std::fmt::{self, Display};
use std::num::ParseIntError;
use std::str::FromStr;

/// What went wrong with a piece of input
#[derive(Debug, PartialEq, Clone)]
pub enum ParseErrorKind {
    /// A field that should contain something was empty, e.g. `1,,2` or a trailing `,`
    Empty,
    /// A field could not be parsed as an integer
    BadInt(ParseIntError),
    /// A wire move didn't start with `U`, `D`, `L`, or `R`
    BadDirection(char),
    /// A line did not have the expected shape
    Malformed(&'static str),
    /// Fewer lines than the puzzle requires
    MissingLine,
}

/// An error encountered while parsing puzzle input, with the 1-based position where it occured
#[derive(Debug, PartialEq, Clone)]
pub struct ParseError {
    /// The line of input, starting from 1
    pub line: usize,
    /// The comma-separated field within the line, starting from 1
    pub field: usize,
    /// The offending text
    pub text: Box<str>,
    /// The specific problem
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(line: usize, field: usize, text: &str, kind: ParseErrorKind) -> Self {
        Self {
            line,
            field,
            text: Box::from(text),
            kind,
        }
    }
}

impl Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::Empty => write!(f, "empty field"),
            ParseErrorKind::BadInt(e) => write!(f, "invalid integer: {e}"),
            ParseErrorKind::BadDirection(c) => write!(f, "{c:?} is not one of U, D, L, R"),
            ParseErrorKind::Malformed(expected) => write!(f, "expected {expected}"),
            ParseErrorKind::MissingLine => write!(f, "missing line"),
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, field {} ({:?}): {}",
            self.line, self.field, self.text, self.kind
        )
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ParseErrorKind::BadInt(e) => Some(e),
            _ => None,
        }
    }
}

/// Parse `field` as a `T`, reporting failures at `line`/`field_num`
pub(crate) fn field<T>(line: usize, field_num: usize, field: &str) -> Result<T, ParseError>
where
    T: FromStr<Err = ParseIntError>,
{
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Err(ParseError::new(line, field_num, field, ParseErrorKind::Empty));
    }
    trimmed
        .parse()
        .map_err(|e| ParseError::new(line, field_num, trimmed, ParseErrorKind::BadInt(e)))
}

/// Parse a single line of comma-separated integers, such as an Intcode program.
///
/// Whitespace around each field and around the whole input is ignored, but empty fields (including
/// a trailing comma) are an error.
///
/// ```
/// use advent2019::parse::parse_program;
/// assert_eq!(parse_program("1,0,0,0,99\n").unwrap(), vec![1, 0, 0, 0, 99]);
/// assert!(parse_program("1,0,,99").is_err());
/// ```
pub fn parse_program(input: &str) -> Result<Vec<i64>, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::new(1, 1, input, ParseErrorKind::Empty));
    }
    if let Some((n, extra)) = input.lines().enumerate().nth(1) {
        return Err(ParseError::new(
            n + 1,
            1,
            extra,
            ParseErrorKind::Malformed("a single line"),
        ));
    }
    input
        .split(',')
        .enumerate()
        .map(|(i, s)| field(1, i + 1, s))
        .collect()
}

/// Parse one `T` per non-blank line
pub fn lines_of<T>(input: &str) -> Result<Vec<T>, ParseError>
where
    T: FromStr<Err = ParseIntError>,
{
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| field(n + 1, 1, line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_with_whitespace() {
        assert_eq!(parse_program(" 1, 2 ,3\n").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_program("-7").unwrap(), vec![-7]);
    }

    #[test]
    fn program_errors() {
        let err = parse_program("1,2,").unwrap_err();
        assert_eq!((err.line, err.field, err.kind), (1, 3, ParseErrorKind::Empty));

        let err = parse_program("1,x,3").unwrap_err();
        assert_eq!((err.line, err.field), (1, 2));
        assert!(matches!(err.kind, ParseErrorKind::BadInt(_)));
        assert!(err.source().is_some());

        assert_eq!(parse_program("").unwrap_err().kind, ParseErrorKind::Empty);
        assert_eq!(
            parse_program("1,2\n3,4").unwrap_err().kind,
            ParseErrorKind::Malformed("a single line")
        );
    }

    #[test]
    fn lines_skip_blanks() {
        assert_eq!(lines_of::<u64>("12\n\n14\n").unwrap(), vec![12, 14]);
        let err = lines_of::<u64>("12\n-3\n").unwrap_err();
        assert_eq!(err.line, 2);
    }
}
