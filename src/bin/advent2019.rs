// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Run the solution for a given day on a puzzle input, printing both parts' answers

use std::error::Error;
use std::fmt::{self, Debug, Display};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use log::info;

use advent2019::prelude::*;
use advent2019::search::{SearchSpace, search_in};
use advent2019::{fuel, orbits, parse, password, wires};

const VERSION: &str = concat!(env!("CARGO_CRATE_NAME"), '-', env!("CARGO_PKG_VERSION"));
const INPUT_HELP: &str = "File containing the puzzle input\nuses stdin if unset or set to '-'";

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = VERSION)]
#[command(about = "Advent of Code 2019 solutions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    day: Day,
}

#[derive(Args)]
struct Puzzle {
    #[arg(help = INPUT_HELP.split_once("\n").unwrap().0)]
    #[arg(long_help = INPUT_HELP)]
    input: Option<PathBuf>,
    #[arg(long, value_name = "ANSWER")]
    #[arg(help = "Fail unless part 1's answer is ANSWER")]
    expect_part1: Option<i64>,
    #[arg(long, value_name = "ANSWER")]
    #[arg(help = "Fail unless part 2's answer is ANSWER")]
    expect_part2: Option<i64>,
}

#[derive(Subcommand)]
enum Day {
    /// Day 1: The Tyranny of the Rocket Equation
    #[command(alias("1"))]
    Fuel {
        #[command(flatten)]
        puzzle: Puzzle,
    },
    /// Day 2: 1202 Program Alarm
    #[command(alias("2"))]
    Intcode {
        #[command(flatten)]
        puzzle: Puzzle,
        #[arg(long, default_value_t = 12)]
        #[arg(help = "Noun to restore the program with for part 1")]
        noun: i64,
        #[arg(long, default_value_t = 2)]
        #[arg(help = "Verb to restore the program with for part 1")]
        verb: i64,
        #[arg(long, default_value_t = 19690720)]
        #[arg(help = "Output to search for in part 2")]
        target: i64,
        #[arg(long, default_value_t = 100)]
        #[arg(help = "Search nouns and verbs below this bound")]
        bound: i64,
        #[arg(long)]
        #[arg(help = "Print each instruction executed for part 1 to stderr")]
        trace: bool,
    },
    /// Day 3: Crossed Wires
    #[command(alias("3"))]
    Wires {
        #[command(flatten)]
        puzzle: Puzzle,
    },
    /// Day 4: Secure Container
    #[command(alias("4"))]
    Password {
        #[command(flatten)]
        puzzle: Puzzle,
        #[arg(long, value_name = "LO-HI")]
        #[arg(help = "Use this range instead of reading the input")]
        range: Option<String>,
    },
    /// Day 6: Universal Orbit Map
    #[command(alias("6"))]
    Orbits {
        #[command(flatten)]
        puzzle: Puzzle,
        #[arg(long, default_value = "YOU")]
        from: String,
        #[arg(long, default_value = "SAN")]
        to: String,
    },
}

fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path),
        _ => {
            let mut s = String::new();
            io::stdin().read_to_string(&mut s)?;
            Ok(s)
        }
    }
}

#[derive(Debug)]
struct AnswerMismatch {
    part: u8,
    expected: i64,
    actual: i64,
}

impl Display for AnswerMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "part {} failed: expected {}, got {}",
            self.part, self.expected, self.actual
        )
    }
}
impl Error for AnswerMismatch {}

#[derive(Debug)]
struct NoAnswer(&'static str);

impl Display for NoAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no answer: {}", self.0)
    }
}
impl Error for NoAnswer {}

impl Puzzle {
    fn input(&self) -> io::Result<String> {
        read_input(self.input.as_deref())
    }

    fn report(&self, answers: [i64; 2]) -> Result<(), AnswerMismatch> {
        for (part, (actual, expected)) in
            (1..).zip(answers.into_iter().zip([self.expect_part1, self.expect_part2]))
        {
            println!("part {part}: {actual}");
            if let Some(expected) = expected
                && expected != actual
            {
                return Err(AnswerMismatch {
                    part,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }
}

fn solve(day: Day) -> Result<(), DisplayedError> {
    match day {
        Day::Fuel { puzzle } => {
            let masses: Vec<u64> = parse::lines_of(&puzzle.input()?)?;
            let simple: u64 = masses.iter().copied().map(fuel::mass_to_fuel).sum();
            let total: u64 = masses.iter().copied().map(fuel::total_fuel).sum();
            puzzle.report([i64::try_from(simple)?, i64::try_from(total)?])?;
        }
        Day::Intcode {
            puzzle,
            noun,
            verb,
            target,
            bound,
            trace,
        } => {
            let template = Interpreter::new(parse_program(&puzzle.input()?)?);

            let mut restored = template.clone();
            restored.mem_set(1, noun)?;
            restored.mem_set(2, verb)?;
            if trace {
                restored.start_trace();
            }
            let run = restored.run();
            if let Some(trace) = restored.end_trace() {
                eprint!("{trace}");
            }
            run?;
            let part1 = restored.mem_get(0)?;

            let space = SearchSpace {
                nouns: 0..bound,
                verbs: 0..bound,
            };
            let part2 = match search_in(&template, target, space)? {
                SearchOutcome::Found(pair) => {
                    info!("{pair} produces {target}");
                    pair.encode()
                }
                SearchOutcome::NotFound => {
                    println!("part 1: {part1}");
                    return Err(NoAnswer("no noun and verb produce the target").into());
                }
            };
            puzzle.report([part1, part2])?;
        }
        Day::Wires { puzzle } => {
            let (a, b) = wires::Wire::parse_pair(&puzzle.input()?)?;
            let closest = wires::closest_crossing(&a, &b).ok_or(NoAnswer("wires never cross"))?;
            let fewest = wires::fewest_steps(&a, &b).ok_or(NoAnswer("wires never cross"))?;
            puzzle.report([closest, fewest])?;
        }
        Day::Password { puzzle, range } => {
            let range = match range {
                Some(range) => password::parse_range(&range)?,
                None => password::parse_range(&puzzle.input()?)?,
            };
            let (part1, part2) = password::count_candidates(range);
            puzzle.report([i64::try_from(part1)?, i64::try_from(part2)?])?;
        }
        Day::Orbits { puzzle, from, to } => {
            let map = orbits::OrbitMap::parse(&puzzle.input()?)?;
            let total = map.total_orbits();
            let transfers = map.transfers(&from, &to)?;
            puzzle.report([i64::try_from(total)?, i64::try_from(transfers)?])?;
        }
    }
    Ok(())
}

fn main() -> Result<(), DisplayedError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    solve(Cli::parse().day)
}

/// a wrapper around a [`Box`ed][Box] [dyn Error][Error] that uses its implementation of [Display]
/// for the [Debug] impl, to display the Error if returned from `main`
struct DisplayedError(Box<dyn Error>);
impl<E: Error + 'static> From<E> for DisplayedError {
    fn from(e: E) -> Self {
        Self(Box::from(e))
    }
}

impl Debug for DisplayedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
