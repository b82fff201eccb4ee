//! Test that examples from Advent of Code problem descriptions behave as described.
// SPDX-FileCopyrightText: 2024 - 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use advent2019::intcode::trace::{Trace, TracedInstr};
use advent2019::intcode::{OpCode, execute};
use advent2019::prelude::*;
use either::Either;
use itertools::Itertools;

// first, some groundwork for common elements of different tests

/// Construct a new interpreter with the given starting code
macro_rules! interp {
    [$($i:expr),*] => {{
        Interpreter::new([$($i),*])
    }}
}

/// A struct with the information about expected traced instruction
struct ExpectedOp {
    op_int: i64,
    instr_ptr: i64,
    stored_val: Option<i64>,
}

impl ExpectedOp {
    const fn new(op_int: i64, instr_ptr: i64, stored_val: Option<i64>) -> Self {
        Self {
            op_int,
            instr_ptr,
            stored_val,
        }
    }

    fn validate(self, traced: TracedInstr) {
        assert_eq!(self.op_int, traced.op_int());
        assert_eq!(self.instr_ptr, traced.instr_ptr());
        assert_eq!(self.stored_val, traced.stored_val());
    }
}

fn validate_trace(expected: impl IntoIterator<Item = ExpectedOp>, Trace(trace): Trace) {
    expected
        .into_iter()
        .zip_eq(trace)
        .for_each(|(op, instr)| op.validate(instr))
}

mod day1_examples {
    use advent2019::fuel::{mass_to_fuel, total_fuel};
    use advent2019::parse::lines_of;

    #[test]
    fn module_masses() {
        let masses: Vec<u64> = lines_of("12\n14\n1969\n100756\n").unwrap();
        let fuel: Vec<u64> = masses.iter().copied().map(mass_to_fuel).collect();
        assert_eq!(fuel, [2, 2, 654, 33583]);
        assert_eq!(fuel.iter().sum::<u64>(), 34241);
    }

    #[test]
    fn fuel_for_fuel() {
        let masses = [14, 1969, 100756];
        let fuel: Vec<u64> = masses.into_iter().map(total_fuel).collect();
        assert_eq!(fuel, [2, 966, 50346]);
    }
}

mod day2_examples {
    mod part1 {
        use crate::*;

        /// the extended example used to help illustrate the basics
        #[test]
        fn extended_example() {
            let mut interp = interp![1, 9, 10, 3, 2, 3, 11, 0, 99, 30, 40, 50];
            interp.start_trace();
            assert_eq!(interp.run(), Ok(State::Halted));
            const EXPECTED: [ExpectedOp; 3] = [
                ExpectedOp::new(1, 0, Some(70)),
                ExpectedOp::new(2, 4, Some(3500)),
                ExpectedOp::new(99, 8, None),
            ];
            validate_trace(EXPECTED, interp.end_trace().unwrap());
            assert_eq!(interp.into_memory(), [3500, 9, 10, 70, 2, 3, 11, 0, 99, 30, 40, 50]);
        }

        /// the extra, smaller examples that are listed after the extended example
        #[test]
        fn small_examples() {
            macro_rules! example {
                ($($code: literal),+ becomes $($output: literal),+) => {{
                    let mut interp = interp![$($code),*];
                    interp.run().unwrap();
                    for (i, val) in [$($output),+].into_iter().enumerate() {
                        assert_eq!(interp[i as i64], val);
                    }
                }}
            }
            example!(1,0,0,0,99 becomes 2,0,0,0,99);
            example!(2,3,0,3,99 becomes 2,3,0,6,99);
            example!(2,4,4,5,99,0 becomes 2,4,4,5,99,9801);
            example!(1,1,1,4,99,5,6,0,99 becomes 30,1,1,4,2,5,6,0,99);
        }

        /// programs that a lenient interpreter would quietly halt on, or let write anywhere
        #[test]
        fn malformed_programs() {
            let cases: [(&[i64], Either<&[i64], InterpreterError>); 5] = [
                (&[1, 0, 0, 0, 99], Either::Left(&[2, 0, 0, 0, 99])),
                (&[3, 0, 0, 0, 99], Either::Right(InterpreterError::UnrecognizedOpcode(3))),
                (
                    &[1, 0, 0, 0, 98],
                    Either::Right(InterpreterError::UnrecognizedOpcode(98)),
                ),
                (
                    &[1, 0, 0, 9, 99],
                    Either::Right(InterpreterError::OutOfBounds { address: 9, len: 5 }),
                ),
                (
                    &[2, 0, 0, 0],
                    Either::Right(InterpreterError::OutOfBounds { address: 4, len: 4 }),
                ),
            ];
            for (code, expected) in cases {
                let result = execute(code.iter().copied());
                match expected {
                    Either::Left(mem) => assert_eq!(result.as_deref(), Ok(mem), "{code:?}"),
                    Either::Right(err) => assert_eq!(result, Err(err), "{code:?}"),
                }
            }
        }

        #[test]
        fn unrecognized_opcode_is_traced_up_to_failure() {
            let mut interp = interp![1, 0, 0, 0, 2, 0, 0, 0, 4, 0, 99];
            interp.start_trace();
            assert_eq!(
                interp.run(),
                Err(InterpreterError::UnrecognizedOpcode(4))
            );
            validate_trace(
                [ExpectedOp::new(1, 0, Some(2)), ExpectedOp::new(2, 4, Some(4))],
                interp.end_trace().unwrap(),
            );
            assert_eq!(interp.instr_ptr(), 8);
            assert!(interp.is_poisoned());
        }
    }

    mod part2 {
        use crate::*;
        use advent2019::search::{SearchError, SearchSpace, search_in};

        /// `0 <- *noun * *verb` over a table where each address holds itself
        fn multiplier() -> Interpreter {
            let mut code: Vec<i64> = vec![2, 0, 0, 0, 99];
            code.extend(5..100);
            Interpreter::new(code)
        }

        #[test]
        fn restore_1202() {
            let template = multiplier();
            assert_eq!(run_with(&template, 12, 2), Ok(12 * 2));
            // the template is untouched
            assert_eq!(template[1], 0);
            assert_eq!(template[2], 0);
        }

        #[test]
        fn search_encodes_answer() {
            let template = multiplier();
            // 97 * 98 is the only way to make the target from two values below 100
            let SearchOutcome::Found(pair) = search(&template, 97 * 98).unwrap() else {
                panic!("no pair found");
            };
            assert_eq!(pair, NounVerb { noun: 97, verb: 98 });
            assert_eq!(pair.encode(), 9798);
            assert_eq!(run_with(&template, pair.noun, pair.verb), Ok(97 * 98));
        }

        #[test]
        fn prime_target_is_not_found() {
            // 101 is prime and above every address, so no pair can make it
            assert_eq!(search(&multiplier(), 101).unwrap(), SearchOutcome::NotFound);
        }

        #[test]
        fn trials_do_not_share_memory() {
            let template = multiplier();
            let results: Vec<i64> = [(6, 7), (0, 0), (6, 7)]
                .into_iter()
                .map(|(n, v)| run_with(&template, n, v).unwrap())
                .collect();
            assert_eq!(results, [42, 4, 42]);
        }

        #[test]
        fn broken_template() {
            let template = interp![7, 0, 0, 0, 99];
            assert!(matches!(
                search(&template, 0),
                Err(SearchError::Structural {
                    error: InterpreterError::UnrecognizedOpcode(7),
                    ..
                })
            ));
            let space = SearchSpace {
                nouns: 0..1,
                verbs: 0..1,
            };
            assert_eq!(
                search_in(&interp![1, 0], 2, space),
                Err(SearchError::TemplateTooShort(2))
            );
        }

        #[test]
        fn op_codes() {
            assert_eq!(OpCode::Add as i64, 1);
            assert_eq!(OpCode::Mul as i64, 2);
            assert_eq!(OpCode::Halt as i64, 99);
            assert_eq!(OpCode::try_from(99), Ok(OpCode::Halt));
            assert_eq!(
                OpCode::try_from(3),
                Err(InterpreterError::UnrecognizedOpcode(3))
            );
        }
    }
}

mod day3_examples {
    use advent2019::wires::{Wire, closest_crossing, crossings, fewest_steps};

    #[test]
    fn small_example() {
        let (a, b) = Wire::parse_pair("R8,U5,L5,D3\nU7,R6,D4,L4\n").unwrap();
        let mut points: Vec<_> = crossings(&a, &b).into_iter().map(|c| c.point).collect();
        points.sort_unstable();
        assert_eq!(points, [(3, 3), (6, 5)]);
        assert_eq!(closest_crossing(&a, &b), Some(6));
        assert_eq!(fewest_steps(&a, &b), Some(30));
    }

    #[test]
    fn larger_examples() {
        let examples = [
            (
                "R75,D30,R83,U83,L12,D49,R71,U7,L72\nU62,R66,U55,R34,D71,R55,D58,R83",
                159,
                610,
            ),
            (
                "R98,U47,R26,D63,R33,U87,L62,D20,R33,U53,R51\nU98,R91,D20,R16,D67,R40,U7,R15,U6,R7",
                135,
                410,
            ),
        ];
        for (input, distance, steps) in examples {
            let (a, b) = Wire::parse_pair(input).unwrap();
            assert_eq!(closest_crossing(&a, &b), Some(distance));
            assert_eq!(fewest_steps(&a, &b), Some(steps));
        }
    }
}

mod day4_examples {
    use advent2019::password::{has_adjacent_pair, has_exact_pair, is_monotonic, runs};

    fn part1(n: u64) -> bool {
        let r = runs(n);
        is_monotonic(&r) && has_adjacent_pair(&r)
    }

    fn part2(n: u64) -> bool {
        part1(n) && has_exact_pair(&runs(n))
    }

    #[test]
    fn part1_examples() {
        assert!(part1(111111));
        assert!(!part1(223450));
        assert!(!part1(123789));
    }

    #[test]
    fn part2_examples() {
        assert!(part2(112233));
        assert!(!part2(123444));
        assert!(part2(111122));
    }
}

mod day6_examples {
    use advent2019::orbits::OrbitMap;

    #[test]
    fn checksum_and_transfers() {
        let map = OrbitMap::parse(
            "COM)B\nB)C\nC)D\nD)E\nE)F\nB)G\nG)H\nD)I\nE)J\nJ)K\nK)L\nK)YOU\nI)SAN",
        )
        .unwrap();
        // the checksum example doesn't include YOU and SAN
        assert_eq!(map.total_orbits(), 42 + 7 + 5);
        assert_eq!(map.transfers("YOU", "SAN"), Ok(4));
    }
}
