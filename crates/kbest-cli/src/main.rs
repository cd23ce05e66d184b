// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.


//! `kbest <num-var> <num-sol> [seed]`
//!
//! Draws integer weights uniformly in `[-100, 100)`, then requests the
//! `num-sol` best assignments and checks each one: its objective must match
//! the reported value, values must never increase, and no assignment may be
//! reported twice. Small instances are printed in full.

use fixedbitset::FixedBitSet;
use kbest_core::num::weight::WeightNumeric;
use kbest_enum::{
    enumerator::Enumerator,
    error::EnumerationError,
    monitor::{composite::CompositeMonitor, log::LogMonitor},
};
use kbest_model::assignment::Assignment;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::process::ExitCode;

/// Instances with at least this many variables are not printed.
const TOO_MANY: usize = 21;

/// Storage is reserved for at most this many solutions up front.
const MAX_PREALLOCATED_SOLUTIONS: u64 = 1 << 20;

/// Uniqueness is tracked with one bit per assignment up to this size.
const MAX_TRACKED_VARIABLES: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DriverArgs {
    num_variables: usize,
    num_solutions: u64,
    seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum DriverError {
    Usage(String),
    InvalidArgument { name: &'static str, value: String },
    Enumeration(EnumerationError),
    Validation(usize),
}

impl std::fmt::Display for DriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usage(program) => write!(f, "Usage: {} <num-var> <num-sol> [seed]", program),
            Self::InvalidArgument { name, value } => {
                write!(f, "Invalid value for <{}>: `{}`", name, value)
            }
            Self::Enumeration(e) => write!(f, "Enumeration failed: {}", e),
            Self::Validation(count) => write!(f, "{} solution check(s) failed", count),
        }
    }
}

impl std::error::Error for DriverError {}

impl From<EnumerationError> for DriverError {
    fn from(e: EnumerationError) -> Self {
        Self::Enumeration(e)
    }
}

fn parse_field<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, DriverError> {
    value.parse().map_err(|_| DriverError::InvalidArgument {
        name,
        value: value.to_string(),
    })
}

fn parse_args(args: &[String]) -> Result<DriverArgs, DriverError> {
    let program = args.first().map(String::as_str).unwrap_or("kbest");
    if args.len() < 3 {
        return Err(DriverError::Usage(program.to_string()));
    }

    let num_variables: usize = parse_field("num-var", &args[1])?;
    if num_variables == 0 {
        return Err(DriverError::InvalidArgument {
            name: "num-var",
            value: args[1].clone(),
        });
    }
    let num_solutions = parse_field("num-sol", &args[2])?;
    let seed = args.get(3).map(|s| parse_field("seed", s)).transpose()?;

    Ok(DriverArgs {
        num_variables,
        num_solutions,
        seed,
    })
}

fn random_weights(rng: &mut impl Rng, n: usize) -> Vec<i64> {
    (0..n).map(|_| rng.gen_range(-100..100)).collect()
}

fn format_weights<W: WeightNumeric>(weights: &[W]) -> String {
    let parts: Vec<String> = weights.iter().map(|w| w.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

/// Checks emitted solutions one by one and counts the failures.
struct SolutionChecker<'w, W> {
    weights: &'w [W],
    previous: Option<W>,
    seen: Option<FixedBitSet>,
    failures: usize,
}

impl<'w, W> SolutionChecker<'w, W>
where
    W: WeightNumeric,
{
    fn new(weights: &'w [W]) -> Self {
        let seen = (weights.len() <= MAX_TRACKED_VARIABLES)
            .then(|| FixedBitSet::with_capacity(1usize << weights.len()));
        Self {
            weights,
            previous: None,
            seen,
            failures: 0,
        }
    }

    fn check(&mut self, value: W, assignment: &Assignment) {
        let objective = assignment.objective_value(self.weights);
        if objective != value {
            eprintln!(
                "Error: objective {} of {} differs from reported value {}",
                objective, assignment, value
            );
            self.failures += 1;
        }

        match self.previous {
            Some(previous) if previous < value => {
                eprintln!(
                    "Error: out-of-order solutions (previous = {}, v = {})",
                    previous, value
                );
                self.failures += 1;
            }
            _ => {}
        }
        self.previous = Some(value);

        if let (Some(seen), Some(code)) = (self.seen.as_mut(), assignment.encode()) {
            let code = code as usize;
            if seen.contains(code) {
                eprintln!("Error: assignment {} reported twice", assignment);
                self.failures += 1;
            }
            seen.insert(code);
        }
    }

    #[inline]
    fn failures(&self) -> usize {
        self.failures
    }
}

fn run(args: &DriverArgs) -> Result<(), DriverError> {
    let n = args.num_variables;
    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let weights = random_weights(&mut rng, n);
    let verbose = n < TOO_MANY;

    let mut monitor = CompositeMonitor::new();
    if !verbose {
        monitor.add_monitor(LogMonitor::default());
    }

    let expected = args.num_solutions.min(MAX_PREALLOCATED_SOLUTIONS) as usize;
    let mut enumerator = Enumerator::preallocated_with_monitor(n, expected, monitor);
    enumerator.set_weights(&weights);
    enumerator.solve()?;

    if verbose {
        println!("\tw = {}", format_weights(&weights));
    }

    let mut checker = SolutionChecker::new(&weights);
    let mut assignment = Assignment::zeros(n);
    for _ in 0..args.num_solutions {
        let value = enumerator.next_value()?;
        enumerator.current_solution(&mut assignment)?;
        checker.check(value, &assignment);

        if verbose {
            println!("v = {}\tx = {}", value, assignment);
        }
    }

    if !verbose {
        println!("{}", enumerator.statistics());
    }

    match checker.failures() {
        0 => Ok(()),
        count => Err(DriverError::Validation(count)),
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let result = parse_args(&args).and_then(|parsed| run(&parsed));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_requires_two_arguments() {
        assert_eq!(
            parse_args(&args(&["kbest", "5"])),
            Err(DriverError::Usage("kbest".to_string()))
        );
    }

    #[test]
    fn test_parse_args_with_and_without_seed() {
        assert_eq!(
            parse_args(&args(&["kbest", "5", "10"])),
            Ok(DriverArgs {
                num_variables: 5,
                num_solutions: 10,
                seed: None
            })
        );
        assert_eq!(
            parse_args(&args(&["kbest", "5", "10", "42"])).map(|a| a.seed),
            Ok(Some(42))
        );
    }

    #[test]
    fn test_parse_args_rejects_garbage_and_zero() {
        assert!(matches!(
            parse_args(&args(&["kbest", "x", "10"])),
            Err(DriverError::InvalidArgument { name: "num-var", .. })
        ));
        assert!(matches!(
            parse_args(&args(&["kbest", "0", "10"])),
            Err(DriverError::InvalidArgument { name: "num-var", .. })
        ));
        assert!(matches!(
            parse_args(&args(&["kbest", "3", "-1"])),
            Err(DriverError::InvalidArgument { name: "num-sol", .. })
        ));
    }

    #[test]
    fn test_run_full_enumeration_passes_checks() {
        let parsed = DriverArgs {
            num_variables: 6,
            num_solutions: 64,
            seed: Some(7),
        };
        assert_eq!(run(&parsed), Ok(()));
    }

    #[test]
    fn test_run_past_exhaustion_fails() {
        let parsed = DriverArgs {
            num_variables: 3,
            num_solutions: 9,
            seed: Some(1),
        };
        assert_eq!(
            run(&parsed),
            Err(DriverError::Enumeration(EnumerationError::ExhaustedEnumeration))
        );
    }

    #[test]
    fn test_checker_flags_each_failure_kind() {
        let weights = [3i64, -1];
        let mut checker = SolutionChecker::new(&weights);
        let best: Assignment = [true, false].into_iter().collect();
        checker.check(3, &best);
        assert_eq!(checker.failures(), 0);

        // Wrong value and out of order.
        let worse: Assignment = [false, false].into_iter().collect();
        checker.check(4, &worse);
        assert_eq!(checker.failures(), 2);

        // Duplicate.
        checker.check(3, &best);
        assert_eq!(checker.failures(), 3);
    }

    #[test]
    fn test_format_weights() {
        assert_eq!(format_weights(&[1i64, -2, 3]), "[1, -2, 3]");
    }
}
