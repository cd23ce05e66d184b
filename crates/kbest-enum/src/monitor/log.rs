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

use crate::{monitor::enumeration_monitor::EnumerationMonitor, stats::EnumerationStatistics};
use kbest_core::num::weight::WeightNumeric;
use std::time::{Duration, Instant};

/// Prints a progress table to stdout while solutions are being enumerated.
///
/// A line is printed at most once per `log_interval`. The clock is only read
/// when `values_emitted & clock_check_mask == 0`, so a mask of `2^k - 1`
/// checks every `2^k` emissions.
#[derive(Debug, Clone)]
pub struct LogMonitor<W> {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    last_value: Option<W>,
}

impl<W> LogMonitor<W>
where
    W: WeightNumeric,
{
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            last_value: None,
        }
    }

    #[inline(always)]
    fn print_header(&self, num_variables: usize) {
        println!("Enumerating solutions over {} variables", num_variables);
        println!(
            "{:<9} | {:<14} | {:<14} | {:<14} | {:<16}",
            "Elapsed", "Emitted", "Nodes", "Peak Frontier", "Last Value"
        );
        println!("{}", "-".repeat(77));
    }

    #[inline(always)]
    fn log_line(&mut self, statistics: &EnumerationStatistics) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();

        let last_value_str = match &self.last_value {
            Some(value) => format!("{}", value),
            None => "-".to_string(),
        };
        let elapsed_field = format!("{:.1}s", elapsed);

        println!(
            "{:<9} | {:<14} | {:<14} | {:<14} | {:<16}",
            elapsed_field,
            statistics.values_emitted,
            statistics.nodes_created,
            statistics.peak_frontier_len,
            last_value_str
        );

        self.last_log_time = now;
    }
}

impl<W> Default for LogMonitor<W>
where
    W: WeightNumeric,
{
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl<W> std::fmt::Display for LogMonitor<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl<W> EnumerationMonitor<W> for LogMonitor<W>
where
    W: WeightNumeric,
{
    fn on_solve(&mut self, num_variables: usize) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.last_value = None;
        self.print_header(num_variables);
    }

    fn on_value_emitted(&mut self, value: W, statistics: &EnumerationStatistics) {
        self.last_value = Some(value);
        if (statistics.values_emitted & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(statistics);
        }
    }

    fn on_exhausted(&mut self, statistics: &EnumerationStatistics) {
        self.log_line(statistics);
        println!("{}", "-".repeat(77));
        println!("Enumeration exhausted.");
    }

    fn name(&self) -> &str {
        "LogMonitor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_name() {
        let monitor = LogMonitor::<i64>::new(Duration::from_secs(2), 255);
        assert_eq!(
            format!("{}", monitor),
            "LogMonitor(log_interval: 2s, clock_check_mask: 255)"
        );
        assert_eq!(EnumerationMonitor::<i64>::name(&monitor), "LogMonitor");
    }

    #[test]
    fn test_tracks_last_value_and_resets_on_solve() {
        let mut monitor = LogMonitor::<i64>::new(Duration::from_secs(3600), 0);
        let stats = EnumerationStatistics {
            values_emitted: 1,
            ..Default::default()
        };
        monitor.on_solve(2);
        monitor.on_value_emitted(7, &stats);
        assert_eq!(monitor.last_value, Some(7));
        monitor.on_solve(2);
        assert_eq!(monitor.last_value, None);
    }

    #[test]
    fn test_zero_interval_logs_every_checked_emission() {
        let mut monitor = LogMonitor::<f64>::new(Duration::ZERO, 0);
        let stats = EnumerationStatistics::default();
        monitor.on_solve(1);
        let before = monitor.last_log_time;
        std::thread::sleep(Duration::from_millis(1));
        monitor.on_value_emitted(0.5, &stats);
        assert!(monitor.last_log_time > before);
        monitor.on_exhausted(&stats);
    }
}
