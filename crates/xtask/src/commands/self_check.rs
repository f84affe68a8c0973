//! Audit generation and spawning output
//!
//! Runs the offline self-check for a range of seeds and summarizes the
//! findings, flagging any seed whose output violates the structural checks.

use anyhow::{Result, bail};
use clap::Parser;
use console::style;

use runtime::run_self_check;

/// Audit generation and spawning for one or more seeds
#[derive(Parser)]
pub struct SelfCheck {
    /// First seed to check
    #[arg(value_name = "SEED", default_value_t = 1)]
    seed: i64,

    /// Number of consecutive seeds to check
    #[arg(short, long, value_name = "COUNT", default_value_t = 1)]
    count: u32,
}

impl SelfCheck {
    pub fn execute(self) -> Result<()> {
        let mut failures = 0u32;

        for seed in self.seed..self.seed + i64::from(self.count) {
            let report = run_self_check(seed);
            let verdict = if report.passed {
                style("ok").green()
            } else {
                failures += 1;
                style("FAIL").red().bold()
            };
            println!(
                "seed {:>12}: {:>4}  rooms={:<2} floor={:<4} enemies={:<2} items={} items_on_walls={}",
                seed,
                verdict,
                report.rooms,
                report.floor_tiles,
                report.enemies,
                report.items,
                report.items_on_walls,
            );
        }

        if failures > 0 {
            bail!("{failures} seed(s) failed the self-check");
        }
        Ok(())
    }
}
