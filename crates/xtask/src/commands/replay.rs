//! Replay a scripted intent sequence
//!
//! Accepts a compact movement script (`n`, `s`, `e`, `w` for steps, `p` for
//! pickup, `1`-`3` for item use), applies it to a fresh session, and prints
//! the message log plus the final state digest. Two runs of the same seed
//! and script must print the same digest.

use anyhow::{Result, bail};
use clap::Parser;
use console::style;

use game_core::{CardinalDirection, Intent, state_digest};
use runtime::Session;

/// Replay a scripted intent sequence and print the state digest
#[derive(Parser)]
pub struct Replay {
    /// Seed to generate from
    #[arg(value_name = "SEED")]
    seed: i64,

    /// Intent script, e.g. "eeesssp2w"
    #[arg(value_name = "SCRIPT")]
    script: String,

    /// Suppress per-intent message output
    #[arg(short, long)]
    quiet: bool,
}

impl Replay {
    pub fn execute(self) -> Result<()> {
        let script = parse_script(&self.script)?;
        let mut session = Session::new(self.seed);

        for (step, intent) in script.into_iter().enumerate() {
            let report = session.apply(intent)?;
            if !self.quiet {
                for message in &report.messages {
                    println!("[{step:>3}] {message}");
                }
            }
        }

        let state = session.state();
        println!(
            "turn {} | kills {} | hp {}/{} | game_over {}",
            state.turn.turn,
            state.turn.kills,
            state.entities.player.health.current,
            state.entities.player.health.maximum,
            session.is_game_over(),
        );
        println!("digest {}", style(hex::encode(state_digest(state))).cyan());
        Ok(())
    }
}

fn parse_script(script: &str) -> Result<Vec<Intent>> {
    script
        .chars()
        .map(|ch| match ch {
            'n' => Ok(Intent::Move(CardinalDirection::North)),
            's' => Ok(Intent::Move(CardinalDirection::South)),
            'e' => Ok(Intent::Move(CardinalDirection::East)),
            'w' => Ok(Intent::Move(CardinalDirection::West)),
            'p' => Ok(Intent::PickUp),
            '1'..='3' => Ok(Intent::UseItem(ch as usize - '1' as usize)),
            other => bail!("unknown script character {other:?}"),
        })
        .collect()
}
