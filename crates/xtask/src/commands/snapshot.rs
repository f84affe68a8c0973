//! Dump a session snapshot as JSON
//!
//! Creates a fresh session for a seed and prints the read model exactly as
//! a client would receive it. Good for eyeballing wire payloads and for
//! diffing generator output across code changes.

use anyhow::Result;
use clap::Parser;

use runtime::Session;

/// Dump a session snapshot as JSON
#[derive(Parser)]
pub struct Snapshot {
    /// Seed to generate from
    #[arg(value_name = "SEED")]
    seed: i64,

    /// Pretty-print the JSON
    #[arg(short, long)]
    pretty: bool,
}

impl Snapshot {
    pub fn execute(self) -> Result<()> {
        let session = Session::new(self.seed);
        let snapshot = session.snapshot();

        let json = if self.pretty {
            serde_json::to_string_pretty(&snapshot)?
        } else {
            snapshot.to_json()?
        };
        println!("{json}");
        Ok(())
    }
}
