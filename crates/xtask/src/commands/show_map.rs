//! Render a generated dungeon as ASCII
//!
//! Prints the tile grid with entity overlays: `@` player, `d` drone,
//! `+`/`*`/`!` for medkits, batteries and EMP charges.

use anyhow::Result;
use clap::Parser;
use console::style;

use game_core::{ItemKind, Position};
use runtime::Session;

/// Render a generated dungeon as ASCII
#[derive(Parser)]
pub struct ShowMap {
    /// Seed to generate from
    #[arg(value_name = "SEED")]
    seed: i64,

    /// Only draw tiles the player has explored
    #[arg(short, long)]
    explored_only: bool,
}

impl ShowMap {
    pub fn execute(self) -> Result<()> {
        let session = Session::new(self.seed);
        let state = session.state();
        let grid = &state.world.grid;

        println!(
            "seed {} | {} rooms, {} floor tiles, {} drones, {} items",
            style(self.seed).cyan(),
            state.world.rooms.len(),
            grid.floor_count(),
            state.entities.enemies.len(),
            state.entities.items.len(),
        );

        for y in 0..grid.height() {
            let mut row = String::with_capacity(grid.width() as usize);
            for x in 0..grid.width() {
                let p = Position::new(x, y);
                if self.explored_only && !state.world.visibility.is_explored(p) {
                    row.push(' ');
                    continue;
                }
                row.push(glyph_at(state, p));
            }
            println!("{row}");
        }
        Ok(())
    }
}

fn glyph_at(state: &game_core::GameState, p: Position) -> char {
    if state.entities.player.position == p {
        return '@';
    }
    if state.entities.enemy_at(p).is_some() {
        return 'd';
    }
    if let Some(item) = state.entities.item_at(p) {
        return match item.kind {
            ItemKind::Medkit => '+',
            ItemKind::Battery => '*',
            ItemKind::Emp => '!',
        };
    }
    if state.world.grid.is_floor(p) { '.' } else { '#' }
}
