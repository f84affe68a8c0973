//! Subcommand implementations.

mod replay;
mod self_check;
mod show_map;
mod snapshot;

pub use replay::Replay;
pub use self_check::SelfCheck;
pub use show_map::ShowMap;
pub use snapshot::Snapshot;
