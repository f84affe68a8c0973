//! Session orchestration for the deterministic simulation.
//!
//! This crate wraps `game-core` for embedding: a [`Session`] owns one
//! generated world, feeds player intents through the engine one at a time,
//! and exposes read-only [`SessionSnapshot`]s for a presentation layer to
//! render after each resolved intent. The offline [`selfcheck`] entry point
//! validates generator and spawner output without touching a live session.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session lifecycle and intent application
//! - [`snapshot`] exposes the read model downstream clients consume
//! - [`selfcheck`] provides the offline generation verifier
pub mod selfcheck;
pub mod session;
pub mod snapshot;

mod error;

pub use error::{Result, RuntimeError};
pub use selfcheck::{SelfCheckReport, run_self_check};
pub use session::{Session, TurnReport};
pub use snapshot::{ActorView, ItemView, SessionSnapshot};
