//! Per-player state for an arcade shoot-em-up.
//!
//! One [`PlayerState`] per player, owned by the match controller. It tracks
//! the score, the remaining lives, the five-slot power-up cycle, and the
//! Playing/Destroyed lifecycle. Gameplay code (collision handlers, capsule
//! pickups, the HUD) drives it through the methods on [`PlayerState`]; the
//! host networking layer observes it through the [`replication`] module,
//! which defines exactly which fields leave the local machine.
//!
//! Rendering, input, actor spawning, and the replication transport itself
//! all live with the host engine, not here.

pub mod config;
pub mod entities;
pub mod player;
pub mod replication;

pub use config::PlayerConfig;
pub use entities::{PlayerStatus, PowerUp};
pub use player::PlayerState;
pub use replication::{ReplicatedState, ReplicationTracker};
